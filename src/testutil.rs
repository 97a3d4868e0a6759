//! Shared test helpers.

use crate::auth::StaticCredentials;
use crate::config::Config;
use crate::Library;

/// Create a Library backed by a temporary directory.
pub fn test_library(temp_dir: &tempfile::TempDir) -> Library {
    let config = Config {
        data_dir: temp_dir.path().join("data").to_string_lossy().to_string(),
        preview_dir: temp_dir
            .path()
            .join("previews")
            .to_string_lossy()
            .to_string(),
        credentials: StaticCredentials::default(),
    };

    Library::open(config).expect("Failed to open test library")
}
