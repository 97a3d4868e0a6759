use thiserror::Error;

use crate::auth::StaticCredentials;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the embedded database
    pub data_dir: String,
    /// Directory for ephemeral cover previews
    pub preview_dir: String,
    /// Admin credentials checked by the login surface
    pub credentials: StaticCredentials,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: "./data".to_string(),
            preview_dir: "./previews".to_string(),
            credentials: StaticCredentials::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let defaults = StaticCredentials::default();

        let data_dir = std::env::var("DATA_DIR").unwrap_or_else(|_| "./data".to_string());
        let preview_dir =
            std::env::var("PREVIEW_DIR").unwrap_or_else(|_| "./previews".to_string());
        let username = std::env::var("ADMIN_USERNAME").unwrap_or(defaults.username);
        let password = std::env::var("ADMIN_PASSWORD").unwrap_or(defaults.password);

        let config = Config {
            data_dir,
            preview_dir,
            credentials: StaticCredentials { username, password },
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.data_dir.is_empty() {
            return Err(ConfigError::ValidationError(
                "DATA_DIR cannot be empty".to_string(),
            ));
        }

        if self.preview_dir.is_empty() {
            return Err(ConfigError::ValidationError(
                "PREVIEW_DIR cannot be empty".to_string(),
            ));
        }

        if self.credentials.username.is_empty() {
            return Err(ConfigError::ValidationError(
                "ADMIN_USERNAME cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
