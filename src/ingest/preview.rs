use bytes::Bytes;
use std::path::{Path, PathBuf};

use super::{FileCandidate, IngestError};

/// Local store for short-lived cover previews shown before final
/// encoding. Keys are UUIDs; the backing files are meaningless outside
/// the editing session that created them.
pub struct PreviewStore {
    base_path: PathBuf,
}

impl PreviewStore {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Result<Self, std::io::Error> {
        let base_path = base_path.as_ref().to_path_buf();
        std::fs::create_dir_all(&base_path)?;
        Ok(Self { base_path })
    }

    /// Copy the candidate's bytes into the preview area and hand out a handle.
    pub async fn create(&self, file: &FileCandidate) -> Result<PreviewHandle, IngestError> {
        let data = tokio::fs::read(&file.path).await?;
        self.put(Bytes::from(data)).await
    }

    /// Store raw preview bytes under a fresh key.
    pub async fn put(&self, data: Bytes) -> Result<PreviewHandle, IngestError> {
        let key = uuid::Uuid::new_v4().to_string();
        let path = self.base_path.join(&key);
        tokio::fs::write(&path, &data).await?;

        Ok(PreviewHandle {
            key,
            path,
            released: false,
        })
    }
}

/// Exclusive handle on a preview file. The owning editing session must
/// call [`PreviewHandle::release`] exactly once when the preview is no
/// longer shown; dropping an unreleased handle leaks the backing file
/// and is logged as a defect.
#[derive(Debug)]
pub struct PreviewHandle {
    key: String,
    path: PathBuf,
    released: bool,
}

impl PreviewHandle {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Delete the backing file. Consuming the handle makes a second
    /// release impossible.
    pub async fn release(mut self) -> Result<(), IngestError> {
        tokio::fs::remove_file(&self.path).await?;
        self.released = true;
        Ok(())
    }
}

impl Drop for PreviewHandle {
    fn drop(&mut self) {
        if !self.released {
            tracing::warn!(key = %self.key, "Preview handle dropped without release, leaking preview file");
        }
    }
}
