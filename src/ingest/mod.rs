//! File ingestion: validation and embeddable encoding of uploaded cover
//! images and documents. Validation runs before any content read; the
//! expensive full read happens only in [`encode_to_embeddable`].

mod preview;

pub use preview::{PreviewHandle, PreviewStore};

use std::path::{Path, PathBuf};

use base64::Engine;
use thiserror::Error;

/// Accepted cover image media types.
pub const COVER_MEDIA_TYPES: &[&str] = &["image/jpeg", "image/jpg", "image/png", "image/webp"];

/// Accepted document media type.
pub const DOCUMENT_MEDIA_TYPE: &str = "application/pdf";

/// Cover uploads above this size are rejected.
pub const MAX_COVER_BYTES: u64 = 5 * 1024 * 1024;

/// Document uploads above this size are rejected.
pub const MAX_DOCUMENT_BYTES: u64 = 50 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Validation error: {0}")]
    Validation(String),
}

/// A raw file handle as yielded by the picker/drag-drop surface: name,
/// media type, size, and the location of the byte content.
#[derive(Debug, Clone)]
pub struct FileCandidate {
    pub name: String,
    pub mime_type: String,
    pub byte_size: u64,
    pub path: PathBuf,
}

impl FileCandidate {
    pub fn new(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        byte_size: u64,
        path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            byte_size,
            path: path.into(),
        }
    }

    /// Build a candidate from a path, taking the size from filesystem
    /// metadata and guessing the media type from the extension.
    pub async fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, IngestError> {
        let path = path.as_ref().to_path_buf();
        let metadata = tokio::fs::metadata(&path).await?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let mime_type = mime_guess::from_path(&path)
            .first()
            .map(|m| m.to_string())
            .unwrap_or_else(|| "application/octet-stream".to_string());

        Ok(Self {
            name,
            mime_type,
            byte_size: metadata.len(),
            path,
        })
    }
}

/// Pure predicate: the candidate is one of the accepted bitmap formats
/// and within the cover size ceiling.
pub fn validate_cover_candidate(file: &FileCandidate) -> bool {
    COVER_MEDIA_TYPES.contains(&file.mime_type.as_str()) && file.byte_size <= MAX_COVER_BYTES
}

/// Pure predicate: the candidate is a document within the document size ceiling.
pub fn validate_document_candidate(file: &FileCandidate) -> bool {
    file.mime_type == DOCUMENT_MEDIA_TYPE && file.byte_size <= MAX_DOCUMENT_BYTES
}

/// Validate-or-error form of [`validate_cover_candidate`] for save flows
/// that surface a user-visible notice.
pub fn ensure_cover_candidate(file: &FileCandidate) -> Result<(), IngestError> {
    if validate_cover_candidate(file) {
        Ok(())
    } else {
        Err(IngestError::Validation(format!(
            "{} is not an accepted cover image (JPEG, PNG, WebP up to 5 MiB)",
            file.name
        )))
    }
}

/// Validate-or-error form of [`validate_document_candidate`].
pub fn ensure_document_candidate(file: &FileCandidate) -> Result<(), IngestError> {
    if validate_document_candidate(file) {
        Ok(())
    } else {
        Err(IngestError::Validation(format!(
            "{} is not an accepted document (PDF up to 50 MiB)",
            file.name
        )))
    }
}

/// Self-describing embeddable encoding of a file's full content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedContent {
    pub mime_type: String,
    /// `data:<media type>;base64,<payload>`
    pub data_url: String,
}

/// Read the entire candidate and encode it for inline storage on a
/// record. A failed read propagates; no partial result is produced.
pub async fn encode_to_embeddable(file: &FileCandidate) -> Result<EncodedContent, IngestError> {
    let bytes = tokio::fs::read(&file.path).await?;
    let payload = base64::engine::general_purpose::STANDARD.encode(&bytes);

    Ok(EncodedContent {
        mime_type: file.mime_type.clone(),
        data_url: format!("data:{};base64,{payload}", file.mime_type),
    })
}
