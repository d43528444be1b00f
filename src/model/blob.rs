//! Raw file blobs attached to a composition.

use std::path::Path;

use crate::error::{OutboxError, Result};

/// A file's binary content together with its name and MIME type.
///
/// This is the unit the file picker hands to the attachment list — the
/// whole content is held in memory so the composition stays self-contained
/// once a file is attached (later edits or deletion of the source file do
/// not affect the draft).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileBlob {
    /// Original file name (no directory components).
    pub name: String,

    /// MIME type, e.g. `"image/png"`, guessed from the file extension.
    /// Falls back to `"application/octet-stream"`.
    pub mime: String,

    /// Raw file content.
    pub bytes: Vec<u8>,
}

impl FileBlob {
    /// Create a blob from in-memory parts.
    pub fn new(
        name: impl Into<String>,
        mime: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            bytes: bytes.into(),
        }
    }

    /// Read a file from disk into a blob, guessing its MIME type from the
    /// extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(OutboxError::AttachmentNotFound(path.to_path_buf()));
        }
        if !path.is_file() {
            return Err(OutboxError::NotAFile(path.to_path_buf()));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .ok_or_else(|| OutboxError::InvalidPath(path.display().to_string()))?;

        let mime = mime_guess::from_path(path)
            .first_or_octet_stream()
            .essence_str()
            .to_string();

        let bytes = std::fs::read(path).map_err(|e| OutboxError::io(path, e))?;

        Ok(Self { name, mime, bytes })
    }

    /// Whether this blob is an image (MIME type prefix check).
    pub fn is_image(&self) -> bool {
        self.mime.starts_with("image/")
    }

    /// Content size in bytes.
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}
