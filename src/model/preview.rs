//! Read-only preview projection of a composition.
//!
//! The preview is never stored — it is recomputed from the composition on
//! every render, so it can never go stale.

use std::path::PathBuf;

/// One attachment row in the preview pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewAttachment {
    /// Original file name.
    pub name: String,
    /// The user's description for this attachment.
    pub description: String,
    /// Content size in bytes.
    pub size: u64,
    /// Whether the attachment is an image.
    pub is_image: bool,
    /// Path of the transient preview file (images only).
    pub preview_path: Option<PathBuf>,
}

/// Snapshot of what the composed email will look like.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    /// Subject line, verbatim.
    pub subject: String,
    /// Body converted from HTML to the transport markup.
    pub body_markup: String,
    /// Raw comma-separated recipient string, verbatim.
    pub recipients: String,
    /// Attachment rows in list order.
    pub attachments: Vec<PreviewAttachment>,
}
