//! The multipart payload snapshot.

use crate::convert;
use crate::model::composition::Composition;

/// One `files` + `descriptions` pair of the outbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadPart {
    /// Original file name, preserved on the wire.
    pub name: String,
    /// Original MIME type, preserved on the wire.
    pub mime: String,
    /// Raw file content.
    pub bytes: Vec<u8>,
    /// The description paired positionally with this file.
    pub description: String,
}

/// Everything the backend receives, frozen at submit time.
///
/// The snapshot is taken at the instant the submission starts; edits made
/// while the request is in flight apply to the next composition cycle, not
/// to this payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    /// Subject line, verbatim.
    pub subject: String,
    /// Body converted from HTML to the transport markup.
    pub body_markup: String,
    /// Raw comma-separated recipient string — no splitting or trimming.
    pub recipients: String,
    /// Attachment parts in list order.
    pub parts: Vec<PayloadPart>,
}

impl Payload {
    /// Snapshot a composition: convert the body and pair each blob with its
    /// description in list order.
    pub fn snapshot(composition: &Composition) -> Self {
        let parts = composition
            .attachments
            .iter()
            .map(|a| PayloadPart {
                name: a.blob.name.clone(),
                mime: a.blob.mime.clone(),
                bytes: a.blob.bytes.clone(),
                description: a.description.clone(),
            })
            .collect();

        Self {
            subject: composition.subject.clone(),
            body_markup: convert::html_to_markup(&composition.body_html),
            recipients: composition.recipients.clone(),
            parts,
        }
    }
}
