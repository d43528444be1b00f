//! The in-progress email and its submission status.

use std::path::PathBuf;

use crate::convert;
use crate::i18n;

use super::attachment::AttachmentList;
use super::preview::{Preview, PreviewAttachment};

/// How a submission settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The backend accepted the request.
    Success,
    /// The request failed (network error, timeout, non-2xx status).
    Failure(String),
}

/// Single source of truth for the in-progress email.
///
/// Field setters are plain assignments — presence of subject and recipients
/// is enforced at the submission boundary, not here. The `submitting` flag
/// is owned by [`begin_submission`](Self::begin_submission) /
/// [`resolve_submission`](Self::resolve_submission) so at most one
/// submission can be in flight at a time.
#[derive(Debug)]
pub struct Composition {
    /// Subject line.
    pub subject: String,

    /// Rich-text body as the HTML string the editor emits. Consumed
    /// verbatim; converted to markup only at preview/submission time.
    pub body_html: String,

    /// Comma-separated recipient list. Kept as an opaque string end to
    /// end — never split, trimmed, or validated per address.
    pub recipients: String,

    /// Attached files with their descriptions.
    pub attachments: AttachmentList,

    submitting: bool,
    status_message: Option<String>,
}

impl Composition {
    /// Create an empty composition. Image previews go under `preview_dir`.
    pub fn new(preview_dir: PathBuf) -> Self {
        Self {
            subject: String::new(),
            body_html: String::new(),
            recipients: String::new(),
            attachments: AttachmentList::new(preview_dir),
            submitting: false,
            status_message: None,
        }
    }

    /// Whether a submission is currently in flight.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// The last submission status message, if any.
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// Mark the composition as submitting.
    ///
    /// Returns `false` without changing anything if a submission is already
    /// in flight; otherwise sets the flag, clears the previous status
    /// message and returns `true`.
    pub fn begin_submission(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        self.status_message = None;
        true
    }

    /// Reduce a settled submission back into the composition.
    ///
    /// Success resets every field for the next email; failure leaves the
    /// draft untouched so the user can re-submit, and records the reason.
    pub fn resolve_submission(&mut self, outcome: SubmissionOutcome) {
        self.submitting = false;
        match outcome {
            SubmissionOutcome::Success => {
                self.subject.clear();
                self.body_html.clear();
                self.recipients.clear();
                self.attachments.clear();
                self.status_message = Some(i18n::status_sent().to_string());
            }
            SubmissionOutcome::Failure(reason) => {
                self.status_message = Some(format!("{}: {reason}", i18n::status_error()));
            }
        }
    }

    /// Derive the preview projection.
    ///
    /// The body is reconverted on every call (conversion is pure and cheap;
    /// caching would only invite staleness). Image attachments get their
    /// preview file created lazily here.
    pub fn preview(&mut self) -> Preview {
        let body_markup = convert::html_to_markup(&self.body_html);

        let mut attachments = Vec::with_capacity(self.attachments.len());
        for index in 0..self.attachments.len() {
            let preview_path = self.attachments.ensure_preview(index);
            if let Some(a) = self.attachments.get(index) {
                attachments.push(PreviewAttachment {
                    name: a.blob.name.clone(),
                    description: a.description.clone(),
                    size: a.blob.size(),
                    is_image: a.is_image(),
                    preview_path,
                });
            }
        }

        Preview {
            subject: self.subject.clone(),
            body_markup,
            recipients: self.recipients.clone(),
            attachments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::blob::FileBlob;

    fn comp() -> (Composition, tempfile::TempDir) {
        let dir = tempfile::tempdir().expect("tempdir");
        (Composition::new(dir.path().to_path_buf()), dir)
    }

    #[test]
    fn test_begin_submission_sets_flag_and_clears_status() {
        let (mut c, _dir) = comp();
        c.resolve_submission(SubmissionOutcome::Failure("boom".into()));
        assert!(c.status_message().is_some());

        assert!(c.begin_submission());
        assert!(c.is_submitting());
        assert!(c.status_message().is_none());
    }

    #[test]
    fn test_begin_submission_while_in_flight_is_rejected() {
        let (mut c, _dir) = comp();
        c.subject = "Hi".into();
        assert!(c.begin_submission());

        assert!(!c.begin_submission());
        assert!(c.is_submitting());
        assert_eq!(c.subject, "Hi");
    }

    #[test]
    fn test_success_resets_everything() {
        let (mut c, _dir) = comp();
        c.subject = "Hi".into();
        c.body_html = "<p>Hello</p>".into();
        c.recipients = "a@x.com,b@x.com".into();
        c.attachments
            .append(vec![FileBlob::new("r.txt", "text/plain", b"x".to_vec())]);

        assert!(c.begin_submission());
        c.resolve_submission(SubmissionOutcome::Success);

        assert!(!c.is_submitting());
        assert!(c.subject.is_empty());
        assert!(c.body_html.is_empty());
        assert!(c.recipients.is_empty());
        assert!(c.attachments.is_empty());
        assert!(c.status_message().is_some());
    }

    #[test]
    fn test_failure_leaves_draft_untouched_and_reports_reason() {
        let (mut c, _dir) = comp();
        c.subject = "Hi".into();
        c.body_html = "<p>Hello</p>".into();
        c.recipients = "a@x.com".into();
        c.attachments
            .append(vec![FileBlob::new("r.txt", "text/plain", b"x".to_vec())]);
        c.attachments.set_description(0, "report");

        assert!(c.begin_submission());
        c.resolve_submission(SubmissionOutcome::Failure("connection refused".into()));

        assert!(!c.is_submitting());
        assert_eq!(c.subject, "Hi");
        assert_eq!(c.body_html, "<p>Hello</p>");
        assert_eq!(c.recipients, "a@x.com");
        assert_eq!(c.attachments.len(), 1);
        assert_eq!(c.attachments.get(0).unwrap().description, "report");
        assert!(c.status_message().unwrap().contains("connection refused"));
    }

    #[test]
    fn test_preview_mirrors_fields_and_converts_body() {
        let (mut c, _dir) = comp();
        c.subject = "Hi".into();
        c.body_html = "<p>a <strong>bold</strong> word</p>".into();
        c.recipients = "a@x.com".into();

        let p = c.preview();
        assert_eq!(p.subject, "Hi");
        assert_eq!(p.recipients, "a@x.com");
        assert!(p.body_markup.contains("**bold**"));
    }

    #[test]
    fn test_preview_flags_images_and_only_images() {
        let (mut c, _dir) = comp();
        c.attachments.append(vec![
            FileBlob::new("A.png", "image/png", vec![1]),
            FileBlob::new("B.txt", "text/plain", vec![2]),
        ]);

        let p = c.preview();
        assert_eq!(p.attachments.len(), 2);
        assert!(p.attachments[0].is_image);
        assert!(p.attachments[0].preview_path.is_some());
        assert!(!p.attachments[1].is_image);
        assert!(p.attachments[1].preview_path.is_none());
    }

    #[test]
    fn test_preview_is_recomputed_not_cached() {
        let (mut c, _dir) = comp();
        c.body_html = "<p>one</p>".into();
        let first = c.preview();
        c.body_html = "<p>two</p>".into();
        let second = c.preview();

        assert!(first.body_markup.contains("one"));
        assert!(second.body_markup.contains("two"));
    }
}
