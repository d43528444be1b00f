//! Global application state for the TUI (the "Model" in Elm architecture).

use std::time::Instant;

use crate::i18n;
use crate::model::blob::FileBlob;
use crate::model::composition::Composition;
use crate::submit::{SubmissionPipeline, SubmitStart};

/// Which form field currently has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Subject,
    Recipients,
    Body,
    Attachments,
}

/// Complete TUI state.
pub struct App {
    // ── Data ──────────────────────────────────
    /// The in-progress email.
    pub composition: Composition,
    /// Coordinates the one outstanding submission.
    pub pipeline: SubmissionPipeline,
    /// Endpoint shown in the header bar.
    pub endpoint: String,

    // ── UI state ──────────────────────────────
    /// Focused form field.
    pub focus: FormField,
    /// Live preview pane visible?
    pub show_preview: bool,
    /// Help popup visible?
    pub show_help: bool,
    /// Attach-file popup visible?
    pub show_attach: bool,
    /// Path being typed in the attach popup.
    pub attach_input: String,
    /// Selected row in the attachment list.
    pub attachment_selected: usize,
    /// Keys currently edit the selected attachment's description?
    pub editing_description: bool,
    /// Scroll offset for the preview pane.
    pub preview_scroll: usize,
    /// Animation frame for the sending overlay, advanced on every tick.
    pub busy_frame: usize,

    // ── Lifecycle ─────────────────────────────
    pub should_quit: bool,
    /// Transient notice (validation hints, attach results) and the instant
    /// it was set. Distinct from the composition's own status message.
    pub notice: Option<(String, Instant)>,
}

impl App {
    /// Create the app around an empty composition.
    pub fn new(
        composition: Composition,
        pipeline: SubmissionPipeline,
        endpoint: String,
        show_preview: bool,
    ) -> Self {
        Self {
            composition,
            pipeline,
            endpoint,
            focus: FormField::Subject,
            show_preview,
            show_help: false,
            show_attach: false,
            attach_input: String::new(),
            attachment_selected: 0,
            editing_description: false,
            preview_scroll: 0,
            busy_frame: 0,
            should_quit: false,
            notice: None,
        }
    }

    /// Set a transient notice that auto-clears after a few seconds.
    pub fn set_notice(&mut self, msg: &str) {
        self.notice = Some((msg.to_string(), Instant::now()));
    }

    /// Called every tick: drains a settled submission and expires notices.
    pub fn tick(&mut self) {
        self.pipeline.poll(&mut self.composition);
        self.busy_frame = self.busy_frame.wrapping_add(1);

        if let Some((_, when)) = &self.notice {
            if when.elapsed().as_secs() >= 5 {
                self.notice = None;
            }
        }

        // The success reset may have emptied the list under the cursor.
        self.clamp_selection();
    }

    /// Trigger a submission; rejections surface as a transient notice.
    pub fn submit(&mut self) {
        match self.pipeline.submit(&mut self.composition) {
            SubmitStart::Started => {}
            SubmitStart::MissingSubject => self.set_notice(i18n::hint_missing_subject()),
            SubmitStart::MissingRecipients => self.set_notice(i18n::hint_missing_recipients()),
            SubmitStart::AlreadyInFlight => self.set_notice(i18n::hint_already_in_flight()),
        }
    }

    /// Attach the file whose path is in the attach popup input.
    pub fn attach_from_input(&mut self) {
        let path = self.attach_input.trim().to_string();
        if path.is_empty() {
            return;
        }

        match FileBlob::from_path(std::path::Path::new(&path)) {
            Ok(blob) => {
                let name = blob.name.clone();
                self.composition.attachments.append(vec![blob]);
                self.attachment_selected = self.composition.attachments.len() - 1;
                self.set_notice(&format!("{}: {name}", i18n::msg_attached()));
                self.attach_input.clear();
                self.show_attach = false;
            }
            Err(e) => {
                tracing::warn!(path = %path, error = %e, "Attach failed");
                self.set_notice(&e.to_string());
            }
        }
    }

    /// Remove the selected attachment.
    pub fn remove_selected(&mut self) {
        if self.composition.attachments.is_empty() {
            return;
        }
        self.composition.attachments.remove(self.attachment_selected);
        self.clamp_selection();
        self.set_notice(i18n::msg_attachment_removed());
    }

    /// Append `c` to the selected attachment's description.
    pub fn push_description_char(&mut self, c: char) {
        let index = self.attachment_selected;
        if let Some(att) = self.composition.attachments.get(index) {
            let mut text = att.description.clone();
            text.push(c);
            self.composition.attachments.set_description(index, text);
        }
    }

    /// Delete the last character of the selected attachment's description.
    pub fn pop_description_char(&mut self) {
        let index = self.attachment_selected;
        if let Some(att) = self.composition.attachments.get(index) {
            let mut text = att.description.clone();
            text.pop();
            self.composition.attachments.set_description(index, text);
        }
    }

    /// Keep the attachment cursor inside the list.
    fn clamp_selection(&mut self) {
        let len = self.composition.attachments.len();
        if len == 0 {
            self.attachment_selected = 0;
            self.editing_description = false;
        } else if self.attachment_selected >= len {
            self.attachment_selected = len - 1;
        }
    }

    /// The line the status bar should show, if any: a transient notice
    /// wins over the composition's last submission status.
    pub fn status_line(&self) -> Option<(&str, bool)> {
        if let Some((msg, _)) = &self.notice {
            return Some((msg.as_str(), true));
        }
        self.composition.status_message().map(|m| (m, false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submit::{Payload, Transport, TransportError};
    use std::sync::Arc;

    struct NullTransport;

    impl Transport for NullTransport {
        fn send(&self, _payload: Payload) -> Result<(), TransportError> {
            Ok(())
        }
    }

    fn app() -> (App, tempfile::TempDir) {
        let dir = tempfile::tempdir().expect("tempdir");
        let composition = Composition::new(dir.path().to_path_buf());
        let pipeline = SubmissionPipeline::new(Arc::new(NullTransport));
        (
            App::new(composition, pipeline, "http://localhost/send".into(), true),
            dir,
        )
    }

    #[test]
    fn test_submit_with_empty_subject_sets_notice_only() {
        let (mut a, _dir) = app();
        a.submit();
        assert!(!a.composition.is_submitting());
        assert!(a.notice.is_some());
    }

    #[test]
    fn test_remove_clamps_selection() {
        let (mut a, _dir) = app();
        a.composition.attachments.append(vec![
            FileBlob::new("a", "text/plain", vec![1]),
            FileBlob::new("b", "text/plain", vec![2]),
        ]);
        a.attachment_selected = 1;
        a.remove_selected();
        assert_eq!(a.attachment_selected, 0);
        a.remove_selected();
        assert_eq!(a.attachment_selected, 0);
        assert!(a.composition.attachments.is_empty());
    }

    #[test]
    fn test_description_editing_targets_selected_row() {
        let (mut a, _dir) = app();
        a.composition.attachments.append(vec![
            FileBlob::new("a", "text/plain", vec![1]),
            FileBlob::new("b", "text/plain", vec![2]),
        ]);
        a.attachment_selected = 1;
        a.push_description_char('h');
        a.push_description_char('i');
        a.pop_description_char();

        assert_eq!(a.composition.attachments.get(0).unwrap().description, "");
        assert_eq!(a.composition.attachments.get(1).unwrap().description, "h");
    }

    #[test]
    fn test_notice_wins_over_status_message() {
        let (mut a, _dir) = app();
        a.composition
            .resolve_submission(crate::model::composition::SubmissionOutcome::Failure(
                "x".into(),
            ));
        assert!(!a.status_line().unwrap().1);
        a.set_notice("look here");
        assert_eq!(a.status_line().unwrap().0, "look here");
    }
}
