//! The submission state machine.
//!
//! `Idle → InFlight` happens in [`SubmissionPipeline::submit`]: the
//! composition is flagged, a payload snapshot is taken, and a worker thread
//! carries it to the transport. `InFlight → Resolved → Idle` happens in
//! [`SubmissionPipeline::poll`] on the UI tick (or [`wait`] for headless
//! callers), which reduces the settled outcome back into the composition.
//! `Resolved` is not an observable state — it is the instant of reduction.
//!
//! [`wait`]: SubmissionPipeline::wait

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;

use crate::i18n;
use crate::model::composition::{Composition, SubmissionOutcome};

use super::payload::Payload;
use super::transport::Transport;

/// How a submit action was received.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStart {
    /// The submission is in flight.
    Started,
    /// Rejected: the subject is empty.
    MissingSubject,
    /// Rejected: the recipient list is empty.
    MissingRecipients,
    /// Rejected: a submission is already in flight (no queueing).
    AlreadyInFlight,
}

/// Coordinates at most one in-flight submission for a composition.
pub struct SubmissionPipeline {
    transport: Arc<dyn Transport>,
    in_flight: Option<Receiver<SubmissionOutcome>>,
}

impl SubmissionPipeline {
    /// Create a pipeline over the given transport.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            in_flight: None,
        }
    }

    /// Try to start a submission.
    ///
    /// Validation (presence of subject and recipients, empty-string check
    /// only) happens before any state transition; a rejected submit leaves
    /// the composition byte-for-byte unchanged and builds no payload.
    ///
    /// On `Started` the payload is a snapshot taken now: the user may keep
    /// editing while the request is in flight, and those edits belong to
    /// the next composition cycle.
    pub fn submit(&mut self, composition: &mut Composition) -> SubmitStart {
        if composition.is_submitting() {
            return SubmitStart::AlreadyInFlight;
        }
        if composition.subject.is_empty() {
            return SubmitStart::MissingSubject;
        }
        if composition.recipients.is_empty() {
            return SubmitStart::MissingRecipients;
        }
        if !composition.begin_submission() {
            return SubmitStart::AlreadyInFlight;
        }

        let payload = Payload::snapshot(composition);
        let transport = Arc::clone(&self.transport);
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let outcome = match transport.send(payload) {
                Ok(()) => SubmissionOutcome::Success,
                Err(e) => SubmissionOutcome::Failure(e.to_string()),
            };
            // If the composer was discarded mid-flight nobody is listening;
            // dropping the outcome is the required safe no-op.
            let _ = tx.send(outcome);
        });

        self.in_flight = Some(rx);
        tracing::info!("Submission started");
        SubmitStart::Started
    }

    /// Drain a settled outcome into the composition, if one has arrived.
    ///
    /// Called on every UI tick. Returns `true` when a submission resolved
    /// during this call.
    pub fn poll(&mut self, composition: &mut Composition) -> bool {
        let Some(rx) = &self.in_flight else {
            return false;
        };

        match rx.try_recv() {
            Ok(outcome) => {
                self.in_flight = None;
                composition.resolve_submission(outcome);
                true
            }
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Disconnected) => {
                // Worker died without reporting (panic in the transport).
                self.in_flight = None;
                composition.resolve_submission(SubmissionOutcome::Failure(
                    i18n::err_worker_gone().to_string(),
                ));
                true
            }
        }
    }

    /// Block until the in-flight submission (if any) resolves, returning
    /// the outcome after reducing it into the composition.
    ///
    /// Used by the headless `send` command; the TUI uses [`poll`] instead.
    ///
    /// [`poll`]: Self::poll
    pub fn wait(&mut self, composition: &mut Composition) -> Option<SubmissionOutcome> {
        let rx = self.in_flight.take()?;

        let outcome = rx.recv().unwrap_or_else(|_| {
            SubmissionOutcome::Failure(i18n::err_worker_gone().to_string())
        });
        composition.resolve_submission(outcome.clone());
        Some(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::blob::FileBlob;
    use crate::submit::transport::TransportError;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::{Duration, Instant};

    /// Transport that records payloads and answers from a canned script.
    struct FakeTransport {
        payloads: Mutex<Vec<Payload>>,
        fail_with: Option<String>,
        sends: AtomicUsize,
    }

    impl FakeTransport {
        fn ok() -> Self {
            Self {
                payloads: Mutex::new(Vec::new()),
                fail_with: None,
                sends: AtomicUsize::new(0),
            }
        }

        fn failing(reason: &str) -> Self {
            Self {
                fail_with: Some(reason.to_string()),
                ..Self::ok()
            }
        }
    }

    impl Transport for FakeTransport {
        fn send(&self, payload: Payload) -> Result<(), TransportError> {
            self.sends.fetch_add(1, Ordering::SeqCst);
            self.payloads.lock().unwrap().push(payload);
            match &self.fail_with {
                None => Ok(()),
                Some(reason) => Err(TransportError::Network(reason.clone())),
            }
        }
    }

    /// Transport that blocks until released, to hold a submission in flight.
    struct GatedTransport {
        gate: Mutex<mpsc::Receiver<()>>,
        payloads: Mutex<Vec<Payload>>,
        sends: AtomicUsize,
    }

    impl GatedTransport {
        fn new() -> (Arc<Self>, mpsc::Sender<()>) {
            let (tx, rx) = mpsc::channel();
            (
                Arc::new(Self {
                    gate: Mutex::new(rx),
                    payloads: Mutex::new(Vec::new()),
                    sends: AtomicUsize::new(0),
                }),
                tx,
            )
        }
    }

    impl Transport for GatedTransport {
        fn send(&self, payload: Payload) -> Result<(), TransportError> {
            self.sends.fetch_add(1, Ordering::SeqCst);
            self.payloads.lock().unwrap().push(payload);
            let _ = self.gate.lock().unwrap().recv();
            Ok(())
        }
    }

    fn comp() -> (Composition, tempfile::TempDir) {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut c = Composition::new(dir.path().to_path_buf());
        c.subject = "Hi".into();
        c.recipients = "a@x.com,b@x.com".into();
        c.body_html = "<p>Hello</p>".into();
        (c, dir)
    }

    fn poll_until_resolved(pipeline: &mut SubmissionPipeline, c: &mut Composition) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while !pipeline.poll(c) {
            assert!(Instant::now() < deadline, "submission never resolved");
            thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_empty_subject_blocks_before_any_transition() {
        let (mut c, _dir) = comp();
        c.subject.clear();
        let transport = Arc::new(FakeTransport::ok());
        let mut pipeline = SubmissionPipeline::new(Arc::clone(&transport) as Arc<dyn Transport>);

        assert_eq!(pipeline.submit(&mut c), SubmitStart::MissingSubject);
        assert!(!c.is_submitting());
        assert_eq!(transport.sends.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_empty_recipients_blocks_before_any_transition() {
        let (mut c, _dir) = comp();
        c.recipients.clear();
        let transport = Arc::new(FakeTransport::ok());
        let mut pipeline = SubmissionPipeline::new(Arc::clone(&transport) as Arc<dyn Transport>);

        assert_eq!(pipeline.submit(&mut c), SubmitStart::MissingRecipients);
        assert!(!c.is_submitting());
    }

    #[test]
    fn test_success_resolves_and_resets() {
        let (mut c, _dir) = comp();
        let transport = Arc::new(FakeTransport::ok());
        let mut pipeline = SubmissionPipeline::new(Arc::clone(&transport) as Arc<dyn Transport>);

        assert_eq!(pipeline.submit(&mut c), SubmitStart::Started);
        assert!(c.is_submitting());
        poll_until_resolved(&mut pipeline, &mut c);

        assert!(!c.is_submitting());
        assert!(c.subject.is_empty());
        assert!(c.recipients.is_empty());
        assert_eq!(transport.sends.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_failure_keeps_draft_and_surfaces_reason() {
        let (mut c, _dir) = comp();
        let transport = Arc::new(FakeTransport::failing("connection refused"));
        let mut pipeline = SubmissionPipeline::new(Arc::clone(&transport) as Arc<dyn Transport>);

        assert_eq!(pipeline.submit(&mut c), SubmitStart::Started);
        poll_until_resolved(&mut pipeline, &mut c);

        assert!(!c.is_submitting());
        assert_eq!(c.subject, "Hi");
        assert_eq!(c.recipients, "a@x.com,b@x.com");
        assert!(c.status_message().unwrap().contains("connection refused"));
    }

    #[test]
    fn test_second_submit_while_in_flight_is_rejected() {
        let (mut c, _dir) = comp();
        let (transport, release) = GatedTransport::new();
        let mut pipeline = SubmissionPipeline::new(Arc::clone(&transport) as Arc<dyn Transport>);

        assert_eq!(pipeline.submit(&mut c), SubmitStart::Started);
        assert_eq!(pipeline.submit(&mut c), SubmitStart::AlreadyInFlight);
        assert_eq!(
            transport.sends.load(Ordering::SeqCst),
            1,
            "no second payload may be built"
        );

        release.send(()).expect("release worker");
        poll_until_resolved(&mut pipeline, &mut c);
        assert!(!c.is_submitting());
    }

    #[test]
    fn test_edits_during_flight_do_not_touch_the_payload() {
        let (mut c, _dir) = comp();
        let (transport, release) = GatedTransport::new();
        let mut pipeline = SubmissionPipeline::new(Arc::clone(&transport) as Arc<dyn Transport>);

        assert_eq!(pipeline.submit(&mut c), SubmitStart::Started);

        // Editing while in flight is allowed; only a second submit is not.
        c.subject = "Edited".into();
        c.attachments
            .append(vec![FileBlob::new("late.txt", "text/plain", b"z".to_vec())]);

        release.send(()).expect("release worker");
        poll_until_resolved(&mut pipeline, &mut c);

        // The wire saw the snapshot, not the edits.
        let payloads = transport.payloads.lock().unwrap();
        assert_eq!(payloads.len(), 1);
        assert_eq!(payloads[0].subject, "Hi");
        assert!(payloads[0].parts.is_empty());

        // Success resets the whole draft, including the mid-flight edits.
        assert!(c.subject.is_empty());
        assert!(c.attachments.is_empty());
    }

    #[test]
    fn test_wait_blocks_until_resolution() {
        let (mut c, _dir) = comp();
        let transport = Arc::new(FakeTransport::ok());
        let mut pipeline = SubmissionPipeline::new(transport as Arc<dyn Transport>);

        assert_eq!(pipeline.submit(&mut c), SubmitStart::Started);
        assert_eq!(pipeline.wait(&mut c), Some(SubmissionOutcome::Success));
        assert!(!c.is_submitting());

        // Nothing left in flight.
        assert_eq!(pipeline.wait(&mut c), None);
        assert!(!pipeline.poll(&mut c));
    }
}
