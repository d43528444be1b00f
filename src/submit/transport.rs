//! HTTP transport for the multipart submission.

use std::time::Duration;

use reqwest::blocking::multipart::{Form, Part};
use thiserror::Error;

use super::payload::Payload;

/// Errors a transport can report back to the pipeline.
///
/// These never escape the pipeline — they are reduced to a
/// `SubmissionOutcome::Failure` whose text the status line shows.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The client could not be constructed for the configured endpoint.
    #[error("invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    /// An attachment carried a MIME type the form encoder rejected.
    #[error("invalid attachment type '{0}'")]
    InvalidPart(String),

    /// Connection failure, DNS error, timeout — anything below HTTP.
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("server returned {status}: {detail}")]
    Status { status: u16, detail: String },
}

/// Carries a payload to the backend.
///
/// The seam between the pipeline and the outside world: production uses
/// [`HttpTransport`], tests substitute a recording fake.
pub trait Transport: Send + Sync {
    /// Deliver the payload. All-or-nothing from the caller's perspective.
    fn send(&self, payload: Payload) -> Result<(), TransportError>;
}

/// Multipart POST over HTTP, matching what the backend expects:
/// text fields `subject`, `body`, `recipients`, then a binary `files` part
/// and a parallel `descriptions` text part per attachment, in list order.
#[derive(Debug)]
pub struct HttpTransport {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Build a transport for `endpoint` with the given request timeout.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, TransportError> {
        let endpoint = endpoint.into();
        if endpoint.is_empty() {
            return Err(TransportError::InvalidEndpoint {
                endpoint,
                reason: "empty URL".to_string(),
            });
        }

        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::InvalidEndpoint {
                endpoint: endpoint.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self { endpoint, client })
    }

    /// The endpoint this transport posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn build_form(payload: Payload) -> Result<Form, TransportError> {
        let mut form = Form::new()
            .text("subject", payload.subject)
            .text("body", payload.body_markup)
            .text("recipients", payload.recipients);

        for part in payload.parts {
            let mime = part.mime;
            let file = Part::bytes(part.bytes)
                .file_name(part.name)
                .mime_str(&mime)
                .map_err(|_| TransportError::InvalidPart(mime))?;
            form = form.part("files", file).text("descriptions", part.description);
        }

        Ok(form)
    }
}

impl Transport for HttpTransport {
    fn send(&self, payload: Payload) -> Result<(), TransportError> {
        let form = Self::build_form(payload)?;

        tracing::debug!(endpoint = %self.endpoint, "Posting composition");
        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .text()
                .ok()
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| status.to_string());
            return Err(TransportError::Status {
                status: status.as_u16(),
                detail,
            });
        }

        tracing::info!(endpoint = %self.endpoint, "Backend accepted the email");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submit::payload::PayloadPart;

    fn payload_with_part(mime: &str) -> Payload {
        Payload {
            subject: "s".into(),
            body_markup: "b".into(),
            recipients: "r".into(),
            parts: vec![PayloadPart {
                name: "f.bin".into(),
                mime: mime.into(),
                bytes: vec![0u8, 1, 2],
                description: "d".into(),
            }],
        }
    }

    #[test]
    fn test_empty_endpoint_is_rejected() {
        let err = HttpTransport::new("", Duration::from_secs(1)).unwrap_err();
        assert!(matches!(err, TransportError::InvalidEndpoint { .. }));
    }

    #[test]
    fn test_form_accepts_regular_mime() {
        assert!(HttpTransport::build_form(payload_with_part("application/pdf")).is_ok());
    }

    #[test]
    fn test_form_rejects_malformed_mime() {
        let err = HttpTransport::build_form(payload_with_part("not a mime")).unwrap_err();
        assert!(matches!(err, TransportError::InvalidPart(_)));
    }

    #[test]
    fn test_unreachable_backend_is_a_network_error() {
        // Nothing listens on this port; connect must fail fast.
        let transport =
            HttpTransport::new("http://127.0.0.1:1/send", Duration::from_secs(1)).expect("build");
        let err = transport
            .send(Payload {
                subject: "s".into(),
                body_markup: "b".into(),
                recipients: "r".into(),
                parts: vec![],
            })
            .unwrap_err();
        assert!(matches!(err, TransportError::Network(_)));
    }
}
