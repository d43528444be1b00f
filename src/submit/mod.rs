//! Submission of a composition to the backend.
//!
//! Layered like the data flow: a [`payload::Payload`] snapshot is taken
//! from the composition, a [`transport::Transport`] carries it to the
//! backend, and the [`pipeline::SubmissionPipeline`] coordinates the two
//! around the composition's in-flight flag.

pub mod payload;
pub mod pipeline;
pub mod transport;

pub use payload::Payload;
pub use pipeline::{SubmissionPipeline, SubmitStart};
pub use transport::{HttpTransport, Transport, TransportError};
