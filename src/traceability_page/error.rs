//! Error types for the traceability page.

use thiserror::Error;

/// Errors that can occur while driving the traceability page.
///
/// A lookup miss is not an error — it surfaces as a destructive
/// notification and a cleared selection.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TraceabilityError {
    /// The page session returned a reply variant the client did not ask for.
    #[error("Unexpected reply from traceability session: {0}")]
    UnexpectedReply(String),

    /// An error occurred while communicating with the page actor.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for TraceabilityError {
    fn from(msg: String) -> Self {
        TraceabilityError::ActorCommunicationError(msg)
    }
}
