//! Error types for the returns page.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ReturnsError {
    /// The page session returned a reply variant the client did not ask for.
    #[error("Unexpected reply from returns session: {0}")]
    UnexpectedReply(String),

    /// An error occurred while communicating with the page actor.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for ReturnsError {
    fn from(msg: String) -> Self {
        ReturnsError::ActorCommunicationError(msg)
    }
}
