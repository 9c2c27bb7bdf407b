//! Error types for the landing page.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum HomeError {
    /// An error occurred while communicating with the page actor.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for HomeError {
    fn from(msg: String) -> Self {
        HomeError::ActorCommunicationError(msg)
    }
}
