//! Error types for the inventory dashboard.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum InventoryError {
    /// The page session returned a reply variant the client did not ask for.
    #[error("Unexpected reply from inventory session: {0}")]
    UnexpectedReply(String),

    /// An error occurred while communicating with the page actor.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for InventoryError {
    fn from(msg: String) -> Self {
        InventoryError::ActorCommunicationError(msg)
    }
}
