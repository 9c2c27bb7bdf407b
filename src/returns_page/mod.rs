//! Warranty & returns page: tri-key warranty lookup, ownership history,
//! and the simulated claim flow.

pub mod commands;
pub mod error;
pub mod session;

pub use commands::*;
pub use error::*;
pub use session::*;

use crate::clients::ReturnsClient;
use crate::framework::PageActor;

/// Creates a new returns page actor and its client.
pub fn new() -> (PageActor<ReturnsSession>, ReturnsClient) {
    let (actor, generic_client) = PageActor::new(32, ReturnsSession::default());
    let client = ReturnsClient::new(generic_client);

    (actor, client)
}
