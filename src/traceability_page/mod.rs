//! Traceability page: product journey lookup and the simulated QR scan.

pub mod commands;
pub mod error;
pub mod session;

pub use commands::*;
pub use error::*;
pub use session::*;

use crate::clients::TraceabilityClient;
use crate::framework::PageActor;

/// Creates a new traceability page actor and its client.
pub fn new() -> (PageActor<TraceabilitySession>, TraceabilityClient) {
    let (actor, generic_client) = PageActor::new(32, TraceabilitySession::default());
    let client = TraceabilityClient::new(generic_client);

    (actor, client)
}
