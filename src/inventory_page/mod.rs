//! Inventory dashboard: catalog enumeration, stock percentages, the
//! predictions sidebar, and the simulated ship/restock actions.

pub mod commands;
pub mod error;
pub mod session;

pub use commands::*;
pub use error::*;
pub use session::*;

use crate::clients::InventoryClient;
use crate::framework::PageActor;

/// Creates a new inventory page actor and its client.
pub fn new() -> (PageActor<InventorySession>, InventoryClient) {
    let (actor, generic_client) = PageActor::new(32, InventorySession::default());
    let client = InventoryClient::new(generic_client);

    (actor, client)
}
