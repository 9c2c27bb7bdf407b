//! Landing page: static marketing copy plus catalog-derived stats.

pub mod commands;
pub mod error;
pub mod session;

pub use commands::*;
pub use error::*;
pub use session::*;

use crate::clients::HomeClient;
use crate::framework::PageActor;

/// Creates a new home page actor and its client.
pub fn new() -> (PageActor<HomeSession>, HomeClient) {
    let (actor, generic_client) = PageActor::new(32, HomeSession);
    let client = HomeClient::new(generic_client);

    (actor, client)
}
