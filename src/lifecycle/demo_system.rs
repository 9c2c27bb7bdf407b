use tracing::{error, info};

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::clients::{HomeClient, InventoryClient, ReturnsClient, TraceabilityClient};
use crate::notify::{NotificationFeed, Notifier};

/// The runtime orchestrator for the four-page demo.
///
/// `DemoSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping all page actors
/// - **Dependency Wiring**: Sharing the read-only catalog and the
///   notification sink across pages
/// - **Resource Coordination**: Owning the notification feed the renderer
///   drains
///
/// # Architecture
///
/// The system consists of four independent page actors — Home, Inventory,
/// Traceability, Returns — that never talk to each other. Each receives
/// the same context at startup: an `Arc<Catalog>` and a `Notifier` clone.
///
/// # Example
///
/// ```ignore
/// let mut system = DemoSystem::new();
///
/// system.traceability_client.search("P001").await?;
/// let toast = system.notifications.next().await;
///
/// system.shutdown().await?;
/// ```
pub struct DemoSystem {
    /// Client for the landing page
    pub home_client: HomeClient,

    /// Client for the inventory dashboard
    pub inventory_client: InventoryClient,

    /// Client for the traceability page
    pub traceability_client: TraceabilityClient,

    /// Client for the warranty & returns page
    pub returns_client: ReturnsClient,

    /// Receiving end of the notification sink (drained by the renderer)
    pub notifications: NotificationFeed,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl DemoSystem {
    /// Creates a system backed by the built-in demo dataset.
    pub fn new() -> Self {
        Self::with_catalog(Catalog::demo())
    }

    /// Creates a system backed by an explicit catalog (used by tests).
    ///
    /// This method:
    /// 1. Creates the shared notification channel
    /// 2. Spawns one actor per page, each in its own Tokio task
    /// 3. Injects the same context everywhere: the catalog and a notifier
    pub fn with_catalog(catalog: Catalog) -> Self {
        let catalog = Arc::new(catalog);
        let (notifier, notifications) = Notifier::channel();

        let (home_actor, home_client) = crate::home_page::new();
        let (inventory_actor, inventory_client) = crate::inventory_page::new();
        let (traceability_actor, traceability_client) = crate::traceability_page::new();
        let (returns_actor, returns_client) = crate::returns_page::new();

        let handles = vec![
            tokio::spawn(home_actor.run((catalog.clone(), notifier.clone()))),
            tokio::spawn(inventory_actor.run((catalog.clone(), notifier.clone()))),
            tokio::spawn(traceability_actor.run((catalog.clone(), notifier.clone()))),
            tokio::spawn(returns_actor.run((catalog, notifier))),
        ];

        Self {
            home_client,
            inventory_client,
            traceability_client,
            returns_client,
            notifications,
            handles,
        }
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping the clients closes their command channels; each actor
    /// detects the closed channel and exits its loop. Any notifications
    /// still queued are discarded with the feed.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all actors shut down cleanly
    /// - `Err(String)` if any actor task panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        // Dropping the clients drops the channel senders, which signals
        // each actor to exit.
        drop(self.home_client);
        drop(self.inventory_client);
        drop(self.traceability_client);
        drop(self.returns_client);
        drop(self.notifications);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for DemoSystem {
    fn default() -> Self {
        Self::new()
    }
}
