//! Session for the landing page. Stateless: no selection, no form — the
//! overview is rebuilt from literals and catalog counts on every request.

use std::sync::Arc;

use async_trait::async_trait;

use crate::catalog::{Catalog, WarrantyStatus, LOCATIONS};
use crate::framework::PageSession;
use crate::notify::Notifier;

use super::commands::{FeatureCard, HomeCommand, HomeOverview, HomeReply, PlatformStats};

#[derive(Debug, Default)]
pub struct HomeSession;

#[async_trait]
impl PageSession for HomeSession {
    type Command = HomeCommand;
    type Reply = HomeReply;
    type Context = (Arc<Catalog>, Notifier);

    async fn handle(
        &mut self,
        command: HomeCommand,
        ctx: &Self::Context,
    ) -> Result<HomeReply, String> {
        let (catalog, _notifier) = ctx;
        match command {
            HomeCommand::Overview => Ok(HomeReply::Overview(build_overview(catalog))),
        }
    }

    fn reset(&mut self) {}
}

fn build_overview(catalog: &Catalog) -> HomeOverview {
    HomeOverview {
        product_name: "ChainTrust".into(),
        tagline: "AI-powered blockchain solution for smart inventory management, \
                  product transparency, and secure warranty handling"
            .into(),
        features: vec![
            FeatureCard {
                title: "Smart Inventory & AI Oracle".into(),
                description: "AI-powered inventory management with predictive analytics \
                              for optimal stock levels across all locations."
                    .into(),
                route: "/inventory".into(),
            },
            FeatureCard {
                title: "Product Traceability & QR Scan".into(),
                description: "Complete product journey tracking from farm to store with \
                              blockchain-verified authenticity."
                    .into(),
                route: "/traceability".into(),
            },
            FeatureCard {
                title: "Blockchain-Based Warranty & Returns".into(),
                description: "Secure, transparent warranty management with immutable \
                              ownership records and easy returns."
                    .into(),
                route: "/returns".into(),
            },
        ],
        benefits: vec![
            "Reduce inventory waste by 40%".into(),
            "100% product authenticity verification".into(),
            "Streamlined returns process".into(),
            "Real-time supply chain visibility".into(),
            "Enhanced customer trust".into(),
            "Automated compliance reporting".into(),
        ],
        stats: PlatformStats {
            total_locations: LOCATIONS.len(),
            products_tracked: catalog.inventory().len(),
            traceable_products: catalog.trace_ids().count(),
            active_warranties: catalog
                .warranties()
                .iter()
                .filter(|w| w.status == WarrantyStatus::Active)
                .count(),
        },
    }
}
