//! Session state machine for the traceability page.
//!
//! Holds at most one selected product id (a key into the shared catalog,
//! not a copy). A successful search or scan selects; a miss clears the
//! selection and notifies destructively. The view is derived on demand and
//! never cached.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::catalog::{Catalog, TraceabilityRecord};
use crate::framework::PageSession;
use crate::notify::Notifier;
use crate::present::{BlockchainPanel, StageKind};

use super::commands::{
    JourneyStepView, TraceabilityCommand, TraceabilityReply, TraceabilityView,
};

#[derive(Debug, Default)]
pub struct TraceabilitySession {
    selected: Option<String>,
}

#[async_trait]
impl PageSession for TraceabilitySession {
    type Command = TraceabilityCommand;
    type Reply = TraceabilityReply;
    type Context = (Arc<Catalog>, Notifier);

    async fn handle(
        &mut self,
        command: TraceabilityCommand,
        ctx: &Self::Context,
    ) -> Result<TraceabilityReply, String> {
        let (catalog, notifier) = ctx;
        match command {
            TraceabilityCommand::Search(input) => {
                if catalog.trace(&input).is_some() {
                    self.selected = Some(input.clone());
                    notifier.notify(
                        "Product Found",
                        format!("Displaying traceability for {input}"),
                    );
                } else {
                    self.selected = None;
                    let known: Vec<&str> = catalog.trace_ids().collect();
                    notifier.notify_destructive(
                        "Product Not Found",
                        format!("Please enter a valid product ID ({})", known.join(", ")),
                    );
                }
                Ok(TraceabilityReply::Selection(self.selected.clone()))
            }
            TraceabilityCommand::ScanQr => {
                let drawn = catalog
                    .random_product_id(&mut rand::thread_rng())
                    .map(str::to_owned);
                match drawn {
                    Some(id) => {
                        info!(product_id = %id, "Simulated QR scan");
                        notifier.notify(
                            "QR Code Scanned",
                            format!("Product {id} successfully scanned"),
                        );
                        self.selected = Some(id);
                    }
                    None => {
                        self.selected = None;
                        notifier.notify_destructive(
                            "Scan Failed",
                            "No products available to scan",
                        );
                    }
                }
                Ok(TraceabilityReply::Selection(self.selected.clone()))
            }
            TraceabilityCommand::View => {
                let view = self
                    .selected
                    .as_deref()
                    .and_then(|id| catalog.trace(id))
                    .map(build_view);
                Ok(TraceabilityReply::View(view))
            }
        }
    }

    fn reset(&mut self) {
        self.selected = None;
    }
}

fn build_view(record: &TraceabilityRecord) -> TraceabilityView {
    TraceabilityView {
        product_id: record.product_id.clone(),
        name: record.name.clone(),
        authenticity: record.authenticity.clone(),
        co2_impact: record.co2_impact.clone(),
        ethical_sourcing: record.ethical_sourcing.clone(),
        journey: record
            .journey
            .iter()
            .map(|step| JourneyStepView {
                stage: step.stage.clone(),
                kind: StageKind::classify(&step.stage),
                location: step.location.clone(),
                date: step.date,
                details: step.details.clone(),
                verified: step.verified,
            })
            .collect(),
        blockchain: BlockchainPanel::fixed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::Severity;

    fn context() -> (
        (Arc<Catalog>, Notifier),
        crate::notify::NotificationFeed,
    ) {
        let (notifier, feed) = Notifier::channel();
        ((Arc::new(Catalog::demo()), notifier), feed)
    }

    #[tokio::test]
    async fn search_hit_selects_and_notifies() {
        let (ctx, mut feed) = context();
        let mut session = TraceabilitySession::default();

        let reply = session
            .handle(TraceabilityCommand::Search("P001".into()), &ctx)
            .await
            .unwrap();
        assert_eq!(reply, TraceabilityReply::Selection(Some("P001".into())));

        let toast = feed.try_next().unwrap();
        assert_eq!(toast.title, "Product Found");
        assert_eq!(toast.severity, Severity::Normal);
        assert_eq!(toast.message, "Displaying traceability for P001");
    }

    #[tokio::test]
    async fn search_miss_clears_selection_and_notifies_destructively() {
        let (ctx, mut feed) = context();
        let mut session = TraceabilitySession::default();

        session
            .handle(TraceabilityCommand::Search("P001".into()), &ctx)
            .await
            .unwrap();
        let reply = session
            .handle(TraceabilityCommand::Search("P999".into()), &ctx)
            .await
            .unwrap();
        assert_eq!(reply, TraceabilityReply::Selection(None));

        let _hit = feed.try_next().unwrap();
        let miss = feed.try_next().unwrap();
        assert_eq!(miss.title, "Product Not Found");
        assert_eq!(miss.severity, Severity::Destructive);
        assert_eq!(miss.message, "Please enter a valid product ID (P001, P002)");

        // The empty state renders after a miss.
        let view = session.handle(TraceabilityCommand::View, &ctx).await.unwrap();
        assert_eq!(view, TraceabilityReply::View(None));
    }

    #[tokio::test]
    async fn view_carries_journey_in_catalog_order() {
        let (ctx, _feed) = context();
        let mut session = TraceabilitySession::default();

        session
            .handle(TraceabilityCommand::Search("P002".into()), &ctx)
            .await
            .unwrap();
        let reply = session.handle(TraceabilityCommand::View, &ctx).await.unwrap();
        let TraceabilityReply::View(Some(view)) = reply else {
            panic!("expected a detail view");
        };

        let stages: Vec<&str> = view.journey.iter().map(|s| s.stage.as_str()).collect();
        assert_eq!(stages, ["Farm", "Mill", "Distribution", "Store"]);
        let kinds: Vec<StageKind> = view.journey.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            [
                StageKind::Source,
                StageKind::Processing,
                StageKind::Distribution,
                StageKind::Retail
            ]
        );
        assert_eq!(view.blockchain, BlockchainPanel::fixed());
    }

    #[tokio::test]
    async fn scan_selects_a_known_product() {
        let (ctx, mut feed) = context();
        let mut session = TraceabilitySession::default();

        let reply = session.handle(TraceabilityCommand::ScanQr, &ctx).await.unwrap();
        let TraceabilityReply::Selection(Some(id)) = reply else {
            panic!("scan must select a product");
        };
        assert!(ctx.0.trace(&id).is_some());

        let toast = feed.try_next().unwrap();
        assert_eq!(toast.title, "QR Code Scanned");
        assert_eq!(toast.message, format!("Product {id} successfully scanned"));
    }

    #[tokio::test]
    async fn reset_restores_the_empty_state() {
        let (ctx, _feed) = context();
        let mut session = TraceabilitySession::default();

        session
            .handle(TraceabilityCommand::Search("P001".into()), &ctx)
            .await
            .unwrap();
        session.reset();
        let view = session.handle(TraceabilityCommand::View, &ctx).await.unwrap();
        assert_eq!(view, TraceabilityReply::View(None));
    }
}
