//! Session state machine for the inventory dashboard.
//!
//! The dashboard enumerates the whole catalog rather than looking entities
//! up one at a time; the only selection is a row highlight. Ship and
//! restock are pure theater: they validate the product id, emit a
//! notification, and change nothing.

use std::sync::Arc;

use async_trait::async_trait;

use crate::catalog::{Catalog, InventoryRecord, Prediction, LOCATIONS};
use crate::framework::PageSession;
use crate::notify::Notifier;
use crate::present::stock_percentage;

use super::commands::{
    InventoryCommand, InventoryReply, InventoryRow, InventoryStats, InventoryView,
    LocationLevel, PredictionCard,
};

/// The "AI Accuracy" quick-stat. Like every other AI figure in the demo,
/// a fixed literal.
const AI_ACCURACY_PERCENT: u8 = 94;

#[derive(Debug, Default)]
pub struct InventorySession {
    selected: Option<String>,
}

#[async_trait]
impl PageSession for InventorySession {
    type Command = InventoryCommand;
    type Reply = InventoryReply;
    type Context = (Arc<Catalog>, Notifier);

    async fn handle(
        &mut self,
        command: InventoryCommand,
        ctx: &Self::Context,
    ) -> Result<InventoryReply, String> {
        let (catalog, notifier) = ctx;
        match command {
            InventoryCommand::Select(choice) => {
                match choice {
                    Some(id) if catalog.inventory_by_id(&id).is_some() => {
                        self.selected = Some(id);
                    }
                    Some(id) => {
                        self.selected = None;
                        notifier.notify_destructive(
                            "Product Not Found",
                            format!("No inventory record for {id}"),
                        );
                    }
                    None => self.selected = None,
                }
                Ok(InventoryReply::Selection(self.selected.clone()))
            }
            InventoryCommand::Ship { product_id, from, to } => {
                if catalog.inventory_by_id(&product_id).is_none() {
                    notifier.notify_destructive(
                        "Product Not Found",
                        format!("No inventory record for {product_id}"),
                    );
                    return Ok(InventoryReply::Ack(false));
                }
                notifier.notify(
                    "Shipment Initiated",
                    format!("Simulating shipment of {product_id} from {from} to {to}"),
                );
                Ok(InventoryReply::Ack(true))
            }
            InventoryCommand::Restock { product_id } => {
                if catalog.inventory_by_id(&product_id).is_none() {
                    notifier.notify_destructive(
                        "Product Not Found",
                        format!("No inventory record for {product_id}"),
                    );
                    return Ok(InventoryReply::Ack(false));
                }
                notifier.notify(
                    "Restock Order Placed",
                    format!("AI-powered restock order placed for {product_id}"),
                );
                Ok(InventoryReply::Ack(true))
            }
            InventoryCommand::View => Ok(InventoryReply::View(self.build_view(catalog))),
        }
    }

    fn reset(&mut self) {
        self.selected = None;
    }
}

impl InventorySession {
    fn build_view(&self, catalog: &Catalog) -> InventoryView {
        InventoryView {
            rows: catalog
                .inventory()
                .iter()
                .map(|record| self.build_row(record))
                .collect(),
            predictions: catalog.predictions().iter().map(build_card).collect(),
            stats: InventoryStats {
                total_locations: LOCATIONS.len(),
                products_tracked: catalog.inventory().len(),
                ai_accuracy_percent: AI_ACCURACY_PERCENT,
            },
            selected: self.selected.clone(),
        }
    }

    fn build_row(&self, record: &InventoryRecord) -> InventoryRow {
        let stock = LOCATIONS
            .iter()
            .zip(record.stock.by_location())
            .map(|(location, units)| LocationLevel {
                location: (*location).to_string(),
                units,
                percent: stock_percentage(units, record.stock.total),
            })
            .collect();
        InventoryRow {
            id: record.id.clone(),
            name: record.name.clone(),
            category: record.category.clone(),
            stock,
            total: record.stock.total,
            status: record.status,
            status_class: record.status.display_class(),
            ai_prediction: record.ai_prediction.clone(),
            last_updated: record.last_updated,
            selected: self.selected.as_deref() == Some(record.id.as_str()),
        }
    }
}

fn build_card(prediction: &Prediction) -> PredictionCard {
    PredictionCard {
        kind: prediction.kind.clone(),
        priority: prediction.priority,
        priority_class: prediction.priority.display_class(),
        message: prediction.message.clone(),
        confidence: prediction.confidence,
        action: prediction.action.clone(),
    }
}
