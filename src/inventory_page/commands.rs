//! Command and view vocabulary for the inventory dashboard.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::{Priority, StockStatus};
use crate::present::DisplayClass;

/// Operations a user can trigger on the inventory dashboard.
#[derive(Debug)]
pub enum InventoryCommand {
    /// Highlights a table row (`None` clears the highlight).
    Select(Option<String>),
    /// Simulated inter-store shipment; only a notification, no stock moves.
    Ship {
        product_id: String,
        from: String,
        to: String,
    },
    /// Simulated "AI-powered" restock order; notification only.
    Restock { product_id: String },
    /// Current render data for the whole dashboard.
    View,
}

#[derive(Debug, PartialEq)]
pub enum InventoryReply {
    Selection(Option<String>),
    /// Whether the simulated action targeted a known product.
    Ack(bool),
    View(InventoryView),
}

/// Everything the dashboard renderer needs: table rows, the predictions
/// sidebar, and the quick-stats cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryView {
    pub rows: Vec<InventoryRow>,
    pub predictions: Vec<PredictionCard>,
    pub stats: InventoryStats,
    pub selected: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRow {
    pub id: String,
    pub name: String,
    pub category: String,
    /// Per-location levels in fixed display order.
    pub stock: Vec<LocationLevel>,
    pub total: u32,
    pub status: StockStatus,
    pub status_class: DisplayClass,
    pub ai_prediction: String,
    pub last_updated: DateTime<Utc>,
    pub selected: bool,
}

/// Units at one location plus its share of the product's total stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationLevel {
    pub location: String,
    pub units: u32,
    pub percent: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionCard {
    pub kind: String,
    pub priority: Priority,
    pub priority_class: DisplayClass,
    pub message: String,
    pub confidence: u8,
    pub action: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryStats {
    pub total_locations: usize,
    pub products_tracked: usize,
    pub ai_accuracy_percent: u8,
}
