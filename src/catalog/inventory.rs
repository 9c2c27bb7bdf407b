/// Represents one product line in the inventory catalog.
///
/// Stock is tracked per store location with a precomputed total; the
/// catalog never recomputes the total, it only reads it. Records are
/// immutable for the life of the process — simulated actions (ship,
/// restock) notify the user without writing back.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The three store locations stock is tracked across, in display order.
pub const LOCATIONS: [&str; 3] = ["Chennai", "Delhi", "Mumbai"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub id: String,
    pub name: String,
    pub category: String,
    pub stock: StockLevels,
    pub ai_prediction: String,
    pub status: StockStatus,
    pub last_updated: DateTime<Utc>,
}

/// Per-location unit counts plus the precomputed total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLevels {
    pub chennai: u32,
    pub delhi: u32,
    pub mumbai: u32,
    pub total: u32,
}

impl StockLevels {
    /// Location counts in [`LOCATIONS`] order.
    pub fn by_location(&self) -> [u32; 3] {
        [self.chennai, self.delhi, self.mumbai]
    }

    /// Whether the stored total matches the sum of the location counts.
    pub fn is_consistent(&self) -> bool {
        self.total == self.chennai + self.delhi + self.mumbai
    }
}

/// Stock health of an inventory record.
///
/// The underlying data is a closed string set; parsing is total, with
/// anything unrecognised landing in [`StockStatus::Unknown`] so a bad
/// fixture degrades to neutral display instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
    Optimal,
    Low,
    Surplus,
    Unknown,
}

impl StockStatus {
    pub fn parse(s: &str) -> Self {
        match s {
            "optimal" => Self::Optimal,
            "low" => Self::Low,
            "surplus" => Self::Surplus,
            _ => Self::Unknown,
        }
    }

    /// The label the badge renderer shows.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Optimal => "optimal",
            Self::Low => "low",
            Self::Surplus => "surplus",
            Self::Unknown => "unknown",
        }
    }
}
