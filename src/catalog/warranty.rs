use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Warranty and ownership record for a purchased product.
///
/// `product_id` is a many-to-one link into the inventory catalog; a product
/// may carry zero or more warranties and no referential check is enforced.
/// The ownership log is ordered oldest-first and supports multiple owners,
/// though the demo fixtures carry one each.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarrantyRecord {
    pub id: String,
    pub product_id: String,
    pub product_name: String,
    pub purchase_date: NaiveDate,
    /// Encoded as "<N> months"; see `present::warranty_period_months`.
    pub warranty_period: String,
    pub status: WarrantyStatus,
    pub coverage: String,
    pub ownership_log: Vec<OwnershipEntry>,
    pub return_eligible: bool,
    pub serial_number: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnershipEntry {
    pub owner: String,
    pub address: String,
    pub purchase_date: NaiveDate,
    pub verified: bool,
}

/// Lifecycle state of a warranty. Parsing is case-insensitive and total;
/// unrecognised strings fall through to [`WarrantyStatus::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarrantyStatus {
    Active,
    Expired,
    Pending,
    Unknown,
}

impl WarrantyStatus {
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "active" => Self::Active,
            "expired" => Self::Expired,
            "pending" => Self::Pending,
            _ => Self::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Expired => "Expired",
            Self::Pending => "Pending",
            Self::Unknown => "Unknown",
        }
    }
}
