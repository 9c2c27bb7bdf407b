//! Command and view vocabulary for the traceability page.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::present::{BlockchainPanel, StageKind};

/// Operations a user can trigger on the traceability page.
#[derive(Debug)]
pub enum TraceabilityCommand {
    /// Exact-match lookup of a product id typed into the search box.
    Search(String),
    /// Simulated QR scan: a uniform random draw from the known products.
    ScanQr,
    /// Current render data: detail when selected, `None` for the empty state.
    View,
}

#[derive(Debug, PartialEq)]
pub enum TraceabilityReply {
    Selection(Option<String>),
    View(Option<TraceabilityView>),
}

/// Everything the traceability detail renderer needs for one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceabilityView {
    pub product_id: String,
    pub name: String,
    pub authenticity: String,
    pub co2_impact: String,
    pub ethical_sourcing: String,
    pub journey: Vec<JourneyStepView>,
    pub blockchain: BlockchainPanel,
}

/// One timeline entry, with its icon category precomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JourneyStepView {
    pub stage: String,
    pub kind: StageKind,
    pub location: String,
    pub date: NaiveDate,
    pub details: String,
    pub verified: bool,
}
