use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Supply-chain journey for one product, keyed by product id.
///
/// The `journey` order is significant (farm → … → store) and is rendered
/// as a timeline; the catalog never reorders it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceabilityRecord {
    pub product_id: String,
    pub name: String,
    pub authenticity: String,
    pub co2_impact: String,
    pub ethical_sourcing: String,
    pub journey: Vec<JourneyStep>,
}

/// One stop on a product's supply-chain journey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JourneyStep {
    pub stage: String,
    pub location: String,
    pub date: NaiveDate,
    pub details: String,
    pub verified: bool,
}
