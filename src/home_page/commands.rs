//! Command and view vocabulary for the landing page.

use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum HomeCommand {
    /// The landing page's full render data.
    Overview,
}

#[derive(Debug, PartialEq)]
pub enum HomeReply {
    Overview(HomeOverview),
}

/// Hero copy, feature cards, benefit bullets, and platform stats. All
/// static apart from the stats, which are derived from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeOverview {
    pub product_name: String,
    pub tagline: String,
    pub features: Vec<FeatureCard>,
    pub benefits: Vec<String>,
    pub stats: PlatformStats,
}

/// One feature card, with the route of the page it links to. The core
/// only declares routes; an external router owns the mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureCard {
    pub title: String,
    pub description: String,
    pub route: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformStats {
    pub total_locations: usize,
    pub products_tracked: usize,
    pub traceable_products: usize,
    pub active_warranties: usize,
}
