//! Search configuration bundle.

use serde::{Deserialize, Serialize};

/// Where duplicate listings from one seller get collapsed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollapseListings {
    #[default]
    App,
    Api,
}

/// Per-request configuration for filter derivation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Target league name
    pub league: String,

    /// Restrict listings to this currency
    #[serde(default)]
    pub currency: Option<String>,

    /// Listing-collapse mode
    #[serde(default)]
    pub collapse_listings: CollapseListings,

    /// Pre-enable the stack-size filter for stacks larger than one
    #[serde(default)]
    pub activate_stock_filter: bool,

    /// Strict matching: several filters that default to disabled become
    /// enabled under this switch
    #[serde(default)]
    pub exact: bool,

    /// Send canonical reference names to the backend instead of localized
    /// display names
    #[serde(default)]
    pub canonical_names: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            league: "Standard".to_string(),
            currency: None,
            collapse_listings: CollapseListings::App,
            activate_stock_filter: false,
            exact: false,
            canonical_names: false,
        }
    }
}

impl SearchConfig {
    /// Create a relaxed configuration (default-enablement heuristics only)
    pub fn relaxed(league: impl Into<String>) -> Self {
        Self {
            league: league.into(),
            ..Default::default()
        }
    }

    /// Create a strict configuration with the exact switch set
    pub fn strict(league: impl Into<String>) -> Self {
        Self {
            league: league.into(),
            exact: true,
            ..Default::default()
        }
    }
}
