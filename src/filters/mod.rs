//! Derived filter specification.
//!
//! The output of the deriver is a set of optional filter descriptors. A
//! descriptor that is absent is not offered downstream at all; a descriptor
//! carrying `disabled: true` is offered pre-unchecked and only applied when
//! the user opts in.

pub mod brackets;
pub mod naming;
pub mod special;

mod annotate;
mod derive;
mod gems;

pub use derive::derive_filters;

use serde::{Deserialize, Serialize};

use crate::config::{CollapseListings, SearchConfig};
use crate::item::{Influence, ItemCategory, MapBlighted};

/// Numeric filter descriptor. `max` is populated only by range-capable
/// fields (cluster-jewel item level).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueFilter {
    pub value: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
    #[serde(default)]
    pub disabled: bool,
}

impl ValueFilter {
    pub fn new(value: u32, disabled: bool) -> Self {
        Self {
            value,
            max: None,
            disabled,
        }
    }

    pub fn enabled(value: u32) -> Self {
        Self::new(value, false)
    }
}

/// Exact-search naming: either a unique name paired with its base type, or
/// a bare base type. At most one strategy is populated per item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchExact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_trade: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_type_trade: Option<String>,
}

/// Relaxed category facet offered as a fallback to the exact search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRelaxed {
    pub category: ItemCategory,
    #[serde(default)]
    pub disabled: bool,
}

/// Variant discriminator for gems sharing a base name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscriminatorFilter {
    pub trade: String,
}

/// Corruption state filter. `exact` requires the backend to match the value
/// strictly instead of tolerating corrupted copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorruptedFilter {
    pub value: bool,
    #[serde(default)]
    pub exact: bool,
}

/// Presence-only filter (mirrored, foil)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleFilter {
    #[serde(default)]
    pub disabled: bool,
}

/// Boolean-valued filter (unidentified, fractured)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoolFilter {
    pub value: bool,
    #[serde(default)]
    pub disabled: bool,
}

/// Rarity facet values accepted by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RarityTag {
    Magic,
    Nonunique,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RarityFilter {
    pub value: RarityTag,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapBlightedFilter {
    pub value: MapBlighted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfluenceFilter {
    pub value: Influence,
    #[serde(default)]
    pub disabled: bool,
}

/// Stat references of veiled modifiers to match on
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VeiledFilter {
    pub stat_refs: Vec<String>,
    #[serde(default)]
    pub disabled: bool,
}

/// Listing scope forwarded verbatim to the query builder
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeScope {
    #[serde(default)]
    pub offline: bool,
    #[serde(default)]
    pub online_in_league: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub listed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    pub league: String,
    #[serde(default)]
    pub collapse_listings: CollapseListings,
}

/// Complete filter specification for one item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemFilters {
    pub search_exact: SearchExact,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_relaxed: Option<SearchRelaxed>,
    pub trade: TradeScope,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discriminator: Option<DiscriminatorFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack_size: Option<ValueFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_level: Option<ValueFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_level: Option<ValueFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_tier: Option<ValueFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_blighted: Option<MapBlightedFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gem_level: Option<ValueFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<ValueFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_sockets: Option<ValueFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub white_sockets: Option<ValueFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heist_wings_revealed: Option<ValueFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heist_wings_total: Option<ValueFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentinel_charge: Option<ValueFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corrupted: Option<CorruptedFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity: Option<RarityFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mirrored: Option<ToggleFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fractured: Option<BoolFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foil: Option<ToggleFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unidentified: Option<BoolFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub veiled: Option<VeiledFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub influences: Option<Vec<InfluenceFilter>>,
}

impl ItemFilters {
    /// Specification skeleton with the trade scope prefilled from config
    pub fn for_config(config: &SearchConfig) -> Self {
        Self {
            trade: TradeScope {
                offline: false,
                online_in_league: false,
                listed: None,
                currency: config.currency.clone(),
                league: config.league.clone(),
                collapse_listings: config.collapse_listings,
            },
            ..Default::default()
        }
    }
}
