//! Named-exception tables consulted by the dispatcher and annotators.
//!
//! A handful of specific item names carry their own filter rules. They live
//! here as lookup tables rather than inline string comparisons so the
//! dispatch logic stays auditable.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Area-level brackets the backend accepts for temple chronicles
pub const CHRONICLE_AREA_BRACKETS: &[u32] = &[1, 68, 73, 75, 78, 80];

/// Area-level brackets the backend accepts for expedition logbooks
pub const LOGBOOK_AREA_BRACKETS: &[u32] = &[1, 68, 73, 78, 81, 83];

/// Cluster-jewel item-level range brackets. The ceiling list is in
/// descending order; see `brackets::ceil_to_bracket`.
pub const CLUSTER_LEVEL_FLOOR: &[u32] = &[1, 50, 68, 75, 84];
pub const CLUSTER_LEVEL_CEIL: &[u32] = &[100, 74, 67, 49];

/// Support gems whose value comes almost entirely from their level
pub const SPECIAL_SUPPORT_GEMS: &[&str] =
    &["Empower Support", "Enlighten Support", "Enhance Support"];

/// Unique jewel whose unidentified rolls are priced by item level
pub const WATCHERS_EYE: &str = "Watcher's Eye";

pub const EXPEDITION_LOGBOOK: &str = "Expedition Logbook";

/// Staff uniques whose lightning rolls step at fixed item levels
pub const AGNEROD_STAVES: &[&str] = &[
    "Agnerod",
    "Agnerod East",
    "Agnerod North",
    "Agnerod South",
    "Agnerod West",
];
pub const AGNEROD_LEVEL_BRACKETS: &[u32] = &[75, 78, 80, 82];

/// Stat reference marking a map occupied by an elder guardian
pub const OCCUPIED_MAP_STAT: &str = "Map is occupied by #";

/// Extra rule the exact-name dispatch branch applies for specific names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedRule {
    /// Search the exact name, nothing else
    ExactNameOnly,
    /// Add an enabled area-level filter quantized to the given brackets
    BracketedAreaLevel(&'static [u32]),
    /// Add an enabled raw area-level filter
    RawAreaLevel,
    /// Add an enabled raw item-level filter
    RawItemLevel,
}

static NAMED_RULES: Lazy<HashMap<&'static str, NamedRule>> = Lazy::new(|| {
    HashMap::from([
        ("Charged Compass", NamedRule::ExactNameOnly),
        (
            "Chronicle of Atzoatl",
            NamedRule::BracketedAreaLevel(CHRONICLE_AREA_BRACKETS),
        ),
        ("Mirrored Tablet", NamedRule::RawAreaLevel),
        ("Forbidden Tome", NamedRule::RawAreaLevel),
        ("Filled Coffin", NamedRule::RawItemLevel),
    ])
});

/// Rule for a canonical name, if it is one of the known exceptions
pub fn named_rule(ref_name: &str) -> Option<NamedRule> {
    NAMED_RULES.get(ref_name).copied()
}
