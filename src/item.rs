//! Normalized item model consumed by the filter deriver.
//!
//! Items arrive here already parsed and resolved against the base-type
//! registry; the deriver never sees raw listing text.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::registry::BaseTypeInfo;

/// Closed set of item categories known to the trade taxonomy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemCategory {
    AbyssJewel,
    Amulet,
    Belt,
    BodyArmour,
    Boots,
    Bow,
    CapturedBeast,
    Charm,
    Claw,
    ClusterJewel,
    Currency,
    Dagger,
    DivinationCard,
    FishingRod,
    Flask,
    Gem,
    Gloves,
    HeistBlueprint,
    HeistBrooch,
    HeistCloak,
    HeistContract,
    HeistGear,
    HeistTool,
    Helmet,
    Idol,
    Invitation,
    Jewel,
    Logbook,
    Map,
    MemoryLine,
    MetamorphSample,
    OneHandedAxe,
    OneHandedMace,
    OneHandedSword,
    Quiver,
    Ring,
    RuneDagger,
    SanctumRelic,
    Sceptre,
    Sentinel,
    Shield,
    Staff,
    Tincture,
    Trinket,
    TwoHandedAxe,
    TwoHandedMace,
    TwoHandedSword,
    Wand,
    Warstaff,
}

impl ItemCategory {
    /// Get the display name for this category
    pub fn display_name(&self) -> &'static str {
        match self {
            ItemCategory::AbyssJewel => "Abyss Jewel",
            ItemCategory::Amulet => "Amulet",
            ItemCategory::Belt => "Belt",
            ItemCategory::BodyArmour => "Body Armour",
            ItemCategory::Boots => "Boots",
            ItemCategory::Bow => "Bow",
            ItemCategory::CapturedBeast => "Captured Beast",
            ItemCategory::Charm => "Charm",
            ItemCategory::Claw => "Claw",
            ItemCategory::ClusterJewel => "Cluster Jewel",
            ItemCategory::Currency => "Currency",
            ItemCategory::Dagger => "Dagger",
            ItemCategory::DivinationCard => "Divination Card",
            ItemCategory::FishingRod => "Fishing Rod",
            ItemCategory::Flask => "Flask",
            ItemCategory::Gem => "Gem",
            ItemCategory::Gloves => "Gloves",
            ItemCategory::HeistBlueprint => "Heist Blueprint",
            ItemCategory::HeistBrooch => "Heist Brooch",
            ItemCategory::HeistCloak => "Heist Cloak",
            ItemCategory::HeistContract => "Heist Contract",
            ItemCategory::HeistGear => "Heist Gear",
            ItemCategory::HeistTool => "Heist Tool",
            ItemCategory::Helmet => "Helmet",
            ItemCategory::Idol => "Idol",
            ItemCategory::Invitation => "Invitation",
            ItemCategory::Jewel => "Jewel",
            ItemCategory::Logbook => "Logbook",
            ItemCategory::Map => "Map",
            ItemCategory::MemoryLine => "Memory Line",
            ItemCategory::MetamorphSample => "Metamorph Sample",
            ItemCategory::OneHandedAxe => "One-Handed Axe",
            ItemCategory::OneHandedMace => "One-Handed Mace",
            ItemCategory::OneHandedSword => "One-Handed Sword",
            ItemCategory::Quiver => "Quiver",
            ItemCategory::Ring => "Ring",
            ItemCategory::RuneDagger => "Rune Dagger",
            ItemCategory::SanctumRelic => "Sanctum Relic",
            ItemCategory::Sceptre => "Sceptre",
            ItemCategory::Sentinel => "Sentinel",
            ItemCategory::Shield => "Shield",
            ItemCategory::Staff => "Staff",
            ItemCategory::Tincture => "Tincture",
            ItemCategory::Trinket => "Trinket",
            ItemCategory::TwoHandedAxe => "Two-Handed Axe",
            ItemCategory::TwoHandedMace => "Two-Handed Mace",
            ItemCategory::TwoHandedSword => "Two-Handed Sword",
            ItemCategory::Wand => "Wand",
            ItemCategory::Warstaff => "Warstaff",
        }
    }
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Rarity tiers carried by listed items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemRarity {
    Normal,
    Magic,
    Rare,
    Unique,
}

/// Influence tags an item base can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Influence {
    Shaper,
    Elder,
    Crusader,
    Hunter,
    Redeemer,
    Warlord,
}

/// Modifier class of a computed stat entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModifierKind {
    Pseudo,
    Explicit,
    Implicit,
    Crafted,
    Enchant,
    Veiled,
    Fractured,
    Scourge,
}

/// One computed stat on an item, tagged with its modifier class and the
/// stable stat reference understood by the trade backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatEntry {
    pub modifier: ModifierKind,
    pub stat_ref: String,
}

/// Blight marker variants a map can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MapBlighted {
    #[serde(rename = "Blighted")]
    Blighted,
    #[serde(rename = "Blight-ravaged")]
    BlightRavaged,
}

/// Socket summary. Counts are absent when the listing showed none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSockets {
    #[serde(default)]
    pub linked: Option<u32>,
    #[serde(default)]
    pub white: Option<u32>,
}

/// Wing progress on a heist blueprint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeistJob {
    #[serde(default)]
    pub wings_revealed: Option<u32>,
    #[serde(default)]
    pub wings_total: Option<u32>,
}

/// Normalized item. Immutable input to the deriver; numeric attributes are
/// `None` when the listing did not carry them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub category: ItemCategory,
    pub rarity: ItemRarity,
    pub info: BaseTypeInfo,
    #[serde(default)]
    pub item_level: Option<u32>,
    #[serde(default)]
    pub area_level: Option<u32>,
    #[serde(default)]
    pub map_tier: Option<u32>,
    #[serde(default)]
    pub gem_level: Option<u32>,
    #[serde(default)]
    pub quality: Option<u32>,
    #[serde(default)]
    pub stack_size: Option<u32>,
    #[serde(default)]
    pub sentinel_charge: Option<u32>,
    #[serde(default)]
    pub sockets: Option<ItemSockets>,
    #[serde(default)]
    pub heist: Option<HeistJob>,
    #[serde(default)]
    pub map_blighted: Option<MapBlighted>,
    #[serde(default)]
    pub corrupted: bool,
    #[serde(default)]
    pub mirrored: bool,
    #[serde(default)]
    pub fractured: bool,
    #[serde(default)]
    pub foil: bool,
    #[serde(default)]
    pub unidentified: bool,
    #[serde(default)]
    pub veiled: bool,
    #[serde(default)]
    pub unmodifiable: bool,
    #[serde(default)]
    pub influences: Vec<Influence>,
    #[serde(default)]
    pub stats: Vec<StatEntry>,
}
