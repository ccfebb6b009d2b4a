//! Trade taxonomy: category identifiers and stackable tags.
//!
//! The remote search system exposes a fixed set of category codes; only
//! categories present in this table can be offered as a relaxed search
//! facet.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::item::{Item, ItemCategory};

static TRADE_ID_BY_CATEGORY: Lazy<HashMap<ItemCategory, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (ItemCategory::AbyssJewel, "jewel.abyss"),
        (ItemCategory::Amulet, "accessory.amulet"),
        (ItemCategory::Belt, "accessory.belt"),
        (ItemCategory::BodyArmour, "armour.chest"),
        (ItemCategory::Boots, "armour.boots"),
        (ItemCategory::Bow, "weapon.bow"),
        (ItemCategory::Charm, "azmeri.charm"),
        (ItemCategory::Claw, "weapon.claw"),
        (ItemCategory::ClusterJewel, "jewel.cluster"),
        (ItemCategory::Dagger, "weapon.dagger"),
        (ItemCategory::FishingRod, "weapon.rod"),
        (ItemCategory::Flask, "flask"),
        (ItemCategory::Gloves, "armour.gloves"),
        (ItemCategory::HeistBlueprint, "heistmission.blueprint"),
        (ItemCategory::HeistBrooch, "heistequipment.heistreward"),
        (ItemCategory::HeistCloak, "heistequipment.heistutility"),
        (ItemCategory::HeistContract, "heistmission.contract"),
        (ItemCategory::HeistGear, "heistequipment.heistweapon"),
        (ItemCategory::HeistTool, "heistequipment.heisttool"),
        (ItemCategory::Helmet, "armour.helmet"),
        (ItemCategory::Idol, "idol"),
        (ItemCategory::Jewel, "jewel.base"),
        (ItemCategory::Map, "map"),
        (ItemCategory::MemoryLine, "memoryline"),
        (ItemCategory::OneHandedAxe, "weapon.oneaxe"),
        (ItemCategory::OneHandedMace, "weapon.onemace"),
        (ItemCategory::OneHandedSword, "weapon.onesword"),
        (ItemCategory::Quiver, "armour.quiver"),
        (ItemCategory::Ring, "accessory.ring"),
        (ItemCategory::RuneDagger, "weapon.runedagger"),
        (ItemCategory::SanctumRelic, "sanctum.relic"),
        (ItemCategory::Sceptre, "weapon.sceptre"),
        (ItemCategory::Shield, "armour.shield"),
        (ItemCategory::Staff, "weapon.staff"),
        (ItemCategory::Tincture, "tincture"),
        (ItemCategory::Trinket, "accessory.trinket"),
        (ItemCategory::TwoHandedAxe, "weapon.twoaxe"),
        (ItemCategory::TwoHandedMace, "weapon.twomace"),
        (ItemCategory::TwoHandedSword, "weapon.twosword"),
        (ItemCategory::Wand, "weapon.wand"),
        (ItemCategory::Warstaff, "weapon.warstaff"),
    ])
});

/// Remote category code for a category, if the backend accepts one
pub fn trade_id(category: ItemCategory) -> Option<&'static str> {
    TRADE_ID_BY_CATEGORY.get(&category).copied()
}

/// Bulk-exchange tag for stackable goods, when the resolved base carries one
pub fn trade_tag(item: &Item) -> Option<&str> {
    item.info.trade_tag.as_deref()
}
