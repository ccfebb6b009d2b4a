#![allow(dead_code)]

use tradefilter::config::SearchConfig;
use tradefilter::item::{Item, ItemCategory, ItemRarity};
use tradefilter::registry::{BaseTypeInfo, BaseTypeRegistry, GemDetails, Namespace, UniqueOrigin};

/// Plain base-type descriptor whose localized name equals its canonical ref
pub fn base_info(ref_name: &str) -> BaseTypeInfo {
    BaseTypeInfo {
        namespace: Namespace::Item,
        ref_name: ref_name.to_string(),
        name: ref_name.to_string(),
        unique: None,
        gem: None,
        trade_tag: None,
        trade_disc: None,
    }
}

/// Descriptor with a distinct localized display name
pub fn localized_info(ref_name: &str, name: &str) -> BaseTypeInfo {
    BaseTypeInfo {
        name: name.to_string(),
        ..base_info(ref_name)
    }
}

/// Descriptor for a unique item rolling on `base`
pub fn unique_info(ref_name: &str, base: &str) -> BaseTypeInfo {
    BaseTypeInfo {
        unique: Some(UniqueOrigin {
            base: base.to_string(),
        }),
        ..base_info(ref_name)
    }
}

/// Descriptor for an ordinary (non-awakened, non-transfigured) gem
pub fn gem_info(ref_name: &str) -> BaseTypeInfo {
    BaseTypeInfo {
        namespace: Namespace::Gem,
        gem: Some(GemDetails::default()),
        ..base_info(ref_name)
    }
}

/// Item with every optional attribute absent and every flag cleared
pub fn bare_item(category: ItemCategory, rarity: ItemRarity, info: BaseTypeInfo) -> Item {
    Item {
        category,
        rarity,
        info,
        item_level: None,
        area_level: None,
        map_tier: None,
        gem_level: None,
        quality: None,
        stack_size: None,
        sentinel_charge: None,
        sockets: None,
        heist: None,
        map_blighted: None,
        corrupted: false,
        mirrored: false,
        fractured: false,
        foil: false,
        unidentified: false,
        veiled: false,
        unmodifiable: false,
        influences: vec![],
        stats: vec![],
    }
}

pub fn relaxed_config() -> SearchConfig {
    SearchConfig::relaxed("Standard")
}

pub fn strict_config() -> SearchConfig {
    SearchConfig::strict("Standard")
}

pub fn empty_registry() -> BaseTypeRegistry {
    BaseTypeRegistry::new()
}
