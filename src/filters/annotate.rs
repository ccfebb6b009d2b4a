//! Attribute annotators.
//!
//! Independent rule blocks that run after category dispatch, each testing
//! one slice of the item and adding or overwriting one filter entry. The
//! table order below is fixed: the item-level annotator must run before the
//! veiled annotator, which flips its default.

use crate::config::SearchConfig;
use crate::item::{Item, ItemCategory, ItemRarity, ModifierKind};

use super::brackets::{ceil_to_bracket, floor_to_bracket};
use super::special;
use super::{
    BoolFilter, CorruptedFilter, InfluenceFilter, ItemFilters, RarityFilter, RarityTag,
    ToggleFilter, ValueFilter, VeiledFilter,
};

type Annotator = fn(&Item, &SearchConfig, ItemFilters) -> ItemFilters;

const ANNOTATORS: &[Annotator] = &[
    annotate_sentinel_charge,
    annotate_consumable_quality,
    annotate_base_quality,
    annotate_linked_sockets,
    annotate_white_sockets,
    annotate_corruption,
    annotate_rarity,
    annotate_mirrored,
    annotate_fractured,
    annotate_foil,
    annotate_influences,
    annotate_item_level,
    annotate_unidentified,
    annotate_veiled,
];

pub(super) fn annotate_attributes(
    item: &Item,
    config: &SearchConfig,
    filters: ItemFilters,
) -> ItemFilters {
    ANNOTATORS
        .iter()
        .fold(filters, |acc, annotate| annotate(item, config, acc))
}

fn annotate_sentinel_charge(item: &Item, _config: &SearchConfig, mut filters: ItemFilters) -> ItemFilters {
    if let Some(charge) = item.sentinel_charge {
        filters.sentinel_charge = Some(ValueFilter::enabled(charge));
    }
    filters
}

/// Flasks and tinctures trade on quality above the 20% craft baseline
fn annotate_consumable_quality(item: &Item, _config: &SearchConfig, mut filters: ItemFilters) -> ItemFilters {
    let quality = match item.quality {
        Some(quality) if quality >= 20 => quality,
        _ => return filters,
    };
    if item.category == ItemCategory::Flask || item.category == ItemCategory::Tincture {
        filters.quality = Some(ValueFilter::new(quality, quality <= 20));
    }
    filters
}

/// Categories whose listings never trade on base-item quality
const BASE_QUALITY_EXCLUDED: &[ItemCategory] = &[
    ItemCategory::Gem,
    ItemCategory::Currency,
    ItemCategory::DivinationCard,
    ItemCategory::Map,
    ItemCategory::CapturedBeast,
    ItemCategory::Invitation,
    ItemCategory::MetamorphSample,
    ItemCategory::HeistContract,
    ItemCategory::HeistBlueprint,
    ItemCategory::Sentinel,
    ItemCategory::MemoryLine,
];

/// Over-quality bases (21%+) are worth filtering on under strict matching
fn annotate_base_quality(item: &Item, config: &SearchConfig, mut filters: ItemFilters) -> ItemFilters {
    let quality = match item.quality {
        Some(quality) if quality >= 21 => quality,
        _ => return filters,
    };
    if config.exact && !BASE_QUALITY_EXCLUDED.contains(&item.category) {
        filters.quality = Some(ValueFilter::enabled(quality));
    }
    filters
}

fn annotate_linked_sockets(item: &Item, _config: &SearchConfig, mut filters: ItemFilters) -> ItemFilters {
    if let Some(linked) = item
        .sockets
        .as_ref()
        .and_then(|sockets| sockets.linked)
        .filter(|&count| count > 0)
    {
        filters.linked_sockets = Some(ValueFilter::enabled(linked));
    }
    filters
}

fn annotate_white_sockets(item: &Item, _config: &SearchConfig, mut filters: ItemFilters) -> ItemFilters {
    if let Some(white) = item
        .sockets
        .as_ref()
        .and_then(|sockets| sockets.white)
        .filter(|&count| count > 0)
    {
        filters.white_sockets = Some(ValueFilter::enabled(white));
    }
    filters
}

/// Magic jewels keep their rarity when socketed in The Adorned, so their
/// corruption state and rarity have to match literally.
fn is_adorned_jewel(item: &Item) -> bool {
    item.rarity == ItemRarity::Magic
        && (item.category == ItemCategory::Jewel || item.category == ItemCategory::AbyssJewel)
}

fn annotate_corruption(item: &Item, _config: &SearchConfig, mut filters: ItemFilters) -> ItemFilters {
    if item.unmodifiable {
        return filters;
    }
    if matches!(
        item.rarity,
        ItemRarity::Normal | ItemRarity::Magic | ItemRarity::Rare | ItemRarity::Unique
    ) {
        filters.corrupted = Some(CorruptedFilter {
            value: item.corrupted,
            exact: is_adorned_jewel(item),
        });
    }
    filters
}

fn annotate_rarity(item: &Item, _config: &SearchConfig, mut filters: ItemFilters) -> ItemFilters {
    if is_adorned_jewel(item) {
        filters.rarity = Some(RarityFilter {
            value: RarityTag::Magic,
        });
    } else if matches!(
        item.rarity,
        ItemRarity::Normal | ItemRarity::Magic | ItemRarity::Rare
    ) {
        // uniques are already pinned by the name-exact search
        filters.rarity = Some(RarityFilter {
            value: RarityTag::Nonunique,
        });
    }
    filters
}

fn annotate_mirrored(item: &Item, _config: &SearchConfig, mut filters: ItemFilters) -> ItemFilters {
    if item.mirrored {
        filters.mirrored = Some(ToggleFilter { disabled: false });
    }
    filters
}

fn annotate_fractured(item: &Item, config: &SearchConfig, mut filters: ItemFilters) -> ItemFilters {
    if !item.fractured && config.exact {
        filters.fractured = Some(BoolFilter {
            value: false,
            disabled: false,
        });
    }
    filters
}

fn annotate_foil(item: &Item, _config: &SearchConfig, mut filters: ItemFilters) -> ItemFilters {
    if item.foil {
        filters.foil = Some(ToggleFilter { disabled: false });
    }
    filters
}

/// One filter per influence for one or two tags; three or more are too
/// ambiguous to filter on.
fn annotate_influences(item: &Item, config: &SearchConfig, mut filters: ItemFilters) -> ItemFilters {
    if (1..=2).contains(&item.influences.len()) {
        filters.influences = Some(
            item.influences
                .iter()
                .map(|&influence| InfluenceFilter {
                    value: influence,
                    disabled: !config.exact,
                })
                .collect(),
        );
    }
    filters
}

/// Categories where item level says nothing about the listing's value
const ITEM_LEVEL_EXCLUDED: &[ItemCategory] = &[
    ItemCategory::Map,
    ItemCategory::Jewel,
    ItemCategory::HeistBlueprint,
    ItemCategory::HeistContract,
    ItemCategory::MemoryLine,
    ItemCategory::SanctumRelic,
    ItemCategory::Charm,
    ItemCategory::Idol,
];

fn annotate_item_level(item: &Item, config: &SearchConfig, mut filters: ItemFilters) -> ItemFilters {
    let level = match item.item_level.filter(|&level| level > 0) {
        Some(level) => level,
        None => return filters,
    };

    let excluded = item.rarity == ItemRarity::Unique
        || ITEM_LEVEL_EXCLUDED.contains(&item.category)
        || item.info.ref_name == special::EXPEDITION_LOGBOOK;
    if !excluded {
        if item.category == ItemCategory::ClusterJewel {
            filters.item_level = Some(ValueFilter {
                value: floor_to_bracket(level, special::CLUSTER_LEVEL_FLOOR),
                max: Some(ceil_to_bracket(level, special::CLUSTER_LEVEL_CEIL)),
                disabled: !config.exact,
            });
        } else {
            filters.item_level = Some(ValueFilter::new(
                level.min(86),
                !config.exact
                    || item.category == ItemCategory::Flask
                    || item.category == ItemCategory::Tincture,
            ));
        }
    }

    if item.rarity == ItemRarity::Unique {
        if item.unidentified && item.info.ref_name == special::WATCHERS_EYE {
            filters.item_level = Some(ValueFilter::enabled(level));
        }

        if level >= 75 && special::AGNEROD_STAVES.contains(&item.info.ref_name.as_str()) {
            filters.item_level = Some(ValueFilter::enabled(floor_to_bracket(
                level,
                special::AGNEROD_LEVEL_BRACKETS,
            )));
        }
    }

    filters
}

fn annotate_unidentified(item: &Item, _config: &SearchConfig, mut filters: ItemFilters) -> ItemFilters {
    if item.unidentified {
        filters.unidentified = Some(BoolFilter {
            value: true,
            disabled: item.rarity != ItemRarity::Unique,
        });
    }
    filters
}

fn annotate_veiled(item: &Item, _config: &SearchConfig, mut filters: ItemFilters) -> ItemFilters {
    if !item.veiled {
        return filters;
    }

    filters.veiled = Some(VeiledFilter {
        stat_refs: item
            .stats
            .iter()
            .filter(|stat| stat.modifier == ModifierKind::Veiled)
            .map(|stat| stat.stat_ref.clone())
            .collect(),
        disabled: false,
    });

    // a veiled non-unique search needs the level constraint to narrow results
    if item.rarity != ItemRarity::Unique {
        if let Some(level_filter) = filters.item_level.as_mut() {
            level_filter.disabled = false;
        }
    }

    filters
}
