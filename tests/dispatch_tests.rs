//! Branch-by-branch coverage of the category dispatcher.

mod common;

use common::*;
use pretty_assertions::assert_eq;
use tradefilter::config::SearchConfig;
use tradefilter::item::{ItemCategory, ItemRarity, MapBlighted, ModifierKind, StatEntry};
use tradefilter::registry::{BaseTypeRegistry, Namespace};
use tradefilter::{derive_filters, FilterError, SearchExact, ValueFilter};

#[test]
fn captured_beast_searches_canonical_name_on_trade() {
    let info = localized_info("Craicic Chimeral", "Craicic-Chimäre");
    let item = bare_item(ItemCategory::CapturedBeast, ItemRarity::Rare, info);

    let filters = derive_filters(&item, &empty_registry(), &relaxed_config()).unwrap();

    assert_eq!(
        filters.search_exact,
        SearchExact {
            base_type: Some("Craicic-Chimäre".to_string()),
            base_type_trade: Some("Craicic Chimeral".to_string()),
            ..Default::default()
        }
    );
    // terminal branch: annotators never ran
    assert_eq!(filters.corrupted, None);
    assert_eq!(filters.rarity, None);
}

#[test]
fn stack_size_defaults_to_disabled() {
    let mut info = base_info("Chaos Orb");
    info.trade_tag = Some("chaos".to_string());
    let mut item = bare_item(ItemCategory::Currency, ItemRarity::Normal, info);
    item.stack_size = Some(40);

    let filters = derive_filters(&item, &empty_registry(), &relaxed_config()).unwrap();

    assert_eq!(filters.stack_size, Some(ValueFilter::new(40, true)));
}

#[test]
fn stack_size_activates_for_multiples_when_opted_in() {
    let mut item = bare_item(
        ItemCategory::Invitation,
        ItemRarity::Normal,
        base_info("Maven's Invitation: The Feared"),
    );
    item.stack_size = Some(3);
    let config = SearchConfig {
        activate_stock_filter: true,
        ..relaxed_config()
    };

    let filters = derive_filters(&item, &empty_registry(), &config).unwrap();

    assert_eq!(filters.stack_size, Some(ValueFilter::enabled(3)));
    assert_eq!(
        filters.search_exact.base_type,
        Some("Maven's Invitation: The Feared".to_string())
    );
    assert_eq!(filters.corrupted, None);
}

#[test]
fn single_stack_stays_disabled_even_when_opted_in() {
    let mut info = base_info("Mirror of Kalandra");
    info.trade_tag = Some("mirror".to_string());
    let item = bare_item(ItemCategory::Currency, ItemRarity::Normal, info);
    let config = SearchConfig {
        activate_stock_filter: true,
        ..relaxed_config()
    };

    let filters = derive_filters(&item, &empty_registry(), &config).unwrap();

    assert_eq!(filters.stack_size, Some(ValueFilter::new(1, true)));
}

#[test]
fn metamorph_sample_requires_item_level() {
    let mut item = bare_item(
        ItemCategory::MetamorphSample,
        ItemRarity::Normal,
        base_info("Portentia's Lung"),
    );

    let err = derive_filters(&item, &empty_registry(), &relaxed_config()).unwrap_err();
    assert_eq!(
        err,
        FilterError::MissingAttribute {
            category: ItemCategory::MetamorphSample,
            attribute: "item level",
        }
    );

    item.item_level = Some(71);
    let filters = derive_filters(&item, &empty_registry(), &relaxed_config()).unwrap();
    assert_eq!(filters.item_level, Some(ValueFilter::enabled(71)));
}

#[test]
fn divination_card_is_exact_name_only() {
    let item = bare_item(
        ItemCategory::DivinationCard,
        ItemRarity::Normal,
        base_info("The Doctor"),
    );

    let filters = derive_filters(&item, &empty_registry(), &relaxed_config()).unwrap();

    assert_eq!(filters.search_exact.base_type, Some("The Doctor".to_string()));
    assert_eq!(filters.search_relaxed, None);
    assert_eq!(filters.rarity, None);
}

#[test]
fn charged_compass_name_forces_exact_search() {
    // the name alone triggers the exact-name branch, whatever category the
    // taxonomy assigned
    let mut item = bare_item(
        ItemCategory::Trinket,
        ItemRarity::Normal,
        base_info("Charged Compass"),
    );
    item.stack_size = Some(2);

    let filters = derive_filters(&item, &empty_registry(), &relaxed_config()).unwrap();

    assert_eq!(
        filters.search_exact.base_type,
        Some("Charged Compass".to_string())
    );
    assert_eq!(filters.search_relaxed, None);
    assert_eq!(filters.stack_size, Some(ValueFilter::new(2, true)));
    assert_eq!(filters.corrupted, None);
}

#[test]
fn chronicle_quantizes_area_level() {
    let mut item = bare_item(
        ItemCategory::Currency,
        ItemRarity::Normal,
        base_info("Chronicle of Atzoatl"),
    );
    item.area_level = Some(72);

    let filters = derive_filters(&item, &empty_registry(), &relaxed_config()).unwrap();

    assert_eq!(filters.area_level, Some(ValueFilter::enabled(68)));
}

#[test]
fn mirrored_tablet_keeps_raw_area_level() {
    let mut item = bare_item(
        ItemCategory::Currency,
        ItemRarity::Normal,
        base_info("Mirrored Tablet"),
    );
    item.area_level = Some(83);

    let filters = derive_filters(&item, &empty_registry(), &relaxed_config()).unwrap();

    assert_eq!(filters.area_level, Some(ValueFilter::enabled(83)));
}

#[test]
fn filled_coffin_keeps_raw_item_level() {
    let mut item = bare_item(
        ItemCategory::Currency,
        ItemRarity::Normal,
        base_info("Filled Coffin"),
    );
    item.item_level = Some(84);

    let filters = derive_filters(&item, &empty_registry(), &relaxed_config()).unwrap();

    assert_eq!(filters.item_level, Some(ValueFilter::enabled(84)));
}

#[test]
fn named_exception_requires_its_attribute() {
    let item = bare_item(
        ItemCategory::Currency,
        ItemRarity::Normal,
        base_info("Chronicle of Atzoatl"),
    );

    let err = derive_filters(&item, &empty_registry(), &relaxed_config()).unwrap_err();
    assert_eq!(
        err,
        FilterError::MissingAttribute {
            category: ItemCategory::Currency,
            attribute: "area level",
        }
    );
}

#[test]
fn map_requires_tier_and_offers_relaxed_category() {
    let mut item = bare_item(ItemCategory::Map, ItemRarity::Rare, base_info("Strand Map"));

    let err = derive_filters(&item, &empty_registry(), &relaxed_config()).unwrap_err();
    assert_eq!(
        err,
        FilterError::MissingAttribute {
            category: ItemCategory::Map,
            attribute: "map tier",
        }
    );

    item.map_tier = Some(16);
    let filters = derive_filters(&item, &empty_registry(), &relaxed_config()).unwrap();
    assert_eq!(filters.map_tier, Some(ValueFilter::enabled(16)));
    let relaxed = filters.search_relaxed.unwrap();
    assert_eq!(relaxed.category, ItemCategory::Map);
    assert!(relaxed.disabled);
}

#[test]
fn occupied_map_enables_relaxed_category() {
    let mut item = bare_item(ItemCategory::Map, ItemRarity::Rare, base_info("Strand Map"));
    item.map_tier = Some(16);
    item.stats.push(StatEntry {
        modifier: ModifierKind::Implicit,
        stat_ref: "Map is occupied by #".to_string(),
    });

    let filters = derive_filters(&item, &empty_registry(), &relaxed_config()).unwrap();

    assert!(!filters.search_relaxed.unwrap().disabled);
}

#[test]
fn blighted_map_carries_marker_filter() {
    let mut item = bare_item(ItemCategory::Map, ItemRarity::Normal, base_info("Strand Map"));
    item.map_tier = Some(14);
    item.map_blighted = Some(MapBlighted::Blighted);

    let filters = derive_filters(&item, &empty_registry(), &relaxed_config()).unwrap();

    assert_eq!(filters.map_blighted.unwrap().value, MapBlighted::Blighted);
}

#[test]
fn unique_map_pairs_name_with_resolved_base() {
    let registry = BaseTypeRegistry::from_entries([base_info("Overgrown Shrine Map")]);
    let mut item = bare_item(
        ItemCategory::Map,
        ItemRarity::Unique,
        unique_info("Acton's Nightmare", "Overgrown Shrine Map"),
    );
    item.map_tier = Some(7);

    let filters = derive_filters(&item, &registry, &relaxed_config()).unwrap();

    assert_eq!(filters.search_exact.name, Some("Acton's Nightmare".to_string()));
    assert_eq!(
        filters.search_exact.base_type_trade,
        Some("Overgrown Shrine Map".to_string())
    );
    assert_eq!(filters.search_exact.base_type, None);
    assert_eq!(filters.search_relaxed, None);
}

#[test]
fn logbook_quantizes_area_level_to_its_brackets() {
    let mut item = bare_item(
        ItemCategory::Logbook,
        ItemRarity::Rare,
        base_info("Expedition Logbook"),
    );
    item.area_level = Some(79);
    item.item_level = Some(80);

    let filters = derive_filters(&item, &empty_registry(), &relaxed_config()).unwrap();

    assert_eq!(filters.area_level, Some(ValueFilter::enabled(78)));
    // the logbook name is on the item-level exclusion list
    assert_eq!(filters.item_level, None);
    // annotators ran: a rare logbook still gets the corruption filter
    assert!(filters.corrupted.is_some());
}

#[test]
fn heist_blueprint_relaxed_category_never_starts_enabled() {
    let mut item = bare_item(
        ItemCategory::HeistBlueprint,
        ItemRarity::Rare,
        base_info("Bunker Blueprint"),
    );
    item.area_level = Some(81);
    item.heist = Some(tradefilter::item::HeistJob {
        wings_revealed: Some(2),
        wings_total: Some(3),
    });

    let filters = derive_filters(&item, &empty_registry(), &relaxed_config()).unwrap();

    assert!(filters.search_relaxed.unwrap().disabled);
    assert_eq!(filters.area_level, Some(ValueFilter::enabled(81)));
    assert_eq!(filters.heist_wings_revealed, Some(ValueFilter::enabled(2)));
    // three wings is the baseline, not worth filtering
    assert_eq!(filters.heist_wings_total, None);
}

#[test]
fn heist_blueprint_filters_wings_total_above_three() {
    let mut item = bare_item(
        ItemCategory::HeistBlueprint,
        ItemRarity::Rare,
        base_info("Records Office Blueprint"),
    );
    item.area_level = Some(83);
    item.heist = Some(tradefilter::item::HeistJob {
        wings_revealed: None,
        wings_total: Some(4),
    });

    let filters = derive_filters(&item, &empty_registry(), &relaxed_config()).unwrap();

    assert_eq!(filters.heist_wings_revealed, None);
    assert_eq!(filters.heist_wings_total, Some(ValueFilter::enabled(4)));
}

#[test]
fn unique_item_resolves_base_through_registry() {
    let registry = BaseTypeRegistry::from_entries([localized_info("Glorious Plate", "Ruhmvolle Platte")]);
    let item = bare_item(
        ItemCategory::BodyArmour,
        ItemRarity::Unique,
        unique_info("Kaom's Heart", "Glorious Plate"),
    );

    let filters = derive_filters(&item, &registry, &relaxed_config()).unwrap();

    assert_eq!(filters.search_exact.name, Some("Kaom's Heart".to_string()));
    assert_eq!(filters.search_exact.name_trade, Some("Kaom's Heart".to_string()));
    assert_eq!(
        filters.search_exact.base_type_trade,
        Some("Ruhmvolle Platte".to_string())
    );
}

#[test]
fn canonical_naming_uses_ref_names_on_trade() {
    let registry = BaseTypeRegistry::from_entries([localized_info("Glorious Plate", "Ruhmvolle Platte")]);
    let item = bare_item(
        ItemCategory::BodyArmour,
        ItemRarity::Unique,
        unique_info("Kaom's Heart", "Glorious Plate"),
    );
    let config = SearchConfig {
        canonical_names: true,
        ..relaxed_config()
    };

    let filters = derive_filters(&item, &registry, &config).unwrap();

    assert_eq!(
        filters.search_exact.base_type_trade,
        Some("Glorious Plate".to_string())
    );
}

#[test]
fn unique_base_lookup_miss_is_fatal() {
    let item = bare_item(
        ItemCategory::BodyArmour,
        ItemRarity::Unique,
        unique_info("Kaom's Heart", "Glorious Plate"),
    );

    let err = derive_filters(&item, &empty_registry(), &relaxed_config()).unwrap_err();

    assert_eq!(
        err,
        FilterError::UnknownBaseType {
            namespace: Namespace::Item,
            ref_name: "Glorious Plate".to_string(),
        }
    );
}

#[test]
fn unresolvable_unique_falls_back_to_base_type_search() {
    let item = bare_item(
        ItemCategory::BodyArmour,
        ItemRarity::Unique,
        base_info("Glorious Plate"),
    );

    let filters = derive_filters(&item, &empty_registry(), &relaxed_config()).unwrap();

    assert_eq!(filters.search_exact.name, None);
    assert_eq!(filters.search_exact.base_type, Some("Glorious Plate".to_string()));
}

#[test]
fn general_branch_relaxed_default_follows_exact_switch() {
    let item = bare_item(ItemCategory::Helmet, ItemRarity::Rare, base_info("Hubris Circlet"));

    let relaxed = derive_filters(&item, &empty_registry(), &relaxed_config()).unwrap();
    assert!(!relaxed.search_relaxed.unwrap().disabled);

    let strict = derive_filters(&item, &empty_registry(), &strict_config()).unwrap();
    assert!(strict.search_relaxed.unwrap().disabled);
}

#[test]
fn cluster_jewels_and_idols_never_default_to_relaxed() {
    for (category, base) in [
        (ItemCategory::ClusterJewel, "Large Cluster Jewel"),
        (ItemCategory::Idol, "Minor Idol"),
    ] {
        let item = bare_item(category, ItemRarity::Rare, base_info(base));
        let filters = derive_filters(&item, &empty_registry(), &relaxed_config()).unwrap();
        assert!(filters.search_relaxed.unwrap().disabled, "{category}");
    }
}

#[test]
fn relics_and_charms_always_default_to_relaxed() {
    for (category, base) in [
        (ItemCategory::SanctumRelic, "Urn Relic"),
        (ItemCategory::Charm, "Ursine Charm"),
    ] {
        let item = bare_item(category, ItemRarity::Magic, base_info(base));
        let filters = derive_filters(&item, &empty_registry(), &strict_config()).unwrap();
        assert!(!filters.search_relaxed.unwrap().disabled, "{category}");
    }
}

#[test]
fn categories_without_trade_id_get_no_relaxed_filter() {
    let item = bare_item(
        ItemCategory::Sentinel,
        ItemRarity::Magic,
        base_info("Stalker Sentinel"),
    );

    let filters = derive_filters(&item, &empty_registry(), &relaxed_config()).unwrap();

    assert_eq!(filters.search_relaxed, None);
}

#[test]
fn exactly_one_naming_strategy_per_item() {
    let registry = BaseTypeRegistry::from_entries([base_info("Glorious Plate")]);
    let items = [
        bare_item(ItemCategory::Helmet, ItemRarity::Rare, base_info("Hubris Circlet")),
        bare_item(
            ItemCategory::BodyArmour,
            ItemRarity::Unique,
            unique_info("Kaom's Heart", "Glorious Plate"),
        ),
        bare_item(
            ItemCategory::DivinationCard,
            ItemRarity::Normal,
            base_info("The Doctor"),
        ),
        bare_item(
            ItemCategory::CapturedBeast,
            ItemRarity::Rare,
            base_info("Craicic Chimeral"),
        ),
    ];

    for item in &items {
        let filters = derive_filters(item, &registry, &relaxed_config()).unwrap();
        let by_name = filters.search_exact.name.is_some();
        let by_base = filters.search_exact.base_type.is_some();
        assert!(
            by_name ^ by_base,
            "expected exactly one naming strategy for {}",
            item.info.ref_name
        );
    }
}
