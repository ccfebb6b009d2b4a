//! Category dispatch for filter derivation.
//!
//! An ordered chain of branch rules over the item category; the first
//! matching branch wins. Several branches return a finished specification
//! immediately, the rest fall through to the attribute annotators. The
//! ordering is load-bearing and must not be flattened into a single rule
//! table.

use log::debug;

use crate::config::SearchConfig;
use crate::errors::{FilterError, FilterResult};
use crate::item::{Item, ItemCategory, ItemRarity};
use crate::registry::{BaseTypeRegistry, Namespace, UniqueOrigin};
use crate::trade;

use super::annotate::annotate_attributes;
use super::brackets::floor_to_bracket;
use super::gems::derive_gem_filters;
use super::naming::resolve_name;
use super::special::{self, NamedRule};
use super::{
    ItemFilters, MapBlightedFilter, SearchExact, SearchRelaxed, ValueFilter,
};

/// Derive the complete filter specification for `item`.
///
/// Never mutates its inputs; either returns an internally consistent
/// specification or fails on a contract violation (missing required
/// attribute, unknown base-type reference).
pub fn derive_filters(
    item: &Item,
    registry: &BaseTypeRegistry,
    config: &SearchConfig,
) -> FilterResult<ItemFilters> {
    debug!(
        "deriving filters for {} ({})",
        item.info.ref_name, item.category
    );
    let mut filters = ItemFilters::for_config(config);

    if item.category == ItemCategory::Gem {
        return derive_gem_filters(item, registry, config, filters);
    }

    if item.category == ItemCategory::CapturedBeast {
        // the beast exchange only accepts canonical names
        filters.search_exact = SearchExact {
            base_type: Some(item.info.name.clone()),
            base_type_trade: Some(item.info.ref_name.clone()),
            ..Default::default()
        };
        return Ok(filters);
    }

    if item.stack_size.is_some() || trade::trade_tag(item).is_some() {
        let stock = item.stack_size.unwrap_or(1);
        filters.stack_size = Some(ValueFilter::new(
            stock,
            !(stock > 1 && config.activate_stock_filter),
        ));
    }

    if item.category == ItemCategory::Invitation {
        filters.search_exact = exact_base_type(item, config);
        return Ok(filters);
    }

    if item.category == ItemCategory::MetamorphSample {
        filters.search_exact = exact_base_type(item, config);
        filters.item_level = Some(ValueFilter::enabled(require(
            item,
            item.item_level,
            "item level",
        )?));
        return Ok(filters);
    }

    if item.category == ItemCategory::DivinationCard
        || item.category == ItemCategory::Currency
        || matches!(
            special::named_rule(&item.info.ref_name),
            Some(NamedRule::ExactNameOnly)
        )
    {
        filters.search_exact = exact_base_type(item, config);
        match special::named_rule(&item.info.ref_name) {
            Some(NamedRule::BracketedAreaLevel(area_brackets)) => {
                let area = require(item, item.area_level, "area level")?;
                filters.area_level =
                    Some(ValueFilter::enabled(floor_to_bracket(area, area_brackets)));
            }
            Some(NamedRule::RawAreaLevel) => {
                filters.area_level = Some(ValueFilter::enabled(require(
                    item,
                    item.area_level,
                    "area level",
                )?));
            }
            Some(NamedRule::RawItemLevel) => {
                filters.item_level = Some(ValueFilter::enabled(require(
                    item,
                    item.item_level,
                    "item level",
                )?));
            }
            Some(NamedRule::ExactNameOnly) | None => {}
        }
        return Ok(filters);
    }

    let unique_origin = match item.rarity {
        ItemRarity::Unique => item.info.unique.as_ref(),
        _ => None,
    };

    if item.category == ItemCategory::Map {
        if let Some(origin) = unique_origin {
            filters.search_exact = exact_unique(item, origin, registry, config)?;
        } else {
            let occupied = item
                .stats
                .iter()
                .any(|stat| stat.stat_ref == special::OCCUPIED_MAP_STAT);
            filters.search_exact = exact_base_type(item, config);
            filters.search_relaxed = Some(SearchRelaxed {
                category: item.category,
                disabled: !occupied,
            });
        }

        if let Some(kind) = item.map_blighted {
            filters.map_blighted = Some(MapBlightedFilter { value: kind });
        }

        filters.map_tier = Some(ValueFilter::enabled(require(
            item,
            item.map_tier,
            "map tier",
        )?));
    } else if item.info.ref_name == special::EXPEDITION_LOGBOOK {
        filters.search_exact = exact_base_type(item, config);
        let area = require(item, item.area_level, "area level")?;
        filters.area_level = Some(ValueFilter::enabled(floor_to_bracket(
            area,
            special::LOGBOOK_AREA_BRACKETS,
        )));
    } else if item.category == ItemCategory::HeistBlueprint {
        // the backend rejects the category facet for blueprints, so the
        // relaxed search is offered but can never start enabled
        filters.search_relaxed = Some(SearchRelaxed {
            category: item.category,
            disabled: true,
        });
        filters.search_exact = exact_base_type(item, config);
        filters.area_level = Some(ValueFilter::enabled(require(
            item,
            item.area_level,
            "area level",
        )?));

        if let Some(revealed) = item
            .heist
            .as_ref()
            .and_then(|heist| heist.wings_revealed)
            .filter(|&wings| wings > 0)
        {
            filters.heist_wings_revealed = Some(ValueFilter::enabled(revealed));
        }
        if let Some(total) = item
            .heist
            .as_ref()
            .and_then(|heist| heist.wings_total)
            .filter(|&wings| wings > 3)
        {
            filters.heist_wings_total = Some(ValueFilter::enabled(total));
        }
    } else if let Some(origin) = unique_origin {
        filters.search_exact = exact_unique(item, origin, registry, config)?;
    } else {
        filters.search_exact = exact_base_type(item, config);
        if trade::trade_id(item.category).is_some() {
            let disabled = match item.category {
                ItemCategory::ClusterJewel | ItemCategory::Idol => true,
                ItemCategory::SanctumRelic | ItemCategory::Charm => false,
                _ => config.exact,
            };
            filters.search_relaxed = Some(SearchRelaxed {
                category: item.category,
                disabled,
            });
        }
    }

    Ok(annotate_attributes(item, config, filters))
}

/// Exact search by the item's own base type
fn exact_base_type(item: &Item, config: &SearchConfig) -> SearchExact {
    SearchExact {
        base_type: Some(item.info.name.clone()),
        base_type_trade: Some(resolve_name(config, &item.info).to_owned()),
        ..Default::default()
    }
}

/// Exact search by unique name paired with the resolved base of its origin
fn exact_unique(
    item: &Item,
    origin: &UniqueOrigin,
    registry: &BaseTypeRegistry,
    config: &SearchConfig,
) -> FilterResult<SearchExact> {
    let base = registry.lookup(Namespace::Item, &origin.base)?;
    Ok(SearchExact {
        name: Some(item.info.name.clone()),
        name_trade: Some(resolve_name(config, &item.info).to_owned()),
        base_type_trade: Some(resolve_name(config, base).to_owned()),
        base_type: None,
    })
}

pub(super) fn require(
    item: &Item,
    attribute_value: Option<u32>,
    attribute: &'static str,
) -> FilterResult<u32> {
    attribute_value.ok_or(FilterError::MissingAttribute {
        category: item.category,
        attribute,
    })
}
