//! Gem-specific filter derivation.
//!
//! Gems never reach the attribute annotators; this sub-dispatcher produces
//! the whole specification. Priority: transfigured name resolution, then
//! awakened gems, then the level-only support gems, then ordinary gems.

use crate::config::SearchConfig;
use crate::errors::{FilterError, FilterResult};
use crate::item::Item;
use crate::registry::{BaseTypeRegistry, Namespace};

use super::derive::require;
use super::naming::resolve_name;
use super::special::SPECIAL_SUPPORT_GEMS;
use super::{CorruptedFilter, DiscriminatorFilter, ItemFilters, SearchExact, ValueFilter};

pub(super) fn derive_gem_filters(
    item: &Item,
    registry: &BaseTypeRegistry,
    config: &SearchConfig,
    mut filters: ItemFilters,
) -> FilterResult<ItemFilters> {
    let gem = item
        .info
        .gem
        .as_ref()
        .ok_or(FilterError::MissingAttribute {
            category: item.category,
            attribute: "gem details",
        })?;
    let gem_level = require(item, item.gem_level, "gem level")?;

    if !gem.transfigured {
        filters.search_exact = SearchExact {
            base_type: Some(item.info.name.clone()),
            base_type_trade: Some(resolve_name(config, &item.info).to_owned()),
            ..Default::default()
        };
    } else {
        // transfigured gems are searched under their normal variant plus a
        // discriminator carrying the variant's trade identifier
        let variant_ref =
            gem.normal_variant
                .as_deref()
                .ok_or(FilterError::MissingAttribute {
                    category: item.category,
                    attribute: "normal gem variant",
                })?;
        let normal = registry.lookup(Namespace::Gem, variant_ref)?;
        filters.search_exact = SearchExact {
            base_type: Some(item.info.name.clone()),
            base_type_trade: Some(resolve_name(config, normal).to_owned()),
            ..Default::default()
        };
        let trade_disc =
            item.info
                .trade_disc
                .clone()
                .ok_or(FilterError::MissingAttribute {
                    category: item.category,
                    attribute: "trade discriminator",
                })?;
        filters.discriminator = Some(DiscriminatorFilter { trade: trade_disc });
    }

    filters.corrupted = Some(CorruptedFilter {
        value: item.corrupted,
        exact: false,
    });

    if gem.awakened {
        filters.gem_level = Some(ValueFilter::new(gem_level, gem_level < 5));

        if item.corrupted {
            if let Some(quality) = item.quality.filter(|&quality| quality > 0) {
                filters.quality = Some(ValueFilter::new(quality, quality < 20));
            }
        }

        return Ok(filters);
    }

    if SPECIAL_SUPPORT_GEMS.contains(&item.info.ref_name.as_str()) {
        filters.gem_level = Some(ValueFilter::new(gem_level, gem_level < 3));

        if item.corrupted {
            if let Some(quality) = item.quality.filter(|&quality| quality > 0) {
                // quality is a rounding error on these, never pre-applied
                filters.quality = Some(ValueFilter::new(quality, true));
            }
        }

        return Ok(filters);
    }

    if let Some(quality) = item.quality.filter(|&quality| quality > 0) {
        filters.quality = Some(ValueFilter::new(quality, quality < 16));
    }

    filters.gem_level = Some(ValueFilter::new(gem_level, gem_level < 19));

    Ok(filters)
}
