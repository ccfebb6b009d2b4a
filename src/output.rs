//! Rendering of derived filter specifications.

use std::io::Write;

use crate::filters::{ItemFilters, ValueFilter};

/// Write the specification as pretty-printed JSON
pub fn write_json<W: Write>(writer: &mut W, filters: &ItemFilters) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(filters)?;
    writer.write_all(json.as_bytes())?;
    writeln!(writer)?;
    Ok(())
}

/// Write a human-readable listing: one line per offered filter with its
/// default state, the way a UI would present the checkboxes.
pub fn write_terminal<W: Write>(writer: &mut W, filters: &ItemFilters) -> anyhow::Result<()> {
    let exact = &filters.search_exact;
    match (&exact.name, &exact.base_type) {
        (Some(name), _) => {
            writeln!(writer, "search: name \"{name}\"")?;
            if let Some(base) = &exact.base_type_trade {
                writeln!(writer, "        base \"{base}\"")?;
            }
        }
        (None, Some(base_type)) => writeln!(writer, "search: base type \"{base_type}\"")?,
        (None, None) => writeln!(writer, "search: (unrestricted)")?,
    }
    if let Some(relaxed) = &filters.search_relaxed {
        writeln!(
            writer,
            "or by category: {} {}",
            relaxed.category,
            state(relaxed.disabled)
        )?;
    }
    if let Some(discriminator) = &filters.discriminator {
        writeln!(writer, "variant: {}", discriminator.trade)?;
    }

    write_value(writer, "stack size", &filters.stack_size)?;
    write_value(writer, "item level", &filters.item_level)?;
    write_value(writer, "area level", &filters.area_level)?;
    write_value(writer, "map tier", &filters.map_tier)?;
    if let Some(blighted) = &filters.map_blighted {
        writeln!(writer, "map: {:?} [on]", blighted.value)?;
    }
    write_value(writer, "gem level", &filters.gem_level)?;
    write_value(writer, "quality", &filters.quality)?;
    write_value(writer, "linked sockets", &filters.linked_sockets)?;
    write_value(writer, "white sockets", &filters.white_sockets)?;
    write_value(writer, "wings revealed", &filters.heist_wings_revealed)?;
    write_value(writer, "wings total", &filters.heist_wings_total)?;
    write_value(writer, "sentinel charge", &filters.sentinel_charge)?;

    if let Some(corrupted) = &filters.corrupted {
        let tail = if corrupted.exact { " (strict)" } else { "" };
        writeln!(
            writer,
            "corrupted: {}{tail}",
            if corrupted.value { "yes" } else { "no" }
        )?;
    }
    if let Some(rarity) = &filters.rarity {
        writeln!(writer, "rarity: {:?} [on]", rarity.value)?;
    }
    if let Some(mirrored) = &filters.mirrored {
        writeln!(writer, "mirrored {}", state(mirrored.disabled))?;
    }
    if let Some(fractured) = &filters.fractured {
        writeln!(
            writer,
            "fractured: {} {}",
            if fractured.value { "yes" } else { "no" },
            state(fractured.disabled)
        )?;
    }
    if let Some(foil) = &filters.foil {
        writeln!(writer, "foil {}", state(foil.disabled))?;
    }
    if let Some(unidentified) = &filters.unidentified {
        writeln!(writer, "unidentified {}", state(unidentified.disabled))?;
    }
    if let Some(influences) = &filters.influences {
        for influence in influences {
            writeln!(
                writer,
                "influence: {:?} {}",
                influence.value,
                state(influence.disabled)
            )?;
        }
    }
    if let Some(veiled) = &filters.veiled {
        writeln!(
            writer,
            "veiled mods: {} {}",
            veiled.stat_refs.len(),
            state(veiled.disabled)
        )?;
    }

    writeln!(
        writer,
        "league: {} ({:?} collapse)",
        filters.trade.league, filters.trade.collapse_listings
    )?;
    Ok(())
}

fn write_value<W: Write>(
    writer: &mut W,
    label: &str,
    filter: &Option<ValueFilter>,
) -> anyhow::Result<()> {
    if let Some(filter) = filter {
        match filter.max {
            Some(max) => writeln!(
                writer,
                "{label}: {}..{max} {}",
                filter.value,
                state(filter.disabled)
            )?,
            None => writeln!(writer, "{label}: {} {}", filter.value, state(filter.disabled))?,
        }
    }
    Ok(())
}

fn state(disabled: bool) -> &'static str {
    if disabled {
        "[off]"
    } else {
        "[on]"
    }
}
