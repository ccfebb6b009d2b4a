use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use std::fs::{self, File};
use std::io::{self, Write};

use tradefilter::cli::{Cli, OutputFormat};
use tradefilter::config::SearchConfig;
use tradefilter::item::Item;
use tradefilter::registry::{BaseTypeInfo, BaseTypeRegistry};
use tradefilter::{derive_filters, output};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let item: Item = {
        let raw = fs::read_to_string(&cli.item)
            .with_context(|| format!("failed to read item from {}", cli.item.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse item from {}", cli.item.display()))?
    };

    let entries: Vec<BaseTypeInfo> = {
        let raw = fs::read_to_string(&cli.registry)
            .with_context(|| format!("failed to read registry from {}", cli.registry.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse registry from {}", cli.registry.display()))?
    };
    let registry = BaseTypeRegistry::from_entries(entries);
    debug!("loaded registry with {} descriptors", registry.len());

    let config = SearchConfig {
        league: cli.league,
        currency: cli.currency,
        collapse_listings: cli.collapse.into(),
        activate_stock_filter: cli.activate_stock,
        exact: cli.exact,
        canonical_names: cli.canonical_names,
    };

    let filters = derive_filters(&item, &registry, &config)?;

    let mut writer: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(
            File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    match cli.format {
        OutputFormat::Json => output::write_json(&mut writer, &filters)?,
        OutputFormat::Terminal => output::write_terminal(&mut writer, &filters)?,
    }

    Ok(())
}
