use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::CollapseListings;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Terminal,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CollapseMode {
    /// Collapse duplicate listings client-side
    App,
    /// Ask the trade API to collapse listings
    Api,
}

impl From<CollapseMode> for CollapseListings {
    fn from(mode: CollapseMode) -> Self {
        match mode {
            CollapseMode::App => CollapseListings::App,
            CollapseMode::Api => CollapseListings::Api,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "tradefilter")]
#[command(about = "Derives trade-search filter specifications from parsed item listings", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the normalized item JSON
    pub item: PathBuf,

    /// Path to the base-type registry JSON (array of descriptors)
    #[arg(short, long)]
    pub registry: PathBuf,

    /// Target league name
    #[arg(short, long, env = "TRADEFILTER_LEAGUE")]
    pub league: String,

    /// Restrict listings to this currency
    #[arg(long)]
    pub currency: Option<String>,

    /// Where duplicate listings get collapsed
    #[arg(long, value_enum, default_value = "app")]
    pub collapse: CollapseMode,

    /// Pre-enable the stock filter for stacks larger than one
    #[arg(long)]
    pub activate_stock: bool,

    /// Strict matching: pre-enable quality, level, and influence filters
    #[arg(long)]
    pub exact: bool,

    /// Send canonical (English) names to the trade backend
    #[arg(long)]
    pub canonical_names: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
