// Export modules for library usage
pub mod cli;
pub mod config;
pub mod errors;
pub mod filters;
pub mod item;
pub mod output;
pub mod registry;
pub mod trade;

// Re-export commonly used types
pub use crate::config::{CollapseListings, SearchConfig};
pub use crate::errors::{FilterError, FilterResult};
pub use crate::filters::brackets::{ceil_to_bracket, floor_to_bracket};
pub use crate::filters::naming::resolve_name;
pub use crate::filters::{
    derive_filters, BoolFilter, CorruptedFilter, DiscriminatorFilter, InfluenceFilter,
    ItemFilters, MapBlightedFilter, RarityFilter, RarityTag, SearchExact, SearchRelaxed,
    ToggleFilter, TradeScope, ValueFilter, VeiledFilter,
};
pub use crate::item::{
    HeistJob, Influence, Item, ItemCategory, ItemRarity, ItemSockets, MapBlighted,
    ModifierKind, StatEntry,
};
pub use crate::registry::{BaseTypeInfo, BaseTypeRegistry, GemDetails, Namespace, UniqueOrigin};
