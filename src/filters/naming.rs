//! Naming resolution for trade-facing labels.

use crate::config::SearchConfig;
use crate::registry::BaseTypeInfo;

/// Label sent to the trade backend for a resolved entity: the canonical
/// reference name under canonical naming, otherwise the localized display
/// name.
pub fn resolve_name<'a>(config: &SearchConfig, info: &'a BaseTypeInfo) -> &'a str {
    if config.canonical_names {
        &info.ref_name
    } else {
        &info.name
    }
}
