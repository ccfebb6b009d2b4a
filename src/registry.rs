//! Read-only base-type registry.
//!
//! The deriver treats this as a synchronous dictionary from `(namespace,
//! canonical ref)` to resolved entity descriptors. A lookup miss is a
//! contract violation and fails loudly; filters are never silently skipped.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::errors::{FilterError, FilterResult};

/// Registry namespaces. Uniques resolve their shared base through `Item`,
/// transfigured gems resolve their normal variant through `Gem`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Namespace {
    Item,
    Gem,
}

impl Namespace {
    pub fn display_name(&self) -> &'static str {
        match self {
            Namespace::Item => "ITEM",
            Namespace::Gem => "GEM",
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Link from a unique item to the base type it rolls on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniqueOrigin {
    pub base: String,
}

/// Gem-specific descriptor details
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GemDetails {
    #[serde(default)]
    pub awakened: bool,
    #[serde(default)]
    pub transfigured: bool,
    /// Canonical ref of the normal variant, set on transfigured gems
    #[serde(default)]
    pub normal_variant: Option<String>,
}

/// Resolved entity descriptor: canonical ref name, localized display name,
/// and the optional unique/gem/trade details the dispatch rules consult.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseTypeInfo {
    pub namespace: Namespace,
    pub ref_name: String,
    pub name: String,
    #[serde(default)]
    pub unique: Option<UniqueOrigin>,
    #[serde(default)]
    pub gem: Option<GemDetails>,
    /// Bulk-exchange tag for stackable goods
    #[serde(default)]
    pub trade_tag: Option<String>,
    /// External discriminator separating variants that share a name
    #[serde(default)]
    pub trade_disc: Option<String>,
}

/// In-memory registry keyed by namespace and canonical ref name
#[derive(Debug, Clone, Default)]
pub struct BaseTypeRegistry {
    entries: HashMap<(Namespace, String), Vec<BaseTypeInfo>>,
}

impl BaseTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from descriptor entries, preserving insertion order
    /// within each ref so `lookup` returns the first registered match.
    pub fn from_entries(entries: impl IntoIterator<Item = BaseTypeInfo>) -> Self {
        let mut registry = Self::new();
        for info in entries {
            registry.insert(info);
        }
        registry
    }

    pub fn insert(&mut self, info: BaseTypeInfo) {
        self.entries
            .entry((info.namespace, info.ref_name.clone()))
            .or_default()
            .push(info);
    }

    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve a canonical ref to its first registered descriptor.
    ///
    /// A miss means the item was normalized against a different registry
    /// snapshot than the one supplied here, which the caller must treat as
    /// fatal for this derivation.
    pub fn lookup(&self, namespace: Namespace, ref_name: &str) -> FilterResult<&BaseTypeInfo> {
        debug!("registry lookup: {namespace} {ref_name}");
        self.entries
            .get(&(namespace, ref_name.to_owned()))
            .and_then(|matches| matches.first())
            .ok_or_else(|| FilterError::UnknownBaseType {
                namespace,
                ref_name: ref_name.to_owned(),
            })
    }
}
