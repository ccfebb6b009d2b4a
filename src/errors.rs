//! Error types for filter derivation.
//!
//! The deriver is total over well-formed input; these errors surface
//! contract violations (a category matched without its required attribute,
//! or a base-type reference the registry does not know) instead of letting
//! an undefined value leak into the produced specification.

use crate::item::ItemCategory;
use crate::registry::Namespace;

/// Error type for filter derivation operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    #[error("{category} item is missing required attribute: {attribute}")]
    MissingAttribute {
        category: ItemCategory,
        attribute: &'static str,
    },

    #[error("unknown base type in {namespace} namespace: {ref_name}")]
    UnknownBaseType {
        namespace: Namespace,
        ref_name: String,
    },
}

/// Result type alias
pub type FilterResult<T> = Result<T, FilterError>;
