//! Bracket quantization.
//!
//! The search backend only accepts a handful of discrete level thresholds
//! for some fields; these helpers snap a raw attribute onto the nearest
//! member of a fixed bracket list.

/// Snap `value` down to the greatest bracket not above it.
///
/// Brackets must be listed in ascending order; values below the first
/// bracket clamp to it.
///
/// # Panics
///
/// Panics if `brackets` is empty. Call sites use non-empty static slices.
pub fn floor_to_bracket(value: u32, brackets: &[u32]) -> u32 {
    let mut prev = brackets[0];
    for &bracket in brackets {
        if bracket > value {
            return prev;
        }
        prev = bracket;
    }
    prev
}

/// Counterpart of [`floor_to_bracket`] for bracket lists given in
/// descending order.
///
/// Scans the list in the given order, tracking the previous bracket, and
/// returns it at the first bracket below `value`; values above the whole
/// list clamp to the first bracket. The upper bound of the cluster-jewel
/// level range depends on this exact scan, so the behavior is pinned by
/// tests and must not be replaced with an arithmetic ceiling.
///
/// # Panics
///
/// Panics if `brackets` is empty. Call sites use non-empty static slices.
pub fn ceil_to_bracket(value: u32, brackets: &[u32]) -> u32 {
    let mut prev = brackets[0];
    for &bracket in brackets {
        if bracket < value {
            return prev;
        }
        prev = bracket;
    }
    prev
}
