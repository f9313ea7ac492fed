//! Ascending ordering of floating-point values.
//!
//! ## Purpose
//!
//! This module provides the comparator that defines "ascending" for the rest
//! of the crate: the standard `<` relation over floats, extended to a total
//! order so comparison sorts behave deterministically on any input.
//!
//! ## Design notes
//!
//! * **NaN placement**: NaN compares greater than every non-NaN value and
//!   equal to other NaN values, so NaNs collect at the end of a sorted
//!   sequence. `<` gives NaN no relative order; this extension makes the
//!   choice explicit rather than leaving the result comparator-dependent.
//! * **Infinities**: `-inf` and `+inf` order by `<` as usual, below and above
//!   all finite values respectively.
//! * **Generics**: Comparison is generic over `Float` types.
//!
//! ## Invariants
//!
//! * The comparator is a total order: reflexive equality, antisymmetric,
//!   transitive. Safe for `sort_unstable_by`.
//! * For non-NaN operands it agrees exactly with `partial_cmp`.
//!
//! ## Non-goals
//!
//! * This module does not allocate or sort; it only compares.

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// ============================================================================
// Comparator
// ============================================================================

/// Compare two floating-point values under the ascending total order.
///
/// NaN sorts after all other values, including `+inf`.
#[inline]
pub fn total_ascending<T: Float>(a: &T, b: &T) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        // Both operands are non-NaN here, so partial_cmp always succeeds.
        (false, false) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
    }
}

/// Check whether a sequence is already non-decreasing under [`total_ascending`].
#[inline]
pub fn is_ascending<T: Float>(values: &[T]) -> bool {
    values
        .windows(2)
        .all(|w| total_ascending(&w[0], &w[1]) != Ordering::Greater)
}
