//! Copy-then-sort execution.
//!
//! ## Purpose
//!
//! This module implements the single operation of the crate: allocate a fresh
//! output buffer, copy the input into it preserving order, and sort the copy
//! in place ascending. The caller's buffer is never touched.
//!
//! ## Design notes
//!
//! * **Fallible allocation**: The output buffer is reserved with
//!   `try_reserve_exact`, so an out-of-memory condition surfaces as a
//!   [`SortError::AllocationFailure`] instead of an abort. Nothing is read
//!   from the input before the reservation succeeds.
//! * **Fast path**: An input that is already non-decreasing is copied without
//!   re-sorting. The copy still happens; the output is always independent
//!   storage.
//! * **Algorithm**: `sort_unstable_by` with the ascending total-order
//!   comparator. O(n log n) comparisons, no stability guarantee.
//!
//! ## Invariants
//!
//! * `output.len() == input.len()` and the multiset of values is preserved.
//! * The output is non-decreasing under `total_ascending`.
//! * The input slice is unchanged, value-for-value and order-for-order.
//!
//! ## Non-goals
//!
//! * This module does not validate or filter input values; every finite or
//!   non-finite float is accepted as-is.
//! * This module does not sort in place on caller-owned memory.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::ordering::{is_ascending, total_ascending};
use crate::primitives::errors::SortError;

// ============================================================================
// Executor
// ============================================================================

/// Produce an ascending-sorted copy of `input`.
///
/// The returned vector is a distinct allocation; mutating it afterwards does
/// not affect the input, and vice versa.
pub fn sort_copy<T: Float>(input: &[T]) -> Result<Vec<T>, SortError> {
    let n = input.len();

    let mut output = Vec::new();
    output
        .try_reserve_exact(n)
        .map_err(|_| SortError::AllocationFailure { elements: n })?;
    output.extend_from_slice(input);

    // Fast path: already ordered, the copy alone satisfies the contract.
    if is_ascending(&output) {
        return Ok(output);
    }

    output.sort_unstable_by(|a, b| total_ascending(a, b));

    Ok(output)
}
