//! High-level API for sorting.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point: [`sort`], which
//! returns an ascending-sorted copy of its input without mutating it.
//!
//! ## Design notes
//!
//! * **Single operation**: There is one exported operation and nothing to
//!   configure; ordering semantics are fixed (see the ordering module).
//! * **Polymorphic input**: Accepts anything implementing [`SortInput`]
//!   (slices, arrays, `Vec`, ndarray with the `ndarray` feature).
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ## Key concepts
//!
//! * **Non-mutation**: the argument is read once into a fresh buffer; the
//!   caller never observes a change to it.
//! * **Purity**: no global state, no I/O, no logging. Concurrent calls on
//!   independent inputs are safe.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::sort_copy;

// Publicly re-exported types
pub use crate::input::SortInput;
pub use crate::primitives::errors::SortError;

// ============================================================================
// Entry Point
// ============================================================================

/// Return an ascending-sorted copy of `input`, leaving `input` unmodified.
///
/// Accepts any finite sequence of floating-point values: empty sequences,
/// duplicates, NaN, and infinities are all valid. NaN values sort after every
/// other value; see the crate-level documentation for the full ordering
/// semantics.
///
/// # Errors
///
/// * [`SortError::AllocationFailure`] if the output buffer cannot be
///   allocated. The input is untouched and no partial result exists.
/// * [`SortError::InvalidInput`] if the input type cannot expose a contiguous
///   slice (non-contiguous ndarray views only; slices and vectors never fail
///   this way).
///
/// # Examples
///
/// ```rust
/// use fastsort::prelude::*;
///
/// let sorted = sort(&[5.0, 5.0, -1.0, 0.0][..])?;
/// assert_eq!(sorted, vec![-1.0, 0.0, 5.0, 5.0]);
/// # Result::<(), SortError>::Ok(())
/// ```
pub fn sort<T, I>(input: &I) -> Result<Vec<T>, SortError>
where
    T: Float,
    I: SortInput<T> + ?Sized,
{
    let values = input.as_sort_slice()?;
    sort_copy(values)
}
