//! Input abstractions for sorting.
//!
//! ## Purpose
//!
//! This module provides a unified abstraction for sort inputs, allowing the
//! `sort` function to process multiple data formats (slices, vectors,
//! ndarray) through a single interface.
//!
//! ## Design notes
//!
//! * **Zero-copy where possible**: Provides direct slice access to underlying data buffers.
//! * **Interoperability**: Bridges standard Rust collections with specialized numerical libraries.
//! * **Fail-fast validation**: Ensures memory continuity for ndarray views before processing.
//!
//! ## Invariants
//!
//! * Returned slices must represent all elements in the input container, in order.
//! * Inputs must be contiguous in memory; non-contiguous inputs return an error.
//!
//! ## Non-goals
//!
//! * This module does not copy, clean, or reorder data; it only exposes a view.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
#[cfg(feature = "ndarray")]
use ndarray::{ArrayBase, Data, Ix1};
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SortError;

/// Trait for types that can be used as input for sorting.
pub trait SortInput<T: Float> {
    /// Convert the input to a contiguous slice.
    fn as_sort_slice(&self) -> Result<&[T], SortError>;
}

impl<T: Float> SortInput<T> for [T] {
    fn as_sort_slice(&self) -> Result<&[T], SortError> {
        Ok(self)
    }
}

impl<T: Float, const N: usize> SortInput<T> for [T; N] {
    fn as_sort_slice(&self) -> Result<&[T], SortError> {
        Ok(self)
    }
}

impl<T: Float> SortInput<T> for Vec<T> {
    fn as_sort_slice(&self) -> Result<&[T], SortError> {
        Ok(self.as_slice())
    }
}

#[cfg(feature = "ndarray")]
impl<T: Float, S> SortInput<T> for ArrayBase<S, Ix1>
where
    S: Data<Elem = T>,
{
    fn as_sort_slice(&self) -> Result<&[T], SortError> {
        self.as_slice().ok_or_else(|| {
            SortError::InvalidInput("ndarray input must be contiguous in memory".to_string())
        })
    }
}
