//! Error types for sorting operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur when producing a
//! sorted copy of an input sequence.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., the requested length).
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Allocation failure**: The output buffer could not be reserved. This is
//!    the only failure mode of the sort itself; it is fatal and produces no
//!    partial output.
//! 2. **Input access**: Inputs that cannot expose a contiguous slice (ndarray
//!    views with non-unit stride) are rejected before any allocation happens.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Any finite numeric input, including empty sequences, duplicates, NaN, and
//!   infinities, is accepted without error.
//!
//! ## Non-goals
//!
//! * This module does not attempt recovery or retry on allocation failure.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for sorting operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// The output buffer could not be allocated.
    ///
    /// The caller's input remains valid and unmodified; no partial output
    /// exists.
    AllocationFailure {
        /// Number of elements the output buffer was sized for.
        elements: usize,
    },

    /// Generic invalid input error with a descriptive message.
    ///
    /// Only reachable through input abstractions that can fail to expose a
    /// contiguous slice. Plain slices and vectors never produce it.
    InvalidInput(String),
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SortError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::AllocationFailure { elements } => {
                write!(f, "Failed to allocate output buffer for {elements} elements")
            }
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for SortError {}
