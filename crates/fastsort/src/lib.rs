//! # fastsort — copying ascending sort for floating-point sequences
//!
//! A small numeric sorting library for **Rust**, with bindings for **R**.
//! It does one thing: given a sequence of floating-point values, it returns a
//! freshly allocated copy of that sequence sorted in ascending order. The
//! caller's data is never mutated.
//!
//! ## Why copy-then-sort?
//!
//! Host runtimes with shared-ownership semantics (R in particular) hand out
//! vectors that the callee must not modify in place. The safe pattern is to
//! clone the input into an owned buffer and sort that buffer. This crate
//! applies the same discipline uniformly: `sort` always allocates its own
//! output, so the argument a caller passes in is observably unchanged.
//!
//! ## Quick Start
//!
//! ```rust
//! use fastsort::prelude::*;
//!
//! let data = vec![3.0, 1.0, 2.0];
//!
//! let sorted = sort(&data)?;
//!
//! assert_eq!(sorted, vec![1.0, 2.0, 3.0]);
//! assert_eq!(data, vec![3.0, 1.0, 2.0]); // input untouched
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! `sort` returns a `Result<Vec<T>, SortError>`.
//!
//! - **`Ok(Vec<T>)`**: the ascending-sorted copy, same length and multiset of
//!   values as the input.
//! - **`Err(SortError)`**: the output buffer could not be allocated (or, via
//!   the ndarray input abstraction, the input was not contiguous in memory).
//!
//! The `?` operator is idiomatic:
//!
//! ```rust
//! use fastsort::prelude::*;
//! # let data = vec![5.0, 5.0, -1.0, 0.0];
//!
//! let sorted = sort(&data)?;
//! assert_eq!(sorted, vec![-1.0, 0.0, 5.0, 5.0]);
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! ## Ordering semantics
//!
//! Values are ordered by the standard `<` relation, extended to a total order:
//! `-inf` sorts before all finite values, `+inf` after them, and NaN compares
//! greater than every non-NaN value, so NaNs collect at the end of the output.
//! No stability guarantee is made for equal values.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features and
//! enable `libm` for float math:
//!
//! ```toml
//! [dependencies]
//! fastsort = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! `f32` inputs work throughout and halve the memory footprint of the copy.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - error type.
mod primitives;

// Layer 2: Algorithms - the ascending total-order comparator.
mod algorithms;

// Layer 3: Engine - the copy-then-sort executor.
mod engine;

// Input abstractions for the public API.
mod input;

// High-level API for sorting.
mod api;

// Standard fastsort prelude.
pub mod prelude {
    pub use crate::api::{sort, SortError, SortInput};
}

// Internal modules for development and testing.
//
// Only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
