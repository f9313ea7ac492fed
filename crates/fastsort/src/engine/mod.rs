//! Layer 3: Engine
//!
//! This layer orchestrates the sort: it allocates the output buffer, copies
//! the input into it, and reorders the copy using the algorithms layer.

// Copy-then-sort execution.
pub mod executor;
