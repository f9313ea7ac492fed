//! Layer 2: Algorithms
//!
//! This layer implements the comparison logic for ascending ordering of
//! floating-point values. It contains the "business logic" of the sort but is
//! orchestrated by the engine layer.

// Ascending total-order comparator over floats.
pub mod ordering;
