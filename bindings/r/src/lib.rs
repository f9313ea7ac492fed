//! R bindings for fastsort.
//!
//! Provides R access to the fastsort Rust library via extendr.
//!
//! R vectors have copy-on-modify semantics but are handed to compiled code as
//! shared storage, so the wrapped function must never sort the caller's
//! vector in place. The core library already copies before sorting, which is
//! exactly the contract this wrapper needs.

use extendr_api::prelude::*;

use fastsort::prelude::sort;

// ============================================================================
// Exported Functions
// ============================================================================

/// Return an ascending-sorted copy of a numeric vector.
///
/// The input vector is left unmodified. NaN values sort after every other
/// value, including `Inf`.
#[extendr]
fn sort_ascending(x: &[f64]) -> Result<Vec<f64>> {
    sort(x).map_err(|e| Error::Other(e.to_string()))
}

// ============================================================================
// Module Registration
// ============================================================================

extendr_module! {
    mod rfastsort;
    fn sort_ascending;
}
