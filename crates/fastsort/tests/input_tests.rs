//! Tests for the input abstraction.
//!
//! These tests verify that the supported input containers expose correct
//! slice views, and that non-contiguous ndarray views are rejected.

use fastsort::prelude::*;

/// Test slice input.
///
/// Verifies a plain slice is passed through unchanged.
#[test]
fn test_input_slice() {
    let data = [2.0, 1.0, 3.0];

    let view = data[..].as_sort_slice().unwrap();

    assert_eq!(view, &[2.0, 1.0, 3.0]);
}

/// Test Vec input.
///
/// Verifies a vector exposes its full contents.
#[test]
fn test_input_vec() {
    let data = vec![1.0, 2.0];

    let view = data.as_sort_slice().unwrap();

    assert_eq!(view, &[1.0, 2.0]);
}

/// Test fixed-size array input.
///
/// Verifies arrays are usable without slicing at the call site.
#[test]
fn test_input_array() {
    let data = [4.0_f32, 3.0];

    let view = data.as_sort_slice().unwrap();

    assert_eq!(view, &[4.0, 3.0]);
}

/// Test contiguous ndarray input.
///
/// Verifies a standard 1-D array sorts like a slice.
#[cfg(feature = "ndarray")]
#[test]
fn test_input_ndarray_contiguous() {
    use ndarray::Array1;

    let data = Array1::from(vec![3.0, 1.0, 2.0]);

    let sorted = sort(&data).unwrap();

    assert_eq!(sorted, vec![1.0, 2.0, 3.0]);
    assert_eq!(data, Array1::from(vec![3.0, 1.0, 2.0]));
}

/// Test non-contiguous ndarray input.
///
/// Verifies a strided view is rejected with InvalidInput, while an owned
/// (re-contiguous) copy of the same view sorts fine.
#[cfg(feature = "ndarray")]
#[test]
fn test_input_ndarray_strided_rejected() {
    use ndarray::{s, Array1};

    let data = Array1::from(vec![5.0, 4.0, 3.0, 2.0, 1.0]);
    let view = data.slice(s![..;2]);

    let err = view.as_sort_slice().unwrap_err();
    assert!(matches!(err, SortError::InvalidInput(_)));

    let sorted = sort(&view.to_owned()).unwrap();
    assert_eq!(sorted, vec![1.0, 3.0, 5.0]);
}
