//! Tests for dataset construction.
//!
//! These tests verify the normalization performed when a dataset is built:
//! - Sorting by the independent variable (stable, fast path when sorted)
//! - Duplicate-x rejection
//! - Shape and finiteness validation
//!
//! ## Test Organization
//!
//! 1. **Construction** - from_rows with normal data
//! 2. **Sorting** - unsorted input normalization
//! 3. **Rejection** - duplicates, ragged rows, non-finite values
//! 4. **Accessors** - rows, bounds, width

use tabfit::prelude::*;

// ============================================================================
// Construction Tests
// ============================================================================

/// Test building from sorted rows.
///
/// Verifies that already sorted data is stored unchanged.
#[test]
fn test_from_rows_sorted() {
    let rows = vec![vec![1.0, 10.0], vec![2.0, 20.0], vec![3.0, 30.0]];

    let data = Dataset::from_rows(rows).unwrap();

    assert_eq!(data.len(), 3);
    assert_eq!(data.width(), 1);
    assert_eq!(data.x(), &[1.0, 2.0, 3.0]);
    assert_eq!(data.row(1), &[20.0]);
}

/// Test building with multiple dependent columns.
#[test]
fn test_from_rows_multi_column() {
    let rows = vec![vec![0.0, 1.0, 2.0], vec![1.0, 3.0, 4.0]];

    let data = Dataset::from_rows(rows).unwrap();

    assert_eq!(data.width(), 2);
    assert_eq!(data.row(0), &[1.0, 2.0]);
    assert_eq!(data.row(1), &[3.0, 4.0]);
}

// ============================================================================
// Sorting Tests
// ============================================================================

/// Test that unsorted rows are sorted by x.
///
/// Verifies the dependent columns follow their x values.
#[test]
fn test_from_rows_unsorted() {
    let rows = vec![
        vec![3.0, 30.0],
        vec![1.0, 10.0],
        vec![4.0, 40.0],
        vec![2.0, 20.0],
    ];

    let data = Dataset::from_rows(rows).unwrap();

    assert_eq!(data.x(), &[1.0, 2.0, 3.0, 4.0]);
    assert_eq!(data.row(0), &[10.0]);
    assert_eq!(data.row(3), &[40.0]);
}

/// Test that reverse-ordered rows sort correctly.
#[test]
fn test_from_rows_reverse_order() {
    let rows = vec![vec![3.0, 9.0], vec![2.0, 4.0], vec![1.0, 1.0]];

    let data = Dataset::from_rows(rows).unwrap();

    assert_eq!(data.x(), &[1.0, 2.0, 3.0]);
    assert_eq!(data.row(0), &[1.0]);
}

// ============================================================================
// Rejection Tests
// ============================================================================

/// Test that empty input is rejected.
#[test]
fn test_from_rows_empty() {
    let rows: Vec<Vec<f64>> = vec![];

    let err = Dataset::from_rows(rows).unwrap_err();

    assert_eq!(err, TabfitError::EmptyInput);
}

/// Test that duplicate x values are rejected, even when not adjacent in the
/// input order.
#[test]
fn test_from_rows_duplicate_x() {
    let rows = vec![vec![2.0, 20.0], vec![1.0, 10.0], vec![2.0, 21.0]];

    let err = Dataset::from_rows(rows).unwrap_err();

    assert_eq!(err, TabfitError::DuplicateX(2.0));
}

/// Test that ragged rows are rejected.
#[test]
fn test_from_rows_ragged() {
    let rows = vec![vec![1.0, 10.0], vec![2.0, 20.0, 200.0]];

    let err = Dataset::from_rows(rows).unwrap_err();

    assert_eq!(err, TabfitError::MismatchedColumns { got: 3, expected: 2 });
}

/// Test that a single-column row is rejected (records need x and at least
/// one dependent value).
#[test]
fn test_from_rows_too_narrow() {
    let rows = vec![vec![1.0]];

    let err = Dataset::from_rows(rows).unwrap_err();

    assert_eq!(err, TabfitError::MismatchedColumns { got: 1, expected: 2 });
}

/// Test that non-finite values are rejected.
#[test]
fn test_from_rows_non_finite() {
    let rows = vec![vec![1.0, f64::NAN]];

    let err = Dataset::from_rows(rows).unwrap_err();

    assert!(matches!(err, TabfitError::InvalidNumericValue(_)));
}

// ============================================================================
// Accessor Tests
// ============================================================================

/// Test the bounds accessor.
#[test]
fn test_bounds() {
    let rows = vec![vec![5.0, 1.0], vec![-2.0, 2.0], vec![9.0, 3.0]];

    let data = Dataset::from_rows(rows).unwrap();

    assert_eq!(data.bounds(), (-2.0, 9.0));
}
