//! Tests for coefficient rendering.
//!
//! These tests pin down the output shapes:
//! - Raw listing (one coefficient per line)
//! - Gnuplot formula with explicit signs and true exponents
//!
//! ## Test Organization
//!
//! 1. **Listing** - raw output
//! 2. **Formula** - term shapes and skipped powers

use tabfit::engine::formatter::{format_formula, format_listing};

// ============================================================================
// Listing Tests
// ============================================================================

/// Test the raw listing shape.
#[test]
fn test_listing() {
    let out = format_listing(&[1.5, -2.0, 0.25]);

    assert_eq!(out, "1.5\n-2\n0.25\n");
}

/// Test an empty listing.
#[test]
fn test_listing_empty() {
    let out = format_listing::<f64>(&[]);

    assert_eq!(out, "");
}

// ============================================================================
// Formula Tests
// ============================================================================

/// Test the term shapes for exponents 0, 1, and higher.
#[test]
fn test_formula_consecutive() {
    let out = format_formula(&[1.0, -2.0, 0.5], &[0, 1, 2]);

    assert_eq!(out, "+1.000000 -2.000000*x +0.500000*x**2");
}

/// Test that parity-skipped powers are omitted.
///
/// An even-only basis renders only the even exponents.
#[test]
fn test_formula_even_powers() {
    let out = format_formula(&[2.0, 3.0], &[0, 2]);

    assert_eq!(out, "+2.000000 +3.000000*x**2");
}

/// Test an odd-only basis starting at x.
#[test]
fn test_formula_odd_powers() {
    let out = format_formula(&[1.0, -0.25], &[1, 3]);

    assert_eq!(out, "+1.000000*x -0.250000*x**3");
}

/// Test a raised minimum degree.
///
/// No constant or linear term appears when the basis starts at x².
#[test]
fn test_formula_min_degree() {
    let out = format_formula(&[4.0], &[2]);

    assert_eq!(out, "+4.000000*x**2");
}
