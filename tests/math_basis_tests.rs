//! Tests for the monomial feature basis.
//!
//! These tests verify the exponent sequences and feature-vector values for
//! every parity restriction, including the minimum-degree cutoff.
//!
//! ## Test Organization
//!
//! 1. **Exponent Sequences** - degree ranges and parity filters
//! 2. **Rejection** - empty or inverted ranges
//! 3. **Evaluation** - feature-vector values

use approx::assert_relative_eq;

use tabfit::prelude::*;

// ============================================================================
// Exponent Sequence Tests
// ============================================================================

/// Test the unrestricted exponent sequence.
#[test]
fn test_exponents_unrestricted() {
    let basis = MonomialBasis::new(0, 3, Parity::Any).unwrap();

    assert_eq!(basis.exponents(), &[0, 1, 2, 3]);
    assert_eq!(basis.len(), 4);
}

/// Test the even-only exponent sequence.
#[test]
fn test_exponents_even() {
    let basis = MonomialBasis::new(0, 4, Parity::Even).unwrap();

    assert_eq!(basis.exponents(), &[0, 2, 4]);
}

/// Test the odd-only exponent sequence.
#[test]
fn test_exponents_odd() {
    let basis = MonomialBasis::new(0, 3, Parity::Odd).unwrap();

    assert_eq!(basis.exponents(), &[1, 3]);
}

/// Test that the minimum degree cuts low exponents.
///
/// Verifies the configured floor is honored for each restriction.
#[test]
fn test_exponents_min_degree() {
    let basis = MonomialBasis::new(2, 5, Parity::Any).unwrap();
    assert_eq!(basis.exponents(), &[2, 3, 4, 5]);

    let basis = MonomialBasis::new(3, 8, Parity::Even).unwrap();
    assert_eq!(basis.exponents(), &[4, 6, 8]);

    let basis = MonomialBasis::new(2, 7, Parity::Odd).unwrap();
    assert_eq!(basis.exponents(), &[3, 5, 7]);
}

// ============================================================================
// Rejection Tests
// ============================================================================

/// Test that an inverted degree range is rejected.
#[test]
fn test_inverted_range() {
    let err = MonomialBasis::new(4, 2, Parity::Any).unwrap_err();

    assert_eq!(err, TabfitError::InvalidDegreeRange { min: 4, max: 2 });
}

/// Test that a parity filter leaving no exponents is rejected.
#[test]
fn test_empty_after_filter() {
    let err = MonomialBasis::new(0, 0, Parity::Odd).unwrap_err();

    assert_eq!(err, TabfitError::InvalidDegreeRange { min: 0, max: 0 });
}

// ============================================================================
// Evaluation Tests
// ============================================================================

/// Test feature values for the unrestricted basis.
#[test]
fn test_eval_unrestricted() {
    let basis = MonomialBasis::new(0, 3, Parity::Any).unwrap();
    let mut phi = Vec::new();

    basis.eval(2.0, &mut phi);

    assert_eq!(phi, vec![1.0, 2.0, 4.0, 8.0]);
}

/// Test feature values under the even restriction.
#[test]
fn test_eval_even() {
    let basis = MonomialBasis::new(0, 4, Parity::Even).unwrap();
    let mut phi = Vec::new();

    basis.eval(3.0, &mut phi);

    assert_eq!(phi, vec![1.0, 9.0, 81.0]);
}

/// Test feature values under the odd restriction with a negative input.
#[test]
fn test_eval_odd_negative() {
    let basis = MonomialBasis::new(0, 3, Parity::Odd).unwrap();
    let mut phi = Vec::new();

    basis.eval(-2.0, &mut phi);

    assert_eq!(phi, vec![-2.0, -8.0]);
}

/// Test feature values with a raised minimum degree.
#[test]
fn test_eval_min_degree() {
    let basis = MonomialBasis::new(2, 4, Parity::Any).unwrap();
    let mut phi = Vec::new();

    basis.eval(2.0, &mut phi);

    assert_eq!(phi, vec![4.0, 8.0, 16.0]);
}

/// Test that the buffer is reused across calls.
#[test]
fn test_eval_reuses_buffer() {
    let basis = MonomialBasis::new(0, 2, Parity::Any).unwrap();
    let mut phi = Vec::new();

    basis.eval(5.0, &mut phi);
    basis.eval(0.5, &mut phi);

    assert_eq!(phi.len(), 3);
    assert_relative_eq!(phi[1], 0.5, epsilon = 1e-15);
    assert_relative_eq!(phi[2], 0.25, epsilon = 1e-15);
}

/// Test zero input.
///
/// x⁰ is 1 even at x = 0; higher powers vanish.
#[test]
fn test_eval_at_zero() {
    let basis = MonomialBasis::new(0, 2, Parity::Any).unwrap();
    let mut phi = Vec::new();

    basis.eval(0.0, &mut phi);

    assert_eq!(phi, vec![1.0, 0.0, 0.0]);
}
