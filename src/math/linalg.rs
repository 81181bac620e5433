//! Linear algebra backend for the normal equations.
//!
//! ## Purpose
//!
//! This module provides a trait-based abstraction over the symmetric
//! positive-definite solve, standardizing on the nalgebra backend.
//!
//! ## Design notes
//!
//! * Uses Cholesky factorization (G = LLᵀ): the Gram matrix of a full-rank
//!   feature set is symmetric positive definite, and a failed factorization
//!   is exactly the singular-system signal the caller needs.
//! * No QR/SVD fallback: a rank-deficient system is reported, not repaired.
//! * Generic over `FloatLinalg` types (f32 and f64) which delegate to nalgebra.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// FloatLinalg Trait
// ============================================================================

/// Helper trait to bridge generic Float types to the nalgebra backend.
pub trait FloatLinalg: Float + 'static {
    /// Solve G·β = v for symmetric positive-definite G via Cholesky.
    ///
    /// Returns `None` when the factorization fails (G not positive definite).
    fn solve_spd(gram: &[Self], rhs: &[Self], n: usize) -> Option<Vec<Self>>;
}

impl FloatLinalg for f64 {
    #[inline]
    fn solve_spd(gram: &[Self], rhs: &[Self], n: usize) -> Option<Vec<Self>> {
        nalgebra_backend::solve_spd_f64(gram, rhs, n)
    }
}

impl FloatLinalg for f32 {
    #[inline]
    fn solve_spd(gram: &[Self], rhs: &[Self], n: usize) -> Option<Vec<Self>> {
        nalgebra_backend::solve_spd_f32(gram, rhs, n)
    }
}

// ============================================================================
// Nalgebra Backend Implementation
// ============================================================================

/// Nalgebra-based linear algebra operations.
pub mod nalgebra_backend {
    #[cfg(not(feature = "std"))]
    use alloc::vec::Vec;

    use nalgebra::{DMatrix, DVector};

    /// Solve G·β = v via Cholesky using f64 precision.
    ///
    /// The Gram matrix is symmetric, so row-major and column-major storage
    /// coincide.
    pub fn solve_spd_f64(gram: &[f64], rhs: &[f64], n: usize) -> Option<Vec<f64>> {
        let matrix = DMatrix::from_column_slice(n, n, gram);
        let rhs = DVector::from_column_slice(rhs);

        let cholesky = matrix.cholesky()?;
        Some(cholesky.solve(&rhs).as_slice().to_vec())
    }

    /// Solve G·β = v via Cholesky using f32 precision.
    pub fn solve_spd_f32(gram: &[f32], rhs: &[f32], n: usize) -> Option<Vec<f32>> {
        let matrix = DMatrix::from_column_slice(n, n, gram);
        let rhs = DVector::from_column_slice(rhs);

        let cholesky = matrix.cholesky()?;
        Some(cholesky.solve(&rhs).as_slice().to_vec())
    }
}
