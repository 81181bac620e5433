//! Streaming normal-equation accumulation and solving.
//!
//! ## Purpose
//!
//! This module maintains the running Gram matrix G = Σ φφᵀ and moment vector
//! v = Σ y·φ over a stream of feature vectors, then solves G·β = v for the
//! least-squares coefficients.
//!
//! ## Design notes
//!
//! * **Streaming reduction**: O(k²) work per record and O(1) auxiliary
//!   memory independent of the record count, so inputs of any size fit.
//! * **Dual path**: a generic scalar rank-1 update (upper triangle plus
//!   mirror) and an f64 SIMD path over `wide::f64x2`, dispatched through
//!   the `AccumulatorLinalg` trait.
//! * **Associativity**: partial accumulators over input shards can be
//!   summed with `merge`; the reference behavior accumulates in input
//!   order for bit-level reproducibility.
//!
//! ## Invariants
//!
//! * `gram.len() == k*k`, `moment.len() == k`; the Gram matrix stays
//!   symmetric after every update.
//! * `count` equals the number of accumulated records.
//!
//! ## Non-goals
//!
//! * This module does not build feature vectors (handled by `math::basis`).
//! * No residual or variance-of-fit computation.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

// External dependencies
use num_traits::Float;
use wide::f64x2;

// Internal dependencies
use crate::math::linalg::FloatLinalg;
use crate::primitives::errors::TabfitError;

// ============================================================================
// Accumulation Backends
// ============================================================================

/// Trait for per-precision rank-1 update implementations.
pub trait AccumulatorLinalg: Float + 'static {
    /// `gram += φφᵀ` and `moment += target·φ` for one record.
    fn rank_one_update(gram: &mut [Self], moment: &mut [Self], phi: &[Self], target: Self);
}

/// Generic scalar rank-1 update: upper triangle plus mirror.
pub fn rank_one_update_scalar<T: Float>(
    gram: &mut [T],
    moment: &mut [T],
    phi: &[T],
    target: T,
) {
    let k = phi.len();

    for j in 0..k {
        let pj = phi[j];
        moment[j] = moment[j] + target * pj;
        for i in j..k {
            let val = pj * phi[i];
            gram[j * k + i] = gram[j * k + i] + val;
            if i != j {
                gram[i * k + j] = gram[i * k + j] + val;
            }
        }
    }
}

impl AccumulatorLinalg for f32 {
    #[inline]
    fn rank_one_update(gram: &mut [Self], moment: &mut [Self], phi: &[Self], target: Self) {
        rank_one_update_scalar(gram, moment, phi, target);
    }
}

impl AccumulatorLinalg for f64 {
    /// SIMD rank-1 update: each Gram row (and the moment vector) is a
    /// scaled-add of φ, processed two lanes at a time.
    fn rank_one_update(gram: &mut [Self], moment: &mut [Self], phi: &[Self], target: Self) {
        let k = phi.len();

        axpy_f64x2(moment, target, phi);
        for j in 0..k {
            let row = &mut gram[j * k..(j + 1) * k];
            axpy_f64x2(row, phi[j], phi);
        }
    }
}

/// `out += a * xs`, two f64 lanes at a time with a scalar tail.
#[inline]
fn axpy_f64x2(out: &mut [f64], a: f64, xs: &[f64]) {
    let n = xs.len();
    let av = f64x2::splat(a);

    let pairs = n / 2;
    for p in 0..pairs {
        let i = p * 2;
        let x = f64x2::new([xs[i], xs[i + 1]]);
        let acc = f64x2::new([out[i], out[i + 1]]);
        let sum = acc + av * x;
        let lanes = sum.to_array();
        out[i] = lanes[0];
        out[i + 1] = lanes[1];
    }

    for i in pairs * 2..n {
        out[i] += a * xs[i];
    }
}

// ============================================================================
// Normal-Equation Accumulator
// ============================================================================

/// Running Gram matrix and moment vector for a k-term least-squares fit.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalAccumulator<T> {
    gram: Vec<T>,
    moment: Vec<T>,
    k: usize,
    count: usize,
}

impl<T: FloatLinalg + AccumulatorLinalg> NormalAccumulator<T> {
    /// Create an empty accumulator for feature vectors of length `k`.
    pub fn new(k: usize) -> Self {
        Self {
            gram: vec![T::zero(); k * k],
            moment: vec![T::zero(); k],
            k,
            count: 0,
        }
    }

    /// Fold one record into the running sums.
    pub fn accumulate(&mut self, phi: &[T], target: T) -> Result<(), TabfitError> {
        if phi.len() != self.k {
            return Err(TabfitError::MismatchedColumns {
                got: phi.len(),
                expected: self.k,
            });
        }

        T::rank_one_update(&mut self.gram, &mut self.moment, phi, target);
        self.count += 1;
        Ok(())
    }

    /// Sum another accumulator into this one (associative shard reduction).
    pub fn merge(&mut self, other: &Self) -> Result<(), TabfitError> {
        if other.k != self.k {
            return Err(TabfitError::MismatchedColumns {
                got: other.k,
                expected: self.k,
            });
        }

        for (a, &b) in self.gram.iter_mut().zip(other.gram.iter()) {
            *a = *a + b;
        }
        for (a, &b) in self.moment.iter_mut().zip(other.moment.iter()) {
            *a = *a + b;
        }
        self.count += other.count;
        Ok(())
    }

    /// Number of accumulated records.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Feature-vector length k.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.k
    }

    /// The running Gram matrix, row-major k×k.
    #[inline]
    pub fn gram(&self) -> &[T] {
        &self.gram
    }

    /// The running moment vector, length k.
    #[inline]
    pub fn moment(&self) -> &[T] {
        &self.moment
    }

    /// Solve G·β = v for the coefficient vector.
    ///
    /// Fails with [`TabfitError::EmptyInput`] when nothing was accumulated
    /// and [`TabfitError::SingularSystem`] when the Cholesky factorization
    /// rejects the Gram matrix.
    pub fn solve(&self) -> Result<Vec<T>, TabfitError> {
        if self.count == 0 {
            return Err(TabfitError::EmptyInput);
        }

        T::solve_spd(&self.gram, &self.moment, self.k).ok_or(TabfitError::SingularSystem)
    }
}
