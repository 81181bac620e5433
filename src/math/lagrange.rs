//! Lagrange basis evaluation over a sample window.
//!
//! ## Purpose
//!
//! This module computes Lagrange interpolation weights for the samples in a
//! window and applies them across all dependent columns of the dataset.
//!
//! ## Key concepts
//!
//! * **Basis weight**: ℓⱼ(x) = Π_{i≠j} (x − xᵢ) / (xⱼ − xᵢ) over the window.
//! * **Evaluation**: per dependent column k, the interpolated value is
//!   Σⱼ yⱼ,ₖ · ℓⱼ(x).
//!
//! ## Invariants
//!
//! * Window x-values are strictly increasing, so no denominator is zero.
//! * A query equal to a window sample yields ℓ = 1 for that sample and 0 for
//!   every other; this is the exact limit of the product, not a special case.
//!
//! ## Non-goals
//!
//! * This module does not choose the window (handled by `primitives::window`).
//! * No compensation for near-duplicate x values beyond the dataset's global
//!   uniqueness invariant.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::dataset::Dataset;
use crate::primitives::window::Window;

// ============================================================================
// Basis Weights
// ============================================================================

/// Fill `weights` with the Lagrange basis weights ℓⱼ(query) for each sample
/// in the window, in window order.
pub fn basis_weights<T: Float>(x: &[T], window: Window, query: T, weights: &mut Vec<T>) {
    weights.clear();

    for j in window.left..=window.right {
        let mut lj = T::one();
        for i in window.left..=window.right {
            if i == j {
                continue;
            }
            lj = lj * (query - x[i]) / (x[j] - x[i]);
        }
        weights.push(lj);
    }
}

// ============================================================================
// Evaluation
// ============================================================================

/// Interpolate every dependent column of `data` at `query` using the window.
pub fn evaluate<T: Float>(data: &Dataset<T>, window: Window, query: T) -> Vec<T> {
    let mut weights = Vec::with_capacity(window.len());
    basis_weights(data.x(), window, query, &mut weights);

    let mut out = vec![T::zero(); data.width()];
    for (offset, j) in (window.left..=window.right).enumerate() {
        let lj = weights[offset];
        let row = data.row(j);
        for (k, slot) in out.iter_mut().enumerate() {
            *slot = *slot + row[k] * lj;
        }
    }

    out
}
