//! Local polynomial interpolation over a sorted dataset.
//!
//! ## Purpose
//!
//! This module answers single-point queries against a [`Dataset`]: pick the
//! window of the degree+1 nearest samples and evaluate the Lagrange
//! polynomial through them for every dependent column.
//!
//! ## Key concepts
//!
//! * **Degree 0**: a pure nearest-neighbor lookup; the matched record's
//!   dependent columns are returned unchanged, no weights computed.
//! * **Degree n**: the window selector picks the n+1 nearest samples and
//!   the Lagrange evaluator interpolates through them.
//!
//! ## Invariants
//!
//! * `degree < data.len()` (enforced upstream by the validator).
//! * Queries outside the data range extrapolate using the edge window;
//!   clipping is a policy of the caller, not of this module.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::lagrange;
use crate::primitives::dataset::Dataset;
use crate::primitives::window::{self, Window};

// ============================================================================
// Query Evaluation
// ============================================================================

/// Interpolate all dependent columns of `data` at `query` with the given
/// degree.
///
/// Degree 0 returns the nearest record's columns directly; higher degrees
/// fit the Lagrange polynomial through the degree+1 nearest samples.
pub fn interpolate<T: Float>(data: &Dataset<T>, query: T, degree: usize) -> Vec<T> {
    debug_assert!(
        degree < data.len(),
        "interpolate: degree must be below the record count"
    );

    if degree == 0 {
        let idx = window::nearest_index(data.x(), query);
        return data.row(idx).to_vec();
    }

    let window = Window::select(data.x(), query, degree);
    lagrange::evaluate(data, window, query)
}
