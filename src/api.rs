//! High-level API for tabfit.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points for both pipelines:
//! fluent builders that capture configuration as explicit immutable values,
//! validate it once, and hand back ready-to-use models. The cores never see
//! a global flag.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Builders with sensible defaults; only deviations need
//!   to be spelled out.
//! * **Validated**: Parameters are checked when `build()` is called, and a
//!   parameter set twice is rejected (`DuplicateParameter`).
//! * **Type-Safe**: Generic over float precision through the same trait
//!   bounds the backends use.
//!
//! ### Configuration Flow
//!
//! 1. Create a builder (`InterpolatorBuilder::new()`, `PolyFitBuilder::new()`, …).
//! 2. Chain configuration methods (`.degree()`, `.clip()`, `.parity()`, …).
//! 3. Call `build()` to validate and obtain the model.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::interpolation::interpolate;
use crate::algorithms::regression::{AccumulatorLinalg, NormalAccumulator};
use crate::engine::formatter;
use crate::engine::validator::Validator;
use crate::math::linalg::FloatLinalg;

// Publicly re-exported types
pub use crate::math::basis::{MonomialBasis, Parity};
pub use crate::primitives::dataset::Dataset;
pub use crate::primitives::errors::TabfitError;

// ============================================================================
// Interpolation
// ============================================================================

/// Fluent builder for configuring an [`Interpolator`].
#[derive(Debug, Clone, Default)]
pub struct InterpolatorBuilder {
    /// Interpolation degree (0 = nearest lookup, 1 = linear, …).
    pub degree: Option<usize>,

    /// Drop queries outside the dataset bounds instead of extrapolating.
    pub clip: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl InterpolatorBuilder {
    /// Create a new builder with default settings (degree 1, no clipping).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the interpolation degree.
    pub fn degree(mut self, degree: usize) -> Self {
        if self.degree.is_some() {
            self.duplicate_param = Some("degree");
        }
        self.degree = Some(degree);
        self
    }

    /// Set whether out-of-range queries are clipped.
    pub fn clip(mut self, clip: bool) -> Self {
        if self.clip.is_some() {
            self.duplicate_param = Some("clip");
        }
        self.clip = Some(clip);
        self
    }

    /// Validate the configuration against `data` and build the model.
    ///
    /// The dataset must hold more records than the requested degree.
    pub fn build<T: Float>(self, data: Dataset<T>) -> Result<Interpolator<T>, TabfitError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let degree = self.degree.unwrap_or(1);
        Validator::validate_dataset_degree(data.len(), degree)?;

        Ok(Interpolator {
            data,
            degree,
            clip: self.clip.unwrap_or(false),
        })
    }
}

/// Local polynomial interpolation model owning its reference dataset.
#[derive(Debug, Clone)]
pub struct Interpolator<T> {
    data: Dataset<T>,
    degree: usize,
    clip: bool,
}

impl<T: Float> Interpolator<T> {
    /// Interpolate all dependent columns at `x`.
    ///
    /// Returns `None` when clipping is enabled and `x` lies strictly outside
    /// the dataset bounds; otherwise the interpolated (or extrapolated)
    /// column values.
    pub fn query(&self, x: T) -> Option<Vec<T>> {
        if self.clip {
            let (lo, hi) = self.data.bounds();
            if x < lo || x > hi {
                return None;
            }
        }

        Some(interpolate(&self.data, x, self.degree))
    }

    /// The configured interpolation degree.
    #[inline]
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Whether out-of-range queries are clipped.
    #[inline]
    pub fn clip(&self) -> bool {
        self.clip
    }

    /// The owned reference dataset.
    #[inline]
    pub fn data(&self) -> &Dataset<T> {
        &self.data
    }
}

// ============================================================================
// Linear Regression
// ============================================================================

/// Fluent builder for configuring a [`LinearFit`].
#[derive(Debug, Clone, Default)]
pub struct LinearFitBuilder {
    /// Number of features per record; inferred from the first observation
    /// when not declared.
    pub features: Option<usize>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl LinearFitBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-declare the number of features per record.
    pub fn features(mut self, k: usize) -> Self {
        if self.features.is_some() {
            self.duplicate_param = Some("features");
        }
        self.features = Some(k);
        self
    }

    /// Validate the configuration and build the accumulating model.
    pub fn build<T: FloatLinalg + AccumulatorLinalg>(
        self,
    ) -> Result<LinearFit<T>, TabfitError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Ok(LinearFit {
            acc: self.features.map(NormalAccumulator::new),
        })
    }
}

/// Streaming multi-feature linear least-squares fit.
///
/// Observations fold straight into the running Gram matrix and moment
/// vector; memory use is O(k²) regardless of the record count.
#[derive(Debug, Clone)]
pub struct LinearFit<T> {
    acc: Option<NormalAccumulator<T>>,
}

impl<T: FloatLinalg + AccumulatorLinalg> LinearFit<T> {
    /// Fold one record into the fit. The first observation fixes the
    /// feature count when it was not pre-declared.
    pub fn observe(&mut self, target: T, features: &[T]) -> Result<(), TabfitError> {
        if features.is_empty() {
            return Err(TabfitError::MismatchedColumns {
                got: 0,
                expected: 1,
            });
        }

        let acc = self
            .acc
            .get_or_insert_with(|| NormalAccumulator::new(features.len()));
        acc.accumulate(features, target)
    }

    /// Number of records observed so far.
    #[inline]
    pub fn count(&self) -> usize {
        self.acc.as_ref().map_or(0, NormalAccumulator::count)
    }

    /// Feature count, once known.
    #[inline]
    pub fn features(&self) -> Option<usize> {
        self.acc.as_ref().map(NormalAccumulator::dimension)
    }

    /// Solve for the coefficient vector β.
    pub fn solve(&self) -> Result<Vec<T>, TabfitError> {
        match &self.acc {
            Some(acc) => acc.solve(),
            None => Err(TabfitError::EmptyInput),
        }
    }
}

// ============================================================================
// Polynomial Regression
// ============================================================================

/// Fluent builder for configuring a [`PolyFit`].
#[derive(Debug, Clone, Default)]
pub struct PolyFitBuilder {
    /// Minimum polynomial degree (default 0).
    pub min_degree: Option<usize>,

    /// Maximum polynomial degree (default 2).
    pub max_degree: Option<usize>,

    /// Parity restriction on the monomial exponents.
    pub parity: Option<Parity>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl PolyFitBuilder {
    /// Create a new builder with default settings (degrees 0..=2, no
    /// parity restriction).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum polynomial degree.
    pub fn min_degree(mut self, min: usize) -> Self {
        if self.min_degree.is_some() {
            self.duplicate_param = Some("min_degree");
        }
        self.min_degree = Some(min);
        self
    }

    /// Set the maximum polynomial degree.
    pub fn max_degree(mut self, max: usize) -> Self {
        if self.max_degree.is_some() {
            self.duplicate_param = Some("max_degree");
        }
        self.max_degree = Some(max);
        self
    }

    /// Restrict the basis to even or odd powers.
    pub fn parity(mut self, parity: Parity) -> Self {
        if self.parity.is_some() {
            self.duplicate_param = Some("parity");
        }
        self.parity = Some(parity);
        self
    }

    /// Validate the configuration and build the accumulating model.
    pub fn build<T: FloatLinalg + AccumulatorLinalg>(self) -> Result<PolyFit<T>, TabfitError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let min = self.min_degree.unwrap_or(0);
        let max = self.max_degree.unwrap_or(2);
        Validator::validate_degree_range(min, max)?;

        let basis = MonomialBasis::new(min, max, self.parity.unwrap_or_default())?;
        let acc = NormalAccumulator::new(basis.len());

        Ok(PolyFit {
            basis,
            acc,
            phi: Vec::new(),
        })
    }
}

/// Streaming single-feature polynomial least-squares fit.
#[derive(Debug, Clone)]
pub struct PolyFit<T> {
    basis: MonomialBasis,
    acc: NormalAccumulator<T>,
    phi: Vec<T>,
}

impl<T: FloatLinalg + AccumulatorLinalg> PolyFit<T> {
    /// Fold one (x, y) pair into the fit.
    pub fn observe(&mut self, x: T, target: T) -> Result<(), TabfitError> {
        self.basis.eval(x, &mut self.phi);
        self.acc.accumulate(&self.phi, target)
    }

    /// Number of records observed so far.
    #[inline]
    pub fn count(&self) -> usize {
        self.acc.count()
    }

    /// The monomial exponents in use, ascending.
    #[inline]
    pub fn exponents(&self) -> &[u32] {
        self.basis.exponents()
    }

    /// Solve for the coefficient vector β, one entry per exponent.
    pub fn solve(&self) -> Result<Vec<T>, TabfitError> {
        self.acc.solve()
    }

    /// Render solved coefficients as a gnuplot formula over this basis.
    pub fn formula(&self, beta: &[T]) -> String {
        formatter::format_formula(beta, self.basis.exponents())
    }
}
