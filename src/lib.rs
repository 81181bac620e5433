//! # tabfit — local polynomial interpolation and least-squares fitting
//!
//! Two numeric primitives over tabular `(x, y₁…yₘ)` data:
//!
//! 1. **Local polynomial interpolation**: answer queries at arbitrary points
//!    using a moving window of the nearest samples and the Lagrange form of
//!    the interpolating polynomial.
//! 2. **Least-squares regression**: fit a linear or polynomial model to a
//!    whole record stream by accumulating the normal equations and solving
//!    them through a Cholesky factorization.
//!
//! The two pipelines share no code but share a structure: ingest validated
//! records, build a numeric structure, answer queries or solve for
//! coefficients.
//!
//! ## Quick Start
//!
//! ### Interpolation
//!
//! ```rust
//! use tabfit::prelude::*;
//!
//! // Records of the form [x, y1, ...]; input order does not matter.
//! let rows: Vec<Vec<f64>> = vec![
//!     vec![0.0, 0.0],
//!     vec![2.0, 4.0],
//!     vec![1.0, 1.0],
//!     vec![3.0, 9.0],
//! ];
//!
//! let data = Dataset::from_rows(rows)?;
//! let model = InterpolatorBuilder::new()
//!     .degree(2)      // 3-point (quadratic) windows
//!     .clip(false)    // extrapolate outside the data range
//!     .build(data)?;
//!
//! // y = x² sampled above, so the quadratic fit is exact.
//! let y = model.query(1.5).unwrap();
//! assert!((y[0] - 2.25).abs() < 1e-12);
//! # Result::<(), TabfitError>::Ok(())
//! ```
//!
//! ### Polynomial regression
//!
//! ```rust
//! use tabfit::prelude::*;
//!
//! let mut fit = PolyFitBuilder::new()
//!     .max_degree(2)
//!     .build::<f64>()?;
//!
//! for i in 0..10 {
//!     let x = i as f64;
//!     fit.observe(x, 3.0 + 0.5 * x * x)?;
//! }
//!
//! let beta = fit.solve()?;
//! assert!((beta[0] - 3.0).abs() < 1e-8);   // x⁰
//! assert!(beta[1].abs() < 1e-8);           // x¹
//! assert!((beta[2] - 0.5).abs() < 1e-8);   // x²
//! # Result::<(), TabfitError>::Ok(())
//! ```
//!
//! ### Multi-feature linear regression
//!
//! ```rust
//! use tabfit::prelude::*;
//!
//! let mut fit = LinearFitBuilder::new().build::<f64>()?;
//!
//! // target = 2·a − b, streamed one record at a time.
//! fit.observe(3.0, &[2.0, 1.0])?;
//! fit.observe(4.0, &[3.0, 2.0])?;
//! fit.observe(9.0, &[5.0, 1.0])?;
//!
//! let beta = fit.solve()?;
//! assert!((beta[0] - 2.0).abs() < 1e-10);
//! assert!((beta[1] + 1.0).abs() < 1e-10);
//! # Result::<(), TabfitError>::Ok(())
//! ```
//!
//! ## Error Handling
//!
//! Fatal conditions — an empty dataset, too few points for the requested
//! degree, duplicate x values, a singular regression system, conflicting
//! options — surface as [`TabfitError`](prelude::TabfitError) from `build`,
//! `observe`, or `solve`. Per-line parse problems are recoverable: the `io`
//! layer logs them through the `log` facade with their line number and
//! skips the line.
//!
//! ## Command-Line Tools
//!
//! Three thin binaries wrap the library (enabled by the default `cli`
//! feature): `interp` (dataset file + query stream), `linfit`
//! (multi-feature linear regression over stdin), and `polyfit`
//! (single-feature polynomial regression over stdin, with degree range and
//! even/odd restrictions).
//!
//! ## no_std
//!
//! The numeric core is `no_std`-compatible: disable default features to
//! drop the standard library (the `io` layer and the binaries need `std`).
//!
//! ```toml
//! [dependencies]
//! tabfit = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Layers
// ============================================================================

// Layer 1: Primitives - data structures and low-level policy.
//
// Contains the error type, the sorted reference dataset, and window
// selection over sorted samples.
pub mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains Lagrange basis evaluation, monomial feature bases with parity
// restriction, and the Cholesky solve.
pub mod math;

// Layer 3: Algorithms - the two pipelines.
//
// Contains interpolation queries (window + Lagrange) and the streaming
// normal-equation accumulator.
pub mod algorithms;

// Layer 4: Engine - validation and output shaping.
//
// Contains the builder-facing validators and coefficient rendering.
pub mod engine;

// Layer 5: IO - record parsing (std only).
//
// Contains the warn-and-skip line parser and table readers.
#[cfg(feature = "std")]
pub mod io;

// High-level fluent API.
//
// Provides the builders for interpolation and regression models.
pub mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard tabfit prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use tabfit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        Dataset, Interpolator, InterpolatorBuilder, LinearFit, LinearFitBuilder, MonomialBasis,
        Parity, PolyFit, PolyFitBuilder, TabfitError,
    };
}
