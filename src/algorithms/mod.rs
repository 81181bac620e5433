//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer contains the two pipelines with real algorithmic content:
//! - Local polynomial interpolation (window selection + Lagrange evaluation)
//! - Least-squares regression (normal-equation accumulation + Cholesky solve)
//!
//! The pipelines share no code, only a shape: ingest validated records,
//! build a numeric structure, answer queries or solve for coefficients.

/// Local polynomial interpolation queries.
pub mod interpolation;

/// Normal-equation accumulation and least-squares solving.
pub mod regression;
