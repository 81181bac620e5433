//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer contains the shared validation and output-shaping utilities
//! sitting between the algorithms and the user-facing API:
//! - Precondition checks for datasets and configuration
//! - Coefficient rendering (raw listing, gnuplot formula)

/// Input validation for configuration and data.
pub mod validator;

/// Coefficient vector rendering.
pub mod formatter;
