//! Error types for tabfit operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while building a
//! dataset, configuring a model, or solving a regression system.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., actual vs. required counts).
//! * **Two severities**: Everything in this enum is fatal to the run. Per-line
//!   parse problems are recoverable and never surface here; the `io` layer logs
//!   and skips them.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for tabfit operations.
#[derive(Debug, Clone, PartialEq)]
pub enum TabfitError {
    /// Dataset or input stream produced no usable records.
    EmptyInput,

    /// Number of points is below the minimum required by the requested degree.
    TooFewPoints {
        /// Number of points provided.
        got: usize,
        /// Minimum required points.
        min: usize,
    },

    /// Two dataset records share the same independent-variable value.
    DuplicateX(f64),

    /// Input data contains NaN or infinite values.
    InvalidNumericValue(String),

    /// Record width does not match the established column count.
    MismatchedColumns {
        /// Number of columns in the offending record.
        got: usize,
        /// Expected number of columns.
        expected: usize,
    },

    /// Polynomial degree range is empty (min above max, or parity filter
    /// leaves no exponents).
    InvalidDegreeRange {
        /// Configured minimum degree.
        min: usize,
        /// Configured maximum degree.
        max: usize,
    },

    /// Two options that cannot be combined were both requested.
    MutuallyExclusive {
        /// Name of the first option.
        first: &'static str,
        /// Name of the second option.
        second: &'static str,
    },

    /// The Gram matrix is not positive definite; the normal equations have
    /// no unique least-squares solution.
    SingularSystem,

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },

    /// Underlying I/O failure while reading records.
    #[cfg(feature = "std")]
    Io(String),
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for TabfitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input contains no valid records"),
            Self::TooFewPoints { got, min } => {
                write!(f, "Too few points: got {got}, need at least {min}")
            }
            Self::DuplicateX(x) => {
                write!(f, "Duplicate x value in dataset: {x}")
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::MismatchedColumns { got, expected } => {
                write!(f, "Column mismatch: record has {got} fields, expected {expected}")
            }
            Self::InvalidDegreeRange { min, max } => {
                write!(f, "Empty degree range: no exponents between {min} and {max}")
            }
            Self::MutuallyExclusive { first, second } => {
                write!(f, "Options '{first}' and '{second}' are mutually exclusive")
            }
            Self::SingularSystem => {
                write!(f, "Normal equations are singular: Gram matrix is not positive definite")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
            #[cfg(feature = "std")]
            Self::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for TabfitError {}
