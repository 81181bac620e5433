//! Output shaping for coefficient vectors.
//!
//! ## Purpose
//!
//! This module renders a solved coefficient vector either as a raw listing
//! (one coefficient per line) or as a gnuplot-ready formula string such as
//! `+1.000000 +2.000000*x +0.500000*x**2`.
//!
//! ## Design notes
//!
//! * The formula names the true exponents, so parity-restricted or
//!   min-degree-shifted bases render correctly with the skipped powers
//!   omitted.
//! * Coefficients use explicit signs and six decimals, matching the usual
//!   gnuplot-formula convention.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Write};
use num_traits::Float;

// ============================================================================
// Coefficient Rendering
// ============================================================================

/// Render the coefficient vector as a raw listing, one value per line.
pub fn format_listing<T: Float + Display>(beta: &[T]) -> String {
    let mut out = String::new();
    for c in beta {
        let _ = writeln!(out, "{c}");
    }
    out
}

/// Render the coefficient vector as a formula over the given exponents.
///
/// Terms are `+c`, `+c*x`, or `+c*x**p` for exponents 0, 1, and higher,
/// joined by single spaces in ascending exponent order.
pub fn format_formula<T: Float>(beta: &[T], exponents: &[u32]) -> String {
    debug_assert_eq!(beta.len(), exponents.len());

    let mut out = String::new();
    for (i, (c, &p)) in beta.iter().zip(exponents.iter()).enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let c = c.to_f64().unwrap_or(f64::NAN);
        match p {
            0 => {
                let _ = write!(out, "{c:+.6}");
            }
            1 => {
                let _ = write!(out, "{c:+.6}*x");
            }
            _ => {
                let _ = write!(out, "{c:+.6}*x**{p}");
            }
        }
    }
    out
}
