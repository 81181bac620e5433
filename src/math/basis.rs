//! Monomial feature basis for polynomial regression.
//!
//! ## Purpose
//!
//! This module maps a raw feature value into a vector of monomial basis
//! values x^p. The exponent sequence is the configured degree range,
//! optionally restricted to even or odd powers.
//!
//! ## Design notes
//!
//! * **Structural exclusivity**: The parity restriction is an enum, so
//!   "both even and odd" is unrepresentable here; the CLI maps conflicting
//!   flags to an error before a basis is built.
//! * **Incremental powers**: Consecutive admitted exponents differ by a
//!   fixed stride (1 unrestricted, 2 under a parity filter), so evaluation
//!   is one multiply per term after the first.
//!
//! ## Invariants
//!
//! * The exponent sequence is non-empty and strictly increasing.
//! * `eval` writes exactly `len()` values.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::TabfitError;

// ============================================================================
// Parity Restriction
// ============================================================================

/// Restriction on which monomial exponents participate in the basis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Parity {
    /// Every exponent in the degree range (default).
    #[default]
    Any,

    /// Even exponents only.
    Even,

    /// Odd exponents only.
    Odd,
}

impl Parity {
    /// Whether the exponent `p` participates under this restriction.
    #[inline]
    pub fn admits(self, p: usize) -> bool {
        match self {
            Parity::Any => true,
            Parity::Even => p % 2 == 0,
            Parity::Odd => p % 2 == 1,
        }
    }
}

// ============================================================================
// Monomial Basis
// ============================================================================

/// Fixed sequence of monomial exponents defining the feature map
/// φ(x) = [x^{p₀}, x^{p₁}, …].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonomialBasis {
    exponents: Vec<u32>,
    parity: Parity,
}

impl MonomialBasis {
    /// Build the basis for exponents in `[min_degree, max_degree]` that pass
    /// the parity filter.
    ///
    /// Fails with [`TabfitError::InvalidDegreeRange`] when the range is
    /// inverted or the filter leaves no exponents.
    pub fn new(
        min_degree: usize,
        max_degree: usize,
        parity: Parity,
    ) -> Result<Self, TabfitError> {
        if min_degree > max_degree {
            return Err(TabfitError::InvalidDegreeRange {
                min: min_degree,
                max: max_degree,
            });
        }

        let exponents: Vec<u32> = (min_degree..=max_degree)
            .filter(|&p| parity.admits(p))
            .map(|p| p as u32)
            .collect();

        if exponents.is_empty() {
            return Err(TabfitError::InvalidDegreeRange {
                min: min_degree,
                max: max_degree,
            });
        }

        Ok(Self { exponents, parity })
    }

    /// Number of basis terms.
    #[inline]
    pub fn len(&self) -> usize {
        self.exponents.len()
    }

    /// Returns true if the basis has no terms (never holds for a built basis).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.exponents.is_empty()
    }

    /// The admitted exponent sequence, ascending.
    #[inline]
    pub fn exponents(&self) -> &[u32] {
        &self.exponents
    }

    /// The active parity restriction.
    #[inline]
    pub fn parity(&self) -> Parity {
        self.parity
    }

    /// Fill `out` with φ(x), one value per exponent.
    pub fn eval<T: Float>(&self, x: T, out: &mut Vec<T>) {
        out.clear();

        // Consecutive admitted exponents differ by the stride, so each term
        // after the first is a single multiply.
        let stride = match self.parity {
            Parity::Any => x,
            Parity::Even | Parity::Odd => x * x,
        };

        let mut acc = x.powi(self.exponents[0] as i32);
        for _ in &self.exponents {
            out.push(acc);
            acc = acc * stride;
        }
    }
}
