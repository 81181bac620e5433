//! Windowing primitives for local interpolation.
//!
//! ## Purpose
//!
//! This module selects, for a query value and an interpolation degree, the
//! contiguous run of the deg+1 nearest samples in a sorted dataset. The
//! tie-break rules live in small named comparators so the policy can be
//! tested in isolation from any I/O.
//!
//! ## Key concepts
//!
//! * **Insertion point**: the smallest index `i` with `query < x[i]`.
//! * **Clamp then shrink**: a candidate window of width 2·deg+2 around the
//!   insertion point is shifted back inside the array, then shrunk one
//!   endpoint at a time by dropping whichever end is farther from the query.
//!
//! ## Invariants
//!
//! * Input x-values are sorted ascending with no duplicates.
//! * `select` requires `1 <= degree < x.len()` and returns a window of
//!   exactly degree+1 samples.

// External dependencies
use num_traits::Float;

// ============================================================================
// Tie-Break Comparators
// ============================================================================

/// Which endpoint of a window to discard while shrinking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Discard the left (lower-index) endpoint.
    Left,
    /// Discard the right (higher-index) endpoint.
    Right,
}

/// Decide which window endpoint to drop given the endpoint distances.
///
/// The right endpoint is dropped when the left point is closer or equally
/// close; ties keep the lower-indexed sample.
#[inline]
pub fn drop_endpoint<T: Float>(d_left: T, d_right: T) -> Side {
    if d_left <= d_right {
        Side::Right
    } else {
        Side::Left
    }
}

/// Nearest-neighbor tie-break: the predecessor wins only when strictly
/// closer; equal distances pick the successor.
#[inline]
pub fn prefer_predecessor<T: Float>(d_pred: T, d_succ: T) -> bool {
    d_pred < d_succ
}

// ============================================================================
// Search Helpers
// ============================================================================

/// Smallest index `i` such that `query < x[i]`; `x.len()` when the query is
/// at or beyond the last sample.
#[inline]
pub fn insertion_point<T: Float>(x: &[T], query: T) -> usize {
    x.partition_point(|&v| v <= query)
}

/// Index of the sample nearest to `query` under the degree-0 policy.
#[inline]
pub fn nearest_index<T: Float>(x: &[T], query: T) -> usize {
    debug_assert!(!x.is_empty(), "nearest_index: empty input");

    let i = insertion_point(x, query);
    if i > 0 && (i == x.len() || prefer_predecessor(query - x[i - 1], x[i] - query)) {
        i - 1
    } else {
        i
    }
}

// ============================================================================
// Window
// ============================================================================

/// Inclusive window bounds `[left, right]` for a local fit.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Window {
    /// Left boundary index (inclusive).
    pub left: usize,

    /// Right boundary index (inclusive).
    pub right: usize,
}

impl Window {
    /// Get the number of samples in the window.
    #[inline]
    pub fn len(&self) -> usize {
        self.right - self.left + 1
    }

    /// Check if the window is empty.
    #[allow(dead_code)]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Select the window of the degree+1 samples nearest to `query`.
    ///
    /// Starts from the candidate range `[i-1-deg, i+deg]` around the
    /// insertion point (width 2·deg+2), shifts it back inside `[0, n)`
    /// preserving its width where the data permits, then shrinks to
    /// degree+1 samples via [`drop_endpoint`].
    pub fn select<T: Float>(x: &[T], query: T, degree: usize) -> Self {
        let n = x.len();
        debug_assert!(degree >= 1, "select: use nearest_index for degree 0");
        debug_assert!(degree < n, "select: degree must be below sample count");

        let i = insertion_point(x, query) as isize;
        let deg = degree as isize;
        let last = (n - 1) as isize;

        let mut left = i - 1 - deg;
        let mut right = i + deg;

        // Shift the whole window back inside the array.
        if left < 0 {
            right += -left;
            left = 0;
        }
        if right > last {
            left -= right - last;
            right = last;
        }
        if left < 0 {
            left = 0;
        }

        let mut window = Self {
            left: left as usize,
            right: right as usize,
        };

        // Drop the farther endpoint until degree+1 samples remain.
        while window.len() > degree + 1 {
            let d_left = (query - x[window.left]).abs();
            let d_right = (x[window.right] - query).abs();
            match drop_endpoint(d_left, d_right) {
                Side::Right => window.right -= 1,
                Side::Left => window.left += 1,
            }
        }

        window
    }
}
