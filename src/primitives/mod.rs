//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the fundamental data structures shared by both
//! pipelines:
//! - Error types
//! - The sorted, deduplicated reference dataset
//! - Window selection over sorted samples
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: IO
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error types for tabfit operations.
pub mod errors;

/// Sorted reference dataset.
pub mod dataset;

/// Window selection primitives.
pub mod window;
