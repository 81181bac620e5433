//! Layer 5: IO (std only)
//!
//! # Purpose
//!
//! This layer is the thin glue between text streams and the numeric core:
//! whitespace-delimited record parsing with warn-and-skip error handling.
//! It hands the algorithms validated numeric records and nothing else.

/// Record parsing and table reading.
pub mod reader;
