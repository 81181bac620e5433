//! Whitespace-delimited record parsing.
//!
//! ## Purpose
//!
//! This module turns text lines into validated numeric records. Blank lines
//! and `#` comments are ignored; malformed lines (too few fields, a column
//! count disagreeing with the first valid line, unparseable tokens) are
//! logged with their line number and skipped. Only I/O failures are fatal.
//!
//! ## Design notes
//!
//! * **Stateful parser**: [`RecordParser`] locks the column count on the
//!   first valid line (or takes a fixed width up front) and keeps the line
//!   and skip counters, so callers can stream records one at a time without
//!   materializing a table.
//! * **Recoverable by default**: a bad line costs a `log::warn!` and a
//!   bumped skip counter, never an error. The fatal conditions (empty
//!   input, duplicates, singular systems) belong to the layers above.
//!
//! ## Non-goals
//!
//! * This module does not sort, deduplicate, or otherwise normalize records
//!   (handled by `primitives::dataset`).

// External dependencies
use core::marker::PhantomData;
use num_traits::Float;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::vec::Vec;

// Internal dependencies
use crate::primitives::errors::TabfitError;

// ============================================================================
// Record Parser
// ============================================================================

/// Stateful line-by-line record parser.
#[derive(Debug)]
pub struct RecordParser<T> {
    /// Locked column count; set up front or by the first valid line.
    width: Option<usize>,
    /// 1-based number of the last line pushed.
    line: usize,
    /// Number of malformed lines skipped so far.
    skipped: usize,
    _marker: PhantomData<T>,
}

impl<T: Float> RecordParser<T> {
    /// Create a parser. `expected_width` fixes the column count up front;
    /// `None` locks it to the first valid line.
    pub fn new(expected_width: Option<usize>) -> Self {
        Self {
            width: expected_width,
            line: 0,
            skipped: 0,
            _marker: PhantomData,
        }
    }

    /// Feed one line; returns the parsed record, or `None` for comments,
    /// blanks, and skipped lines.
    pub fn push(&mut self, text: &str) -> Option<Vec<T>> {
        self.line += 1;

        let trimmed = text.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return None;
        }

        let fields: Vec<&str> = text.split_whitespace().collect();
        if fields.len() < 2 {
            log::warn!(
                "line {}: expected at least 2 fields, got {}",
                self.line,
                fields.len()
            );
            self.skipped += 1;
            return None;
        }

        if let Some(expected) = self.width {
            if fields.len() != expected {
                log::warn!(
                    "line {}: ragged input, {} fields instead of {}",
                    self.line,
                    fields.len(),
                    expected
                );
                self.skipped += 1;
                return None;
            }
        }

        let mut record = Vec::with_capacity(fields.len());
        for (column, field) in fields.iter().enumerate() {
            match field.parse::<f64>() {
                Ok(value) => match T::from(value) {
                    Some(v) => record.push(v),
                    None => {
                        log::warn!("line {} column {}: value out of range", self.line, column + 1);
                        self.skipped += 1;
                        return None;
                    }
                },
                Err(err) => {
                    log::warn!("line {} column {}: {}", self.line, column + 1, err);
                    self.skipped += 1;
                    return None;
                }
            }
        }

        // Only a fully parsed line locks the column count.
        if self.width.is_none() {
            self.width = Some(fields.len());
        }

        Some(record)
    }

    /// Number of the last line pushed (1-based).
    #[inline]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Number of malformed lines skipped.
    #[inline]
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// The locked column count, once known.
    #[inline]
    pub fn width(&self) -> Option<usize> {
        self.width
    }
}

// ============================================================================
// Eager Readers
// ============================================================================

/// A fully parsed record table.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordTable<T> {
    /// Valid records, in input order.
    pub rows: Vec<Vec<T>>,
    /// Number of malformed lines skipped while reading.
    pub skipped: usize,
}

/// Read every record from `reader`. Only I/O failures are errors; malformed
/// lines are logged and counted.
pub fn read_records<T: Float, R: BufRead>(
    reader: R,
    expected_width: Option<usize>,
) -> Result<RecordTable<T>, TabfitError> {
    let mut parser = RecordParser::new(expected_width);
    let mut rows = Vec::new();

    for line in reader.lines() {
        let line = line.map_err(|e| TabfitError::Io(e.to_string()))?;
        if let Some(record) = parser.push(&line) {
            rows.push(record);
        }
    }

    Ok(RecordTable {
        rows,
        skipped: parser.skipped(),
    })
}

/// Read every record from the file at `path`.
pub fn read_table<T: Float>(path: &Path) -> Result<RecordTable<T>, TabfitError> {
    let file = File::open(path)
        .map_err(|e| TabfitError::Io(format!("{}: {e}", path.display())))?;
    read_records(BufReader::new(file), None)
}
