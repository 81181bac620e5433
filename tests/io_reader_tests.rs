//! Tests for record parsing.
//!
//! These tests verify the warn-and-skip line discipline:
//! - Blank and comment lines ignored silently
//! - Short, ragged, and unparseable lines skipped with a counter bump
//! - Column count locked by the first valid line or fixed up front
//!
//! ## Test Organization
//!
//! 1. **Streaming Parser** - per-line behavior
//! 2. **Eager Reader** - whole-stream tables

use std::io::Cursor;

use tabfit::io::reader::{read_records, RecordParser};

// ============================================================================
// Streaming Parser Tests
// ============================================================================

/// Test parsing a plain record line.
#[test]
fn test_push_basic() {
    let mut parser = RecordParser::<f64>::new(None);

    let record = parser.push("1.0  2.5\t-3e2").unwrap();

    assert_eq!(record, vec![1.0, 2.5, -300.0]);
    assert_eq!(parser.width(), Some(3));
    assert_eq!(parser.skipped(), 0);
}

/// Test that blank lines and comments are ignored without counting as
/// skipped.
#[test]
fn test_push_blank_and_comment() {
    let mut parser = RecordParser::<f64>::new(None);

    assert!(parser.push("").is_none());
    assert!(parser.push("   ").is_none());
    assert!(parser.push("# header comment").is_none());
    assert!(parser.push("  # indented comment").is_none());

    assert_eq!(parser.skipped(), 0);
    assert_eq!(parser.line(), 4);
}

/// Test that a short line is skipped.
#[test]
fn test_push_short_line() {
    let mut parser = RecordParser::<f64>::new(None);

    assert!(parser.push("42").is_none());

    assert_eq!(parser.skipped(), 1);
    assert_eq!(parser.width(), None);
}

/// Test that a ragged line is skipped after the width locks.
#[test]
fn test_push_ragged_line() {
    let mut parser = RecordParser::<f64>::new(None);

    assert!(parser.push("1 2 3").is_some());
    assert!(parser.push("4 5").is_none());
    assert!(parser.push("6 7 8").is_some());

    assert_eq!(parser.skipped(), 1);
}

/// Test that an unparseable token skips the whole line.
#[test]
fn test_push_bad_token() {
    let mut parser = RecordParser::<f64>::new(None);

    assert!(parser.push("1.0 oops").is_none());

    assert_eq!(parser.skipped(), 1);
    // A skipped line must not lock the column count.
    assert!(parser.push("1 2 3").is_some());
}

/// Test a fixed expected width.
#[test]
fn test_push_expected_width() {
    let mut parser = RecordParser::<f64>::new(Some(2));

    assert!(parser.push("1 2").is_some());
    assert!(parser.push("1 2 3").is_none());

    assert_eq!(parser.skipped(), 1);
}

// ============================================================================
// Eager Reader Tests
// ============================================================================

/// Test reading a whole stream into a table.
#[test]
fn test_read_records() {
    let input = "# dataset\n0 0\n1 1\n\n2 4\nbad line here\n3 9\n";

    let table = read_records::<f64, _>(Cursor::new(input), None).unwrap();

    assert_eq!(table.rows.len(), 4);
    assert_eq!(table.rows[2], vec![2.0, 4.0]);
    assert_eq!(table.skipped, 1);
}

/// Test that an all-comment stream yields an empty table.
#[test]
fn test_read_records_empty() {
    let input = "# only\n# comments\n";

    let table = read_records::<f64, _>(Cursor::new(input), None).unwrap();

    assert!(table.rows.is_empty());
    assert_eq!(table.skipped, 0);
}
