//! # Tweetflat - Tweet Capture Flattening
//!
//! A small library for flattening line-delimited JSON tweet captures into a
//! single flat CSV table: one input line, one output row of 15 fixed fields.
//!
//! ## Quick Start
//!
//! ```rust
//! use tweetflat::{flatten_jsonl, FlattenConfig, RowWriter};
//!
//! # fn main() -> anyhow::Result<()> {
//! let input = concat!(
//!     r#"{"id": 1, "created_at": "Thu Feb 07 09:45:00 +0000 2019", "#,
//!     r#""user": {"screen_name": "somebody", "id": 2, "location": ""}, "#,
//!     r#""text": "hello", "retweet_count": 0, "favorite_count": 0, "#,
//!     r#""entities": {"hashtags": []}}"#,
//! );
//!
//! let mut buffer = Vec::new();
//! let mut writer = RowWriter::from_writer(&mut buffer);
//! let rows = flatten_jsonl(input.as_bytes(), &mut writer, &FlattenConfig::default())?;
//! writer.flush()?;
//!
//! assert_eq!(rows, 1);
//! # Ok(())
//! # }
//! ```
//!
//! Extraction semantics live in [`flatten`]: the text-resolution cascade, the
//! guarded optional fields, and the strict failure policy for everything else.

use anyhow::{Context, Result};
use serde_json::Value;
use std::io::{BufRead, Write};

pub mod flatten;

// Re-export commonly used types for convenience
pub use flatten::{
    extract_row, resolve_text, FlattenConfig, FlattenError, Row, RowWriter, TextStrategy,
};

/// Main entry point: flatten a stream of line-delimited JSON records.
///
/// Lines are processed strictly in order; blank lines are skipped. The first
/// malformed line or structurally invalid record aborts with a line-numbered
/// error, leaving rows written so far in the output. Returns the number of
/// rows written.
pub fn flatten_jsonl<R: BufRead, W: Write>(
    reader: R,
    writer: &mut RowWriter<W>,
    config: &FlattenConfig,
) -> Result<u64> {
    let mut rows = 0u64;

    for (idx, line) in reader.lines().enumerate() {
        let line = line.context("failed to read line")?;
        if line.trim().is_empty() {
            continue;
        }

        let record: Value = serde_json::from_str(&line)
            .with_context(|| format!("invalid JSON on line {}", idx + 1))?;
        let row = extract_row(&record, config.text_strategy)
            .with_context(|| format!("malformed record on line {}", idx + 1))?;

        writer.write_row(&row)?;
        rows += 1;
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_line(id: i64, tag: &str) -> String {
        format!(
            concat!(
                r#"{{"id": {}, "created_at": "Thu Feb 07 09:45:00 +0000 2019", "#,
                r#""user": {{"screen_name": "somebody", "id": 2, "location": ""}}, "#,
                r#""text": "post {}", "retweet_count": 0, "favorite_count": 0, "#,
                r#""entities": {{"hashtags": [{{"text": "{}"}}]}}}}"#,
            ),
            id, id, tag
        )
    }

    #[test]
    fn test_one_row_per_line_in_input_order() {
        let input = format!("{}\n{}\n{}\n", record_line(1, "a"), record_line(2, "b"), record_line(3, "c"));

        let mut buffer = Vec::new();
        let mut writer = RowWriter::from_writer(&mut buffer);
        let rows = flatten_jsonl(input.as_bytes(), &mut writer, &FlattenConfig::default()).unwrap();
        writer.flush().unwrap();
        drop(writer);

        assert_eq!(rows, 3);
        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("1,"));
        assert!(lines[1].starts_with("2,"));
        assert!(lines[2].starts_with("3,"));
    }

    #[test]
    fn test_multiple_inputs_share_one_writer_in_order() {
        let first = format!("{}\n{}\n", record_line(1, "a"), record_line(2, "b"));
        let second = format!("{}\n", record_line(3, "c"));

        let mut buffer = Vec::new();
        let mut writer = RowWriter::from_writer(&mut buffer);
        let config = FlattenConfig::default();
        let mut total = 0;
        for input in [&first, &second] {
            total += flatten_jsonl(input.as_bytes(), &mut writer, &config).unwrap();
        }
        writer.flush().unwrap();
        drop(writer);

        assert_eq!(total, 3);
        let output = String::from_utf8(buffer).unwrap();
        let ids: Vec<&str> = output
            .lines()
            .map(|l| l.split(',').next().unwrap())
            .collect();
        assert_eq!(ids, ["1", "2", "3"]);
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let input = format!("{}\n\n   \n{}\n", record_line(1, "a"), record_line(2, "b"));

        let mut buffer = Vec::new();
        let mut writer = RowWriter::from_writer(&mut buffer);
        let rows = flatten_jsonl(input.as_bytes(), &mut writer, &FlattenConfig::default()).unwrap();

        assert_eq!(rows, 2);
    }

    #[test]
    fn test_malformed_line_aborts_without_later_rows() {
        let input = format!("{}\nnot json at all\n{}\n", record_line(1, "a"), record_line(2, "b"));

        let mut buffer = Vec::new();
        let mut writer = RowWriter::from_writer(&mut buffer);
        let err = flatten_jsonl(input.as_bytes(), &mut writer, &FlattenConfig::default()).unwrap_err();
        writer.flush().unwrap();
        drop(writer);

        assert!(err.to_string().contains("line 2"));
        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(output.lines().count(), 1);
    }

    #[test]
    fn test_missing_required_field_aborts() {
        let input = r#"{"created_at": "x", "entities": {"hashtags": []}}"#;

        let mut buffer = Vec::new();
        let mut writer = RowWriter::from_writer(&mut buffer);
        let err = flatten_jsonl(input.as_bytes(), &mut writer, &FlattenConfig::default()).unwrap_err();

        assert!(err.to_string().contains("line 1"));
    }
}
