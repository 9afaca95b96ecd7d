//! Record flattening - project tweet records onto flat CSV rows
//!
//! This module turns one captured tweet record (a parsed JSON object) into
//! the fixed 15-field output row, and appends rows to a single CSV table.
//! Extraction is strict: required keys abort the run when absent, while the
//! handful of guarded optional fields substitute defined defaults.

pub mod error;
pub mod record;
pub mod text;
pub mod types;
pub mod writer;

pub use error::FlattenError;
pub use record::{extract_row, hashtag_texts};
pub use text::{raw_text, resolve_text};
pub use types::{FlattenConfig, Row, TextStrategy};
pub use writer::RowWriter;
