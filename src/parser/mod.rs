//! Report parsing and record definitions.
//!
//! This module handles:
//! - Splitting a report into category sections
//! - Extracting one record per data line
//! - Defining the record and dataset types

pub mod report;
pub mod schema;

// Re-export main types
pub use report::{parse, parse_data_line, parse_file, parse_with_diagnostics, ParseOutcome};
pub use schema::{Category, Dataset, Record};
