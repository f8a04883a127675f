//! Main parser for plain-text steel quantity reports.
//!
//! A report is a sequence of sections. Each section starts with a
//! boundary made of a 60-character `=` line, the category label in
//! uppercase and another 60-character `=` line:
//!
//! ```text
//! ============================================================
//! PILASTRI
//! ============================================================
//! Piano 1        ø 12     3.50
//! Piano 2        ø16     10.00
//! ```
//!
//! The body runs until the next boundary or the end of the text.

use super::schema::{Category, Dataset, Record};
use crate::utils::config::{DIAMETER_MARKER, SEPARATOR_CHAR, SEPARATOR_WIDTH};
use crate::utils::error::ParseError;
use log::{debug, info};
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

/// Result of a parse together with what was dropped along the way
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseOutcome {
    /// Records in input order
    pub dataset: Dataset,

    /// Candidate data lines that did not match the line pattern
    pub skipped_lines: usize,

    /// Sections whose header is not a recognized category
    pub skipped_sections: usize,
}

/// Section boundary: separator line, uppercase label, separator line
fn section_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        let sep = regex::escape(&SEPARATOR_CHAR.to_string());
        let pattern = format!(
            r"{sep}{{{width}}}\r?\n([A-Z]+)\r?\n{sep}{{{width}}}",
            width = SEPARATOR_WIDTH
        );
        Regex::new(&pattern).expect("regex is valid")
    })
}

/// Data line: `<floor label> ø<diameter> <quantity>`
fn line_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        let marker = regex::escape(&DIAMETER_MARKER.to_string());
        let pattern = format!(r"^(.+?)\s+{marker}\s*([0-9]+)\s+([0-9.]+)");
        Regex::new(&pattern).expect("regex is valid")
    })
}

/// Parse report text into a dataset
///
/// **Public** - main entry point for parsing
///
/// Malformed lines and unrecognized sections are dropped silently.
/// Use [`parse_with_diagnostics`] to learn how much was dropped.
pub fn parse(text: &str) -> Dataset {
    parse_with_diagnostics(text).dataset
}

/// Parse report text, counting skipped lines and sections
///
/// **Public** - same records as [`parse`], plus drop counts
pub fn parse_with_diagnostics(text: &str) -> ParseOutcome {
    let mut records = Vec::new();
    let mut skipped_lines = 0;
    let mut skipped_sections = 0;

    let boundaries: Vec<_> = section_pattern().captures_iter(text).collect();

    for (index, caps) in boundaries.iter().enumerate() {
        let (Some(whole), Some(header)) = (caps.get(0), caps.get(1)) else {
            continue;
        };

        let body_end = boundaries
            .get(index + 1)
            .and_then(|next| next.get(0))
            .map_or(text.len(), |m| m.start());
        let body = &text[whole.end()..body_end];

        let Some(category) = Category::from_label(header.as_str()) else {
            debug!("Skipping unrecognized section '{}'", header.as_str());
            skipped_sections += 1;
            continue;
        };

        let (mut section_records, skipped) = parse_section_body(category, body);
        debug!(
            "Section {}: {} records, {} malformed lines",
            category,
            section_records.len(),
            skipped
        );
        skipped_lines += skipped;
        records.append(&mut section_records);
    }

    info!(
        "Parsed {} records ({} malformed lines, {} unrecognized sections skipped)",
        records.len(),
        skipped_lines,
        skipped_sections
    );

    ParseOutcome {
        dataset: Dataset::from_records(records),
        skipped_lines,
        skipped_sections,
    }
}

/// Read a report from disk and parse it
///
/// **Public** - the only I/O in the parser
///
/// # Errors
/// * `ParseError::SourceUnreadable` - file missing, unreadable or not UTF-8
pub fn parse_file(path: impl AsRef<Path>) -> Result<ParseOutcome, ParseError> {
    let path = path.as_ref();

    debug!("Reading source report: {}", path.display());

    let text = std::fs::read_to_string(path).map_err(|source| ParseError::SourceUnreadable {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parse_with_diagnostics(&text))
}

/// Extract records from one section body
///
/// **Private** - returns the records and the number of malformed lines
fn parse_section_body(category: Category, body: &str) -> (Vec<Record>, usize) {
    let mut records = Vec::new();
    let mut skipped = 0;

    for line in body.lines().map(str::trim) {
        if is_decorative(line) {
            continue;
        }

        match parse_data_line(category, line) {
            Some(record) => records.push(record),
            None => {
                debug!("Skipping malformed line in {}: '{}'", category, line);
                skipped += 1;
            }
        }
    }

    (records, skipped)
}

/// Blank lines, dash sub-separators and stray `=` artifacts
///
/// **Private** - not data, not counted as malformed
fn is_decorative(line: &str) -> bool {
    line.is_empty() || line.starts_with('-') || line.contains(SEPARATOR_CHAR)
}

/// Extract a record from a single trimmed line
///
/// **Public** - returns `None` unless floor, diameter and quantity all parse
pub fn parse_data_line(category: Category, line: &str) -> Option<Record> {
    let caps = line_pattern().captures(line)?;

    let floor_label = caps.get(1)?.as_str().trim();
    let diameter_mm: u32 = caps.get(2)?.as_str().parse().ok()?;
    let quantity_kg: f64 = caps.get(3)?.as_str().parse().ok()?;

    if floor_label.is_empty() || diameter_mm == 0 {
        return None;
    }

    Some(Record::new(category, floor_label, diameter_mm, quantity_kg))
}
