//! Record and dataset definitions.
//!
//! A dataset is built once per parse and never mutated afterwards.
//! Its JSON form is a plain array of records carrying all four fields,
//! so it can be embedded verbatim by a page generator.

use crate::utils::config::CATEGORY_LABELS;
use crate::utils::error::ParseError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Structural element kind a report section belongs to
///
/// Variants are declared in `CATEGORY_LABELS` order; ordering follows the
/// label, which is how categories are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "PILASTRI")]
    Columns,
    #[serde(rename = "TRAVI")]
    Beams,
    #[serde(rename = "PARETI")]
    Walls,
    #[serde(rename = "FONDAZIONE")]
    Foundation,
}

impl Category {
    /// All recognized categories, in report order
    pub const ALL: [Category; 4] = [
        Category::Columns,
        Category::Beams,
        Category::Walls,
        Category::Foundation,
    ];

    /// Section header label used in the source report
    pub fn label(self) -> &'static str {
        CATEGORY_LABELS[self as usize]
    }

    /// Match a section header exactly against the recognized labels
    ///
    /// Headers are case-sensitive: `pilastri` is not a section header.
    pub fn from_label(header: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == header)
    }
}

impl Ord for Category {
    fn cmp(&self, other: &Self) -> Ordering {
        self.label().cmp(other.label())
    }
}

impl PartialOrd for Category {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lenient form used for user input (CLI filters): label or English name,
/// any case.
impl std::str::FromStr for Category {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pilastri" | "columns" | "column" => Ok(Self::Columns),
            "travi" | "beams" | "beam" => Ok(Self::Beams),
            "pareti" | "walls" | "wall" => Ok(Self::Walls),
            "fondazione" | "foundation" => Ok(Self::Foundation),
            _ => Err(ParseError::UnknownCategory(s.to_string())),
        }
    }
}

/// One (category, floor, diameter, quantity) observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Section the line was found in
    pub element_category: Category,

    /// Building level, verbatim from the line (trimmed)
    pub floor_label: String,

    /// Nominal bar diameter in millimeters
    pub diameter_mm: u32,

    /// Steel weight in kilograms
    pub quantity_kg: f64,
}

impl Record {
    pub fn new(
        element_category: Category,
        floor_label: impl Into<String>,
        diameter_mm: u32,
        quantity_kg: f64,
    ) -> Self {
        Self {
            element_category,
            floor_label: floor_label.into(),
            diameter_mm,
            quantity_kg,
        }
    }
}

/// Ordered, immutable collection of parsed records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<Record> for Dataset {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::from_records(iter.into_iter().collect())
    }
}
