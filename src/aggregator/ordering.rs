//! Presentation order for floor labels.
//!
//! Floor labels are free text, so a plain sort puts "Piano 10" before
//! "Piano 2". Callers who know the building can supply the real order.

use std::cmp::Ordering;

/// Externally supplied floor ordering
///
/// Listed floors sort by position; anything else comes after them,
/// lexicographically. An empty order is plain lexicographic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FloorOrder {
    floors: Vec<String>,
}

impl FloorOrder {
    pub fn new(floors: Vec<String>) -> Self {
        Self { floors }
    }

    /// Build from a comma-separated list, e.g. `"Fondazione,Piano terra,Piano 1"`
    pub fn from_csv(list: &str) -> Self {
        Self::new(
            list.split(',')
                .map(str::trim)
                .filter(|f| !f.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    fn position(&self, floor: &str) -> Option<usize> {
        self.floors.iter().position(|f| f == floor)
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match (self.position(a), self.position(b)) {
            (Some(pa), Some(pb)) => pa.cmp(&pb),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => a.cmp(b),
        }
    }

    pub fn sort(&self, floors: &mut [String]) {
        floors.sort_by(|a, b| self.compare(a, b));
    }
}
