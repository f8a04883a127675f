//! Conjunctive equality filters over a dataset.

use crate::parser::schema::{Category, Dataset, Record};
use log::debug;
use serde::{Deserialize, Serialize};

/// Optional equality constraint per dimension
///
/// `None` on a field means "no constraint". Set fields are combined
/// with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    pub category: Option<Category>,
    pub floor: Option<String>,
    pub diameter: Option<u32>,
}

impl FilterSpec {
    /// A spec that matches every record
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_floor(mut self, floor: impl Into<String>) -> Self {
        self.floor = Some(floor.into());
        self
    }

    pub fn with_diameter(mut self, diameter: u32) -> Self {
        self.diameter = Some(diameter);
        self
    }

    /// True when no field is set
    pub fn is_unconstrained(&self) -> bool {
        self.category.is_none() && self.floor.is_none() && self.diameter.is_none()
    }

    /// Check a single record against every set field
    pub fn matches(&self, record: &Record) -> bool {
        self.category.map_or(true, |c| record.element_category == c)
            && self
                .floor
                .as_deref()
                .map_or(true, |f| record.floor_label == f)
            && self.diameter.map_or(true, |d| record.diameter_mm == d)
    }

    /// Conjunction of two specs
    ///
    /// Returns `None` when both set the same field to different values,
    /// since nothing can satisfy both.
    pub fn intersect(&self, other: &FilterSpec) -> Option<FilterSpec> {
        Some(FilterSpec {
            category: merge_field(self.category, other.category)?,
            floor: merge_field(self.floor.clone(), other.floor.clone())?,
            diameter: merge_field(self.diameter, other.diameter)?,
        })
    }
}

/// Combine one field of two specs; outer `None` means contradiction
///
/// **Private** - helper for `intersect`
fn merge_field<T: PartialEq>(a: Option<T>, b: Option<T>) -> Option<Option<T>> {
    match (a, b) {
        (Some(a), Some(b)) if a != b => None,
        (Some(a), _) => Some(Some(a)),
        (None, b) => Some(b),
    }
}

/// Keep the records satisfying `filter`, in their original order
///
/// **Public** - main entry point for filtering
pub fn apply_filter(dataset: &Dataset, filter: &FilterSpec) -> Dataset {
    if filter.is_unconstrained() {
        return dataset.clone();
    }

    let filtered: Dataset = dataset
        .iter()
        .filter(|record| filter.matches(record))
        .cloned()
        .collect();

    debug!(
        "Filter {:?} kept {} of {} records",
        filter,
        filtered.len(),
        dataset.len()
    );

    filtered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        Dataset::from_records(vec![
            Record::new(Category::Columns, "Piano 1", 12, 3.5),
            Record::new(Category::Columns, "Piano 2", 16, 10.0),
            Record::new(Category::Beams, "Piano 1", 12, 7.25),
        ])
    }

    #[test]
    fn test_unconstrained_filter_keeps_everything() {
        let dataset = sample();
        assert_eq!(apply_filter(&dataset, &FilterSpec::new()), dataset);
    }

    #[test]
    fn test_filter_by_each_dimension() {
        let dataset = sample();

        let by_category = apply_filter(&dataset, &FilterSpec::new().with_category(Category::Beams));
        assert_eq!(by_category.len(), 1);

        let by_floor = apply_filter(&dataset, &FilterSpec::new().with_floor("Piano 1"));
        assert_eq!(by_floor.len(), 2);

        let by_diameter = apply_filter(&dataset, &FilterSpec::new().with_diameter(16));
        assert_eq!(by_diameter.records()[0].floor_label, "Piano 2");
    }

    #[test]
    fn test_filter_floor_is_exact_match() {
        let dataset = sample();
        let filtered = apply_filter(&dataset, &FilterSpec::new().with_floor("Piano"));
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_filter_on_empty_dataset() {
        let filtered = apply_filter(&Dataset::empty(), &FilterSpec::new().with_diameter(12));
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_intersect_contradiction() {
        let a = FilterSpec::new().with_diameter(12);
        let b = FilterSpec::new().with_diameter(16);
        assert!(a.intersect(&b).is_none());
    }

    #[test]
    fn test_intersect_merges_fields() {
        let a = FilterSpec::new().with_category(Category::Columns);
        let b = FilterSpec::new().with_floor("Piano 1").with_category(Category::Columns);
        let merged = a.intersect(&b).unwrap();
        assert_eq!(merged.category, Some(Category::Columns));
        assert_eq!(merged.floor.as_deref(), Some("Piano 1"));
        assert_eq!(merged.diameter, None);
    }
}
