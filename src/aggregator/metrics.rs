//! Summary statistics, grouped sums and rankings over a dataset.
//!
//! All functions are pure: they read the dataset and return new values.
//! Quantities are summed as plain f64; rounding is left to the view layer.

use super::ordering::FloorOrder;
use crate::parser::schema::{Category, Dataset, Record};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;

/// Summary statistics over a non-empty dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    /// Sum of all quantities (kg)
    pub total_kg: f64,

    /// Mean quantity per record (kg)
    pub mean_kg: f64,

    /// Largest single quantity (kg)
    pub max_kg: f64,

    /// Smallest single quantity (kg)
    pub min_kg: f64,

    /// Number of records
    pub count: usize,

    /// Distinct element categories
    pub distinct_categories: usize,

    /// Distinct floor labels
    pub distinct_floors: usize,

    /// Distinct bar diameters
    pub distinct_diameters: usize,
}

impl Stats {
    /// Human-readable one-line summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        format!(
            "Total: {:.2} kg | Records: {} | Mean: {:.2} | Max: {:.2} | Min: {:.2}",
            self.total_kg, self.count, self.mean_kg, self.max_kg, self.min_kg
        )
    }
}

/// Compute summary statistics
///
/// **Public** - returns `None` for an empty dataset ("no data"),
/// so the mean never divides by zero
pub fn summary_statistics(dataset: &Dataset) -> Option<Stats> {
    let first = dataset.records().first()?;

    let mut total = 0.0;
    let mut max = first.quantity_kg;
    let mut min = first.quantity_kg;
    let mut categories = HashSet::new();
    let mut floors = HashSet::new();
    let mut diameters = HashSet::new();

    for record in dataset {
        total += record.quantity_kg;
        max = max.max(record.quantity_kg);
        min = min.min(record.quantity_kg);
        categories.insert(record.element_category);
        floors.insert(record.floor_label.as_str());
        diameters.insert(record.diameter_mm);
    }

    let count = dataset.len();

    Some(Stats {
        total_kg: total,
        mean_kg: total / count as f64,
        max_kg: max,
        min_kg: min,
        count,
        distinct_categories: categories.len(),
        distinct_floors: floors.len(),
        distinct_diameters: diameters.len(),
    })
}

/// Dimension records can be grouped by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Category,
    Floor,
    Diameter,
}

impl Dimension {
    /// Value of this dimension for one record
    pub fn key_of(self, record: &Record) -> GroupKey {
        match self {
            Dimension::Category => GroupKey::Category(record.element_category),
            Dimension::Floor => GroupKey::Floor(record.floor_label.clone()),
            Dimension::Diameter => GroupKey::Diameter(record.diameter_mm),
        }
    }
}

/// A value of one grouping dimension
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GroupKey {
    Category(Category),
    Floor(String),
    Diameter(u32),
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKey::Category(c) => write!(f, "{c}"),
            GroupKey::Floor(floor) => write!(f, "{floor}"),
            GroupKey::Diameter(d) => write!(f, "ø{d}"),
        }
    }
}

/// Sum of quantities for one group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupTotal {
    pub key: GroupKey,
    pub total_kg: f64,
}

/// Sum quantities per value of `dimension`
///
/// **Public** - iteration order of the map is not meaningful;
/// use [`sorted_group_sum`] for presentation order
pub fn group_sum(dataset: &Dataset, dimension: Dimension) -> HashMap<GroupKey, f64> {
    let mut groups: HashMap<GroupKey, f64> = HashMap::new();

    for record in dataset {
        *groups.entry(dimension.key_of(record)).or_insert(0.0) += record.quantity_kg;
    }

    debug!("Grouped {} records into {} {:?} groups", dataset.len(), groups.len(), dimension);

    groups
}

/// Group sums in presentation order
///
/// **Public** - diameters numerically, categories by label, floors by `floor_order`
pub fn sorted_group_sum(
    dataset: &Dataset,
    dimension: Dimension,
    floor_order: &FloorOrder,
) -> Vec<GroupTotal> {
    let mut totals: Vec<GroupTotal> = group_sum(dataset, dimension)
        .into_iter()
        .map(|(key, total_kg)| GroupTotal { key, total_kg })
        .collect();

    totals.sort_by(|a, b| compare_keys(&a.key, &b.key, floor_order));
    totals
}

/// **Private** - every key of one grouping comes from the same dimension
fn compare_keys(a: &GroupKey, b: &GroupKey, floor_order: &FloorOrder) -> std::cmp::Ordering {
    match (a, b) {
        (GroupKey::Category(a), GroupKey::Category(b)) => a.cmp(b),
        (GroupKey::Floor(a), GroupKey::Floor(b)) => floor_order.compare(a, b),
        (GroupKey::Diameter(a), GroupKey::Diameter(b)) => a.cmp(b),
        (a, b) => unreachable!("group keys from different dimensions: {a:?} vs {b:?}"),
    }
}

/// The `n` records with the largest quantity, descending
///
/// **Public** - the sort is stable, so ties keep input order
pub fn top_n(dataset: &Dataset, n: usize) -> Vec<Record> {
    let mut records = dataset.records().to_vec();
    records.sort_by(|a, b| b.quantity_kg.total_cmp(&a.quantity_kg));
    records.truncate(n);
    records
}

/// One row of the per-diameter summary table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiameterSummary {
    pub diameter_mm: u32,
    pub total_kg: f64,
    pub count: usize,
    pub mean_kg: f64,
}

/// Total, count and mean per diameter, sorted by diameter
pub fn diameter_summary(dataset: &Dataset) -> Vec<DiameterSummary> {
    let mut rows: BTreeMap<u32, (f64, usize)> = BTreeMap::new();

    for record in dataset {
        let entry = rows.entry(record.diameter_mm).or_insert((0.0, 0));
        entry.0 += record.quantity_kg;
        entry.1 += 1;
    }

    rows.into_iter()
        .map(|(diameter_mm, (total_kg, count))| DiameterSummary {
            diameter_mm,
            total_kg,
            count,
            mean_kg: total_kg / count as f64,
        })
        .collect()
}

/// Share of the total held by one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub category: Category,
    pub total_kg: f64,
    pub percentage: f64,
}

/// Per-category percentage of the total, sorted by label
///
/// **Public** - empty when there is nothing to divide
pub fn category_shares(dataset: &Dataset) -> Vec<CategoryShare> {
    let totals = sorted_group_sum(dataset, Dimension::Category, &FloorOrder::default());
    let grand_total: f64 = totals.iter().map(|t| t.total_kg).sum();

    if grand_total <= 0.0 {
        return Vec::new();
    }

    totals
        .into_iter()
        .filter_map(|t| match t.key {
            GroupKey::Category(category) => Some(CategoryShare {
                category,
                total_kg: t.total_kg,
                percentage: t.total_kg / grand_total * 100.0,
            }),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        Dataset::from_records(vec![
            Record::new(Category::Columns, "Piano 1", 12, 3.5),
            Record::new(Category::Columns, "Piano 2", 16, 10.0),
        ])
    }

    #[test]
    fn test_summary_statistics() {
        let stats = summary_statistics(&sample()).unwrap();

        assert_eq!(stats.total_kg, 13.5);
        assert_eq!(stats.mean_kg, 6.75);
        assert_eq!(stats.max_kg, 10.0);
        assert_eq!(stats.min_kg, 3.5);
        assert_eq!(stats.count, 2);
        assert_eq!(stats.distinct_categories, 1);
        assert_eq!(stats.distinct_floors, 2);
        assert_eq!(stats.distinct_diameters, 2);
    }

    #[test]
    fn test_summary_statistics_empty() {
        assert!(summary_statistics(&Dataset::empty()).is_none());
    }

    #[test]
    fn test_group_sum_by_diameter() {
        let mut dataset = sample().records().to_vec();
        dataset.push(Record::new(Category::Beams, "Piano 1", 12, 1.5));
        let groups = group_sum(&Dataset::from_records(dataset), Dimension::Diameter);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[&GroupKey::Diameter(12)], 5.0);
        assert_eq!(groups[&GroupKey::Diameter(16)], 10.0);
    }

    #[test]
    fn test_sorted_group_sum_diameter_is_numeric() {
        let dataset = Dataset::from_records(vec![
            Record::new(Category::Walls, "A", 20, 1.0),
            Record::new(Category::Walls, "A", 8, 1.0),
            Record::new(Category::Walls, "A", 100, 1.0),
        ]);
        let keys: Vec<GroupKey> = sorted_group_sum(&dataset, Dimension::Diameter, &FloorOrder::default())
            .into_iter()
            .map(|t| t.key)
            .collect();
        assert_eq!(
            keys,
            vec![GroupKey::Diameter(8), GroupKey::Diameter(20), GroupKey::Diameter(100)]
        );
    }

    #[test]
    fn test_sorted_group_sum_category_by_label() {
        let dataset = Dataset::from_records(vec![
            Record::new(Category::Beams, "A", 8, 1.0),
            Record::new(Category::Columns, "A", 8, 1.0),
            Record::new(Category::Foundation, "A", 8, 1.0),
        ]);
        let keys: Vec<String> = sorted_group_sum(&dataset, Dimension::Category, &FloorOrder::default())
            .into_iter()
            .map(|t| t.key.to_string())
            .collect();
        assert_eq!(keys, vec!["FONDAZIONE", "PILASTRI", "TRAVI"]);
    }

    #[test]
    fn test_top_n_ties_keep_input_order() {
        let dataset = Dataset::from_records(vec![
            Record::new(Category::Columns, "first", 8, 2.0),
            Record::new(Category::Columns, "big", 8, 9.0),
            Record::new(Category::Columns, "second", 8, 2.0),
        ]);
        let top = top_n(&dataset, 3);
        let floors: Vec<&str> = top.iter().map(|r| r.floor_label.as_str()).collect();
        assert_eq!(floors, vec!["big", "first", "second"]);
    }

    #[test]
    fn test_top_n_shorter_than_n() {
        assert_eq!(top_n(&sample(), 5).len(), 2);
        assert!(top_n(&Dataset::empty(), 5).is_empty());
    }

    #[test]
    fn test_diameter_summary() {
        let dataset = Dataset::from_records(vec![
            Record::new(Category::Columns, "A", 16, 4.0),
            Record::new(Category::Beams, "B", 12, 1.0),
            Record::new(Category::Walls, "C", 16, 2.0),
        ]);
        let rows = diameter_summary(&dataset);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].diameter_mm, 12);
        assert_eq!(rows[1].total_kg, 6.0);
        assert_eq!(rows[1].count, 2);
        assert_eq!(rows[1].mean_kg, 3.0);
    }

    #[test]
    fn test_category_shares() {
        let dataset = Dataset::from_records(vec![
            Record::new(Category::Columns, "A", 16, 3.0),
            Record::new(Category::Beams, "B", 12, 1.0),
        ]);
        let shares = category_shares(&dataset);

        assert_eq!(shares.len(), 2);
        assert_eq!(shares[0].category, Category::Columns);
        assert_eq!(shares[0].percentage, 75.0);
        assert_eq!(shares[1].percentage, 25.0);
    }

    #[test]
    fn test_category_shares_zero_total() {
        let dataset = Dataset::from_records(vec![Record::new(Category::Columns, "A", 16, 0.0)]);
        assert!(category_shares(&dataset).is_empty());
    }
}
