//! Everything a front end needs to redraw for one filter state.
//!
//! A view is computed from the parsed dataset on every filter change;
//! the source report is never re-read.

use super::filter::{apply_filter, FilterSpec};
use super::metrics::{
    category_shares, diameter_summary, sorted_group_sum, summary_statistics, top_n,
    CategoryShare, DiameterSummary, Dimension, GroupTotal, Stats,
};
use super::ordering::FloorOrder;
use crate::parser::schema::{Category, Dataset, Record};
use crate::utils::config::DEFAULT_TOP_N;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// View computation settings
#[derive(Debug, Clone)]
pub struct ViewOptions {
    /// Rows in the top-N table
    pub top_n: usize,

    /// Presentation order for floors
    pub floor_order: FloorOrder,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            floor_order: FloorOrder::default(),
        }
    }
}

impl ViewOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn with_floor_order(mut self, floor_order: FloorOrder) -> Self {
        self.floor_order = floor_order;
        self
    }
}

/// Distinct values offered by the filter widgets
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub categories: Vec<Category>,
    pub floors: Vec<String>,
    pub diameters: Vec<u32>,
}

/// Sorted distinct values of every dimension
pub fn filter_options(dataset: &Dataset, floor_order: &FloorOrder) -> FilterOptions {
    let categories: Vec<Category> = dataset
        .iter()
        .map(|r| r.element_category)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let mut floors: Vec<String> = dataset
        .iter()
        .map(|r| r.floor_label.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    floor_order.sort(&mut floors);

    let diameters: Vec<u32> = dataset
        .iter()
        .map(|r| r.diameter_mm)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    FilterOptions {
        categories,
        floors,
        diameters,
    }
}

/// Values for all front-end views under one filter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    /// Filter that produced this view
    pub filter: FilterSpec,

    /// Choices for the filter widgets (from the unfiltered dataset)
    pub options: FilterOptions,

    /// `None` when the filter leaves no records
    pub statistics: Option<Stats>,

    /// Filtered records, input order
    pub records: Vec<Record>,

    pub by_category: Vec<GroupTotal>,
    pub by_floor: Vec<GroupTotal>,
    pub by_diameter: Vec<GroupTotal>,

    /// Proportion chart over category
    pub category_shares: Vec<CategoryShare>,

    pub top_records: Vec<Record>,
    pub diameter_summary: Vec<DiameterSummary>,
}

impl DashboardView {
    /// True when the filter matched nothing
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Compute a full view for `filter`
///
/// **Public** - main entry point for front ends
pub fn build_view(dataset: &Dataset, filter: &FilterSpec, options: &ViewOptions) -> DashboardView {
    let filtered = apply_filter(dataset, filter);

    DashboardView {
        filter: filter.clone(),
        options: filter_options(dataset, &options.floor_order),
        statistics: summary_statistics(&filtered),
        by_category: sorted_group_sum(&filtered, Dimension::Category, &options.floor_order),
        by_floor: sorted_group_sum(&filtered, Dimension::Floor, &options.floor_order),
        by_diameter: sorted_group_sum(&filtered, Dimension::Diameter, &options.floor_order),
        category_shares: category_shares(&filtered),
        top_records: top_n(&filtered, options.top_n),
        diameter_summary: diameter_summary(&filtered),
        records: filtered.records().to_vec(),
    }
}
