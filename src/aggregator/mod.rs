//! Aggregation of parsed records into filtered views and metrics.
//!
//! This module transforms a dataset into:
//! - Filtered subsets (conjunctive equality filters)
//! - Summary statistics and grouped sums
//! - Top-N rankings and per-diameter summaries
//! - Complete per-filter views for front ends

pub mod filter;
pub mod metrics;
pub mod ordering;
pub mod view;

// Re-export main types and functions
pub use filter::{apply_filter, FilterSpec};
pub use metrics::{
    category_shares, diameter_summary, group_sum, sorted_group_sum, summary_statistics, top_n,
    CategoryShare, DiameterSummary, Dimension, GroupKey, GroupTotal, Stats,
};
pub use ordering::FloorOrder;
pub use view::{build_view, filter_options, DashboardView, FilterOptions, ViewOptions};
