//! Ferri Report
//!
//! Parses plain-text reinforcement steel reports ("ferri") into typed
//! records grouped by element category, floor and bar diameter, then
//! filters and aggregates them for display.
//!
//! Data flows one way:
//!
//! ```text
//! report text ──parser──▶ Dataset ──filter──▶ aggregator ──▶ views / output
//! ```
//!
//! ## Getting Started
//!
//! ```bash
//! ferri summary --source output_ferri.txt --category PILASTRI
//! ferri export --source output_ferri.txt --output ferri.json
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
