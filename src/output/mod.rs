//! Output writers for datasets and views.
//!
//! This module handles:
//! - JSON dataset exports and compact embeddable arrays
//! - JSON dashboard views
//! - Text summaries for the terminal

pub mod json;
pub mod text;

// Re-export main functions
pub use json::{
    dataset_to_json, read_dataset_export, validate_path, write_dataset_export, write_view,
    DatasetExport,
};
pub use text::render_text_summary;
