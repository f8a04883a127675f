//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod export;
pub mod models;
pub mod summary;
pub mod utils;

// Re-export main command functions
pub use export::execute_export;
pub use models::{ExportArgs, SummaryArgs};
pub use summary::{execute_summary, validate_args};
pub use utils::{display_version, validate_export_file};
