//! Export command implementation.
//!
//! Parses the source report and writes the (optionally filtered) dataset
//! as a versioned JSON export.

use super::models::ExportArgs;
use crate::aggregator::apply_filter;
use crate::output::{write_dataset_export, DatasetExport};
use crate::parser::parse_file;
use anyhow::{Context, Result};
use log::info;

/// Execute the export command
///
/// **Public** - returns the export that was written
pub fn execute_export(args: &ExportArgs) -> Result<DatasetExport> {
    if args.output.as_os_str().is_empty() {
        anyhow::bail!("Output path cannot be empty");
    }

    let outcome = parse_file(&args.source).context("Failed to load source report")?;
    let dataset = apply_filter(&outcome.dataset, &args.filter);

    let export = DatasetExport::new(args.source.display().to_string(), dataset);
    write_dataset_export(&export, &args.output).context("Failed to write dataset export")?;

    info!(
        "✓ Exported {} records to: {}",
        export.record_count,
        args.output.display()
    );

    Ok(export)
}
