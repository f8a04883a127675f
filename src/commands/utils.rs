use crate::aggregator::summary_statistics;
use crate::output::read_dataset_export;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::Result;
use std::path::Path;

/// Validate a dataset export file
pub fn validate_export_file(file_path: &Path) -> Result<()> {
    println!("Validating export: {}", file_path.display());

    let export = read_dataset_export(file_path)?;

    if export.record_count != export.records.len() {
        anyhow::bail!(
            "record_count is {} but the file holds {} records",
            export.record_count,
            export.records.len()
        );
    }

    println!("✓ Valid export JSON");
    println!("  Version: {}", export.version);
    println!("  Source: {}", export.source);
    println!("  Generated: {}", export.generated_at);
    println!("  Records: {}", export.records.len());
    if let Some(stats) = summary_statistics(&export.records) {
        println!("  Total Weight: {:.2} kg", stats.total_kg);
    }

    Ok(())
}

/// Display version information
pub fn display_version() {
    println!("Ferri Report v{}", env!("CARGO_PKG_VERSION"));
    println!("Export Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Reinforcement steel quantity report parser and summarizer.");
}
