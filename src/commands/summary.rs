//! Summary command implementation.
//!
//! The summary command:
//! 1. Parses the source report
//! 2. Applies the filter and computes the view
//! 3. Prints the text summary and/or writes the view JSON

use super::models::SummaryArgs;
use crate::aggregator::{build_view, DashboardView, ViewOptions};
use crate::output::{render_text_summary, write_view};
use crate::parser::parse_file;
use crate::utils::config::MAX_TOP_N;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::time::Instant;

/// Execute the summary command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Source report missing or unreadable
/// * View JSON write errors
pub fn execute_summary(args: &SummaryArgs) -> Result<DashboardView> {
    let start_time = Instant::now();

    info!("Step 1/3: Parsing {}...", args.source.display());
    let outcome = parse_file(&args.source).context("Failed to load source report")?;

    if outcome.skipped_lines > 0 || outcome.skipped_sections > 0 {
        warn!(
            "Skipped {} malformed lines and {} unrecognized sections",
            outcome.skipped_lines, outcome.skipped_sections
        );
    }

    if outcome.dataset.is_empty() {
        warn!("No records found in {}", args.source.display());
    }

    info!("Step 2/3: Aggregating {} records...", outcome.dataset.len());
    let options = ViewOptions::new()
        .with_top_n(args.top_n)
        .with_floor_order(args.floor_order.clone());
    let view = build_view(&outcome.dataset, &args.filter, &options);

    match &view.statistics {
        Some(stats) => debug!("Filtered statistics: {}", stats.summary()),
        None => debug!("Filter {:?} matched no records", args.filter),
    }

    info!("Step 3/3: Writing output...");
    if let Some(path) = &args.output_json {
        write_view(&view, path).context("Failed to write view JSON")?;
        info!("✓ View written to: {}", path.display());
    }

    if args.print_summary {
        println!("\n{}", "=".repeat(80));
        println!("STEEL QUANTITY SUMMARY");
        println!("{}", "=".repeat(80));
        println!("Source: {}", args.source.display());
        println!("Filter: {}", describe_filter(&view));
        println!();
        println!("{}", render_text_summary(&view));
        println!("{}", "=".repeat(80));
    }

    info!("Summary completed in {:.2}s", start_time.elapsed().as_secs_f64());

    Ok(view)
}

/// **Private** - "all" for unset fields
fn describe_filter(view: &DashboardView) -> String {
    let filter = &view.filter;
    format!(
        "element={} floor={} diameter={}",
        filter.category.map_or("all".to_string(), |c| c.to_string()),
        filter.floor.as_deref().unwrap_or("all"),
        filter.diameter.map_or("all".to_string(), |d| d.to_string())
    )
}

/// Validate summary arguments
///
/// **Public** - can be called before execute_summary for early validation
pub fn validate_args(args: &SummaryArgs) -> Result<()> {
    if args.source.as_os_str().is_empty() {
        anyhow::bail!("Source path cannot be empty");
    }

    if args.top_n == 0 {
        anyhow::bail!("top must be greater than 0");
    }

    if args.top_n > MAX_TOP_N {
        anyhow::bail!("top is too large (max {})", MAX_TOP_N);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_validate_args_valid() {
        assert!(validate_args(&SummaryArgs::default()).is_ok());
    }

    #[test]
    fn test_validate_args_empty_source() {
        let args = SummaryArgs {
            source: PathBuf::new(),
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_top_zero() {
        let args = SummaryArgs {
            top_n: 0,
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_top_too_large() {
        let args = SummaryArgs {
            top_n: 2000,
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_missing_source_is_error() {
        let args = SummaryArgs {
            source: PathBuf::from("definitely/not/here.txt"),
            print_summary: false,
            ..Default::default()
        };
        assert!(execute_summary(&args).is_err());
    }
}
