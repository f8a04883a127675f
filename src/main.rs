//! Ferri Report CLI
//!
//! Parses a reinforcement steel report and prints filtered summaries
//! or exports the parsed records as JSON.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use ferri_report::aggregator::{FilterSpec, FloorOrder};
use ferri_report::commands::{
    display_version, execute_export, execute_summary, validate_args, validate_export_file,
    ExportArgs, SummaryArgs,
};
use ferri_report::parser::Category;
use ferri_report::utils::config::{DEFAULT_SOURCE, DEFAULT_TOP_N, SOURCE_ENV_VAR};

/// Ferri Report - reinforcement steel quantities by element, floor and diameter
#[derive(Parser, Debug)]
#[command(name = "ferri")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Source report location
#[derive(Args, Debug)]
struct SourceArgs {
    /// Path to the plain-text report
    #[arg(short, long, env = SOURCE_ENV_VAR, default_value = DEFAULT_SOURCE)]
    source: PathBuf,
}

/// Filter flags shared by summary and export
#[derive(Args, Debug)]
struct FilterArgs {
    /// Element category (PILASTRI, TRAVI, PARETI, FONDAZIONE or English name)
    #[arg(short, long)]
    category: Option<Category>,

    /// Exact floor label
    #[arg(short, long)]
    floor: Option<String>,

    /// Bar diameter in millimeters
    #[arg(short, long)]
    diameter: Option<u32>,
}

impl FilterArgs {
    fn into_spec(self) -> FilterSpec {
        FilterSpec {
            category: self.category,
            floor: self.floor,
            diameter: self.diameter,
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print statistics, group totals and rankings
    Summary {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        filter: FilterArgs,

        /// Number of records in the top table
        #[arg(long, default_value_t = DEFAULT_TOP_N)]
        top: usize,

        /// Floor presentation order, comma separated
        #[arg(long)]
        floor_order: Option<String>,

        /// Also write the full view as JSON
        #[arg(long)]
        json: Option<PathBuf>,

        /// Do not print the text summary
        #[arg(long)]
        quiet: bool,
    },

    /// Export parsed records as JSON
    Export {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        filter: FilterArgs,

        /// Output path for the JSON export
        #[arg(short, long, default_value = "ferri.json")]
        output: PathBuf,
    },

    /// Validate a JSON export file
    Validate {
        /// Path to export JSON file
        #[arg(long)]
        file: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Summary {
            source,
            filter,
            top,
            floor_order,
            json,
            quiet,
        } => {
            let args = SummaryArgs {
                source: source.source,
                filter: filter.into_spec(),
                top_n: top,
                floor_order: floor_order
                    .as_deref()
                    .map(FloorOrder::from_csv)
                    .unwrap_or_default(),
                output_json: json,
                print_summary: !quiet,
            };

            // Validate args first
            validate_args(&args)?;

            execute_summary(&args)?;
        }

        Commands::Export {
            source,
            filter,
            output,
        } => {
            let args = ExportArgs {
                source: source.source,
                output,
                filter: filter.into_spec(),
            };

            execute_export(&args)?;
        }

        Commands::Validate { file } => {
            validate_export_file(&file)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
