use crate::aggregator::{FilterSpec, FloorOrder};
use crate::utils::config::{DEFAULT_SOURCE, DEFAULT_TOP_N};
use std::path::PathBuf;

/// Arguments for the summary command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct SummaryArgs {
    /// Source report to parse
    pub source: PathBuf,

    /// Filter applied before aggregation
    pub filter: FilterSpec,

    /// Number of records in the top-N table
    pub top_n: usize,

    /// Presentation order for floors
    pub floor_order: FloorOrder,

    /// Output path for the view JSON (optional)
    pub output_json: Option<PathBuf>,

    /// Print the text summary to stdout
    pub print_summary: bool,
}

impl Default for SummaryArgs {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            filter: FilterSpec::default(),
            top_n: DEFAULT_TOP_N,
            floor_order: FloorOrder::default(),
            output_json: None,
            print_summary: true,
        }
    }
}

/// Arguments for the export command
#[derive(Debug, Clone)]
pub struct ExportArgs {
    /// Source report to parse
    pub source: PathBuf,

    /// Output path for the dataset export
    pub output: PathBuf,

    /// Filter applied before export
    pub filter: FilterSpec,
}

impl Default for ExportArgs {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            output: PathBuf::from("ferri.json"),
            filter: FilterSpec::default(),
        }
    }
}
