//! Configuration and constants for the parser and the CLI.

/// Current export schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Number of separator characters in a section boundary line
pub const SEPARATOR_WIDTH: usize = 60;

/// Character repeated to form a section boundary line
pub const SEPARATOR_CHAR: char = '=';

/// Marker placed in front of the bar diameter on a data line
pub const DIAMETER_MARKER: char = 'ø';

/// Source report read when no path is given
pub const DEFAULT_SOURCE: &str = "output_ferri.txt";

/// Environment variable that overrides the source report path
pub const SOURCE_ENV_VAR: &str = "FERRI_SOURCE";

/// Number of records in the top-N table
pub const DEFAULT_TOP_N: usize = 5;

/// Upper bound accepted for the top-N argument
pub const MAX_TOP_N: usize = 1000;

/// Section labels recognized as structural element categories
pub const CATEGORY_LABELS: &[&str] = &["PILASTRI", "TRAVI", "PARETI", "FONDAZIONE"];
