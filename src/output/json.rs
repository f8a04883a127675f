//! JSON output for datasets and views.
//!
//! Datasets are written losslessly: every record keeps all four fields,
//! so a page generator can embed the array verbatim.

use crate::aggregator::view::DashboardView;
use crate::parser::schema::Dataset;
use crate::utils::config::SCHEMA_VERSION;
use crate::utils::error::OutputError;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Versioned envelope around an exported dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetExport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Report the records were parsed from
    pub source: String,

    /// Timestamp when the export was generated
    pub generated_at: String,

    /// Number of records, for quick inspection
    pub record_count: usize,

    pub records: Dataset,
}

impl DatasetExport {
    /// Wrap a dataset, stamping version and generation time
    pub fn new(source: impl Into<String>, records: Dataset) -> Self {
        use chrono::Utc;

        Self {
            version: SCHEMA_VERSION.to_string(),
            source: source.into(),
            generated_at: Utc::now().to_rfc3339(),
            record_count: records.len(),
            records,
        }
    }
}

/// Write a dataset export to a JSON file
///
/// **Public** - main entry point for dataset output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_dataset_export(
    export: &DatasetExport,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing dataset export to: {}", output_path.display());
    write_pretty(export, output_path)?;
    info!(
        "Export written successfully ({} records, {} bytes)",
        export.record_count,
        calculate_file_size(output_path)
    );

    Ok(())
}

/// Write a dashboard view to a JSON file
///
/// **Public** - lets an external front end render without parsing
pub fn write_view(view: &DashboardView, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing view to: {}", output_path.display());
    write_pretty(view, output_path)
}

/// Serialize a dataset as a compact JSON array
///
/// **Public** - for embedding in generated pages
pub fn dataset_to_json(dataset: &Dataset) -> Result<String, OutputError> {
    serde_json::to_string(dataset).map_err(OutputError::SerializationFailed)
}

/// Read a dataset export from a JSON file
///
/// **Public** - useful for validation and testing
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_dataset_export(input_path: impl AsRef<Path>) -> Result<DatasetExport, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading dataset export from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;

    let export: DatasetExport =
        serde_json::from_reader(file).map_err(OutputError::SerializationFailed)?;

    debug!(
        "Export loaded: version {}, {} records",
        export.version,
        export.records.len()
    );

    Ok(export)
}

/// Validate that output path is writable
///
/// **Public** - shared by every writer
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    // Check if we're trying to overwrite a directory
    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// **Private** - validate, create parent dirs, pretty-print
fn write_pretty<T: Serialize>(value: &T, output_path: &Path) -> Result<(), OutputError> {
    validate_path(output_path)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, value).map_err(OutputError::SerializationFailed)
}

/// **Private** - for log output only
fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::schema::{Category, Record};
    use tempfile::NamedTempFile;

    fn create_test_dataset() -> Dataset {
        Dataset::from_records(vec![
            Record::new(Category::Columns, "Piano 1", 12, 3.5),
            Record::new(Category::Foundation, "Platea", 20, 120.75),
        ])
    }

    #[test]
    fn test_write_and_read_export() {
        let export = DatasetExport::new("output_ferri.txt", create_test_dataset());
        let temp_file = NamedTempFile::new().unwrap();

        write_dataset_export(&export, temp_file.path()).unwrap();
        let loaded = read_dataset_export(temp_file.path()).unwrap();

        assert_eq!(loaded, export);
    }

    #[test]
    fn test_dataset_to_json_is_compact_array() {
        let json = dataset_to_json(&create_test_dataset()).unwrap();

        assert!(json.starts_with('['));
        assert!(!json.contains('\n'));
        assert!(json.contains("\"floor_label\":\"Platea\""));
    }

    #[test]
    fn test_validate_path_empty() {
        assert!(validate_path(Path::new("")).is_err());
    }

    #[test]
    fn test_validate_path_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        assert!(validate_path(temp_dir.path()).is_err());
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested_path = temp_dir.path().join("nested/dirs/ferri.json");

        let export = DatasetExport::new("test", create_test_dataset());
        write_dataset_export(&export, &nested_path).unwrap();

        assert!(nested_path.exists());
    }
}
