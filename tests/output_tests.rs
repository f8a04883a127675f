use ferri_report::aggregator::{build_view, DashboardView, FilterSpec, ViewOptions};
use ferri_report::output::{
    dataset_to_json, read_dataset_export, validate_path, write_dataset_export, write_view,
    DatasetExport,
};
use ferri_report::parser::{Category, Dataset, Record};
use std::path::Path;
use tempfile::NamedTempFile;

fn create_test_dataset() -> Dataset {
    Dataset::from_records(vec![
        Record::new(Category::Columns, "Piano 1", 12, 3.5),
        Record::new(Category::Walls, "Piano terra (zona A)", 10, 0.1),
        Record::new(Category::Foundation, "Platea", 20, 120.75),
    ])
}

#[test]
fn test_write_and_read_export() {
    let export = DatasetExport::new("output_ferri.txt", create_test_dataset());
    let temp_file = NamedTempFile::new().unwrap();

    write_dataset_export(&export, temp_file.path()).unwrap();
    let loaded = read_dataset_export(temp_file.path()).unwrap();

    assert_eq!(loaded.version, export.version);
    assert_eq!(loaded.record_count, 3);
    assert_eq!(loaded.records, export.records);
}

#[test]
fn test_embedded_json_is_lossless() {
    let dataset = create_test_dataset();

    let json = dataset_to_json(&dataset).unwrap();
    let back: Dataset = serde_json::from_str(&json).unwrap();

    assert_eq!(back, dataset);
}

#[test]
fn test_embedded_json_field_names() {
    let json = dataset_to_json(&create_test_dataset()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let first = &value[0];

    assert_eq!(first["element_category"], "PILASTRI");
    assert_eq!(first["floor_label"], "Piano 1");
    assert_eq!(first["diameter_mm"], 12);
    assert_eq!(first["quantity_kg"], 3.5);
}

#[test]
fn test_write_view() {
    let view = build_view(&create_test_dataset(), &FilterSpec::new(), &ViewOptions::default());
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("views/all.json");

    write_view(&view, &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let loaded: DashboardView = serde_json::from_str(&text).unwrap();
    assert_eq!(loaded.records.len(), 3);
    assert_eq!(loaded.statistics.unwrap().count, 3);
}

#[test]
fn test_validate_output_path_empty() {
    assert!(validate_path(Path::new("")).is_err());
}

#[test]
fn test_validate_output_path_directory() {
    let temp_dir = tempfile::tempdir().unwrap();
    assert!(validate_path(temp_dir.path()).is_err());
}

#[test]
fn test_read_missing_export() {
    let temp_dir = tempfile::tempdir().unwrap();
    assert!(read_dataset_export(temp_dir.path().join("missing.json")).is_err());
}
