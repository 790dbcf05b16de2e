use std::io::Write;

use tempfile::NamedTempFile;

use crate::core::error::CapacityError;
use crate::io::loaders::SpreadsheetLoader;

fn csv_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_volumes_from_csv() {
    let file = csv_file("Date,Hour,Entrantes\n2024-01-01,9,120\n2024-01-02,9,80\n");
    let records = SpreadsheetLoader::load_volumes(file.path()).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].hour, 9);
    assert_eq!(records[0].count, 120);
    assert_eq!(records[1].count, 80);
}

#[test]
fn test_load_talk_times_from_csv() {
    let file = csv_file("Hour,Average Talk Time\n9,5:30\n10,4:15\n");
    let records = SpreadsheetLoader::load_talk_times(file.path()).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].raw.as_deref(), Some("5:30"));
    assert_eq!(records[1].hour, 10);
}

#[test]
fn test_unknown_extension_rejected() {
    let err = SpreadsheetLoader::load_volumes("volumes.parquet".as_ref()).unwrap_err();
    assert!(matches!(err, CapacityError::UnsupportedFormat(_)));

    let err = SpreadsheetLoader::load_talk_times("talk_times".as_ref()).unwrap_err();
    assert!(matches!(err, CapacityError::UnsupportedFormat(_)));
}

#[test]
fn test_extension_match_is_case_insensitive() {
    let mut file = tempfile::Builder::new()
        .suffix(".CSV")
        .tempfile()
        .unwrap();
    file.write_all(b"Date,Hour,Entrantes\n2024-01-01,9,120\n")
        .unwrap();
    file.flush().unwrap();

    let records = SpreadsheetLoader::load_volumes(file.path()).unwrap();
    assert_eq!(records.len(), 1);
}

#[test]
fn test_missing_column_surfaces_from_loader() {
    let file = csv_file("Date,Hour\n2024-01-01,9\n");
    let err = SpreadsheetLoader::load_volumes(file.path()).unwrap_err();
    assert!(matches!(err, CapacityError::MissingColumn { .. }));
}
