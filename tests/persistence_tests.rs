//! Persistence integration tests
//!
//! Exercise the spreadsheet and CSV adapters end-to-end through the service
//! layer, against real files in a temporary directory.

use std::fs;

use techwatch::error::AppError;
use techwatch::models::{ItemType, RecordDraft};
use techwatch::repository::Repository;
use techwatch::services::Services;

fn new_services() -> Services {
    Services::new(Repository::new())
}

fn draft(asset: &str, name: &str) -> RecordDraft {
    RecordDraft {
        asset_number: asset.to_string(),
        name: name.to_string(),
        sector: "IT".to_string(),
        ram: "16".to_string(),
        os: "Debian 12".to_string(),
        purchase_date: "01/02/2021".to_string(),
        notes: "bought refurbished, with dock".to_string(),
        ..Default::default()
    }
}

#[test]
fn test_xlsx_round_trip_reproduces_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.xlsx");

    let mut services = new_services();
    services.inventory.add(draft("PAT-1", "Latitude 5420"), ItemType::Notebook).unwrap();
    services.inventory.add(draft("PAT-2", "OptiPlex 7090"), ItemType::Desktop).unwrap();
    let original: Vec<_> = services.inventory.records().cloned().collect();

    let written = services
        .persistence
        .save(services.inventory.records(), &path)
        .unwrap();
    assert_eq!(written, 2);

    let mut reloaded = new_services();
    let records = reloaded.persistence.load(&path).unwrap();
    let count = reloaded.inventory.replace_all(records).unwrap();
    assert_eq!(count, 2);

    let roundtripped: Vec<_> = reloaded.inventory.records().cloned().collect();
    assert_eq!(roundtripped, original);
}

#[test]
fn test_empty_table_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.xlsx");

    let services = new_services();
    assert_eq!(services.persistence.save(services.inventory.records(), &path).unwrap(), 0);
    assert!(services.persistence.load(&path).unwrap().is_empty());
}

#[test]
fn test_load_missing_file_is_file_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let services = new_services();
    let err = services
        .persistence
        .load(&dir.path().join("nothing.xlsx"))
        .unwrap_err();
    assert!(matches!(err, AppError::FileNotFound(_)));
}

#[test]
fn test_load_unparseable_file_is_format_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.xlsx");
    fs::write(&path, "this is not a spreadsheet").unwrap();

    let services = new_services();
    let err = services.persistence.load(&path).unwrap_err();
    assert!(matches!(err, AppError::Format(_)));
}

#[test]
fn test_load_wrong_header_is_format_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("foreign.xlsx");

    // A valid spreadsheet whose columns are not the inventory schema
    let mut workbook = rust_xlsxwriter::Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.write_string(0, 0, "Id").unwrap();
    worksheet.write_string(0, 1, "Amount").unwrap();
    worksheet.write_string(1, 0, "1").unwrap();
    worksheet.write_string(1, 1, "10.50").unwrap();
    workbook.save(&path).unwrap();

    let services = new_services();
    let err = services.persistence.load(&path).unwrap_err();
    assert!(matches!(err, AppError::Format(_)));
}

#[test]
fn test_failed_load_leaves_store_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.xlsx");
    fs::write(&path, "garbage").unwrap();

    let mut services = new_services();
    services.inventory.add(draft("PAT-9", "Kept"), ItemType::Other).unwrap();

    assert!(services.persistence.load(&path).is_err());
    assert_eq!(services.inventory.len(), 1);
    assert_eq!(services.inventory.get("PAT-9").unwrap().name, "Kept");
}

#[test]
fn test_csv_export_carries_schema_header_and_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.csv");

    let mut services = new_services();
    services.inventory.add(draft("PAT-1", "Latitude 5420"), ItemType::Notebook).unwrap();

    let written = services
        .persistence
        .export_csv(services.inventory.records(), &path)
        .unwrap();
    assert_eq!(written, 1);

    let contents = fs::read_to_string(&path).unwrap();
    let mut lines = contents.lines();
    assert_eq!(
        lines.next().unwrap(),
        "Asset Number,Type,Name,Model,Sector,User,RAM,OS,Processor,Purchase Date,Last Maintenance,Notes,Status"
    );
    let row = lines.next().unwrap();
    assert!(row.starts_with("PAT-1,Notebook,Latitude 5420"));
    assert!(row.contains("\"bought refurbished, with dock\""));
    assert!(row.ends_with("Active"));
}

#[test]
fn test_csv_export_of_empty_table_still_writes_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.csv");

    let services = new_services();
    assert_eq!(
        services.persistence.export_csv(services.inventory.records(), &path).unwrap(),
        0
    );
    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("Asset Number,"));
    assert_eq!(contents.lines().count(), 1);
}

#[test]
fn test_load_rejects_duplicate_asset_numbers() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dupes.xlsx");

    let mut services = new_services();
    services.inventory.add(draft("PAT-1", "One"), ItemType::Desktop).unwrap();
    services.inventory.add(draft("PAT-2", "Two"), ItemType::Desktop).unwrap();
    services
        .persistence
        .save(services.inventory.records(), &path)
        .unwrap();

    // Forge a file where both rows share a key
    let mut records = services.persistence.load(&path).unwrap();
    records[1].asset_number = "PAT-1".to_string();
    let err = services.inventory.replace_all(records).unwrap_err();
    assert!(matches!(err, AppError::Format(_)));
    // The store kept its previous contents
    assert_eq!(services.inventory.len(), 2);
    assert_eq!(services.inventory.get("PAT-2").unwrap().name, "Two");
}
