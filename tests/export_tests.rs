mod common;

use common::{fixed_ledger, temp_dir};
use rattendance::core::ExportOutcome;
use rattendance::errors::AppError;
use rattendance::export::{ExportFormat, FileSpreadsheetWriter, sanitize_file_stem};
use serde_json::Value;
use std::fs;
use std::str::FromStr;

fn ledger_with_two_records() -> rattendance::core::Ledger {
    let (mut ledger, _) = fixed_ledger();
    ledger.create_folder("Sunday Service").unwrap();
    ledger.add_record_manual(0, "Alice", "A", "Hall").unwrap();
    ledger.add_record_from_scan(0, "XYZ999").unwrap();
    ledger
}

#[test]
fn test_export_csv_file() {
    let dir = temp_dir("export_csv");
    let ledger = ledger_with_two_records();
    let mut writer = FileSpreadsheetWriter::new(&dir, ExportFormat::Csv, false);

    let outcome = ledger.export_folder(0, &mut writer).unwrap();
    let path = dir.join("Sunday Service_attendance.csv");
    assert_eq!(outcome, ExportOutcome::Written(path.clone()));

    let content = fs::read_to_string(&path).expect("read exported csv");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "name,date,time,cluster,location");
    assert_eq!(lines[1], "Alice,1/1/2024,9:00:00 AM,A,Hall");
    assert_eq!(lines[2], "XYZ999,1/1/2024,9:00:00 AM,Default Cluster,Default Location");
    assert_eq!(lines.len(), 3);
}

#[test]
fn test_export_json_file() {
    let dir = temp_dir("export_json");
    let ledger = ledger_with_two_records();
    let mut writer = FileSpreadsheetWriter::new(&dir, ExportFormat::Json, false);

    ledger.export_folder(0, &mut writer).unwrap();

    let content = fs::read_to_string(dir.join("Sunday Service_attendance.json")).unwrap();
    let v: Value = serde_json::from_str(&content).unwrap();
    let rows = v.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["name"], "Alice");
    assert_eq!(rows[0]["location"], "Hall");
    assert_eq!(rows[1]["name"], "XYZ999");
}

#[test]
fn test_export_xlsx_file() {
    let dir = temp_dir("export_xlsx");
    let ledger = ledger_with_two_records();
    let mut writer = FileSpreadsheetWriter::new(&dir, ExportFormat::Xlsx, false);

    ledger.export_folder(0, &mut writer).unwrap();

    let bytes = fs::read(dir.join("Sunday Service_attendance.xlsx")).unwrap();
    // xlsx is a zip container
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_existing_file_needs_force() {
    let dir = temp_dir("export_force");
    let ledger = ledger_with_two_records();

    let mut writer = FileSpreadsheetWriter::new(&dir, ExportFormat::Csv, false);
    ledger.export_folder(0, &mut writer).unwrap();

    let err = ledger.export_folder(0, &mut writer).unwrap_err();
    assert!(matches!(err, AppError::Export(_)));

    let mut forced = FileSpreadsheetWriter::new(&dir, ExportFormat::Csv, true);
    assert!(ledger.export_folder(0, &mut forced).is_ok());
}

#[test]
fn test_export_creates_missing_directory() {
    let dir = temp_dir("export_nested").join("reports").join("2024");
    let ledger = ledger_with_two_records();
    let mut writer = FileSpreadsheetWriter::new(&dir, ExportFormat::Csv, false);

    ledger.export_folder(0, &mut writer).unwrap();
    assert!(dir.join("Sunday Service_attendance.csv").exists());
}

#[test]
fn test_folder_names_are_sanitized_for_files() {
    assert_eq!(sanitize_file_stem("Youth/Choir_attendance"), "Youth_Choir_attendance");
    assert_eq!(sanitize_file_stem("a:b*c?_attendance"), "a_b_c__attendance");
    assert_eq!(sanitize_file_stem(".."), "attendance");
    assert_eq!(sanitize_file_stem("Sunday Service_attendance"), "Sunday Service_attendance");
}

#[test]
fn test_export_format_parsing() {
    assert_eq!(ExportFormat::from_str("XLSX").unwrap(), ExportFormat::Xlsx);
    assert_eq!(ExportFormat::from_str("excel").unwrap(), ExportFormat::Xlsx);
    assert_eq!(ExportFormat::from_str("csv").unwrap(), ExportFormat::Csv);
    assert!(matches!(
        ExportFormat::from_str("pdf").unwrap_err(),
        AppError::InvalidExportFormat(_)
    ));
}
