mod common;

use common::{RecordingWriter, fixed_ledger};
use rattendance::core::ExportOutcome;
use rattendance::errors::AppError;
use rattendance::export::model::get_headers;
use rattendance::models::RecordOrigin;

#[test]
fn test_create_folder_adds_empty_folder() {
    let (mut ledger, _) = fixed_ledger();

    for (i, name) in ["Sunday Service", "Youth", "  Choir  "].iter().enumerate() {
        let idx = ledger.create_folder(name).expect("create folder");
        assert_eq!(idx, i);
        assert_eq!(ledger.len(), i + 1);
        assert!(ledger.folder(idx).unwrap().is_empty());
    }

    assert_eq!(ledger.folder(2).unwrap().name(), "Choir");
}

#[test]
fn test_create_folder_rejects_blank_names() {
    let (mut ledger, _) = fixed_ledger();

    for name in ["", "   ", "\t\n"] {
        let err = ledger.create_folder(name).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Please enter a folder name.");
    }
    assert!(ledger.is_empty());
}

#[test]
fn test_duplicate_folder_names_are_allowed() {
    let (mut ledger, _) = fixed_ledger();
    ledger.create_folder("Vigil").unwrap();
    ledger.create_folder("Vigil").unwrap();

    assert_eq!(ledger.len(), 2);
}

#[test]
fn test_manual_record_only_touches_target_folder() {
    let (mut ledger, _) = fixed_ledger();
    ledger.create_folder("A").unwrap();
    ledger.create_folder("B").unwrap();

    let rec = ledger.add_record_manual(1, "Alice", "A", "Hall").unwrap();
    assert_eq!(rec.name(), "Alice");
    assert_eq!(rec.date(), "1/1/2024");
    assert_eq!(rec.time(), "9:00:00 AM");
    assert_eq!(rec.cluster(), "A");
    assert_eq!(rec.location(), "Hall");
    assert_eq!(rec.origin(), RecordOrigin::Manual);

    assert_eq!(ledger.folder(0).unwrap().len(), 0);
    assert_eq!(ledger.folder(1).unwrap().len(), 1);
}

#[test]
fn test_manual_record_with_empty_name_changes_nothing() {
    let (mut ledger, _) = fixed_ledger();
    ledger.create_folder("A").unwrap();
    ledger.add_record_manual(0, "Bob", "", "").unwrap();

    let err = ledger.add_record_manual(0, "  ", "X", "Y").unwrap_err();
    assert_eq!(err.to_string(), "Please enter a name.");
    assert_eq!(ledger.folder(0).unwrap().len(), 1);
}

#[test]
fn test_manual_record_keeps_fields_as_typed() {
    let (mut ledger, _) = fixed_ledger();
    ledger.create_folder("A").unwrap();

    let rec = ledger.add_record_manual(0, " Bob ", " North", "Hall ").unwrap();
    assert_eq!(rec.name(), " Bob ");
    assert_eq!(rec.cluster(), " North");
    assert_eq!(rec.location(), "Hall ");
}

#[test]
fn test_manual_record_on_missing_folder_is_rejected() {
    let (mut ledger, _) = fixed_ledger();
    ledger.create_folder("A").unwrap();

    let err = ledger.add_record_manual(3, "Bob", "", "").unwrap_err();
    assert!(matches!(err, AppError::InvalidFolder(4)));
    assert_eq!(ledger.folder(0).unwrap().len(), 0);
}

#[test]
fn test_scan_record_keeps_payload_verbatim() {
    let (mut ledger, _) = fixed_ledger();
    ledger.create_folder("A").unwrap();

    let rec = ledger.add_record_from_scan(0, "ABC123").unwrap();
    assert_eq!(rec.name(), "ABC123");
    assert_eq!(rec.cluster(), "Default Cluster");
    assert_eq!(rec.location(), "Default Location");
    assert_eq!(rec.origin(), RecordOrigin::Scan);

    let rec = ledger.add_record_from_scan(0, " id-7 | John ").unwrap();
    assert_eq!(rec.name(), " id-7 | John ");
}

#[test]
fn test_scan_record_rejects_empty_payload() {
    let (mut ledger, _) = fixed_ledger();
    ledger.create_folder("A").unwrap();

    assert!(ledger.add_record_from_scan(0, "").unwrap_err().is_validation());
    assert!(ledger.folder(0).unwrap().is_empty());
}

#[test]
fn test_stamp_is_fixed_at_insertion() {
    let (mut ledger, clock) = fixed_ledger();
    ledger.create_folder("A").unwrap();
    ledger.add_record_manual(0, "Early", "", "").unwrap();

    clock.advance_secs(5 * 3600 + 30);
    ledger.add_record_manual(0, "Late", "", "").unwrap();

    let records = ledger.folder(0).unwrap().records();
    assert_eq!(records[0].time(), "9:00:00 AM");
    assert_eq!(records[1].time(), "2:00:30 PM");
}

#[test]
fn test_remove_record_preserves_order() {
    let (mut ledger, _) = fixed_ledger();
    ledger.create_folder("A").unwrap();
    for name in ["one", "two", "three", "four"] {
        ledger.add_record_manual(0, name, "", "").unwrap();
    }

    let removed = ledger.remove_record(0, 1).unwrap();
    assert_eq!(removed.name(), "two");

    let names: Vec<&str> = ledger
        .folder(0)
        .unwrap()
        .records()
        .iter()
        .map(|r| r.name())
        .collect();
    assert_eq!(names, ["one", "three", "four"]);
}

#[test]
fn test_remove_record_out_of_range() {
    let (mut ledger, _) = fixed_ledger();
    ledger.create_folder("A").unwrap();
    ledger.add_record_manual(0, "one", "", "").unwrap();

    assert!(matches!(
        ledger.remove_record(0, 1).unwrap_err(),
        AppError::InvalidRecord(2)
    ));
    assert!(matches!(
        ledger.remove_record(5, 0).unwrap_err(),
        AppError::InvalidFolder(6)
    ));
    assert_eq!(ledger.folder(0).unwrap().len(), 1);
}

#[test]
fn test_export_empty_folder_is_skipped() {
    let (mut ledger, _) = fixed_ledger();
    ledger.create_folder("Empty").unwrap();

    let mut writer = RecordingWriter::default();
    let outcome = ledger.export_folder(0, &mut writer).unwrap();

    assert_eq!(outcome, ExportOutcome::Skipped);
    assert!(writer.requests.is_empty());
}

#[test]
fn test_export_builds_single_sheet_request() {
    let (mut ledger, _) = fixed_ledger();
    ledger.create_folder("Sunday Service").unwrap();
    ledger.add_record_manual(0, "Alice", "A", "Hall").unwrap();

    let mut writer = RecordingWriter::default();
    let outcome = ledger.export_folder(0, &mut writer).unwrap();
    assert!(matches!(outcome, ExportOutcome::Written(_)));

    let req = &writer.requests[0];
    assert_eq!(req.file_stem, "Sunday Service_attendance");
    assert_eq!(req.sheet_name, "Attendance");
    assert_eq!(req.headers, vec!["name", "date", "time", "cluster", "location"]);
    assert_eq!(req.headers, get_headers());
    assert_eq!(
        req.table(),
        vec![vec![
            "Alice".to_string(),
            "1/1/2024".to_string(),
            "9:00:00 AM".to_string(),
            "A".to_string(),
            "Hall".to_string(),
        ]]
    );
}

#[test]
fn test_export_missing_folder() {
    let (ledger, _) = fixed_ledger();
    let mut writer = RecordingWriter::default();

    assert!(matches!(
        ledger.export_folder(0, &mut writer).unwrap_err(),
        AppError::InvalidFolder(1)
    ));
}
