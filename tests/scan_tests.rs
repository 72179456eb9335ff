use rattendance::core::scan::{
    LineScanSource, MemoryScanSource, ScanEvent, ScanGate, ScanSource, line_to_event,
};
use chrono::NaiveDate;
use std::io::Cursor;

#[test]
fn test_line_to_event() {
    assert_eq!(line_to_event("ABC123\n"), ScanEvent::Decoded("ABC123".into()));
    assert_eq!(line_to_event("ABC123\r\n"), ScanEvent::Decoded("ABC123".into()));
    assert_eq!(line_to_event("  padded  "), ScanEvent::Decoded("  padded  ".into()));
    assert_eq!(line_to_event("\n"), ScanEvent::NotFound);
    assert_eq!(line_to_event("\r\n"), ScanEvent::NotFound);
    assert_eq!(line_to_event("   "), ScanEvent::Decoded("   ".into()));
}

#[test]
fn test_line_source_yields_one_event_per_line() {
    let input = Cursor::new("first\n\nsecond\r\nlast");
    let mut source = LineScanSource::new(input);

    assert_eq!(source.next_event(), Some(ScanEvent::Decoded("first".into())));
    assert_eq!(source.next_event(), Some(ScanEvent::NotFound));
    assert_eq!(source.next_event(), Some(ScanEvent::Decoded("second".into())));
    assert_eq!(source.next_event(), Some(ScanEvent::Decoded("last".into())));
    assert_eq!(source.next_event(), None);
    assert_eq!(source.next_event(), None);
}

#[test]
fn test_memory_source_from_codes() {
    let mut source = MemoryScanSource::from_codes(["a", "b"]);
    assert_eq!(source.next_event(), Some(ScanEvent::Decoded("a".into())));
    assert_eq!(source.next_event(), Some(ScanEvent::Decoded("b".into())));
    assert_eq!(source.next_event(), None);
}

#[test]
fn test_gate_disabled_admits_everything() {
    let at = NaiveDate::from_ymd_opt(2024, 5, 5)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap();
    let mut gate = ScanGate::new(0);

    assert!(!gate.is_enabled());
    assert!(gate.admit(0, "X", at));
    assert!(gate.admit(0, "X", at));
}

#[test]
fn test_gate_is_per_folder_and_payload() {
    let at = NaiveDate::from_ymd_opt(2024, 5, 5)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap();
    let mut gate = ScanGate::new(30);

    assert!(gate.admit(0, "X", at));
    assert!(!gate.admit(0, "X", at + chrono::Duration::seconds(29)));
    assert!(gate.admit(1, "X", at));
    assert!(gate.admit(0, "Y", at));
    assert!(gate.admit(0, "X", at + chrono::Duration::seconds(30)));
}
