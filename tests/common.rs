#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use rattendance::config::Config;
use rattendance::core::clock::{FixedClock, Stamper};
use rattendance::core::ledger::{Ledger, ScanDefaults};
use rattendance::core::scan::ScanGate;
use rattendance::core::Session;
use rattendance::errors::AppResult;
use rattendance::export::{ExportRequest, SpreadsheetWriter};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rat() -> Command {
    cargo_bin_cmd!("rattendance")
}

/// 1 January 2024, 09:00:00
pub fn new_year_morning() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap()
}

pub fn fixed_ledger() -> (Ledger, FixedClock) {
    let clock = FixedClock::new(new_year_morning());
    let ledger = Ledger::with_stamper(
        Stamper::with_clock(Box::new(clock.clone())),
        ScanDefaults::default(),
    );
    (ledger, clock)
}

pub fn fixed_session(dedupe_secs: u64, continuous: bool) -> (Session, FixedClock) {
    let (ledger, clock) = fixed_ledger();
    (Session::new(ledger, ScanGate::new(dedupe_secs), continuous), clock)
}

pub fn fixed_session_from(cfg: &Config) -> (Session, FixedClock) {
    let clock = FixedClock::new(new_year_morning());
    (
        Session::from_config_with_clock(cfg, Box::new(clock.clone())),
        clock,
    )
}

/// Fresh directory under the system temp dir.
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rattendance_{name}"));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

/// Temp file path, removed if it already exists.
pub fn temp_file(name: &str, ext: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rattendance_{name}.{ext}"));
    fs::remove_file(&path).ok();
    path
}

/// Writer that keeps requests in memory instead of producing files.
#[derive(Default)]
pub struct RecordingWriter {
    pub requests: Vec<ExportRequest>,
}

impl SpreadsheetWriter for RecordingWriter {
    fn write(&mut self, request: &ExportRequest) -> AppResult<PathBuf> {
        self.requests.push(request.clone());
        Ok(PathBuf::from(format!("{}.mem", request.file_stem)))
    }
}
