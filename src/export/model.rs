// src/export/model.rs

use crate::models::{AttendanceRecord, Folder};
use serde::Serialize;

pub const SHEET_NAME: &str = "Attendance";
pub const FILE_STEM_SUFFIX: &str = "_attendance";

/// Flat record shape handed to the spreadsheet writer.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct RecordExport {
    pub name: String,
    pub date: String,
    pub time: String,
    pub cluster: String,
    pub location: String,
}

impl From<&AttendanceRecord> for RecordExport {
    fn from(r: &AttendanceRecord) -> Self {
        Self {
            name: r.name().to_string(),
            date: r.date().to_string(),
            time: r.time().to_string(),
            cluster: r.cluster().to_string(),
            location: r.location().to_string(),
        }
    }
}

/// Header row, same order as the fields of `RecordExport`.
pub fn get_headers() -> Vec<&'static str> {
    vec!["name", "date", "time", "cluster", "location"]
}

pub(crate) fn record_to_row(r: &RecordExport) -> Vec<String> {
    vec![
        r.name.clone(),
        r.date.clone(),
        r.time.clone(),
        r.cluster.clone(),
        r.location.clone(),
    ]
}

/// Everything a writer needs to produce one single-sheet spreadsheet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportRequest {
    /// Suggested output name without extension: `<folder name>_attendance`.
    pub file_stem: String,
    pub sheet_name: String,
    pub headers: Vec<&'static str>,
    pub rows: Vec<RecordExport>,
}

impl ExportRequest {
    pub fn for_folder(folder: &Folder) -> Self {
        Self {
            file_stem: format!("{}{}", folder.name(), FILE_STEM_SUFFIX),
            sheet_name: SHEET_NAME.to_string(),
            headers: get_headers(),
            rows: folder.records().iter().map(RecordExport::from).collect(),
        }
    }

    pub fn table(&self) -> Vec<Vec<String>> {
        self.rows.iter().map(record_to_row).collect()
    }
}
