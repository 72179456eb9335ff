//! In-memory attendance ledger: folders, records and export snapshots.
//!
//! Every operation validates its input before touching state, so a failed
//! call leaves the ledger exactly as it was.

use crate::core::clock::Stamper;
use crate::errors::{AppError, AppResult};
use crate::export::{ExportRequest, SpreadsheetWriter};
use crate::models::{AttendanceRecord, Folder, RecordOrigin};
use std::path::PathBuf;

pub const DEFAULT_SCAN_CLUSTER: &str = "Default Cluster";
pub const DEFAULT_SCAN_LOCATION: &str = "Default Location";

/// Labels stamped on records created from a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanDefaults {
    pub cluster: String,
    pub location: String,
}

impl Default for ScanDefaults {
    fn default() -> Self {
        Self {
            cluster: DEFAULT_SCAN_CLUSTER.to_string(),
            location: DEFAULT_SCAN_LOCATION.to_string(),
        }
    }
}

/// Result of an export attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The folder had no records; the writer was not called.
    Skipped,
    Written(PathBuf),
}

#[derive(Debug, Default)]
pub struct Ledger {
    folders: Vec<Folder>,
    stamper: Stamper,
    scan_defaults: ScanDefaults,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stamper(stamper: Stamper, scan_defaults: ScanDefaults) -> Self {
        Self {
            folders: Vec::new(),
            stamper,
            scan_defaults,
        }
    }

    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    pub fn len(&self) -> usize {
        self.folders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }

    pub fn folder(&self, index: usize) -> AppResult<&Folder> {
        self.folders
            .get(index)
            .ok_or(AppError::InvalidFolder(index + 1))
    }

    pub fn scan_defaults(&self) -> &ScanDefaults {
        &self.scan_defaults
    }

    pub fn stamper(&self) -> &Stamper {
        &self.stamper
    }

    /// Appends an empty folder and returns its index.
    /// Duplicate names are accepted.
    pub fn create_folder(&mut self, name: &str) -> AppResult<usize> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Validation(
                "Please enter a folder name.".to_string(),
            ));
        }

        self.folders.push(Folder::new(name.to_string()));
        Ok(self.folders.len() - 1)
    }

    /// Appends a hand-entered record stamped with the current date and time.
    pub fn add_record_manual(
        &mut self,
        folder: usize,
        name: &str,
        cluster: &str,
        location: &str,
    ) -> AppResult<&AttendanceRecord> {
        self.folder(folder)?;

        if name.trim().is_empty() {
            return Err(AppError::Validation("Please enter a name.".to_string()));
        }

        // stored as typed; trimming only decides whether a name was given
        let record = self.stamped(
            name.to_string(),
            cluster.to_string(),
            location.to_string(),
            RecordOrigin::Manual,
        )?;
        Ok(self.push(folder, record))
    }

    /// Appends a record for a decoded scan payload.
    ///
    /// The payload is stored verbatim as the attendee name; cluster and
    /// location get the configured default labels.
    pub fn add_record_from_scan(
        &mut self,
        folder: usize,
        decoded: &str,
    ) -> AppResult<&AttendanceRecord> {
        self.folder(folder)?;

        if decoded.is_empty() {
            return Err(AppError::Validation("Scanned code is empty.".to_string()));
        }

        let record = self.stamped(
            decoded.to_string(),
            self.scan_defaults.cluster.clone(),
            self.scan_defaults.location.clone(),
            RecordOrigin::Scan,
        )?;
        Ok(self.push(folder, record))
    }

    /// Removes one record, keeping the others in their order.
    pub fn remove_record(&mut self, folder: usize, record: usize) -> AppResult<AttendanceRecord> {
        let f = self
            .folders
            .get_mut(folder)
            .ok_or(AppError::InvalidFolder(folder + 1))?;

        f.remove(record).ok_or(AppError::InvalidRecord(record + 1))
    }

    /// Snapshot of a folder ready for a spreadsheet writer.
    /// `None` when the folder has nothing to export.
    pub fn export_request(&self, folder: usize) -> AppResult<Option<ExportRequest>> {
        let f = self.folder(folder)?;
        if f.is_empty() {
            return Ok(None);
        }
        Ok(Some(ExportRequest::for_folder(f)))
    }

    pub fn export_folder<W>(&self, folder: usize, writer: &mut W) -> AppResult<ExportOutcome>
    where
        W: SpreadsheetWriter + ?Sized,
    {
        match self.export_request(folder)? {
            None => Ok(ExportOutcome::Skipped),
            Some(request) => writer.write(&request).map(ExportOutcome::Written),
        }
    }

    fn stamped(
        &self,
        name: String,
        cluster: String,
        location: String,
        origin: RecordOrigin,
    ) -> AppResult<AttendanceRecord> {
        let stamp = self.stamper.stamp()?;
        Ok(AttendanceRecord::new(
            name, stamp.date, stamp.time, cluster, location, origin,
        ))
    }

    fn push(&mut self, folder: usize, record: AttendanceRecord) -> &AttendanceRecord {
        let f = &mut self.folders[folder];
        f.push(record);
        &f.records()[f.len() - 1]
    }
}
