//! Admin session: one ledger plus the view state of the attendance screen.
//!
//! The session is what user actions talk to. It checks the selection,
//! forwards to the ledger, keeps dialogs open on validation errors, reports
//! outcomes and keeps the activity log.

use crate::config::Config;
use crate::core::clock::{Clock, Stamper, SystemClock};
use crate::core::ledger::{ExportOutcome, Ledger, ScanDefaults};
use crate::core::scan::{ScanEvent, ScanGate, ScanSource};
use crate::errors::{AppError, AppResult};
use crate::export::SpreadsheetWriter;
use crate::models::{ActivityEntry, AttendanceRecord, Dialog, ViewState};
use crate::ui::messages::{error, success, warning};

/// What happened to a single decode event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// A record was appended at this index of the selected folder.
    Recorded(usize),
    /// Nothing decoded in the frame.
    NothingFound,
    /// Dropped by the duplicate window.
    Duplicate,
    /// The scan dialog is not open.
    Dismissed,
}

#[derive(Debug)]
pub struct Session {
    ledger: Ledger,
    view: ViewState,
    gate: ScanGate,
    continuous_scan: bool,
    scan_mode_continuous: bool,
    activity: Vec<ActivityEntry>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Ledger::new(), ScanGate::default(), false)
    }
}

impl Session {
    pub fn new(ledger: Ledger, gate: ScanGate, continuous_scan: bool) -> Self {
        Self {
            ledger,
            view: ViewState::default(),
            gate,
            continuous_scan,
            scan_mode_continuous: continuous_scan,
            activity: Vec::new(),
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::from_config_with_clock(cfg, Box::new(SystemClock))
    }

    pub fn from_config_with_clock(cfg: &Config, clock: Box<dyn Clock>) -> Self {
        let stamper = Stamper::new(clock, &cfg.date_format, &cfg.time_format);
        let defaults = ScanDefaults {
            cluster: cfg.scan_default_cluster.clone(),
            location: cfg.scan_default_location.clone(),
        };
        Self::new(
            Ledger::with_stamper(stamper, defaults),
            ScanGate::new(cfg.scan_dedupe_secs),
            cfg.continuous_scan,
        )
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn activity(&self) -> &[ActivityEntry] {
        &self.activity
    }

    pub fn continuous_scan(&self) -> bool {
        self.continuous_scan
    }

    pub fn open_dialog(&mut self, dialog: Dialog) {
        self.view.open(dialog);
    }

    pub fn close_dialog(&mut self, dialog: Dialog) {
        self.view.close(dialog);
    }

    /// Index of the selected folder, or `NoFolderSelected`.
    pub fn selected(&self) -> AppResult<usize> {
        self.view.selected.ok_or(AppError::NoFolderSelected)
    }

    // ---------------------------
    // Folders
    // ---------------------------

    pub fn submit_folder(&mut self, name: &str) -> AppResult<usize> {
        let idx = self.ledger.create_folder(name)?;
        self.view.close(Dialog::AddFolder);

        let folder_name = self.ledger.folder(idx)?.name().to_string();
        self.log("folder_add", &folder_name, format!("Folder #{} created", idx + 1));
        success("Folder added!");
        Ok(idx)
    }

    /// Changes the folder shown. `None` clears the selection.
    pub fn select(&mut self, index: Option<usize>) -> AppResult<()> {
        if let Some(i) = index {
            self.ledger.folder(i)?;
        }
        self.view.selected = index;
        Ok(())
    }

    // ---------------------------
    // Records
    // ---------------------------

    pub fn submit_record(&mut self, name: &str, cluster: &str, location: &str) -> AppResult<usize> {
        let folder = self.selected()?;
        let record = self
            .ledger
            .add_record_manual(folder, name, cluster, location)?;
        let msg = describe(record);

        self.view.close(Dialog::AddRecord);
        let idx = self.ledger.folder(folder)?.len() - 1;
        self.log_for_folder("record_add", folder, msg);
        success("Attendance added!");
        Ok(idx)
    }

    pub fn delete_record(&mut self, index: usize) -> AppResult<AttendanceRecord> {
        let folder = self.selected()?;
        let removed = self.ledger.remove_record(folder, index)?;

        self.log_for_folder(
            "record_del",
            folder,
            format!("#{} {}", index + 1, describe(&removed)),
        );
        success("Attendance deleted!");
        Ok(removed)
    }

    // ---------------------------
    // Scanning
    // ---------------------------

    /// Opens the scan dialog in the configured mode. Requires a selected folder.
    pub fn open_scan(&mut self) -> AppResult<()> {
        self.open_scan_mode(self.continuous_scan)
    }

    pub fn open_scan_mode(&mut self, continuous: bool) -> AppResult<()> {
        self.selected()?;
        self.scan_mode_continuous = continuous;
        self.view.open(Dialog::Scan);
        Ok(())
    }

    pub fn close_scan(&mut self) {
        self.view.close(Dialog::Scan);
    }

    /// Applies one decode event to the selected folder.
    ///
    /// In single-shot mode the dialog closes after the first recorded code.
    /// Decoder failures come back as `AppError::Scan` and leave the dialog open.
    pub fn handle_scan_event(&mut self, event: ScanEvent) -> AppResult<ScanOutcome> {
        if !self.view.is_open(Dialog::Scan) {
            return Ok(ScanOutcome::Dismissed);
        }

        let payload = match event {
            ScanEvent::NotFound => return Ok(ScanOutcome::NothingFound),
            ScanEvent::Failed(reason) => return Err(AppError::Scan(reason)),
            ScanEvent::Decoded(payload) => payload,
        };

        let folder = self.selected()?;
        let now = self.ledger.stamper().now();
        if !self.gate.admit(folder, &payload, now) {
            warning(format!("'{payload}' was already scanned, ignored."));
            return Ok(ScanOutcome::Duplicate);
        }

        let record = self.ledger.add_record_from_scan(folder, &payload)?;
        let msg = describe(record);
        let idx = self.ledger.folder(folder)?.len() - 1;

        self.log_for_folder("scan", folder, msg);
        success("Attendance recorded!");

        if !self.scan_mode_continuous {
            self.view.close(Dialog::Scan);
        }
        Ok(ScanOutcome::Recorded(idx))
    }

    /// Opens the scan dialog and feeds it from `source` until the source is
    /// exhausted or the dialog closes. Returns how many records were added.
    pub fn run_scan<S>(&mut self, source: &mut S) -> AppResult<usize>
    where
        S: ScanSource + ?Sized,
    {
        self.run_scan_mode(source, self.continuous_scan)
    }

    pub fn run_scan_mode<S>(&mut self, source: &mut S, continuous: bool) -> AppResult<usize>
    where
        S: ScanSource + ?Sized,
    {
        self.open_scan_mode(continuous)?;

        let mut recorded = 0;
        while self.view.is_open(Dialog::Scan) {
            let Some(event) = source.next_event() else {
                break;
            };

            match self.handle_scan_event(event) {
                Ok(ScanOutcome::Recorded(_)) => recorded += 1,
                Ok(_) => {}
                Err(e @ AppError::Scan(_)) => error(e),
                Err(e) => {
                    self.close_scan();
                    return Err(e);
                }
            }
        }

        self.close_scan();
        Ok(recorded)
    }

    // ---------------------------
    // Export
    // ---------------------------

    pub fn export<W>(&mut self, writer: &mut W) -> AppResult<ExportOutcome>
    where
        W: SpreadsheetWriter + ?Sized,
    {
        let folder = self.selected()?;
        let outcome = self.ledger.export_folder(folder, writer)?;

        match &outcome {
            ExportOutcome::Skipped => warning("No attendance records to export."),
            ExportOutcome::Written(path) => {
                let rows = self.ledger.folder(folder)?.len();
                self.log_for_folder(
                    "export",
                    folder,
                    format!("{rows} row(s) written to {}", path.display()),
                );
            }
        }

        Ok(outcome)
    }

    // ---------------------------
    // Activity log
    // ---------------------------

    fn log_for_folder(&mut self, operation: &str, folder: usize, message: String) {
        let target = self
            .ledger
            .folder(folder)
            .map(|f| f.name().to_string())
            .unwrap_or_default();
        self.log(operation, &target, message);
    }

    fn log(&mut self, operation: &str, target: &str, message: String) {
        self.activity.push(ActivityEntry {
            at: self.ledger.stamper().now(),
            operation: operation.to_string(),
            target: target.to_string(),
            message,
        });
    }
}

fn describe(record: &AttendanceRecord) -> String {
    format!("{} ({} {})", record.name(), record.date(), record.time())
}
