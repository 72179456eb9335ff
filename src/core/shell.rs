//! Line-driven front end of a session, shared by `shell` and `run`.
//!
//! While a dialog is open the next lines feed it; otherwise each line is a
//! session command.

use crate::config::Config;
use crate::core::command::{
    FolderAction, Parsed, RecordAction, SessionCommand, parse_line, parse_selection,
    split_record_fields,
};
use crate::core::ledger::ExportOutcome;
use crate::core::log::LogLogic;
use crate::core::scan::{LineScanSource, MemoryScanSource, line_to_event};
use crate::core::session::Session;
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, FileSpreadsheetWriter};
use crate::models::Dialog;
use crate::ui::messages::{info, warning};
use crate::utils::path::expand_tilde;
use crate::utils::table::{Column, Table};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

const CANCEL: &str = ".";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct SessionShell {
    session: Session,
    export_dir: PathBuf,
    export_format: ExportFormat,
}

impl SessionShell {
    pub fn new(session: Session, export_dir: PathBuf, export_format: ExportFormat) -> Self {
        Self {
            session,
            export_dir,
            export_format,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(
            Session::from_config(cfg),
            expand_tilde(&cfg.export_dir),
            cfg.export_format,
        )
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Text shown before reading the next line in interactive mode.
    pub fn prompt(&self) -> String {
        match self.session.view().active_dialog() {
            Some(Dialog::Scan) => "scan> ".to_string(),
            Some(Dialog::AddRecord) => "name | cluster | location> ".to_string(),
            Some(Dialog::AddFolder) => "folder name> ".to_string(),
            None => match self.selected_name() {
                Some(name) => format!("[{name}]> "),
                None => "> ".to_string(),
            },
        }
    }

    pub fn feed_line(&mut self, line: &str) -> AppResult<Flow> {
        if let Some(dialog) = self.session.view().active_dialog() {
            return self.feed_dialog(dialog, line).map(|_| Flow::Continue);
        }

        match parse_line(line)? {
            Parsed::Nothing => Ok(Flow::Continue),
            Parsed::Help(text) => {
                println!("{text}");
                Ok(Flow::Continue)
            }
            Parsed::Command(cmd) => self.execute(cmd),
        }
    }

    fn feed_dialog(&mut self, dialog: Dialog, line: &str) -> AppResult<()> {
        let cancelled = line.trim() == CANCEL;

        match dialog {
            Dialog::Scan => {
                if cancelled {
                    self.session.close_scan();
                    info("Scan dialog closed.");
                    return Ok(());
                }
                self.session.handle_scan_event(line_to_event(line))?;
            }
            Dialog::AddRecord => {
                if cancelled {
                    self.session.close_dialog(Dialog::AddRecord);
                    return Ok(());
                }
                let (name, cluster, location) = split_record_fields(line);
                self.session.submit_record(&name, &cluster, &location)?;
            }
            Dialog::AddFolder => {
                if cancelled {
                    self.session.close_dialog(Dialog::AddFolder);
                    return Ok(());
                }
                self.session.submit_folder(line)?;
            }
        }
        Ok(())
    }

    fn execute(&mut self, cmd: SessionCommand) -> AppResult<Flow> {
        match cmd {
            SessionCommand::Folder { action } => self.folder(action)?,
            SessionCommand::Record { action } => self.record(action)?,
            SessionCommand::Scan {
                codes,
                from,
                continuous,
            } => self.scan(codes, from, continuous)?,
            SessionCommand::Export { format, dir, force } => self.export(format, dir, force)?,
            SessionCommand::Log => LogLogic::print_log(self.session.activity()),
            SessionCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn folder(&mut self, action: FolderAction) -> AppResult<()> {
        match action {
            FolderAction::Add { name } if name.is_empty() => {
                self.session.open_dialog(Dialog::AddFolder);
                info("Enter the folder name ('.' to cancel).");
            }
            FolderAction::Add { name } => {
                self.session.submit_folder(&name.join(" "))?;
            }
            FolderAction::Select { target } => {
                let selection = parse_selection(&target)?;
                self.session.select(selection)?;
                match (selection, self.selected_name()) {
                    (Some(i), Some(name)) => info(format!("Folder #{} '{}' selected.", i + 1, name)),
                    _ => info("Selection cleared."),
                }
            }
            FolderAction::List => self.print_folders(),
        }
        Ok(())
    }

    fn record(&mut self, action: RecordAction) -> AppResult<()> {
        match action {
            RecordAction::Add { name, .. } if name.is_empty() => {
                self.session.selected()?;
                self.session.open_dialog(Dialog::AddRecord);
                info("Enter 'name | cluster | location' ('.' to cancel).");
            }
            RecordAction::Add {
                name,
                cluster,
                location,
            } => {
                self.session
                    .submit_record(&name.join(" "), &cluster, &location)?;
            }
            RecordAction::Del { number } => {
                if number == 0 {
                    return Err(AppError::InvalidRecord(0));
                }
                self.session.delete_record(number - 1)?;
            }
            RecordAction::List => self.print_records()?,
        }
        Ok(())
    }

    fn scan(&mut self, codes: Vec<String>, from: Option<PathBuf>, continuous: bool) -> AppResult<()> {
        let continuous = continuous || self.session.continuous_scan();

        let recorded = if !codes.is_empty() {
            let continuous = continuous || codes.len() > 1;
            let mut source = MemoryScanSource::from_codes(codes);
            self.session.run_scan_mode(&mut source, continuous)?
        } else if let Some(path) = from {
            let file = File::open(expand_tilde(&path.to_string_lossy()))?;
            let mut source = LineScanSource::new(BufReader::new(file));
            // a file is a batch of reads, like several codes on one line
            self.session.run_scan_mode(&mut source, true)?
        } else {
            self.session.open_scan_mode(continuous)?;
            info("Scanner ready: one code per line, empty line = nothing read, '.' to close.");
            return Ok(());
        };

        info(format!("{recorded} attendance record(s) added from scan."));
        Ok(())
    }

    fn export(&mut self, format: Option<ExportFormat>, dir: Option<String>, force: bool) -> AppResult<()> {
        let dir = dir
            .map(|d| expand_tilde(&d))
            .unwrap_or_else(|| self.export_dir.clone());
        let mut writer = FileSpreadsheetWriter::new(dir, format.unwrap_or(self.export_format), force);

        if let ExportOutcome::Written(path) = self.session.export(&mut writer)? {
            info(format!("Saved {}", path.display()));
        }
        Ok(())
    }

    fn selected_name(&self) -> Option<String> {
        let idx = self.session.view().selected?;
        self.session
            .ledger()
            .folder(idx)
            .ok()
            .map(|f| f.name().to_string())
    }

    fn print_folders(&self) {
        let folders = self.session.ledger().folders();
        if folders.is_empty() {
            warning("No folders yet. Use 'folder add <name>'.");
            return;
        }

        let mut table = Table::new(vec![
            Column::new("", 1),
            Column::new("#", 3),
            Column::new("Folder", 24),
            Column::new("Records", 7),
        ]);

        for (i, f) in folders.iter().enumerate() {
            let marker = if self.session.view().selected == Some(i) { "*" } else { "" };
            table.add_row(vec![
                marker.to_string(),
                (i + 1).to_string(),
                f.name().to_string(),
                f.len().to_string(),
            ]);
        }
        print!("{}", table.render());
    }

    fn print_records(&self) -> AppResult<()> {
        let folder = self.session.ledger().folder(self.session.selected()?)?;
        if folder.is_empty() {
            warning(format!("Folder '{}' has no attendance records.", folder.name()));
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::new("#", 3),
            Column::new("Name", 20),
            Column::new("Date", 10),
            Column::new("Time", 11),
            Column::new("Cluster", 16),
            Column::new("Location", 16),
            Column::new("Via", 6),
        ]);

        for (i, r) in folder.records().iter().enumerate() {
            table.add_row(vec![
                (i + 1).to_string(),
                r.name().to_string(),
                r.date().to_string(),
                r.time().to_string(),
                r.cluster().to_string(),
                r.location().to_string(),
                r.origin().as_str().to_string(),
            ]);
        }
        print!("{}", table.render());
        Ok(())
    }
}

