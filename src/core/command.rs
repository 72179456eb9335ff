//! Session command language: one command per line, parsed with clap.

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use regex::Regex;
use std::path::PathBuf;
use std::sync::LazyLock;

static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""([^"]*)"|'([^']*)'|(\S+)"#).expect("token regex is valid")
});

#[derive(Parser, Debug)]
#[command(
    name = "session",
    no_binary_name = true,
    disable_version_flag = true,
    about = "Commands available inside an attendance session"
)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    /// Create, select and list attendance folders
    Folder {
        #[command(subcommand)]
        action: FolderAction,
    },

    /// Add, delete and list records of the selected folder
    Record {
        #[command(subcommand)]
        action: RecordAction,
    },

    /// Record attendance from scanned codes
    Scan {
        /// Decoded payloads; without them the scanner prompt opens
        codes: Vec<String>,

        #[arg(long, value_name = "FILE", help = "Read decoded payloads from a file, one per line")]
        from: Option<PathBuf>,

        #[arg(long, help = "Keep scanning after the first recorded code")]
        continuous: bool,
    },

    /// Export the selected folder to a spreadsheet
    Export {
        #[arg(long, value_enum)]
        format: Option<ExportFormat>,

        #[arg(long, value_name = "DIR")]
        dir: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the session activity log
    Log,

    /// Leave the session (all folders are discarded)
    #[command(alias = "exit")]
    Quit,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum FolderAction {
    /// Create a folder; without a name the folder prompt opens
    Add { name: Vec<String> },

    /// Select a folder by number, or `none` to clear the selection
    Select { target: String },

    /// List folders
    List,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum RecordAction {
    /// Add a record by hand; without a name the record prompt opens
    Add {
        name: Vec<String>,

        #[arg(long, default_value = "")]
        cluster: String,

        #[arg(long, default_value = "")]
        location: String,
    },

    /// Delete a record by number
    Del { number: usize },

    /// List the records of the selected folder
    List,
}

/// Outcome of parsing one input line.
#[derive(Debug, PartialEq, Eq)]
pub enum Parsed {
    Command(SessionCommand),
    /// Blank line or comment.
    Nothing,
    /// Help text requested; the caller prints it.
    Help(String),
}

/// Split a line into words, honoring double and single quotes.
pub fn tokenize(line: &str) -> Vec<String> {
    TOKEN_RE
        .captures_iter(line)
        .filter_map(|c| c.get(1).or_else(|| c.get(2)).or_else(|| c.get(3)))
        .map(|m| m.as_str().to_string())
        .collect()
}

pub fn parse_line(line: &str) -> AppResult<Parsed> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(Parsed::Nothing);
    }

    match SessionLine::try_parse_from(tokenize(trimmed)) {
        Ok(parsed) => Ok(Parsed::Command(parsed.command)),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand) => {
            Ok(Parsed::Help(e.to_string()))
        }
        Err(e) => Err(AppError::Command(e.to_string().trim_end().to_string())),
    }
}

/// Folder selection argument: 1-based number or `none`.
pub fn parse_selection(target: &str) -> AppResult<Option<usize>> {
    if target.eq_ignore_ascii_case("none") {
        return Ok(None);
    }

    match target.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(Some(n - 1)),
        Ok(n) => Err(AppError::InvalidFolder(n)),
        Err(_) => Err(AppError::Command(format!(
            "Invalid folder selection '{target}': use a folder number or 'none'"
        ))),
    }
}

/// Record prompt input: `name | cluster | location`, the last two optional.
pub fn split_record_fields(line: &str) -> (String, String, String) {
    let mut parts = line.splitn(3, '|').map(|p| p.trim().to_string());
    let name = parts.next().unwrap_or_default();
    let cluster = parts.next().unwrap_or_default();
    let location = parts.next().unwrap_or_default();
    (name, cluster, location)
}
