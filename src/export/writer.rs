// src/export/writer.rs

use crate::errors::AppResult;
use crate::export::fs_utils::{ensure_dir, ensure_writable, sanitize_file_stem};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::ExportRequest;
use crate::export::xlsx::export_xlsx;
use crate::export::ExportFormat;
use std::path::PathBuf;

/// Anything able to turn an export request into a saved file.
pub trait SpreadsheetWriter {
    /// Writes the request and returns where the output ended up.
    fn write(&mut self, request: &ExportRequest) -> AppResult<PathBuf>;
}

/// Writes `<dir>/<file_stem>.<ext>` on the local filesystem.
#[derive(Debug, Clone)]
pub struct FileSpreadsheetWriter {
    pub dir: PathBuf,
    pub format: ExportFormat,
    pub force: bool,
}

impl FileSpreadsheetWriter {
    pub fn new(dir: impl Into<PathBuf>, format: ExportFormat, force: bool) -> Self {
        Self {
            dir: dir.into(),
            format,
            force,
        }
    }

    pub fn target_path(&self, request: &ExportRequest) -> PathBuf {
        self.dir.join(format!(
            "{}.{}",
            sanitize_file_stem(&request.file_stem),
            self.format.extension()
        ))
    }
}

impl SpreadsheetWriter for FileSpreadsheetWriter {
    fn write(&mut self, request: &ExportRequest) -> AppResult<PathBuf> {
        let path = self.target_path(request);

        ensure_dir(&self.dir)?;
        ensure_writable(&path, self.force)?;

        match self.format {
            ExportFormat::Xlsx => export_xlsx(request, &path)?,
            ExportFormat::Csv => export_csv(request, &path)?,
            ExportFormat::Json => export_json(request, &path)?,
        }

        Ok(path)
    }
}
