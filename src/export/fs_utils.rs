// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use std::fs;
use std::path::Path;

/// Check that the target file can be created.
///
/// - file missing → Ok
/// - file present and `force` → Ok, it will be overwritten
/// - file present without `force` → error, nothing is touched
///
/// No interactive confirmation here: inside a session stdin carries the
/// commands themselves.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() {
        return Ok(());
    }

    if force {
        info(format!("Overwriting existing file '{}'.", path.display()));
        return Ok(());
    }

    Err(AppError::Export(format!(
        "the file '{}' already exists (use --force to overwrite)",
        path.display()
    )))
}

/// Create the output directory when missing.
pub(crate) fn ensure_dir(dir: &Path) -> AppResult<()> {
    if !dir.as_os_str().is_empty() && !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Replace characters that cannot appear in a file name.
/// Folder names are free text, so "Youth/Choir" must not become a subdirectory.
pub fn sanitize_file_stem(stem: &str) -> String {
    let cleaned: String = stem
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    let cleaned = cleaned.trim_matches('.').to_string();
    if cleaned.is_empty() {
        "attendance".to_string()
    } else {
        cleaned
    }
}
