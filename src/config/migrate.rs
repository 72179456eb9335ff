//! Keeps an existing config file in step with the current `Config` fields:
//! reports missing / unknown keys and writes missing ones back with their
//! default values. User values are never touched.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigReport {
    pub missing: Vec<String>,
    pub unknown: Vec<String>,
}

impl ConfigReport {
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.unknown.is_empty()
    }
}

fn default_mapping() -> AppResult<Mapping> {
    match serde_yaml::to_value(Config::default()) {
        Ok(Value::Mapping(m)) => Ok(m),
        _ => Err(AppError::Config("cannot build default configuration".into())),
    }
}

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    if content.trim().is_empty() {
        return Ok(Mapping::new());
    }

    match serde_yaml::from_str::<Value>(&content) {
        Ok(Value::Mapping(m)) => Ok(m),
        Ok(Value::Null) => Ok(Mapping::new()),
        Ok(_) => Err(AppError::Config(format!(
            "{}: top level must be a mapping",
            path.display()
        ))),
        Err(e) => Err(AppError::Config(format!("{}: {e}", path.display()))),
    }
}

fn key_name(v: &Value) -> String {
    v.as_str().map(str::to_string).unwrap_or_else(|| format!("{v:?}"))
}

/// Compare the file against the known fields.
pub fn check(path: &Path) -> AppResult<ConfigReport> {
    let defaults = default_mapping()?;
    let current = read_mapping(path)?;

    let missing = defaults
        .keys()
        .filter(|k| !current.contains_key(*k))
        .map(key_name)
        .collect();
    let unknown = current
        .keys()
        .filter(|k| !defaults.contains_key(*k))
        .map(key_name)
        .collect();

    Ok(ConfigReport { missing, unknown })
}

/// Add missing fields with default values. Returns the names added.
pub fn migrate(path: &Path) -> AppResult<Vec<String>> {
    let defaults = default_mapping()?;
    let mut current = read_mapping(path)?;

    let mut added = Vec::new();
    for (k, v) in defaults {
        if !current.contains_key(&k) {
            added.push(key_name(&k));
            current.insert(k, v);
        }
    }

    if added.is_empty() {
        return Ok(added);
    }

    let yaml = serde_yaml::to_string(&Value::Mapping(current)).map_err(|_| AppError::ConfigSave)?;
    fs::write(path, yaml).map_err(|_| AppError::ConfigSave)?;
    Ok(added)
}

/// `config --check` output.
pub fn print_report(path: &Path, report: &ConfigReport) {
    if report.is_clean() {
        success(format!("Configuration {} is complete.", path.display()));
        return;
    }
    for field in &report.missing {
        warning(format!("Missing field '{field}' (default value will be used)"));
    }
    for field in &report.unknown {
        warning(format!("Unknown field '{field}' (ignored)"));
    }
    if !report.missing.is_empty() {
        info("Run 'rattendance config --migrate' to add the missing fields.");
    }
}
