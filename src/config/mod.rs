use crate::core::clock::{DEFAULT_DATE_FORMAT, DEFAULT_TIME_FORMAT, render};
use crate::core::ledger::{DEFAULT_SCAN_CLUSTER, DEFAULT_SCAN_LOCATION};
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub mod migrate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub export_dir: String,
    pub export_format: ExportFormat,
    pub date_format: String,
    pub time_format: String,
    pub scan_default_cluster: String,
    pub scan_default_location: String,
    /// Seconds during which a repeated code is ignored; 0 disables the check.
    pub scan_dedupe_secs: u64,
    pub continuous_scan: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            export_dir: ".".to_string(),
            export_format: ExportFormat::Xlsx,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            scan_default_cluster: DEFAULT_SCAN_CLUSTER.to_string(),
            scan_default_location: DEFAULT_SCAN_LOCATION.to_string(),
            scan_dedupe_secs: 0,
            continuous_scan: false,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rattendance")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".rattendance")
        }
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rattendance.conf")
    }

    /// Config file to use: the `--config` override or the default one.
    pub fn resolve_path(custom: Option<&str>) -> PathBuf {
        match custom {
            Some(p) => crate::utils::path::expand_tilde(p),
            None => Self::config_file(),
        }
    }

    /// Load configuration from `path`, or return defaults if the file is missing.
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Write this configuration as YAML, creating the parent directory.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir).map_err(|_| AppError::ConfigSave)?;
        }

        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)
    }

    /// Rejects strftime patterns chrono cannot render.
    pub fn validate(&self) -> AppResult<()> {
        for (field, pattern) in [
            ("date_format", &self.date_format),
            ("time_format", &self.time_format),
        ] {
            if pattern.trim().is_empty() || render(NaiveDateTime::default(), pattern).is_err() {
                return Err(AppError::Config(format!(
                    "invalid {field} '{pattern}'"
                )));
            }
        }
        Ok(())
    }
}
