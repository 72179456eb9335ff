use crate::cli::parser::Commands;
use crate::config::{Config, migrate};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, info, success, warning};
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate: run_migrate,
        edit_config,
        editor,
    } = cmd
    {
        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            let yaml = serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
            println!("{yaml}");
        }

        if (*check || *run_migrate) && !path.exists() {
            warning(format!(
                "No configuration file at {}. Run 'rattendance init' first.",
                path.display()
            ));
            return Ok(());
        }

        if *check {
            let report = migrate::check(path)?;
            migrate::print_report(path, &report);
        }

        if *run_migrate {
            let added = migrate::migrate(path)?;
            if added.is_empty() {
                info("Configuration already up to date.");
            } else {
                success(format!("Added missing fields: {}", added.join(", ")));
            }
        }

        if *edit_config {
            edit(path, editor.clone());
        }
    }

    Ok(())
}

fn edit(path: &Path, requested: Option<String>) {
    let default_editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    let editor_to_use = requested.unwrap_or_else(|| default_editor.clone());

    match Command::new(&editor_to_use).arg(path).status() {
        Ok(s) if s.success() => {
            success(format!("Configuration file edited using '{editor_to_use}'"));
        }
        _ if editor_to_use != default_editor => {
            warning(format!(
                "Editor '{editor_to_use}' not available, falling back to '{default_editor}'"
            ));
            match Command::new(&default_editor).arg(path).status() {
                Ok(s) if s.success() => success(format!(
                    "Configuration file edited using fallback '{default_editor}'"
                )),
                _ => error(format!(
                    "Failed to edit configuration file using fallback '{default_editor}'"
                )),
            }
        }
        _ => error(format!("Failed to edit configuration file using '{editor_to_use}'")),
    }
}
