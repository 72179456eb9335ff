use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{Flow, SessionShell};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, warning};
use crate::utils::path::expand_tilde;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};

/// Run a script of session commands against a fresh ledger.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Run { script, strict } = cmd {
        let file = File::open(expand_tilde(script))?;
        let mut shell = SessionShell::from_config(cfg);
        let mut failures = 0usize;

        for (n, line) in BufReader::new(file).lines().enumerate() {
            let result = match line {
                Ok(line) => shell.feed_line(&line),
                // undecodable bytes only spoil their own line
                Err(e) if e.kind() == ErrorKind::InvalidData => Err(AppError::from(e)),
                Err(e) => return Err(e.into()),
            };

            match result {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(e) if *strict => {
                    return Err(AppError::Command(format!("{script}:{}: {e}", n + 1)));
                }
                Err(e) => {
                    failures += 1;
                    error(format!("{script}:{}: {e}", n + 1));
                }
            }
        }

        if failures > 0 {
            warning(format!("{failures} line(s) failed."));
        }
    }

    Ok(())
}
