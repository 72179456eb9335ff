use crate::config::Config;
use crate::core::{Flow, SessionShell};
use crate::errors::AppResult;
use crate::ui::messages::{error, header, info};
use std::io::{self, BufRead, Write};

/// Interactive session on stdin. Folders live until the session ends.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut shell = SessionShell::from_config(cfg);

    header("rAttendance session");
    info("Type 'help' for commands, 'quit' to leave. Folders are not saved.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{}", shell.prompt());
        io::stdout().flush().ok();

        let Some(line) = lines.next() else {
            println!();
            break;
        };

        match shell.feed_line(&line?) {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            Err(e) => error(e),
        }
    }

    Ok(())
}
