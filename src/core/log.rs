use crate::models::ActivityEntry;
use crate::utils::text::{strip_ansi, truncate_visible};
use ansi_term::Colour;

const MAX_OP_WIDTH: usize = 60;

/// ANSI color for each kind of activity.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "folder_add" => Colour::Cyan,
        "record_add" => Colour::Green,
        "scan" => Colour::Purple,
        "record_del" => Colour::Red,
        "export" => Colour::Blue,
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    /// Render the session activity log, one line per entry.
    pub fn render(entries: &[ActivityEntry]) -> Vec<String> {
        if entries.is_empty() {
            return Vec::new();
        }

        let op_w = entries
            .iter()
            .map(|e| op_target(e).chars().count())
            .max()
            .unwrap_or(10)
            .min(MAX_OP_WIDTH);
        let id_w = entries.len().to_string().len();

        entries
            .iter()
            .enumerate()
            .map(|(i, e)| {
                let color = color_for_operation(&e.operation);
                let visible = truncate_visible(&op_target(e), MAX_OP_WIDTH);

                // only the operation word is colored
                let colored = match visible.split_once(' ') {
                    Some((op, rest)) => format!("{} {}", color.paint(op), rest),
                    None => color.paint(visible.as_str()).to_string(),
                };
                let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&colored).chars().count()));

                format!(
                    "{:>id_w$}: {} | {}{} => {}",
                    i + 1,
                    e.at.format("%Y-%m-%dT%H:%M:%S"),
                    colored,
                    padding,
                    e.message,
                    id_w = id_w
                )
            })
            .collect()
    }

    pub fn print_log(entries: &[ActivityEntry]) {
        if entries.is_empty() {
            println!("📜 Activity log is empty.");
            return;
        }

        println!("📜 Activity log:\n");
        for line in Self::render(entries) {
            println!("{line}");
        }
    }
}

fn op_target(e: &ActivityEntry) -> String {
    if e.target.is_empty() {
        e.operation.clone()
    } else {
        format!("{} ({})", e.operation, e.target)
    }
}
