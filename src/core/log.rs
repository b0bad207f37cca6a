//! Internal operation log: one JSON object per line, appended by `ttlog`
//! and printed by `log --print`.

use crate::errors::AppResult;
use crate::ui::messages::info;
use ansi_term::Colour;
use chrono::Local;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::OnceLock;

const MAX_OP_WIDTH: usize = 60;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub date: String,
    pub operation: String,
    #[serde(default)]
    pub target: String,
    pub message: String,
}

/// Append one line to the operation log, creating the file if needed.
pub fn ttlog(path: &Path, operation: &str, target: &str, message: &str) -> AppResult<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }

    let entry = LogEntry {
        date: Local::now().to_rfc3339(),
        operation: operation.to_string(),
        target: target.to_string(),
        message: message.to_string(),
    };

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", serde_json::to_string(&entry)?)?;
    Ok(())
}

/// Read all entries; unreadable lines are skipped.
pub fn read_log(path: &Path) -> AppResult<Vec<LogEntry>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .filter(|l| !l.trim().is_empty())
        .filter_map(|l| serde_json::from_str(l).ok())
        .collect())
}

fn ansi_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("static ANSI pattern"))
}

fn strip_ansi(s: &str) -> String {
    ansi_re().replace_all(s, "").into_owned()
}

/// Return the ANSI color for an operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "fill" => Colour::Green,
        "fill_failed" => Colour::Red,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

/// `op (target)` with only the operation colored, cut to `MAX_OP_WIDTH`
/// visible characters.
fn render_operation(entry: &LogEntry) -> String {
    let color = color_for_operation(&entry.operation);
    let plain = if entry.target.is_empty() {
        entry.operation.clone()
    } else {
        format!("{} ({})", entry.operation, entry.target)
    };

    let visible = if plain.chars().count() > MAX_OP_WIDTH {
        let mut s: String = plain.chars().take(MAX_OP_WIDTH - 3).collect();
        s.push_str("...");
        s
    } else {
        plain
    };

    match visible.split_once(' ') {
        Some((op, rest)) => format!("{} {}", color.paint(op), rest),
        None => color.paint(visible.as_str()).to_string(),
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn format_log(entries: &[LogEntry]) -> Vec<String> {
        let op_w = entries
            .iter()
            .map(|e| strip_ansi(&render_operation(e)).chars().count())
            .max()
            .unwrap_or(0);
        let id_w = entries.len().to_string().len();
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(0);

        entries
            .iter()
            .enumerate()
            .map(|(i, e)| {
                let op = render_operation(e);
                let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&op).chars().count()));
                format!(
                    "{:>id_w$}: {:<date_w$} | {}{} => {}",
                    i + 1,
                    e.date,
                    op,
                    padding,
                    e.message,
                    id_w = id_w,
                    date_w = date_w
                )
            })
            .collect()
    }

    pub fn print_log(path: &Path) -> AppResult<()> {
        let entries = read_log(path)?;
        if entries.is_empty() {
            info(format!("Operation log is empty ({})", path.display()));
            return Ok(());
        }

        println!("📜 Internal log:\n");
        for line in Self::format_log(&entries) {
            println!("{line}");
        }
        Ok(())
    }
}
