// src/export/mod.rs

mod fs_utils;
mod json_csv;
pub mod logic;
mod model;
mod text;

pub use logic::ExportLogic;
pub use model::{DayExport, GapExport, ReportExport, SpanExport};
pub use text::render_text;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Common completion message for file exports.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Text,
    Json,
    Csv,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Text => "text",
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }
}
