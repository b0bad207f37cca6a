// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{write_csv, write_json};
use crate::export::notify_export_success;
use crate::export::text::render_text;
use crate::models::day::WeekReport;
use crate::utils::path::expand_tilde;
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// High-level report output.
pub struct ExportLogic;

impl ExportLogic {
    /// Write the report to `file`, or to stdout when no file is given.
    pub fn write_report(
        report: &WeekReport,
        format: ExportFormat,
        file: Option<&str>,
        force: bool,
        show_weekday: &str,
    ) -> AppResult<()> {
        match file {
            None => {
                let stdout = io::stdout();
                Self::render_to(report, format, show_weekday, &mut stdout.lock())
            }
            Some(f) => {
                let path = expand_tilde(f);
                ensure_writable(&path, force)?;

                let mut out = BufWriter::new(File::create(&path)?);
                Self::render_to(report, format, show_weekday, &mut out)?;
                out.flush()?;

                notify_export_success(&format.as_str().to_uppercase(), &path);
                Ok(())
            }
        }
    }

    pub fn render_to<W: Write>(
        report: &WeekReport,
        format: ExportFormat,
        show_weekday: &str,
        out: &mut W,
    ) -> AppResult<()> {
        match format {
            ExportFormat::Text => out.write_all(render_text(report, show_weekday).as_bytes())?,
            ExportFormat::Json => write_json(report, out)?,
            ExportFormat::Csv => write_csv(report, out)?,
        }
        Ok(())
    }
}
