// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::model::{report_to_document, report_to_rows};
use crate::models::day::WeekReport;
use std::io::Write;

/// JSON pretty-printed.
pub(crate) fn write_json<W: Write>(report: &WeekReport, out: &mut W) -> AppResult<()> {
    serde_json::to_writer_pretty(&mut *out, &report_to_document(report))?;
    writeln!(out)?;
    Ok(())
}

/// CSV (header included thanks to serde).
pub(crate) fn write_csv<W: Write>(report: &WeekReport, out: W) -> AppResult<()> {
    let mut wtr = csv::Writer::from_writer(out);
    for row in report_to_rows(report) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}
