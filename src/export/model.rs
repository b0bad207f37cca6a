// src/export/model.rs

use crate::models::day::{DayGaps, WeekReport};
use crate::models::interval::MinuteSpan;
use crate::utils::date::weekday_label;
use crate::utils::time::to_hhmm;
use serde::Serialize;

/// Flat row, one per gap (CSV).
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct GapExport {
    pub date: String,
    pub weekday: String,
    pub start: String,
    pub end: String,
    pub minutes: u32,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct SpanExport {
    pub start: String,
    pub end: String,
    pub minutes: u32,
}

impl From<&MinuteSpan> for SpanExport {
    fn from(span: &MinuteSpan) -> Self {
        Self {
            start: to_hhmm(span.start),
            end: to_hhmm(span.end),
            minutes: span.len(),
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct DayExport {
    pub date: String,
    pub weekday: String,
    pub busy_entries: usize,
    pub gap_minutes: u32,
    pub gaps: Vec<SpanExport>,
}

/// Nested document (JSON).
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ReportExport {
    pub week_start: String,
    pub week_end: String,
    pub timezone: String,
    pub entries: usize,
    pub skipped: Vec<String>,
    pub gap_minutes: u32,
    pub days: Vec<DayExport>,
}

fn long_weekday(day: &DayGaps) -> String {
    weekday_label(day.date, "Long").unwrap_or_default()
}

pub(crate) fn report_to_rows(report: &WeekReport) -> Vec<GapExport> {
    report
        .days
        .iter()
        .flat_map(|day| {
            day.gaps.iter().map(move |gap| GapExport {
                date: day.date.to_string(),
                weekday: long_weekday(day),
                start: to_hhmm(gap.start),
                end: to_hhmm(gap.end),
                minutes: gap.len(),
            })
        })
        .collect()
}

pub(crate) fn report_to_document(report: &WeekReport) -> ReportExport {
    ReportExport {
        week_start: report.monday.to_string(),
        week_end: report.sunday.to_string(),
        timezone: report.timezone.clone(),
        entries: report.entry_count,
        skipped: report.skipped.clone(),
        gap_minutes: report.total_gap_minutes(),
        days: report
            .days
            .iter()
            .map(|day| DayExport {
                date: day.date.to_string(),
                weekday: long_weekday(day),
                busy_entries: day.busy_count,
                gap_minutes: day.total_minutes(),
                gaps: day.gaps.iter().map(SpanExport::from).collect(),
            })
            .collect(),
    }
}
