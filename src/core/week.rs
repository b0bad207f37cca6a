//! Week pipeline: fetch → normalize → group by day → gaps.

use crate::api::{TimeEntry, TimeTrackingApi};
use crate::config::Settings;
use crate::core::calculator::grouper::{compute_week_gaps, group_by_day};
use crate::core::calculator::normalizer::{LocalInterval, normalize};
use crate::errors::{AppError, AppResult};
use crate::models::day::WeekReport;
use crate::models::filler::SourceRecord;
use crate::utils::date::monday_of;
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;

/// Monday–Sunday calendar week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Week {
    pub monday: NaiveDate,
    pub sunday: NaiveDate,
}

impl Week {
    pub fn containing(date: NaiveDate) -> Self {
        let monday = monday_of(date);
        Self {
            monday,
            sunday: monday + Duration::days(6),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.monday <= date && date <= self.sunday
    }

    /// Local Monday 00:00 up to the following Monday 00:00, as UTC instants.
    pub fn utc_bounds(&self, tz: Tz) -> AppResult<(DateTime<Utc>, DateTime<Utc>)> {
        Ok((
            local_midnight(self.monday, tz)?,
            local_midnight(self.sunday + Duration::days(1), tz)?,
        ))
    }
}

fn local_midnight(date: NaiveDate, tz: Tz) -> AppResult<DateTime<Utc>> {
    // a zone may skip midnight on DST days; take the first valid instant
    // of that day in that case
    let day = date.and_hms_opt(0, 0, 0).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
    (0..=120)
        .find_map(|m| tz.from_local_datetime(&(day + Duration::minutes(m))).earliest())
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| AppError::InvalidDate(format!("{date} has no midnight in {}", tz.name())))
}

/// Report plus the records the filler planner copies attribution from.
#[derive(Debug, Clone)]
pub struct WeekData {
    pub report: WeekReport,
    pub records: Vec<SourceRecord>,
}

/// Fetch the week's entries and compute its gaps. A failed fetch halts the run.
pub async fn load_week(
    api: &dyn TimeTrackingApi,
    settings: &Settings,
    workspace_id: &str,
    user_id: &str,
    week: Week,
) -> AppResult<WeekData> {
    let (start, end) = week.utc_bounds(settings.tz)?;
    let entries = api
        .list_time_entries(workspace_id, user_id, start, end)
        .await?;
    Ok(build_week(&entries, settings, week))
}

pub fn build_week(entries: &[TimeEntry], settings: &Settings, week: Week) -> WeekData {
    let mut accepted: Vec<&TimeEntry> = Vec::new();
    let mut intervals = Vec::new();
    let mut skipped = Vec::new();

    for entry in entries {
        match entry.interval() {
            Ok(Some(iv)) => {
                accepted.push(entry);
                intervals.push(iv);
            }
            Ok(None) => skipped.push(format!("{}: running timer, no end", entry_label(entry))),
            Err(e) => skipped.push(format!("{}: {}", entry_label(entry), e)),
        }
    }

    let normalized = normalize(&intervals, settings.tz, settings.midnight);
    skipped.extend(
        normalized
            .rejected
            .iter()
            .map(|r| format!("{}: {}", entry_label(accepted[r.source]), r.reason)),
    );

    let in_week: Vec<LocalInterval> = normalized
        .intervals
        .into_iter()
        .filter(|li| week.contains(li.date))
        .collect();

    let buckets = group_by_day(&in_week);
    let days = compute_week_gaps(&buckets, &settings.window);

    let records = in_week
        .iter()
        .map(|li| SourceRecord {
            date: li.date,
            start: intervals[li.source].start,
            attribution: accepted[li.source].attribution(),
        })
        .collect();

    WeekData {
        report: WeekReport {
            monday: week.monday,
            sunday: week.sunday,
            timezone: settings.tz.name().to_string(),
            entry_count: entries.len(),
            skipped,
            days,
        },
        records,
    }
}

fn entry_label(entry: &TimeEntry) -> String {
    entry
        .id
        .clone()
        .unwrap_or_else(|| "<entry without id>".to_string())
}
