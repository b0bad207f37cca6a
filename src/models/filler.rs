use super::interval::{MINUTES_PER_DAY, MinuteSpan};
use crate::errors::{AppError, AppResult};
use crate::utils::time::to_hhmm;
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::Serialize;

/// Project/task/billable fields copied from an existing record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribution {
    pub project_id: Option<String>,
    pub task_id: Option<String>,
    pub billable: bool,
}

impl Default for Attribution {
    fn default() -> Self {
        Self {
            project_id: None,
            task_id: None,
            billable: true,
        }
    }
}

/// A fetched record reduced to what the planner needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRecord {
    pub date: NaiveDate,
    pub start: DateTime<Utc>,
    pub attribution: Attribution,
}

/// One synthetic entry to create for a gap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FillerPlan {
    pub date: NaiveDate,
    pub gap: MinuteSpan,
    pub label: String,
    pub attribution: Attribution,
}

impl FillerPlan {
    /// Convert the planned gap back to absolute instants in `tz`.
    pub fn bounds(&self, tz: Tz) -> AppResult<(DateTime<Utc>, DateTime<Utc>)> {
        Ok((
            local_minute_to_utc(self.date, self.gap.start, tz)?,
            local_minute_to_utc(self.date, self.gap.end, tz)?,
        ))
    }

    pub fn describe(&self) -> String {
        format!("{} {} ({})", self.label, self.gap, self.date)
    }
}

fn local_minute_to_utc(date: NaiveDate, minute: u32, tz: Tz) -> AppResult<DateTime<Utc>> {
    // 24:00 is midnight of the following day
    let (day, minute) = if minute >= MINUTES_PER_DAY {
        (date + Duration::days(1), minute - MINUTES_PER_DAY)
    } else {
        (date, minute)
    };

    let time = NaiveTime::from_hms_opt(minute / 60, minute % 60, 0)
        .ok_or_else(|| AppError::InvalidTime(to_hhmm(minute)))?;

    tz.from_local_datetime(&day.and_time(time))
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| {
            AppError::InvalidTime(format!(
                "{} {} does not exist in {}",
                day,
                to_hhmm(minute),
                tz.name()
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(date: NaiveDate, start: u32, end: u32) -> FillerPlan {
        FillerPlan {
            date,
            gap: MinuteSpan::new(start, end),
            label: "filler".into(),
            attribution: Attribution::default(),
        }
    }

    #[test]
    fn bounds_are_converted_from_reference_zone() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        let (s, e) = plan(date, 600, 660).bounds(chrono_tz::Asia::Manila).unwrap();

        assert_eq!(s.to_rfc3339(), "2025-06-02T02:00:00+00:00");
        assert_eq!(e.to_rfc3339(), "2025-06-02T03:00:00+00:00");
    }

    #[test]
    fn end_of_day_maps_to_next_midnight() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        let (_, e) = plan(date, 1380, 1440).bounds(chrono_tz::UTC).unwrap();

        assert_eq!(e.to_rfc3339(), "2025-06-03T00:00:00+00:00");
    }

    #[test]
    fn nonexistent_local_time_is_an_error() {
        // 2025-03-09 02:30 does not exist in New York (spring forward)
        let date = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        let res = plan(date, 150, 200).bounds(chrono_tz::America::New_York);

        assert!(matches!(res, Err(AppError::InvalidTime(_))));
    }
}
