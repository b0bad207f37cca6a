//! Interval normalizer: absolute instants → (local date, minute-of-day span)
//! in the reference time zone.

use crate::models::interval::{MINUTES_PER_DAY, MinuteSpan, TimeInterval};
use crate::utils::time::minute_of_day;
use chrono::{DateTime, Duration, NaiveDate};
use chrono_tz::Tz;

/// How an interval crossing local midnight is attributed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MidnightPolicy {
    /// Keep the whole interval on its start date, ending at 24:00.
    #[default]
    StartDay,
    /// Cut the interval at every local midnight.
    Split,
}

/// One busy span on one local date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalInterval {
    pub date: NaiveDate,
    pub span: MinuteSpan,
    /// Index of the originating interval in the normalizer input.
    pub source: usize,
}

/// An input interval that could not be normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedInterval {
    pub source: usize,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Normalized {
    pub intervals: Vec<LocalInterval>,
    pub rejected: Vec<RejectedInterval>,
}

pub fn normalize(intervals: &[TimeInterval], tz: Tz, policy: MidnightPolicy) -> Normalized {
    let mut out = Normalized::default();

    for (source, iv) in intervals.iter().enumerate() {
        if !iv.is_well_formed() {
            out.rejected.push(RejectedInterval {
                source,
                reason: format!(
                    "end {} is not after start {}",
                    iv.end.to_rfc3339(),
                    iv.start.to_rfc3339()
                ),
            });
            continue;
        }

        let start = iv.start.with_timezone(&tz);
        let end = iv.end.with_timezone(&tz);
        push_local(&mut out.intervals, source, start, end, policy);
    }

    out
}

fn push_local(
    out: &mut Vec<LocalInterval>,
    source: usize,
    start: DateTime<Tz>,
    end: DateTime<Tz>,
    policy: MidnightPolicy,
) {
    let start_date = start.date_naive();
    let end_date = end.date_naive();
    let start_m = minute_of_day(start.time());
    let end_m = minute_of_day(end.time());

    if end_date == start_date {
        // a repeated DST hour can put the wall-clock end before the start
        out.push(LocalInterval {
            date: start_date,
            span: MinuteSpan::new(start_m, end_m.max(start_m)),
            source,
        });
        return;
    }

    match policy {
        MidnightPolicy::StartDay => out.push(LocalInterval {
            date: start_date,
            span: MinuteSpan::new(start_m, MINUTES_PER_DAY),
            source,
        }),
        MidnightPolicy::Split => {
            out.push(LocalInterval {
                date: start_date,
                span: MinuteSpan::new(start_m, MINUTES_PER_DAY),
                source,
            });

            let mut day = start_date + Duration::days(1);
            while day < end_date {
                out.push(LocalInterval {
                    date: day,
                    span: MinuteSpan::new(0, MINUTES_PER_DAY),
                    source,
                });
                day += Duration::days(1);
            }

            if end_m > 0 {
                out.push(LocalInterval {
                    date: end_date,
                    span: MinuteSpan::new(0, end_m),
                    source,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    fn utc(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s)
            .expect("valid datetime")
            .with_timezone(&Utc)
    }

    fn iv(s: &str, e: &str) -> TimeInterval {
        TimeInterval::new(utc(s), utc(e))
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn converts_to_reference_zone_minutes() {
        // 01:00Z-02:30Z is 09:00-10:30 in Manila (UTC+8)
        let n = normalize(
            &[iv("2025-06-02T01:00:00Z", "2025-06-02T02:30:00Z")],
            chrono_tz::Asia::Manila,
            MidnightPolicy::StartDay,
        );

        assert!(n.rejected.is_empty());
        assert_eq!(
            n.intervals,
            vec![LocalInterval {
                date: date(2025, 6, 2),
                span: MinuteSpan::new(540, 630),
                source: 0,
            }]
        );
    }

    #[test]
    fn local_date_can_differ_from_utc_date() {
        // 2025-06-01T17:00Z is already Monday 01:00 in Manila
        let n = normalize(
            &[iv("2025-06-01T17:00:00Z", "2025-06-01T18:00:00Z")],
            chrono_tz::Asia::Manila,
            MidnightPolicy::StartDay,
        );
        assert_eq!(n.intervals[0].date, date(2025, 6, 2));
        assert_eq!(n.intervals[0].span, MinuteSpan::new(60, 120));
    }

    #[test]
    fn seconds_are_truncated() {
        let n = normalize(
            &[iv("2025-06-02T09:00:59Z", "2025-06-02T09:30:59Z")],
            chrono_tz::UTC,
            MidnightPolicy::StartDay,
        );
        assert_eq!(n.intervals[0].span, MinuteSpan::new(540, 570));
    }

    #[test]
    fn malformed_intervals_are_rejected_not_normalized() {
        let n = normalize(
            &[
                iv("2025-06-02T10:00:00Z", "2025-06-02T09:00:00Z"),
                iv("2025-06-02T10:00:00Z", "2025-06-02T10:00:00Z"),
                iv("2025-06-02T11:00:00Z", "2025-06-02T12:00:00Z"),
            ],
            chrono_tz::UTC,
            MidnightPolicy::StartDay,
        );

        assert_eq!(n.rejected.len(), 2);
        assert_eq!(n.rejected[0].source, 0);
        assert_eq!(n.rejected[1].source, 1);
        assert_eq!(n.intervals.len(), 1);
        assert_eq!(n.intervals[0].source, 2);
    }

    #[test]
    fn midnight_crossing_stays_on_start_day_by_default() {
        let n = normalize(
            &[iv("2025-06-02T22:00:00Z", "2025-06-03T01:00:00Z")],
            chrono_tz::UTC,
            MidnightPolicy::StartDay,
        );
        assert_eq!(
            n.intervals,
            vec![LocalInterval {
                date: date(2025, 6, 2),
                span: MinuteSpan::new(1320, 1440),
                source: 0,
            }]
        );
    }

    #[test]
    fn midnight_crossing_split_across_days() {
        let n = normalize(
            &[iv("2025-06-02T22:00:00Z", "2025-06-04T10:00:00Z")],
            chrono_tz::UTC,
            MidnightPolicy::Split,
        );

        let got: Vec<(NaiveDate, MinuteSpan)> =
            n.intervals.iter().map(|l| (l.date, l.span)).collect();
        assert_eq!(
            got,
            vec![
                (date(2025, 6, 2), MinuteSpan::new(1320, 1440)),
                (date(2025, 6, 3), MinuteSpan::new(0, 1440)),
                (date(2025, 6, 4), MinuteSpan::new(0, 600)),
            ]
        );
    }

    #[test]
    fn split_ending_exactly_at_midnight_adds_no_empty_piece() {
        let n = normalize(
            &[iv("2025-06-02T22:00:00Z", "2025-06-03T00:00:00Z")],
            chrono_tz::UTC,
            MidnightPolicy::Split,
        );
        assert_eq!(n.intervals.len(), 1);
        assert_eq!(n.intervals[0].span, MinuteSpan::new(1320, 1440));
    }

    #[test]
    fn repeated_dst_hour_never_inverts_the_span() {
        // 01:50 EDT → 01:10 EST on the night clocks go back
        let n = normalize(
            &[iv("2025-11-02T05:50:00Z", "2025-11-02T06:10:00Z")],
            chrono_tz::America::New_York,
            MidnightPolicy::StartDay,
        );
        assert_eq!(n.intervals[0].span, MinuteSpan::new(110, 110));
    }
}
