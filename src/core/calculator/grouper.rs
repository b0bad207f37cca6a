//! Day grouper: partitions normalized intervals by local date and runs the
//! gap engine on each date independently.

use super::gaps::compute_gaps;
use super::normalizer::LocalInterval;
use crate::models::day::{DayBucket, DayGaps};
use crate::models::interval::WorkWindow;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// One bucket per date that has at least one busy interval.
pub fn group_by_day(intervals: &[LocalInterval]) -> BTreeMap<NaiveDate, DayBucket> {
    let mut grouped: BTreeMap<NaiveDate, DayBucket> = BTreeMap::new();
    for li in intervals {
        grouped.entry(li.date).or_default().push(li.span);
    }
    grouped
}

/// Gaps for every bucket, in ascending date order. Dates without a bucket
/// produce no row: no data is not the same as a free day.
pub fn compute_week_gaps(
    buckets: &BTreeMap<NaiveDate, DayBucket>,
    window: &WorkWindow,
) -> Vec<DayGaps> {
    buckets
        .iter()
        .map(|(date, bucket)| DayGaps {
            date: *date,
            busy_count: bucket.len(),
            gaps: compute_gaps(&bucket.spans, window),
        })
        .collect()
}
