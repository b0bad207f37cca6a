use super::interval::MinuteSpan;
use chrono::NaiveDate;
use serde::Serialize;

/// Busy spans recorded on one local calendar date. Order is irrelevant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayBucket {
    pub spans: Vec<MinuteSpan>,
}

impl DayBucket {
    pub fn push(&mut self, span: MinuteSpan) {
        self.spans.push(span);
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}

/// Computed gaps for one date that had recorded activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayGaps {
    pub date: NaiveDate,
    pub busy_count: usize,
    pub gaps: Vec<MinuteSpan>,
}

impl DayGaps {
    pub fn total_minutes(&self) -> u32 {
        self.gaps.iter().map(MinuteSpan::len).sum()
    }
}

/// Everything the `preview` command reports for a week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekReport {
    pub monday: NaiveDate,
    pub sunday: NaiveDate,
    pub timezone: String,
    pub entry_count: usize,
    pub skipped: Vec<String>,
    pub days: Vec<DayGaps>,
}

impl WeekReport {
    pub fn total_gap_minutes(&self) -> u32 {
        self.days.iter().map(DayGaps::total_minutes).sum()
    }

    pub fn has_gaps(&self) -> bool {
        self.days.iter().any(|d| !d.gaps.is_empty())
    }
}
