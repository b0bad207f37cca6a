use crate::errors::{AppError, AppResult};
use crate::utils::time::to_hhmm;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Minutes in a calendar day. Also the largest legal end-of-span value.
pub const MINUTES_PER_DAY: u32 = 1440;

/// A recorded activity, as two absolute instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeInterval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeInterval {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// `true` when the interval honours `start < end`.
    pub fn is_well_formed(&self) -> bool {
        self.start < self.end
    }
}

/// Minute-of-day span for one calendar day, `start <= end <= 1440`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct MinuteSpan {
    pub start: u32,
    pub end: u32,
}

impl MinuteSpan {
    pub fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end, "span start {start} after end {end}");
        Self { start, end }
    }

    pub fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Strict overlap: spans that only touch do not overlap, and an empty
    /// span overlaps nothing.
    pub fn overlaps(&self, other: &MinuteSpan) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.start < other.end
            && other.start < self.end
    }

    pub fn contains(&self, other: &MinuteSpan) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

impl fmt::Display for MinuteSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", to_hhmm(self.start), to_hhmm(self.end))
    }
}

/// Working hours of a day plus an optional always-busy break (lunch).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkWindow {
    pub start: u32,
    pub end: u32,
    pub lunch: Option<MinuteSpan>,
}

impl WorkWindow {
    /// Validate and build a window.
    ///
    /// The break only has to be a non-empty span inside the day; a break that
    /// sticks out of the window is clipped by the gap engine.
    pub fn new(start: u32, end: u32, lunch: Option<(u32, u32)>) -> AppResult<Self> {
        if start >= end || end > MINUTES_PER_DAY {
            return Err(AppError::InvalidWindow(format!(
                "working hours {}-{} must satisfy start < end <= 24:00",
                to_hhmm(start),
                to_hhmm(end)
            )));
        }

        let lunch = match lunch {
            Some((ls, le)) if ls >= le || le > MINUTES_PER_DAY => {
                return Err(AppError::InvalidWindow(format!(
                    "break {}-{} must satisfy start < end <= 24:00",
                    to_hhmm(ls),
                    to_hhmm(le)
                )));
            }
            Some((ls, le)) => Some(MinuteSpan::new(ls, le)),
            None => None,
        };

        Ok(Self { start, end, lunch })
    }

    pub fn span(&self) -> MinuteSpan {
        MinuteSpan::new(self.start, self.end)
    }

    /// Break clipped to the window, or `None` when nothing of it is left.
    pub fn clipped_lunch(&self) -> Option<MinuteSpan> {
        let lunch = self.lunch?;
        let s = lunch.start.max(self.start);
        let e = lunch.end.min(self.end);
        (s < e).then(|| MinuteSpan::new(s, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_rejects_inverted_bounds() {
        assert!(WorkWindow::new(1080, 540, None).is_err());
        assert!(WorkWindow::new(540, 540, None).is_err());
        assert!(WorkWindow::new(0, 1441, None).is_err());
    }

    #[test]
    fn window_rejects_empty_break() {
        assert!(WorkWindow::new(540, 1080, Some((780, 720))).is_err());
        assert!(WorkWindow::new(540, 1080, Some((720, 720))).is_err());
    }

    #[test]
    fn lunch_is_clipped_to_window() {
        let w = WorkWindow::new(750, 1080, Some((720, 780))).unwrap();
        assert_eq!(w.clipped_lunch(), Some(MinuteSpan::new(750, 780)));

        let outside = WorkWindow::new(840, 1080, Some((720, 780))).unwrap();
        assert_eq!(outside.clipped_lunch(), None);
    }

    #[test]
    fn touching_spans_do_not_overlap() {
        let a = MinuteSpan::new(540, 600);
        let b = MinuteSpan::new(600, 660);
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&MinuteSpan::new(599, 601)));
    }

    #[test]
    fn empty_span_overlaps_nothing() {
        let gap = MinuteSpan::new(243, 748);
        let point = MinuteSpan::new(747, 747);
        assert!(!point.overlaps(&gap));
        assert!(!gap.overlaps(&point));
    }

    #[test]
    fn span_displays_as_hhmm_range() {
        assert_eq!(MinuteSpan::new(600, 1440).to_string(), "10:00-24:00");
    }
}
