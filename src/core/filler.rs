//! Filler planner and submission loop.

use crate::api::{NewTimeEntry, TimeTrackingApi};
use crate::models::day::DayGaps;
use crate::models::filler::{FillerPlan, SourceRecord};
use crate::ui::messages::{step, warning};
use chrono_tz::Tz;

/// One plan per gap, attributed like the first record (earliest start) of
/// the same date. Dates without any source record are skipped.
pub fn plan_fillers(days: &[DayGaps], records: &[SourceRecord], label: &str) -> Vec<FillerPlan> {
    let mut plans = Vec::new();

    for day in days.iter().filter(|d| !d.gaps.is_empty()) {
        let Some(first) = records
            .iter()
            .filter(|r| r.date == day.date)
            .min_by_key(|r| r.start)
        else {
            continue;
        };

        plans.extend(day.gaps.iter().map(|gap| FillerPlan {
            date: day.date,
            gap: *gap,
            label: label.to_string(),
            attribution: first.attribution.clone(),
        }));
    }

    plans
}

#[derive(Debug, Default)]
pub struct FillSummary {
    pub created: Vec<FillerPlan>,
    pub failed: Vec<(FillerPlan, String)>,
}

impl FillSummary {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Create one entry per plan, in order. A failure is recorded and the loop
/// moves on to the next plan; nothing is retried.
pub async fn submit_fillers(
    api: &dyn TimeTrackingApi,
    workspace_id: &str,
    tz: Tz,
    plans: &[FillerPlan],
) -> FillSummary {
    let mut summary = FillSummary::default();

    for plan in plans {
        step(format!("Creating {}", plan.describe()));

        let result = match NewTimeEntry::from_plan(plan, tz) {
            Ok(body) => api.create_time_entry(workspace_id, &body).await.map(|_| ()),
            Err(e) => Err(e),
        };

        match result {
            Ok(()) => summary.created.push(plan.clone()),
            Err(e) => {
                warning(format!("POST failed for {}: {}", plan.describe(), e));
                summary.failed.push((plan.clone(), e.to_string()));
            }
        }
    }

    summary
}
