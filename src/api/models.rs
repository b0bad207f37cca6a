//! Wire shapes of the time-tracking REST API.

use crate::errors::{AppError, AppResult};
use crate::models::filler::{Attribution, FillerPlan};
use crate::models::interval::TimeInterval;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

const API_INSTANT_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiUser {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub active_workspace: Option<String>,
    #[serde(default)]
    pub default_workspace: Option<String>,
}

impl ApiUser {
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .or(self.email.as_deref())
            .unwrap_or(&self.id)
    }

    /// Workspace to use when none is configured.
    pub fn fallback_workspace(&self) -> Option<&str> {
        self.active_workspace
            .as_deref()
            .or(self.default_workspace.as_deref())
            .map(str::trim)
            .filter(|w| !w.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdRef {
    #[serde(default)]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiTimeInterval {
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub task_id: Option<String>,
    #[serde(default)]
    pub project: Option<IdRef>,
    #[serde(default)]
    pub task: Option<IdRef>,
    #[serde(default)]
    pub billable: Option<bool>,
    #[serde(default)]
    pub time_interval: Option<ApiTimeInterval>,
}

impl TimeEntry {
    /// The entry's interval; `None` while the timer is still running.
    pub fn interval(&self) -> AppResult<Option<TimeInterval>> {
        let Some(ti) = self.time_interval.as_ref() else {
            return Ok(None);
        };
        let (Some(start), Some(end)) = (ti.start.as_deref(), ti.end.as_deref()) else {
            return Ok(None);
        };

        Ok(Some(TimeInterval::new(
            parse_api_instant(start, "timeInterval.start")?,
            parse_api_instant(end, "timeInterval.end")?,
        )))
    }

    pub fn attribution(&self) -> Attribution {
        Attribution {
            project_id: non_empty(self.project_id.as_deref())
                .or_else(|| non_empty(self.project.as_ref().and_then(|p| p.id.as_deref()))),
            task_id: non_empty(self.task_id.as_deref())
                .or_else(|| non_empty(self.task.as_ref().and_then(|t| t.id.as_deref()))),
            billable: self.billable.unwrap_or(true),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(ToOwned::to_owned)
}

/// Body of a create-entry request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTimeEntry {
    pub start: String,
    pub end: String,
    pub billable: bool,
    pub project_id: Option<String>,
    pub task_id: Option<String>,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl NewTimeEntry {
    pub fn from_plan(plan: &FillerPlan, tz: Tz) -> AppResult<Self> {
        let (start, end) = plan.bounds(tz)?;
        Ok(Self {
            start: format_api_instant(start),
            end: format_api_instant(end),
            billable: plan.attribution.billable,
            project_id: plan.attribution.project_id.clone(),
            task_id: plan.attribution.task_id.clone(),
            description: plan.label.clone(),
            kind: "REGULAR".to_string(),
        })
    }
}

pub fn format_api_instant(dt: DateTime<Utc>) -> String {
    dt.format(API_INSTANT_FORMAT).to_string()
}

/// Parse any RFC 3339 instant (any offset) into UTC.
pub fn parse_api_instant(value: &str, field: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|error| AppError::Payload(format!("invalid {field} '{value}': {error}")))
}
