use super::Config;
use crate::core::calculator::normalizer::MidnightPolicy;
use crate::errors::{AppError, AppResult};
use crate::models::interval::WorkWindow;
use crate::utils::time::{parse_minute_of_day, parse_optional_minute};
use chrono_tz::Tz;

/// Immutable, validated run parameters, built once at startup and passed
/// down by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub tz: Tz,
    pub window: WorkWindow,
    pub label: String,
    pub midnight: MidnightPolicy,
    pub show_weekday: String,
}

impl Settings {
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        let label = cfg.filler_description.trim();
        if label.is_empty() {
            return Err(AppError::Config(
                "filler_description must not be empty".to_string(),
            ));
        }

        Ok(Self {
            tz: parse_timezone(&cfg.timezone)?,
            window: parse_window(cfg)?,
            label: label.to_string(),
            midnight: if cfg.split_midnight {
                MidnightPolicy::Split
            } else {
                MidnightPolicy::StartDay
            },
            show_weekday: cfg.show_weekday.clone(),
        })
    }
}

pub fn parse_timezone(name: &str) -> AppResult<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| AppError::InvalidTimezone(name.to_string()))
}

pub fn parse_window(cfg: &Config) -> AppResult<WorkWindow> {
    let start = parse_minute_of_day(&cfg.work_start)?;
    let end = parse_minute_of_day(&cfg.work_end)?;

    let lunch_start = parse_optional_minute(cfg.lunch_start.as_ref())?;
    let lunch_end = parse_optional_minute(cfg.lunch_end.as_ref())?;
    let lunch = match (lunch_start, lunch_end) {
        (Some(s), Some(e)) => Some((s, e)),
        (None, None) => None,
        _ => {
            return Err(AppError::InvalidWindow(
                "lunch_start and lunch_end must be set together".to_string(),
            ));
        }
    };

    WorkWindow::new(start, end, lunch)
}
