use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate, Weekday};
use chrono_tz::Tz;

/// Today's date in the reference zone.
pub fn today_in(tz: Tz) -> NaiveDate {
    chrono::Utc::now().with_timezone(&tz).date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Resolve the optional `DATE` argument; blank means today.
pub fn resolve_reference_date(input: Option<&str>, tz: Tz) -> AppResult<NaiveDate> {
    match input.map(str::trim).filter(|s| !s.is_empty()) {
        Some(s) => parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string())),
        None => Ok(today_in(tz)),
    }
}

/// Monday of the week containing `date`.
pub fn monday_of(date: NaiveDate) -> NaiveDate {
    date.week(Weekday::Mon).first_day()
}

/// Weekday label honoring the `show_weekday` option (None | Short | Medium | Long).
pub fn weekday_label(date: NaiveDate, style: &str) -> Option<String> {
    let wd = date.weekday();
    match style.to_ascii_lowercase().as_str() {
        "short" => Some(wd.to_string()[..2].to_string()),
        "medium" => Some(wd.to_string()),
        "long" => Some(long_name(wd).to_string()),
        _ => None,
    }
}

fn long_name(wd: Weekday) -> &'static str {
    match wd {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monday_of_any_weekday() {
        let sunday = NaiveDate::from_ymd_opt(2025, 6, 8).unwrap();
        let wednesday = NaiveDate::from_ymd_opt(2025, 6, 4).unwrap();
        let expected = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();

        assert_eq!(monday_of(sunday), expected);
        assert_eq!(monday_of(wednesday), expected);
        assert_eq!(monday_of(expected), expected);
    }

    #[test]
    fn invalid_reference_date_is_rejected() {
        let res = resolve_reference_date(Some("2025-13-01"), chrono_tz::UTC);
        assert!(matches!(res, Err(AppError::InvalidDate(_))));
    }

    #[test]
    fn blank_reference_date_means_today() {
        let res = resolve_reference_date(Some("   "), chrono_tz::UTC).unwrap();
        assert_eq!(res, today_in(chrono_tz::UTC));
    }

    #[test]
    fn weekday_styles() {
        let d = NaiveDate::from_ymd_opt(2025, 6, 4).unwrap();
        assert_eq!(weekday_label(d, "Short").as_deref(), Some("We"));
        assert_eq!(weekday_label(d, "Medium").as_deref(), Some("Wed"));
        assert_eq!(weekday_label(d, "Long").as_deref(), Some("Wednesday"));
        assert_eq!(weekday_label(d, "None"), None);
    }
}
