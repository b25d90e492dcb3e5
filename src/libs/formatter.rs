//! Conversions between command-line text and domain values.

use crate::db::codec::{self, DATETIME_FORMAT, DATE_FORMAT};
use chrono::{Duration, Local, NaiveDate, NaiveDateTime};

/// `hh:mm` for tables; negative values are shown as zero.
pub fn format_duration(duration: &Duration) -> String {
    let hours = duration.num_hours();
    let mins = duration.num_minutes() % 60;
    format!("{:02}:{:02}", hours.max(0), mins.max(0))
}

/// Minutes with at most one decimal, without a trailing `.0`.
pub fn format_minutes(minutes: f64) -> String {
    let rounded = (minutes * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{:.0}", rounded)
    } else {
        format!("{:.1}", rounded)
    }
}

pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn format_datetime(at: &NaiveDateTime) -> String {
    at.format(DATETIME_FORMAT).to_string()
}

/// `YYYY-MM-DD` or `today`.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.eq_ignore_ascii_case("today") {
        return Some(Local::now().date_naive());
    }
    NaiveDate::parse_from_str(text, DATE_FORMAT).ok()
}

/// `YYYY-MM-DD HH:MM`, or `HH:MM` meaning today at that time.
pub fn parse_datetime(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    if let Ok(at) = NaiveDateTime::parse_from_str(text, DATETIME_FORMAT) {
        return Some(at);
    }
    let time = chrono::NaiveTime::parse_from_str(text, "%H:%M").ok()?;
    Some(Local::now().date_naive().and_time(time))
}

/// A plain number is minutes; anything else uses the data file's
/// `[d.]hh:mm[:ss]` notation.
pub fn parse_duration(text: &str) -> Option<Duration> {
    let text = text.trim();
    if let Ok(minutes) = text.parse::<u32>() {
        return Some(Duration::minutes(i64::from(minutes)));
    }
    if !text.contains(':') {
        return None;
    }
    codec::parse_duration(text)
}
