use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::filter::types::DateRange;

const LABEL_FORMAT: &str = "%-d %B %Y";
const TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Closed interval over timestamps: `start` and `end` are both inclusive, so
/// a window ending at `now` keeps a transaction stamped exactly `now`. An
/// absent side is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
}

impl DateWindow {
    pub fn contains(&self, timestamp: NaiveDateTime) -> bool {
        self.start.is_none_or(|start| timestamp >= start)
            && self.end.is_none_or(|end| timestamp <= end)
    }
}

/// Resolves a range against `now`. `None` means no date constraint.
///
/// An inverted custom range (`start > end`) resolves to `None`.
pub fn window_for(range: &DateRange, now: NaiveDateTime) -> Option<DateWindow> {
    let today = now.date();
    match *range {
        DateRange::All => None,
        DateRange::ThisMonth => Some(DateWindow {
            start: Some(start_of_day(month_start(today))),
            end: Some(now),
        }),
        DateRange::LastMonth => {
            let this_month = month_start(today);
            let previous_month = add_months_clamped(this_month, -1);
            let last_day = this_month - Duration::days(1);
            Some(DateWindow {
                start: Some(start_of_day(previous_month)),
                end: Some(end_of_day(last_day)),
            })
        }
        DateRange::Last3Months => Some(DateWindow {
            start: Some(start_of_day(add_months_clamped(month_start(today), -3))),
            end: Some(now),
        }),
        DateRange::Custom { start, end } => {
            if let (Some(first), Some(last)) = (start, end) {
                if first > last {
                    log::warn!(
                        "custom date range {} > {} is inverted; ignoring date filter",
                        format_iso_date(&first),
                        format_iso_date(&last)
                    );
                    return None;
                }
            }
            if start.is_none() && end.is_none() {
                return None;
            }
            Some(DateWindow {
                start: start.map(start_of_day),
                end: end.map(end_of_day),
            })
        }
    }
}

pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn add_months_clamped(date: NaiveDate, months: i32) -> NaiveDate {
    let current_month = i32::try_from(date.month()).unwrap_or(1);
    let mut raw_month = current_month + months;
    let mut year = date.year();

    while raw_month > 12 {
        raw_month -= 12;
        year += 1;
    }
    while raw_month < 1 {
        raw_month += 12;
        year -= 1;
    }

    let month_u32 = u32::try_from(raw_month).unwrap_or(1);
    let day = date.day().min(days_in_month(year, month_u32));
    NaiveDate::from_ymd_opt(year, month_u32, day).unwrap_or(date)
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 31,
    }
}

pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::default())
}

pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    match date.and_hms_nano_opt(23, 59, 59, 999_999_999) {
        Some(value) => value,
        None => start_of_day(date),
    }
}

/// Section heading for a statement day, e.g. `18 May 2023`.
pub fn format_date_label(date: NaiveDate) -> String {
    date.format(LABEL_FORMAT).to_string()
}

pub fn format_iso_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format("%Y-%m-%dT%H:%M:%S").to_string()
}

/// Strict `YYYY-MM-DD` with a real calendar date.
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if !looks_like_iso_date(trimmed) {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
}

/// Accepts a bare date (midnight) or a date-time with `T` or space separator.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if let Some(date) = parse_iso_date(trimmed) {
        return Some(start_of_day(date));
    }
    let Some(date_part) = trimmed.get(..10) else {
        return None;
    };
    if trimmed.len() < 11 || !looks_like_iso_date(date_part) {
        return None;
    }

    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
}

fn looks_like_iso_date(value: &str) -> bool {
    if value.len() != 10 {
        return false;
    }
    let bytes = value.as_bytes();
    if bytes[4] != b'-' || bytes[7] != b'-' {
        return false;
    }

    for index in [0usize, 1, 2, 3, 5, 6, 8, 9] {
        if !bytes[index].is_ascii_digit() {
            return false;
        }
    }
    true
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
