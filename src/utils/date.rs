use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// ISO-8601 week number of the date (1..=53).
pub fn iso_week(date: NaiveDate) -> u32 {
    date.iso_week().week()
}

/// Full English weekday name ("Monday", ...).
pub fn weekday_name(date: NaiveDate) -> String {
    date.format("%A").to_string()
}

/// All dates of the inclusive range, ascending.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let mut d = start;

    while d <= end {
        out.push(d);
        d = d.succ_opt().unwrap();
    }

    out
}
