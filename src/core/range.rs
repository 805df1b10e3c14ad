//! Resolution of a view mode + anchor date into the inclusive date range
//! the table displays. Pure and total: every mode resolves for every
//! anchor.

use crate::models::view_mode::ViewMode;
use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Days shown on each side of the anchor in AroundDay mode.
pub const AROUND_DAY_SPAN: i64 = 10;

/// Inclusive date range, start <= end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ViewRange {
    pub fn day_count(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// All dates of the range, ascending.
    pub fn dates(&self) -> Vec<NaiveDate> {
        crate::utils::date::days_between(self.start, self.end)
    }
}

pub fn resolve(mode: ViewMode, anchor: NaiveDate) -> ViewRange {
    match mode {
        ViewMode::Day => ViewRange {
            start: anchor,
            end: anchor,
        },
        ViewMode::AroundDay => ViewRange {
            start: anchor - Duration::days(AROUND_DAY_SPAN),
            end: anchor + Duration::days(AROUND_DAY_SPAN),
        },
        ViewMode::Week => {
            let week = anchor.iso_week();
            ViewRange {
                start: NaiveDate::from_isoywd_opt(week.year(), week.week(), Weekday::Mon).unwrap(),
                end: NaiveDate::from_isoywd_opt(week.year(), week.week(), Weekday::Sun).unwrap(),
            }
        }
        ViewMode::Month => {
            let start = anchor.with_day(1).unwrap();
            // Last day of month: day 28 exists in every month, so jump
            // past the boundary and back up by the overshoot.
            let next_month = anchor.with_day(28).unwrap() + Duration::days(4);
            let end = next_month - Duration::days(next_month.day() as i64);
            ViewRange { start, end }
        }
    }
}
