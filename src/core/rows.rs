//! Projection of a date plus its (possibly absent) record into a display
//! row. Total over its inputs: a missing record degrades to absent
//! fields, never an error.

use crate::models::entry::TimeEntry;
use crate::models::row::{DayRow, RowClass};
use crate::utils::date::{iso_week, weekday_name};
use chrono::NaiveDate;

pub fn project(date: NaiveDate, entry: Option<&TimeEntry>, today: NaiveDate) -> DayRow {
    let (came, went, note) = match entry {
        Some(e) => (e.came, e.went, e.note.clone()),
        None => (None, None, String::new()),
    };

    // Signed, unwrapped difference: only defined with both endpoints.
    let total = match (came, went) {
        (Some(c), Some(w)) => Some(w.signed_duration_since(c)),
        _ => None,
    };

    DayRow {
        date,
        iso_week: iso_week(date),
        weekday: weekday_name(date),
        came,
        went,
        total,
        note,
        class: RowClass::classify(date, today),
    }
}
