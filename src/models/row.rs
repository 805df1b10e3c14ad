use chrono::{Duration, NaiveDate, NaiveTime};

/// Abstract highlighting class for a row. The rendering layer decides what
/// a class looks like; the core only classifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowClass {
    Today,
    Weekend,
    Normal,
}

impl RowClass {
    /// Classification depends on the date alone. Today wins over Weekend.
    pub fn classify(date: NaiveDate, today: NaiveDate) -> Self {
        use chrono::Datelike;
        if date == today {
            RowClass::Today
        } else if date.weekday().num_days_from_monday() >= 5 {
            RowClass::Weekend
        } else {
            RowClass::Normal
        }
    }
}

/// One displayable table row, derived per date. Recomputed on every
/// refresh; there is a row for every date in range whether or not a record
/// exists for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayRow {
    pub date: NaiveDate,
    pub iso_week: u32,
    pub weekday: String,
    pub came: Option<NaiveTime>,
    pub went: Option<NaiveTime>,
    pub total: Option<Duration>,
    pub note: String,
    pub class: RowClass,
}
