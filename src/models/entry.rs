use chrono::NaiveTime;
use serde::Serialize;

/// A single day's record: when the user came, when they went, and a
/// free-text note. Either time may be missing (half-filled day); the note
/// is always present, empty when unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TimeEntry {
    pub came: Option<NaiveTime>,
    pub went: Option<NaiveTime>,
    pub note: String,
}

impl TimeEntry {
    pub fn new(came: Option<NaiveTime>, went: Option<NaiveTime>, note: impl Into<String>) -> Self {
        Self {
            came,
            went,
            note: note.into(),
        }
    }

    /// A day counts as complete only when both endpoints are recorded.
    pub fn is_complete(&self) -> bool {
        self.came.is_some() && self.went.is_some()
    }
}
