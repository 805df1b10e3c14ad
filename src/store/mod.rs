//! Sparse per-date record store. Dates with no entry are simply absent;
//! consumers degrade to empty rows rather than treating a miss as an
//! error.

pub mod json;
pub mod projects;
pub mod seed;

use crate::models::entry::TimeEntry;
use chrono::NaiveDate;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeRecordStore {
    days: BTreeMap<NaiveDate, TimeEntry>,
}

impl TimeRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (NaiveDate, TimeEntry)>,
    {
        Self {
            days: entries.into_iter().collect(),
        }
    }

    pub fn get(&self, date: NaiveDate) -> Option<&TimeEntry> {
        self.days.get(&date)
    }

    /// Entry for the date, created empty if absent.
    pub fn entry_mut(&mut self, date: NaiveDate) -> &mut TimeEntry {
        self.days.entry(date).or_default()
    }

    pub fn insert(&mut self, date: NaiveDate, entry: TimeEntry) {
        self.days.insert(date, entry);
    }

    pub fn remove(&mut self, date: NaiveDate) -> Option<TimeEntry> {
        self.days.remove(&date)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NaiveDate, &TimeEntry)> {
        self.days.iter()
    }
}
