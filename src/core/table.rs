//! The stateful table aggregate: holds the record store and the session's
//! view mode + anchor date, and materializes one display row per date of
//! the resolved range.

use crate::core::range::{self, ViewRange};
use crate::core::rows;
use crate::models::row::DayRow;
use crate::models::view_mode::ViewMode;
use crate::session::SessionSettings;
use crate::store::TimeRecordStore;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// Emitted by every recompute so the caller can derive a period label.
/// Replaces a GUI change signal: the row cache is fully rebuilt before
/// this value is returned, so observers never see a partial view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeChange {
    pub anchor: NaiveDate,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// A single field-level edit on one date's record.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEdit {
    Came(NaiveTime),
    Went(NaiveTime),
    Note(String),
}

pub struct TableCore {
    settings: SessionSettings,
    store: TimeRecordStore,
    rows: Vec<DayRow>,
}

impl TableCore {
    /// The store is owned by the table and passed in explicitly; there is
    /// no process-wide record state.
    pub fn new(store: TimeRecordStore, settings: SessionSettings) -> Self {
        let mut core = Self {
            settings,
            store,
            rows: Vec::new(),
        };
        core.refresh();
        core
    }

    pub fn rows(&self) -> &[DayRow] {
        &self.rows
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut SessionSettings {
        &mut self.settings
    }

    pub fn store(&self) -> &TimeRecordStore {
        &self.store
    }

    pub fn view_mode(&self) -> ViewMode {
        self.settings.view_mode
    }

    pub fn anchor(&self) -> NaiveDate {
        self.settings.view_date
    }

    /// Hand the owned state back, e.g. for persisting both parts.
    pub fn into_parts(self) -> (TimeRecordStore, SessionSettings) {
        (self.store, self.settings)
    }

    fn current_range(&self) -> ViewRange {
        range::resolve(self.settings.view_mode, self.settings.view_date)
    }

    /// Rebuild the row cache for the current view: one row per date of
    /// the resolved range, ascending, missing records degrading to empty
    /// rows. The cache is replaced wholesale before returning.
    pub fn refresh(&mut self) -> RangeChange {
        let range = self.current_range();
        let today = crate::utils::date::today();

        self.rows = range
            .dates()
            .into_iter()
            .map(|date| rows::project(date, self.store.get(date), today))
            .collect();

        RangeChange {
            anchor: self.settings.view_date,
            start: range.start,
            end: range.end,
        }
    }

    /// No-op when the mode is unchanged: no recompute, no notification.
    pub fn set_view_mode(&mut self, mode: ViewMode) -> Option<RangeChange> {
        if mode == self.settings.view_mode {
            return None;
        }
        self.settings.view_mode = mode;
        Some(self.refresh())
    }

    pub fn set_anchor(&mut self, date: NaiveDate) -> RangeChange {
        self.settings.view_date = date;
        self.refresh()
    }

    pub fn jump_to_today(&mut self, today: NaiveDate) -> RangeChange {
        self.set_anchor(today)
    }

    /// Page one step forward or backward. Day and AroundDay move the
    /// anchor by a single day; Week and Month re-anchor just past the
    /// resolved range boundary, so the next refresh lands on the full
    /// adjacent period whatever its length.
    pub fn page(&mut self, forward: bool) -> RangeChange {
        let anchor = match self.settings.view_mode {
            ViewMode::Day | ViewMode::AroundDay => {
                let step = if forward { 1 } else { -1 };
                self.settings.view_date + Duration::days(step)
            }
            ViewMode::Week | ViewMode::Month => {
                let range = self.current_range();
                if forward {
                    range.end + Duration::days(1)
                } else {
                    range.start - Duration::days(1)
                }
            }
        };
        self.set_anchor(anchor)
    }

    /// Apply one field edit to the date's record, creating it if absent.
    /// Committing one endpoint clamps the other so that went >= came
    /// holds after any single-field edit.
    pub fn edit_field(&mut self, date: NaiveDate, edit: FieldEdit) -> RangeChange {
        let entry = self.store.entry_mut(date);
        match edit {
            FieldEdit::Came(t) => {
                entry.came = Some(t);
                if let Some(w) = entry.went
                    && w < t
                {
                    entry.went = Some(t);
                }
            }
            FieldEdit::Went(t) => {
                entry.went = Some(t);
                if let Some(c) = entry.came
                    && c > t
                {
                    entry.came = Some(t);
                }
            }
            FieldEdit::Note(text) => {
                entry.note = text;
            }
        }
        self.refresh()
    }

    /// Drop a date's record entirely. Unknown dates are not an error.
    pub fn remove_entry(&mut self, date: NaiveDate) -> RangeChange {
        self.store.remove(date);
        self.refresh()
    }

    /// Clock in/out convenience: widen today's came/went window to cover
    /// `now`. Repeated punches only ever expand the window.
    pub fn punch(&mut self, now: NaiveDateTime) -> RangeChange {
        let entry = self.store.entry_mut(now.date());
        let t = now.time();
        entry.came = Some(entry.came.map_or(t, |c| c.min(t)));
        entry.went = Some(entry.went.map_or(t, |w| w.max(t)));
        self.refresh()
    }

    /// Human-readable label for the current period.
    pub fn period_label(&self) -> String {
        let anchor = self.settings.view_date;
        match self.settings.view_mode {
            ViewMode::Month => anchor.format("%B, %Y").to_string(),
            ViewMode::Week => anchor.format("Week %V, %Y").to_string(),
            ViewMode::Day => anchor.format("%Y-%m-%d").to_string(),
            ViewMode::AroundDay => {
                let range = self.current_range();
                format!("{} - {}", range.start, range.end)
            }
        }
    }
}
