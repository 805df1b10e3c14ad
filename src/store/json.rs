//! On-disk format of the record store: a JSON object keyed by ISO dates,
//! each value `{"came": "HH:MM:SS", "went": "HH:MM:SS", "note": "..."}`.
//! Absent times omit their key; a missing note reads back as "".

use crate::errors::{AppError, AppResult};
use crate::models::entry::TimeEntry;
use crate::store::TimeRecordStore;
use crate::utils::time::{format_time, parse_time_strict};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Serialize, Deserialize)]
struct RawEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    came: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    went: Option<String>,
    #[serde(default)]
    note: String,
}

/// Serialize the store to `path`. The raw map is built independently of
/// the live store, which is never touched during serialization.
pub fn save_as_json(store: &TimeRecordStore, path: &Path) -> AppResult<()> {
    let mut raw: BTreeMap<String, RawEntry> = BTreeMap::new();
    for (date, entry) in store.iter() {
        raw.insert(
            date.format("%Y-%m-%d").to_string(),
            RawEntry {
                came: entry.came.map(format_time),
                went: entry.went.map(format_time),
                note: entry.note.clone(),
            },
        );
    }

    let json = serde_json::to_string_pretty(&raw)?;
    fs::write(path, json)?;
    Ok(())
}

/// Parse the store from `path`. All-or-nothing: any malformed date or
/// time fails the whole load, so a caller keeps its previous store on
/// error.
pub fn load_from_json(path: &Path) -> AppResult<TimeRecordStore> {
    let content = fs::read_to_string(path)?;
    let raw: BTreeMap<String, RawEntry> = serde_json::from_str(&content)?;

    let mut store = TimeRecordStore::new();
    for (date_str, entry) in raw {
        let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
            .map_err(|_| AppError::InvalidDate(date_str.clone()))?;
        let came = parse_raw_time(entry.came.as_deref())?;
        let went = parse_raw_time(entry.went.as_deref())?;
        store.insert(date, TimeEntry::new(came, went, entry.note));
    }

    Ok(store)
}

fn parse_raw_time(raw: Option<&str>) -> AppResult<Option<chrono::NaiveTime>> {
    match raw {
        None => Ok(None),
        Some(s) => parse_time_strict(s)
            .map(Some)
            .ok_or_else(|| AppError::InvalidTime(s.to_string())),
    }
}
