//! Per-user session state: which view is open, which date it is anchored
//! on, window geometry for a graphical front-end, recently used store
//! files and the lunch interval.
//!
//! Loading is tolerant per field: a missing or malformed field is
//! reported and falls back to its default without aborting the rest of
//! the load. A missing file altogether just means defaults.

use crate::errors::AppResult;
use crate::models::view_mode::ViewMode;
use crate::ui::messages;
use crate::utils::date::{parse_date, today};
use crate::utils::time::{format_time, parse_time_strict};
use chrono::{NaiveDate, NaiveTime};
use serde_json::{Value, json};
use std::fs;
use std::path::{Path, PathBuf};

pub const MAX_RECENT_FILES: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSettings {
    pub view_mode: ViewMode,
    pub view_date: NaiveDate,
    pub window_size: (u32, u32),
    pub recent_files: Vec<PathBuf>,
    pub lunch_interval: (NaiveTime, NaiveTime),
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            view_mode: ViewMode::Month,
            view_date: today(),
            window_size: (300, 600),
            recent_files: Vec::new(),
            lunch_interval: (
                NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
                NaiveTime::from_hms_opt(12, 30, 0).unwrap(),
            ),
        }
    }
}

impl SessionSettings {
    /// Load from `path`; a missing file keeps the defaults and is not an
    /// error. Unreadable JSON at the top level is.
    pub fn load(path: &Path) -> AppResult<Self> {
        let mut settings = Self::default();

        if !path.exists() {
            messages::info(format!(
                "The session file {} does not exist. Using defaults.",
                path.display()
            ));
            return Ok(settings);
        }

        let content = fs::read_to_string(path)?;
        let file: Value = serde_json::from_str(&content)?;

        match field_str(&file, "time_view_type") {
            Some(code) => match ViewMode::from_code(&code) {
                Some(mode) => settings.view_mode = mode,
                None => skip_field("time_view_type"),
            },
            None => skip_field("time_view_type"),
        }

        match field_str(&file, "view_date").and_then(|s| parse_date(&s)) {
            Some(date) => settings.view_date = date,
            None => skip_field("view_date"),
        }

        match parse_window_size(file.get("window_size")) {
            Some(size) => settings.window_size = size,
            None => skip_field("window_size"),
        }

        match parse_recent_files(file.get("recent_files")) {
            Some(files) => settings.recent_files = files,
            None => skip_field("recent_files"),
        }

        match parse_lunch_interval(file.get("lunch_interval")) {
            Some(interval) => settings.lunch_interval = interval,
            None => skip_field("lunch_interval"),
        }

        Ok(settings)
    }

    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let file = json!({
            "time_view_type": self.view_mode.to_code(),
            "view_date": self.view_date.format("%Y-%m-%d").to_string(),
            "window_size": { "w": self.window_size.0, "h": self.window_size.1 },
            "recent_files": self
                .recent_files
                .iter()
                .map(|p| p.to_string_lossy().into_owned())
                .collect::<Vec<_>>(),
            "lunch_interval": {
                "from": format_time(self.lunch_interval.0),
                "to": format_time(self.lunch_interval.1),
            },
        });

        fs::write(path, serde_json::to_string_pretty(&file)?)?;
        Ok(())
    }

    /// Most recently used first, deduplicated, capped.
    pub fn push_recent_file(&mut self, path: PathBuf) {
        self.recent_files.retain(|p| p != &path);
        self.recent_files.insert(0, path);
        self.recent_files.truncate(MAX_RECENT_FILES);
    }

    /// Setting one lunch endpoint drags the other along so the interval
    /// never inverts, like the settings dialog does while typing.
    pub fn set_lunch_from(&mut self, from: NaiveTime) {
        self.lunch_interval.0 = from;
        if self.lunch_interval.1 < from {
            self.lunch_interval.1 = from;
        }
    }

    pub fn set_lunch_to(&mut self, to: NaiveTime) {
        self.lunch_interval.1 = to;
        if self.lunch_interval.0 > to {
            self.lunch_interval.0 = to;
        }
    }
}

fn skip_field(name: &str) {
    messages::warning(format!(
        "Key {} missing or malformed in session file. Skipping.",
        name
    ));
}

fn field_str(file: &Value, key: &str) -> Option<String> {
    file.get(key)?.as_str().map(str::to_string)
}

fn parse_window_size(v: Option<&Value>) -> Option<(u32, u32)> {
    let v = v?;
    let w = v.get("w")?.as_u64()?;
    let h = v.get("h")?.as_u64()?;
    Some((u32::try_from(w).ok()?, u32::try_from(h).ok()?))
}

fn parse_recent_files(v: Option<&Value>) -> Option<Vec<PathBuf>> {
    let list = v?.as_array()?;
    let mut out = Vec::with_capacity(list.len());
    for item in list {
        out.push(PathBuf::from(item.as_str()?));
    }
    Some(out)
}

fn parse_lunch_interval(v: Option<&Value>) -> Option<(NaiveTime, NaiveTime)> {
    let v = v?;
    let from = parse_time_strict(v.get("from")?.as_str()?)?;
    let to = parse_time_strict(v.get("to")?.as_str()?)?;
    Some((from, to))
}
