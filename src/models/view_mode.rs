use serde::{Deserialize, Serialize};

/// How the table chooses the date range around the anchor date.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ViewMode {
    Day,
    Week,
    Month,
    AroundDay,
}

impl ViewMode {
    /// Convert enum → session file code.
    pub fn to_code(&self) -> &'static str {
        match self {
            ViewMode::Day => "DAY",
            ViewMode::Week => "WEEK",
            ViewMode::Month => "MONTH",
            ViewMode::AroundDay => "AROUND_DAY",
        }
    }

    /// Convert session file code → enum.
    pub fn from_code(s: &str) -> Option<Self> {
        match s {
            "DAY" => Some(ViewMode::Day),
            "WEEK" => Some(ViewMode::Week),
            "MONTH" => Some(ViewMode::Month),
            "AROUND_DAY" => Some(ViewMode::AroundDay),
            _ => None,
        }
    }

    /// Parse the user-facing CLI spelling.
    pub fn from_cli_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "day" => Some(ViewMode::Day),
            "week" => Some(ViewMode::Week),
            "month" => Some(ViewMode::Month),
            "around" | "around-day" => Some(ViewMode::AroundDay),
            _ => None,
        }
    }

    pub fn as_cli_str(&self) -> &'static str {
        match self {
            ViewMode::Day => "day",
            ViewMode::Week => "week",
            ViewMode::Month => "month",
            ViewMode::AroundDay => "around",
        }
    }
}
