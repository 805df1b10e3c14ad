use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A simple project record. Projects are bookkeeping only: they are not
/// joined against time entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub start_date: NaiveDate,
}

impl Project {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            start_date,
        }
    }
}
