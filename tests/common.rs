#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn trep() -> Command {
    cargo_bin_cmd!("trep")
}

/// Create a private HOME for one test so the real user config is never
/// read or written. Returns the directory path.
pub fn setup_test_home(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_trep_home_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&path);
    fs::create_dir_all(&path).expect("create test home");
    path
}

/// Create a unique store path inside the system temp dir and remove any
/// existing file.
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_trep.db.json", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a unique session path inside the system temp dir.
pub fn setup_test_session(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_trep.session.json", name));
    let session_path = path.to_string_lossy().to_string();
    fs::remove_file(&session_path).ok();
    session_path
}

/// A small deterministic store: two complete March 2024 days.
pub fn write_store_fixture(db_path: &str) {
    let json = r#"{
  "2024-03-11": {
    "came": "09:00:00",
    "went": "16:45:00",
    "note": ""
  },
  "2024-03-15": {
    "came": "08:30:00",
    "went": "17:00:00",
    "note": "demo day"
  }
}"#;
    fs::write(db_path, json).expect("write store fixture");
}

/// A session anchored on 2024-03-15 in month view.
pub fn write_session_fixture(session_path: &str) {
    let json = r#"{
  "recent_files": [],
  "time_view_type": "MONTH",
  "view_date": "2024-03-15",
  "window_size": { "w": 300, "h": 600 }
}"#;
    fs::write(session_path, json).expect("write session fixture");
}
