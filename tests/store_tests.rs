use chrono::{NaiveDate, NaiveTime};
use std::env;
use std::fs;
use std::path::PathBuf;
use trep::models::entry::TimeEntry;
use trep::store::TimeRecordStore;
use trep::store::json::{load_from_json, save_as_json};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn t(h: u32, m: u32, s: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, s).unwrap()
}

fn temp_file(name: &str) -> PathBuf {
    let mut path = env::temp_dir();
    path.push(format!("{}_{}.json", name, std::process::id()));
    let _ = fs::remove_file(&path);
    path
}

fn sample_store() -> TimeRecordStore {
    let mut store = TimeRecordStore::new();
    store.insert(
        d(2024, 3, 15),
        TimeEntry::new(Some(t(8, 30, 0)), Some(t(17, 0, 0)), "demo day"),
    );
    store.insert(d(2024, 3, 16), TimeEntry::new(Some(t(10, 0, 30)), None, ""));
    store.insert(d(2024, 3, 17), TimeEntry::new(None, None, "note only"));
    store
}

#[test]
fn test_round_trip_preserves_dates_times_and_notes() {
    let store = sample_store();
    let path = temp_file("trep_roundtrip");

    save_as_json(&store, &path).expect("save should succeed");
    let loaded = load_from_json(&path).expect("load should succeed");

    assert_eq!(loaded, store);
    let _ = fs::remove_file(path);
}

#[test]
fn test_serialized_form_matches_expected_layout() {
    let store = sample_store();
    let path = temp_file("trep_layout");

    save_as_json(&store, &path).expect("save should succeed");
    let content = fs::read_to_string(&path).unwrap();

    assert!(content.contains("\"2024-03-15\""));
    assert!(content.contains("\"came\": \"08:30:00\""));
    assert!(content.contains("\"went\": \"17:00:00\""));
    assert!(content.contains("\"note\": \"demo day\""));
    // Absent endpoints omit their keys entirely.
    let entry_17 = content.split("\"2024-03-17\"").nth(1).unwrap();
    let entry_17 = entry_17.split('}').next().unwrap();
    assert!(!entry_17.contains("came"));
    assert!(!entry_17.contains("went"));

    let _ = fs::remove_file(path);
}

#[test]
fn test_missing_note_reads_back_as_empty_string() {
    let path = temp_file("trep_missing_note");
    fs::write(
        &path,
        r#"{"2024-03-15": {"came": "08:30:00", "went": "17:00:00"}}"#,
    )
    .unwrap();

    let store = load_from_json(&path).expect("load should succeed");
    assert_eq!(store.get(d(2024, 3, 15)).unwrap().note, "");
    let _ = fs::remove_file(path);
}

#[test]
fn test_load_rejects_malformed_time() {
    let path = temp_file("trep_bad_time");
    fs::write(
        &path,
        r#"{"2024-03-15": {"came": "8h30", "went": "17:00:00", "note": ""}}"#,
    )
    .unwrap();

    assert!(load_from_json(&path).is_err());
    let _ = fs::remove_file(path);
}

#[test]
fn test_load_rejects_malformed_date_key() {
    let path = temp_file("trep_bad_date");
    fs::write(
        &path,
        r#"{"15/03/2024": {"came": "08:30:00", "went": "17:00:00", "note": ""}}"#,
    )
    .unwrap();

    assert!(load_from_json(&path).is_err());
    let _ = fs::remove_file(path);
}

#[test]
fn test_load_rejects_invalid_json() {
    let path = temp_file("trep_bad_json");
    fs::write(&path, "{not json").unwrap();
    assert!(load_from_json(&path).is_err());
    let _ = fs::remove_file(path);
}

#[test]
fn test_save_leaves_live_store_untouched() {
    let store = sample_store();
    let copy = store.clone();
    let path = temp_file("trep_no_mutation");

    save_as_json(&store, &path).expect("save should succeed");
    assert_eq!(store, copy, "serialization must not mutate the live store");
    let _ = fs::remove_file(path);
}
