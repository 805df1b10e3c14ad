use predicates::prelude::*;
use std::fs;
use std::path::Path;

mod common;
use common::{
    setup_test_db, setup_test_home, setup_test_session, trep, write_session_fixture,
    write_store_fixture,
};

fn cmd(home: &Path) -> assert_cmd::Command {
    let mut c = trep();
    c.env("HOME", home);
    c
}

#[test]
fn test_show_month_view_renders_range_and_totals() {
    let home = setup_test_home("show_month");
    let db = setup_test_db("show_month");
    let session = setup_test_session("show_month");
    write_store_fixture(&db);
    write_session_fixture(&session);

    cmd(&home)
        .args(["--db", &db, "--session", &session, "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("March, 2024"))
        .stdout(predicate::str::contains("2024-03-01"))
        .stdout(predicate::str::contains("2024-03-31"))
        .stdout(predicate::str::contains("8:30:00"))
        .stdout(predicate::str::contains("demo day"));
}

#[test]
fn test_show_week_override_limits_rows() {
    let home = setup_test_home("show_week");
    let db = setup_test_db("show_week");
    let session = setup_test_session("show_week");
    write_store_fixture(&db);
    write_session_fixture(&session);

    cmd(&home)
        .args([
            "--db",
            &db,
            "--session",
            &session,
            "show",
            "--view",
            "week",
            "--date",
            "2024-03-15",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Week 11, 2024"))
        .stdout(predicate::str::contains("2024-03-11"))
        .stdout(predicate::str::contains("2024-03-17"))
        .stdout(predicate::str::contains("2024-03-18").not());
}

#[test]
fn test_view_day_shows_single_row() {
    let home = setup_test_home("view_day");
    let db = setup_test_db("view_day");
    let session = setup_test_session("view_day");
    write_store_fixture(&db);
    write_session_fixture(&session);

    cmd(&home)
        .args(["--db", &db, "--session", &session, "view", "day"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-03-15"))
        .stdout(predicate::str::contains("2024-03-14").not());
}

#[test]
fn test_view_mode_survives_between_invocations() {
    let home = setup_test_home("view_persist");
    let db = setup_test_db("view_persist");
    let session = setup_test_session("view_persist");
    write_store_fixture(&db);
    write_session_fixture(&session);

    cmd(&home)
        .args(["--db", &db, "--session", &session, "view", "week"])
        .assert()
        .success();

    // The next invocation picks the week view up from the session file.
    cmd(&home)
        .args(["--db", &db, "--session", &session, "next"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Week 12, 2024"))
        .stdout(predicate::str::contains("2024-03-18"))
        .stdout(predicate::str::contains("2024-03-24"));
}

#[test]
fn test_prev_from_month_lands_on_previous_month() {
    let home = setup_test_home("prev_month");
    let db = setup_test_db("prev_month");
    let session = setup_test_session("prev_month");
    write_store_fixture(&db);
    write_session_fixture(&session);

    cmd(&home)
        .args(["--db", &db, "--session", &session, "prev"])
        .assert()
        .success()
        .stdout(predicate::str::contains("February, 2024"))
        .stdout(predicate::str::contains("2024-02-29"));
}

#[test]
fn test_today_re_anchors_on_current_month() {
    let home = setup_test_home("today");
    let db = setup_test_db("today");
    let session = setup_test_session("today");
    write_store_fixture(&db);
    write_session_fixture(&session);

    let label = chrono::Local::now().format("%B, %Y").to_string();
    cmd(&home)
        .args(["--db", &db, "--session", &session, "today"])
        .assert()
        .success()
        .stdout(predicate::str::contains(label));
}

#[test]
fn test_edit_came_after_went_pulls_went_up() {
    let home = setup_test_home("edit_clamp");
    let db = setup_test_db("edit_clamp");
    let session = setup_test_session("edit_clamp");
    write_store_fixture(&db);
    write_session_fixture(&session);

    cmd(&home)
        .args([
            "--db",
            &db,
            "--session",
            &session,
            "edit",
            "2024-03-15",
            "--in",
            "18:00",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Came 18:00:00"))
        .stdout(predicate::str::contains("Went 18:00:00"))
        .stdout(predicate::str::contains("Total 0:00:00"));

    // The clamped value is persisted, not just displayed.
    let content = fs::read_to_string(&db).unwrap();
    assert!(content.contains("\"went\": \"18:00:00\""));
}

#[test]
fn test_edit_note_shows_up_in_table() {
    let home = setup_test_home("edit_note");
    let db = setup_test_db("edit_note");
    let session = setup_test_session("edit_note");
    write_store_fixture(&db);
    write_session_fixture(&session);

    cmd(&home)
        .args([
            "--db",
            &db,
            "--session",
            &session,
            "edit",
            "2024-03-12",
            "--note",
            "dentist at noon",
        ])
        .assert()
        .success();

    cmd(&home)
        .args(["--db", &db, "--session", &session, "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dentist at noon"));
}

#[test]
fn test_edit_without_fields_warns() {
    let home = setup_test_home("edit_nothing");
    let db = setup_test_db("edit_nothing");
    let session = setup_test_session("edit_nothing");
    write_store_fixture(&db);
    write_session_fixture(&session);

    cmd(&home)
        .args(["--db", &db, "--session", &session, "edit", "2024-03-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to edit"));
}

#[test]
fn test_punch_records_presence_today() {
    let home = setup_test_home("punch");
    let db = setup_test_db("punch");
    let session = setup_test_session("punch");
    write_store_fixture(&db);
    write_session_fixture(&session);

    cmd(&home)
        .args(["--db", &db, "--session", &session, "punch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Presence recorded"));

    let today = chrono::Local::now().date_naive().format("%Y-%m-%d").to_string();
    let content = fs::read_to_string(&db).unwrap();
    assert!(content.contains(&today), "punch persisted today's record");
}

#[test]
fn test_missing_store_is_seeded_and_persisted() {
    let home = setup_test_home("seeded");
    let db = setup_test_db("seeded");
    let session = setup_test_session("seeded");

    cmd(&home)
        .args(["--db", &db, "--session", &session, "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sample data"));

    assert!(Path::new(&db).exists(), "seeded store written on shutdown");
    let content = fs::read_to_string(&db).unwrap();
    let today = chrono::Local::now().date_naive().format("%Y-%m-%d").to_string();
    assert!(content.contains(&today));
}

#[test]
fn test_corrupt_store_fails_loudly() {
    let home = setup_test_home("corrupt_store");
    let db = setup_test_db("corrupt_store");
    let session = setup_test_session("corrupt_store");
    fs::write(&db, r#"{"2024-03-15": {"came": "half past eight"}}"#).unwrap();

    cmd(&home)
        .args(["--db", &db, "--session", &session, "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));

    // The corrupt file is left exactly as it was.
    let content = fs::read_to_string(&db).unwrap();
    assert!(content.contains("half past eight"));
}

#[test]
fn test_corrupt_session_field_degrades_to_default() {
    let home = setup_test_home("corrupt_session");
    let db = setup_test_db("corrupt_session");
    let session = setup_test_session("corrupt_session");
    write_store_fixture(&db);
    fs::write(
        &session,
        r#"{"time_view_type": "MONTH", "view_date": "not-a-date", "window_size": {"w": 300, "h": 600}, "recent_files": []}"#,
    )
    .unwrap();

    // view_date falls back to today; the command still succeeds.
    let label = chrono::Local::now().format("%B, %Y").to_string();
    cmd(&home)
        .args(["--db", &db, "--session", &session, "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipping"))
        .stdout(predicate::str::contains(label));
}

#[test]
fn test_open_rejects_invalid_store_file() {
    let home = setup_test_home("open_invalid");
    let db = setup_test_db("open_invalid");
    let session = setup_test_session("open_invalid");
    write_store_fixture(&db);

    let bad = setup_test_db("open_invalid_target");
    fs::write(&bad, "{broken").unwrap();

    cmd(&home)
        .args([
            "--db", &db, "--session", &session, "--test", "open", "--file", &bad,
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_save_as_writes_copy_and_records_recent_file() {
    let home = setup_test_home("save_as");
    let db = setup_test_db("save_as");
    let session = setup_test_session("save_as");
    write_store_fixture(&db);
    write_session_fixture(&session);

    let target = setup_test_db("save_as_target");
    cmd(&home)
        .args([
            "--db", &db, "--session", &session, "--test", "save", "--file", &target,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("saved as"));

    let copy = fs::read_to_string(&target).unwrap();
    assert!(copy.contains("\"2024-03-15\""));

    let session_content = fs::read_to_string(&session).unwrap();
    assert!(
        session_content.contains("save_as_target"),
        "save-as target recorded in recent files"
    );
}

#[test]
fn test_del_requires_confirmation() {
    let home = setup_test_home("del_confirm");
    let db = setup_test_db("del_confirm");
    let session = setup_test_session("del_confirm");
    write_store_fixture(&db);
    write_session_fixture(&session);

    cmd(&home)
        .args(["--db", &db, "--session", &session, "del", "2024-03-15"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Aborted"));

    let content = fs::read_to_string(&db).unwrap();
    assert!(content.contains("2024-03-15"), "record kept after abort");

    cmd(&home)
        .args(["--db", &db, "--session", &session, "del", "2024-03-15"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Record deleted"));

    let content = fs::read_to_string(&db).unwrap();
    assert!(!content.contains("2024-03-15"), "record gone after confirm");
}

#[test]
fn test_config_sets_lunch_interval_with_clamping() {
    let home = setup_test_home("config_lunch");
    let db = setup_test_db("config_lunch");
    let session = setup_test_session("config_lunch");
    write_store_fixture(&db);
    write_session_fixture(&session);

    cmd(&home)
        .args([
            "--db",
            &db,
            "--session",
            &session,
            "config",
            "--lunch-from",
            "13:00",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("13:00:00 - 13:00:00"));
}

#[test]
fn test_project_add_and_list() {
    let home = setup_test_home("projects");

    cmd(&home)
        .args([
            "--test",
            "project",
            "add",
            "--id",
            "alpha",
            "--name",
            "Alpha rollout",
            "--description",
            "first deployment wave",
            "--start-date",
            "2024-03-01",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("registered"));

    cmd(&home)
        .args(["--test", "project", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("alpha"))
        .stdout(predicate::str::contains("Alpha rollout"))
        .stdout(predicate::str::contains("2024-03-01"));

    // Duplicate ids are rejected.
    cmd(&home)
        .args([
            "--test", "project", "add", "--id", "alpha", "--name", "Duplicate",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_init_creates_store_and_session() {
    let home = setup_test_home("init");
    let db = setup_test_db("init");

    cmd(&home)
        .args(["--db", &db, "--test", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("initialization completed"));

    assert!(Path::new(&db).exists(), "store created by init");
}
