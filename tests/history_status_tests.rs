use predicates::prelude::PredicateBooleanExt;
use predicates::str::{contains, is_match};

mod common;
use common::{checkin, checkin_run, init_db, rci, setup_test_db};

#[test]
fn test_history_lists_most_recent_first() {
    let db_path = setup_test_db("history_order");
    init_db(&db_path);

    checkin_run(
        &db_path,
        "u1",
        "Alice",
        &["2024-03-01", "2024-03-02", "2024-03-05"],
    );

    rci()
        .args(["--db", &db_path, "history", "u1"])
        .assert()
        .success()
        .stdout(contains("DATE"))
        .stdout(is_match(r"(?s)2024-03-05.*2024-03-02.*2024-03-01").unwrap());
}

#[test]
fn test_history_limit_caps_records() {
    let db_path = setup_test_db("history_limit");
    init_db(&db_path);

    checkin_run(
        &db_path,
        "u1",
        "Alice",
        &["2024-03-01", "2024-03-02", "2024-03-03"],
    );

    rci()
        .args(["--db", &db_path, "history", "u1", "--limit", "2"])
        .assert()
        .success()
        .stdout(contains("2024-03-03"))
        .stdout(contains("2024-03-02"))
        .stdout(contains("2024-03-01").not());
}

#[test]
fn test_history_marks_restarts_and_continuations() {
    let db_path = setup_test_db("history_kinds");
    init_db(&db_path);

    checkin_run(&db_path, "u1", "Alice", &["2024-03-01", "2024-03-02"]);
    checkin(&db_path, "u1", "Alice", "2024-03-08");

    rci()
        .args(["--db", &db_path, "history", "u1"])
        .assert()
        .success()
        .stdout(contains("continued"))
        .stdout(contains("restarted"));
}

#[test]
fn test_history_for_unknown_user_is_empty_not_an_error() {
    let db_path = setup_test_db("history_unknown");
    init_db(&db_path);

    rci()
        .args(["--db", &db_path, "history", "ghost"])
        .assert()
        .success()
        .stdout(contains("No check-ins recorded for user ghost"));
}

#[test]
fn test_status_reflects_today_checkin() {
    let db_path = setup_test_db("status_today");
    init_db(&db_path);

    checkin(&db_path, "u1", "Alice", "2024-03-10");

    rci()
        .args(["--db", &db_path, "status", "u1", "--date", "2024-03-10"])
        .assert()
        .success()
        .stdout(contains("Checked in 2024-03-10: yes"))
        .stdout(contains("Alice (u1)"));

    rci()
        .args(["--db", &db_path, "status", "u1", "--date", "2024-03-11"])
        .assert()
        .success()
        .stdout(contains("Checked in 2024-03-11: no"));
}

#[test]
fn test_status_for_unknown_user_is_empty_not_an_error() {
    let db_path = setup_test_db("status_unknown");
    init_db(&db_path);

    rci()
        .args(["--db", &db_path, "status", "ghost"])
        .assert()
        .success()
        .stdout(contains("No check-ins recorded for user ghost"));
}

#[test]
fn test_status_shows_latest_display_name() {
    let db_path = setup_test_db("status_rename");
    init_db(&db_path);

    checkin(&db_path, "u1", "Alice", "2024-03-01");
    checkin(&db_path, "u1", "Alicia", "2024-03-02");

    rci()
        .args(["--db", &db_path, "status", "u1", "--date", "2024-03-02"])
        .assert()
        .success()
        .stdout(contains("Alicia (u1)"));
}
