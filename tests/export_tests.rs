use predicates::str::contains;
use std::fs;

mod common;
use common::{checkin_run, init_db, rci, setup_test_db, temp_out};

#[test]
fn test_export_csv_contains_all_records() {
    let db_path = setup_test_db("export_csv");
    init_db(&db_path);

    checkin_run(&db_path, "u1", "Alice", &["2024-03-01", "2024-03-02"]);

    let out = temp_out("export_csv", "csv");

    rci()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out,
        ])
        .assert()
        .success()
        .stdout(contains("csv export completed"));

    let content = fs::read_to_string(&out).expect("read csv output");
    assert!(content.starts_with("user_id,user_name,checkin_date"));
    assert!(content.contains("2024-03-01"));
    assert!(content.contains("2024-03-02"));
    assert_eq!(content.lines().count(), 3); // header + 2 records
}

#[test]
fn test_export_json_is_valid_and_filtered_by_user() {
    let db_path = setup_test_db("export_json");
    init_db(&db_path);

    checkin_run(&db_path, "u1", "Alice", &["2024-03-01"]);
    checkin_run(&db_path, "u2", "Bob", &["2024-03-01"]);

    let out = temp_out("export_json", "json");

    rci()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &out, "--user", "u1",
        ])
        .assert()
        .success()
        .stdout(contains("json export completed"));

    let content = fs::read_to_string(&out).expect("read json output");
    let parsed: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let records = parsed.as_array().expect("json array");

    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["user_id"], "u1");
    assert_eq!(records[0]["reward_points"], 1);
}

#[test]
fn test_export_relative_path_is_rejected() {
    let db_path = setup_test_db("export_relpath");
    init_db(&db_path);

    checkin_run(&db_path, "u1", "Alice", &["2024-03-01"]);

    rci()
        .args([
            "--db",
            &db_path,
            "export",
            "--format",
            "csv",
            "--file",
            "relative_out.csv",
        ])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_empty_db_warns_and_writes_nothing() {
    let db_path = setup_test_db("export_empty");
    init_db(&db_path);

    let out = temp_out("export_empty", "csv");

    rci()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out,
        ])
        .assert()
        .success()
        .stdout(contains("No check-in records found"));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_export_force_overwrites_existing_file() {
    let db_path = setup_test_db("export_force");
    init_db(&db_path);

    checkin_run(&db_path, "u1", "Alice", &["2024-03-01"]);

    let out = temp_out("export_force", "csv");
    fs::write(&out, "stale content").expect("seed existing file");

    rci()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out, "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read csv output");
    assert!(content.starts_with("user_id"));
}
