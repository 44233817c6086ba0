#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rci() -> Command {
    cargo_bin_cmd!("rcheckin")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rcheckin.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the DB schema (uses --test init so no config file is written)
pub fn init_db(db_path: &str) {
    rci()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Check a user in on an explicit date via the CLI
pub fn checkin(db_path: &str, user: &str, name: &str, date: &str) {
    rci()
        .args([
            "--db", db_path, "checkin", user, "--name", name, "--date", date,
        ])
        .assert()
        .success();
}

/// Run a consecutive-day sequence of check-ins for one user
pub fn checkin_run(db_path: &str, user: &str, name: &str, dates: &[&str]) {
    for d in dates {
        checkin(db_path, user, name, d);
    }
}
