#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rck() -> Command {
    cargo_bin_cmd!("rclock")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rclock.db", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Run a command against `db_path` and require it to succeed
pub fn ok(db_path: &str, args: &[&str]) {
    rck().arg("--db").arg(db_path).args(args).assert().success();
}

/// Table rows printed by `log` (those starting with a record id)
pub fn log_lines(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .filter(|line| line.trim_start().starts_with(|c: char| c.is_ascii_digit()))
        .map(|line| line.to_string())
        .collect()
}
