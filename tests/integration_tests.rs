use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{log_lines, ok, rck, setup_test_db};

#[test]
fn test_init_creates_schema_in_test_mode() {
    let db_path = setup_test_db("init_test_mode");

    rck()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_clock_in_then_out_inherits_category() {
    let db_path = setup_test_db("in_out_inherit");

    rck()
        .args(["--db", &db_path, "in", "work"])
        .assert()
        .success()
        .stdout(contains("Clocked in (work)"));

    rck()
        .args(["--db", &db_path, "out"])
        .assert()
        .success()
        .stdout(contains("Clocked out (work)"));
}

#[test]
fn test_clock_in_twice_fails() {
    let db_path = setup_test_db("in_twice");

    ok(&db_path, &["in"]);

    rck()
        .args(["--db", &db_path, "in"])
        .assert()
        .failure()
        .stderr(contains("already clocked in (default @"));
}

#[test]
fn test_clock_out_twice_fails() {
    let db_path = setup_test_db("out_twice");

    ok(&db_path, &["in", "work"]);
    ok(&db_path, &["out"]);

    rck()
        .args(["--db", &db_path, "out"])
        .assert()
        .failure()
        .stderr(contains("already clocked out (work @"));
}

#[test]
fn test_clock_out_without_clock_in_fails() {
    let db_path = setup_test_db("out_first");

    rck()
        .args(["--db", &db_path, "out", "work"])
        .assert()
        .failure()
        .stderr(contains("cannot clock out without clocking in first"));
}

#[test]
fn test_clock_out_of_different_category_fails() {
    let db_path = setup_test_db("out_other_category");

    ok(&db_path, &["in", "work"]);

    rck()
        .args(["--db", &db_path, "out", "personal"])
        .assert()
        .failure()
        .stderr(contains("cannot clock out of a different category (work)"));

    // The open session is untouched, so closing it still works.
    ok(&db_path, &["out", "work"]);
}

#[test]
fn test_clock_out_named_category_after_default_clock_in_fails() {
    let db_path = setup_test_db("default_then_named_out");

    ok(&db_path, &["in"]);

    rck()
        .args(["--db", &db_path, "out", "work"])
        .assert()
        .failure()
        .stderr(contains("cannot clock out of a different category (default)"));
}

#[test]
fn test_extra_positional_args_fall_back_to_default() {
    let db_path = setup_test_db("extra_args");

    rck()
        .args(["--db", &db_path, "in", "work", "extra"])
        .assert()
        .success()
        .stdout(contains("Clocked in (default)"));
}

#[test]
fn test_log_prints_last_n_in_chronological_order() {
    let db_path = setup_test_db("log_last_n");

    ok(&db_path, &["in", "work"]);
    ok(&db_path, &["out"]);
    ok(&db_path, &["in", "home"]);

    let out = rck()
        .args(["--db", &db_path, "log", "-n", "2"])
        .output()
        .expect("failed to run log");
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("ID"));
    assert!(stdout.contains("Category"));

    let lines = log_lines(&stdout);
    assert_eq!(lines.len(), 2, "expected exactly two rows:\n{}", stdout);
    assert!(lines[0].starts_with("2:"));
    assert!(lines[0].contains("work"));
    assert!(lines[1].starts_with("3:"));
    assert!(lines[1].contains("home"));
}

#[test]
fn test_log_on_empty_store_prints_only_header() {
    let db_path = setup_test_db("log_empty");

    let out = rck()
        .args(["--db", &db_path, "log"])
        .output()
        .expect("failed to run log");
    assert!(out.status.success());
    assert!(log_lines(&String::from_utf8_lossy(&out.stdout)).is_empty());
}

#[test]
fn test_status_without_records_fails() {
    let db_path = setup_test_db("status_empty");

    rck()
        .args(["--db", &db_path, "status"])
        .assert()
        .failure()
        .stderr(contains("no records found"));
}

#[test]
fn test_status_reports_open_session() {
    let db_path = setup_test_db("status_open");

    ok(&db_path, &["in", "work"]);

    rck()
        .args(["--db", &db_path, "status"])
        .assert()
        .success()
        .stdout(contains("Clocked in (work) since").and(contains("elapsed")));
}

#[test]
fn test_status_reports_closed_session() {
    let db_path = setup_test_db("status_closed");

    ok(&db_path, &["in", "work"]);
    ok(&db_path, &["out"]);

    rck()
        .args(["--db", &db_path, "status"])
        .assert()
        .success()
        .stdout(contains("Clocked out (work) at").and(contains("ago")));
}

#[test]
fn test_last_needs_two_records() {
    let db_path = setup_test_db("last_short");

    ok(&db_path, &["in"]);

    rck()
        .args(["--db", &db_path, "last"])
        .assert()
        .failure()
        .stderr(contains("not enough records to calculate time elapsed"));

    ok(&db_path, &["out"]);

    rck()
        .args(["--db", &db_path, "last"])
        .assert()
        .success()
        .stdout(contains("Last clock out was"));
}

#[test]
fn test_db_maintenance_commands() {
    let db_path = setup_test_db("db_maintenance");

    ok(&db_path, &["in", "work"]);

    rck()
        .args(["--db", &db_path, "db", "--info", "--check", "--vacuum"])
        .assert()
        .success()
        .stdout(contains("Total events:"))
        .stdout(contains("Integrity check passed"))
        .stdout(contains("Vacuum completed"));

    rck()
        .args(["--db", &db_path, "db", "--audit"])
        .assert()
        .success()
        .stdout(contains("migration_applied"))
        .stdout(contains("Clocked in (work)"))
        .stdout(contains("Database vacuumed"));
}

#[test]
fn test_db_migrate_reports_applied_versions() {
    let db_path = setup_test_db("db_migrate_fresh");

    rck()
        .args(["--db", &db_path, "db", "--migrate"])
        .assert()
        .success()
        .stdout(contains("applied 20250301_0001_records_category_index"));

    rck()
        .args(["--db", &db_path, "db", "--migrate"])
        .assert()
        .success()
        .stdout(contains("schema already up to date").and(contains("applied").not()));
}

#[test]
fn test_config_edit_fails_when_no_editor_works() {
    let home = tempfile::TempDir::new().unwrap();

    rck()
        .env("HOME", home.path())
        .arg("init")
        .assert()
        .success();
    assert!(home.path().join(".clock").join("clock.conf").exists());

    rck()
        .env("HOME", home.path())
        .env("EDITOR", "false")
        .args(["config", "--edit", "--editor", "false"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Error: Configuration error: failed to edit"));
}
