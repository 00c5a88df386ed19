use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{day_args, rdl, read_day_file, setup_test_dir};

fn add_args(dir: &std::path::Path, title: &str, start: &str, end: &str) -> Vec<String> {
    let mut args = day_args(dir);
    args.extend(
        [
            "add", "--project", "P1", "--title", title, "--start", start, "--end", end,
        ]
        .map(String::from),
    );
    args
}

#[test]
fn test_load_missing_date_is_a_notice() {
    let dir = setup_test_dir("cli_load_missing");

    let mut args = day_args(&dir);
    args.push("load".into());

    rdl(&dir)
        .args(&args)
        .assert()
        .success()
        .stdout(contains("No existing data for 2024-01-01"))
        .stdout(contains("No tasks."));

    assert!(!dir.join("2024-01-01.csv").exists());
}

#[test]
fn test_add_then_reload() {
    let dir = setup_test_dir("cli_add_reload");

    let mut args = add_args(&dir, "Design", "09:00", "10:00");
    args.extend(["--status", "active"].map(String::from));
    rdl(&dir)
        .args(&args)
        .assert()
        .success()
        .stdout(contains("Task added for 2024-01-01"));

    let content = read_day_file(&dir);
    assert_eq!(
        content,
        "Date,ProjectID,Type,Title,Start,End,Status\n\
         2024-01-01,P1,planned,Design,09:00,10:00,active\n"
    );

    let mut args = day_args(&dir);
    args.extend(["load", "--json"].map(String::from));
    rdl(&dir)
        .args(&args)
        .assert()
        .success()
        .stdout(contains("\"project_id\": \"P1\""))
        .stdout(contains("\"type\": \"planned\""))
        .stdout(contains("\"start\": \"09:00\""))
        .stdout(contains("No existing data").not());
}

#[test]
fn test_add_on_new_date_has_no_missing_notice() {
    let dir = setup_test_dir("cli_add_no_notice");

    rdl(&dir)
        .args(add_args(&dir, "Design", "09:00", "10:00"))
        .assert()
        .success()
        .stdout(contains("No existing data").not());

    assert!(read_day_file(&dir).contains("Design"));
}

#[test]
fn test_add_out_of_order_is_sorted() {
    let dir = setup_test_dir("cli_add_sorted");

    rdl(&dir)
        .args(add_args(&dir, "Later", "10:00", "11:00"))
        .assert()
        .success();
    rdl(&dir)
        .args(add_args(&dir, "Earlier", "09:00", "10:00"))
        .assert()
        .success();

    let content = read_day_file(&dir);
    let first = content.find("Earlier").unwrap();
    let second = content.find("Later").unwrap();
    assert!(first < second);
}

#[test]
fn test_add_invalid_hour_is_rejected() {
    let dir = setup_test_dir("cli_add_invalid_hour");

    rdl(&dir)
        .args(add_args(&dir, "Design", "25:00", "10:00"))
        .assert()
        .failure()
        .stderr(contains("Invalid time format"));

    assert!(!dir.join("2024-01-01.csv").exists());
}

#[test]
fn test_add_empty_title_is_rejected() {
    let dir = setup_test_dir("cli_add_empty_title");

    rdl(&dir)
        .args(add_args(&dir, "", "09:00", "10:00"))
        .assert()
        .failure()
        .stderr(contains("All fields are required"));
}

#[test]
fn test_add_interactive_without_input_is_cancelled() {
    let dir = setup_test_dir("cli_add_cancel");

    let mut args = day_args(&dir);
    args.extend(["add", "--project", "P1"].map(String::from));

    rdl(&dir)
        .args(&args)
        .assert()
        .success()
        .stdout(contains("Operation cancelled."));

    assert!(!dir.join("2024-01-01.csv").exists());
}

#[test]
fn test_add_interactive_with_input() {
    let dir = setup_test_dir("cli_add_interactive");

    let mut args = day_args(&dir);
    args.extend(["add", "--type", "actual"].map(String::from));

    rdl(&dir)
        .args(&args)
        .write_stdin("P3\n\nReview\n14\n00\n15\n30\ndone\n")
        .assert()
        .success();

    assert!(read_day_file(&dir).contains("2024-01-01,P3,actual,Review,14:00,15:30,done"));
}

#[test]
fn test_invalid_date_is_rejected() {
    let dir = setup_test_dir("cli_invalid_date");

    rdl(&dir)
        .args([
            "--dir",
            dir.to_str().unwrap(),
            "--year",
            "2023",
            "--month",
            "2",
            "--day",
            "30",
            "load",
        ])
        .assert()
        .failure()
        .stderr(contains("Please enter a valid date"));

    rdl(&dir)
        .args(["--dir", dir.to_str().unwrap(), "--month", "june", "load"])
        .assert()
        .failure()
        .stderr(contains("Please enter a valid date"));
}

#[test]
fn test_edit_task() {
    let dir = setup_test_dir("cli_edit");

    rdl(&dir)
        .args(add_args(&dir, "Design", "09:00", "10:00"))
        .assert()
        .success();
    rdl(&dir)
        .args(add_args(&dir, "Build", "11:00", "12:00"))
        .assert()
        .success();

    let mut args = day_args(&dir);
    args.extend(["edit", "1", "--start", "13:00", "--end", "14:00", "--status", "done"].map(String::from));
    rdl(&dir)
        .args(&args)
        .assert()
        .success()
        .stdout(contains("Task #1 for 2024-01-01 has been updated."));

    let content = read_day_file(&dir);
    assert!(content.contains("2024-01-01,P1,planned,Design,13:00,14:00,done"));
    assert!(content.find("Build").unwrap() < content.find("Design").unwrap());
}

#[test]
fn test_edit_unknown_index_fails() {
    let dir = setup_test_dir("cli_edit_unknown");

    rdl(&dir)
        .args(add_args(&dir, "Design", "09:00", "10:00"))
        .assert()
        .success();

    let mut args = day_args(&dir);
    args.extend(["edit", "5", "--title", "Nope"].map(String::from));
    rdl(&dir)
        .args(&args)
        .assert()
        .failure()
        .stderr(contains("No task #5 for 2024-01-01"));
}

#[test]
fn test_del_with_force() {
    let dir = setup_test_dir("cli_del_force");

    rdl(&dir)
        .args(add_args(&dir, "Design", "09:00", "10:00"))
        .assert()
        .success();
    rdl(&dir)
        .args(add_args(&dir, "Build", "11:00", "12:00"))
        .assert()
        .success();

    let mut args = day_args(&dir);
    args.extend(["del", "1", "--force"].map(String::from));
    rdl(&dir).args(&args).assert().success();

    let content = read_day_file(&dir);
    assert!(!content.contains("Design"));
    assert!(content.contains("Build"));
}

#[test]
fn test_del_requires_confirmation() {
    let dir = setup_test_dir("cli_del_confirm");

    rdl(&dir)
        .args(add_args(&dir, "Design", "09:00", "10:00"))
        .assert()
        .success();

    let mut args = day_args(&dir);
    args.extend(["del", "1"].map(String::from));

    rdl(&dir)
        .args(&args)
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled."));
    assert!(read_day_file(&dir).contains("Design"));

    rdl(&dir)
        .args(&args)
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("has been deleted"));
    assert!(!read_day_file(&dir).contains("Design"));
}

#[test]
fn test_malformed_file_fails_load() {
    let dir = setup_test_dir("cli_malformed");
    fs::write(dir.join("2024-01-01.csv"), "Date,Title\n2024-01-01,Oops\n").unwrap();

    let mut args = day_args(&dir);
    args.push("load".into());

    rdl(&dir)
        .args(&args)
        .assert()
        .failure()
        .stderr(contains("Malformed file"));
}

#[test]
fn test_timer_records_actual_task() {
    let dir = setup_test_dir("cli_timer");

    let mut args = day_args(&dir);
    args.extend(["timer", "--project", "P1", "--title", "Pairing"].map(String::from));

    rdl(&dir)
        .args(&args)
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(contains("Timer started at"))
        .stdout(contains("Actual task recorded for 2024-01-01"));

    let content = read_day_file(&dir);
    assert!(content.contains(",P1,actual,Pairing,"));
    assert!(content.trim_end().ends_with(",active"));
}

#[test]
fn test_init_test_mode_creates_data_dir() {
    let dir = setup_test_dir("cli_init");
    let data = dir.join("data");

    rdl(&dir)
        .args(["--dir", data.to_str().unwrap(), "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    assert!(data.is_dir());
    assert!(!dir.join(".rdaylog").join("rdaylog.conf").exists());
}

#[test]
fn test_config_print_shows_defaults() {
    let dir = setup_test_dir("cli_config_print");

    rdl(&dir)
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("file_extension: csv"))
        .stdout(contains("default_status: active"))
        .stdout(contains("timer_refresh_ms: 1000"));
}

#[test]
fn test_config_file_is_honoured() {
    let dir = setup_test_dir("cli_config_file");
    let conf_dir = dir.join(".rdaylog");
    fs::create_dir_all(&conf_dir).unwrap();
    let data = dir.join("logs");
    fs::write(
        conf_dir.join("rdaylog.conf"),
        format!("data_dir: {}\nfile_extension: txt\n", data.display()),
    )
    .unwrap();

    rdl(&dir)
        .args([
            "--year", "2024", "--month", "1", "--day", "1", "add", "--project", "P1", "--title",
            "Design", "--start", "09:00", "--end", "10:00",
        ])
        .assert()
        .success();

    assert!(data.join("2024-01-01.txt").exists());
}
