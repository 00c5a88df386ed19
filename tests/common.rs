#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// The binary, isolated from the user's configuration.
pub fn rdl(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("rdaylog");
    cmd.env("HOME", dir).env("APPDATA", dir).env_remove("RUST_LOG");
    cmd
}

/// Create an empty, unique directory inside the system temp dir
pub fn setup_test_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rdaylog", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test dir");
    path
}

/// Global arguments selecting 2024-01-01 in `dir`.
pub fn day_args(dir: &Path) -> Vec<String> {
    vec![
        "--dir".into(),
        dir.to_string_lossy().to_string(),
        "--year".into(),
        "2024".into(),
        "--month".into(),
        "1".into(),
        "--day".into(),
        "1".into(),
    ]
}

pub fn read_day_file(dir: &Path) -> String {
    fs::read_to_string(dir.join("2024-01-01.csv")).expect("read day file")
}
