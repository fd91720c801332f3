#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rrd() -> Command {
    cargo_bin_cmd!("rreading")
}

/// Create a unique, empty data directory inside the system temp dir
pub fn setup_test_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rreading", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test dir");
    path
}

/// Path of a collection file inside a fresh test directory
pub fn test_store(name: &str, file: &str) -> PathBuf {
    setup_test_dir(name).join(file)
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Run `init` in `dir` for a 40-page book; the viewer log lives in `dir` too
pub fn init_dir(dir: &PathBuf) {
    let viewer_log = dir.join("viewer.log");
    rrd()
        .args([
            "--dir",
            &dir.to_string_lossy(),
            "init",
            "--book-name",
            "Test Book",
            "--book-file",
            "book.pdf",
            "--last-page",
            "40",
            "--pages-per-day",
            "18",
            "--viewer-log",
            &viewer_log.to_string_lossy(),
        ])
        .assert()
        .success();
}

/// Add a complete session through the CLI
pub fn add_session(dir: &PathBuf, start: &str, end: &str, start_page: i64, end_page: i64) {
    rrd()
        .args([
            "--dir",
            &dir.to_string_lossy(),
            "log",
            "--start",
            start,
            "--end",
            end,
            "--start-page",
            &start_page.to_string(),
            "--end-page",
            &end_page.to_string(),
        ])
        .assert()
        .success();
}
