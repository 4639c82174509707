#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Two periods: 13 months closed, then one ongoing that reaches 11 months
/// on 2025-10-18.
pub const SAMPLE_HISTORY: &str = "\
entries:
  - title: Backend Engineer
    company: Acme
    start: 2023-09-01
    end: 2024-10-21
  - title: Platform Engineer
    company: Globex
    start: 2024-10-22
    end: Ongoing
";

pub const SAMPLE_AT: &str = "2025-10-18";

/// Fresh, empty HOME so the user's real configuration is never read.
pub fn temp_home(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtenure_home", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp home");
    path
}

/// Binary with HOME pointing at an isolated directory.
pub fn rtn_in(home: &PathBuf) -> Command {
    let mut cmd = cargo_bin_cmd!("rtenure");
    cmd.env("HOME", home).env("APPDATA", home);
    cmd
}

pub fn rtn(name: &str) -> Command {
    rtn_in(&temp_home(name))
}

/// Write a history file inside the system temp dir and return its path
pub fn write_history(name: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_history.yml", name));
    fs::write(&path, content).expect("write history");
    path.to_string_lossy().to_string()
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtenure_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}
