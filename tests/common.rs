#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ilog() -> Command {
    cargo_bin_cmd!("inspectlog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_inspectlog.sqlite", name));
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

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    // init DB (creates tables)
    ilog()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    add_inspection(db_path, "20.5", "55", "1.2m", "12", "4", "Ana");
    add_inspection(db_path, "21.0", "58", "1.1m", "12", "4", "Luis");
}

/// Add one inspection via the CLI with the six raw fields in form order.
pub fn add_inspection(
    db_path: &str,
    temperature: &str,
    humidity: &str,
    water_level: &str,
    lamps: &str,
    extinguishers: &str,
    inspector: &str,
) {
    ilog()
        .args([
            "--db",
            db_path,
            "add",
            temperature,
            humidity,
            water_level,
            lamps,
            extinguishers,
            inspector,
        ])
        .assert()
        .success();
}
