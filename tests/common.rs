#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use std::env;
use std::fs;
use std::path::PathBuf;
use tsvalidator::{TimesheetRecord, Validator};

pub const HEADER: &str = "Empl ID,Period Start,Period End,Status,Scheduled Hours,Reported Hours,Regular Hours,Overtime Hours,Holiday Hours,Leave Hours,Total Hours";

pub fn tsv() -> Command {
    cargo_bin_cmd!("tsvalidator")
}

/// Reference date used by every clock-dependent test.
pub fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
}

pub fn validator() -> Validator {
    Validator::default().with_reference_date(reference_date())
}

/// Approved, 40h week, 7 days before the reference date: no findings.
pub fn clean_record() -> TimesheetRecord {
    TimesheetRecord {
        employee_id: "E001".into(),
        start_date: "2025-02-03".into(),
        end_date: "2025-02-10".into(),
        status: "Approved".into(),
        scheduled_hours: 40.0,
        reported_hours: 40.0,
        regular_hours: 40.0,
        overtime_hours: 0.0,
        holiday_hours: 0.0,
        leave_hours: 0.0,
        total_hours: 40.0,
    }
}

/// Write a CSV fixture inside the system temp dir and return its path
pub fn write_fixture(name: &str, rows: &[&str]) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_tsvalidator.csv", name));

    let mut content = String::from(HEADER);
    content.push('\n');
    for r in rows {
        content.push_str(r);
        content.push('\n');
    }

    fs::write(&path, content).expect("write fixture");
    path.to_string_lossy().to_string()
}

/// Temporary output file path, removed if it already exists
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Config path that never exists, so the CLI runs with default thresholds
pub fn no_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_missing_tsvalidator.conf", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}
