// src/export/csv.rs

use crate::errors::{AppError, AppResult};
use crate::models::{Field, TimesheetRecord};
use csv::{QuoteStyle, WriterBuilder};
use std::fs::File;
use std::io;
use std::path::Path;

/// Header row written by the exporter, in column order.
pub fn headers() -> Vec<&'static str> {
    Field::ALL.iter().map(Field::export_header).collect()
}

/// One record as a row of cells, same order as [`headers`].
/// Hours use the shortest exact representation so a re-parse gives back
/// the same numbers.
pub(crate) fn record_to_row(r: &TimesheetRecord) -> Vec<String> {
    Field::ALL
        .iter()
        .map(|f| match (r.text(*f), r.hours(*f)) {
            (Some(text), _) => text.to_string(),
            (None, Some(h)) => h.to_string(),
            (None, None) => String::new(),
        })
        .collect()
}

/// Write records as CSV. Every non-numeric cell (ids, dates, status) is
/// double-quoted.
pub fn write_records<W: io::Write>(out: W, records: &[TimesheetRecord]) -> AppResult<()> {
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::NonNumeric)
        .from_writer(out);

    wtr.write_record(headers())
        .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;

    for r in records {
        wtr.write_record(record_to_row(r))
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;
    Ok(())
}

pub fn to_csv_string(records: &[TimesheetRecord]) -> AppResult<String> {
    let mut buf = Vec::new();
    write_records(&mut buf, records)?;
    String::from_utf8(buf).map_err(|e| AppError::Export(e.to_string()))
}

pub fn write_csv(path: &Path, records: &[TimesheetRecord]) -> AppResult<()> {
    let file = File::create(path)?;
    write_records(file, records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TimesheetRecord {
        TimesheetRecord {
            employee_id: "E001".into(),
            start_date: "2025-02-03".into(),
            end_date: "2025-02-09".into(),
            status: "Partially Approved".into(),
            scheduled_hours: 40.0,
            reported_hours: 37.5,
            regular_hours: 30.0,
            overtime_hours: 0.0,
            holiday_hours: 0.0,
            leave_hours: 7.5,
            total_hours: 37.5,
        }
    }

    #[test]
    fn header_and_quoting() {
        let out = to_csv_string(&[sample()]).unwrap();
        let mut lines = out.lines();

        assert_eq!(
            lines.next().unwrap(),
            "\"Employee ID\",\"Period Start\",\"Period End\",\"Status\",\"Scheduled Hours\",\
             \"Reported Hours\",\"Regular Hours\",\"Overtime Hours\",\"Holiday Hours\",\
             \"Leave Hours\",\"Total Hours\""
        );
        assert_eq!(
            lines.next().unwrap(),
            "\"E001\",\"2025-02-03\",\"2025-02-09\",\"Partially Approved\",40,37.5,30,0,0,7.5,37.5"
        );
        assert!(lines.next().is_none());
    }

    #[test]
    fn status_with_separator_survives() {
        let mut r = sample();
        r.status = "Absence/Holiday, half day".into();
        let out = to_csv_string(&[r]).unwrap();
        assert!(out.contains("\"Absence/Holiday, half day\""));
    }
}
