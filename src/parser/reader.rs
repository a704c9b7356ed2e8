use super::headers::{Header, normalize_header};
use crate::errors::{AppError, AppResult};
use crate::models::TimesheetRecord;
use csv::{ReaderBuilder, StringRecord};
use std::fs;
use std::path::Path;

/// Parse CSV text (header row required) into timesheet records.
///
/// Any error raised by the CSV reader (bad quoting, rows with a different
/// number of columns than the header) aborts the whole parse: no partial
/// result is returned.
pub fn parse(raw: &str) -> AppResult<Vec<TimesheetRecord>> {
    let text = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    if text.trim().is_empty() {
        return Err(AppError::EmptyInput);
    }

    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(text.as_bytes());

    let headers: Vec<Header> = rdr.headers()?.iter().map(normalize_header).collect();

    let mut records = Vec::new();
    for row in rdr.records() {
        records.push(build_record(&headers, &row?));
    }

    Ok(records)
}

/// Same as [`parse`], for a raw byte buffer (must be UTF-8).
pub fn parse_bytes(bytes: &[u8]) -> AppResult<Vec<TimesheetRecord>> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| AppError::Parse(format!("input is not valid UTF-8: {e}")))?;
    parse(text)
}

pub fn parse_file(path: &Path) -> AppResult<Vec<TimesheetRecord>> {
    let bytes = fs::read(path)?;
    parse_bytes(&bytes)
}

/// Blank, non-numeric or non-finite values become 0.
pub fn coerce_hours(value: &str) -> f64 {
    match value.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

fn build_record(headers: &[Header], row: &StringRecord) -> TimesheetRecord {
    let mut record = TimesheetRecord::default();

    // columns are applied left to right: on duplicated headers the last one wins
    for (header, value) in headers.iter().zip(row.iter()) {
        let Header::Known(field) = header else {
            continue;
        };

        if field.is_numeric() {
            record.set_hours(*field, coerce_hours(value));
        } else {
            record.set_text(*field, value.trim().to_string());
        }
    }

    record
}
