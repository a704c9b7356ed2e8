// src/export/json.rs

use crate::errors::{AppError, AppResult};
use crate::models::{TimesheetRecord, ValidationResult};
use serde::Serialize;
use std::fs;
use std::path::Path;

fn to_pretty<T: Serialize + ?Sized>(value: &T) -> AppResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))
}

/// Records as a pretty-printed JSON array (camelCase keys).
pub fn records_to_json(records: &[TimesheetRecord]) -> AppResult<String> {
    to_pretty(records)
}

/// `{ "isValid": .., "errors": [..], "warnings": [..] }`
pub fn result_to_json(result: &ValidationResult) -> AppResult<String> {
    to_pretty(result)
}

pub fn write_json(path: &Path, records: &[TimesheetRecord]) -> AppResult<()> {
    let json = records_to_json(records)?;
    fs::write(path, json)?;
    Ok(())
}
