use crate::models::{TimesheetRecord, ValidationResult};
use serde::Serialize;
use std::collections::BTreeSet;

/// Aggregate view of a batch, for reports.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummary {
    pub records: usize,
    /// (status label, count) in first-seen order; empty labels are "(none)".
    pub by_status: Vec<(String, usize)>,
    pub reported_hours: f64,
    pub regular_hours: f64,
    pub overtime_hours: f64,
    pub holiday_hours: f64,
    pub leave_hours: f64,
    pub total_hours: f64,
    pub rows_with_errors: usize,
    pub rows_with_warnings: usize,
}

pub fn summarize(records: &[TimesheetRecord], result: &ValidationResult) -> BatchSummary {
    let mut summary = BatchSummary {
        records: records.len(),
        ..Default::default()
    };

    for r in records {
        let label = match r.status.trim() {
            "" => "(none)",
            s => s,
        };
        match summary.by_status.iter_mut().find(|(l, _)| l == label) {
            Some((_, n)) => *n += 1,
            None => summary.by_status.push((label.to_string(), 1)),
        }

        summary.reported_hours += r.reported_hours;
        summary.regular_hours += r.regular_hours;
        summary.overtime_hours += r.overtime_hours;
        summary.holiday_hours += r.holiday_hours;
        summary.leave_hours += r.leave_hours;
        summary.total_hours += r.total_hours;
    }

    summary.rows_with_errors = result.errors.iter().map(|f| f.row).collect::<BTreeSet<_>>().len();
    summary.rows_with_warnings = result
        .warnings
        .iter()
        .map(|f| f.row)
        .collect::<BTreeSet<_>>()
        .len();

    summary
}
