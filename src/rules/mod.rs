//! Rule engine: a deterministic pass over each record.
//!
//! Every check is a plain function over a [`RecordContext`]. All checks run
//! for every record (no short-circuit) and their findings are concatenated
//! in row order, then in check order. Records never influence each other.

mod consistency;
mod dates;
mod hours;
mod required;
mod status;

use crate::models::{Field, Finding, TimesheetRecord, ValidationResult};
use crate::utils::date;
use chrono::NaiveDate;

/// Rule thresholds. Defaults are the payroll policy values.
#[derive(Debug, Clone, PartialEq)]
pub struct Thresholds {
    /// Longest accepted period, in days (end - start).
    pub max_period_days: i64,
    pub max_scheduled_hours: f64,
    /// Accepted difference between total and the sum of the buckets.
    pub rounding_tolerance: f64,
    /// Periods ending earlier than this many months ago are stale.
    pub stale_after_months: u32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            max_period_days: 14,
            max_scheduled_hours: 80.0,
            rounding_tolerance: 0.01,
            stale_after_months: 12,
        }
    }
}

/// What a single check sees.
pub struct RecordContext<'a> {
    /// 1-based row number.
    pub row: usize,
    pub record: &'a TimesheetRecord,
    pub thresholds: &'a Thresholds,
    /// Reference date for "future" / "stale" checks.
    pub today: NaiveDate,
}

impl RecordContext<'_> {
    pub fn error(&self, field: Field, message: impl Into<String>) -> Finding {
        Finding::error(self.row, field, message)
    }

    pub fn warning(&self, field: Field, message: impl Into<String>) -> Finding {
        Finding::warning(self.row, field, message)
    }
}

type Check = fn(&RecordContext<'_>) -> Vec<Finding>;

const CHECKS: &[Check] = &[
    required::check_required_fields,
    status::check_status_label,
    dates::check_dates,
    hours::check_scheduled,
    hours::check_non_negative,
    hours::check_total_matches,
    hours::check_reported_vs_scheduled,
    hours::check_breakdown_presence,
    consistency::check_status_consistency,
];

pub struct Validator {
    thresholds: Thresholds,
    today: NaiveDate,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(Thresholds::default())
    }
}

impl Validator {
    /// Validator using the wall clock as reference date.
    pub fn new(thresholds: Thresholds) -> Self {
        Self {
            thresholds,
            today: date::today(),
        }
    }

    /// Pin the reference date (tests, re-runs of old batches).
    pub fn with_reference_date(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Findings for a single record, in check order.
    pub fn check_record(&self, row: usize, record: &TimesheetRecord) -> Vec<Finding> {
        let ctx = RecordContext {
            row,
            record,
            thresholds: &self.thresholds,
            today: self.today,
        };

        CHECKS.iter().flat_map(|check| check(&ctx)).collect()
    }

    /// Validate a whole batch. Findings are always rebuilt from scratch.
    pub fn validate(&self, records: &[TimesheetRecord]) -> ValidationResult {
        let findings: Vec<Finding> = records
            .iter()
            .enumerate()
            .flat_map(|(i, record)| self.check_record(i + 1, record))
            .collect();

        ValidationResult::from_findings(findings)
    }
}

/// Validate with default thresholds against today's date.
pub fn validate(records: &[TimesheetRecord]) -> ValidationResult {
    Validator::default().validate(records)
}
