use super::RecordContext;
use crate::models::{Field, Finding};
use crate::utils::date::{months_before, parse_date};

/// Period checks. Nothing is reported here unless both dates are present
/// (missing dates are the required-field check's business).
pub(super) fn check_dates(ctx: &RecordContext<'_>) -> Vec<Finding> {
    let record = ctx.record;
    let start_raw = record.start_date.trim();
    let end_raw = record.end_date.trim();

    if start_raw.is_empty() || end_raw.is_empty() {
        return Vec::new();
    }

    let mut findings = Vec::new();

    let start = parse_date(start_raw);
    let end = parse_date(end_raw);

    if start.is_none() {
        findings.push(ctx.error(
            Field::StartDate,
            format!("Invalid start date format: {start_raw}"),
        ));
    }
    if end.is_none() {
        findings.push(ctx.error(
            Field::EndDate,
            format!("Invalid end date format: {end_raw}"),
        ));
    }

    let (Some(start), Some(end)) = (start, end) else {
        return findings;
    };

    if end <= start {
        findings.push(ctx.error(
            Field::EndDate,
            format!("End date ({end_raw}) must be after start date ({start_raw})"),
        ));
    }

    let span = (end - start).num_days();
    if span > ctx.thresholds.max_period_days {
        findings.push(ctx.warning(
            Field::EndDate,
            format!(
                "Timesheet period spans {span} days (more than {} days)",
                ctx.thresholds.max_period_days
            ),
        ));
    }

    if start > ctx.today {
        findings.push(ctx.warning(
            Field::StartDate,
            format!("Start date ({start_raw}) is in the future"),
        ));
    }

    let months = ctx.thresholds.stale_after_months;
    if end < months_before(ctx.today, months) {
        let age = if months == 12 {
            "1 year".to_string()
        } else {
            format!("{months} months")
        };
        findings.push(ctx.warning(
            Field::EndDate,
            format!("End date ({end_raw}) is more than {age} in the past"),
        ));
    }

    findings
}
