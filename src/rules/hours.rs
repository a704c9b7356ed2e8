use super::RecordContext;
use crate::models::{Field, Finding};
use crate::utils::fmt_hours;

const NON_NEGATIVE: [(Field, &str); 6] = [
    (Field::ReportedHours, "Reported hours"),
    (Field::RegularHours, "Regular hours"),
    (Field::OvertimeHours, "Overtime hours"),
    (Field::HolidayHours, "Holiday hours"),
    (Field::LeaveHours, "Leave hours"),
    (Field::TotalHours, "Total hours"),
];

pub(super) fn check_scheduled(ctx: &RecordContext<'_>) -> Vec<Finding> {
    let scheduled = ctx.record.scheduled_hours;
    let max = ctx.thresholds.max_scheduled_hours;

    if scheduled < 0.0 {
        vec![ctx.error(
            Field::ScheduledHours,
            format!("Scheduled hours cannot be negative ({})", fmt_hours(scheduled)),
        )]
    } else if scheduled > max {
        vec![ctx.warning(
            Field::ScheduledHours,
            format!(
                "Scheduled hours ({}) exceed {} hours",
                fmt_hours(scheduled),
                fmt_hours(max)
            ),
        )]
    } else {
        Vec::new()
    }
}

pub(super) fn check_non_negative(ctx: &RecordContext<'_>) -> Vec<Finding> {
    NON_NEGATIVE
        .iter()
        .filter_map(|(field, label)| {
            let value = ctx.record.hours(*field)?;
            (value < 0.0).then(|| {
                ctx.error(
                    *field,
                    format!("{label} cannot be negative ({})", fmt_hours(value)),
                )
            })
        })
        .collect()
}

/// Slack for binary rounding when comparing against the tolerance.
const FLOAT_SLACK: f64 = 1e-9;

/// Only checked when a total is present: a zero total is never compared.
/// A difference of exactly the tolerance is accepted.
pub(super) fn check_total_matches(ctx: &RecordContext<'_>) -> Vec<Finding> {
    let total = ctx.record.total_hours;
    let calculated = ctx.record.breakdown_sum();
    let diff = (total - calculated).abs();

    if total > 0.0 && diff - ctx.thresholds.rounding_tolerance > FLOAT_SLACK {
        return vec![ctx.error(
            Field::TotalHours,
            format!(
                "Total hours ({}) doesn't match calculated total ({})",
                fmt_hours(total),
                fmt_hours(calculated)
            ),
        )];
    }

    Vec::new()
}

pub(super) fn check_reported_vs_scheduled(ctx: &RecordContext<'_>) -> Vec<Finding> {
    let record = ctx.record;
    if record.reported_hours <= record.scheduled_hours {
        return Vec::new();
    }

    let message = format!(
        "Reported hours ({}) exceed scheduled hours ({})",
        fmt_hours(record.reported_hours),
        fmt_hours(record.scheduled_hours)
    );

    let tolerant = record.status_kind().is_some_and(|s| s.is_tolerant());
    if tolerant {
        vec![ctx.warning(Field::ReportedHours, message)]
    } else {
        vec![ctx.error(Field::ReportedHours, message)]
    }
}

pub(super) fn check_breakdown_presence(ctx: &RecordContext<'_>) -> Vec<Finding> {
    let reported = ctx.record.reported_hours;
    let breakdown = ctx.record.breakdown_sum();

    if reported > 0.0 && breakdown == 0.0 {
        vec![ctx.warning(
            Field::ReportedHours,
            format!(
                "Reported hours ({}) have no breakdown into regular, overtime, holiday or leave hours",
                fmt_hours(reported)
            ),
        )]
    } else if reported == 0.0 && breakdown > 0.0 {
        vec![ctx.warning(
            Field::ReportedHours,
            format!(
                "Hours breakdown ({}) exists but no reported hours",
                fmt_hours(breakdown)
            ),
        )]
    } else {
        Vec::new()
    }
}
