use super::RecordContext;
use crate::models::{Field, Finding, Status};
use crate::utils::fmt_hours;

/// Expectations that depend on the status value. Unknown statuses are
/// already flagged by the status check and produce nothing here.
pub(super) fn check_status_consistency(ctx: &RecordContext<'_>) -> Vec<Finding> {
    let record = ctx.record;
    let Some(status) = record.status_kind() else {
        return Vec::new();
    };

    let finding = match status {
        Status::Approved
        | Status::PartiallyApproved
        | Status::NeedsApproval
        | Status::PartiallySubmitted => (!record.has_any_hours()).then(|| {
            ctx.warning(
                Field::Status,
                format!("{status} timesheet has no hours recorded"),
            )
        }),
        Status::NotSubmitted => record.has_any_hours().then(|| {
            ctx.warning(
                Field::Status,
                format!(
                    "Not submitted timesheet has hours recorded ({} reported, {} in breakdown)",
                    fmt_hours(record.reported_hours),
                    fmt_hours(record.breakdown_sum())
                ),
            )
        }),
        Status::AbsenceHoliday => {
            (record.regular_hours != 0.0 || record.overtime_hours != 0.0).then(|| {
                ctx.warning(
                    Field::Status,
                    format!(
                        "Absence/Holiday timesheet has working hours ({} regular, {} overtime)",
                        fmt_hours(record.regular_hours),
                        fmt_hours(record.overtime_hours)
                    ),
                )
            })
        }
    };

    finding.into_iter().collect()
}
