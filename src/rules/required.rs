use super::RecordContext;
use crate::models::{Field, Finding};

const REQUIRED: [(Field, &str); 4] = [
    (Field::EmployeeId, "Employee ID is required"),
    (Field::StartDate, "Start date is required"),
    (Field::EndDate, "End date is required"),
    (Field::Status, "Status is required"),
];

pub(super) fn check_required_fields(ctx: &RecordContext<'_>) -> Vec<Finding> {
    REQUIRED
        .iter()
        .filter(|(field, _)| {
            ctx.record
                .text(*field)
                .is_none_or(|v| v.trim().is_empty())
        })
        .map(|(field, msg)| ctx.error(*field, *msg))
        .collect()
}
