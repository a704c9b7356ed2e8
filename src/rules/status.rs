use super::RecordContext;
use crate::models::{Field, Finding, Status};

/// Unknown (but present) status labels are only a warning: the missing
/// status error is raised by the required-field check.
pub(super) fn check_status_label(ctx: &RecordContext<'_>) -> Vec<Finding> {
    let status = ctx.record.status.trim();

    if status.is_empty() || Status::from_label(status).is_some() {
        return Vec::new();
    }

    vec![ctx.warning(
        Field::Status,
        format!(
            "Unknown status \"{status}\". Expected one of: {}",
            Status::labels()
        ),
    )]
}
