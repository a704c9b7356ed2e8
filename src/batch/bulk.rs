use super::selection::RowSelection;
use crate::errors::{AppError, AppResult};
use crate::models::{Status, TimesheetRecord};

/// Return a new record set where the selected rows carry `status`.
///
/// The input is left untouched; callers re-run validation on the result.
pub fn apply_status(
    records: &[TimesheetRecord],
    selection: &RowSelection,
    status: Status,
) -> AppResult<Vec<TimesheetRecord>> {
    if let Some(max) = selection.max_row()
        && max > records.len()
    {
        return Err(AppError::InvalidRow(format!(
            "row {max} is out of range (batch has {} rows)",
            records.len()
        )));
    }

    Ok(records
        .iter()
        .enumerate()
        .map(|(i, r)| {
            if selection.contains(i + 1) {
                TimesheetRecord {
                    status: status.label().to_string(),
                    ..r.clone()
                }
            } else {
                r.clone()
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch() -> Vec<TimesheetRecord> {
        ["Needs Approval", "Not Submitted", "Needs Approval"]
            .iter()
            .enumerate()
            .map(|(i, s)| TimesheetRecord {
                employee_id: format!("E{i}"),
                status: s.to_string(),
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn only_selected_rows_change() {
        let records = batch();
        let sel = RowSelection::parse("1,3").unwrap();

        let updated = apply_status(&records, &sel, Status::Approved).unwrap();

        assert_eq!(updated[0].status, "Approved");
        assert_eq!(updated[1].status, "Not Submitted");
        assert_eq!(updated[2].status, "Approved");
        // input untouched
        assert_eq!(records[0].status, "Needs Approval");
    }

    #[test]
    fn all_rows() {
        let updated = apply_status(&batch(), &RowSelection::All, Status::AbsenceHoliday).unwrap();
        assert!(updated.iter().all(|r| r.status == "Absence/Holiday"));
    }

    #[test]
    fn huge_range_is_rejected_without_expanding() {
        let sel = RowSelection::parse("1-3000000000").unwrap();
        let err = apply_status(&batch(), &sel, Status::Approved).unwrap_err();
        assert!(matches!(err, AppError::InvalidRow(ref m) if m.contains("3000000000")));
    }

    #[test]
    fn out_of_range_row_is_rejected() {
        let sel = RowSelection::parse("4").unwrap();
        assert!(matches!(
            apply_status(&batch(), &sel, Status::Approved),
            Err(AppError::InvalidRow(_))
        ));
    }
}
