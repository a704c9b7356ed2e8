use serde::Serialize;
use std::fmt;

/// Timesheet approval status, as exported by the payroll system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    Approved,
    PartiallySubmitted,
    NeedsApproval,
    NotSubmitted,
    AbsenceHoliday,
    PartiallyApproved,
}

impl Status {
    pub const ALL: [Status; 6] = [
        Status::Approved,
        Status::PartiallySubmitted,
        Status::NeedsApproval,
        Status::NotSubmitted,
        Status::AbsenceHoliday,
        Status::PartiallyApproved,
    ];

    /// Label as it appears in the CSV file.
    pub fn label(&self) -> &'static str {
        match self {
            Status::Approved => "Approved",
            Status::PartiallySubmitted => "Partially Submitted",
            Status::NeedsApproval => "Needs Approval",
            Status::NotSubmitted => "Not Submitted",
            Status::AbsenceHoliday => "Absence/Holiday",
            Status::PartiallyApproved => "Partially Approved",
        }
    }

    /// Exact match on the label (surrounding whitespace ignored).
    pub fn from_label(s: &str) -> Option<Self> {
        let s = s.trim();
        Status::ALL.into_iter().find(|st| st.label() == s)
    }

    /// Statuses for which reported hours above the schedule are only advisory.
    pub fn is_tolerant(&self) -> bool {
        matches!(
            self,
            Status::Approved | Status::PartiallyApproved | Status::PartiallySubmitted
        )
    }

    /// Comma separated list of labels, used in messages.
    pub fn labels() -> String {
        Status::ALL
            .iter()
            .map(|s| s.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_matched_exactly() {
        assert_eq!(Status::from_label("Approved"), Some(Status::Approved));
        assert_eq!(
            Status::from_label("  Absence/Holiday "),
            Some(Status::AbsenceHoliday)
        );
        assert_eq!(Status::from_label("approved"), None);
        assert_eq!(Status::from_label(""), None);
    }

    #[test]
    fn tolerant_set() {
        let tolerant: Vec<_> = Status::ALL.iter().filter(|s| s.is_tolerant()).collect();
        assert_eq!(
            tolerant,
            vec![
                &Status::Approved,
                &Status::PartiallySubmitted,
                &Status::PartiallyApproved
            ]
        );
    }
}
