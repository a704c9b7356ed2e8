use super::field::Field;
use super::status::Status;
use serde::{Deserialize, Serialize};

/// One timesheet period (one CSV row).
///
/// Text fields are kept as trimmed strings until validated; hour buckets
/// default to 0 when the column is missing or the value is not a number.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimesheetRecord {
    pub employee_id: String,
    pub start_date: String,
    pub end_date: String,
    pub status: String,
    pub scheduled_hours: f64,
    pub reported_hours: f64,
    pub regular_hours: f64,
    pub overtime_hours: f64,
    pub holiday_hours: f64,
    pub leave_hours: f64,
    pub total_hours: f64,
}

impl TimesheetRecord {
    /// Parsed status, `None` when the label is empty or unknown.
    pub fn status_kind(&self) -> Option<Status> {
        Status::from_label(&self.status)
    }

    /// regular + overtime + holiday + leave
    pub fn breakdown_sum(&self) -> f64 {
        self.regular_hours + self.overtime_hours + self.holiday_hours + self.leave_hours
    }

    /// True when reported or any breakdown bucket is nonzero.
    pub fn has_any_hours(&self) -> bool {
        [
            self.reported_hours,
            self.regular_hours,
            self.overtime_hours,
            self.holiday_hours,
            self.leave_hours,
        ]
        .iter()
        .any(|h| *h != 0.0)
    }

    pub fn text(&self, field: Field) -> Option<&str> {
        match field {
            Field::EmployeeId => Some(&self.employee_id),
            Field::StartDate => Some(&self.start_date),
            Field::EndDate => Some(&self.end_date),
            Field::Status => Some(&self.status),
            _ => None,
        }
    }

    pub fn hours(&self, field: Field) -> Option<f64> {
        match field {
            Field::ScheduledHours => Some(self.scheduled_hours),
            Field::ReportedHours => Some(self.reported_hours),
            Field::RegularHours => Some(self.regular_hours),
            Field::OvertimeHours => Some(self.overtime_hours),
            Field::HolidayHours => Some(self.holiday_hours),
            Field::LeaveHours => Some(self.leave_hours),
            Field::TotalHours => Some(self.total_hours),
            _ => None,
        }
    }

    pub(crate) fn set_text(&mut self, field: Field, value: String) {
        match field {
            Field::EmployeeId => self.employee_id = value,
            Field::StartDate => self.start_date = value,
            Field::EndDate => self.end_date = value,
            Field::Status => self.status = value,
            _ => {}
        }
    }

    pub(crate) fn set_hours(&mut self, field: Field, value: f64) {
        match field {
            Field::ScheduledHours => self.scheduled_hours = value,
            Field::ReportedHours => self.reported_hours = value,
            Field::RegularHours => self.regular_hours = value,
            Field::OvertimeHours => self.overtime_hours = value,
            Field::HolidayHours => self.holiday_hours = value,
            Field::LeaveHours => self.leave_hours = value,
            Field::TotalHours => self.total_hours = value,
            _ => {}
        }
    }
}
