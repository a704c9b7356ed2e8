use serde::Serialize;
use std::fmt;

/// Canonical field of a timesheet record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Field {
    EmployeeId,
    StartDate,
    EndDate,
    Status,
    ScheduledHours,
    ReportedHours,
    RegularHours,
    OvertimeHours,
    HolidayHours,
    LeaveHours,
    TotalHours,
}

impl Field {
    /// Export / display order.
    pub const ALL: [Field; 11] = [
        Field::EmployeeId,
        Field::StartDate,
        Field::EndDate,
        Field::Status,
        Field::ScheduledHours,
        Field::ReportedHours,
        Field::RegularHours,
        Field::OvertimeHours,
        Field::HolidayHours,
        Field::LeaveHours,
        Field::TotalHours,
    ];

    pub fn canonical(&self) -> &'static str {
        match self {
            Field::EmployeeId => "employeeId",
            Field::StartDate => "startDate",
            Field::EndDate => "endDate",
            Field::Status => "status",
            Field::ScheduledHours => "scheduledHours",
            Field::ReportedHours => "reportedHours",
            Field::RegularHours => "regularHours",
            Field::OvertimeHours => "overtimeHours",
            Field::HolidayHours => "holidayHours",
            Field::LeaveHours => "leaveHours",
            Field::TotalHours => "totalHours",
        }
    }

    /// Column title written by the CSV exporter.
    pub fn export_header(&self) -> &'static str {
        match self {
            Field::EmployeeId => "Employee ID",
            Field::StartDate => "Period Start",
            Field::EndDate => "Period End",
            Field::Status => "Status",
            Field::ScheduledHours => "Scheduled Hours",
            Field::ReportedHours => "Reported Hours",
            Field::RegularHours => "Regular Hours",
            Field::OvertimeHours => "Overtime Hours",
            Field::HolidayHours => "Holiday Hours",
            Field::LeaveHours => "Leave Hours",
            Field::TotalHours => "Total Hours",
        }
    }

    /// Hour buckets are coerced to numbers, everything else stays text.
    pub fn is_numeric(&self) -> bool {
        !matches!(
            self,
            Field::EmployeeId | Field::StartDate | Field::EndDate | Field::Status
        )
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical())
    }
}
