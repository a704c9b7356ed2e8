//! Header normalization: maps the many spellings found in payroll exports
//! to the canonical field set.

use crate::models::Field;

/// Known header spellings, already lower-cased and trimmed.
const SYNONYMS: &[(&str, Field)] = &[
    // employee
    ("empl id", Field::EmployeeId),
    ("empl_id", Field::EmployeeId),
    ("emp id", Field::EmployeeId),
    ("employee id", Field::EmployeeId),
    ("employee_id", Field::EmployeeId),
    ("employeeid", Field::EmployeeId),
    ("id", Field::EmployeeId),
    // period start
    ("period start", Field::StartDate),
    ("period start date", Field::StartDate),
    ("period_start", Field::StartDate),
    ("start date", Field::StartDate),
    ("start_date", Field::StartDate),
    ("startdate", Field::StartDate),
    // period end
    ("period end", Field::EndDate),
    ("period end date", Field::EndDate),
    ("period_end", Field::EndDate),
    ("end date", Field::EndDate),
    ("end_date", Field::EndDate),
    ("enddate", Field::EndDate),
    // status
    ("status", Field::Status),
    ("timesheet status", Field::Status),
    ("time sheet status", Field::Status),
    ("approval status", Field::Status),
    // scheduled
    ("scheduled", Field::ScheduledHours),
    ("scheduled hours", Field::ScheduledHours),
    ("scheduled_hours", Field::ScheduledHours),
    ("scheduledhours", Field::ScheduledHours),
    ("sched hours", Field::ScheduledHours),
    // reported
    ("reported", Field::ReportedHours),
    ("reported hours", Field::ReportedHours),
    ("reported_hours", Field::ReportedHours),
    ("reportedhours", Field::ReportedHours),
    ("hours reported", Field::ReportedHours),
    // regular
    ("regular", Field::RegularHours),
    ("regular hours", Field::RegularHours),
    ("regular_hours", Field::RegularHours),
    ("regularhours", Field::RegularHours),
    ("reg hours", Field::RegularHours),
    // overtime
    ("overtime", Field::OvertimeHours),
    ("overtime hours", Field::OvertimeHours),
    ("overtime_hours", Field::OvertimeHours),
    ("overtimehours", Field::OvertimeHours),
    ("ot hours", Field::OvertimeHours),
    // holiday
    ("holiday", Field::HolidayHours),
    ("holiday hours", Field::HolidayHours),
    ("holiday_hours", Field::HolidayHours),
    ("holidayhours", Field::HolidayHours),
    // leave
    ("leave", Field::LeaveHours),
    ("leave hours", Field::LeaveHours),
    ("leave_hours", Field::LeaveHours),
    ("leavehours", Field::LeaveHours),
    ("pto hours", Field::LeaveHours),
    // total
    ("total", Field::TotalHours),
    ("total hours", Field::TotalHours),
    ("total_hours", Field::TotalHours),
    ("totalhours", Field::TotalHours),
];

/// Result of normalizing a single header cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Header {
    Known(Field),
    /// Unknown header, passed through unchanged.
    Other(String),
}

pub fn lookup(header: &str) -> Option<Field> {
    let key = header.trim().to_lowercase();
    SYNONYMS
        .iter()
        .find(|(alias, _)| *alias == key)
        .map(|(_, f)| *f)
}

pub fn normalize_header(raw: &str) -> Header {
    match lookup(raw) {
        Some(f) => Header::Known(f),
        None => Header::Other(raw.to_string()),
    }
}
