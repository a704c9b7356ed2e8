mod common;

use common::{clean_record, validator};
use tsvalidator::{Severity, TimesheetRecord};

#[test]
fn scenario_a_clean_approved_week() {
    let result = validator().validate(&[clean_record()]);

    assert!(result.is_valid);
    assert!(result.errors.is_empty(), "{:?}", result.errors);
    assert!(result.warnings.is_empty(), "{:?}", result.warnings);
}

#[test]
fn scenario_b_missing_id_and_reversed_dates() {
    let record = TimesheetRecord {
        employee_id: String::new(),
        start_date: "2025-02-10".into(),
        end_date: "2025-02-03".into(),
        ..clean_record()
    };

    let result = validator().validate(&[record]);

    assert!(!result.is_valid);
    assert_eq!(result.errors.len(), 2, "{:?}", result.errors);
    assert_eq!(result.errors[0].field, "employeeId");
    assert_eq!(result.errors[1].field, "endDate");
    assert!(result.errors[1].message.contains("must be after"));
    // both dates parse: no format error
    assert!(!result.errors.iter().any(|f| f.message.contains("format")));
}

#[test]
fn scenario_c_not_submitted_with_hours() {
    let record = TimesheetRecord {
        status: "Not Submitted".into(),
        reported_hours: 8.0,
        regular_hours: 8.0,
        total_hours: 8.0,
        ..clean_record()
    };

    let result = validator().validate(&[record]);

    assert!(result.is_valid);
    assert_eq!(result.warnings.len(), 1, "{:?}", result.warnings);
    assert!(
        result.warnings[0]
            .message
            .starts_with("Not submitted timesheet has hours recorded")
    );
}

#[test]
fn scenario_d_overreported_but_tolerant_status() {
    let record = TimesheetRecord {
        reported_hours: 50.0,
        regular_hours: 40.0,
        overtime_hours: 10.0,
        total_hours: 50.0,
        ..clean_record()
    };

    let result = validator().validate(&[record]);

    assert!(result.is_valid);
    assert!(result.errors.is_empty());
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(result.warnings[0].field, "reportedHours");
    assert_eq!(
        result.warnings[0].message,
        "Reported hours (50) exceed scheduled hours (40)"
    );
}

#[test]
fn scenario_e_overreported_needs_approval() {
    let record = TimesheetRecord {
        status: "Needs Approval".into(),
        reported_hours: 50.0,
        regular_hours: 40.0,
        overtime_hours: 10.0,
        total_hours: 50.0,
        ..clean_record()
    };

    let result = validator().validate(&[record]);

    assert!(!result.is_valid);
    assert!(result.warnings.is_empty());
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].severity, Severity::Error);
    assert_eq!(result.errors[0].field, "reportedHours");
}

#[test]
fn validity_iff_no_errors() {
    let warning_only = TimesheetRecord {
        scheduled_hours: 90.0,
        ..clean_record()
    };
    let with_error = TimesheetRecord {
        leave_hours: -1.0,
        ..clean_record()
    };

    let r1 = validator().validate(&[warning_only.clone()]);
    assert!(!r1.warnings.is_empty());
    assert!(r1.is_valid);

    let r2 = validator().validate(&[warning_only, with_error]);
    assert!(!r2.errors.is_empty());
    assert!(!r2.is_valid);
    assert!(r2.errors.iter().all(|f| f.row == 2));
}

#[test]
fn validation_is_idempotent() {
    let records = vec![
        clean_record(),
        TimesheetRecord {
            status: "Pending".into(),
            total_hours: 12.0,
            ..TimesheetRecord::default()
        },
        TimesheetRecord {
            start_date: "2024-01-01".into(),
            end_date: "2024-01-31".into(),
            ..clean_record()
        },
    ];

    let v = validator();
    assert_eq!(v.validate(&records), v.validate(&records));
}

#[test]
fn total_tolerance_boundary() {
    let within = TimesheetRecord {
        total_hours: 40.0,
        regular_hours: 39.995,
        reported_hours: 40.0,
        ..clean_record()
    };
    assert!(validator().validate(&[within]).errors.is_empty());

    let over = TimesheetRecord {
        total_hours: 40.02,
        ..clean_record()
    };
    let result = validator().validate(&[over]);
    let mismatches: Vec<_> = result
        .errors
        .iter()
        .filter(|f| f.field == "totalHours")
        .collect();
    assert_eq!(mismatches.len(), 1);
}

#[test]
fn long_period_boundary() {
    let fourteen = TimesheetRecord {
        start_date: "2025-02-01".into(),
        end_date: "2025-02-15".into(),
        ..clean_record()
    };
    assert!(validator().validate(&[fourteen]).warnings.is_empty());

    let fifteen = TimesheetRecord {
        start_date: "2025-02-01".into(),
        end_date: "2025-02-16".into(),
        ..clean_record()
    };
    let result = validator().validate(&[fifteen]);
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(result.warnings[0].field, "endDate");
}

#[test]
fn zero_total_with_breakdown_is_not_a_total_mismatch() {
    let record = TimesheetRecord {
        status: "Needs Approval".into(),
        reported_hours: 0.0,
        regular_hours: 8.0,
        total_hours: 0.0,
        ..clean_record()
    };

    let result = validator().validate(&[record]);
    assert!(result.errors.is_empty(), "{:?}", result.errors);
    assert_eq!(result.warnings.len(), 1);
    assert!(result.warnings[0].message.contains("no reported hours"));
}

#[test]
fn stale_and_future_periods_depend_on_reference_date() {
    let old = TimesheetRecord {
        start_date: "2023-12-04".into(),
        end_date: "2023-12-10".into(),
        ..clean_record()
    };
    let result = validator().validate(&[old.clone()]);
    assert_eq!(result.warnings.len(), 1);
    assert!(result.warnings[0].message.contains("in the past"));

    // same record, checked back when it was current
    let then = chrono::NaiveDate::from_ymd_opt(2023, 12, 15).unwrap();
    let result = tsvalidator::Validator::default()
        .with_reference_date(then)
        .validate(&[old]);
    assert!(result.warnings.is_empty());

    let future = TimesheetRecord {
        start_date: "2025-03-03".into(),
        end_date: "2025-03-09".into(),
        ..clean_record()
    };
    let result = validator().validate(&[future]);
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(result.warnings[0].field, "startDate");
}

#[test]
fn bulk_status_change_triggers_full_revalidation() {
    use tsvalidator::Status;
    use tsvalidator::batch::{RowSelection, apply_status};

    let records = vec![
        TimesheetRecord {
            status: "Needs Approval".into(),
            reported_hours: 44.0,
            regular_hours: 40.0,
            overtime_hours: 4.0,
            total_hours: 44.0,
            ..clean_record()
        },
        clean_record(),
    ];

    let before = validator().validate(&records);
    assert_eq!(before.errors.len(), 1);

    let approved = apply_status(&records, &RowSelection::parse("1").unwrap(), Status::Approved)
        .unwrap();
    let after = validator().validate(&approved);

    assert!(after.is_valid);
    assert_eq!(after.warnings.len(), 1);
    assert_eq!(after.warnings[0].row, 1);
}
