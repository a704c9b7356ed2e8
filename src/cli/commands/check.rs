use crate::cli::parser::{Commands, ReportFormat};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::json::result_to_json;
use crate::models::ValidationResult;
use crate::parser::parse_file;
use crate::ui::messages::{header, success, warning};
use crate::utils::table::{Column, Table};
use std::path::Path;

use super::build_validator;

/// Handle the `check` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Check {
        file,
        format,
        today,
        no_warnings,
    } = cmd
    {
        let records = parse_file(Path::new(file))?;
        let validator = build_validator(cfg, today)?;
        let result = validator.validate(&records);

        match format {
            ReportFormat::Json => println!("{}", result_to_json(&result)?),
            ReportFormat::Text => print_report(file, records.len(), &result, *no_warnings),
        }

        if !result.is_valid {
            return Err(AppError::ValidationFailed {
                errors: result.errors.len(),
                warnings: result.warnings.len(),
            });
        }
    }
    Ok(())
}

fn print_report(file: &str, records: usize, result: &ValidationResult, no_warnings: bool) {
    header(format!("{file}: {records} record(s)"));

    let findings: Vec<_> = result
        .by_row()
        .into_iter()
        .filter(|f| !no_warnings || f.is_error())
        .collect();

    if !findings.is_empty() {
        let mut table = Table::new(vec![
            Column::new("Row", 3),
            Column::new("Severity", 8),
            Column::new("Field", 12),
            Column::new("Message", 20),
        ]);

        for f in findings {
            table.add_row(vec![
                f.row.to_string(),
                f.severity.as_str().to_string(),
                f.field.clone(),
                f.message.clone(),
            ]);
        }
        println!("{}", table.render());
    }

    let counts = format!(
        "{} error(s), {} warning(s)",
        result.errors.len(),
        result.warnings.len()
    );

    if result.is_valid && result.warnings.is_empty() {
        success("No issues found");
    } else if result.is_valid {
        warning(format!("Valid with {counts}"));
    }
}
