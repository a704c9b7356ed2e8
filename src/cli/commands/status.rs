use crate::batch::{RowSelection, apply_status};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::{csv::write_csv, ensure_writable};
use crate::models::Status;
use crate::parser::parse_file;
use crate::ui::messages::{finding, info, success, warning};
use std::path::Path;

use super::build_validator;

/// Handle the `status` command
///
/// The updated batch is written to `--out` and validated again from
/// scratch; findings are reported but do not make the command fail.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status {
        file,
        rows,
        status,
        out,
        force,
        today,
    } = cmd
    {
        let new_status = Status::from_label(status).ok_or_else(|| {
            AppError::InvalidStatus(format!("{status} (expected one of: {})", Status::labels()))
        })?;
        let selection = RowSelection::parse(rows)?;
        let validator = build_validator(cfg, today)?;

        let records = parse_file(Path::new(file))?;
        let updated = apply_status(&records, &selection, new_status)?;

        let path = Path::new(out);
        ensure_writable(path, *force)?;
        write_csv(path, &updated)?;

        let changed = (1..=updated.len()).filter(|r| selection.contains(*r)).count();
        success(format!(
            "{changed} row(s) set to \"{new_status}\": {}",
            path.display()
        ));

        let result = validator.validate(&updated);
        for f in result.by_row() {
            finding(f);
        }

        if result.is_valid {
            info(format!(
                "Re-validation: valid, {} warning(s)",
                result.warnings.len()
            ));
        } else {
            warning(format!(
                "Re-validation: {} error(s), {} warning(s)",
                result.errors.len(),
                result.warnings.len()
            ));
        }
    }
    Ok(())
}
