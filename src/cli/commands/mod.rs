pub mod check;
pub mod config;
pub mod export;
pub mod status;
pub mod summary;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::rules::Validator;
use crate::utils::date::parse_iso_date;

/// Validator with the configured thresholds, pinned to `--today` if given.
pub(crate) fn build_validator(cfg: &Config, today: &Option<String>) -> AppResult<Validator> {
    let validator = Validator::new(cfg.thresholds());

    match today {
        None => Ok(validator),
        Some(s) => {
            let d = parse_iso_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?;
            Ok(validator.with_reference_date(d))
        }
    }
}
