use crate::errors::{AppError, AppResult};
use std::ops::RangeInclusive;

/// 1-based row selection, as typed on the command line.
///
/// Supports:
/// - `all`
/// - `N`
/// - `N-M` (inclusive)
/// - comma separated combinations: `1,3,5-7`
///
/// Ranges are kept as typed, never expanded row by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowSelection {
    All,
    Rows(Vec<RangeInclusive<usize>>),
}

impl RowSelection {
    pub fn parse(s: &str) -> AppResult<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(RowSelection::All);
        }

        let mut rows = Vec::new();
        for token in s.split(',').map(str::trim) {
            if token.is_empty() {
                return Err(AppError::InvalidRow(s.to_string()));
            }

            if let Some((a, b)) = token.split_once('-') {
                let start = parse_row(a)?;
                let end = parse_row(b)?;
                if end < start {
                    return Err(AppError::InvalidRow(token.to_string()));
                }
                rows.push(start..=end);
            } else {
                let row = parse_row(token)?;
                rows.push(row..=row);
            }
        }

        Ok(RowSelection::Rows(rows))
    }

    pub fn contains(&self, row: usize) -> bool {
        match self {
            RowSelection::All => true,
            RowSelection::Rows(rows) => rows.iter().any(|r| r.contains(&row)),
        }
    }

    /// Highest selected row, `None` for `All`.
    pub fn max_row(&self) -> Option<usize> {
        match self {
            RowSelection::All => None,
            RowSelection::Rows(rows) => rows.iter().map(|r| *r.end()).max(),
        }
    }
}

fn parse_row(s: &str) -> AppResult<usize> {
    match s.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(AppError::InvalidRow(s.trim().to_string())),
    }
}
