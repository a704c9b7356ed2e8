use super::field::Field;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

/// A single validation outcome tied to a row and a field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Finding {
    /// 1-based, matches the input order.
    pub row: usize,
    pub field: String,
    pub message: String,
    pub severity: Severity,
}

impl Finding {
    pub fn error(row: usize, field: Field, message: impl Into<String>) -> Self {
        Self {
            row,
            field: field.canonical().to_string(),
            message: message.into(),
            severity: Severity::Error,
        }
    }

    pub fn warning(row: usize, field: Field, message: impl Into<String>) -> Self {
        Self {
            row,
            field: field.canonical().to_string(),
            message: message.into(),
            severity: Severity::Warning,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Row {} [{}] {}: {}",
            self.row,
            self.severity.as_str(),
            self.field,
            self.message
        )
    }
}

/// Aggregate of all findings for a batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<Finding>,
    pub warnings: Vec<Finding>,
}

impl ValidationResult {
    /// Splits findings by severity, keeping their relative order.
    pub fn from_findings(findings: Vec<Finding>) -> Self {
        let (errors, warnings): (Vec<_>, Vec<_>) =
            findings.into_iter().partition(Finding::is_error);

        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    /// All findings sorted by row, errors before warnings within a row.
    pub fn by_row(&self) -> Vec<&Finding> {
        let mut all: Vec<&Finding> = self.errors.iter().chain(self.warnings.iter()).collect();
        all.sort_by_key(|f| (f.row, f.severity != Severity::Error));
        all
    }
}
