//! Normalizer / parser: raw CSV text → canonical timesheet records.

pub mod headers;
mod reader;

pub use headers::{Header, normalize_header};
pub use reader::{coerce_hours, parse, parse_bytes, parse_file};
