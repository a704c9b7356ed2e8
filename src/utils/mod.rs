pub mod date;
pub mod formatting;
pub mod table;

// Re-export dei helper usati più spesso
pub use formatting::fmt_hours;
