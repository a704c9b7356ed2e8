pub mod field;
pub mod finding;
pub mod record;
pub mod status;

pub use field::Field;
pub use finding::{Finding, Severity, ValidationResult};
pub use record::TimesheetRecord;
pub use status::Status;
