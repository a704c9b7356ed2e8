//! Batch-level operations built on top of parser and rule engine.
//! Records are never mutated in place: every operation returns a new set.

pub mod bulk;
pub mod selection;
pub mod summary;

pub use bulk::apply_status;
pub use selection::RowSelection;
pub use summary::{BatchSummary, summarize};
