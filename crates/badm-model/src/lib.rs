//! Data model shared across the BADM reshape workspace.
//!
//! A BIF export encodes site metadata as long-form key/value rows; the
//! reshape engine pivots them into per-variable-group wide tables. This
//! crate holds both shapes and the column-name conventions, and nothing
//! else - no I/O, no transformation logic.

pub mod record;
pub mod table;

pub use record::LongRow;
pub use table::{OutputTable, WideRecord};

/// Column name reserved for the group identifier in every output table.
pub const GROUP_ID_COLUMN: &str = "GROUP_ID";

/// Case-sensitive token marking a variable name as a date field.
pub const DATE_MARKER: &str = "DATE";
