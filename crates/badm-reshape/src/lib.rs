//! The reshape engine: long-form BIF rows in, ordered wide tables out.
//!
//! Three sequential stages, each pure and in-memory:
//! 1. **Date resolution** ([`resolve_dates`]): one pass over the whole row
//!    set producing a fallback-safe date key per group.
//! 2. **Pivoting** ([`build_wide_table`]): fold one variable group's rows
//!    into wide per-group records.
//! 3. **Ordering** ([`sort_records`]): numeric sort of group ids with a
//!    whole-table lexical fallback, plus canonical id re-serialization.

pub mod dates;
pub mod pivot;
pub mod sort;

pub use dates::{DateIndex, resolve_dates};
pub use pivot::build_wide_table;
pub use sort::sort_records;

use badm_model::{LongRow, OutputTable};
use tracing::debug;

/// Variable groups present in the rows, in first-seen order.
pub fn variable_groups(rows: &[LongRow]) -> Vec<String> {
    let mut groups: Vec<String> = Vec::new();
    for row in rows {
        if !groups.iter().any(|group| group == &row.variable_group) {
            groups.push(row.variable_group.clone());
        }
    }
    groups
}

/// Run the full engine: resolve dates once, then pivot and order each
/// variable group independently.
pub fn reshape(rows: &[LongRow]) -> Vec<OutputTable> {
    let dates = resolve_dates(rows);
    debug!(
        row_count = rows.len(),
        group_count = dates.group_count(),
        date_columns = dates.columns().len(),
        "dates resolved"
    );

    let mut tables = Vec::new();
    for variable_group in variable_groups(rows) {
        let mut table = build_wide_table(rows, &variable_group, &dates);
        sort_records(&mut table);
        debug!(
            variable_group = %table.variable_group,
            records = table.record_count(),
            columns = table.columns.len(),
            "table built"
        );
        tables.push(table);
    }
    tables
}
