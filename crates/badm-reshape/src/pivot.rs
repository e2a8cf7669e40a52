//! Pivoting: fold one variable group's long rows into wide records.

use std::collections::BTreeMap;

use badm_model::{LongRow, OutputTable, WideRecord};

use crate::dates::DateIndex;

/// Pivot one variable group's rows into a wide table.
///
/// Any row - date or not - places its group in the table. Date rows are
/// otherwise discarded so date values never reappear as miscellaneous
/// columns; their content reaches the record through the resolver's date
/// fields instead. On colliding variable names within a group, the first
/// value wins.
///
/// The returned table is unordered; [`crate::sort_records`] fixes row order.
pub fn build_wide_table(
    rows: &[LongRow],
    variable_group: &str,
    dates: &DateIndex,
) -> OutputTable {
    let mut order: Vec<String> = Vec::new();
    let mut records: BTreeMap<String, WideRecord> = BTreeMap::new();
    let mut variables: Vec<String> = Vec::new();

    for row in rows {
        if row.variable_group != variable_group {
            continue;
        }
        if !records.contains_key(row.group_id.as_str()) {
            order.push(row.group_id.clone());
            records.insert(row.group_id.clone(), new_record(&row.group_id, dates));
        }
        if row.is_date_row() {
            continue;
        }
        let Some(record) = records.get_mut(row.group_id.as_str()) else {
            continue;
        };
        if !record.cells.contains_key(&row.variable) {
            record.cells.insert(row.variable.clone(), row.value.clone());
            if !variables.iter().any(|name| name == &row.variable) {
                variables.push(row.variable.clone());
            }
        }
    }

    let mut table = OutputTable::new(variable_group);
    // Date columns keep their global discovery order but only appear when
    // some record in this table observed them.
    for column in dates.columns() {
        if records.values().any(|record| record.cells.contains_key(column)) {
            table.columns.push(column.clone());
        }
    }
    table.columns.extend(variables);

    for group_id in order {
        if let Some(record) = records.remove(&group_id) {
            table.push_record(record);
        }
    }
    table
}

/// Seed a record with the group's identifier, date key, and every date
/// field the resolver observed for it.
fn new_record(group_id: &str, dates: &DateIndex) -> WideRecord {
    let mut record = WideRecord::new(group_id, dates.date_key(group_id));
    for column in dates.columns() {
        if let Some(value) = dates.field(group_id, column) {
            record.cells.insert(column.clone(), value.to_string());
        }
    }
    record
}
