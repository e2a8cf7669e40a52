use std::collections::BTreeMap;

use crate::GROUP_ID_COLUMN;

/// One pivoted row: the group identifier plus a cell per observed column.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct WideRecord {
    pub group_id: String,
    /// Resolved date for the group, or the group id itself when no date
    /// row exists. Engine metadata; never serialized as a column.
    pub date_key: String,
    pub cells: BTreeMap<String, String>,
}

impl WideRecord {
    pub fn new(group_id: impl Into<String>, date_key: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            date_key: date_key.into(),
            cells: BTreeMap::new(),
        }
    }

    /// Cell value for a column, blank when the record never observed it.
    pub fn get(&self, column: &str) -> &str {
        if column == GROUP_ID_COLUMN {
            return &self.group_id;
        }
        self.cells.get(column).map(String::as_str).unwrap_or("")
    }
}

/// Ordered wide table for one variable group.
///
/// Column order is held in an explicit registry rather than discovered at
/// serialization time: `GROUP_ID` first, then date columns, then remaining
/// variables in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct OutputTable {
    pub variable_group: String,
    pub columns: Vec<String>,
    pub records: Vec<WideRecord>,
}

impl OutputTable {
    pub fn new(variable_group: impl Into<String>) -> Self {
        Self {
            variable_group: variable_group.into(),
            columns: vec![GROUP_ID_COLUMN.to_string()],
            records: Vec::new(),
        }
    }

    pub fn push_record(&mut self, record: WideRecord) {
        self.records.push(record);
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
