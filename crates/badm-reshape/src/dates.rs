//! Date resolution: one pass over the full row set, category-agnostic.

use std::collections::BTreeMap;

use badm_model::LongRow;

/// Date facts resolved for one group.
#[derive(Debug, Clone)]
struct GroupEntry {
    date_key: String,
    /// First observed value per date variable name.
    fields: BTreeMap<String, String>,
}

/// Resolver output: a total `group id -> date key` mapping plus the
/// first-discovery order of date variable names across the whole dataset.
#[derive(Debug, Clone, Default)]
pub struct DateIndex {
    columns: Vec<String>,
    groups: BTreeMap<String, GroupEntry>,
}

impl DateIndex {
    /// Date variable names in first-discovery order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Resolved date key for a group: the first date value seen, else the
    /// group id itself. Never empty for a non-empty group id.
    pub fn date_key<'a>(&'a self, group_id: &'a str) -> &'a str {
        self.groups
            .get(group_id)
            .map(|entry| entry.date_key.as_str())
            .unwrap_or(group_id)
    }

    /// First observed value of one date variable for a group.
    pub fn field(&self, group_id: &str, variable: &str) -> Option<&str> {
        self.groups
            .get(group_id)
            .and_then(|entry| entry.fields.get(variable))
            .map(String::as_str)
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }
}

/// Scan the full row set once and resolve a date key for every group.
///
/// The first date row encountered per group wins; later duplicates are
/// ignored, not merged. Blank date values count as absent, so the group id
/// fallback applies to them too.
pub fn resolve_dates(rows: &[LongRow]) -> DateIndex {
    let mut columns: Vec<String> = Vec::new();
    let mut keys: BTreeMap<String, Option<String>> = BTreeMap::new();
    let mut fields: BTreeMap<String, BTreeMap<String, String>> = BTreeMap::new();

    for row in rows {
        let key = keys.entry(row.group_id.clone()).or_insert(None);
        if !row.is_date_row() || row.value.trim().is_empty() {
            continue;
        }
        if key.is_none() {
            *key = Some(row.value.clone());
        }
        if !columns.iter().any(|column| column == &row.variable) {
            columns.push(row.variable.clone());
        }
        fields
            .entry(row.group_id.clone())
            .or_default()
            .entry(row.variable.clone())
            .or_insert_with(|| row.value.clone());
    }

    let groups = keys
        .into_iter()
        .map(|(group_id, key)| {
            let date_key = key.unwrap_or_else(|| group_id.clone());
            let fields = fields.remove(&group_id).unwrap_or_default();
            (group_id, GroupEntry { date_key, fields })
        })
        .collect();

    DateIndex { columns, groups }
}
