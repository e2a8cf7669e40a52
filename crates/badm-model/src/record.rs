use crate::DATE_MARKER;

/// One long-form observation from a BIF export.
///
/// `group_id` scopes rows into one logical record, `variable_group`
/// partitions rows into independent output tables, and `variable`/`value`
/// carry the observed fact. Immutable once read.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LongRow {
    pub group_id: String,
    pub variable_group: String,
    pub variable: String,
    pub value: String,
}

impl LongRow {
    pub fn new(
        group_id: impl Into<String>,
        variable_group: impl Into<String>,
        variable: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            variable_group: variable_group.into(),
            variable: variable.into(),
            value: value.into(),
        }
    }

    /// True when the variable name designates a date field.
    pub fn is_date_row(&self) -> bool {
        self.variable.contains(DATE_MARKER)
    }
}
