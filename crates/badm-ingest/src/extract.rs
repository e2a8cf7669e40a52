//! Extraction of the five relevant BIF columns into long rows.

use badm_model::LongRow;
use tracing::{debug, warn};

use crate::error::{IngestError, Result};
use crate::sheet::SheetTable;

/// Columns a BIF export must carry, in the order the extract reads them.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    "SITE_ID",
    "GROUP_ID",
    "VARIABLE_GROUP",
    "VARIABLE",
    "DATAVALUE",
];

/// Long rows extracted from a BIF sheet plus provenance facts.
#[derive(Debug, Default)]
pub struct BifExtract {
    /// First non-blank site identifier seen in the sheet.
    pub site_id: Option<String>,
    pub rows: Vec<LongRow>,
    /// Rows dropped for missing a group id, variable group, or variable.
    pub skipped: usize,
}

/// Pull the five relevant columns out of a sheet.
///
/// Header matching is case-insensitive; a missing column fails fast. Rows
/// lacking any identifier are dropped with a warning - a blank DATAVALUE
/// is a legitimate observation and is kept.
pub fn extract_rows(table: &SheetTable) -> Result<BifExtract> {
    let mut indices = [0usize; REQUIRED_COLUMNS.len()];
    for (slot, name) in REQUIRED_COLUMNS.iter().enumerate() {
        indices[slot] = table
            .column_index(name)
            .ok_or_else(|| IngestError::MissingColumn((*name).to_string()))?;
    }
    let [site_idx, group_idx, variable_group_idx, variable_idx, value_idx] = indices;

    let mut extract = BifExtract::default();
    for row in &table.rows {
        let field = |idx: usize| row.get(idx).map(String::as_str).unwrap_or("");

        let site = field(site_idx);
        if extract.site_id.is_none() && !site.is_empty() {
            extract.site_id = Some(site.to_string());
        }

        let group_id = field(group_idx);
        let variable_group = field(variable_group_idx);
        let variable = field(variable_idx);
        if group_id.is_empty() || variable_group.is_empty() || variable.is_empty() {
            extract.skipped += 1;
            continue;
        }
        extract.rows.push(LongRow::new(
            group_id,
            variable_group,
            variable,
            field(value_idx),
        ));
    }

    if extract.skipped > 0 {
        warn!(
            skipped = extract.skipped,
            "dropped rows with missing identifiers"
        );
    }
    debug!(
        site_id = extract.site_id.as_deref().unwrap_or("unknown"),
        row_count = extract.rows.len(),
        "rows extracted"
    );
    Ok(extract)
}
