//! CSV reader for sheet-shaped exports.

use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{IngestError, Result};
use crate::sheet::{SheetTable, normalize_cell};

/// Read a delimited text export into a [`SheetTable`].
pub fn read_csv_table(path: &Path) -> Result<SheetTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;
    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record?;
        raw_rows.push(record.iter().map(normalize_cell).collect());
    }
    SheetTable::from_rows(raw_rows).ok_or_else(|| IngestError::EmptyInput(path.to_path_buf()))
}
