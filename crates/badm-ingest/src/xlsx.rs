//! XLSX reader for BIF workbooks.

use std::path::Path;

use calamine::{Data, Reader, Xlsx, open_workbook};

use crate::error::{IngestError, Result};
use crate::sheet::{SheetTable, normalize_cell};

/// Read one named worksheet into a [`SheetTable`].
pub fn read_xlsx_sheet(path: &Path, sheet: &str) -> Result<SheetTable> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    if !workbook.sheet_names().iter().any(|name| name == sheet) {
        return Err(IngestError::SheetNotFound(sheet.to_string()));
    }
    let range = workbook.worksheet_range(sheet)?;

    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for row in range.rows() {
        raw_rows.push(
            row.iter()
                .map(|cell| normalize_cell(&cell_text(cell)))
                .collect(),
        );
    }
    SheetTable::from_rows(raw_rows).ok_or_else(|| IngestError::EmptyInput(path.to_path_buf()))
}

/// Render one worksheet cell as text.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(value) => value.clone(),
        Data::Float(value) => format_number(*value),
        Data::Int(value) => value.to_string(),
        Data::Bool(value) => (if *value { "TRUE" } else { "FALSE" }).to_string(),
        Data::DateTime(value) => format_number(value.as_f64()),
        Data::DateTimeIso(value) | Data::DurationIso(value) => value.clone(),
    }
}

/// Integral floats drop the trailing `.0` so numeric group ids survive the
/// spreadsheet round trip as integers.
fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 9.0e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
