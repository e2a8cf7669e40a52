//! Input provider for BIF exports.
//!
//! Reads an AmeriFlux BADM Interchange Format export - the named worksheet
//! of an XLSX workbook, or a CSV dump of the same sheet - and extracts the
//! five relevant columns into [`badm_model::LongRow`]s. Acquisition
//! failures (bad path, missing sheet, missing column) fail fast here; the
//! reshape engine downstream never sees a partially-read table.

pub mod csv_table;
pub mod error;
pub mod extract;
pub mod sheet;
pub mod xlsx;

pub use csv_table::read_csv_table;
pub use error::{IngestError, Result};
pub use extract::{BifExtract, REQUIRED_COLUMNS, extract_rows};
pub use sheet::SheetTable;
pub use xlsx::read_xlsx_sheet;

use std::path::Path;

/// Default worksheet name in AmeriFlux BIF workbooks.
pub const DEFAULT_SHEET: &str = "AMF-BIF";

/// Read an input file into a [`SheetTable`], dispatching on the extension.
pub fn read_input(path: &Path, sheet: &str) -> Result<SheetTable> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());
    match extension.as_deref() {
        Some("xlsx" | "xlsm") => read_xlsx_sheet(path, sheet),
        Some("csv" | "txt") => read_csv_table(path),
        _ => Err(IngestError::UnsupportedFormat(path.to_path_buf())),
    }
}
