//! Rectangular text tables shared by the XLSX and CSV readers.

/// A table read from one worksheet or CSV file: normalized headers plus
/// data rows padded to the header width.
#[derive(Debug, Clone, Default)]
pub struct SheetTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl SheetTable {
    /// Build a table from raw rows. The first non-empty row becomes the
    /// header; fully-empty rows are dropped. Returns `None` when no header
    /// row exists.
    pub(crate) fn from_rows(raw_rows: Vec<Vec<String>>) -> Option<Self> {
        let header_index = raw_rows
            .iter()
            .position(|row| row.iter().any(|cell| !cell.trim().is_empty()))?;
        let headers: Vec<String> = raw_rows[header_index]
            .iter()
            .map(|value| normalize_header(value))
            .collect();

        let mut rows = Vec::new();
        for record in raw_rows.into_iter().skip(header_index + 1) {
            if record.iter().all(|value| value.trim().is_empty()) {
                continue;
            }
            let mut row = Vec::with_capacity(headers.len());
            for idx in 0..headers.len() {
                row.push(record.get(idx).cloned().unwrap_or_default());
            }
            rows.push(row);
        }
        Some(Self { headers, rows })
    }

    /// Position of a column by name, case-insensitively.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers
            .iter()
            .position(|header| header.eq_ignore_ascii_case(name))
    }

    /// Cell value at (row, column), blank when out of range.
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// Trim a header, strip any BOM, and collapse internal whitespace runs.
pub(crate) fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

/// Trim a data cell and strip any BOM.
pub(crate) fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}
