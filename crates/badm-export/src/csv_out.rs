//! Per-variable-group CSV writing.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use badm_model::OutputTable;

/// A per-group CSV written to disk.
#[derive(Debug, Clone)]
pub struct WrittenTable {
    pub variable_group: String,
    pub path: PathBuf,
    pub records: usize,
}

/// Map a variable group name to a file-system-safe file stem.
pub fn sanitize_file_stem(name: &str) -> String {
    let stem: String = name
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() || ch == '_' || ch == '-' {
                ch
            } else {
                '_'
            }
        })
        .collect();
    if stem.is_empty() {
        "GROUP".to_string()
    } else {
        stem
    }
}

/// Write one CSV per variable group into `output_dir`, creating it on
/// demand. Files are named after the sanitized group name.
pub fn write_category_tables(output_dir: &Path, tables: &[OutputTable]) -> Result<Vec<WrittenTable>> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("create output dir: {}", output_dir.display()))?;
    let mut written = Vec::with_capacity(tables.len());
    for table in tables {
        let path = output_dir.join(format!("{}.csv", sanitize_file_stem(&table.variable_group)));
        write_table(&path, table)?;
        info!(
            variable_group = %table.variable_group,
            path = %path.display(),
            records = table.record_count(),
            "table written"
        );
        written.push(WrittenTable {
            variable_group: table.variable_group.clone(),
            path,
            records: table.record_count(),
        });
    }
    Ok(written)
}

/// Write a single table: header row first, blank cells for missing values.
pub fn write_table(path: &Path, table: &OutputTable) -> Result<()> {
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("create {}", path.display()))?;
    writer
        .write_record(&table.columns)
        .with_context(|| format!("write header: {}", path.display()))?;
    for record in &table.records {
        writer
            .write_record(table.columns.iter().map(|column| record.get(column)))
            .with_context(|| format!("write {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;
    Ok(())
}

/// Render a table to CSV text without touching the file system.
pub fn render_table(table: &OutputTable) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&table.columns)?;
    for record in &table.records {
        writer.write_record(table.columns.iter().map(|column| record.get(column)))?;
    }
    let bytes = writer.into_inner().context("finish csv buffer")?;
    let text = String::from_utf8(bytes).context("csv output not utf-8")?;
    Ok(text)
}
