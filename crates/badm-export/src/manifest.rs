//! JSON run manifest written alongside the per-group CSVs.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use badm_model::OutputTable;

use crate::csv_out::WrittenTable;

pub const MANIFEST_FILE: &str = "reshape-manifest.json";

/// Summary of one reshape run.
#[derive(Debug, Serialize, Deserialize)]
pub struct RunManifest {
    pub site_id: Option<String>,
    pub generated_at: String,
    pub input_rows: usize,
    pub categories: Vec<CategoryEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryEntry {
    pub variable_group: String,
    pub file: String,
    pub records: usize,
    pub columns: usize,
}

impl RunManifest {
    /// Assemble a manifest from reshaped tables and their written files.
    pub fn new(
        site_id: Option<String>,
        input_rows: usize,
        tables: &[OutputTable],
        written: &[WrittenTable],
    ) -> Self {
        let categories = tables
            .iter()
            .map(|table| {
                let file = written
                    .iter()
                    .find(|entry| entry.variable_group == table.variable_group)
                    .and_then(|entry| entry.path.file_name())
                    .and_then(|name| name.to_str())
                    .unwrap_or_default()
                    .to_string();
                CategoryEntry {
                    variable_group: table.variable_group.clone(),
                    file,
                    records: table.record_count(),
                    columns: table.columns.len(),
                }
            })
            .collect();
        Self {
            site_id,
            generated_at: Utc::now().to_rfc3339(),
            input_rows,
            categories,
        }
    }
}

/// Write the manifest JSON into the output directory.
pub fn write_manifest(output_dir: &Path, manifest: &RunManifest) -> Result<PathBuf> {
    let path = output_dir.join(MANIFEST_FILE);
    let json = serde_json::to_string_pretty(manifest).context("serialize manifest")?;
    fs::write(&path, json).with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}
