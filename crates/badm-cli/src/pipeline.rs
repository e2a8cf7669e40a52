//! Reshape pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: read the workbook or CSV and extract long-form rows
//! 2. **Reshape**: resolve dates, pivot per variable group, order tables
//! 3. **Export**: write one CSV per group plus the run manifest
//!
//! Each stage takes the output of the previous stage and returns typed
//! results; export errors accumulate instead of aborting the run.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use badm_export::{RunManifest, WrittenTable, write_category_tables, write_manifest};
use badm_ingest::{BifExtract, extract_rows, read_input};
use badm_model::OutputTable;
use badm_reshape::reshape;

/// Result of the ingest stage.
#[derive(Debug)]
pub struct IngestResult {
    pub extract: BifExtract,
}

/// Read the input file and extract the long-form BIF rows.
pub fn ingest(input: &Path, sheet: &str) -> Result<IngestResult> {
    let span = info_span!("ingest", input = %input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let table = read_input(input, sheet).with_context(|| format!("read {}", input.display()))?;
    let extract = extract_rows(&table)
        .with_context(|| format!("extract BIF columns from {}", input.display()))?;
    info!(
        site_id = extract.site_id.as_deref().unwrap_or("unknown"),
        row_count = extract.rows.len(),
        skipped = extract.skipped,
        duration_ms = start.elapsed().as_millis(),
        "ingest complete"
    );
    Ok(IngestResult { extract })
}

/// Run the reshape engine over the extracted rows.
pub fn reshape_tables(extract: &BifExtract) -> Vec<OutputTable> {
    let span = info_span!("reshape");
    let _guard = span.enter();
    let start = Instant::now();

    let tables = reshape(&extract.rows);
    let record_count: usize = tables.iter().map(OutputTable::record_count).sum();
    info!(
        category_count = tables.len(),
        record_count,
        duration_ms = start.elapsed().as_millis(),
        "reshape complete"
    );
    tables
}

/// Result of the export stage.
#[derive(Debug, Default)]
pub struct ExportResult {
    pub written: Vec<WrittenTable>,
    pub manifest: Option<PathBuf>,
    pub errors: Vec<String>,
}

/// Export configuration.
pub struct ExportConfig<'a> {
    pub output_dir: &'a Path,
    pub tables: &'a [OutputTable],
    pub extract: &'a BifExtract,
    pub dry_run: bool,
    pub write_manifest: bool,
}

/// Write per-group CSVs and the run manifest.
pub fn export(config: ExportConfig<'_>) -> ExportResult {
    let span = info_span!("export", output_dir = %config.output_dir.display());
    let _guard = span.enter();
    let start = Instant::now();
    let mut result = ExportResult::default();

    if config.dry_run {
        info!(
            category_count = config.tables.len(),
            duration_ms = start.elapsed().as_millis(),
            "export skipped (dry run)"
        );
        return result;
    }

    match write_category_tables(config.output_dir, config.tables) {
        Ok(written) => result.written = written,
        Err(error) => {
            result.errors.push(format!("csv output: {error:#}"));
            return result;
        }
    }

    if config.write_manifest {
        let manifest = RunManifest::new(
            config.extract.site_id.clone(),
            config.extract.rows.len(),
            config.tables,
            &result.written,
        );
        match write_manifest(config.output_dir, &manifest) {
            Ok(path) => result.manifest = Some(path),
            Err(error) => result.errors.push(format!("manifest: {error:#}")),
        }
    }

    for written in &result.written {
        debug!(
            variable_group = %written.variable_group,
            path = %written.path.display(),
            records = written.records,
            "output prepared"
        );
    }
    info!(
        file_count = result.written.len(),
        duration_ms = start.elapsed().as_millis(),
        "export complete"
    );
    result
}
