use anyhow::Result;
use comfy_table::Table;
use tracing::info_span;

use badm_cli::pipeline::{ExportConfig, export, ingest, reshape_tables};
use badm_cli::types::{CategorySummary, ReshapeResult};

use crate::cli::{InspectArgs, ReshapeArgs};
use crate::summary::apply_table_style;

pub fn run_reshape(args: &ReshapeArgs) -> Result<ReshapeResult> {
    let span = info_span!("reshape_run", input = %args.input.display());
    let _guard = span.enter();

    let ingested = ingest(&args.input, &args.sheet)?;
    let tables = reshape_tables(&ingested.extract);
    let export_result = export(ExportConfig {
        output_dir: &args.output_dir,
        tables: &tables,
        extract: &ingested.extract,
        dry_run: args.dry_run,
        write_manifest: !args.no_manifest,
    });

    let mut categories = Vec::with_capacity(tables.len());
    for table in &tables {
        let path = export_result
            .written
            .iter()
            .find(|written| written.variable_group == table.variable_group)
            .map(|written| written.path.clone());
        categories.push(CategorySummary {
            variable_group: table.variable_group.clone(),
            records: table.record_count(),
            columns: table.columns.len(),
            path,
        });
    }

    let has_errors = !export_result.errors.is_empty();
    Ok(ReshapeResult {
        site_id: ingested.extract.site_id.clone(),
        output_dir: args.output_dir.clone(),
        input_rows: ingested.extract.rows.len(),
        skipped_rows: ingested.extract.skipped,
        categories,
        manifest: export_result.manifest,
        errors: export_result.errors,
        has_errors,
    })
}

pub fn run_inspect(args: &InspectArgs) -> Result<()> {
    let ingested = ingest(&args.input, &args.sheet)?;
    let tables = reshape_tables(&ingested.extract);

    if let Some(site_id) = &ingested.extract.site_id {
        println!("Site: {site_id}");
    }
    let mut table = Table::new();
    table.set_header(vec!["Variable group", "Groups", "Columns"]);
    apply_table_style(&mut table);
    for output in &tables {
        table.add_row(vec![
            output.variable_group.clone(),
            output.record_count().to_string(),
            output.columns.len().to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}
