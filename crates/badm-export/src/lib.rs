//! Output consumer for reshaped tables.
//!
//! Writes one CSV file per variable group plus a JSON run manifest. The
//! reshape engine hands over fully-ordered [`badm_model::OutputTable`]s;
//! nothing here reorders rows or columns.

pub mod csv_out;
pub mod manifest;

pub use csv_out::{WrittenTable, render_table, sanitize_file_stem, write_category_tables};
pub use manifest::{CategoryEntry, MANIFEST_FILE, RunManifest, write_manifest};
