use std::path::PathBuf;

/// Outcome of one reshape run, consumed by the summary printer.
#[derive(Debug)]
pub struct ReshapeResult {
    pub site_id: Option<String>,
    pub output_dir: PathBuf,
    pub input_rows: usize,
    pub skipped_rows: usize,
    pub categories: Vec<CategorySummary>,
    pub manifest: Option<PathBuf>,
    pub errors: Vec<String>,
    pub has_errors: bool,
}

#[derive(Debug)]
pub struct CategorySummary {
    pub variable_group: String,
    pub records: usize,
    pub columns: usize,
    /// Written CSV path; `None` on dry runs or write failures.
    pub path: Option<PathBuf>,
}
