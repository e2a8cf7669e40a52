use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("xlsx read error: {0}")]
    Xlsx(#[from] calamine::XlsxError),
    #[error("csv read error: {0}")]
    Csv(#[from] csv::Error),
    #[error("sheet not found: {0}")]
    SheetNotFound(String),
    #[error("required column missing: {0}")]
    MissingColumn(String),
    #[error("unsupported input format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
    #[error("input has no header row: {}", .0.display())]
    EmptyInput(PathBuf),
}

pub type Result<T> = std::result::Result<T, IngestError>;
