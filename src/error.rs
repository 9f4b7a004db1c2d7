use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("workbook not found; searched {searched:?}")]
    FileNotFound { searched: Vec<PathBuf> },

    #[error("failed to open workbook: {0}")]
    Workbook(#[from] calamine::XlsxError),

    #[error("worksheet '{name}' not found; available sheets: {available:?}")]
    SheetNotFound { name: String, available: Vec<String> },

    #[error("workbook contains no worksheets")]
    EmptyWorkbook,

    #[error("failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
}
