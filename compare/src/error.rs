use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompareError {
    #[error("Failed to read results directory {dir}: {source}")]
    ReadDir {
        dir: PathBuf,
        source: std::io::Error,
    },
    #[error("No results found in {dir}")]
    NoResults { dir: PathBuf },
    #[error("Failed to load results from {path}: {reason}")]
    Load { path: PathBuf, reason: String },
    #[error("Failed to render comparison: {0}")]
    Render(#[from] std::fmt::Error),
}
