//! Markdown comparison of SQL Bench results.
//!
//! Each side of a comparison is a results directory. The most recent report in a directory is
//! compared with the other side, and with the report before it on the same side.

mod error;
mod markdown;
mod model;

pub use error::CompareError;
pub use markdown::{render_comparison, strip_test_prefix};
pub use model::{recent_report_files, ResultHistory};

use std::path::Path;

/// Load both directories and render the comparison.
pub fn compare_dirs(left: &Path, right: &Path) -> Result<String, CompareError> {
    let left = ResultHistory::load(left)?;
    let right = ResultHistory::load(right)?;

    Ok(render_comparison(&left, &right)?)
}
