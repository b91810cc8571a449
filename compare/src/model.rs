use std::path::{Path, PathBuf};
use std::time::SystemTime;

use sql_bench_summary_model::{load_suite_report_file, SuiteReport};

use crate::error::CompareError;

/// The latest report from a results directory, and the one before it if there is one.
#[derive(Debug, Clone)]
pub struct ResultHistory {
    pub latest_path: PathBuf,
    pub latest: SuiteReport,
    pub previous: Option<SuiteReport>,
}

impl ResultHistory {
    /// Load the two most recent reports from `dir`.
    ///
    /// The latest report must load. A previous report that cannot be read is skipped with a
    /// warning, the comparison then shows no deltas for that side.
    pub fn load(dir: &Path) -> Result<Self, CompareError> {
        let mut recent = recent_report_files(dir, 2)?.into_iter();
        let latest_path = recent.next().ok_or_else(|| CompareError::NoResults {
            dir: dir.to_path_buf(),
        })?;
        let latest = load_suite_report_file(&latest_path).map_err(|e| CompareError::Load {
            path: latest_path.clone(),
            reason: format!("{e:#}"),
        })?;

        let previous = recent.next().and_then(|path| match load_suite_report_file(&path) {
            Ok(report) => Some(report),
            Err(e) => {
                log::warn!("Ignoring previous results {}: {e:#}", path.display());
                None
            }
        });

        if let Some(previous) = &previous {
            if previous.fingerprint() != latest.fingerprint() {
                log::warn!(
                    "The two most recent runs in {} used different configurations, deltas may not be meaningful",
                    dir.display()
                );
            }
        }

        Ok(Self {
            latest_path,
            latest,
            previous,
        })
    }

    pub fn file_name(&self) -> String {
        self.latest_path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default()
    }
}

/// The `limit` most recently modified `*.json` files in `dir`, newest first.
///
/// Files with the same modification time are ordered by name, descending, which keeps exports
/// written in the same second in timestamp order.
pub fn recent_report_files(dir: &Path, limit: usize) -> Result<Vec<PathBuf>, CompareError> {
    let read_dir_err = |source| CompareError::ReadDir {
        dir: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_dir_err)? {
        let entry = entry.map_err(read_dir_err)?;
        let path = entry.path();
        if !path.is_file() || path.extension().and_then(|ext| ext.to_str()) != Some("json") {
            continue;
        }
        let modified = entry
            .metadata()
            .and_then(|meta| meta.modified())
            .unwrap_or(SystemTime::UNIX_EPOCH);
        files.push((modified, path));
    }

    files.sort_by(|a, b| b.cmp(a));
    Ok(files.into_iter().take(limit).map(|(_, path)| path).collect())
}
