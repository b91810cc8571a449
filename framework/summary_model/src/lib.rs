use itertools::Itertools;
use serde::{Deserialize, Serialize};
use sha3::Digest;
use sql_bench_core::prelude::ScenarioId;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Measurement for one successful scenario run.
///
/// Serialised with camelCase field names, which is the format consumed by the comparison tool.
/// Rows written by older exports (`testNumber`, `testDescription`, `duration` in seconds and
/// `statementsExecuted`) are accepted when loading.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkResult {
    /// The scenario that was run
    #[serde(alias = "testNumber")]
    pub scenario_id: ScenarioId,
    /// The scenario description, in the form `Test <id>: <label>`
    #[serde(alias = "testDescription")]
    pub description: String,
    /// Wall clock time spent dispatching the scenario's statements
    #[serde(alias = "duration")]
    pub elapsed_seconds: f64,
    /// The number of statements in the scenario, directive statements included
    #[serde(alias = "statementsExecuted")]
    pub statement_count: usize,
}

/// A scenario that was attempted as part of a suite and did not complete.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioFailure {
    pub scenario_id: ScenarioId,
    /// Rendered error chain
    pub error: String,
}

/// The outcome of a single attempted scenario.
#[derive(Debug, Clone, PartialEq)]
pub enum ScenarioOutcome {
    Succeeded(BenchmarkResult),
    Failed(ScenarioFailure),
}

impl ScenarioOutcome {
    pub fn scenario_id(&self) -> ScenarioId {
        match self {
            ScenarioOutcome::Succeeded(result) => result.scenario_id,
            ScenarioOutcome::Failed(failure) => failure.scenario_id,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ScenarioOutcome::Succeeded(_))
    }
}

/// Outcomes of a suite run, in the order the scenarios were attempted.
///
/// Outcomes are only ever appended. The aggregates only consider successful scenarios, so a
/// suite where every scenario failed reports zero for all of them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SuiteResult {
    outcomes: Vec<ScenarioOutcome>,
}

impl SuiteResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, outcome: ScenarioOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn outcomes(&self) -> &[ScenarioOutcome] {
        &self.outcomes
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn successes(&self) -> impl Iterator<Item = &BenchmarkResult> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            ScenarioOutcome::Succeeded(result) => Some(result),
            ScenarioOutcome::Failed(_) => None,
        })
    }

    pub fn failures(&self) -> impl Iterator<Item = &ScenarioFailure> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            ScenarioOutcome::Succeeded(_) => None,
            ScenarioOutcome::Failed(failure) => Some(failure),
        })
    }

    pub fn total_elapsed_seconds(&self) -> f64 {
        self.successes().map(|result| result.elapsed_seconds).sum()
    }

    pub fn total_statements(&self) -> usize {
        self.successes().map(|result| result.statement_count).sum()
    }

    pub fn mean_elapsed_seconds(&self) -> f64 {
        let count = self.successes().count();
        if count == 0 {
            return 0.0;
        }

        self.total_elapsed_seconds() / count as f64
    }
}

/// The exported record of a suite run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SuiteReport {
    /// The unique run id
    ///
    /// Chosen by the runner unless one is given on the command line.
    #[serde(default)]
    pub run_id: String,
    /// When the run started, as an RFC 3339 timestamp
    pub timestamp: String,
    /// Human readable name of the executor backend
    pub engine: String,
    /// Version string reported by the executor
    #[serde(alias = "sdkVersion")]
    pub executor_version: String,
    /// The seed every scenario was generated with
    #[serde(default)]
    pub seed: u64,
    /// The scenarios that were selected for the run, in run order
    #[serde(default)]
    pub scenario_ids: Vec<ScenarioId>,
    pub results: Vec<BenchmarkResult>,
    #[serde(default)]
    pub failures: Vec<ScenarioFailure>,
}

impl SuiteReport {
    /// Build a report from a finished suite.
    pub fn new(
        run_id: String,
        timestamp: String,
        engine: String,
        executor_version: String,
        seed: u64,
        scenario_ids: Vec<ScenarioId>,
        suite: &SuiteResult,
    ) -> Self {
        Self {
            run_id,
            timestamp,
            engine,
            executor_version,
            seed,
            scenario_ids,
            results: suite.successes().cloned().collect(),
            failures: suite.failures().cloned().collect(),
        }
    }

    /// Find the result for a scenario, if it succeeded in this run.
    pub fn result_for(&self, scenario_id: ScenarioId) -> Option<&BenchmarkResult> {
        self.results
            .iter()
            .find(|result| result.scenario_id == scenario_id)
    }

    /// Compute a fingerprint for the configuration of this run
    ///
    /// Two runs with the same fingerprint measured the same workloads against the same engine
    /// build. It uses the
    ///     - Engine name
    ///     - Executor version
    ///     - Seed
    ///     - Selected scenario ids, ignoring order and duplicates
    ///
    /// The fingerprint is computed using [sha3::Sha3_256].
    pub fn fingerprint(&self) -> String {
        let mut hasher = sha3::Sha3_256::new();
        Digest::update(&mut hasher, self.engine.as_bytes());
        Digest::update(&mut hasher, self.executor_version.as_bytes());
        Digest::update(&mut hasher, self.seed.to_le_bytes());
        self.scenario_ids
            .iter()
            .sorted()
            .dedup()
            .for_each(|id| Digest::update(&mut hasher, id.to_le_bytes()));

        format!("{:x}", hasher.finalize())
    }

    /// The file name this report is exported under.
    pub fn file_name(&self) -> String {
        results_file_name(&self.engine, &self.timestamp)
    }
}

/// File name for an exported report, `benchmark-<engine-slug>-results-<timestamp>.json`.
///
/// Characters in the timestamp that are awkward in file names are replaced with `-`.
pub fn results_file_name(engine: &str, timestamp: &str) -> String {
    format!(
        "benchmark-{}-results-{}.json",
        engine_slug(engine),
        timestamp.replace([':', '.'], "-")
    )
}

/// Lower case the engine name and collapse every run of non-alphanumeric characters into `-`.
pub fn engine_slug(engine: &str) -> String {
    engine
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(|part| part.to_ascii_lowercase())
        .join("-")
}

/// Serialize the report to a writer as pretty printed JSON
pub fn store_suite_report<W: Write>(report: &SuiteReport, writer: &mut W) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(writer, report)?;
    Ok(())
}

/// Load a report from a reader
pub fn load_suite_report<R: Read>(reader: R) -> anyhow::Result<SuiteReport> {
    let reader = std::io::BufReader::new(reader);
    let report: SuiteReport = serde_json::from_reader(reader)?;
    Ok(report)
}

/// Load a report from a file written by [write_suite_report]
pub fn load_suite_report_file(path: &Path) -> anyhow::Result<SuiteReport> {
    let file = std::fs::File::open(path)?;
    load_suite_report(file)
}

/// Write the report into `dir`, creating the directory if needed
///
/// Returns the path of the written file.
pub fn write_suite_report(report: &SuiteReport, dir: &Path) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(report.file_name());
    let mut file = std::fs::File::create(&path)?;
    store_suite_report(report, &mut file)?;
    file.write_all(b"\n")?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn result(scenario_id: ScenarioId, elapsed_seconds: f64, statement_count: usize) -> BenchmarkResult {
        BenchmarkResult {
            scenario_id,
            description: format!("Test {scenario_id}: sample"),
            elapsed_seconds,
            statement_count,
        }
    }

    fn failure(scenario_id: ScenarioId) -> ScenarioFailure {
        ScenarioFailure {
            scenario_id,
            error: "no such table".to_string(),
        }
    }

    fn sample_report() -> SuiteReport {
        let mut suite = SuiteResult::new();
        suite.push(ScenarioOutcome::Succeeded(result(1, 0.5, 1001)));
        suite.push(ScenarioOutcome::Failed(failure(2)));
        suite.push(ScenarioOutcome::Succeeded(result(4, 1.5, 25103)));

        SuiteReport::new(
            "run-1".to_string(),
            "2024-05-01T10:11:12.123Z".to_string(),
            "sqlite (rusqlite)".to_string(),
            "3.46.0".to_string(),
            42,
            vec![1, 2, 4],
            &suite,
        )
    }

    #[test]
    fn aggregates_only_count_successes() {
        let mut suite = SuiteResult::new();
        suite.push(ScenarioOutcome::Succeeded(result(1, 1.0, 10)));
        suite.push(ScenarioOutcome::Failed(failure(2)));
        suite.push(ScenarioOutcome::Succeeded(result(3, 2.0, 30)));

        assert_eq!(3, suite.len());
        assert_eq!(3.0, suite.total_elapsed_seconds());
        assert_eq!(40, suite.total_statements());
        assert_eq!(1.5, suite.mean_elapsed_seconds());
        assert_eq!(
            vec![1, 2, 3],
            suite.outcomes().iter().map(|o| o.scenario_id()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn aggregates_are_zero_without_successes() {
        let mut suite = SuiteResult::new();
        assert_eq!(0.0, suite.mean_elapsed_seconds());

        suite.push(ScenarioOutcome::Failed(failure(1)));
        assert_eq!(0.0, suite.total_elapsed_seconds());
        assert_eq!(0, suite.total_statements());
        assert_eq!(0.0, suite.mean_elapsed_seconds());
    }

    #[test]
    fn result_uses_camel_case_fields() {
        let value = serde_json::to_value(result(7, 0.25, 30_003)).unwrap();

        assert_eq!(
            serde_json::json!({
                "scenarioId": 7,
                "description": "Test 7: sample",
                "elapsedSeconds": 0.25,
                "statementCount": 30003,
            }),
            value
        );
    }

    #[test]
    fn report_splits_outcomes() {
        let report = sample_report();

        assert_eq!(vec![1, 4], report.results.iter().map(|r| r.scenario_id).collect::<Vec<_>>());
        assert_eq!(vec![failure(2)], report.failures);
        assert!(report.result_for(2).is_none());
        assert_eq!(Some(1.5), report.result_for(4).map(|r| r.elapsed_seconds));
    }

    #[test]
    fn fingerprint_ignores_run_identity_and_order() {
        let report = sample_report();

        let mut rerun = report.clone();
        rerun.run_id = "run-2".to_string();
        rerun.timestamp = "2024-05-02T00:00:00Z".to_string();
        rerun.scenario_ids = vec![4, 2, 1, 1];
        assert_eq!(report.fingerprint(), rerun.fingerprint());

        let mut reseeded = report.clone();
        reseeded.seed = 7;
        assert_ne!(report.fingerprint(), reseeded.fingerprint());
    }

    #[test]
    fn file_name_is_filesystem_friendly() {
        assert_eq!(
            "benchmark-sqlite-rusqlite-results-2024-05-01T10-11-12-123Z.json",
            sample_report().file_name()
        );
    }

    #[test]
    fn write_then_load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        let report = sample_report();

        let path = write_suite_report(&report, &dir.path().join("nested")).unwrap();

        assert!(path.starts_with(dir.path()));
        assert_eq!(report, load_suite_report_file(&path).unwrap());
    }

    #[test]
    fn load_accepts_minimal_exports() {
        let json = r#"{
            "timestamp": "2024-05-01T10:11:12.123Z",
            "engine": "better-sqlite3",
            "sdkVersion": "11.0.0",
            "results": [
                { "scenarioId": 1, "description": "Test 1: 1000 INSERTs", "elapsedSeconds": 0.1, "statementCount": 1001 }
            ]
        }"#;

        let report = load_suite_report(json.as_bytes()).unwrap();

        assert_eq!("11.0.0", report.executor_version);
        assert_eq!(1, report.results.len());
        assert!(report.failures.is_empty());
        assert!(report.run_id.is_empty());
    }

    #[test]
    fn load_accepts_older_row_names() {
        let json = r#"{
            "timestamp": "2024-05-01T10:11:12.123Z",
            "engine": "powersync-node",
            "sdkVersion": "0.8.1",
            "results": [
                { "testNumber": 2, "testDescription": "Test 2: 25000 INSERTs in a transaction", "duration": 1.25, "statementsExecuted": 25003 }
            ]
        }"#;

        let report = load_suite_report(json.as_bytes()).unwrap();

        assert_eq!(
            Some(&BenchmarkResult {
                scenario_id: 2,
                description: "Test 2: 25000 INSERTs in a transaction".to_string(),
                elapsed_seconds: 1.25,
                statement_count: 25_003,
            }),
            report.result_for(2)
        );
    }
}
