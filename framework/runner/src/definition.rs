use std::path::PathBuf;

use sql_bench_core::prelude::ScenarioId;
use sql_bench_workload::prelude::{ScenarioCatalog, WorkloadOptions};

use crate::cli::{SqlBenchCli, SuiteOpt};
use crate::init::init;
use crate::selection::Selection;

/// Environment variable that sets the directory results are exported to.
pub const RESULTS_DIR_ENV: &str = "SQL_BENCH_RESULTS_DIR";
const DEFAULT_RESULTS_DIR: &str = "results";

/// The builder for a suite definition.
///
/// Starts from the command line and lets the suite binary override anything it needs to.
#[derive(Debug, Clone)]
pub struct SuiteDefinitionBuilder {
    /// The name of the suite.
    ///
    /// Recommended value is `env!("CARGO_PKG_NAME")`.
    name: String,
    cli: SqlBenchCli,
    selection: Option<Selection>,
    results_dir: Option<PathBuf>,
}

/// Everything [crate::run::run] needs to know about a suite.
#[derive(Debug, Clone)]
pub struct SuiteDefinition {
    pub name: String,
    pub connection_string: String,
    pub selection: Selection,
    pub seed: u64,
    pub options: WorkloadOptions,
    pub no_progress: bool,
    /// Where the JSON report is written, `None` when export is disabled.
    pub results_dir: Option<PathBuf>,
    pub run_id: Option<String>,
}

impl SuiteDefinitionBuilder {
    pub fn new(name: &str, cli: SqlBenchCli) -> Self {
        Self {
            name: name.to_string(),
            cli,
            selection: None,
            results_dir: None,
        }
    }

    /// Initialise logging, parse the command line and start a definition from it.
    pub fn new_with_init(name: &str) -> Self {
        Self::new(name, init())
    }

    /// The connection string given on the command line.
    pub fn connection_string(&self) -> &str {
        &self.cli.connection_string
    }

    /// Override the scenarios chosen on the command line.
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = Some(selection);
        self
    }

    /// Export results here instead of the directory from the environment.
    pub fn with_results_dir(mut self, results_dir: impl Into<PathBuf>) -> Self {
        self.results_dir = Some(results_dir.into());
        self
    }

    pub fn build(self) -> SuiteDefinition {
        let selection = self.selection.unwrap_or_else(|| {
            if !self.cli.scenarios.is_empty() {
                Selection::Explicit(self.cli.scenarios.clone())
            } else {
                match self.cli.suite {
                    SuiteOpt::All => Selection::All,
                    SuiteOpt::Quick => Selection::Quick,
                }
            }
        });

        let results_dir = (!self.cli.no_export).then(|| {
            self.results_dir.unwrap_or_else(|| {
                std::env::var(RESULTS_DIR_ENV)
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from(DEFAULT_RESULTS_DIR))
            })
        });

        SuiteDefinition {
            name: self.name,
            connection_string: self.cli.connection_string,
            selection,
            seed: self.cli.seed,
            options: WorkloadOptions {
                dialect: self.cli.dialect.into(),
                key_strategy: self.cli.key_strategy.into(),
            },
            no_progress: self.cli.no_progress,
            results_dir,
            run_id: self.cli.run_id,
        }
    }
}

impl SuiteDefinition {
    pub fn catalog(&self) -> ScenarioCatalog {
        ScenarioCatalog::new(self.options)
    }

    pub fn scenario_ids(&self) -> Vec<ScenarioId> {
        self.selection.resolve(&self.catalog())
    }
}
