mod cli;
mod definition;
mod dispatch;
mod executor;
mod init;
mod progress;
mod run;
mod runner;
mod selection;
mod shutdown;
mod types;

pub mod prelude {
    pub use crate::cli::{DialectOpt, KeyStrategyOpt, SqlBenchCli, SuiteOpt};
    pub use crate::definition::{SuiteDefinition, SuiteDefinitionBuilder, RESULTS_DIR_ENV};
    pub use crate::dispatch::{DispatchStep, TransactionPlan};
    pub use crate::executor::Executor;
    pub use crate::init::init;
    pub use crate::run::run;
    pub use crate::runner::BenchmarkRunner;
    pub use crate::selection::Selection;
    pub use crate::types::SqlBenchResult;

    pub use sql_bench_core::prelude::*;
    pub use sql_bench_instruments::{ReportConfig, Reporter};
    pub use sql_bench_summary_model::{
        BenchmarkResult, ScenarioFailure, ScenarioOutcome, SuiteReport, SuiteResult,
    };
    pub use sql_bench_workload::prelude::*;
}
