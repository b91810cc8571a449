use std::sync::Arc;

use anyhow::Context;
use sql_bench_instruments::ReportConfig;
use sql_bench_summary_model::{write_suite_report, SuiteReport, SuiteResult};

use crate::definition::SuiteDefinition;
use crate::executor::Executor;
use crate::progress::start_progress;
use crate::runner::BenchmarkRunner;
use crate::shutdown::start_shutdown_listener;
use crate::types::SqlBenchResult;

/// Run a suite against `executor`.
///
/// Prints a summary table when the suite finishes and, unless export is disabled, writes a JSON
/// report into the results directory. Scenario failures are part of the returned [SuiteResult],
/// only setup and export problems are returned as errors.
pub fn run<E: Executor>(definition: SuiteDefinition, executor: E) -> SqlBenchResult<SuiteResult> {
    let run_id = definition
        .run_id
        .clone()
        .unwrap_or_else(|| nanoid::nanoid!());
    let started_at = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
    let scenario_ids = definition.scenario_ids();

    log::info!(
        "Running suite {} ({run_id}) with {} scenarios against {} {}",
        definition.name,
        scenario_ids.len(),
        executor.engine(),
        executor.version()
    );

    let runtime = tokio::runtime::Runtime::new().context("Failed to create Tokio runtime")?;
    let shutdown_handle = start_shutdown_listener(&runtime);
    let reporter = Arc::new(ReportConfig::default().enable_summary().init());

    let mut runner = BenchmarkRunner::new(executor, definition.catalog())
        .with_reporter(reporter.clone())
        .with_shutdown_listener(shutdown_handle.new_listener());
    if !definition.no_progress {
        runner = runner.with_progress(start_progress(scenario_ids.len()));
    }

    let suite = runner.run_suite(&scenario_ids, definition.seed);
    reporter.finalize();

    if let Some(results_dir) = &definition.results_dir {
        let report = SuiteReport::new(
            run_id,
            started_at,
            runner.executor().engine(),
            runner.executor().version(),
            definition.seed,
            scenario_ids,
            &suite,
        );
        let path = write_suite_report(&report, results_dir).with_context(|| {
            format!("Failed to export results to {}", results_dir.display())
        })?;
        println!("Results exported to: {}", path.display());
    }

    Ok(suite)
}
