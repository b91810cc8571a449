use std::sync::Arc;

use indicatif::ProgressBar;
use sql_bench_core::prelude::{
    ExecutionFailure, ExecutionScope, ScenarioId, ShutdownListener, TransactionFailure,
};
use sql_bench_instruments::{Reporter, ScenarioTimer};
use sql_bench_summary_model::{BenchmarkResult, ScenarioFailure, ScenarioOutcome, SuiteResult};
use sql_bench_workload::prelude::ScenarioCatalog;

use crate::dispatch::{DispatchStep, TransactionPlan};
use crate::executor::Executor;
use crate::types::SqlBenchResult;

/// Generates scenarios, dispatches them to an executor and measures them.
pub struct BenchmarkRunner<E: Executor> {
    executor: E,
    catalog: ScenarioCatalog,
    reporter: Option<Arc<Reporter>>,
    shutdown_listener: Option<ShutdownListener>,
    progress: Option<ProgressBar>,
}

impl<E: Executor> BenchmarkRunner<E> {
    pub fn new(executor: E, catalog: ScenarioCatalog) -> Self {
        Self {
            executor,
            catalog,
            reporter: None,
            shutdown_listener: None,
            progress: None,
        }
    }

    /// Forward every suite outcome to this reporter.
    pub fn with_reporter(mut self, reporter: Arc<Reporter>) -> Self {
        self.reporter = Some(reporter);
        self
    }

    /// Stop a suite early, between scenarios, once this listener is signalled.
    pub fn with_shutdown_listener(mut self, shutdown_listener: ShutdownListener) -> Self {
        self.shutdown_listener = Some(shutdown_listener);
        self
    }

    /// Advance this progress bar once per attempted scenario.
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn catalog(&self) -> &ScenarioCatalog {
        &self.catalog
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    pub fn executor_mut(&mut self) -> &mut E {
        &mut self.executor
    }

    pub fn into_executor(self) -> E {
        self.executor
    }

    /// Generate scenario `id` with `seed`, run it and time it.
    ///
    /// Fails with `ScenarioNotFound` if the id is not in the catalog, or with `ExecutionFailure`
    /// if the executor rejects a statement. A failed scenario may leave its table partially
    /// written.
    pub fn run_single_scenario(
        &mut self,
        id: ScenarioId,
        seed: u64,
    ) -> SqlBenchResult<BenchmarkResult> {
        let workload = self.catalog.generate(id, seed)?;
        let plan = TransactionPlan::from_statements(&workload.statements);
        log::debug!(
            "Scenario {id} has {} statements, transaction: {:?}",
            workload.statements.len(),
            plan
        );

        let timer = ScenarioTimer::start();
        for step in plan.steps() {
            match step {
                DispatchStep::Plain(index) => self
                    .executor
                    .execute(&workload.statements[index])
                    .map_err(|e| ExecutionFailure {
                        scenario_id: id,
                        statement_index: index,
                        scope: ExecutionScope::Plain,
                        cause: format!("{e:#}"),
                    })?,
                DispatchStep::Transaction(range) => {
                    let first = range.start;
                    self.executor
                        .with_transaction(&workload.statements[range])
                        .map_err(|e| match e.downcast_ref::<TransactionFailure>() {
                            Some(failure) => ExecutionFailure {
                                scenario_id: id,
                                statement_index: first + failure.statement_index,
                                scope: ExecutionScope::Transaction,
                                cause: failure.cause.clone(),
                            },
                            None => ExecutionFailure {
                                scenario_id: id,
                                statement_index: first,
                                scope: ExecutionScope::Transaction,
                                cause: format!("{e:#}"),
                            },
                        })?
                }
            }
        }
        let elapsed_seconds = timer.elapsed_seconds();

        Ok(BenchmarkResult {
            scenario_id: id,
            description: workload.description,
            elapsed_seconds,
            statement_count: workload.statements.len(),
        })
    }

    /// Run every scenario in `ids`, in order, recording each outcome.
    ///
    /// A failing scenario is logged and recorded and the suite moves on to the next one. If the
    /// shutdown listener fires, the remaining scenarios are not attempted.
    pub fn run_suite(&mut self, ids: &[ScenarioId], seed: u64) -> SuiteResult {
        let mut suite = SuiteResult::new();

        for &id in ids {
            if self
                .shutdown_listener
                .as_ref()
                .is_some_and(|listener| listener.should_shutdown())
            {
                log::warn!(
                    "Shutdown requested, skipping {} remaining scenarios",
                    ids.len() - suite.len()
                );
                break;
            }

            log::info!("Running scenario {id}");
            let outcome = match self.run_single_scenario(id, seed) {
                Ok(result) => {
                    log::info!(
                        "{} took {:.3}s over {} statements",
                        result.description,
                        result.elapsed_seconds,
                        result.statement_count
                    );
                    ScenarioOutcome::Succeeded(result)
                }
                Err(e) => {
                    log::error!("Scenario {id} failed: {e:?}");
                    ScenarioOutcome::Failed(ScenarioFailure {
                        scenario_id: id,
                        error: format!("{e:#}"),
                    })
                }
            };

            if let Some(reporter) = &self.reporter {
                reporter.add_outcome(&outcome);
            }
            if let Some(progress) = &self.progress {
                progress.inc(1);
            }
            suite.push(outcome);
        }

        if let Some(progress) = &self.progress {
            progress.finish_and_clear();
        }

        suite
    }
}
