mod common;

use common::{Call, RecordingExecutor};
use pretty_assertions::assert_eq;
use sql_bench_runner::prelude::*;

fn runner(executor: RecordingExecutor) -> BenchmarkRunner<RecordingExecutor> {
    BenchmarkRunner::new(executor, ScenarioCatalog::default())
}

#[test]
fn plain_scenario_executes_every_statement() {
    let mut runner = runner(RecordingExecutor::default());

    let result = runner.run_single_scenario(1, 42).unwrap();
    let workload = ScenarioCatalog::default().generate(1, 42).unwrap();

    assert_eq!(1, result.scenario_id);
    assert_eq!(workload.description, result.description);
    assert_eq!(workload.statements.len(), result.statement_count);
    assert!(result.elapsed_seconds >= 0.0);
    assert_eq!(
        workload
            .statements
            .into_iter()
            .map(Call::Execute)
            .collect::<Vec<_>>(),
        runner.executor().calls
    );
}

#[test]
fn transaction_block_is_one_call_without_markers() {
    let mut runner = runner(RecordingExecutor::default());

    let result = runner.run_single_scenario(2, 42).unwrap();
    let workload = ScenarioCatalog::default().generate(2, 42).unwrap();

    // Markers still count towards the statement count.
    assert_eq!(workload.statements.len(), result.statement_count);

    let calls = &runner.executor().calls;
    assert_eq!(Call::Execute(workload.statements[0].clone()), calls[0]);
    match &calls[1] {
        Call::Transaction(batch) => {
            assert_eq!(25_000, batch.len());
            assert!(!batch.iter().any(|s| s == BEGIN || s == COMMIT));
        }
        other => panic!("Expected a transaction, got {other:?}"),
    }
    assert_eq!(2, calls.len());
}

#[test]
fn second_marker_pair_is_forwarded_verbatim() {
    let mut runner = runner(RecordingExecutor::default());

    runner.run_single_scenario(14, 42).unwrap();

    let calls = &runner.executor().calls;
    let transactions = calls
        .iter()
        .filter(|c| matches!(c, Call::Transaction(_)))
        .count();
    assert_eq!(1, transactions);
    assert!(calls.contains(&Call::Execute(BEGIN.to_string())));
    assert_eq!(Some(&Call::Execute(COMMIT.to_string())), calls.last());
}

#[test]
fn unknown_scenario_is_not_found() {
    let mut runner = runner(RecordingExecutor::default());

    let err = runner.run_single_scenario(6, 42).unwrap_err();

    assert_eq!(
        Some(&ScenarioNotFound::new(6)),
        err.downcast_ref::<ScenarioNotFound>()
    );
    assert!(runner.executor().calls.is_empty());
}

#[test]
fn plain_failure_reports_statement_index() {
    let mut runner = runner(RecordingExecutor::failing_on("DELETE FROM t4"));

    let err = runner.run_single_scenario(4, 42).unwrap_err();
    let failure = err.downcast_ref::<ExecutionFailure>().unwrap();

    assert_eq!(4, failure.scenario_id);
    assert_eq!(0, failure.statement_index);
    assert_eq!(ExecutionScope::Plain, failure.scope);
    assert_eq!(1, runner.executor().calls.len());
}

#[test]
fn transaction_failure_index_is_relative_to_scenario() {
    let workload = ScenarioCatalog::default().generate(2, 42).unwrap();
    let target = workload.statements[10].clone();
    let mut runner = runner(RecordingExecutor::failing_on(&target));

    let err = runner.run_single_scenario(2, 42).unwrap_err();
    let failure = err.downcast_ref::<ExecutionFailure>().unwrap();

    assert_eq!(10, failure.statement_index);
    assert_eq!(ExecutionScope::Transaction, failure.scope);
    // Nothing after the failed block is attempted.
    assert_eq!(2, runner.executor().calls.len());
}
