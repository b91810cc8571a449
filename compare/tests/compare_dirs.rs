use pretty_assertions::assert_eq;
use sql_bench_compare::{compare_dirs, recent_report_files, CompareError};
use sql_bench_summary_model::{
    store_suite_report, BenchmarkResult, ScenarioFailure, ScenarioOutcome, SuiteReport,
    SuiteResult,
};
use std::path::Path;
use std::time::{Duration, SystemTime};

fn report(engine: &str, outcomes: &[(u32, Option<f64>)]) -> SuiteReport {
    let mut suite = SuiteResult::new();
    for &(scenario_id, elapsed) in outcomes {
        suite.push(match elapsed {
            Some(elapsed_seconds) => ScenarioOutcome::Succeeded(BenchmarkResult {
                scenario_id,
                description: format!("Test {scenario_id}: scenario {scenario_id}"),
                elapsed_seconds,
                statement_count: 10,
            }),
            None => ScenarioOutcome::Failed(ScenarioFailure {
                scenario_id,
                error: "boom".to_string(),
            }),
        });
    }

    SuiteReport::new(
        "run".to_string(),
        "2024-05-01T10:00:00.000Z".to_string(),
        engine.to_string(),
        "1.0".to_string(),
        42,
        outcomes.iter().map(|(id, _)| *id).collect(),
        &suite,
    )
}

/// Write `report` as `name`, with a modification time `age_secs` in the past.
fn write(dir: &Path, name: &str, report: &SuiteReport, age_secs: u64) {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    store_suite_report(report, &mut file).unwrap();
    file.set_modified(SystemTime::now() - Duration::from_secs(age_secs))
        .unwrap();
}

/// The trimmed cells of the table row for scenario `id`.
fn row(markdown: &str, id: u32) -> Vec<String> {
    markdown
        .lines()
        .find(|line| {
            line.split('|')
                .nth(1)
                .is_some_and(|cell| cell.trim() == id.to_string())
        })
        .unwrap_or_else(|| panic!("No row for scenario {id} in:\n{markdown}"))
        .split('|')
        .map(|cell| cell.trim().to_string())
        .filter(|cell| !cell.is_empty())
        .collect()
}

#[test]
fn single_runs_have_no_delta_columns() {
    let left = tempfile::tempdir().unwrap();
    let right = tempfile::tempdir().unwrap();
    write(left.path(), "a.json", &report("sqlite", &[(1, Some(1.0)), (2, Some(2.0))]), 10);
    write(right.path(), "b.json", &report("other", &[(1, Some(3.0))]), 10);

    let markdown = compare_dirs(left.path(), right.path()).unwrap();

    assert!(markdown.starts_with("# Benchmark Comparison: sqlite vs other\n"));
    assert!(!markdown.contains("Left Δ"));
    assert_eq!(vec!["1", "scenario 1", "1.000", "3.000", "3.00x"], row(&markdown, 1));
    assert_eq!(vec!["2", "scenario 2", "2.000", "-", "-"], row(&markdown, 2));
    assert!(markdown.contains("- **Total Left Time**: 1.000 seconds"));
    assert!(markdown.contains("- **Total Right Time**: 3.000 seconds"));
    assert!(markdown.contains("- **Overall Speedup**: 3.00x (Left is 66.7% faster)"));
    assert!(markdown.contains("- **Scenarios Compared**: 1"));
}

#[test]
fn previous_runs_add_deltas() {
    let left = tempfile::tempdir().unwrap();
    let right = tempfile::tempdir().unwrap();
    write(left.path(), "old.json", &report("sqlite", &[(1, Some(2.0))]), 100);
    write(
        left.path(),
        "new.json",
        &report("sqlite", &[(1, Some(1.0)), (4, Some(0.5))]),
        10,
    );
    write(right.path(), "only.json", &report("other", &[(1, Some(2.0)), (4, None)]), 10);

    let markdown = compare_dirs(left.path(), right.path()).unwrap();

    assert!(markdown.contains("Left Δ"));
    assert_eq!(
        vec!["1", "scenario 1", "1.000", "-1.000 (-50.0%)", "2.000", "2.00x"],
        row(&markdown, 1)
    );
    assert_eq!(
        vec!["4", "scenario 4", "0.500", "NEW", "FAILED", "-"],
        row(&markdown, 4)
    );
    assert!(markdown.contains("- File: `new.json`"));
}

#[test]
fn slower_run_shows_positive_delta() {
    let left = tempfile::tempdir().unwrap();
    let right = tempfile::tempdir().unwrap();
    write(left.path(), "1.json", &report("sqlite", &[(1, Some(1.0))]), 10);
    write(right.path(), "1.json", &report("other", &[(1, Some(1.0))]), 100);
    write(right.path(), "2.json", &report("other", &[(1, Some(1.5))]), 10);

    let markdown = compare_dirs(left.path(), right.path()).unwrap();

    assert_eq!(
        vec!["1", "scenario 1", "1.000", "1.500", "+0.500 (+50.0%)", "1.50x"],
        row(&markdown, 1)
    );
}

#[test]
fn disjoint_runs_have_no_totals() {
    let left = tempfile::tempdir().unwrap();
    let right = tempfile::tempdir().unwrap();
    write(left.path(), "a.json", &report("sqlite", &[(1, Some(1.0))]), 10);
    write(right.path(), "b.json", &report("other", &[(2, Some(1.0)), (1, None)]), 10);

    let markdown = compare_dirs(left.path(), right.path()).unwrap();

    assert_eq!(vec!["1", "scenario 1", "1.000", "FAILED", "-"], row(&markdown, 1));
    assert!(markdown.contains("**Right:**\n- File: `b.json`\n- Run: run\n"));
    assert!(markdown.ends_with("## Summary\n\nNo scenarios completed on both sides.\n"));
    assert!(!markdown.contains("Total Left Time"));
}

#[test]
fn recent_files_ignore_other_extensions() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "oldest.json", &report("sqlite", &[]), 300);
    write(dir.path(), "middle.json", &report("sqlite", &[]), 200);
    write(dir.path(), "newest.json", &report("sqlite", &[]), 100);
    std::fs::write(dir.path().join("notes.txt"), "not a report").unwrap();

    let files = recent_report_files(dir.path(), 2).unwrap();

    assert_eq!(
        vec![dir.path().join("newest.json"), dir.path().join("middle.json")],
        files
    );
}

#[test]
fn empty_directory_is_an_error() {
    let left = tempfile::tempdir().unwrap();
    let right = tempfile::tempdir().unwrap();

    let err = compare_dirs(left.path(), right.path()).unwrap_err();

    assert!(matches!(err, CompareError::NoResults { .. }));
}

#[test]
fn unreadable_latest_report_is_an_error() {
    let left = tempfile::tempdir().unwrap();
    let right = tempfile::tempdir().unwrap();
    std::fs::write(left.path().join("broken.json"), "{").unwrap();
    write(right.path(), "ok.json", &report("other", &[(1, Some(1.0))]), 10);

    let err = compare_dirs(left.path(), right.path()).unwrap_err();

    assert!(matches!(err, CompareError::Load { .. }));
}
