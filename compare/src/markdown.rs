use std::collections::BTreeSet;
use std::fmt::{self, Write};

use sql_bench_core::prelude::ScenarioId;
use sql_bench_summary_model::{BenchmarkResult, SuiteReport};
use tabled::builder::Builder;
use tabled::settings::Style;

use crate::model::ResultHistory;

/// Render a markdown comparison of the latest run on each side.
///
/// Speedup is right time over left time, so values above 1 mean the left side was faster.
pub fn render_comparison(
    left: &ResultHistory,
    right: &ResultHistory,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(
        out,
        "# Benchmark Comparison: {} vs {}\n",
        left.latest.engine, right.latest.engine
    )?;

    out.push_str("## Benchmark Information\n\n");
    write_metadata(&mut out, "Left", left)?;
    write_metadata(&mut out, "Right", right)?;

    out.push_str("## Results\n\n");
    out.push_str(&results_table(left, right));
    out.push_str("\n\n## Summary\n\n");
    write_summary(&mut out, &left.latest, &right.latest)?;

    Ok(out)
}

fn write_metadata(out: &mut impl Write, label: &str, history: &ResultHistory) -> fmt::Result {
    let report = &history.latest;
    writeln!(out, "**{label}:**")?;
    writeln!(out, "- File: `{}`", history.file_name())?;
    if !report.run_id.is_empty() {
        writeln!(out, "- Run: {}", report.run_id)?;
    }
    writeln!(out, "- Timestamp: {}", report.timestamp)?;
    writeln!(out, "- Engine: {}", report.engine)?;
    writeln!(out, "- Version: {}", report.executor_version)?;
    writeln!(out, "- Seed: {}", report.seed)?;
    writeln!(out)
}

fn scenario_ids(report: &SuiteReport) -> impl Iterator<Item = ScenarioId> + '_ {
    report
        .results
        .iter()
        .map(|r| r.scenario_id)
        .chain(report.failures.iter().map(|f| f.scenario_id))
}

fn results_table(left: &ResultHistory, right: &ResultHistory) -> String {
    let with_deltas = left.previous.is_some() || right.previous.is_some();

    let mut builder = Builder::default();
    if with_deltas {
        builder.push_record([
            "Test",
            "Description",
            "Left (sec)",
            "Left Δ",
            "Right (sec)",
            "Right Δ",
            "Speedup",
        ]);
    } else {
        builder.push_record(["Test", "Description", "Left (sec)", "Right (sec)", "Speedup"]);
    }

    let ids = scenario_ids(&left.latest)
        .chain(scenario_ids(&right.latest))
        .collect::<BTreeSet<_>>();

    for id in ids {
        let left_result = left.latest.result_for(id);
        let right_result = right.latest.result_for(id);

        let description = left_result
            .or(right_result)
            .map(|r| strip_test_prefix(id, &r.description))
            .unwrap_or_default();
        let speedup = match (left_result, right_result) {
            (Some(l), Some(r)) if l.elapsed_seconds > 0.0 => {
                format!("{:.2}x", r.elapsed_seconds / l.elapsed_seconds)
            }
            _ => "-".to_string(),
        };

        let mut record = vec![id.to_string(), description, seconds(&left.latest, id)];
        if with_deltas {
            record.push(delta(left, left_result));
        }
        record.push(seconds(&right.latest, id));
        if with_deltas {
            record.push(delta(right, right_result));
        }
        record.push(speedup);

        builder.push_record(record);
    }

    let mut table = builder.build();
    table.with(Style::markdown());
    table.to_string()
}

/// Drop the `Test <id>: ` prefix that every scenario description carries.
pub fn strip_test_prefix(id: ScenarioId, description: &str) -> String {
    description
        .strip_prefix(&format!("Test {id}: "))
        .unwrap_or(description)
        .to_string()
}

fn seconds(report: &SuiteReport, id: ScenarioId) -> String {
    match report.result_for(id) {
        Some(result) => format!("{:.3}", result.elapsed_seconds),
        None if report.failures.iter().any(|f| f.scenario_id == id) => "FAILED".to_string(),
        None => "-".to_string(),
    }
}

/// Change against the previous run on the same side.
///
/// Empty when the side has no previous run, `NEW` when the previous run has no result for the
/// scenario.
fn delta(history: &ResultHistory, current: Option<&BenchmarkResult>) -> String {
    let (Some(previous), Some(current)) = (&history.previous, current) else {
        return String::new();
    };

    match previous.result_for(current.scenario_id) {
        Some(before) => {
            let change = current.elapsed_seconds - before.elapsed_seconds;
            let pct = change / before.elapsed_seconds * 100.0;
            if change > 0.0 {
                format!("+{change:.3} (+{pct:.1}%)")
            } else {
                format!("{change:.3} ({pct:.1}%)")
            }
        }
        None => "NEW".to_string(),
    }
}

fn write_summary(out: &mut impl Write, left: &SuiteReport, right: &SuiteReport) -> fmt::Result {
    let common = left
        .results
        .iter()
        .filter_map(|l| right.result_for(l.scenario_id).map(|r| (l, r)))
        .collect::<Vec<_>>();

    if common.is_empty() {
        return writeln!(out, "No scenarios completed on both sides.");
    }

    let total_left = common.iter().map(|(l, _)| l.elapsed_seconds).sum::<f64>();
    let total_right = common.iter().map(|(_, r)| r.elapsed_seconds).sum::<f64>();

    writeln!(out, "- **Total Left Time**: {total_left:.3} seconds")?;
    writeln!(out, "- **Total Right Time**: {total_right:.3} seconds")?;
    if total_left > 0.0 && total_right > 0.0 {
        writeln!(
            out,
            "- **Overall Speedup**: {:.2}x (Left is {:.1}% faster)",
            total_right / total_left,
            (total_right - total_left) / total_right * 100.0
        )?;
    }
    writeln!(out, "- **Scenarios Compared**: {}", common.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_only_the_matching_prefix() {
        assert_eq!("1000 INSERTs", strip_test_prefix(1, "Test 1: 1000 INSERTs"));
        assert_eq!("Test 2: other", strip_test_prefix(1, "Test 2: other"));
        assert_eq!("custom", strip_test_prefix(3, "custom"));
    }
}
