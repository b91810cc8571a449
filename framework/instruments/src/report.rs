mod in_memory_reporter;
mod summary_report;

pub use in_memory_reporter::InMemoryReportCollector;
pub use summary_report::SummaryReportCollector;

use sql_bench_summary_model::ScenarioOutcome;

pub trait ReportCollector {
    fn add_outcome(&mut self, outcome: &ScenarioOutcome);

    fn finalize(&self);
}
