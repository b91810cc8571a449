mod scenarios_table;

use crate::report::summary_report::scenarios_table::{float3, ScenarioRow};
use crate::report::ReportCollector;
use sql_bench_summary_model::{ScenarioOutcome, SuiteResult};
use tabled::settings::Style;
use tabled::Table;

/// Prints a table of every attempted scenario followed by the suite totals.
#[derive(Debug, Default)]
pub struct SummaryReportCollector {
    suite: SuiteResult,
}

impl SummaryReportCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn render(&self) -> String {
        let rows = self
            .suite
            .outcomes()
            .iter()
            .map(ScenarioRow::from)
            .collect::<Vec<_>>();

        let mut table = Table::new(rows);
        table.with(Style::modern());

        let succeeded = self.suite.successes().count();
        let failed = self.suite.failures().count();
        format!(
            "{table}\nTotal: {}s over {succeeded} scenarios ({} statements), mean {}s, {failed} failed",
            float3(self.suite.total_elapsed_seconds()),
            self.suite.total_statements(),
            float3(self.suite.mean_elapsed_seconds()),
        )
    }
}

impl ReportCollector for SummaryReportCollector {
    fn add_outcome(&mut self, outcome: &ScenarioOutcome) {
        self.suite.push(outcome.clone());
    }

    fn finalize(&self) {
        println!("\nSummary of scenarios");
        println!("{}", self.render());
    }
}
