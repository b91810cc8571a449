use crate::report::ReportCollector;
use sql_bench_summary_model::ScenarioOutcome;

/// Keeps every outcome in memory. Useful for tests and for callers that want to inspect a run
/// without parsing the console output.
#[derive(Debug, Default)]
pub struct InMemoryReportCollector {
    outcomes: Vec<ScenarioOutcome>,
}

impl InMemoryReportCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn outcomes(&self) -> &[ScenarioOutcome] {
        &self.outcomes
    }
}

impl ReportCollector for InMemoryReportCollector {
    fn add_outcome(&mut self, outcome: &ScenarioOutcome) {
        self.outcomes.push(outcome.clone());
    }

    fn finalize(&self) {
        log::debug!("In memory reporter holds {} outcomes", self.outcomes.len());
    }
}
