mod report;

pub use report::{InMemoryReportCollector, ReportCollector, SummaryReportCollector};

use std::time::Instant;

/// Measures the wall clock time taken by a scenario.
///
/// Backed by a monotonic clock so the measurement is never negative.
#[derive(Debug, Clone, Copy)]
pub struct ScenarioTimer {
    started: Instant,
}

impl ScenarioTimer {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Seconds elapsed since [ScenarioTimer::start].
    pub fn elapsed_seconds(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }
}

/// Choose which collectors a [Reporter] fans outcomes out to.
#[derive(Debug, Default, Clone)]
pub struct ReportConfig {
    summary: bool,
    in_memory: bool,
}

impl ReportConfig {
    /// Print a summary table of the suite when the reporter is finalized.
    pub fn enable_summary(mut self) -> Self {
        self.summary = true;
        self
    }

    /// Keep every outcome so it can be read back with [Reporter::recorded_outcomes].
    pub fn enable_in_memory(mut self) -> Self {
        self.in_memory = true;
        self
    }

    pub fn init(self) -> Reporter {
        Reporter {
            inner: parking_lot::Mutex::new(ReporterInner {
                summary: self.summary.then(SummaryReportCollector::new),
                in_memory: self.in_memory.then(InMemoryReportCollector::new),
            }),
        }
    }
}

struct ReporterInner {
    summary: Option<SummaryReportCollector>,
    in_memory: Option<InMemoryReportCollector>,
}

impl ReporterInner {
    fn collectors(&mut self) -> impl Iterator<Item = &mut dyn ReportCollector> {
        let summary = self
            .summary
            .as_mut()
            .map(|c| c as &mut dyn ReportCollector);
        let in_memory = self
            .in_memory
            .as_mut()
            .map(|c| c as &mut dyn ReportCollector);
        summary.into_iter().chain(in_memory)
    }
}

/// Shared entry point for recording scenario outcomes.
pub struct Reporter {
    inner: parking_lot::Mutex<ReporterInner>,
}

impl Reporter {
    pub fn add_outcome(&self, outcome: &sql_bench_summary_model::ScenarioOutcome) {
        let mut inner = self.inner.lock();
        for collector in inner.collectors() {
            collector.add_outcome(outcome);
        }
    }

    /// Outcomes seen so far, if the in memory collector is enabled.
    pub fn recorded_outcomes(&self) -> Option<Vec<sql_bench_summary_model::ScenarioOutcome>> {
        self.inner
            .lock()
            .in_memory
            .as_ref()
            .map(|c| c.outcomes().to_vec())
    }

    pub fn finalize(&self) {
        let mut inner = self.inner.lock();
        for collector in inner.collectors() {
            collector.finalize();
        }
    }
}

impl std::fmt::Debug for Reporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("Reporter")
            .field("summary", &inner.summary.is_some())
            .field("in_memory", &inner.in_memory.is_some())
            .finish()
    }
}
