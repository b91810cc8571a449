use sql_bench_summary_model::ScenarioOutcome;
use tabled::Tabled;

#[derive(Tabled)]
pub struct ScenarioRow {
    #[tabled(rename = "id")]
    pub scenario_id: u32,
    pub description: String,
    #[tabled(rename = "seconds")]
    pub elapsed: String,
    pub statements: String,
}

impl From<&ScenarioOutcome> for ScenarioRow {
    fn from(outcome: &ScenarioOutcome) -> Self {
        match outcome {
            ScenarioOutcome::Succeeded(result) => ScenarioRow {
                scenario_id: result.scenario_id,
                description: result.description.clone(),
                elapsed: float3(result.elapsed_seconds),
                statements: result.statement_count.to_string(),
            },
            ScenarioOutcome::Failed(failure) => ScenarioRow {
                scenario_id: failure.scenario_id,
                description: failure.error.clone(),
                elapsed: "FAILED".to_string(),
                statements: "-".to_string(),
            },
        }
    }
}

pub fn float3(n: f64) -> String {
    format!("{n:.3}")
}
