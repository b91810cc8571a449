use sql_bench_core::prelude::ScenarioId;
use sql_bench_workload::prelude::ScenarioCatalog;

/// Which scenarios a suite runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    /// Every scenario in the catalog, in id order.
    #[default]
    All,
    /// The short smoke test subset.
    Quick,
    /// Exactly these ids, in this order.
    ///
    /// Ids that are not in the catalog are kept, they fail individually when the suite runs.
    Explicit(Vec<ScenarioId>),
}

impl Selection {
    pub fn resolve(&self, catalog: &ScenarioCatalog) -> Vec<ScenarioId> {
        match self {
            Selection::All => catalog.all_ids().to_vec(),
            Selection::Quick => catalog.quick_ids().to_vec(),
            Selection::Explicit(ids) => {
                for id in ids.iter().filter(|id| !catalog.contains(**id)) {
                    log::warn!("Scenario {id} is not defined and will be reported as failed");
                }
                ids.clone()
            }
        }
    }
}
