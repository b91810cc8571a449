use sql_bench_core::prelude::{ScenarioId, ScenarioNotFound};

use crate::scenario::{ScenarioFn, Workload, WorkloadOptions};
use crate::scenarios::{delete, insert, select, update};

/// Every defined scenario, in run order. Id 6 is not part of the catalog.
pub const ALL_SCENARIO_IDS: &[ScenarioId] = &[1, 2, 3, 4, 5, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16];

/// A short subset for smoke runs.
pub const QUICK_SCENARIO_IDS: &[ScenarioId] = &[1, 2, 4];

fn scenario_fn(id: ScenarioId) -> Option<ScenarioFn> {
    let f: ScenarioFn = match id {
        1 => insert::plain_inserts,
        2 => insert::transactional_inserts,
        3 => insert::indexed_inserts,
        4 => select::unindexed_selects,
        5 => select::string_comparison_selects,
        7 => select::keyed_selects,
        8 => update::unindexed_updates,
        9 => update::keyed_updates,
        10 => update::keyed_text_updates,
        11 => insert::insert_from_select,
        12 => delete::unindexed_range_delete,
        13 => delete::batched_key_delete,
        14 => delete::reinsert_after_delete,
        15 => delete::small_inserts_after_delete,
        16 => delete::clear_table,
        _ => return None,
    };
    Some(f)
}

/// Maps scenario ids to their generators, with the options every generated workload uses.
#[derive(Debug, Clone, Default)]
pub struct ScenarioCatalog {
    options: WorkloadOptions,
}

impl ScenarioCatalog {
    pub fn new(options: WorkloadOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &WorkloadOptions {
        &self.options
    }

    pub fn contains(&self, id: ScenarioId) -> bool {
        scenario_fn(id).is_some()
    }

    pub fn all_ids(&self) -> &'static [ScenarioId] {
        ALL_SCENARIO_IDS
    }

    pub fn quick_ids(&self) -> &'static [ScenarioId] {
        QUICK_SCENARIO_IDS
    }

    /// Generate the workload for `id`, seeding a fresh random source with `seed`.
    pub fn generate(&self, id: ScenarioId, seed: u64) -> Result<Workload, ScenarioNotFound> {
        let f = scenario_fn(id).ok_or(ScenarioNotFound::new(id))?;
        log::trace!("Generating scenario {id} with seed {seed}");
        Ok(f(&self.options, seed))
    }
}
