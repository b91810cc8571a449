//! Deterministic SQL workloads.
//!
//! Every scenario is a pure function of its options and a seed. Calling the same scenario with the
//! same seed and options always produces a byte-identical statement sequence, which is what lets
//! runs against different engines, or different runs against the same engine, be compared.

mod catalog;
mod rng;
mod scenario;
pub mod scenarios;
pub mod schema;
mod table;

pub mod prelude {
    pub use crate::catalog::{ScenarioCatalog, ALL_SCENARIO_IDS, QUICK_SCENARIO_IDS};
    pub use crate::rng::{WorkloadRng, DEFAULT_SEED};
    pub use crate::scenario::{
        KeyStrategy, ScenarioFn, Workload, WorkloadOptions, BEGIN, COMMIT, POPULATE_ROWS,
    };
    pub use crate::table::{Dialect, Row};
}
