mod error;
mod shutdown;

/// Identifier of a benchmark scenario. Ids are sparse, not every integer is a defined scenario.
pub type ScenarioId = u32;

pub mod prelude {
    pub use crate::error::{ExecutionFailure, ExecutionScope, ScenarioNotFound, TransactionFailure};
    pub use crate::shutdown::{ShutdownHandle, ShutdownListener};
    pub use crate::ScenarioId;
}
