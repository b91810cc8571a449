use crate::ScenarioId;

/// Returned when a caller asks for a scenario id that has no generator.
///
/// This is fatal to the single run request that asked for it. A suite run records it against the
/// scenario and moves on to the next one.
#[derive(derive_more::Error, derive_more::Display, Debug, Clone, PartialEq, Eq)]
#[display("Scenario {id} not found")]
pub struct ScenarioNotFound {
    pub id: ScenarioId,
}

impl ScenarioNotFound {
    pub fn new(id: ScenarioId) -> Self {
        Self { id }
    }
}

/// Where a statement was running when the executor rejected it.
#[derive(derive_more::Display, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionScope {
    #[display("outside a transaction")]
    Plain,
    #[display("inside a transaction")]
    Transaction,
}

/// The executor rejected a statement while running a scenario.
///
/// `statement_index` is the position of the failing statement in the scenario's full statement
/// sequence, directive statements included.
#[derive(derive_more::Error, derive_more::Display, Debug, Clone, PartialEq, Eq)]
#[display("Scenario {scenario_id} failed at statement {statement_index} ({scope}): {cause}")]
pub struct ExecutionFailure {
    pub scenario_id: ScenarioId,
    pub statement_index: usize,
    pub scope: ExecutionScope,
    pub cause: String,
}

/// A statement inside a transaction scope failed and the scope was rolled back.
///
/// Executors return this from `with_transaction`. The `statement_index` is relative to the batch
/// that was passed to the transaction scope.
#[derive(derive_more::Error, derive_more::Display, Debug, Clone, PartialEq, Eq)]
#[display("Transaction rolled back after statement {statement_index} failed: {cause}")]
pub struct TransactionFailure {
    pub statement_index: usize,
    pub cause: String,
}

impl TransactionFailure {
    pub fn new(statement_index: usize, cause: impl std::fmt::Display) -> Self {
        Self {
            statement_index,
            cause: cause.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn execution_failure_message_names_scope() {
        let err = ExecutionFailure {
            scenario_id: 4,
            statement_index: 12,
            scope: ExecutionScope::Transaction,
            cause: "no such table: t4".to_string(),
        };

        assert_eq!(
            "Scenario 4 failed at statement 12 (inside a transaction): no such table: t4",
            err.to_string()
        );
    }

    #[test]
    fn scenario_not_found_message() {
        assert_eq!("Scenario 6 not found", ScenarioNotFound::new(6).to_string());
    }
}
