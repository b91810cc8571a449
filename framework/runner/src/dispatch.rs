use std::ops::Range;

/// How a scenario's statements are handed to the executor.
///
/// Only the first `BEGIN;` and the first `COMMIT;` in a sequence are considered. When both exist
/// and `BEGIN;` comes first, the statements strictly between them are run as one transaction and
/// the two markers themselves are not sent. Every other statement, including any later markers,
/// is executed on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionPlan {
    /// No usable marker pair, every statement is executed individually.
    Plain { len: usize },
    /// Statements are split around the first marker pair.
    Bracketed { begin: usize, commit: usize, len: usize },
}

/// One call the runner makes to the executor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchStep {
    /// Execute the statement at this index.
    Plain(usize),
    /// Run the statements in this range as a single transaction.
    Transaction(Range<usize>),
}

fn is_marker(statement: &str, marker: &str) -> bool {
    statement.trim().eq_ignore_ascii_case(marker)
}

impl TransactionPlan {
    pub fn from_statements(statements: &[String]) -> Self {
        let len = statements.len();
        let begin = statements.iter().position(|s| is_marker(s, "BEGIN;"));
        let commit = statements.iter().position(|s| is_marker(s, "COMMIT;"));

        match (begin, commit) {
            (Some(begin), Some(commit)) if begin < commit => {
                TransactionPlan::Bracketed { begin, commit, len }
            }
            _ => TransactionPlan::Plain { len },
        }
    }

    pub fn has_transaction(&self) -> bool {
        matches!(self, TransactionPlan::Bracketed { .. })
    }

    /// The executor calls this plan makes, in order.
    pub fn steps(&self) -> Vec<DispatchStep> {
        match *self {
            TransactionPlan::Plain { len } => (0..len).map(DispatchStep::Plain).collect(),
            TransactionPlan::Bracketed { begin, commit, len } => (0..begin)
                .map(DispatchStep::Plain)
                .chain(std::iter::once(DispatchStep::Transaction(begin + 1..commit)))
                .chain((commit + 1..len).map(DispatchStep::Plain))
                .collect(),
        }
    }
}
