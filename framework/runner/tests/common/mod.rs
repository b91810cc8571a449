use sql_bench_runner::prelude::*;

/// A call the runner made to the executor.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Execute(String),
    Transaction(Vec<String>),
}

/// Records every call and fails on request, without touching a database.
#[derive(Debug, Default)]
pub struct RecordingExecutor {
    pub calls: Vec<Call>,
    /// Reject any statement that contains this text
    pub fail_on: Option<String>,
}

impl RecordingExecutor {
    pub fn failing_on(text: &str) -> Self {
        Self {
            calls: Vec::new(),
            fail_on: Some(text.to_string()),
        }
    }

    fn rejects(&self, statement: &str) -> bool {
        self.fail_on
            .as_deref()
            .is_some_and(|text| statement.contains(text))
    }
}

impl Executor for RecordingExecutor {
    fn execute(&mut self, statement: &str) -> SqlBenchResult<()> {
        self.calls.push(Call::Execute(statement.to_string()));
        if self.rejects(statement) {
            anyhow::bail!("rejected {statement}");
        }
        Ok(())
    }

    fn with_transaction(&mut self, statements: &[String]) -> SqlBenchResult<()> {
        self.calls.push(Call::Transaction(statements.to_vec()));
        if let Some(index) = statements.iter().position(|s| self.rejects(s)) {
            return Err(TransactionFailure::new(index, "rejected").into());
        }
        Ok(())
    }

    fn version(&self) -> String {
        "0.0.1".to_string()
    }

    fn engine(&self) -> String {
        "Recording Executor".to_string()
    }
}
