use crate::types::SqlBenchResult;

/// The SQL engine a suite runs against.
///
/// The runner owns its executor and never calls it concurrently. Statements are passed through
/// verbatim, the runner does not parse or validate them.
pub trait Executor {
    /// Run a single statement outside of any transaction the runner manages.
    ///
    /// Any rows a statement produces must be consumed before returning, so that the time spent
    /// reading them is part of the measurement.
    fn execute(&mut self, statement: &str) -> SqlBenchResult<()>;

    /// Run `statements` as one atomic unit.
    ///
    /// Either every statement is applied or none are. When a statement fails, implementations
    /// should return a `TransactionFailure` naming its position in `statements`.
    fn with_transaction(&mut self, statements: &[String]) -> SqlBenchResult<()>;

    /// The version of the engine or client library, for reports.
    fn version(&self) -> String;

    /// A human readable engine name, for reports.
    fn engine(&self) -> String;
}

impl<E: Executor + ?Sized> Executor for Box<E> {
    fn execute(&mut self, statement: &str) -> SqlBenchResult<()> {
        (**self).execute(statement)
    }

    fn with_transaction(&mut self, statements: &[String]) -> SqlBenchResult<()> {
        (**self).with_transaction(statements)
    }

    fn version(&self) -> String {
        (**self).version()
    }

    fn engine(&self) -> String {
        (**self).engine()
    }
}
