use std::path::Path;

use anyhow::Context;
use rusqlite::Connection;
use sql_bench_core::prelude::TransactionFailure;
use sql_bench_runner::prelude::{Executor, SqlBenchResult};
use sql_bench_workload::schema::create_table_statements;

/// Runs workloads against a SQLite database through rusqlite.
///
/// Every benchmark table is created when the executor is opened, so workloads using the
/// managed dialect can clear tables without creating them first.
pub struct SqliteExecutor {
    conn: Connection,
}

impl SqliteExecutor {
    /// Open a database at `path`. The special path `:memory:` opens a private in memory database.
    pub fn open(path: impl AsRef<Path>) -> SqlBenchResult<Self> {
        let path = path.as_ref();
        let conn = if path == Path::new(":memory:") {
            Connection::open_in_memory()
        } else {
            Connection::open(path)
        }
        .with_context(|| format!("Failed to open SQLite database at {}", path.display()))?;

        Self::with_connection(conn)
    }

    pub fn open_in_memory() -> SqlBenchResult<Self> {
        Self::open(":memory:")
    }

    fn with_connection(conn: Connection) -> SqlBenchResult<Self> {
        for statement in create_table_statements() {
            conn.execute_batch(&statement)
                .with_context(|| format!("Failed to provision schema: {statement}"))?;
        }
        log::debug!("SQLite schema provisioned");

        Ok(Self { conn })
    }

    /// Access the underlying connection, for inspecting the database after a run.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

/// Prepare and step through every row so that queries run to completion.
fn run_statement(conn: &Connection, statement: &str) -> rusqlite::Result<()> {
    let mut prepared = conn.prepare(statement)?;
    let mut rows = prepared.query([])?;
    while rows.next()?.is_some() {}
    Ok(())
}

impl Executor for SqliteExecutor {
    /// Run one statement outside any managed transaction.
    ///
    /// If the statement fails while a `BEGIN` sent through this method is still open, the
    /// transaction is rolled back so the connection returns to autocommit for the next scenario.
    fn execute(&mut self, statement: &str) -> SqlBenchResult<()> {
        let Err(e) = run_statement(&self.conn, statement) else {
            return Ok(());
        };

        if !self.conn.is_autocommit() {
            log::warn!("Rolling back the open transaction after a failed statement");
            if let Err(rollback) = self.conn.execute_batch("ROLLBACK") {
                log::error!("Failed to roll back after a failed statement: {rollback}");
            }
        }

        Err(e.into())
    }

    fn with_transaction(&mut self, statements: &[String]) -> SqlBenchResult<()> {
        let tx = self.conn.transaction()?;
        for (index, statement) in statements.iter().enumerate() {
            // Dropping `tx` on the error path rolls the transaction back.
            run_statement(&tx, statement).map_err(|e| TransactionFailure::new(index, e))?;
        }
        tx.commit()?;
        Ok(())
    }

    fn version(&self) -> String {
        rusqlite::version().to_string()
    }

    fn engine(&self) -> String {
        "sqlite (rusqlite)".to_string()
    }
}
