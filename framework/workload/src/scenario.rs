use crate::rng::WorkloadRng;
use crate::table::{Dialect, Row};

/// Transaction start directive recognised by the runner.
pub const BEGIN: &str = "BEGIN;";
/// Transaction end directive recognised by the runner.
pub const COMMIT: &str = "COMMIT;";

/// Rows inserted by the repopulation step of every read, update and delete scenario.
pub const POPULATE_ROWS: usize = 25_000;

/// The statements generated for one scenario invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workload {
    pub description: String,
    /// Must be executed in order, later statements depend on rows written by earlier ones.
    pub statements: Vec<String>,
}

/// Whether key driven scenarios go through an indexed column or the primary key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeyStrategy {
    /// Index column `a` once the table is populated, then key statements by `a`.
    #[default]
    IndexedColumn,
    /// Key statements by the `id` primary key, no extra index is created.
    PrimaryKey,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkloadOptions {
    pub dialect: Dialect,
    pub key_strategy: KeyStrategy,
}

/// A scenario generation function.
pub type ScenarioFn = fn(&WorkloadOptions, u64) -> Workload;

/// The key columns of a populated row, kept in generation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RowKey {
    pub id: String,
    pub a: i64,
}

/// Accumulates a scenario's statements.
pub(crate) struct StatementSequence {
    dialect: Dialect,
    statements: Vec<String>,
}

impl StatementSequence {
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            statements: Vec::new(),
        }
    }

    pub fn push(&mut self, statement: impl Into<String>) {
        self.statements.push(statement.into());
    }

    pub fn reset(&mut self, table: &str) {
        let reset = self.dialect.reset(table);
        self.statements.extend(reset);
    }

    pub fn create_index(&mut self, index: &str, table: &str, column: &str) {
        let ddl = self.dialect.create_index(index, table, column);
        self.statements.push(ddl);
    }

    pub fn begin(&mut self) {
        self.push(BEGIN);
    }

    pub fn commit(&mut self) {
        self.push(COMMIT);
    }

    /// Emit `count` random row inserts without a transaction wrapper.
    pub fn insert_random_rows(
        &mut self,
        rng: &mut WorkloadRng,
        table: &str,
        count: usize,
    ) -> Vec<RowKey> {
        self.statements.reserve(count);
        (0..count)
            .map(|_| {
                let row = Row::random(rng);
                self.statements.push(row.insert_into(table));
                RowKey { id: row.id, a: row.a }
            })
            .collect()
    }

    /// Fill `table` with [POPULATE_ROWS] random rows inside one transaction.
    pub fn populate(&mut self, rng: &mut WorkloadRng, table: &str) -> Vec<RowKey> {
        self.begin();
        let keys = self.insert_random_rows(rng, table, POPULATE_ROWS);
        self.commit();
        keys
    }

    /// Fill `table` inside one transaction with rows whose `a` runs from 1 to [POPULATE_ROWS].
    pub fn populate_sequential(&mut self, rng: &mut WorkloadRng, table: &str) -> Vec<RowKey> {
        self.begin();
        self.statements.reserve(POPULATE_ROWS);
        let keys = (1..=POPULATE_ROWS as i64)
            .map(|a| {
                let row = Row::with_sequential_a(rng, a);
                self.statements.push(row.insert_into(table));
                RowKey { id: row.id, a: row.a }
            })
            .collect();
        self.commit();
        keys
    }

    pub fn finish(self, description: impl Into<String>) -> Workload {
        Workload {
            description: description.into(),
            statements: self.statements,
        }
    }
}
