use crate::rng::WorkloadRng;

/// Lower bound for the random integer columns.
pub const MIN_VALUE: i64 = 1;
/// Upper bound (inclusive) for the random integer columns.
pub const MAX_VALUE: i64 = 100_000;
/// Length of the random text payload in column `c`.
pub const TEXT_LEN: usize = 100;

/// The column definitions shared by every benchmark table.
pub const COLUMNS_DDL: &str = "id TEXT PRIMARY KEY, a INTEGER, b INTEGER, c TEXT";

/// How a workload resets its tables and creates indexes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Dialect {
    /// Tables are provisioned outside of the workload, so a reset only clears rows.
    #[default]
    Managed,
    /// The workload drops and recreates its own tables.
    Standalone,
}

impl Dialect {
    /// Statements that leave `table` existing and empty.
    pub fn reset(&self, table: &str) -> Vec<String> {
        match self {
            Dialect::Managed => vec![format!("DELETE FROM {table};")],
            Dialect::Standalone => vec![
                format!("DROP TABLE IF EXISTS {table};"),
                format!("CREATE TABLE {table}({COLUMNS_DDL});"),
            ],
        }
    }

    pub fn create_index(&self, index: &str, table: &str, column: &str) -> String {
        match self {
            Dialect::Managed => format!("CREATE INDEX IF NOT EXISTS {index} ON {table}({column});"),
            // The table was just recreated so the index cannot exist yet.
            Dialect::Standalone => format!("CREATE INDEX {index} ON {table}({column});"),
        }
    }
}

/// One generated row of a benchmark table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: String,
    pub a: i64,
    pub b: i64,
    pub c: String,
}

impl Row {
    /// Draws `id`, `a`, `b` and `c`, in that order.
    pub fn random(rng: &mut WorkloadRng) -> Self {
        let id = rng.uuid();
        let a = rng.bounded_int(MIN_VALUE, MAX_VALUE);
        let b = rng.bounded_int(MIN_VALUE, MAX_VALUE);
        let c = rng.alphanumeric(TEXT_LEN);
        Self { id, a, b, c }
    }

    /// Like [Row::random] but with a caller chosen `a`, which is not drawn.
    pub fn with_sequential_a(rng: &mut WorkloadRng, a: i64) -> Self {
        let id = rng.uuid();
        let b = rng.bounded_int(MIN_VALUE, MAX_VALUE);
        let c = rng.alphanumeric(TEXT_LEN);
        Self { id, a, b, c }
    }

    pub fn insert_into(&self, table: &str) -> String {
        format!(
            "INSERT INTO {table} (id, a, b, c) VALUES('{}', {}, {}, '{}');",
            self.id, self.a, self.b, self.c
        )
    }
}
