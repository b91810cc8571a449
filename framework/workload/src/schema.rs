//! The tables the scenarios write to, for backends that provision them up front.

use crate::table::COLUMNS_DDL;

/// Every table referenced by a scenario. There is no `t6` because there is no scenario 6.
pub const BENCHMARK_TABLES: &[&str] = &[
    "t1",
    "t2",
    "t3",
    "t4",
    "t5",
    "t7",
    "t8",
    "t9",
    "t10",
    "t11",
    "t11_source",
    "t12",
    "t13",
    "t14",
    "t15",
    "t16",
];

/// Idempotent DDL that creates every benchmark table with the shared column layout.
pub fn create_table_statements() -> Vec<String> {
    BENCHMARK_TABLES
        .iter()
        .map(|table| format!("CREATE TABLE IF NOT EXISTS {table}({COLUMNS_DDL});"))
        .collect()
}
