use sql_bench_runner::prelude::*;
use sql_bench_sqlite::prelude::SqliteExecutor;

fn main() -> SqlBenchResult<()> {
    let builder = SuiteDefinitionBuilder::new_with_init(env!("CARGO_PKG_NAME"));
    let executor = SqliteExecutor::open(builder.connection_string())?;

    let suite = run(builder.build(), executor)?;

    let failed = suite.failures().count();
    anyhow::ensure!(failed == 0, "{failed} of {} scenarios failed", suite.len());

    Ok(())
}
