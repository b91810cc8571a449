/// Recommended error type for a suite `main` function and for [crate::executor::Executor]
/// implementations. Errors from the runner are carried as `anyhow::Error` so that callers can
/// `downcast_ref` to the typed errors in `sql_bench_core`.
pub type SqlBenchResult<T> = anyhow::Result<T>;
