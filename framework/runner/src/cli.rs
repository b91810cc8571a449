use clap::{Parser, ValueEnum};
use sql_bench_workload::prelude::{Dialect, KeyStrategy, DEFAULT_SEED};

#[derive(Parser, Debug, Clone)]
#[command(about, long_about = None)]
pub struct SqlBenchCli {
    /// The target for the executor. For SQLite this is a database path, or `:memory:`.
    #[clap(short, long, default_value = ":memory:")]
    pub connection_string: String,

    /// The scenarios to run when no `--scenario` is given
    #[clap(long, value_enum, default_value_t = SuiteOpt::All)]
    pub suite: SuiteOpt,

    /// Run only this scenario. Can be given multiple times, scenarios run in the order given.
    ///
    /// Overrides `--suite`.
    #[clap(long = "scenario", short)]
    pub scenarios: Vec<u32>,

    /// The seed that every scenario is generated with
    #[clap(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// How scenarios reset their tables and create indexes
    #[clap(long, value_enum, default_value_t = DialectOpt::Managed)]
    pub dialect: DialectOpt,

    /// Whether the keyed scenarios (7, 9 and 10) go through an indexed column or the primary key
    #[clap(long, value_enum, default_value_t = KeyStrategyOpt::IndexedColumn)]
    pub key_strategy: KeyStrategyOpt,

    /// Do not show a progress bar on the CLI.
    ///
    /// This is recommended for CI/CD environments where the progress bar isn't being looked at by anyone and is just adding noise to the logs.
    #[clap(long, default_value = "false")]
    pub no_progress: bool,

    /// Do not write the JSON results file.
    #[clap(long, default_value = "false")]
    pub no_export: bool,

    /// The ID of this run. A random one is generated if this is not set.
    #[clap(long)]
    pub run_id: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SuiteOpt {
    /// Every defined scenario
    #[default]
    All,
    /// Scenarios 1, 2 and 4
    Quick,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum DialectOpt {
    /// Tables already exist. Clear them with `DELETE FROM` and create indexes idempotently.
    #[default]
    Managed,
    /// Drop and recreate tables at the start of each scenario.
    Standalone,
}

impl From<DialectOpt> for Dialect {
    fn from(value: DialectOpt) -> Self {
        match value {
            DialectOpt::Managed => Dialect::Managed,
            DialectOpt::Standalone => Dialect::Standalone,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum KeyStrategyOpt {
    #[default]
    IndexedColumn,
    PrimaryKey,
}

impl From<KeyStrategyOpt> for KeyStrategy {
    fn from(value: KeyStrategyOpt) -> Self {
        match value {
            KeyStrategyOpt::IndexedColumn => KeyStrategy::IndexedColumn,
            KeyStrategyOpt::PrimaryKey => KeyStrategy::PrimaryKey,
        }
    }
}
