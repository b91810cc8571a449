use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Compare the latest SQL Bench results from two directories", long_about = None)]
struct CompareCli {
    /// Results directory for the left hand side
    #[clap(long)]
    left: PathBuf,

    /// Results directory for the right hand side
    #[clap(long)]
    right: PathBuf,

    /// Write the markdown here instead of printing it
    #[clap(long, short)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = CompareCli::parse();
    log::debug!("Comparing {} with {}", cli.left.display(), cli.right.display());

    let markdown = sql_bench_compare::compare_dirs(&cli.left, &cli.right)?;

    match cli.output {
        Some(path) => {
            std::fs::write(&path, markdown)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("Benchmark comparison written to {}", path.display());
        }
        None => print!("{markdown}"),
    }

    Ok(())
}
