use clap::Parser;
use rankbench::{ColumnCount, RankConfig, run};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

/// Rank per-query measurements across parallel CSV files.
#[derive(Parser, Debug)]
#[command(name = "rank-measurements")]
#[command(about = "Replace every metric with its cross-file competition rank")]
struct Args {
    /// Input CSV files, one per configuration, all in the same query order
    #[arg(value_name = "FILES", required = true)]
    inputs: Vec<PathBuf>,

    /// Expected fields per line, query id included (default: from the first line)
    #[arg(short = 'c', long, env = "RANKBENCH_COLUMNS")]
    columns: Option<usize>,

    /// Write run statistics as JSON to this path
    #[arg(long, value_name = "PATH")]
    stats: Option<PathBuf>,

    /// Log level when RUST_LOG is unset (trace, debug, info, warn, error)
    #[arg(long, env = "RANKBENCH_LOG_LEVEL", default_value = "info")]
    log_level: String,
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            // --help and --version are reported through the error path too.
            std::process::exit(if e.use_stderr() { -1 } else { 0 });
        }
    };

    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = try_main(args) {
        eprintln!("{:#}", e);
        error!("{:#}", e);
        std::process::exit(-1);
    }
}

fn try_main(args: Args) -> anyhow::Result<()> {
    let columns = args.columns.map_or(ColumnCount::FromFirstLine, ColumnCount::Fixed);
    let config = RankConfig::new(args.inputs, columns)?;

    let stats = run(&config)?;
    if let Some(path) = args.stats {
        stats.save_to_file(&path)?;
        info!(path = %path.display(), "stats written");
    }
    Ok(())
}
