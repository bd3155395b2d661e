//! LRU Bench - command-line benchmark driver
//!
//! `lru_bench run` measures one cache configuration; `lru_bench sweep` runs
//! the capacity x workload grid and can write the results as CSV plus a
//! hit-rate chart.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tokio::{signal, task};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lru_bench::bench::{plot_hit_rate, write_csv, BenchReport, CSV_FILE_NAME, PLOT_FILE_NAME};
use lru_bench::{run_benchmark, run_sweep, BenchConfig, SweepConfig, Workload};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a single benchmark and print its report as JSON
    Run(RunArgs),
    /// Run every workload against every capacity
    Sweep(SweepArgs),
}

/// Flags override the `LRU_*` environment variables.
#[derive(Args, Debug)]
struct RunArgs {
    /// Cache capacity (number of entries)
    #[arg(short, long)]
    capacity: Option<usize>,

    /// Key distribution: uniform, hotspot or hotspot:<fraction>:<prob>
    #[arg(short, long)]
    workload: Option<Workload>,

    /// Number of distinct keys
    #[arg(short, long)]
    keyspace: Option<u64>,

    /// Number of requests
    #[arg(short, long)]
    requests: Option<u64>,

    /// Generator seed
    #[arg(short, long)]
    seed: Option<u64>,
}

impl RunArgs {
    fn apply(self, mut config: BenchConfig) -> BenchConfig {
        if let Some(capacity) = self.capacity {
            config.capacity = capacity;
        }
        if let Some(workload) = self.workload {
            config.workload = workload;
        }
        if let Some(keyspace) = self.keyspace {
            config.keyspace = keyspace;
        }
        if let Some(requests) = self.requests {
            config.requests = requests;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        config
    }
}

#[derive(Args, Debug)]
struct SweepArgs {
    /// Comma-separated capacities
    #[arg(short, long, value_delimiter = ',')]
    capacities: Option<Vec<usize>>,

    /// Comma-separated workloads
    #[arg(short, long, value_delimiter = ',')]
    workloads: Option<Vec<Workload>>,

    /// Number of distinct keys
    #[arg(short, long)]
    keyspace: Option<u64>,

    /// Number of requests per run
    #[arg(short, long)]
    requests: Option<u64>,

    /// Generator seed
    #[arg(short, long)]
    seed: Option<u64>,

    /// Directory to write lru_bench_results.csv into
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Also draw lru_bench_hitrate.svg into the output directory
    #[arg(long, requires = "out")]
    plot: bool,
}

impl SweepArgs {
    fn apply(&self, mut config: SweepConfig) -> SweepConfig {
        if let Some(capacities) = &self.capacities {
            config.capacities = capacities.clone();
        }
        if let Some(workloads) = &self.workloads {
            config.workloads = workloads.clone();
        }
        if let Some(keyspace) = self.keyspace {
            config.keyspace = keyspace;
        }
        if let Some(requests) = self.requests {
            config.requests = requests;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        config
    }
}

/// Main entry point.
///
/// Logs go to stderr (default filter `lru_bench=info`, override with
/// `RUST_LOG`) so stdout carries only JSON reports.
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lru_bench=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Run(args) => run(args).await,
        Command::Sweep(args) => sweep(args).await,
    }
}

async fn run(args: RunArgs) -> Result<()> {
    let config = args.apply(BenchConfig::from_env());
    config.validate().context("invalid benchmark configuration")?;
    info!(
        "Configuration loaded: capacity={}, workload={}, keyspace={}, requests={}, seed={}",
        config.capacity, config.workload, config.keyspace, config.requests, config.seed
    );

    let report = task::spawn_blocking(move || run_benchmark(&config))
        .await
        .context("benchmark task failed")??;

    println!("{}", report.to_json()?);
    info!(
        "hit_rate={:.4} evictions={} avg_latency_ns={:.1}",
        report.hit_rate, report.eviction_count, report.avg_latency_ns
    );
    Ok(())
}

async fn sweep(args: SweepArgs) -> Result<()> {
    let config = args.apply(SweepConfig::from_env());
    config.validate().context("invalid sweep configuration")?;

    let print_report = |report: &BenchReport| match report.to_json() {
        Ok(line) => println!("{}", line),
        Err(e) => error!("Failed to encode report: {}", e),
    };

    let reports = tokio::select! {
        result = run_sweep(&config, print_report) => result?,
        _ = shutdown_signal() => {
            warn!("Sweep interrupted, skipping CSV output");
            return Ok(());
        }
    };

    if let Some(dir) = &args.out {
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("creating output directory {}", dir.display()))?;
        let path = dir.join(CSV_FILE_NAME);
        write_csv(&path, &reports)
            .with_context(|| format!("writing results to {}", path.display()))?;
        info!("Results written to {}", path.display());

        if args.plot {
            let path = dir.join(PLOT_FILE_NAME);
            plot_hit_rate(&path, &reports)
                .with_context(|| format!("drawing chart to {}", path.display()))?;
            info!("Chart written to {}", path.display());
        }
    }

    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, stopping sweep...");
        }
        _ = terminate => {
            info!("Received SIGTERM, stopping sweep...");
        }
    }
}
