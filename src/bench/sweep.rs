//! Sweep Task
//!
//! Runs the benchmark over a capacity x workload grid.

use tokio::task;
use tracing::info;

use crate::bench::{run_benchmark, BenchReport};
use crate::config::SweepConfig;
use crate::error::{CacheError, Result};

/// Runs every grid point in `config`, workload-major.
///
/// Runs execute one at a time on the blocking pool so they never compete for
/// CPU and skew each other's latency. `on_report` sees each report as soon as
/// its run finishes.
///
/// # Example
/// ```ignore
/// let reports = run_sweep(&SweepConfig::default(), |r| println!("{}", r.hit_rate)).await?;
/// ```
pub async fn run_sweep<F>(config: &SweepConfig, mut on_report: F) -> Result<Vec<BenchReport>>
where
    F: FnMut(&BenchReport),
{
    config.validate()?;

    let runs = config.runs();
    let total = runs.len();
    let mut reports = Vec::with_capacity(total);

    info!("Starting sweep of {} runs", total);

    for (i, run) in runs.into_iter().enumerate() {
        info!(
            "Running {} with capacity {} ({}/{})",
            run.workload,
            run.capacity,
            i + 1,
            total
        );

        let report = task::spawn_blocking(move || run_benchmark(&run))
            .await
            .map_err(|e| CacheError::Internal(format!("benchmark task failed: {}", e)))??;

        on_report(&report);
        reports.push(report);
    }

    info!("Sweep complete");
    Ok(reports)
}
