//! Bench Module
//!
//! The workload driver: runs request traces through the cache and reports
//! hit rate, evictions, and latency.
//!
//! # Components
//! - Runner: one cache, one trace, one report
//! - Sweep: the runner over a capacity x workload grid
//! - Report: JSON and CSV output
//! - Plot: hit rate vs capacity chart for a sweep

mod plot;
mod report;
mod runner;
mod stats;
mod sweep;

pub use plot::{plot_hit_rate, PLOT_FILE_NAME};
pub use report::{write_csv, BenchReport, CSV_FILE_NAME, CSV_HEADER};
pub use runner::run_benchmark;
pub use stats::CacheStats;
pub use sweep::run_sweep;
