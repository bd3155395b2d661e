//! LRU Bench - A fixed-capacity LRU cache and its workload benchmark
//!
//! Provides an O(1) least-recently-used cache engine plus a seeded workload
//! driver that measures hit rate and latency under uniform and hotspot traces.

pub mod bench;
pub mod cache;
pub mod config;
pub mod error;
pub mod workload;

pub use bench::{run_benchmark, run_sweep, BenchReport};
pub use cache::LruCache;
pub use config::{BenchConfig, SweepConfig};
pub use error::{CacheError, Result};
pub use workload::{KeyGenerator, Workload};
