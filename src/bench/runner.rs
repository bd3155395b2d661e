//! Benchmark Runner
//!
//! Drives a fresh cache with a generated key trace and measures the outcome.

use std::time::Instant;

use chrono::Utc;
use tracing::debug;

use crate::bench::{BenchReport, CacheStats};
use crate::cache::LruCache;
use crate::config::BenchConfig;
use crate::error::Result;
use crate::workload::KeyGenerator;

/// Runs one benchmark described by `config`.
///
/// Each request is a `get`; on a miss the key is inserted with itself as the
/// value, the usual read-through pattern. Timing covers the whole request loop
/// including key generation.
///
/// # Errors
/// Returns `CacheError::InvalidConfiguration` if the config fails validation.
pub fn run_benchmark(config: &BenchConfig) -> Result<BenchReport> {
    config.validate()?;

    let mut cache: LruCache<u64, u64> = LruCache::new(config.capacity)?;
    let mut generator = KeyGenerator::new(config.keyspace, config.workload, config.seed)?;
    let mut stats = CacheStats::new();

    debug!(
        capacity = config.capacity,
        workload = %config.workload,
        keyspace = config.keyspace,
        requests = config.requests,
        seed = config.seed,
        "starting benchmark run"
    );

    let started_at = Utc::now();
    let start = Instant::now();

    for _ in 0..config.requests {
        let key = generator.next_key();
        if cache.get(&key).is_some() {
            stats.record_hit();
        } else {
            stats.record_miss();
            cache.put(key, key);
        }
    }

    let elapsed = start.elapsed();
    stats.set_evictions(cache.eviction_count());
    stats.set_total_entries(cache.len());

    debug!(
        hits = stats.hits,
        misses = stats.misses,
        evictions = stats.evictions,
        elapsed_ms = elapsed.as_millis() as u64,
        "benchmark run finished"
    );

    Ok(BenchReport::new(config, &stats, elapsed, started_at))
}
