//! Benchmark Report Module
//!
//! Serializable result of one benchmark run, as JSON or as a CSV row.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::bench::CacheStats;
use crate::config::BenchConfig;
use crate::error::Result;

/// File name the sweep writes into its output directory.
pub const CSV_FILE_NAME: &str = "lru_bench_results.csv";

/// Column order shared by [`BenchReport::csv_row`].
pub const CSV_HEADER: &str = "capacity,workload,keyspace,requests,seed,hits,misses,hit_rate,\
eviction_count,avg_latency_ns,total_duration_ns,started_at,resident_entries";

// == Bench Report ==
/// Outcome of driving one cache with one request trace.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchReport {
    pub capacity: usize,
    /// Workload label, e.g. `uniform`, `hotspot` or `hotspot:0.1:0.9`
    pub workload: String,
    pub keyspace: u64,
    pub requests: u64,
    pub seed: u64,
    pub hits: u64,
    pub misses: u64,
    /// hits / requests
    pub hit_rate: f64,
    pub eviction_count: u64,
    /// Wall time of the request loop divided by requests
    pub avg_latency_ns: f64,
    pub total_duration_ns: u64,
    pub started_at: DateTime<Utc>,
    /// Entries left in the cache when the run ended
    pub resident_entries: usize,
}

impl BenchReport {
    // == Constructor ==
    pub fn new(
        config: &BenchConfig,
        stats: &CacheStats,
        elapsed: Duration,
        started_at: DateTime<Utc>,
    ) -> Self {
        let total_duration_ns = u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX);
        let requests = stats.requests();
        let avg_latency_ns = if requests == 0 {
            0.0
        } else {
            total_duration_ns as f64 / requests as f64
        };

        Self {
            capacity: config.capacity,
            workload: config.workload.to_string(),
            keyspace: config.keyspace,
            requests,
            seed: config.seed,
            hits: stats.hits,
            misses: stats.misses,
            hit_rate: stats.hit_rate(),
            eviction_count: stats.evictions,
            avg_latency_ns,
            total_duration_ns,
            started_at,
            resident_entries: stats.total_entries,
        }
    }

    // == JSON ==
    /// Single-line JSON object.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    // == CSV ==
    /// One CSV line in [`CSV_HEADER`] order, without a trailing newline.
    pub fn csv_row(&self) -> String {
        format!(
            "{},{},{},{},{},{},{},{:.6},{},{:.2},{},{},{}",
            self.capacity,
            self.workload,
            self.keyspace,
            self.requests,
            self.seed,
            self.hits,
            self.misses,
            self.hit_rate,
            self.eviction_count,
            self.avg_latency_ns,
            self.total_duration_ns,
            self.started_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            self.resident_entries,
        )
    }
}

// == Write CSV ==
/// Writes a header plus one row per report to `path`, replacing the file.
pub fn write_csv(path: &Path, reports: &[BenchReport]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writeln!(writer, "{}", CSV_HEADER)?;
    for report in reports {
        writeln!(writer, "{}", report.csv_row())?;
    }
    writer.flush()?;
    Ok(())
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::workload::Workload;

    fn sample_report() -> BenchReport {
        let config = BenchConfig {
            capacity: 2,
            workload: Workload::hotspot(),
            keyspace: 10,
            requests: 4,
            seed: 42,
        };
        let mut stats = CacheStats::new();
        stats.record_hit();
        stats.record_miss();
        stats.record_miss();
        stats.record_miss();
        stats.set_evictions(1);
        stats.set_total_entries(2);
        BenchReport::new(&config, &stats, Duration::from_nanos(400), Utc::now())
    }

    #[test]
    fn test_report_fields() {
        let report = sample_report();
        assert_eq!(report.workload, "hotspot");
        assert_eq!(report.requests, 4);
        assert_eq!(report.hit_rate, 0.25);
        assert_eq!(report.eviction_count, 1);
        assert_eq!(report.total_duration_ns, 400);
        assert_eq!(report.avg_latency_ns, 100.0);
        assert_eq!(report.resident_entries, 2);
    }

    #[test]
    fn test_report_json_is_single_line() {
        let report = sample_report();
        let json = report.to_json().unwrap();

        assert!(!json.contains('\n'));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["capacity"], 2);
        assert_eq!(value["workload"], "hotspot");
        assert_eq!(value["eviction_count"], 1);
        assert!(value["started_at"].is_string());
        assert_eq!(value["resident_entries"], 2);
    }

    #[test]
    fn test_report_keeps_custom_hotspot_parameters() {
        let config = BenchConfig {
            workload: Workload::Hotspot {
                hot_fraction: 0.1,
                hot_prob: 0.9,
            },
            ..BenchConfig::default()
        };
        let report = BenchReport::new(&config, &CacheStats::new(), Duration::ZERO, Utc::now());

        assert_eq!(report.workload, "hotspot:0.1:0.9");
        assert_eq!(report.workload.parse::<Workload>().unwrap(), config.workload);
        assert_eq!(report.avg_latency_ns, 0.0);
    }

    #[test]
    fn test_csv_row_matches_header() {
        let report = sample_report();
        let row = report.csv_row();

        assert_eq!(
            row.split(',').count(),
            CSV_HEADER.split(',').count(),
            "row: {}",
            row
        );
        assert!(row.starts_with("2,hotspot,10,4,42,1,3,0.250000,1,100.00,400,"));
        assert!(row.ends_with(",2"), "row: {}", row);
    }
}
