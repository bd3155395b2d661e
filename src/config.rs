//! Configuration Module
//!
//! Handles loading and validating benchmark configuration from environment
//! variables. Command-line flags are applied on top in `main`.

use std::env;

use crate::error::{CacheError, Result};
use crate::workload::Workload;

/// Capacities swept by default.
pub const DEFAULT_CAPACITIES: [usize; 5] = [100, 500, 1000, 5000, 10000];

/// Parses `name` from the lookup, falling back to `default` when absent or
/// malformed.
fn parsed<T, F>(lookup: &F, name: &str, default: T) -> T
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Parses a comma-separated list, falling back when absent or any item is
/// malformed.
fn parsed_list<T, F>(lookup: &F, name: &str, default: Vec<T>) -> Vec<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .and_then(|v| parse_list(&v).ok())
        .unwrap_or(default)
}

/// Splits `"a, b,c"` into parsed items, ignoring empty segments.
pub fn parse_list<T: std::str::FromStr>(raw: &str) -> std::result::Result<Vec<T>, T::Err> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect()
}

// == Bench Config ==
/// Parameters for a single benchmark run.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    /// Maximum number of entries the cache can hold
    pub capacity: usize,
    /// Key distribution
    pub workload: Workload,
    /// Number of distinct keys the generator draws from
    pub keyspace: u64,
    /// Number of requests to issue
    pub requests: u64,
    /// Generator seed
    pub seed: u64,
}

impl BenchConfig {
    /// Creates a new BenchConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `LRU_CAPACITY` - Cache capacity (default: 1000)
    /// - `LRU_WORKLOAD` - `uniform` or `hotspot` (default: uniform)
    /// - `LRU_KEYSPACE` - Distinct keys (default: 10000)
    /// - `LRU_REQUESTS` - Requests per run (default: 20000)
    /// - `LRU_SEED` - Generator seed (default: 42)
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`BenchConfig::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            capacity: parsed(&lookup, "LRU_CAPACITY", defaults.capacity),
            workload: parsed(&lookup, "LRU_WORKLOAD", defaults.workload),
            keyspace: parsed(&lookup, "LRU_KEYSPACE", defaults.keyspace),
            requests: parsed(&lookup, "LRU_REQUESTS", defaults.requests),
            seed: parsed(&lookup, "LRU_SEED", defaults.seed),
        }
    }

    // == Validate ==
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(CacheError::InvalidConfiguration(
                "capacity must be a positive integer".to_string(),
            ));
        }
        if self.keyspace == 0 {
            return Err(CacheError::InvalidConfiguration(
                "keyspace must be a positive integer".to_string(),
            ));
        }
        if self.requests == 0 {
            return Err(CacheError::InvalidConfiguration(
                "requests must be a positive integer".to_string(),
            ));
        }
        self.workload.validate()
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            capacity: 1000,
            workload: Workload::Uniform,
            keyspace: 10_000,
            requests: 20_000,
            seed: 42,
        }
    }
}

// == Sweep Config ==
/// Grid of benchmark runs: every workload crossed with every capacity.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepConfig {
    pub capacities: Vec<usize>,
    pub workloads: Vec<Workload>,
    pub keyspace: u64,
    pub requests: u64,
    pub seed: u64,
}

impl SweepConfig {
    /// Creates a new SweepConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `LRU_CAPACITIES` - Comma-separated capacities (default: 100,500,1000,5000,10000)
    /// - `LRU_WORKLOADS` - Comma-separated workloads (default: uniform,hotspot)
    /// - `LRU_KEYSPACE` - Distinct keys (default: 10000)
    /// - `LRU_REQUESTS` - Requests per run (default: 100000)
    /// - `LRU_SEED` - Generator seed (default: 42)
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            capacities: parsed_list(&lookup, "LRU_CAPACITIES", defaults.capacities),
            workloads: parsed_list(&lookup, "LRU_WORKLOADS", defaults.workloads),
            keyspace: parsed(&lookup, "LRU_KEYSPACE", defaults.keyspace),
            requests: parsed(&lookup, "LRU_REQUESTS", defaults.requests),
            seed: parsed(&lookup, "LRU_SEED", defaults.seed),
        }
    }

    // == Validate ==
    pub fn validate(&self) -> Result<()> {
        if self.capacities.is_empty() {
            return Err(CacheError::InvalidConfiguration(
                "sweep needs at least one capacity".to_string(),
            ));
        }
        if self.workloads.is_empty() {
            return Err(CacheError::InvalidConfiguration(
                "sweep needs at least one workload".to_string(),
            ));
        }
        self.runs().iter().try_for_each(BenchConfig::validate)
    }

    /// Expands the grid into individual runs, workload-major.
    pub fn runs(&self) -> Vec<BenchConfig> {
        self.workloads
            .iter()
            .flat_map(|workload| {
                self.capacities.iter().map(move |capacity| BenchConfig {
                    capacity: *capacity,
                    workload: *workload,
                    keyspace: self.keyspace,
                    requests: self.requests,
                    seed: self.seed,
                })
            })
            .collect()
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            capacities: DEFAULT_CAPACITIES.to_vec(),
            workloads: vec![Workload::Uniform, Workload::hotspot()],
            keyspace: 10_000,
            requests: 100_000,
            seed: 42,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_bench_config_default() {
        let config = BenchConfig::default();
        assert_eq!(config.capacity, 1000);
        assert_eq!(config.workload, Workload::Uniform);
        assert_eq!(config.keyspace, 10_000);
        assert_eq!(config.requests, 20_000);
        assert_eq!(config.seed, 42);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bench_config_from_lookup() {
        let config = BenchConfig::from_lookup(lookup_from(&[
            ("LRU_CAPACITY", "64"),
            ("LRU_WORKLOAD", "zipf"),
            ("LRU_SEED", "7"),
        ]));
        assert_eq!(config.capacity, 64);
        assert_eq!(config.workload, Workload::hotspot());
        assert_eq!(config.seed, 7);
        assert_eq!(config.keyspace, 10_000);
    }

    #[test]
    fn test_bench_config_malformed_falls_back() {
        let config = BenchConfig::from_lookup(lookup_from(&[
            ("LRU_CAPACITY", "-5"),
            ("LRU_WORKLOAD", "bogus"),
        ]));
        assert_eq!(config.capacity, 1000);
        assert_eq!(config.workload, Workload::Uniform);
    }

    #[test]
    fn test_bench_config_validate() {
        let config = BenchConfig {
            capacity: 0,
            ..BenchConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(CacheError::InvalidConfiguration(_))
        ));

        let config = BenchConfig {
            requests: 0,
            ..BenchConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_sweep_config_default() {
        let config = SweepConfig::default();
        assert_eq!(config.capacities, vec![100, 500, 1000, 5000, 10000]);
        assert_eq!(config.workloads.len(), 2);
        assert_eq!(config.requests, 100_000);
        assert_eq!(config.runs().len(), 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_sweep_config_from_lookup() {
        let config = SweepConfig::from_lookup(lookup_from(&[
            ("LRU_CAPACITIES", "10, 20"),
            ("LRU_WORKLOADS", "hotspot"),
        ]));
        assert_eq!(config.capacities, vec![10, 20]);
        assert_eq!(config.workloads, vec![Workload::hotspot()]);
    }

    #[test]
    fn test_sweep_runs_are_workload_major() {
        let config = SweepConfig {
            capacities: vec![1, 2],
            ..SweepConfig::default()
        };
        let runs: Vec<(String, usize)> = config
            .runs()
            .iter()
            .map(|r| (r.workload.to_string(), r.capacity))
            .collect();
        let expected: Vec<(String, usize)> =
            [("uniform", 1), ("uniform", 2), ("hotspot", 1), ("hotspot", 2)]
                .iter()
                .map(|(name, cap)| (name.to_string(), *cap))
                .collect();
        assert_eq!(runs, expected);
    }

    #[test]
    fn test_sweep_config_rejects_empty_grid() {
        let config = SweepConfig {
            capacities: vec![],
            ..SweepConfig::default()
        };
        assert!(config.validate().is_err());

        let config = SweepConfig {
            workloads: vec![],
            ..SweepConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_list() {
        let values: Vec<usize> = parse_list("1, 2,,3").unwrap();
        assert_eq!(values, vec![1, 2, 3]);
        assert!(parse_list::<usize>("1,x").is_err());
    }
}
