//! Key Distribution Module
//!
//! Describes how benchmark keys are spread over the keyspace.

use std::fmt;
use std::str::FromStr;

use crate::error::{CacheError, Result};

/// Fraction of the keyspace forming the hot set in the default hotspot workload.
pub const DEFAULT_HOT_FRACTION: f64 = 0.2;

/// Probability that a hotspot request targets the hot set.
pub const DEFAULT_HOT_PROB: f64 = 0.8;

// == Workload ==
/// Statistical shape of a request trace.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Workload {
    /// Every key in `[0, keyspace)` equally likely.
    #[default]
    Uniform,
    /// Pareto-style skew: with probability `hot_prob` the key is drawn from
    /// the first `hot_fraction` of the keyspace, otherwise from all of it.
    Hotspot { hot_fraction: f64, hot_prob: f64 },
}

impl Workload {
    /// The 80/20 hotspot split.
    pub fn hotspot() -> Self {
        Workload::Hotspot {
            hot_fraction: DEFAULT_HOT_FRACTION,
            hot_prob: DEFAULT_HOT_PROB,
        }
    }

    // == Validate ==
    /// Checks that hotspot parameters are probabilities.
    pub fn validate(&self) -> Result<()> {
        if let Workload::Hotspot {
            hot_fraction,
            hot_prob,
        } = *self
        {
            if !(0.0..=1.0).contains(&hot_fraction) {
                return Err(CacheError::InvalidConfiguration(format!(
                    "hot_fraction must be within [0, 1], got {}",
                    hot_fraction
                )));
            }
            if !(0.0..=1.0).contains(&hot_prob) {
                return Err(CacheError::InvalidConfiguration(format!(
                    "hot_prob must be within [0, 1], got {}",
                    hot_prob
                )));
            }
        }
        Ok(())
    }
}

/// `uniform`, `hotspot` for the 80/20 split, or `hotspot:<fraction>:<prob>`.
impl fmt::Display for Workload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Workload::Uniform => f.write_str("uniform"),
            w if w == Workload::hotspot() => f.write_str("hotspot"),
            Workload::Hotspot {
                hot_fraction,
                hot_prob,
            } => write!(f, "hotspot:{}:{}", hot_fraction, hot_prob),
        }
    }
}

fn parse_param(raw: &str, name: &str) -> Result<f64> {
    raw.trim().parse().map_err(|_| {
        CacheError::InvalidRequest(format!("{} must be a number, got '{}'", name, raw))
    })
}

impl FromStr for Workload {
    type Err = CacheError;

    /// Accepts `uniform`, `hotspot`, and `zipf` (older name for the 80/20
    /// split). Either hotspot name may carry `:<fraction>:<prob>`.
    fn from_str(s: &str) -> Result<Self> {
        let lowered = s.trim().to_ascii_lowercase();
        let mut parts = lowered.split(':');
        let name = parts.next().unwrap_or_default();
        let params: Vec<&str> = parts.collect();

        let workload = match (name, params.as_slice()) {
            ("uniform", []) => Workload::Uniform,
            ("hotspot" | "zipf", []) => Workload::hotspot(),
            ("hotspot" | "zipf", [fraction, prob]) => Workload::Hotspot {
                hot_fraction: parse_param(fraction, "hot_fraction")?,
                hot_prob: parse_param(prob, "hot_prob")?,
            },
            _ => {
                return Err(CacheError::InvalidRequest(format!(
                    "unknown workload '{}', expected 'uniform', 'hotspot' or 'hotspot:<fraction>:<prob>'",
                    lowered
                )))
            }
        };
        workload.validate()?;
        Ok(workload)
    }
}
