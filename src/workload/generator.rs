//! Key Generator Module
//!
//! Seeded, reproducible stream of integer keys for a [`Workload`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{CacheError, Result};
use crate::workload::Workload;

// == Key Generator ==
/// Produces keys in `[0, keyspace)` following a [`Workload`].
///
/// The same `(keyspace, workload, seed)` always yields the same sequence.
#[derive(Debug, Clone)]
pub struct KeyGenerator {
    rng: StdRng,
    keyspace: u64,
    workload: Workload,
}

impl KeyGenerator {
    // == Constructor ==
    /// # Errors
    /// Returns `CacheError::InvalidConfiguration` for an empty keyspace or
    /// hotspot parameters outside `[0, 1]`.
    pub fn new(keyspace: u64, workload: Workload, seed: u64) -> Result<Self> {
        if keyspace == 0 {
            return Err(CacheError::InvalidConfiguration(
                "keyspace must be a positive integer".to_string(),
            ));
        }
        workload.validate()?;

        Ok(Self {
            rng: StdRng::seed_from_u64(seed),
            keyspace,
            workload,
        })
    }

    // == Next Key ==
    pub fn next_key(&mut self) -> u64 {
        match self.workload {
            Workload::Uniform => self.scaled(self.keyspace as f64),
            Workload::Hotspot {
                hot_fraction,
                hot_prob,
            } => {
                if self.rng.random::<f64>() < hot_prob {
                    let hot_span = (self.keyspace as f64 * hot_fraction).max(1.0);
                    self.scaled(hot_span)
                } else {
                    self.scaled(self.keyspace as f64)
                }
            }
        }
    }

    /// `floor(u * span)` for `u` uniform in `[0, 1)`, kept below `keyspace`.
    fn scaled(&mut self, span: f64) -> u64 {
        let key = (self.rng.random::<f64>() * span).floor() as u64;
        key.min(self.keyspace - 1)
    }
}

impl Iterator for KeyGenerator {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        Some(self.next_key())
    }
}
