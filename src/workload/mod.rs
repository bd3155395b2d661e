//! Workload Module
//!
//! Synthetic request traces for driving the cache: a distribution description
//! and a seeded key generator. Nothing here depends on the cache engine.

mod distribution;
mod generator;

pub use distribution::{Workload, DEFAULT_HOT_FRACTION, DEFAULT_HOT_PROB};
pub use generator::KeyGenerator;
