//! Cache Module
//!
//! Provides a fixed-capacity in-memory cache with O(1) LRU eviction.

mod entry;
mod lru;
mod store;


// Re-export public types
pub use store::LruCache;
