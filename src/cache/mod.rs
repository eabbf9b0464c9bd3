//! Cache Module
//!
//! In-memory TTL cache shared by the hero, player and team facades.

mod entry;
pub mod keys;
mod shared;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use shared::TtlCache;
pub use stats::CacheStats;
pub use store::CacheStore;
