//! Entity types and response DTOs
//!
//! Entities mirror the upstream JSON shapes; DTOs cover the remaining
//! response bodies of the HTTP adapter.

pub mod hero;
pub mod player;
pub mod responses;
pub mod team;

// Re-export commonly used types
pub use hero::{BenchmarkResult, Hero, HeroBenchmarks, Percentile};
pub use player::ProPlayer;
pub use responses::{HealthResponse, MessageResponse, StatsResponse};
pub use team::{Team, TeamHeroStat, TeamWithFavoriteHero};
