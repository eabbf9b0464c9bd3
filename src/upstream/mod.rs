//! Upstream Module
//!
//! Read-only access to the external Dota 2 data provider.
//!
//! Every call either decodes the full payload or fails; nothing is retried and
//! nothing is cached at this layer.

mod client;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Hero, HeroBenchmarks, ProPlayer, Team, TeamHeroStat};

pub use client::OpenDotaClient;

// == Dota API ==
/// The resource families the facades read from upstream.
#[async_trait]
pub trait DotaApi: Send + Sync {
    /// `GET heroes`
    async fn heroes(&self) -> Result<Vec<Hero>>;

    /// `GET benchmarks?hero_id={hero_id}`
    async fn hero_benchmarks(&self, hero_id: u32) -> Result<HeroBenchmarks>;

    /// `GET proPlayers`
    async fn pro_players(&self) -> Result<Vec<ProPlayer>>;

    /// `GET teams`
    async fn teams(&self) -> Result<Vec<Team>>;

    /// `GET teams/{team_id}/heroes`
    ///
    /// A `null` body decodes to an empty list.
    async fn team_heroes(&self, team_id: u64) -> Result<Vec<TeamHeroStat>>;
}

#[cfg(test)]
pub(crate) mod fake;
