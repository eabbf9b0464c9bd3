//! Scripted in-process [`DotaApi`] for unit tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::{GatewayError, Result};
use crate::models::{BenchmarkResult, Hero, HeroBenchmarks, ProPlayer, Team, TeamHeroStat};
use crate::upstream::DotaApi;

#[derive(Debug, Default)]
pub(crate) struct FakeDotaApi {
    pub heroes: Vec<Hero>,
    pub players: Vec<ProPlayer>,
    pub teams: Vec<Team>,
    pub team_heroes: HashMap<u64, Vec<TeamHeroStat>>,
    /// Teams whose stats call answers 500
    pub failing_teams: Vec<u64>,
    /// Artificial latency per team stats call
    pub team_delays: HashMap<u64, Duration>,
    /// Number of upcoming calls (of any kind) that fail with 503
    pub outages: AtomicUsize,
    /// Per-endpoint call counts, read through [`FakeDotaApi::calls`]
    pub calls: Mutex<HashMap<String, usize>>,
}

impl FakeDotaApi {
    pub fn calls(&self, endpoint: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .get(endpoint)
            .copied()
            .unwrap_or(0)
    }

    fn record(&self, endpoint: &str) -> Result<()> {
        *self
            .calls
            .lock()
            .unwrap()
            .entry(endpoint.to_string())
            .or_default() += 1;

        let outage = self
            .outages
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if outage {
            return Err(GatewayError::Upstream {
                status: 503,
                body: "temporarily unavailable".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl DotaApi for FakeDotaApi {
    async fn heroes(&self) -> Result<Vec<Hero>> {
        self.record("heroes")?;
        Ok(self.heroes.clone())
    }

    async fn hero_benchmarks(&self, hero_id: u32) -> Result<HeroBenchmarks> {
        self.record("benchmarks")?;
        Ok(HeroBenchmarks {
            hero_id,
            result: BenchmarkResult::default(),
        })
    }

    async fn pro_players(&self) -> Result<Vec<ProPlayer>> {
        self.record("proPlayers")?;
        Ok(self.players.clone())
    }

    async fn teams(&self) -> Result<Vec<Team>> {
        self.record("teams")?;
        Ok(self.teams.clone())
    }

    async fn team_heroes(&self, team_id: u64) -> Result<Vec<TeamHeroStat>> {
        self.record("team_heroes")?;
        if let Some(delay) = self.team_delays.get(&team_id) {
            tokio::time::sleep(*delay).await;
        }
        if self.failing_teams.contains(&team_id) {
            return Err(GatewayError::Upstream {
                status: 500,
                body: format!("stats for team {team_id} unavailable"),
            });
        }
        Ok(self.team_heroes.get(&team_id).cloned().unwrap_or_default())
    }
}

pub(crate) fn hero(id: u32, name: &str) -> Hero {
    Hero {
        id,
        name: name.to_string(),
        primary_attr: "str".to_string(),
        attack_type: "Melee".to_string(),
        roles: vec!["Carry".to_string()],
        legs: 2,
    }
}

pub(crate) fn team(team_id: u64) -> Team {
    Team {
        team_id,
        name: Some(format!("Team {team_id}")),
        tag: Some(format!("T{team_id}")),
        wins: 0,
        losses: 0,
    }
}

pub(crate) fn stat(hero_id: u32, games_played: u32) -> TeamHeroStat {
    TeamHeroStat {
        hero_id,
        localized_name: None,
        games_played,
        wins: 0,
    }
}
