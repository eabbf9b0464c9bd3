//! Professional team records and per-team hero usage.

use serde::{Deserialize, Serialize};

/// A professional team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub team_id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
}

/// How often one team has played one hero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamHeroStat {
    pub hero_id: u32,
    #[serde(default)]
    pub localized_name: Option<String>,
    #[serde(default)]
    pub games_played: u32,
    #[serde(default)]
    pub wins: u32,
}

/// A team paired with its most played hero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamWithFavoriteHero {
    #[serde(rename = "teams")]
    pub team: Team,
    pub favorite_hero: TeamHeroStat,
}
