//! Aggregation Module
//!
//! Pairs every team of a page with its favorite hero. Per-team stats are fetched
//! concurrently and joined before anything is returned; one failing team fails
//! the whole page.

use futures::future::join_all;
use tracing::{debug, error};

use crate::error::{GatewayError, Result};
use crate::models::{Team, TeamHeroStat, TeamWithFavoriteHero};
use crate::upstream::DotaApi;

// == Favorite Hero ==
/// Returns the stat with the strictly greatest `games_played`.
///
/// Ties keep the earliest entry. `None` for an empty slice.
pub fn favorite_hero(stats: &[TeamHeroStat]) -> Option<&TeamHeroStat> {
    let mut favorite: Option<&TeamHeroStat> = None;
    for stat in stats {
        if favorite.map_or(true, |best| stat.games_played > best.games_played) {
            favorite = Some(stat);
        }
    }
    favorite
}

// == Teams With Favorite Hero ==
/// Fans out one stats request per team, waits for all of them, then composes
/// the results in input order.
///
/// Every branch runs to completion even when another has already failed. The
/// first failure in input order is returned and no partial list is produced.
pub async fn teams_with_favorite_hero(
    api: &dyn DotaApi,
    teams: Vec<Team>,
) -> Result<Vec<TeamWithFavoriteHero>> {
    debug!("Fetching hero stats for {} teams", teams.len());

    let favorites = join_all(teams.iter().map(|team| favorite_for_team(api, team))).await;

    teams
        .into_iter()
        .zip(favorites)
        .map(|(team, favorite_hero)| {
            Ok(TeamWithFavoriteHero {
                team,
                favorite_hero: favorite_hero?,
            })
        })
        .collect()
}

async fn favorite_for_team(api: &dyn DotaApi, team: &Team) -> Result<TeamHeroStat> {
    let stats = api.team_heroes(team.team_id).await?;

    match favorite_hero(&stats) {
        Some(favorite) => {
            debug!(
                "Team {} favorite hero is {} ({} games)",
                team.team_id, favorite.hero_id, favorite.games_played
            );
            Ok(favorite.clone())
        }
        None => {
            error!("Heroes stats for team with id: {} not found", team.team_id);
            Err(GatewayError::Upstream {
                status: 404,
                body: format!("Heroes stats for team with id: {} not found", team.team_id),
            })
        }
    }
}
