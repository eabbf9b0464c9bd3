//! API Handlers
//!
//! HTTP request handlers translating requests into facade calls.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    Json,
};
use tracing::{info, warn};

use crate::cache::TtlCache;
use crate::config::Config;
use crate::error::Result;
use crate::models::{
    HealthResponse, Hero, HeroBenchmarks, MessageResponse, ProPlayer, StatsResponse, Team,
    TeamWithFavoriteHero,
};
use crate::pagination::PageQuery;
use crate::repository::{HeroRepository, InMemoryHeroRepository};
use crate::services::{HeroIdAllowList, HeroService, PlayerService, TeamService};
use crate::upstream::{DotaApi, OpenDotaClient};

/// Application state shared across all handlers.
///
/// All facades share one cache handle.
#[derive(Clone)]
pub struct AppState {
    pub heroes: HeroService,
    pub players: PlayerService,
    pub teams: TeamService,
    pub cache: TtlCache,
}

impl AppState {
    /// Wires the facades around one upstream client, one local store and one cache.
    pub fn new(
        api: Arc<dyn DotaApi>,
        repository: Arc<dyn HeroRepository>,
        cache: TtlCache,
        allow_list: HeroIdAllowList,
    ) -> Self {
        Self {
            heroes: HeroService::new(api.clone(), repository, cache.clone(), allow_list),
            players: PlayerService::new(api.clone(), cache.clone()),
            teams: TeamService::new(api, cache.clone()),
            cache,
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Uses the OpenDota client, an in-memory hero store and the allow-list file
    /// named by the config.
    pub async fn from_config(config: &Config) -> Result<Self> {
        let api = Arc::new(OpenDotaClient::new(config.upstream_base_url.clone()));
        let repository = Arc::new(InMemoryHeroRepository::new());
        let allow_list = HeroIdAllowList::load(&config.hero_ids_path).await?;
        if allow_list.is_empty() {
            warn!(
                "{} lists no hero ids, every benchmark query will be rejected",
                config.hero_ids_path
            );
        } else {
            info!("Loaded {} benchmark hero ids", allow_list.len());
        }

        Ok(Self::new(
            api,
            repository,
            TtlCache::new(config.ttl()),
            allow_list,
        ))
    }
}

// == Heroes ==

/// Handler for GET /heroes
pub async fn list_heroes_handler(State(state): State<AppState>) -> Result<Json<Vec<Hero>>> {
    Ok(Json(state.heroes.all_heroes().await?))
}

/// Handler for GET /heroes/:id
pub async fn get_hero_handler(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<Hero>> {
    Ok(Json(state.heroes.hero_by_id(id).await?))
}

/// Handler for GET /benchmarks/:id
pub async fn benchmarks_handler(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<HeroBenchmarks>> {
    Ok(Json(state.heroes.hero_benchmarks(id).await?))
}

/// Handler for POST /heroes
pub async fn add_hero_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Hero>, JsonRejection>,
) -> Result<Json<MessageResponse>> {
    let Json(hero) = payload?;
    let id = hero.id;
    state.heroes.add_hero(hero).await?;
    Ok(Json(MessageResponse::added(id)))
}

/// Handler for PUT /heroes
pub async fn update_hero_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Hero>, JsonRejection>,
) -> Result<Json<MessageResponse>> {
    let Json(hero) = payload?;
    let id = hero.id;
    state.heroes.update_hero(hero).await?;
    Ok(Json(MessageResponse::updated(id)))
}

/// Handler for DELETE /heroes/:id
pub async fn delete_hero_handler(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<MessageResponse>> {
    state.heroes.delete_hero(id).await?;
    Ok(Json(MessageResponse::deleted(id)))
}

// == Players and Teams ==

/// Handler for GET /pro_players?page=&limit=
pub async fn pro_players_handler(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Vec<ProPlayer>>> {
    let page = query.into_request()?;
    Ok(Json(state.players.pro_players(page).await?))
}

/// Handler for GET /pro_teams?page=&limit=
pub async fn pro_teams_handler(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Vec<Team>>> {
    let page = query.into_request()?;
    Ok(Json(state.teams.teams(page).await?))
}

/// Handler for GET /pro_teams/favorite?page=&limit=
pub async fn pro_teams_favorite_handler(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Vec<TeamWithFavoriteHero>>> {
    let page = query.into_request()?;
    Ok(Json(state.teams.teams_with_favorite_hero(page).await?))
}

// == Operational ==

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::from(state.cache.stats().await))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GatewayError;
    use crate::upstream::fake::{hero, FakeDotaApi};
    use std::time::Duration;

    fn test_state() -> AppState {
        let api = FakeDotaApi {
            heroes: vec![hero(1, "Anti-Mage"), hero(2, "Axe")],
            ..Default::default()
        };
        AppState::new(
            Arc::new(api),
            Arc::new(InMemoryHeroRepository::new()),
            TtlCache::new(Duration::from_secs(60)),
            HeroIdAllowList::from_ids([1, 2]),
        )
    }

    #[tokio::test]
    async fn test_add_then_list() {
        let state = test_state();

        let response = add_hero_handler(State(state.clone()), Ok(Json(hero(900, "Custom"))))
            .await
            .unwrap();
        assert_eq!(response.id, 900);

        let heroes = list_heroes_handler(State(state)).await.unwrap();
        assert_eq!(heroes.len(), 3);
        assert_eq!(heroes[2].id, 900);
    }

    #[tokio::test]
    async fn test_pro_teams_rejects_bad_page() {
        let state = test_state();
        let query = PageQuery {
            page: Some(0),
            limit: Some(10),
        };

        let result = pro_teams_handler(State(state), Query(query)).await;
        assert!(matches!(result, Err(GatewayError::InvalidParameter(_))));
    }

    #[tokio::test]
    async fn test_stats_handler_counts_reads() {
        let state = test_state();

        get_hero_handler(State(state.clone()), Path(1)).await.unwrap();
        get_hero_handler(State(state.clone()), Path(1)).await.unwrap();

        let stats = stats_handler(State(state)).await;
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
