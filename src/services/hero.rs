//! Hero facade: cached upstream reads merged with the local store.

use std::sync::Arc;

use tracing::{error, info};

use crate::cache::{keys, TtlCache};
use crate::error::{GatewayError, Result};
use crate::models::{Hero, HeroBenchmarks};
use crate::repository::HeroRepository;
use crate::services::{validate_hero, HeroIdAllowList};
use crate::upstream::DotaApi;

// == Hero Service ==
#[derive(Clone)]
pub struct HeroService {
    api: Arc<dyn DotaApi>,
    repository: Arc<dyn HeroRepository>,
    cache: TtlCache,
    allow_list: HeroIdAllowList,
}

impl HeroService {
    pub fn new(
        api: Arc<dyn DotaApi>,
        repository: Arc<dyn HeroRepository>,
        cache: TtlCache,
        allow_list: HeroIdAllowList,
    ) -> Self {
        Self {
            api,
            repository,
            cache,
            allow_list,
        }
    }

    // == Reads ==
    /// Upstream heroes followed by every local hero.
    ///
    /// The upstream half is cached, the local half is read fresh on every call.
    /// Records are concatenated without de-duplication.
    pub async fn all_heroes(&self) -> Result<Vec<Hero>> {
        let local = self.repository.all().await?;
        let mut heroes = self
            .cache
            .get_or_fetch(keys::ALL_HEROES, move || self.api.heroes())
            .await?;

        info!(
            "Returning {} upstream and {} local heroes",
            heroes.len(),
            local.len()
        );
        heroes.extend(local);
        Ok(heroes)
    }

    /// Upstream hero by id. An unknown id is not cached.
    pub async fn hero_by_id(&self, id: u32) -> Result<Hero> {
        let hero = self
            .cache
            .get_or_fetch(&keys::hero(id), move || async move {
                self.api
                    .heroes()
                    .await?
                    .into_iter()
                    .find(|h| h.id == id)
                    .ok_or_else(|| GatewayError::NotFound(format!("hero with id {id} not found")))
            })
            .await?;

        info!("Returning hero with id: {}", id);
        Ok(hero)
    }

    /// Benchmarks for an allow-listed hero id.
    pub async fn hero_benchmarks(&self, id: u32) -> Result<HeroBenchmarks> {
        if !self.is_id_valid(id) {
            error!("Benchmarks by hero with id {} not found", id);
            return Err(GatewayError::NotFound(format!(
                "benchmarks by hero with id {id} not found"
            )));
        }

        let benchmarks = self
            .cache
            .get_or_fetch(&keys::benchmark(id), move || self.api.hero_benchmarks(id))
            .await?;

        info!("Returning benchmarks for hero with id: {}", id);
        Ok(benchmarks)
    }

    pub fn is_id_valid(&self, id: u32) -> bool {
        self.allow_list.contains(id)
    }

    // == Writes ==
    pub async fn add_hero(&self, hero: Hero) -> Result<()> {
        validate_hero(&hero)?;
        let id = hero.id;
        self.repository.add(hero).await?;
        info!("Added local hero {}", id);
        Ok(())
    }

    pub async fn update_hero(&self, hero: Hero) -> Result<()> {
        validate_hero(&hero)?;
        let id = hero.id;
        self.repository.update(hero).await?;
        info!("Updated local hero {}", id);
        Ok(())
    }

    pub async fn delete_hero(&self, id: u32) -> Result<()> {
        self.repository.remove(id).await?;
        info!("Deleted local hero {}", id);
        Ok(())
    }
}
