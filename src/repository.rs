//! Local Hero Store
//!
//! Storage for heroes added through the gateway. Id and name uniqueness is
//! enforced here, at the storage boundary, and reported as
//! [`GatewayError::Conflict`].

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{GatewayError, Result};
use crate::models::Hero;

// == Hero Repository ==
#[async_trait]
pub trait HeroRepository: Send + Sync {
    /// All local heroes in insertion order.
    async fn all(&self) -> Result<Vec<Hero>>;

    async fn find(&self, id: u32) -> Result<Option<Hero>>;

    /// Appends a hero. Duplicate id or name is a conflict.
    async fn add(&self, hero: Hero) -> Result<()>;

    /// Overwrites the hero with the same id in place.
    async fn update(&self, hero: Hero) -> Result<()>;

    async fn remove(&self, id: u32) -> Result<()>;
}

// == In-Memory Repository ==
/// Process-local [`HeroRepository`]. Names compare case-insensitively.
#[derive(Debug, Default)]
pub struct InMemoryHeroRepository {
    heroes: RwLock<Vec<Hero>>,
}

impl InMemoryHeroRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn same_name(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

#[async_trait]
impl HeroRepository for InMemoryHeroRepository {
    async fn all(&self) -> Result<Vec<Hero>> {
        Ok(self.heroes.read().await.clone())
    }

    async fn find(&self, id: u32) -> Result<Option<Hero>> {
        Ok(self.heroes.read().await.iter().find(|h| h.id == id).cloned())
    }

    async fn add(&self, hero: Hero) -> Result<()> {
        let mut heroes = self.heroes.write().await;

        if heroes.iter().any(|h| h.id == hero.id) {
            return Err(GatewayError::Conflict(format!(
                "hero id {} already exists",
                hero.id
            )));
        }
        if heroes.iter().any(|h| same_name(&h.name, &hero.name)) {
            return Err(GatewayError::Conflict(format!(
                "hero name '{}' already exists",
                hero.name
            )));
        }

        debug!("Storing hero {}", hero.id);
        heroes.push(hero);
        Ok(())
    }

    async fn update(&self, hero: Hero) -> Result<()> {
        let mut heroes = self.heroes.write().await;

        let position = heroes
            .iter()
            .position(|h| h.id == hero.id)
            .ok_or_else(|| GatewayError::NotFound(format!("hero with id {} not found", hero.id)))?;

        if heroes
            .iter()
            .any(|h| h.id != hero.id && same_name(&h.name, &hero.name))
        {
            return Err(GatewayError::Conflict(format!(
                "hero name '{}' already exists",
                hero.name
            )));
        }

        heroes[position] = hero;
        Ok(())
    }

    async fn remove(&self, id: u32) -> Result<()> {
        let mut heroes = self.heroes.write().await;
        let position = heroes
            .iter()
            .position(|h| h.id == id)
            .ok_or_else(|| GatewayError::NotFound(format!("hero with id {id} not found")))?;
        heroes.remove(position);
        Ok(())
    }
}
