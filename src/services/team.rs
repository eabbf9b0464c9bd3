//! Pro team facade, including the favorite-hero aggregation.

use std::sync::Arc;

use tracing::info;

use crate::aggregate::teams_with_favorite_hero;
use crate::cache::{keys, TtlCache};
use crate::error::Result;
use crate::models::{Team, TeamWithFavoriteHero};
use crate::pagination::{slice, PageRequest};
use crate::upstream::DotaApi;

#[derive(Clone)]
pub struct TeamService {
    api: Arc<dyn DotaApi>,
    cache: TtlCache,
}

impl TeamService {
    pub fn new(api: Arc<dyn DotaApi>, cache: TtlCache) -> Self {
        Self { api, cache }
    }

    /// One page of pro teams, cached per page/limit pair.
    pub async fn teams(&self, page: PageRequest) -> Result<Vec<Team>> {
        let teams = self
            .cache
            .get_or_fetch(&keys::teams(page), move || async move {
                let all = self.api.teams().await?;
                Ok(slice(&all, page))
            })
            .await?;

        info!("Returning {} pro teams (page {})", teams.len(), page.page());
        Ok(teams)
    }

    /// One page of pro teams, each paired with its most played hero.
    ///
    /// Only the teams of the requested page are fanned out.
    pub async fn teams_with_favorite_hero(
        &self,
        page: PageRequest,
    ) -> Result<Vec<TeamWithFavoriteHero>> {
        let composed = self
            .cache
            .get_or_fetch(&keys::teams_favorite_hero(page), move || async move {
                let teams = self.teams(page).await?;
                teams_with_favorite_hero(self.api.as_ref(), teams).await
            })
            .await?;

        info!(
            "Returning {} pro teams with favorite hero (page {})",
            composed.len(),
            page.page()
        );
        Ok(composed)
    }
}
