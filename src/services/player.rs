//! Pro player facade.

use std::sync::Arc;

use tracing::info;

use crate::cache::{keys, TtlCache};
use crate::error::Result;
use crate::models::ProPlayer;
use crate::pagination::{slice, PageRequest};
use crate::upstream::DotaApi;

#[derive(Clone)]
pub struct PlayerService {
    api: Arc<dyn DotaApi>,
    cache: TtlCache,
}

impl PlayerService {
    pub fn new(api: Arc<dyn DotaApi>, cache: TtlCache) -> Self {
        Self { api, cache }
    }

    /// One page of pro players, cached per page/limit pair.
    pub async fn pro_players(&self, page: PageRequest) -> Result<Vec<ProPlayer>> {
        let players = self
            .cache
            .get_or_fetch(&keys::pro_players(page), move || async move {
                let all = self.api.pro_players().await?;
                Ok(slice(&all, page))
            })
            .await?;

        info!(
            "Returning {} pro players (page {}, limit {})",
            players.len(),
            page.page(),
            page.limit()
        );
        Ok(players)
    }
}
