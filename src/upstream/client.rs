//! OpenDota HTTP client.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::error::{GatewayError, Result};
use crate::models::{Hero, HeroBenchmarks, ProPlayer, Team, TeamHeroStat};
use crate::upstream::DotaApi;

// == OpenDota Client ==
/// [`DotaApi`] over HTTP/JSON using reqwest.
#[derive(Debug, Clone)]
pub struct OpenDotaClient {
    http: reqwest::Client,
    base_url: String,
}

impl OpenDotaClient {
    /// Creates a client rooted at `base_url`. A missing trailing slash is added.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            error!("Upstream {} answered {}", path, status);
            return Err(GatewayError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            error!("Failed to decode upstream {}: {}", path, e);
            GatewayError::Decode(format!("{path}: {e}"))
        })
    }
}

#[async_trait]
impl DotaApi for OpenDotaClient {
    async fn heroes(&self) -> Result<Vec<Hero>> {
        self.fetch("heroes").await
    }

    async fn hero_benchmarks(&self, hero_id: u32) -> Result<HeroBenchmarks> {
        self.fetch(&format!("benchmarks?hero_id={hero_id}")).await
    }

    async fn pro_players(&self) -> Result<Vec<ProPlayer>> {
        self.fetch("proPlayers").await
    }

    async fn teams(&self) -> Result<Vec<Team>> {
        self.fetch("teams").await
    }

    async fn team_heroes(&self, team_id: u64) -> Result<Vec<TeamHeroStat>> {
        let stats: Option<Vec<TeamHeroStat>> =
            self.fetch(&format!("teams/{team_id}/heroes")).await?;
        Ok(stats.unwrap_or_default())
    }
}
