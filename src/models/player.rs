//! Professional player records, read-only from upstream.

use serde::{Deserialize, Serialize};

/// A professional player and their team affiliation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProPlayer {
    pub account_id: u64,
    #[serde(default)]
    pub steamid: Option<String>,
    #[serde(default)]
    pub profileurl: Option<String>,
    #[serde(default)]
    pub personaname: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub fantasy_role: Option<i32>,
    #[serde(default)]
    pub team_id: Option<u64>,
    #[serde(default)]
    pub team_name: Option<String>,
    #[serde(default)]
    pub team_tag: Option<String>,
    #[serde(default)]
    pub is_locked: Option<bool>,
    #[serde(default)]
    pub is_pro: Option<bool>,
}
