//! Hero ids that may be queried for benchmarks.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::error::{GatewayError, Result};

#[derive(Debug, Deserialize)]
struct IdFile {
    valid_ids: Vec<u32>,
}

/// Fixed set of hero ids, loaded once from `{"valid_ids": [...]}`.
#[derive(Debug, Clone, Default)]
pub struct HeroIdAllowList {
    ids: HashSet<u32>,
}

impl HeroIdAllowList {
    pub fn from_ids(ids: impl IntoIterator<Item = u32>) -> Self {
        Self {
            ids: ids.into_iter().collect(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let file: IdFile = serde_json::from_str(json)
            .map_err(|e| GatewayError::Internal(format!("invalid hero id list: {e}")))?;
        Ok(Self::from_ids(file.valid_ids))
    }

    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path).await.map_err(|e| {
            GatewayError::Internal(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_json(&json)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json() {
        let list = HeroIdAllowList::from_json(r#"{"valid_ids": [1, 2, 129]}"#).unwrap();
        assert_eq!(list.len(), 3);
        assert!(list.contains(129));
        assert!(!list.contains(24));
    }

    #[test]
    fn test_empty_list() {
        let list = HeroIdAllowList::from_json(r#"{"valid_ids": []}"#).unwrap();
        assert!(list.is_empty());
        assert!(!list.contains(1));
    }

    #[test]
    fn test_from_json_rejects_wrong_shape() {
        assert!(HeroIdAllowList::from_json(r#"[1, 2]"#).is_err());
    }

    #[tokio::test]
    async fn test_load_bundled_list() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/hero_ids.json");
        let list = HeroIdAllowList::load(path).await.unwrap();
        assert!(list.contains(1));
        assert!(!list.contains(24));
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        assert!(HeroIdAllowList::load("/nonexistent/hero_ids.json").await.is_err());
    }
}
