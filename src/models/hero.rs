//! Hero entities as served by the upstream API and stored locally.

use serde::{Deserialize, Serialize};

// == Hero ==
/// A playable hero.
///
/// Upstream records are taken as-is; locally added records must pass
/// [`crate::services::validate_hero`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub id: u32,
    #[serde(rename = "localized_name")]
    pub name: String,
    pub primary_attr: String,
    pub attack_type: String,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub legs: u32,
}

// == Benchmarks ==
/// Percentile benchmarks for one hero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroBenchmarks {
    pub hero_id: u32,
    pub result: BenchmarkResult,
}

/// Percentile series per performance metric.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchmarkResult {
    pub gold_per_min: Vec<Percentile>,
    pub xp_per_min: Vec<Percentile>,
    pub kills_per_min: Vec<Percentile>,
    pub last_hits_per_min: Vec<Percentile>,
    pub hero_damage_per_min: Vec<Percentile>,
    pub hero_healing_per_min: Vec<Percentile>,
    pub tower_damage: Vec<Percentile>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Percentile {
    pub percentile: f64,
    pub value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_deserialize_upstream_shape() {
        let json = r#"{
            "id": 1,
            "name": "npc_dota_hero_antimage",
            "localized_name": "Anti-Mage",
            "primary_attr": "agi",
            "attack_type": "Melee",
            "roles": ["Carry", "Escape", "Nuker"],
            "legs": 2
        }"#;
        let hero: Hero = serde_json::from_str(json).unwrap();
        assert_eq!(hero.id, 1);
        assert_eq!(hero.name, "Anti-Mage");
        assert_eq!(hero.roles.len(), 3);
        assert_eq!(hero.legs, 2);
    }

    #[test]
    fn test_hero_serializes_localized_name() {
        let hero = Hero {
            id: 900,
            name: "Custom".to_string(),
            primary_attr: "str".to_string(),
            attack_type: "Melee".to_string(),
            roles: vec!["Durable".to_string()],
            legs: 2,
        };
        let json = serde_json::to_value(&hero).unwrap();
        assert_eq!(json["localized_name"], "Custom");
        assert!(json.get("name").is_none());
    }

    #[test]
    fn test_benchmarks_tolerate_missing_series() {
        let json = r#"{
            "hero_id": 5,
            "result": {
                "gold_per_min": [{"percentile": 0.1, "value": 250}]
            }
        }"#;
        let benchmarks: HeroBenchmarks = serde_json::from_str(json).unwrap();
        assert_eq!(benchmarks.hero_id, 5);
        assert_eq!(benchmarks.result.gold_per_min[0].value, 250.0);
        assert!(benchmarks.result.tower_damage.is_empty());
    }
}
