//! Field invariants for locally supplied heroes.

use crate::error::{GatewayError, Result};
use crate::models::Hero;

pub const MAX_NAME_LENGTH: usize = 32;

/// Largest leg count of any hero model
pub const MAX_LEGS: u32 = 8;

pub const PRIMARY_ATTRIBUTES: [&str; 3] = ["str", "agi", "int"];

pub const ATTACK_TYPES: [&str; 2] = ["Melee", "Ranged"];

pub const ROLES: [&str; 9] = [
    "Carry", "Support", "Nuker", "Disabler", "Jungler", "Durable", "Escape", "Pusher",
    "Initiator",
];

fn one_of(value: &str, allowed: &[&str]) -> bool {
    allowed.iter().any(|a| a.eq_ignore_ascii_case(value.trim()))
}

fn invalid(msg: String) -> GatewayError {
    GatewayError::Validation(msg)
}

/// Checks every field invariant of a hero before it reaches the store.
pub fn validate_hero(hero: &Hero) -> Result<()> {
    let name = hero.name.trim();
    if name.is_empty() {
        return Err(invalid("name must not be blank".to_string()));
    }
    if hero.name.chars().count() > MAX_NAME_LENGTH {
        return Err(invalid(format!(
            "name must be at most {MAX_NAME_LENGTH} characters"
        )));
    }
    if !one_of(&hero.primary_attr, &PRIMARY_ATTRIBUTES) {
        return Err(invalid(format!(
            "primary_attr must be one of {PRIMARY_ATTRIBUTES:?}, got '{}'",
            hero.primary_attr
        )));
    }
    if !one_of(&hero.attack_type, &ATTACK_TYPES) {
        return Err(invalid(format!(
            "attack_type must be one of {ATTACK_TYPES:?}, got '{}'",
            hero.attack_type
        )));
    }
    if hero.roles.is_empty() {
        return Err(invalid("at least one role is required".to_string()));
    }
    if let Some(role) = hero.roles.iter().find(|r| !one_of(r, &ROLES)) {
        return Err(invalid(format!("unknown role '{role}'")));
    }
    if hero.legs == 0 || hero.legs > MAX_LEGS {
        return Err(invalid(format!(
            "legs must be between 1 and {MAX_LEGS}, got {}",
            hero.legs
        )));
    }
    Ok(())
}
