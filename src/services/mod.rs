//! Services Module
//!
//! Cache-aside facades over the upstream API, one per resource kind.

mod allow_list;
mod hero;
mod player;
mod team;
mod validation;

pub use allow_list::HeroIdAllowList;
pub use hero::HeroService;
pub use player::PlayerService;
pub use team::TeamService;
pub use validation::{
    validate_hero, ATTACK_TYPES, MAX_LEGS, MAX_NAME_LENGTH, PRIMARY_ATTRIBUTES, ROLES,
};
