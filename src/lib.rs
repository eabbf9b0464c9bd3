//! Dota Gateway - cached access to Dota 2 heroes, pro players and pro teams
//!
//! Combines the OpenDota read-only API with a local hero store, keeping
//! latency low through a shared TTL cache.

pub mod aggregate;
pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod services;
pub mod tasks;
pub mod upstream;

pub use api::AppState;
pub use config::Config;
pub use error::{GatewayError, Result};
pub use tasks::spawn_cleanup_task;
