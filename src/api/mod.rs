//! API Module
//!
//! Thin axum adapter exposing the hero, player and team facades over HTTP.

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
