//! Book recommendation service
//!
//! Scores catalog books against a reader's finished shelf and picks a
//! deduplicated list through genre, popularity and random tiers.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

pub use config::Config;
pub use error::{AppError, AppResult};
