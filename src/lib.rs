//! TeachHub Server Library
//!
//! Daily challenge tracking (completion logs, reflections, streaks) and a
//! small discussion board, backed by SQLite and served over a JSON API.

pub mod config;
pub mod constants;
pub mod dates;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

pub use config::Config;
pub use db::{open_database, Db};
pub use error::{AppError, Result};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub db: Db,
    pub config: Config,
}

impl AppState {
    /// Create a new AppState with the given database and configuration
    pub fn new(db: Db, config: Config) -> Self {
        Self { db, config }
    }
}
