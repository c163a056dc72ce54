pub mod pool;

pub use pool::create_pool;

use sqlx::SqlitePool;
use std::path::Path;

use crate::error::Result;
use crate::services::catalog;

/// Database handle type (a pool is cheap to clone and shared across handlers)
pub type Db = SqlitePool;

/// Apply the embedded schema migrations
pub async fn run_migrations(pool: &Db) -> Result<()> {
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("Migrations complete");
    Ok(())
}

/// Open the database, bring the schema up to date and seed the challenge catalog
///
/// Safe to call on every start: migrations are tracked and seeding is insert-if-absent.
pub async fn open_database(path: impl AsRef<Path>, max_connections: u32) -> Result<Db> {
    let pool = create_pool(path, max_connections).await?;
    run_migrations(&pool).await?;
    let inserted = catalog::seed_defaults(&pool).await?;
    tracing::info!("Database initialized ({} new challenge definitions)", inserted);
    Ok(pool)
}

/// Lightweight connectivity probe used by the health endpoint
pub async fn ping(pool: &Db) -> Result<()> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Fresh, fully initialized database in a temporary directory
///
/// The `TempDir` must outlive the pool.
#[cfg(test)]
pub(crate) async fn test_db() -> (Db, tempfile::TempDir) {
    let tmp = tempfile::TempDir::new().unwrap();
    let db = open_database(tmp.path().join("test.db"), 4).await.unwrap();
    (db, tmp)
}
