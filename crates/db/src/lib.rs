//! EventSphere persistence layer.
//!
//! Pool construction, embedded migrations, row models (`models/`), and
//! stateless repository structs (`repositories/`). All queries run against
//! PostgreSQL via sqlx; the workflow-critical ones (application approval,
//! registration, roster append) use atomic conditional statements, row
//! locks, and transactions so check-then-write races cannot violate the
//! domain invariants.

pub mod models;
pub mod repositories;

use sqlx::postgres::PgPoolOptions;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
///
/// Connection establishment is bounded so a missing database fails startup
/// quickly instead of hanging.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .acquire_timeout(std::time::Duration::from_secs(5))
        .connect(database_url)
        .await
}

/// Verify the database is reachable with a trivial round trip.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply any pending migrations from `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("Database migrations are up to date");
    Ok(())
}
