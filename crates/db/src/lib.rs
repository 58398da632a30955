pub mod models;
pub mod repositories;

use sqlx::postgres::PgPoolOptions;

pub type DbPool = sqlx::PgPool;

/// Upper bound on pooled connections. Not configurable.
const MAX_CONNECTIONS: u32 = 10;

/// Create a connection pool from a database URL.
///
/// The pool connects lazily: no connection is opened until the first query,
/// so a store that is down at startup shows up as a failed request rather
/// than a failed boot. Only a malformed URL is rejected here.
pub fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect_lazy(database_url)
}

/// Check that the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
