//! Repository for the `movie_hero` table.
//!
//! The table is populated and maintained outside this system; the only
//! operation here is the read-all query.

use moviehero_core::movie_hero::MovieHero;
use sqlx::PgPool;

use crate::models::movie_hero::MovieHeroRow;

/// No ORDER BY: rows come back in whatever order the store returns them.
const LIST_ALL_QUERY: &str = "SELECT movie, hero FROM movie_hero";

/// Read access to movie/hero pairs.
pub struct MovieHeroRepo;

impl MovieHeroRepo {
    /// Fetch every row of `movie_hero`.
    ///
    /// Runs the query exactly once. The pooled connection is released when
    /// the call returns, whether it succeeded or not.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<MovieHero>, sqlx::Error> {
        let rows = sqlx::query_as::<_, MovieHeroRow>(LIST_ALL_QUERY)
            .fetch_all(pool)
            .await?;
        tracing::debug!(count = rows.len(), "Fetched movie_hero rows");
        Ok(rows.into_iter().map(MovieHero::from).collect())
    }
}
