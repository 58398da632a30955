//! Row model for the `movie_hero` table.

use moviehero_core::movie_hero::MovieHero;
use sqlx::FromRow;

/// A row from the `movie_hero` table.
///
/// Both columns are decoded as non-null text; a NULL cell fails the decode
/// and surfaces as a query error.
#[derive(Debug, Clone, FromRow)]
pub struct MovieHeroRow {
    pub movie: String,
    pub hero: String,
}

impl From<MovieHeroRow> for MovieHero {
    fn from(row: MovieHeroRow) -> Self {
        MovieHero {
            movie: row.movie,
            hero: row.hero,
        }
    }
}
