use serde::{Deserialize, Serialize};

/// One `(movie, hero)` pair as stored in the `movie_hero` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieHero {
    pub movie: String,
    pub hero: String,
}

impl MovieHero {
    pub fn new(movie: impl Into<String>, hero: impl Into<String>) -> Self {
        Self {
            movie: movie.into(),
            hero: hero.into(),
        }
    }
}
