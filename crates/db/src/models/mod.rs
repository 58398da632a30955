pub mod movie_hero;
