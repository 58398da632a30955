mod movie_hero_repo;

pub use movie_hero_repo::MovieHeroRepo;
