//! Types shared by the data service and the presentation service.

pub mod movie_hero;
pub mod response;
