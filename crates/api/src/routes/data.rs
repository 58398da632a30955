use axum::routing::get;
use axum::Router;

use crate::handlers::data;
use crate::state::AppState;

/// Mount the read endpoint.
///
/// ```text
/// GET /data -> list_movie_heroes
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/data", get(data::list_movie_heroes))
}
