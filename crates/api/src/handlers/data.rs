use axum::extract::State;
use axum::Json;
use moviehero_core::movie_hero::MovieHero;
use moviehero_core::response::DataResponse;
use moviehero_db::repositories::MovieHeroRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /data -- every movie/hero pair, in store order.
///
/// One query attempt per request; a failure becomes a 500 with the
/// underlying error message.
pub async fn list_movie_heroes(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<MovieHero>>>> {
    let data = MovieHeroRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data }))
}
