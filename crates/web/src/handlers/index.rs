use axum::extract::State;
use axum::response::Html;

use crate::error::WebError;
use crate::render::render_movie_table;
use crate::state::AppState;

/// GET / -- fetch the rows from the data service and render them.
///
/// The page is only produced after the backend call resolves.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, WebError> {
    let rows = state.client.fetch_movie_heroes().await?;
    tracing::debug!(count = rows.len(), "Rendering movie table");
    Ok(Html(render_movie_table(&rows)))
}
