use std::sync::Arc;

use crate::client::DataClient;

/// Shared application state available to all Axum handlers via `State<AppState>`.
#[derive(Clone)]
pub struct AppState {
    /// Client for the data service's `/data` endpoint.
    pub client: Arc<DataClient>,
}
