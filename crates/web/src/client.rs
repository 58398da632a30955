//! HTTP client for the data service.
//!
//! [`DataClient`] issues one GET per call against the configured `/data`
//! URL and sorts the outcome into transport failure, non-200 status or
//! undecodable body. No timeout and no retry are configured.

use moviehero_core::movie_hero::MovieHero;
use moviehero_core::response::DataResponse;
use reqwest::StatusCode;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for calls to the data service.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request or the body transfer failed (connection refused, DNS,
    /// invalid URL, reset, truncated body).
    #[error("HTTP request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The data service answered with something other than 200.
    #[error("Backend returned HTTP {0}")]
    Status(StatusCode),

    /// A 200 whose body is not a `{ "data": [...] }` envelope.
    #[error("Invalid backend response: {0}")]
    Decode(#[source] serde_json::Error),
}

// ---------------------------------------------------------------------------
// DataClient
// ---------------------------------------------------------------------------

/// Fetches movie/hero rows from the data service.
pub struct DataClient {
    client: reqwest::Client,
    url: String,
}

impl DataClient {
    /// Create a client for the given `/data` URL.
    pub fn new(url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// Fetch every row, in the order the data service sent them.
    pub async fn fetch_movie_heroes(&self) -> Result<Vec<MovieHero>, ClientError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(ClientError::Transport)?;

        // Only an exact 200 counts as success.
        let status = response.status();
        if status != StatusCode::OK {
            return Err(ClientError::Status(status));
        }

        // A body cut off mid-transfer is a transport failure, not bad JSON.
        let bytes = response.bytes().await.map_err(ClientError::Transport)?;
        let body: DataResponse<Vec<MovieHero>> =
            serde_json::from_slice(&bytes).map_err(ClientError::Decode)?;
        Ok(body.data)
    }
}
