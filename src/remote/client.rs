use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;

use super::error::{Operation, RemoteError};
use super::timeout::TimeoutConfig;
use super::types::{HealthStatus, LikeResult, Playlist, PlaylistId};
use super::PlaylistApi;

/// HTTP client for the playlist service.
///
/// Stateless apart from the connection pool: every call is a single
/// request/response and nothing is retried.
#[derive(Debug, Clone)]
pub struct RemoteClient {
    client: Client,
    base_url: String,
}

impl RemoteClient {
    /// Build a client for `base_url`.
    ///
    /// A trailing slash on the base is ignored. An empty base produces
    /// origin-relative paths, which only resolve when something upstream
    /// supplies the origin. Likes need an absolute base to encode the id
    /// into.
    pub fn new(base_url: impl Into<String>, timeouts: TimeoutConfig) -> reqwest::Result<Self> {
        let client = Client::builder()
            .connect_timeout(timeouts.connect)
            .timeout(timeouts.request)
            .build()?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Probe `GET /health`.
    pub async fn health(&self) -> Result<bool, RemoteError> {
        let request = self.client.get(self.endpoint("/health"));
        let status: HealthStatus = send_json(request, Operation::Health).await?;
        Ok(status.ok)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl PlaylistApi for RemoteClient {
    async fn fetch_collections(&self) -> Result<Vec<Playlist>, RemoteError> {
        let request = self.client.get(self.endpoint("/api/playlists"));
        send_json(request, Operation::Fetch).await
    }

    async fn like_collection(&self, id: &PlaylistId) -> Result<LikeResult, RemoteError> {
        // The id is opaque; it goes in as one percent-encoded segment.
        let mut url = Url::parse(&self.endpoint("/api/playlists"))
            .map_err(|e| Operation::Like.error(format!("invalid base URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| Operation::Like.error("base URL cannot carry a path"))?
            .push(id.as_str())
            .push("like");

        let request = self.client.post(url);
        send_json(request, Operation::Like).await
    }
}

/// Send `request` and decode a JSON body, mapping every failure onto
/// `operation`'s error variant.
async fn send_json<T: DeserializeOwned>(
    request: RequestBuilder,
    operation: Operation,
) -> Result<T, RemoteError> {
    let response = request.send().await.map_err(|e| {
        tracing::debug!(error = %e, ?operation, "Transport failure");
        operation.error(e.to_string())
    })?;

    let status = response.status();
    if !status.is_success() {
        tracing::debug!(status = status.as_u16(), ?operation, "Non-success response");
        return Err(operation.status(status));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| operation.error(format!("invalid response body: {}", e)))
}
