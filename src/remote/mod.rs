//! Remote access layer.
//!
//! Two operations against the playlist service, `fetch_collections` and
//! `like_collection`, behind the [`PlaylistApi`] seam so the view-state
//! coordinator can run against the real HTTP client or a test double.

mod client;
mod error;
mod timeout;
mod types;

use async_trait::async_trait;

pub use client::RemoteClient;
pub use error::RemoteError;
pub use timeout::TimeoutConfig;
pub use types::{LikeResult, Playlist, PlaylistId};

/// Operations the coordinator needs from the playlist service.
#[async_trait]
pub trait PlaylistApi: Send + Sync {
    /// List every playlist, in the order the service returns them.
    async fn fetch_collections(&self) -> Result<Vec<Playlist>, RemoteError>;

    /// Increment the like counter of `id`.
    ///
    /// Not idempotent: every successful call adds one like on the server.
    /// The id is passed through unchecked.
    async fn like_collection(&self, id: &PlaylistId) -> Result<LikeResult, RemoteError>;
}
