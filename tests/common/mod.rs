//! Shared test utilities and test doubles.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use async_trait::async_trait;
use parking_lot::Mutex;
use playlist_sync::catalog::{AcknowledgmentPolicy, CatalogState, Coordinator};
use playlist_sync::remote::{LikeResult, Playlist, PlaylistApi, PlaylistId, RemoteError};
use std::collections::VecDeque;
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

pub fn playlist(id: &str, name: &str, owner: &str, like_count: u64) -> Playlist {
    Playlist {
        id: PlaylistId::from(id),
        name: name.to_string(),
        owner: owner.to_string(),
        like_count,
    }
}

pub fn summer_vibes() -> Playlist {
    playlist("1", "Summer Vibes 2024", "alice", 10)
}

pub fn like_result(id: &str, like_count: u64) -> LikeResult {
    LikeResult {
        playlist_id: PlaylistId::from(id),
        like_count,
    }
}

pub fn fetch_error(reason: &str) -> RemoteError {
    RemoteError::Fetch {
        reason: reason.to_string(),
    }
}

pub fn like_error(reason: &str) -> RemoteError {
    RemoteError::Like {
        reason: reason.to_string(),
    }
}

// -- Scripted API -------------------------------------------------------------

enum Reply<T> {
    Now(Result<T, RemoteError>),
    Gated(oneshot::Receiver<Result<T, RemoteError>>),
}

impl<T> Reply<T> {
    async fn resolve(self) -> Result<T, RemoteError> {
        match self {
            Reply::Now(result) => result,
            Reply::Gated(rx) => rx.await.expect("gate dropped before release"),
        }
    }
}

/// In-memory `PlaylistApi` answering calls from a script.
///
/// Replies are consumed in call order. A gated reply settles only when the
/// test sends into the returned sender.
#[derive(Default)]
pub struct ScriptedApi {
    fetches: Mutex<VecDeque<Reply<Vec<Playlist>>>>,
    likes: Mutex<VecDeque<Reply<LikeResult>>>,
    liked: Mutex<Vec<PlaylistId>>,
    fetch_calls: AtomicUsize,
}

impl ScriptedApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_fetch(&self, result: Result<Vec<Playlist>, RemoteError>) {
        self.fetches.lock().push_back(Reply::Now(result));
    }

    pub fn gate_fetch(&self) -> oneshot::Sender<Result<Vec<Playlist>, RemoteError>> {
        let (tx, rx) = oneshot::channel();
        self.fetches.lock().push_back(Reply::Gated(rx));
        tx
    }

    pub fn push_like(&self, result: Result<LikeResult, RemoteError>) {
        self.likes.lock().push_back(Reply::Now(result));
    }

    pub fn gate_like(&self) -> oneshot::Sender<Result<LikeResult, RemoteError>> {
        let (tx, rx) = oneshot::channel();
        self.likes.lock().push_back(Reply::Gated(rx));
        tx
    }

    pub fn liked_ids(&self) -> Vec<PlaylistId> {
        self.liked.lock().clone()
    }

    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PlaylistApi for ScriptedApi {
    async fn fetch_collections(&self) -> Result<Vec<Playlist>, RemoteError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        let reply = self.fetches.lock().pop_front().expect("unscripted fetch");
        reply.resolve().await
    }

    async fn like_collection(&self, id: &PlaylistId) -> Result<LikeResult, RemoteError> {
        self.liked.lock().push(id.clone());
        let reply = self.likes.lock().pop_front().expect("unscripted like");
        reply.resolve().await
    }
}

// -- Coordinator helpers ------------------------------------------------------

pub fn coordinator(api: Arc<ScriptedApi>) -> Coordinator {
    Coordinator::new(api, AcknowledgmentPolicy::default())
}

/// Wait until the coordinator's state satisfies `pred`.
pub async fn wait_until(
    coordinator: &Coordinator,
    pred: impl FnMut(&CatalogState) -> bool,
) -> CatalogState {
    let mut updates = coordinator.subscribe();
    let state = tokio::time::timeout(Duration::from_secs(10), updates.wait_for(pred))
        .await
        .expect("timed out waiting for state")
        .expect("coordinator dropped");
    state.clone()
}

/// Yield until the scripted API has seen `count` fetches.
pub async fn wait_for_fetch_calls(api: &ScriptedApi, count: usize) {
    while api.fetch_calls() < count {
        tokio::task::yield_now().await;
    }
}
