//! View-state coordinator.
//!
//! Owns the catalog state, runs `load` and `like` against a
//! [`PlaylistApi`], and publishes a fresh snapshot after every transition.
//!
//! Every transition goes through one lock and one reducer call, so
//! completions apply in the order they settle: the last fetch to finish
//! owns the collection, and a newer acknowledgment always outlives the
//! timer of the one it replaced.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::config::AcknowledgmentConfig;
use crate::mvi::Reducer;
use crate::remote::{LikeResult, Playlist, PlaylistApi, PlaylistId, RemoteError};

use super::intent::CatalogIntent;
use super::reducer::CatalogReducer;
use super::state::{Acknowledgment, CatalogState};

/// Message and lifetime of the acknowledgment shown after a like.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcknowledgmentPolicy {
    pub message: String,
    pub lifetime: Duration,
}

impl Default for AcknowledgmentPolicy {
    fn default() -> Self {
        Self::from(&AcknowledgmentConfig::default())
    }
}

impl From<&AcknowledgmentConfig> for AcknowledgmentPolicy {
    fn from(config: &AcknowledgmentConfig) -> Self {
        Self {
            message: config.message.clone(),
            lifetime: config.lifetime(),
        }
    }
}

/// Handle to the catalog view state.
///
/// Clones share the same state. `load` and `like` return immediately;
/// observe their effects through [`Coordinator::state`] or
/// [`Coordinator::subscribe`].
#[derive(Clone)]
pub struct Coordinator {
    inner: Arc<Inner>,
}

struct Inner {
    api: Arc<dyn PlaylistApi>,
    policy: AcknowledgmentPolicy,
    runtime: Handle,
    core: Mutex<Core>,
    publisher: watch::Sender<CatalogState>,
}

#[derive(Default)]
struct Core {
    state: CatalogState,
    ack_timer: Option<JoinHandle<()>>,
    last_generation: u64,
}

impl Coordinator {
    /// Create a coordinator that spawns its work on the current runtime.
    ///
    /// # Panics
    /// Panics when called outside a Tokio runtime.
    pub fn new(api: Arc<dyn PlaylistApi>, policy: AcknowledgmentPolicy) -> Self {
        Self::with_runtime(api, policy, Handle::current())
    }

    /// Create a coordinator bound to an explicit runtime, so `load` and
    /// `like` can be called from threads outside it.
    pub fn with_runtime(
        api: Arc<dyn PlaylistApi>,
        policy: AcknowledgmentPolicy,
        runtime: Handle,
    ) -> Self {
        let (publisher, _) = watch::channel(CatalogState::default());
        Self {
            inner: Arc::new(Inner {
                api,
                policy,
                runtime,
                core: Mutex::new(Core::default()),
                publisher,
            }),
        }
    }

    /// Current snapshot.
    pub fn state(&self) -> CatalogState {
        self.inner.publisher.borrow().clone()
    }

    /// Receiver notified after every state transition.
    pub fn subscribe(&self) -> watch::Receiver<CatalogState> {
        self.inner.publisher.subscribe()
    }

    /// Fetch the collection and replace the view with it.
    ///
    /// The state reports loading before this returns. Overlapping calls
    /// are not rejected.
    pub fn load(&self) {
        self.inner.dispatch(CatalogIntent::LoadStarted);

        let inner = Arc::clone(&self.inner);
        self.inner.runtime.spawn(async move {
            let result = inner.api.fetch_collections().await;
            inner.fetch_settled(result);
        });
    }

    /// Register a like for `id`.
    ///
    /// The displayed `like_count` is left as fetched; only the next `load`
    /// refreshes it.
    pub fn like(&self, id: impl Into<PlaylistId>) {
        let id = id.into();
        let inner = Arc::clone(&self.inner);
        self.inner.runtime.spawn(async move {
            let result = inner.api.like_collection(&id).await;
            inner.like_settled(&id, result);
        });
    }
}

impl Inner {
    fn dispatch(&self, intent: CatalogIntent) {
        let mut core = self.core.lock();
        self.apply(&mut core, intent);
    }

    fn apply(&self, core: &mut Core, intent: CatalogIntent) {
        core.state = CatalogReducer::reduce(std::mem::take(&mut core.state), intent);
        self.publisher.send_replace(core.state.clone());
    }

    fn fetch_settled(&self, result: Result<Vec<Playlist>, RemoteError>) {
        match result {
            Ok(items) => {
                tracing::info!(items = items.len(), "Playlists loaded");
                self.dispatch(CatalogIntent::LoadSucceeded { items });
            }
            Err(err) => {
                tracing::warn!(error = %err, kind = err.kind(), "Playlist fetch failed");
                self.dispatch(CatalogIntent::LoadFailed {
                    message: err.message(),
                });
            }
        }
    }

    fn like_settled(self: &Arc<Self>, id: &PlaylistId, result: Result<LikeResult, RemoteError>) {
        match result {
            Ok(LikeResult {
                playlist_id,
                like_count,
            }) => {
                tracing::info!(%playlist_id, like_count, "Like recorded");
                self.acknowledge();
            }
            Err(err) => {
                tracing::warn!(playlist_id = %id, error = %err, kind = err.kind(), "Like failed");
                self.dispatch(CatalogIntent::LikeFailed {
                    message: err.message(),
                });
            }
        }
    }

    /// Show a fresh acknowledgment and restart its expiry timer.
    fn acknowledge(self: &Arc<Self>) {
        let mut core = self.core.lock();

        if let Some(timer) = core.ack_timer.take() {
            timer.abort();
        }

        core.last_generation += 1;
        let generation = core.last_generation;
        let acknowledgment = Acknowledgment {
            message: self.policy.message.clone(),
            generation,
        };
        self.apply(&mut core, CatalogIntent::LikeSucceeded { acknowledgment });

        let inner = Arc::clone(self);
        let lifetime = self.policy.lifetime;
        core.ack_timer = Some(self.runtime.spawn(async move {
            tokio::time::sleep(lifetime).await;
            inner.dispatch(CatalogIntent::AcknowledgmentExpired { generation });
        }));
    }
}
