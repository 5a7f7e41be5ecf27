use crate::mvi::Intent;
use crate::remote::Playlist;

use super::state::Acknowledgment;

/// Everything that can change the catalog state.
#[derive(Debug)]
pub enum CatalogIntent {
    /// `load()` was invoked.
    LoadStarted,
    /// A fetch settled with the full collection.
    LoadSucceeded { items: Vec<Playlist> },
    /// A fetch settled with an error.
    LoadFailed { message: String },
    /// A like was recorded. The returned count is deliberately not carried.
    LikeSucceeded { acknowledgment: Acknowledgment },
    LikeFailed { message: String },
    /// The acknowledgment timer for `generation` fired.
    AcknowledgmentExpired { generation: u64 },
}

impl Intent for CatalogIntent {}
