//! Base trait for observable state.

/// Marker trait for state snapshots.
///
/// `Default` is the state at process start, `Clone` lets the owner publish
/// snapshots, `PartialEq` lets observers skip redraws.
pub trait UiState: Clone + PartialEq + Default + Send + Sync + 'static {}
