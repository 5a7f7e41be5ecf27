//! Catalog view state: the collection, the load status, the last error
//! and the like acknowledgment.
//!
//! # Architecture
//!
//! Uses the MVI pattern:
//! - `state.rs` - snapshot handed to the rendering surface
//! - `intent.rs` - user actions and settled remote calls
//! - `reducer.rs` - state transitions (pure, no side effects)
//! - `coordinator.rs` - owns the state, runs remote calls and timers

mod coordinator;
mod intent;
mod reducer;
mod state;

pub use coordinator::{AcknowledgmentPolicy, Coordinator};
pub use intent::CatalogIntent;
pub use reducer::CatalogReducer;
pub use state::{Acknowledgment, CatalogState, OperationStatus, ViewPhase};
