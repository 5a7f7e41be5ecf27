//! Model-View-Intent (MVI) primitives shared by the view-state layer.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Rendering surface
//!    ↑                                   │
//!    └───────────────────────────────────┘
//! ```
//!
//! - **State**: snapshot handed to whatever renders the catalog
//! - **Intent**: user actions and settled remote calls
//! - **Reducer**: pure function from (state, intent) to the next state

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
