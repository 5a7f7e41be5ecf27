//! Reducer for the catalog view state.

use crate::mvi::Reducer;

use super::intent::CatalogIntent;
use super::state::CatalogState;

/// Pure state transitions for the load and like machines.
///
/// Timers and remote calls are run by the coordinator around the dispatch.
pub struct CatalogReducer;

impl Reducer for CatalogReducer {
    type State = CatalogState;
    type Intent = CatalogIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CatalogIntent::LoadStarted => CatalogState {
                status: state.status.started(),
                error: None,
                ..state
            },

            // Wholesale replacement, never a merge. The error was cleared
            // when the load started; anything set since then stays.
            CatalogIntent::LoadSucceeded { items } => CatalogState {
                items,
                status: state.status.settled(),
                ..state
            },

            CatalogIntent::LoadFailed { message } => CatalogState {
                status: state.status.settled(),
                error: Some(message),
                ..state
            },

            // A pre-existing error is left in place.
            CatalogIntent::LikeSucceeded { acknowledgment } => CatalogState {
                acknowledgment: Some(acknowledgment),
                ..state
            },

            CatalogIntent::LikeFailed { message } => CatalogState {
                error: Some(message),
                ..state
            },

            CatalogIntent::AcknowledgmentExpired { generation } => {
                let current = state
                    .acknowledgment
                    .as_ref()
                    .is_some_and(|ack| ack.generation == generation);
                if current {
                    CatalogState {
                        acknowledgment: None,
                        ..state
                    }
                } else {
                    state
                }
            }
        }
    }
}
