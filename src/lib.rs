//! Client-side synchronization layer for a playlist catalog.
//!
//! [`remote`] talks to the playlist service; [`catalog`] owns the view
//! state a rendering surface draws from.

pub mod catalog;
pub mod config;
pub mod logging;
pub mod mvi;
pub mod remote;
