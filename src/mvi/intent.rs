//! Base trait for intents.

/// Marker trait for intent objects.
///
/// An intent is either something the user asked for (load, like) or the
/// outcome of work started earlier (a fetch settling, a timer firing).
pub trait Intent: Send + 'static {}
