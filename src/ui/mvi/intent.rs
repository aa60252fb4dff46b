//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents are either user actions (key presses) or system events
/// (timer ticks, fetch settlements). Reducers turn them into new states.
pub trait Intent: Send + 'static {}
