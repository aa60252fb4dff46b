//! Base trait for UI state.

/// Marker trait for UI state objects.
///
/// States are cloned rather than edited, hold all data needed to render,
/// and compare with `PartialEq` so redraws can be skipped when nothing changed.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
