//! Model-View-Intent (MVI) primitives.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Immutable snapshot of everything a screen renders
//! - **Intent**: Key presses, ticks and fetch settlements
//! - **Reducer**: Pure function that produces the next state

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
