//! Users screen feature module.
//!
//! Shows the outcome of the current user fetch and lets the user reload
//! or force an error.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Operation lifecycle (NotStarted → Pending → Failed | Succeeded)
//! - `intent.rs` - Fetch lifecycle events and row interaction
//! - `reducer.rs` - State transitions (pure, drops stale settlements)
//! - `view.rs` - Presentation switch from state to `ViewDescriptor`
//! - `controller.rs` - Owns the current operation and spawns fetches

mod controller;
mod intent;
mod reducer;
mod state;
mod view;

pub use controller::{ScreenController, SettledReceiver, SettledSender};
pub use intent::UsersIntent;
pub use reducer::UsersReducer;
pub use state::{OperationState, Toast, UsersScreenState};
pub use view::{count_header, present, UserRow, ViewDescriptor};
