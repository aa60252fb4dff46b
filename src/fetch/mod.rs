//! Simulated user fetch.
//!
//! - `operation.rs` - Fetch attempt identity (`FetchOperation`)
//! - `failure.rs` - Injectable failure decision for the normal path
//! - `service.rs` - The async calls themselves

mod failure;
mod operation;
mod service;

pub use failure::{AlwaysFail, FailureSource, NeverFail, RandomFailure};
pub use operation::{FetchKind, FetchOperation, OperationId};
pub use service::UserService;

use crate::error::FetchError;
use crate::model::User;

/// Outcome of an operation, delivered to the screen over a channel.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchSettled {
    pub operation: FetchOperation,
    pub outcome: Result<Vec<User>, FetchError>,
}
