//! Intents for the users screen.

use crate::error::FetchError;
use crate::fetch::{FetchOperation, FetchSettled};
use crate::model::User;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum UsersIntent {
    /// A new operation became current. Enters the pending state.
    Started { operation: FetchOperation },

    /// An operation produced its outcome.
    /// Ignored unless `operation` is the one currently pending.
    Settled {
        operation: FetchOperation,
        outcome: Result<Vec<User>, FetchError>,
    },

    SelectNext,
    SelectPrevious,

    /// User activated the highlighted row.
    Activate { toast_ticks: u16 },

    /// Timer tick; ages the toast.
    Tick,
}

impl Intent for UsersIntent {}

impl From<FetchSettled> for UsersIntent {
    fn from(settled: FetchSettled) -> Self {
        UsersIntent::Settled {
            operation: settled.operation,
            outcome: settled.outcome,
        }
    }
}
