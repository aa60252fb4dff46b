//! State for the users screen.

use crate::error::FetchError;
use crate::fetch::FetchOperation;
use crate::model::User;
use crate::ui::mvi::UiState;

/// Lifecycle of the operation the screen is observing.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum OperationState {
    /// No operation has been started yet.
    #[default]
    NotStarted,

    /// Operation started, outcome not yet received.
    Pending { operation: FetchOperation },

    /// Operation settled with an error.
    Failed {
        operation: FetchOperation,
        error: FetchError,
    },

    /// Operation settled with a (possibly empty) list of users.
    Succeeded {
        operation: FetchOperation,
        users: Vec<User>,
    },
}

impl OperationState {
    /// The operation this state belongs to, if any.
    pub fn operation(&self) -> Option<FetchOperation> {
        match self {
            Self::NotStarted => None,
            Self::Pending { operation }
            | Self::Failed { operation, .. }
            | Self::Succeeded { operation, .. } => Some(*operation),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }

    /// Users of a successful fetch; empty in every other state.
    pub fn users(&self) -> &[User] {
        match self {
            Self::Succeeded { users, .. } => users.as_slice(),
            _ => &[],
        }
    }

    /// Short name used in the header.
    pub fn label(&self) -> &'static str {
        match self {
            Self::NotStarted => "idle",
            Self::Pending { .. } => "loading",
            Self::Failed { .. } => "failed",
            Self::Succeeded { .. } => "done",
        }
    }
}

/// Transient acknowledgement shown after activating a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub remaining_ticks: u16,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UsersScreenState {
    pub operation: OperationState,
    /// Index of the highlighted row. Only meaningful when users are shown.
    pub selected: usize,
    pub toast: Option<Toast>,
}

impl UiState for UsersScreenState {}

impl UsersScreenState {
    pub fn selected_user(&self) -> Option<&User> {
        self.operation.users().get(self.selected)
    }
}
