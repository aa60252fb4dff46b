//! Presentation switch: screen state to view descriptor.
//!
//! Kept free of ratatui types so the mapping can be compared directly;
//! `ui::render` turns a descriptor into widgets.

use super::state::{OperationState, UsersScreenState};
use crate::model::User;

pub const NO_DATA_TEXT: &str = "No data";
pub const LOADING_LABEL: &str = "Loading users...";
pub const ERROR_ICON: &str = "✖";
pub const RETRY_LABEL: &str = "Retry";
pub const EMPTY_TEXT: &str = "No users found";

/// Everything the body of the screen shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewDescriptor {
    Placeholder {
        text: &'static str,
    },
    Loading {
        label: &'static str,
    },
    Failed {
        icon: &'static str,
        message: String,
        retry_label: &'static str,
    },
    Empty {
        text: &'static str,
    },
    Users {
        header: String,
        rows: Vec<UserRow>,
        toast: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    pub avatar: char,
    pub name: String,
    pub email: String,
    pub role: String,
    pub selected: bool,
}

impl UserRow {
    fn from_user(user: &User, selected: bool) -> Self {
        Self {
            avatar: user.initial(),
            name: user.name().to_string(),
            email: user.email().to_string(),
            role: user.role().to_string(),
            selected,
        }
    }
}

impl ViewDescriptor {
    /// True when the view offers the retry action.
    pub fn has_retry(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Maps the current screen state to what should be drawn.
///
/// Pending is checked before any settled state, and failure before success.
pub fn present(state: &UsersScreenState) -> ViewDescriptor {
    match &state.operation {
        OperationState::NotStarted => ViewDescriptor::Placeholder { text: NO_DATA_TEXT },
        OperationState::Pending { .. } => ViewDescriptor::Loading {
            label: LOADING_LABEL,
        },
        OperationState::Failed { error, .. } => ViewDescriptor::Failed {
            icon: ERROR_ICON,
            message: error.message().to_string(),
            retry_label: RETRY_LABEL,
        },
        OperationState::Succeeded { users, .. } if users.is_empty() => {
            ViewDescriptor::Empty { text: EMPTY_TEXT }
        }
        OperationState::Succeeded { users, .. } => ViewDescriptor::Users {
            header: count_header(users.len()),
            rows: users
                .iter()
                .enumerate()
                .map(|(idx, user)| UserRow::from_user(user, idx == state.selected))
                .collect(),
            toast: state.toast.as_ref().map(|toast| toast.message.clone()),
        },
    }
}

pub fn count_header(count: usize) -> String {
    format!("{} users loaded", count)
}
