//! Reducer for the users screen.

use crate::ui::mvi::Reducer;

use super::intent::UsersIntent;
use super::state::{OperationState, Toast, UsersScreenState};

/// Pure state transitions for the users screen.
///
/// Spawning fetches is the controller's job; the reducer only records which
/// operation is current and drops settlements from superseded ones.
pub struct UsersReducer;

impl Reducer for UsersReducer {
    type State = UsersScreenState;
    type Intent = UsersIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            UsersIntent::Started { operation } => UsersScreenState {
                operation: OperationState::Pending { operation },
                selected: 0,
                toast: None,
            },

            UsersIntent::Settled { operation, outcome } => match state.operation {
                OperationState::Pending { operation: current } if current == operation => {
                    let operation = match outcome {
                        Ok(users) => OperationState::Succeeded { operation, users },
                        Err(error) => OperationState::Failed { operation, error },
                    };
                    UsersScreenState {
                        operation,
                        selected: 0,
                        toast: state.toast,
                    }
                }
                // Superseded or already settled: nobody observes this outcome.
                other => UsersScreenState {
                    operation: other,
                    ..state
                },
            },

            UsersIntent::SelectNext => {
                let len = state.operation.users().len();
                if len == 0 {
                    return state;
                }
                let selected = if state.selected + 1 >= len {
                    0
                } else {
                    state.selected + 1
                };
                UsersScreenState { selected, ..state }
            }

            UsersIntent::SelectPrevious => {
                let len = state.operation.users().len();
                if len == 0 {
                    return state;
                }
                let selected = if state.selected == 0 {
                    len - 1
                } else {
                    state.selected - 1
                };
                UsersScreenState { selected, ..state }
            }

            UsersIntent::Activate { toast_ticks } => {
                let Some(user) = state.selected_user() else {
                    return state;
                };
                let toast = Toast {
                    message: format!("Selected: {}", user.name()),
                    remaining_ticks: toast_ticks,
                };
                UsersScreenState {
                    toast: Some(toast),
                    ..state
                }
            }

            UsersIntent::Tick => {
                let toast = state.toast.and_then(|toast| {
                    let remaining_ticks = toast.remaining_ticks.saturating_sub(1);
                    (remaining_ticks > 0).then_some(Toast {
                        message: toast.message,
                        remaining_ticks,
                    })
                });
                UsersScreenState { toast, ..state }
            }
        }
    }
}
