use crate::config::UiConfig;
use crate::fetch::{FetchOperation, FetchSettled};
use crate::ui::mvi::Reducer;
use crate::ui::users::{
    present, OperationState, ScreenController, UsersIntent, UsersReducer, UsersScreenState,
    ViewDescriptor,
};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Top-level application state for the users screen.
///
/// Holds the controller (side effects) next to the reduced screen state
/// (pure). Every method that changes the state goes through the reducer.
pub struct App {
    should_quit: bool,
    users: UsersScreenState,
    controller: ScreenController,
    toast_ticks: u16,
    /// Advances on every tick; drives the loading spinner.
    frame_count: u64,
}

impl App {
    pub fn new(controller: ScreenController, ui: &UiConfig) -> Self {
        Self {
            should_quit: false,
            users: UsersScreenState::default(),
            controller,
            toast_ticks: ui.toast_ticks,
            frame_count: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn users(&self) -> &UsersScreenState {
        &self.users
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Current view, derived from state on every call.
    pub fn view(&self) -> ViewDescriptor {
        present(&self.users)
    }

    /// Starts the initial fetch. Call once before the first draw.
    pub fn start(&mut self) {
        let operation = self.controller.initialize();
        self.enter_pending(operation);
    }

    pub fn reload(&mut self) {
        let operation = self.controller.reload();
        self.enter_pending(operation);
    }

    pub fn simulate_error(&mut self) {
        let operation = self.controller.simulate_error();
        self.enter_pending(operation);
    }

    /// Enter on the failed view retries; on the list it acknowledges the row.
    pub fn activate(&mut self) {
        match self.users.operation {
            OperationState::Failed { .. } => self.reload(),
            OperationState::Succeeded { .. } => {
                let toast_ticks = self.toast_ticks;
                self.dispatch(UsersIntent::Activate { toast_ticks });
            }
            OperationState::NotStarted | OperationState::Pending { .. } => {}
        }
    }

    pub fn select_next(&mut self) {
        self.dispatch(UsersIntent::SelectNext);
    }

    pub fn select_previous(&mut self) {
        self.dispatch(UsersIntent::SelectPrevious);
    }

    pub fn on_settled(&mut self, settled: FetchSettled) {
        let current = self.controller.current();
        if current != Some(settled.operation) {
            tracing::debug!(
                operation = %settled.operation.id(),
                "Ignoring settlement of superseded operation"
            );
        }
        self.dispatch(settled.into());
    }

    pub fn on_tick(&mut self) {
        self.frame_count = self.frame_count.wrapping_add(1);
        self.dispatch(UsersIntent::Tick);
    }

    fn enter_pending(&mut self, operation: FetchOperation) {
        self.dispatch(UsersIntent::Started { operation });
    }

    fn dispatch(&mut self, intent: UsersIntent) {
        dispatch_mvi!(self, users, UsersReducer, intent);
    }
}
