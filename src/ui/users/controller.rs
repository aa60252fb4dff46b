//! Owner of the current fetch operation.

use std::sync::Arc;
use tokio::sync::mpsc;

use crate::fetch::{FetchKind, FetchOperation, FetchSettled, OperationId, UserService};

pub type SettledSender = mpsc::UnboundedSender<FetchSettled>;
pub type SettledReceiver = mpsc::UnboundedReceiver<FetchSettled>;

/// Starts fetches and remembers which one is current.
///
/// Each start spawns a task that sends a [`FetchSettled`] when the service
/// call returns. Starting a new operation leaves the previous task running;
/// its settlement still arrives but the reducer drops it.
///
/// Must be used from within a tokio runtime.
pub struct ScreenController {
    service: Arc<UserService>,
    settled_tx: SettledSender,
    next_id: u64,
    current: Option<FetchOperation>,
}

impl ScreenController {
    pub fn new(service: Arc<UserService>, settled_tx: SettledSender) -> Self {
        Self {
            service,
            settled_tx,
            next_id: 1,
            current: None,
        }
    }

    /// Convenience constructor that also returns the receiving side.
    pub fn with_channel(service: Arc<UserService>) -> (Self, SettledReceiver) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(service, tx), rx)
    }

    pub fn current(&self) -> Option<FetchOperation> {
        self.current
    }

    /// Starts the first fetch. Later calls return the current operation.
    pub fn initialize(&mut self) -> FetchOperation {
        match self.current {
            Some(operation) => operation,
            None => self.start(FetchKind::Normal),
        }
    }

    /// Replaces the current operation with a fresh normal fetch.
    pub fn reload(&mut self) -> FetchOperation {
        self.start(FetchKind::Normal)
    }

    /// Replaces the current operation with a fetch that always fails.
    pub fn simulate_error(&mut self) -> FetchOperation {
        self.start(FetchKind::Failing)
    }

    fn start(&mut self, kind: FetchKind) -> FetchOperation {
        let operation = FetchOperation::new(OperationId::new(self.next_id), kind);
        self.next_id += 1;

        if let Some(previous) = self.current.replace(operation) {
            tracing::debug!(
                previous = %previous.id(),
                current = %operation.id(),
                "Superseding fetch operation"
            );
        }
        tracing::info!(operation = %operation.id(), kind = ?kind, "Fetch started");

        let service = Arc::clone(&self.service);
        let tx = self.settled_tx.clone();
        tokio::spawn(async move {
            let outcome = service.fetch(kind).await;
            if tx.send(FetchSettled { operation, outcome }).is_err() {
                tracing::trace!(operation = %operation.id(), "Settlement dropped (receiver gone)");
            }
        });

        operation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::NeverFail;
    use std::time::Duration;

    fn controller() -> (ScreenController, SettledReceiver) {
        let service = UserService::new(Duration::from_secs(3), Duration::from_secs(2), NeverFail);
        ScreenController::with_channel(Arc::new(service))
    }

    #[tokio::test(start_paused = true)]
    async fn initialize_is_idempotent() {
        let (mut controller, _rx) = controller();
        let first = controller.initialize();
        let second = controller.initialize();
        assert_eq!(first, second);
        assert_eq!(controller.current(), Some(first));
    }

    #[tokio::test(start_paused = true)]
    async fn each_start_gets_a_new_id() {
        let (mut controller, _rx) = controller();
        let a = controller.initialize();
        let b = controller.reload();
        let c = controller.simulate_error();
        assert!(a.id() < b.id() && b.id() < c.id());
        assert_eq!(c.kind(), FetchKind::Failing);
        assert_eq!(controller.current(), Some(c));
    }

    #[tokio::test(start_paused = true)]
    async fn superseded_operation_still_settles() {
        let (mut controller, mut rx) = controller();
        let first = controller.initialize();
        let second = controller.simulate_error();

        // Failing path is shorter, so the newer operation arrives first.
        let settled = rx.recv().await.unwrap();
        assert_eq!(settled.operation, second);
        let settled = rx.recv().await.unwrap();
        assert_eq!(settled.operation, first);
        assert!(settled.outcome.is_ok());
    }
}
