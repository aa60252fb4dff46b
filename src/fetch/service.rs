use parking_lot::Mutex;
use std::time::Duration;

use crate::config::FetchConfig;
use crate::error::FetchError;
use crate::fetch::failure::{FailureSource, RandomFailure};
use crate::fetch::operation::FetchKind;
use crate::model::{sample_users, User};

/// Simulated user backend.
///
/// Both calls only suspend on a timer; nothing leaves the process.
pub struct UserService {
    delay: Duration,
    failing_delay: Duration,
    failure: Mutex<Box<dyn FailureSource>>,
}

impl UserService {
    pub fn new(
        delay: Duration,
        failing_delay: Duration,
        failure: impl FailureSource + 'static,
    ) -> Self {
        Self {
            delay,
            failing_delay,
            failure: Mutex::new(Box::new(failure)),
        }
    }

    pub fn from_config(config: &FetchConfig) -> Self {
        Self::new(
            config.delay(),
            config.failing_delay(),
            RandomFailure::from_config(config),
        )
    }

    pub async fn fetch(&self, kind: FetchKind) -> Result<Vec<User>, FetchError> {
        match kind {
            FetchKind::Normal => self.fetch_users().await,
            FetchKind::Failing => self.fetch_users_failing().await,
        }
    }

    /// Waits for the configured delay, then returns the sample users or a
    /// connection error if the failure source says so.
    pub async fn fetch_users(&self) -> Result<Vec<User>, FetchError> {
        tokio::time::sleep(self.delay).await;

        let failed = self.failure.lock().should_fail();
        if failed {
            let err = FetchError::connection();
            tracing::warn!(error = %err, "Fetch failed");
            return Err(err);
        }

        let users = sample_users();
        tracing::debug!(count = users.len(), "Fetch succeeded");
        Ok(users)
    }

    /// Waits for the failing delay, then always returns the intentional error.
    pub async fn fetch_users_failing(&self) -> Result<Vec<User>, FetchError> {
        tokio::time::sleep(self.failing_delay).await;

        let err = FetchError::intentional();
        tracing::warn!(error = %err, "Simulated fetch failure");
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::failure::{AlwaysFail, NeverFail};

    fn service(failure: impl FailureSource + 'static) -> UserService {
        UserService::new(Duration::from_secs(3), Duration::from_secs(2), failure)
    }

    #[tokio::test(start_paused = true)]
    async fn success_returns_sample_users() {
        let users = service(NeverFail).fetch_users().await.unwrap();
        assert_eq!(users, sample_users());
    }

    #[tokio::test(start_paused = true)]
    async fn forced_failure_is_connection_error() {
        let err = service(AlwaysFail).fetch_users().await.unwrap_err();
        assert_eq!(err, FetchError::connection());
    }

    #[tokio::test(start_paused = true)]
    async fn failing_path_ignores_failure_source() {
        let err = service(NeverFail).fetch_users_failing().await.unwrap_err();
        assert_eq!(err.message(), "intentional error for demonstrating error handling");
    }

    #[tokio::test(start_paused = true)]
    async fn normal_fetch_waits_for_delay() {
        let start = tokio::time::Instant::now();
        let _ = service(NeverFail).fetch_users().await;
        assert!(start.elapsed() >= Duration::from_secs(3));
    }

    #[tokio::test(start_paused = true)]
    async fn failing_fetch_waits_for_shorter_delay() {
        let start = tokio::time::Instant::now();
        let _ = service(NeverFail).fetch(FetchKind::Failing).await;
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_secs(2));
        assert!(elapsed < Duration::from_secs(3));
    }
}
