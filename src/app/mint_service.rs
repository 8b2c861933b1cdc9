//! The SBT mint flow.
//!
//! One request drives one call to the external minter: `Idle -> Calling -> {Succeeded, Failed}`.
//! There are no retries and no cancellation; the only guard is an upper bound on how long
//! the call may hold the request.

use crate::infra::mint::{MintError, SbtMinter};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use std::time::Duration;

pub struct MintService {
    minter: Arc<dyn SbtMinter>,
    timeout: Duration,
}

impl MintService {
    pub fn new(minter: Arc<dyn SbtMinter>, timeout: Duration) -> Self {
        Self { minter, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Invokes the minter exactly once.
    pub async fn mint(&self) -> Result<JsonValue, MintError> {
        tracing::debug!(timeout_secs = self.timeout.as_secs(), "calling sbt minter");
        match tokio::time::timeout(self.timeout, self.minter.mint()).await {
            Ok(result) => result,
            Err(_) => Err(MintError::Timeout(self.timeout)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingMinter {
        calls: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl SbtMinter for CountingMinter {
        async fn mint(&self) -> Result<JsonValue, MintError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(MintError::Rejected("insufficient funds".to_string()))
            } else {
                Ok(serde_json::json!({ "txHash": "0x123" }))
            }
        }
    }

    struct HangingMinter;

    #[async_trait]
    impl SbtMinter for HangingMinter {
        async fn mint(&self) -> Result<JsonValue, MintError> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok(JsonValue::Null)
        }
    }

    #[tokio::test]
    async fn failure_is_not_retried() {
        let minter = Arc::new(CountingMinter {
            calls: AtomicUsize::new(0),
            fail: true,
        });
        let service = MintService::new(minter.clone(), Duration::from_secs(5));

        let err = service.mint().await.unwrap_err();
        assert_eq!(err.to_string(), "insufficient funds");
        assert_eq!(minter.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn success_passes_result_through() {
        let minter = Arc::new(CountingMinter {
            calls: AtomicUsize::new(0),
            fail: false,
        });
        let service = MintService::new(minter.clone(), Duration::from_secs(5));

        let data = service.mint().await.unwrap();
        assert_eq!(data, serde_json::json!({ "txHash": "0x123" }));
        assert_eq!(minter.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn hanging_minter_times_out() {
        let service = MintService::new(Arc::new(HangingMinter), Duration::from_secs(2));
        let err = service.mint().await.unwrap_err();
        assert!(matches!(err, MintError::Timeout(d) if d == Duration::from_secs(2)));
        assert_eq!(err.to_string(), "sbt mint timed out after 2s");
    }
}
