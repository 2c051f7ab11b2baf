mod http;

use std::time::Duration;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::Language;

pub use http::HttpChatClient;

/// One round trip to the chat backend: a user utterance in, the assistant's
/// reply text out, verbatim.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn send(
        &self,
        session_id: &str,
        text: &str,
        language: Language,
    ) -> Result<String, AppError>;
}

/// Bounded retry for transient transport failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self { max_retries: 1, backoff: Duration::from_millis(500) }
    }
}

impl RetryPolicy {
    pub fn none() -> Self {
        Self { max_retries: 0, backoff: Duration::ZERO }
    }

    /// Delay before retry number `retry` (1-based): `backoff * 2^(retry - 1)`.
    pub fn delay_for(&self, retry: u32) -> Duration {
        let factor = 1u32.checked_shl(retry.saturating_sub(1)).unwrap_or(u32::MAX);
        self.backoff.saturating_mul(factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backoff_doubles_per_retry() {
        let policy = RetryPolicy { max_retries: 3, backoff: Duration::from_millis(100) };
        assert_eq!(policy.delay_for(1), Duration::from_millis(100));
        assert_eq!(policy.delay_for(2), Duration::from_millis(200));
        assert_eq!(policy.delay_for(3), Duration::from_millis(400));
    }

    #[test]
    fn default_is_a_single_retry() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_retries, 1);
        assert_eq!(policy.delay_for(1), Duration::from_millis(500));
    }
}
