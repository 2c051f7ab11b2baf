use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use super::{ChatBackend, RetryPolicy};
use crate::errors::AppError;
use crate::models::{ChatHistory, ChatReply, ChatRequest, Language};

/// [`ChatBackend`] over the KrishiMitra HTTP API.
#[derive(Clone, Debug)]
pub struct HttpChatClient {
    client: reqwest::Client,
    base_url: String,
    retry: RetryPolicy,
}

impl HttpChatClient {
    pub fn new(base_url: &str, timeout: Duration, retry: RetryPolicy) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Unexpected(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            retry,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches what the backend stored for `session_id`.
    pub async fn history(&self, session_id: &str) -> Result<ChatHistory, AppError> {
        let url = format!("{}/api/chat/history/{session_id}", self.base_url);
        let resp = self.client.get(&url).send().await?;
        let resp = check_status(resp).await?;
        resp.json::<ChatHistory>()
            .await
            .map_err(|e| AppError::MalformedReply { message: e.to_string() })
    }

    async fn send_once(&self, request: &ChatRequest) -> Result<String, AppError> {
        let url = format!("{}/api/chat", self.base_url);
        let resp = self.client.post(&url).json(request).send().await?;
        let resp = check_status(resp).await?;
        let reply = resp
            .json::<ChatReply>()
            .await
            .map_err(|e| AppError::MalformedReply { message: e.to_string() })?;
        Ok(reply.response)
    }
}

async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, AppError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    let kind = if status.is_server_error() {
        "Server error"
    } else if status.is_client_error() {
        "Request rejected"
    } else {
        "Unexpected status"
    };
    Err(AppError::Transport {
        message: format!("{kind} {status}: {body}"),
        status: Some(status.as_u16()),
        timed_out: false,
    })
}

#[async_trait]
impl ChatBackend for HttpChatClient {
    async fn send(
        &self,
        session_id: &str,
        text: &str,
        language: Language,
    ) -> Result<String, AppError> {
        let request = ChatRequest {
            session_id: session_id.to_string(),
            message: text.to_string(),
            language,
        };

        let mut retry = 0;
        loop {
            debug!("POST /api/chat for {session_id} (attempt {})", retry + 1);
            match self.send_once(&request).await {
                Ok(response) => return Ok(response),
                Err(e) if e.is_retryable() && retry < self.retry.max_retries => {
                    retry += 1;
                    let delay = self.retry.delay_for(retry);
                    warn!("Chat request for {session_id} failed ({e}); retrying in {delay:?}");
                    tokio::time::sleep(delay).await;
                }
                // Logged by the caller.
                Err(e) => return Err(e),
            }
        }
    }
}
