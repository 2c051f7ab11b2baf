use thiserror::Error;

/// Top-level error for the chat core.
/// Every variant carries enough context to be shown to the user or logged.
#[derive(Debug, Error)]
pub enum AppError {
    // ── Validation errors ────────────────────────────────────────────────────
    #[error("Field '{field_name}' cannot be empty")]
    EmptyField { field_name: String },

    #[error("A message is already being sent in session '{session_id}'")]
    RequestInFlight { session_id: String },

    #[error("Unsupported language code '{code}'")]
    UnsupportedLanguage { code: String },

    // ── Session errors ───────────────────────────────────────────────────────
    #[error("Message '{id}' not found in this session")]
    TurnNotFound { id: String },

    #[error("Message '{id}' has already been answered")]
    TurnAlreadyAnswered { id: String },

    // ── Transport errors ─────────────────────────────────────────────────────
    #[error("Chat backend request failed: {message}")]
    Transport {
        message: String,
        status: Option<u16>,
        timed_out: bool,
    },

    #[error("Malformed reply from chat backend: {message}")]
    MalformedReply { message: String },

    // ── Speech errors ────────────────────────────────────────────────────────
    #[error("Text-to-speech failed: {message}")]
    Speech { message: String },

    // ── System errors ────────────────────────────────────────────────────────
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl AppError {
    pub fn empty_field(field_name: impl Into<String>) -> Self {
        AppError::EmptyField { field_name: field_name.into() }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        AppError::Transport { message: message.into(), status: None, timed_out: false }
    }

    pub fn speech(message: impl Into<String>) -> Self {
        AppError::Speech { message: message.into() }
    }

    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AppError::EmptyField { .. }
                | AppError::RequestInFlight { .. }
                | AppError::UnsupportedLanguage { .. }
        )
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, AppError::Transport { .. } | AppError::MalformedReply { .. })
    }

    pub fn is_speech(&self) -> bool {
        matches!(self, AppError::Speech { .. })
    }

    /// Timeouts, connection failures and 5xx answers are worth another attempt;
    /// 4xx answers and malformed bodies are not.
    pub fn is_retryable(&self) -> bool {
        match self {
            AppError::Transport { timed_out: true, .. } => true,
            AppError::Transport { status: Some(code), .. } => *code >= 500,
            AppError::Transport { status: None, .. } => true,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Transport {
            message: e.to_string(),
            status: e.status().map(|s| s.as_u16()),
            timed_out: e.is_timeout(),
        }
    }
}
