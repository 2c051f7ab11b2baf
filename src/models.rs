use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Display language of the app. The declaration order is the cycle order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Te,
    Hi,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Te, Language::Hi];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Te => "te",
            Language::Hi => "hi",
        }
    }

    /// Exact-match lookup; anything other than `en`, `te` or `hi` is `None`.
    pub fn from_code(code: &str) -> Option<Language> {
        Language::ALL.into_iter().find(|l| l.as_str() == code)
    }

    /// BCP-47 tag handed to the speech engine.
    pub fn voice_tag(&self) -> &'static str {
        match self {
            Language::En => "en-US",
            Language::Te => "te-IN",
            Language::Hi => "hi-IN",
        }
    }

    pub fn next(&self) -> Language {
        let idx = Language::ALL.iter().position(|l| l == self).unwrap_or(0);
        Language::ALL[(idx + 1) % Language::ALL.len()]
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle of a user turn. Assistant turns are always `Answered`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Delivery {
    Pending,
    Answered,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub text: String,
    pub response_text: Option<String>,
    pub created_at: DateTime<Utc>,
    pub is_user_authored: bool,
    /// Id of the user turn this assistant turn answers. `None` for user turns
    /// and for the welcome message.
    pub in_reply_to: Option<String>,
    pub delivery: Delivery,
}

impl Message {
    pub fn user(text: String) -> Self {
        Self {
            id: format!("user-{}", uuid::Uuid::new_v4()),
            text,
            response_text: None,
            created_at: Utc::now(),
            is_user_authored: true,
            in_reply_to: None,
            delivery: Delivery::Pending,
        }
    }

    pub fn assistant(in_reply_to: Option<String>, text: String) -> Self {
        Self {
            id: format!("ai-{}", uuid::Uuid::new_v4()),
            text,
            response_text: None,
            created_at: Utc::now(),
            is_user_authored: false,
            in_reply_to,
            delivery: Delivery::Answered,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.is_user_authored && self.delivery == Delivery::Pending
    }
}

// ── Wire types for the chat backend ──────────────────────────────────────────

/// Body of `POST /api/chat`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub session_id: String,
    pub message: String,
    pub language: Language,
}

/// Reply of `POST /api/chat`. Only `response` is required.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatReply {
    pub response: String,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub success: Option<bool>,
}

/// One stored exchange as returned by `GET /api/chat/history/{session_id}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChatRecord {
    #[serde(default)]
    pub id: Option<String>,
    pub session_id: String,
    pub message: String,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChatHistory {
    pub session_id: String,
    #[serde(default)]
    pub messages: Vec<ChatRecord>,
}
