//! Conversational core of the KrishiMitra farming assistant: chat sessions,
//! the chat backend client, localized strings, speech playback and the
//! display-language preference.

pub mod client;
pub mod config;
pub mod errors;
pub mod i18n;
pub mod models;
pub mod notice;
pub mod preference;
pub mod service;
pub mod session;
pub mod speech;

pub use client::{ChatBackend, HttpChatClient, RetryPolicy};
pub use config::Config;
pub use errors::AppError;
pub use models::{Language, Message};
pub use preference::LanguagePreference;
pub use service::ChatService;
pub use session::ConversationSession;
pub use speech::SpeechController;
