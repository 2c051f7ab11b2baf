use std::sync::Arc;

use tracing::{error, info, warn};

use crate::client::ChatBackend;
use crate::errors::AppError;
use crate::i18n::{self, LocaleBundle};
use crate::models::{Language, Message};
use crate::notice::Notice;
use crate::preference::{LanguagePreference, PreferenceWatcher};
use crate::session::ConversationSession;
use crate::speech::{PlaybackState, SpeechController, SpeechEvent, SpeechTransition};

/// A send that has been validated and recorded but not answered yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSend {
    pub session_id: String,
    pub user_message_id: String,
    pub text: String,
    pub language: Language,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// The reply was appended; carries the assistant message id.
    Replied { message_id: String },
    /// The backend failed; a notice was queued and the input kept.
    Failed,
    /// The session the send belonged to is gone; nothing was written.
    Discarded,
}

/// Chat screen logic: one session, its input box, speech playback and the
/// notices waiting to be shown.
pub struct ChatService {
    preference: LanguagePreference,
    watcher: PreferenceWatcher,
    backend: Arc<dyn ChatBackend>,
    speech: SpeechController,
    session: ConversationSession,
    input: String,
    notices: Vec<Notice>,
}

impl ChatService {
    pub fn new(
        preference: LanguagePreference,
        backend: Arc<dyn ChatBackend>,
        speech: SpeechController,
    ) -> Self {
        let mut watcher = preference.subscribe();
        let session = ConversationSession::create(watcher.current());
        Self {
            preference,
            watcher,
            backend,
            speech,
            session,
            input: String::new(),
            notices: Vec::new(),
        }
    }

    /// Read accessors reflect the language as of the last `&mut` call; a
    /// change made through another preference handle shows up once any
    /// mutating operation (or `sync_language`) has run.
    pub fn session(&self) -> &ConversationSession {
        &self.session
    }

    pub fn messages(&self) -> &[Message] {
        self.session.messages()
    }

    pub fn language(&self) -> Language {
        self.preference.get()
    }

    pub fn strings(&self) -> &'static LocaleBundle {
        i18n::bundle(self.preference.get())
    }

    /// Example prompts, shown only until the first message is sent.
    pub fn visible_examples(&self) -> &'static [&'static str] {
        if self.session.is_fresh() {
            self.strings().chat.examples
        } else {
            &[]
        }
    }

    // ── Language ─────────────────────────────────────────────────────────────

    /// Applies a language change made through any preference handle.
    /// Returns `true` when the welcome message was regenerated.
    pub fn sync_language(&mut self) -> bool {
        if !self.watcher.has_changed() {
            return false;
        }
        let language = self.watcher.current();
        self.session.regenerate_welcome(language)
    }

    pub fn cycle_language(&mut self) -> Language {
        let language = self.preference.cycle();
        self.sync_language();
        language
    }

    pub fn set_language(&mut self, language: Language) {
        self.preference.set(language);
        self.sync_language();
    }

    // ── Input ────────────────────────────────────────────────────────────────

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.sync_language();
        self.input = text.into();
    }

    /// Copies example prompt `index` into the input box.
    pub fn use_example(&mut self, index: usize) -> bool {
        self.sync_language();
        match self.strings().example(index) {
            Some(example) => {
                self.input = example.to_string();
                true
            }
            None => false,
        }
    }

    pub fn is_sending(&self) -> bool {
        self.session.pending_turn().is_some()
    }

    pub fn can_send(&self) -> bool {
        !self.input.trim().is_empty() && !self.is_sending()
    }

    // ── Sending ──────────────────────────────────────────────────────────────

    /// Validates the input and records the user turn. At most one send can be
    /// outstanding per session.
    pub fn begin_send(&mut self) -> Result<PendingSend, AppError> {
        self.sync_language();
        let text = self.input.clone();
        let user_message_id = self.session.append_user_turn(&text)?.id.clone();
        Ok(PendingSend {
            session_id: self.session.session_id().to_string(),
            user_message_id,
            text,
            language: self.preference.get(),
        })
    }

    /// Applies the backend result of `pending`. The input is cleared only on
    /// success, so a failed message can be resent as is.
    pub fn complete_send(
        &mut self,
        pending: PendingSend,
        result: Result<String, AppError>,
    ) -> SendOutcome {
        self.sync_language();
        if pending.session_id != self.session.session_id() {
            warn!("Dropping reply for closed session {}", pending.session_id);
            return SendOutcome::Discarded;
        }

        match result {
            Ok(reply) => {
                let message_id =
                    match self.session.append_assistant_turn(&pending.user_message_id, &reply) {
                        Ok(message) => message.id.clone(),
                        Err(e) => {
                            warn!("Dropping reply for {}: {e}", pending.user_message_id);
                            return SendOutcome::Discarded;
                        }
                    };
                if self.input == pending.text {
                    self.input.clear();
                }
                SendOutcome::Replied { message_id }
            }
            Err(e) => {
                error!("Error sending message in {}: {e}", pending.session_id);
                if let Err(e) = self.session.mark_failed(&pending.user_message_id) {
                    warn!("Could not mark {} as failed: {e}", pending.user_message_id);
                }
                self.notices.push(Notice::chat_failed(self.strings()));
                SendOutcome::Failed
            }
        }
    }

    /// Sends the current input and waits for the reply. Dropping the returned
    /// future before it resolves leaves the user turn pending until `reset`.
    pub async fn submit(&mut self) -> Result<SendOutcome, AppError> {
        let pending = self.begin_send()?;
        let backend = Arc::clone(&self.backend);
        let result = backend
            .send(&pending.session_id, &pending.text, pending.language)
            .await;
        Ok(self.complete_send(pending, result))
    }

    /// Discards the session and starts a fresh one in the current language.
    pub fn reset(&mut self) {
        self.sync_language();
        self.speech.stop_all();
        self.session = ConversationSession::create(self.watcher.current());
        self.input.clear();
        info!("Chat reset, new session {}", self.session.session_id());
    }

    // ── Speech ───────────────────────────────────────────────────────────────

    /// Starts or stops reading out an assistant message.
    pub fn toggle_speech(&mut self, message_id: &str) -> Result<SpeechTransition, AppError> {
        self.sync_language();
        let text = match self.session.find(message_id) {
            Some(m) if !m.is_user_authored => m.text.clone(),
            _ => return Err(AppError::TurnNotFound { id: message_id.to_string() }),
        };
        let result = self.speech.toggle(message_id, &text);
        if matches!(&result, Err(e) if e.is_speech()) {
            self.notices.push(Notice::speech_failed(self.strings()));
        }
        result
    }

    pub fn handle_speech_event(&mut self, event: SpeechEvent) {
        self.sync_language();
        if let Some(notice) = self.speech.handle_event(event) {
            self.notices.push(notice);
        }
    }

    pub fn playback_state(&self, message_id: &str) -> PlaybackState {
        self.speech.state(message_id)
    }

    // ── Notices ──────────────────────────────────────────────────────────────

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn dismiss_notice(&mut self, index: usize) -> Option<Notice> {
        self.sync_language();
        (index < self.notices.len()).then(|| self.notices.remove(index))
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        self.sync_language();
        std::mem::take(&mut self.notices)
    }
}
