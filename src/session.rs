use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::i18n;
use crate::models::{Delivery, Language, Message};

pub const WELCOME_ID: &str = "welcome";

/// In-memory history of one chat visit. History only grows, in chronological
/// order; nothing is persisted.
#[derive(Debug, Clone)]
pub struct ConversationSession {
    session_id: String,
    welcome_language: Language,
    messages: Vec<Message>,
}

fn welcome_message(language: Language) -> Message {
    Message {
        id: WELCOME_ID.to_string(),
        text: i18n::bundle(language).chat.welcome.to_string(),
        response_text: None,
        created_at: Utc::now(),
        is_user_authored: false,
        in_reply_to: None,
        delivery: Delivery::Answered,
    }
}

impl ConversationSession {
    pub fn create(language: Language) -> Self {
        let session_id = format!("session-{}", Uuid::new_v4());
        info!("Created chat session {session_id} ({language})");
        Self {
            session_id,
            welcome_language: language,
            messages: vec![welcome_message(language)],
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn welcome_language(&self) -> Language {
        self.welcome_language
    }

    pub fn find(&self, id: &str) -> Option<&Message> {
        self.messages.iter().find(|m| m.id == id)
    }

    /// The user turn still waiting for a reply, if any.
    pub fn pending_turn(&self) -> Option<&Message> {
        self.messages.iter().find(|m| m.is_pending())
    }

    pub fn last_assistant(&self) -> Option<&Message> {
        self.messages.iter().rev().find(|m| !m.is_user_authored)
    }

    /// True while the welcome message is the only entry.
    pub fn is_fresh(&self) -> bool {
        self.messages.len() <= 1
    }

    pub fn append_user_turn(&mut self, text: &str) -> Result<&Message, AppError> {
        if text.trim().is_empty() {
            return Err(AppError::empty_field("message"));
        }
        if self.pending_turn().is_some() {
            return Err(AppError::RequestInFlight { session_id: self.session_id.clone() });
        }
        let message = Message::user(text.to_string());
        debug!("Session {}: user turn {}", self.session_id, message.id);
        self.messages.push(message);
        Ok(self.last())
    }

    /// Appends the reply to `for_user_message_id` at the end of history and
    /// records it on the user turn as well.
    pub fn append_assistant_turn(
        &mut self,
        for_user_message_id: &str,
        response_text: &str,
    ) -> Result<&Message, AppError> {
        let user_turn = self
            .messages
            .iter_mut()
            .find(|m| m.id == for_user_message_id && m.is_user_authored)
            .ok_or_else(|| AppError::TurnNotFound { id: for_user_message_id.to_string() })?;
        if user_turn.delivery != Delivery::Pending {
            return Err(AppError::TurnAlreadyAnswered { id: for_user_message_id.to_string() });
        }
        user_turn.delivery = Delivery::Answered;
        user_turn.response_text = Some(response_text.to_string());

        let reply = Message::assistant(
            Some(for_user_message_id.to_string()),
            response_text.to_string(),
        );
        debug!("Session {}: assistant turn {}", self.session_id, reply.id);
        self.messages.push(reply);
        Ok(self.last())
    }

    /// Marks a pending user turn as failed so a new one can be sent.
    pub fn mark_failed(&mut self, user_message_id: &str) -> Result<(), AppError> {
        let user_turn = self
            .messages
            .iter_mut()
            .find(|m| m.id == user_message_id && m.is_user_authored)
            .ok_or_else(|| AppError::TurnNotFound { id: user_message_id.to_string() })?;
        if user_turn.delivery != Delivery::Pending {
            return Err(AppError::TurnAlreadyAnswered { id: user_message_id.to_string() });
        }
        user_turn.delivery = Delivery::Failed;
        Ok(())
    }

    /// Replaces the welcome message in place. Returns `false` when it was
    /// already in `language`.
    pub fn regenerate_welcome(&mut self, language: Language) -> bool {
        if self.welcome_language == language {
            return false;
        }
        let fresh = welcome_message(language);
        match self.messages.iter_mut().find(|m| m.id == WELCOME_ID) {
            Some(existing) => existing.text = fresh.text,
            None => self.messages.insert(0, fresh),
        }
        self.welcome_language = language;
        true
    }

    fn last(&self) -> &Message {
        // Only called right after a push.
        &self.messages[self.messages.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn texts(session: &ConversationSession) -> Vec<&str> {
        session.messages().iter().map(|m| m.text.as_str()).collect()
    }

    #[test]
    fn create_seeds_one_welcome_message() {
        let session = ConversationSession::create(Language::En);
        let messages = session.messages();
        assert_eq!(messages.len(), 1);
        assert!(!messages[0].is_user_authored);
        assert!(!messages[0].text.is_empty());
        assert_eq!(messages[0].text, i18n::bundle(Language::En).chat.welcome);
        assert!(session.is_fresh());
    }

    #[test]
    fn session_ids_are_unique() {
        let a = ConversationSession::create(Language::En);
        let b = ConversationSession::create(Language::En);
        assert_ne!(a.session_id(), b.session_id());
        assert!(a.session_id().starts_with("session-"));
    }

    #[test]
    fn blank_user_turn_is_rejected() {
        let mut session = ConversationSession::create(Language::En);
        for text in ["", "   ", "\n\t"] {
            let err = session.append_user_turn(text).unwrap_err();
            assert!(err.is_validation());
        }
        assert_eq!(session.messages().len(), 1);
    }

    #[test]
    fn reply_follows_its_user_turn() {
        let mut session = ConversationSession::create(Language::En);
        let user_id = session.append_user_turn("hello").unwrap().id.clone();
        let reply = session.append_assistant_turn(&user_id, "hi").unwrap();
        assert_eq!(reply.in_reply_to.as_deref(), Some(user_id.as_str()));

        let welcome = i18n::bundle(Language::En).chat.welcome;
        assert_eq!(texts(&session), vec![welcome, "hello", "hi"]);

        let user_turn = session.find(&user_id).unwrap();
        assert_eq!(user_turn.delivery, Delivery::Answered);
        assert_eq!(user_turn.response_text.as_deref(), Some("hi"));
        assert!(session.pending_turn().is_none());
    }

    #[test]
    fn only_one_pending_user_turn() {
        let mut session = ConversationSession::create(Language::En);
        session.append_user_turn("first").unwrap();
        let err = session.append_user_turn("second").unwrap_err();
        assert!(matches!(err, AppError::RequestInFlight { .. }));
        assert_eq!(session.messages().len(), 2);
    }

    #[test]
    fn reply_to_unknown_or_answered_turn_fails() {
        let mut session = ConversationSession::create(Language::En);
        assert!(matches!(
            session.append_assistant_turn("nope", "hi"),
            Err(AppError::TurnNotFound { .. })
        ));
        assert!(matches!(
            session.append_assistant_turn(WELCOME_ID, "hi"),
            Err(AppError::TurnNotFound { .. })
        ));

        let user_id = session.append_user_turn("hello").unwrap().id.clone();
        session.append_assistant_turn(&user_id, "hi").unwrap();
        assert!(matches!(
            session.append_assistant_turn(&user_id, "again"),
            Err(AppError::TurnAlreadyAnswered { .. })
        ));
        assert_eq!(session.messages().len(), 3);
    }

    #[test]
    fn failed_turn_frees_the_session() {
        let mut session = ConversationSession::create(Language::En);
        let user_id = session.append_user_turn("hello").unwrap().id.clone();
        session.mark_failed(&user_id).unwrap();

        assert_eq!(session.find(&user_id).unwrap().delivery, Delivery::Failed);
        assert!(session.pending_turn().is_none());
        session.append_user_turn("hello again").unwrap();
        assert_eq!(session.messages().len(), 3);
    }

    #[test]
    fn welcome_is_replaced_not_appended() {
        let mut session = ConversationSession::create(Language::En);
        let user_id = session.append_user_turn("hello").unwrap().id.clone();
        session.append_assistant_turn(&user_id, "hi").unwrap();

        assert!(session.regenerate_welcome(Language::Te));
        assert!(!session.regenerate_welcome(Language::Te));
        assert!(session.regenerate_welcome(Language::En));

        let welcomes = session.messages().iter().filter(|m| m.id == WELCOME_ID).count();
        assert_eq!(welcomes, 1);
        assert_eq!(session.messages().len(), 3);
        assert_eq!(session.messages()[0].text, i18n::bundle(Language::En).chat.welcome);
    }

    #[test]
    fn welcome_follows_language() {
        let mut session = ConversationSession::create(Language::En);
        session.regenerate_welcome(Language::Hi);
        assert_eq!(session.welcome_language(), Language::Hi);
        assert_eq!(session.messages()[0].text, i18n::bundle(Language::Hi).chat.welcome);
        assert_eq!(session.last_assistant().unwrap().id, WELCOME_ID);
    }
}
