use serde::Serialize;

use crate::i18n::LocaleBundle;

/// A user-visible, non-fatal, dismissible notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: String,
    pub body: String,
}

impl Notice {
    pub fn chat_failed(strings: &LocaleBundle) -> Self {
        Self::error(strings, strings.notices.chat_failed)
    }

    pub fn speech_failed(strings: &LocaleBundle) -> Self {
        Self::error(strings, strings.notices.speech_failed)
    }

    fn error(strings: &LocaleBundle, body: &str) -> Self {
        Self {
            title: strings.notices.error_title.to_string(),
            body: body.to_string(),
        }
    }
}
