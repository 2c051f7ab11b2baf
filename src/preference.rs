use std::sync::Arc;

use tokio::sync::watch;
use tracing::info;

use crate::errors::AppError;
use crate::models::Language;

/// Process-wide display language, passed explicitly to whoever needs it.
///
/// Clones share the same value. A `set` is visible through every clone and
/// every [`PreferenceWatcher`] as soon as it returns.
#[derive(Clone, Debug)]
pub struct LanguagePreference {
    tx: Arc<watch::Sender<Language>>,
}

impl Default for LanguagePreference {
    fn default() -> Self {
        Self::new(Language::En)
    }
}

impl LanguagePreference {
    pub fn new(initial: Language) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx: Arc::new(tx) }
    }

    pub fn get(&self) -> Language {
        *self.tx.borrow()
    }

    /// Returns `true` when the value actually changed.
    pub fn set(&self, language: Language) -> bool {
        let changed = self.tx.send_if_modified(|current| {
            if *current == language {
                return false;
            }
            *current = language;
            true
        });
        if changed {
            info!("Display language set to {language}");
        }
        changed
    }

    pub fn set_code(&self, code: &str) -> Result<Language, AppError> {
        let language = Language::from_code(code)
            .ok_or_else(|| AppError::UnsupportedLanguage { code: code.to_string() })?;
        self.set(language);
        Ok(language)
    }

    /// Advances en → te → hi → en and returns the new value.
    pub fn cycle(&self) -> Language {
        let next = self.get().next();
        self.set(next);
        next
    }

    pub fn subscribe(&self) -> PreferenceWatcher {
        PreferenceWatcher { rx: self.tx.subscribe() }
    }
}

/// Observer side of a [`LanguagePreference`].
#[derive(Debug)]
pub struct PreferenceWatcher {
    rx: watch::Receiver<Language>,
}

impl PreferenceWatcher {
    /// Whether a change happened since the last [`current`](Self::current).
    pub fn has_changed(&self) -> bool {
        self.rx.has_changed().unwrap_or(false)
    }

    /// Reads the value and marks it as seen.
    pub fn current(&mut self) -> Language {
        *self.rx.borrow_and_update()
    }

    /// Waits for the next change and returns the new value.
    pub async fn changed(&mut self) -> Result<Language, AppError> {
        self.rx
            .changed()
            .await
            .map_err(|_| AppError::Unexpected("language preference dropped".to_string()))?;
        Ok(*self.rx.borrow_and_update())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_in_english() {
        assert_eq!(LanguagePreference::default().get(), Language::En);
    }

    #[test]
    fn cycle_three_times_returns_to_english() {
        let pref = LanguagePreference::default();
        assert_eq!(pref.cycle(), Language::Te);
        assert_eq!(pref.cycle(), Language::Hi);
        assert_eq!(pref.cycle(), Language::En);
        assert_eq!(pref.get(), Language::En);
    }

    #[test]
    fn clones_share_state() {
        let pref = LanguagePreference::default();
        let other = pref.clone();
        other.set(Language::Hi);
        assert_eq!(pref.get(), Language::Hi);
    }

    #[test]
    fn watcher_sees_change_synchronously() {
        let pref = LanguagePreference::default();
        let mut watcher = pref.subscribe();
        assert!(!watcher.has_changed());

        pref.set(Language::Te);
        assert!(watcher.has_changed());
        assert_eq!(watcher.current(), Language::Te);
        assert!(!watcher.has_changed());
    }

    #[test]
    fn setting_same_value_is_not_a_change() {
        let pref = LanguagePreference::default();
        let watcher = pref.subscribe();
        assert!(!pref.set(Language::En));
        assert!(!watcher.has_changed());
    }

    #[test]
    fn set_code_rejects_unknown_codes() {
        let pref = LanguagePreference::default();
        let err = pref.set_code("fr").unwrap_err();
        assert!(matches!(err, AppError::UnsupportedLanguage { .. }));
        assert_eq!(pref.get(), Language::En);
        assert_eq!(pref.set_code("hi").unwrap(), Language::Hi);
    }

    #[tokio::test]
    async fn changed_resolves_after_set() {
        let pref = LanguagePreference::default();
        let mut watcher = pref.subscribe();
        let setter = pref.clone();
        tokio::spawn(async move {
            setter.set(Language::Hi);
        });
        assert_eq!(watcher.changed().await.unwrap(), Language::Hi);
    }
}
