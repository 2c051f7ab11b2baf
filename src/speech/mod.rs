//! Text-to-speech playback state.
//!
//! At most one utterance plays at a time. Playback state is tracked per
//! message: starting a message while another one speaks stops the other one
//! first. Terminal engine callbacks arrive as [`SpeechEvent`]s and always
//! return the affected message to [`PlaybackState::Idle`].

mod process;

use tracing::{debug, warn};

use crate::errors::AppError;
use crate::i18n;
use crate::notice::Notice;
use crate::preference::LanguagePreference;

pub use process::ProcessSpeechEngine;

pub type UtteranceId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utterance {
    pub id: UtteranceId,
    pub message_id: String,
    pub text: String,
    /// BCP-47 voice tag, e.g. `te-IN`.
    pub voice: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechEventKind {
    Done,
    Stopped,
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechEvent {
    pub utterance_id: UtteranceId,
    pub kind: SpeechEventKind,
}

/// Platform text-to-speech engine.
///
/// `speak` only starts playback; completion is reported later as a
/// [`SpeechEvent`] through whatever channel the engine was built with.
pub trait SpeechEngine: Send {
    fn speak(&mut self, utterance: &Utterance) -> Result<(), AppError>;
    fn stop(&mut self, utterance_id: UtteranceId);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    Speaking,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechTransition {
    Started,
    Stopped,
    /// Another message was speaking; it was stopped and this one started.
    Switched { stopped_message_id: String },
}

#[derive(Debug, Clone)]
struct ActiveUtterance {
    id: UtteranceId,
    message_id: String,
}

pub struct SpeechController {
    engine: Box<dyn SpeechEngine>,
    preference: LanguagePreference,
    active: Option<ActiveUtterance>,
    next_id: UtteranceId,
}

impl SpeechController {
    pub fn new(engine: Box<dyn SpeechEngine>, preference: LanguagePreference) -> Self {
        Self { engine, preference, active: None, next_id: 1 }
    }

    pub fn state(&self, message_id: &str) -> PlaybackState {
        match &self.active {
            Some(a) if a.message_id == message_id => PlaybackState::Speaking,
            _ => PlaybackState::Idle,
        }
    }

    pub fn is_speaking(&self) -> bool {
        self.active.is_some()
    }

    /// Message id of the utterance currently playing.
    pub fn active(&self) -> Option<&str> {
        self.active.as_ref().map(|a| a.message_id.as_str())
    }

    pub fn toggle(&mut self, message_id: &str, text: &str) -> Result<SpeechTransition, AppError> {
        match self.active.take() {
            Some(prev) if prev.message_id == message_id => {
                self.engine.stop(prev.id);
                Ok(SpeechTransition::Stopped)
            }
            Some(prev) => {
                self.engine.stop(prev.id);
                self.start(message_id, text)?;
                Ok(SpeechTransition::Switched { stopped_message_id: prev.message_id })
            }
            None => {
                self.start(message_id, text)?;
                Ok(SpeechTransition::Started)
            }
        }
    }

    /// Stops whatever is playing. Used on teardown.
    pub fn stop_all(&mut self) {
        if let Some(prev) = self.active.take() {
            self.engine.stop(prev.id);
        }
    }

    /// Applies a terminal engine callback. Errors on the active utterance
    /// produce a notice; events for earlier utterances are ignored.
    pub fn handle_event(&mut self, event: SpeechEvent) -> Option<Notice> {
        let is_active = matches!(&self.active, Some(a) if a.id == event.utterance_id);
        if !is_active {
            debug!("Ignoring {:?} for stale utterance {}", event.kind, event.utterance_id);
            return None;
        }
        self.active = None;
        match event.kind {
            SpeechEventKind::Done | SpeechEventKind::Stopped => None,
            SpeechEventKind::Error(message) => {
                warn!("Speech failed for utterance {}: {message}", event.utterance_id);
                Some(Notice::speech_failed(i18n::bundle(self.preference.get())))
            }
        }
    }

    fn start(&mut self, message_id: &str, text: &str) -> Result<(), AppError> {
        let utterance = Utterance {
            id: self.next_id,
            message_id: message_id.to_string(),
            text: text.to_string(),
            voice: self.preference.get().voice_tag(),
        };
        self.next_id += 1;
        self.engine.speak(&utterance)?;
        self.active = Some(ActiveUtterance { id: utterance.id, message_id: utterance.message_id });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::models::Language;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        Speak(Utterance),
        Stop(UtteranceId),
    }

    #[derive(Clone, Default)]
    struct RecordingEngine {
        calls: Arc<Mutex<Vec<Call>>>,
        fail: bool,
    }

    impl SpeechEngine for RecordingEngine {
        fn speak(&mut self, utterance: &Utterance) -> Result<(), AppError> {
            if self.fail {
                return Err(AppError::speech("no engine"));
            }
            self.calls.lock().unwrap().push(Call::Speak(utterance.clone()));
            Ok(())
        }

        fn stop(&mut self, utterance_id: UtteranceId) {
            self.calls.lock().unwrap().push(Call::Stop(utterance_id));
        }
    }

    fn controller(engine: &RecordingEngine, pref: &LanguagePreference) -> SpeechController {
        SpeechController::new(Box::new(engine.clone()), pref.clone())
    }

    #[test]
    fn toggle_twice_starts_then_stops() {
        let engine = RecordingEngine::default();
        let mut speech = controller(&engine, &LanguagePreference::default());

        assert_eq!(speech.toggle("m1", "text").unwrap(), SpeechTransition::Started);
        assert_eq!(speech.state("m1"), PlaybackState::Speaking);

        assert_eq!(speech.toggle("m1", "text").unwrap(), SpeechTransition::Stopped);
        assert_eq!(speech.state("m1"), PlaybackState::Idle);

        let calls = engine.calls.lock().unwrap();
        assert_eq!(calls.len(), 2);
        assert!(matches!(calls[0], Call::Speak(_)));
        assert_eq!(calls[1], Call::Stop(1));
    }

    #[test]
    fn voice_follows_current_language() {
        let engine = RecordingEngine::default();
        let pref = LanguagePreference::default();
        let mut speech = controller(&engine, &pref);

        pref.set(Language::Te);
        speech.toggle("m1", "నమస్తే").unwrap();

        let calls = engine.calls.lock().unwrap();
        match &calls[0] {
            Call::Speak(u) => assert_eq!(u.voice, "te-IN"),
            other => panic!("unexpected call {other:?}"),
        }
    }

    #[test]
    fn switching_messages_stops_the_previous_one() {
        let engine = RecordingEngine::default();
        let mut speech = controller(&engine, &LanguagePreference::default());

        speech.toggle("a", "first").unwrap();
        let transition = speech.toggle("b", "second").unwrap();
        assert_eq!(transition, SpeechTransition::Switched { stopped_message_id: "a".into() });
        assert_eq!(speech.state("a"), PlaybackState::Idle);
        assert_eq!(speech.state("b"), PlaybackState::Speaking);

        let calls = engine.calls.lock().unwrap();
        assert_eq!(calls[1], Call::Stop(1));
        assert!(matches!(&calls[2], Call::Speak(u) if u.id == 2 && u.message_id == "b"));
    }

    #[test]
    fn terminal_events_return_to_idle() {
        for kind in [SpeechEventKind::Done, SpeechEventKind::Stopped] {
            let engine = RecordingEngine::default();
            let mut speech = controller(&engine, &LanguagePreference::default());
            speech.toggle("m1", "text").unwrap();

            let notice = speech.handle_event(SpeechEvent { utterance_id: 1, kind });
            assert!(notice.is_none());
            assert!(!speech.is_speaking());
        }
    }

    #[test]
    fn error_event_returns_to_idle_with_notice() {
        let engine = RecordingEngine::default();
        let pref = LanguagePreference::new(Language::Hi);
        let mut speech = controller(&engine, &pref);
        speech.toggle("m1", "text").unwrap();

        let notice = speech
            .handle_event(SpeechEvent {
                utterance_id: 1,
                kind: SpeechEventKind::Error("device busy".into()),
            })
            .expect("notice");
        assert_eq!(notice.body, i18n::bundle(Language::Hi).notices.speech_failed);
        assert_eq!(speech.state("m1"), PlaybackState::Idle);
    }

    #[test]
    fn stale_events_are_ignored() {
        let engine = RecordingEngine::default();
        let mut speech = controller(&engine, &LanguagePreference::default());
        speech.toggle("a", "first").unwrap();
        speech.toggle("b", "second").unwrap();

        // The engine reports the first utterance as stopped after the switch.
        let notice = speech.handle_event(SpeechEvent {
            utterance_id: 1,
            kind: SpeechEventKind::Stopped,
        });
        assert!(notice.is_none());
        assert_eq!(speech.active(), Some("b"));
    }

    #[test]
    fn failed_start_stays_idle() {
        let engine = RecordingEngine { fail: true, ..Default::default() };
        let mut speech = controller(&engine, &LanguagePreference::default());
        let err = speech.toggle("m1", "text").unwrap_err();
        assert!(err.is_speech());
        assert!(!speech.is_speaking());
    }
}
