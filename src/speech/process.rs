use std::collections::HashMap;
use std::process::Stdio;

use tokio::process::Command;
use tokio::sync::{mpsc, oneshot};
use tracing::debug;

use super::{SpeechEngine, SpeechEvent, SpeechEventKind, Utterance, UtteranceId};
use crate::errors::AppError;

/// Speaks through an external TTS command (`espeak-ng` by default), invoked
/// as `<program> -v <voice> -- <text>`. Must be used inside a tokio runtime.
pub struct ProcessSpeechEngine {
    program: String,
    events: mpsc::UnboundedSender<SpeechEvent>,
    running: HashMap<UtteranceId, oneshot::Sender<()>>,
}

impl ProcessSpeechEngine {
    pub fn new(program: impl Into<String>) -> (Self, mpsc::UnboundedReceiver<SpeechEvent>) {
        let (events, rx) = mpsc::unbounded_channel();
        let engine = Self { program: program.into(), events, running: HashMap::new() };
        (engine, rx)
    }
}

/// espeak voices are lowercase; only English needs the region.
fn voice_arg(voice: &str) -> String {
    match voice {
        "en-US" => "en-us".to_string(),
        other => other.split('-').next().unwrap_or(other).to_lowercase(),
    }
}

impl SpeechEngine for ProcessSpeechEngine {
    fn speak(&mut self, utterance: &Utterance) -> Result<(), AppError> {
        self.running.retain(|_, cancel| !cancel.is_closed());

        let mut child = Command::new(&self.program)
            .arg("-v")
            .arg(voice_arg(utterance.voice))
            // Replies often open with a "- " bullet.
            .arg("--")
            .arg(&utterance.text)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| AppError::speech(format!("failed to start {}: {e}", self.program)))?;

        let (cancel_tx, cancel_rx) = oneshot::channel::<()>();
        self.running.insert(utterance.id, cancel_tx);

        let events = self.events.clone();
        let utterance_id = utterance.id;
        tokio::spawn(async move {
            let finished = tokio::select! {
                status = child.wait() => Some(status),
                _ = cancel_rx => None,
            };
            let kind = match finished {
                Some(Ok(s)) if s.success() => SpeechEventKind::Done,
                Some(Ok(s)) => SpeechEventKind::Error(format!("speech command exited with {s}")),
                Some(Err(e)) => SpeechEventKind::Error(e.to_string()),
                None => {
                    let _ = child.kill().await;
                    SpeechEventKind::Stopped
                }
            };
            debug!("Utterance {utterance_id} finished: {kind:?}");
            let _ = events.send(SpeechEvent { utterance_id, kind });
        });
        Ok(())
    }

    fn stop(&mut self, utterance_id: UtteranceId) {
        if let Some(cancel) = self.running.remove(&utterance_id) {
            let _ = cancel.send(());
        }
    }
}
