use std::time::Duration;

use tracing::warn;

use crate::client::RetryPolicy;
use crate::models::Language;

const DEFAULT_BACKEND_URL: &str = "http://localhost:8001";
const DEFAULT_TTS_COMMAND: &str = "espeak-ng";

/// Runtime configuration, read from the environment (and `.env` via dotenvy).
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub backend_url: String,
    pub request_timeout: Duration,
    pub retry: RetryPolicy,
    pub tts_command: String,
    pub initial_language: Language,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            request_timeout: Duration::from_secs(30),
            retry: RetryPolicy::default(),
            tts_command: DEFAULT_TTS_COMMAND.to_string(),
            initial_language: Language::En,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; `from_env` passes `std::env::var`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let backend_url = lookup("KRISHIMITRA_BACKEND_URL")
            .or_else(|| lookup("EXPO_PUBLIC_BACKEND_URL"))
            .unwrap_or(defaults.backend_url);

        let request_timeout = lookup("KRISHIMITRA_REQUEST_TIMEOUT_SECS")
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.request_timeout);

        let max_retries = lookup("KRISHIMITRA_MAX_RETRIES")
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(defaults.retry.max_retries);

        let backoff = lookup("KRISHIMITRA_RETRY_BACKOFF_MS")
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.retry.backoff);

        let tts_command = lookup("KRISHIMITRA_TTS_COMMAND").unwrap_or(defaults.tts_command);

        let initial_language = match lookup("KRISHIMITRA_LANGUAGE") {
            Some(code) => Language::from_code(&code).unwrap_or_else(|| {
                warn!("Ignoring unsupported KRISHIMITRA_LANGUAGE={code:?}, using en");
                Language::En
            }),
            None => defaults.initial_language,
        };

        Self {
            backend_url,
            request_timeout,
            retry: RetryPolicy { max_retries, backoff },
            tts_command,
            initial_language,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(Config::from_lookup(|_| None), Config::default());
    }

    #[test]
    fn reads_all_variables() {
        let config = Config::from_lookup(lookup(&[
            ("KRISHIMITRA_BACKEND_URL", "https://api.example.in"),
            ("KRISHIMITRA_REQUEST_TIMEOUT_SECS", "5"),
            ("KRISHIMITRA_MAX_RETRIES", "0"),
            ("KRISHIMITRA_RETRY_BACKOFF_MS", "250"),
            ("KRISHIMITRA_TTS_COMMAND", "say"),
            ("KRISHIMITRA_LANGUAGE", "te"),
        ]));
        assert_eq!(config.backend_url, "https://api.example.in");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.retry, RetryPolicy { max_retries: 0, backoff: Duration::from_millis(250) });
        assert_eq!(config.tts_command, "say");
        assert_eq!(config.initial_language, Language::Te);
    }

    #[test]
    fn falls_back_to_expo_backend_url() {
        let config = Config::from_lookup(lookup(&[("EXPO_PUBLIC_BACKEND_URL", "http://10.0.2.2:8001")]));
        assert_eq!(config.backend_url, "http://10.0.2.2:8001");
    }

    #[test]
    fn bad_values_fall_back() {
        let config = Config::from_lookup(lookup(&[
            ("KRISHIMITRA_REQUEST_TIMEOUT_SECS", "soon"),
            ("KRISHIMITRA_LANGUAGE", "fr"),
        ]));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.initial_language, Language::En);
    }
}
