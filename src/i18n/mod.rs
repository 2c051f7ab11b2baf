//! Localized UI strings for every screen.
//!
//! One immutable [`LocaleBundle`] per supported [`Language`], defined as static
//! data in [`bundles`]. Resolution never fails: an unknown language code gets
//! the English bundle.

mod bundles;

use crate::models::Language;

#[derive(Debug, PartialEq, Eq)]
pub struct ChatStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub placeholder: &'static str,
    pub send: &'static str,
    pub speak: &'static str,
    pub change_language: &'static str,
    pub examples_title: &'static str,
    pub thinking: &'static str,
    /// Text of the synthetic assistant message that opens every session.
    pub welcome: &'static str,
    pub examples: &'static [&'static str],
}

#[derive(Debug, PartialEq, Eq)]
pub struct HomeStrings {
    pub welcome: &'static str,
    pub dashboard: &'static str,
    pub active_sensors: &'static str,
    pub farmers: &'static str,
    pub yield_increase: &'static str,
    pub savings: &'static str,
    pub weather: &'static str,
    pub sensor_status: &'static str,
    pub alerts: &'static str,
    pub view_all: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct SensorStrings {
    pub title: &'static str,
    pub all_sensors: &'static str,
    pub moisture: &'static str,
    pub ph: &'static str,
    pub temperature: &'static str,
    pub battery: &'static str,
    pub last_update: &'static str,
    pub view_history: &'static str,
    pub history: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct InsightStrings {
    pub title: &'static str,
    pub recommendations: &'static str,
    pub yield_prediction: &'static str,
    pub current_conditions: &'static str,
    pub suitability: &'static str,
    pub season: &'static str,
    pub expected_yield: &'static str,
    pub market_price: &'static str,
    pub view_all: &'static str,
    pub predict_yield: &'static str,
    pub confidence: &'static str,
    pub recommendations_title: &'static str,
    pub language: &'static str,
    pub about: &'static str,
    pub about_text: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct NoticeStrings {
    pub error_title: &'static str,
    pub chat_failed: &'static str,
    pub speech_failed: &'static str,
    pub busy: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct LocaleBundle {
    pub language: Language,
    pub chat: ChatStrings,
    pub home: HomeStrings,
    pub sensors: SensorStrings,
    pub insights: InsightStrings,
    pub notices: NoticeStrings,
}

/// Every key accepted by [`LocaleBundle::get`].
pub const KEYS: &[&str] = &[
    "chat.title",
    "chat.subtitle",
    "chat.placeholder",
    "chat.send",
    "chat.speak",
    "chat.change_language",
    "chat.examples_title",
    "chat.thinking",
    "chat.welcome",
    "home.welcome",
    "home.dashboard",
    "home.active_sensors",
    "home.farmers",
    "home.yield_increase",
    "home.savings",
    "home.weather",
    "home.sensor_status",
    "home.alerts",
    "home.view_all",
    "sensors.title",
    "sensors.all_sensors",
    "sensors.moisture",
    "sensors.ph",
    "sensors.temperature",
    "sensors.battery",
    "sensors.last_update",
    "sensors.view_history",
    "sensors.history",
    "insights.title",
    "insights.recommendations",
    "insights.yield_prediction",
    "insights.current_conditions",
    "insights.suitability",
    "insights.season",
    "insights.expected_yield",
    "insights.market_price",
    "insights.view_all",
    "insights.predict_yield",
    "insights.confidence",
    "insights.recommendations_title",
    "insights.language",
    "insights.about",
    "insights.about_text",
    "notices.error_title",
    "notices.chat_failed",
    "notices.speech_failed",
    "notices.busy",
];

impl LocaleBundle {
    /// Looks up a string by dotted key, e.g. `"chat.title"` or `"sensors.ph"`.
    pub fn get(&self, key: &str) -> Option<&'static str> {
        let value = match key {
            "chat.title" => self.chat.title,
            "chat.subtitle" => self.chat.subtitle,
            "chat.placeholder" => self.chat.placeholder,
            "chat.send" => self.chat.send,
            "chat.speak" => self.chat.speak,
            "chat.change_language" => self.chat.change_language,
            "chat.examples_title" => self.chat.examples_title,
            "chat.thinking" => self.chat.thinking,
            "chat.welcome" => self.chat.welcome,
            "home.welcome" => self.home.welcome,
            "home.dashboard" => self.home.dashboard,
            "home.active_sensors" => self.home.active_sensors,
            "home.farmers" => self.home.farmers,
            "home.yield_increase" => self.home.yield_increase,
            "home.savings" => self.home.savings,
            "home.weather" => self.home.weather,
            "home.sensor_status" => self.home.sensor_status,
            "home.alerts" => self.home.alerts,
            "home.view_all" => self.home.view_all,
            "sensors.title" => self.sensors.title,
            "sensors.all_sensors" => self.sensors.all_sensors,
            "sensors.moisture" => self.sensors.moisture,
            "sensors.ph" => self.sensors.ph,
            "sensors.temperature" => self.sensors.temperature,
            "sensors.battery" => self.sensors.battery,
            "sensors.last_update" => self.sensors.last_update,
            "sensors.view_history" => self.sensors.view_history,
            "sensors.history" => self.sensors.history,
            "insights.title" => self.insights.title,
            "insights.recommendations" => self.insights.recommendations,
            "insights.yield_prediction" => self.insights.yield_prediction,
            "insights.current_conditions" => self.insights.current_conditions,
            "insights.suitability" => self.insights.suitability,
            "insights.season" => self.insights.season,
            "insights.expected_yield" => self.insights.expected_yield,
            "insights.market_price" => self.insights.market_price,
            "insights.view_all" => self.insights.view_all,
            "insights.predict_yield" => self.insights.predict_yield,
            "insights.confidence" => self.insights.confidence,
            "insights.recommendations_title" => self.insights.recommendations_title,
            "insights.language" => self.insights.language,
            "insights.about" => self.insights.about,
            "insights.about_text" => self.insights.about_text,
            "notices.error_title" => self.notices.error_title,
            "notices.chat_failed" => self.notices.chat_failed,
            "notices.speech_failed" => self.notices.speech_failed,
            "notices.busy" => self.notices.busy,
            _ => return None,
        };
        Some(value)
    }

    /// Like [`get`](Self::get), but falls back to English and finally to the
    /// key itself, so a caller always has something to display.
    pub fn text<'a>(&self, key: &'a str) -> &'a str {
        self.get(key)
            .or_else(|| bundles::EN.get(key))
            .unwrap_or(key)
    }

    pub fn example(&self, index: usize) -> Option<&'static str> {
        self.chat.examples.get(index).copied()
    }
}

pub fn bundle(language: Language) -> &'static LocaleBundle {
    match language {
        Language::En => &bundles::EN,
        Language::Te => &bundles::TE,
        Language::Hi => &bundles::HI,
    }
}

/// Resolves a raw language code. Unrecognized or empty codes get English.
pub fn resolve(code: &str) -> &'static LocaleBundle {
    bundle(Language::from_code(code).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_language_has_every_key() {
        for lang in Language::ALL {
            let b = resolve(lang.as_str());
            assert_eq!(b.language, lang);
            for key in KEYS {
                let value = b.get(key).unwrap_or_else(|| panic!("{lang}: missing {key}"));
                assert!(!value.trim().is_empty(), "{lang}: empty {key}");
            }
            assert!(!b.chat.examples.is_empty());
        }
    }

    #[test]
    fn unknown_codes_fall_back_to_english() {
        let en = resolve("en");
        for code in ["", "fr", "EN", "te-IN", " hi"] {
            assert!(std::ptr::eq(resolve(code), en), "code {code:?}");
        }
    }

    #[test]
    fn examples_keep_their_order() {
        let te = bundle(Language::Te);
        assert_eq!(te.example(0), Some("వరికి అనువైన pH ఏమిటి?"));
        assert_eq!(te.example(2), Some("ఈ కాలానికి ఉత్తమ పంటలు ఏవి?"));
        assert_eq!(te.example(3), None);
    }

    #[test]
    fn text_falls_back_to_key() {
        let hi = bundle(Language::Hi);
        assert_eq!(hi.text("chat.send"), "भेजें");
        assert_eq!(hi.text("chat.nope"), "chat.nope");
    }

    #[test]
    fn bundles_differ_per_language() {
        assert_ne!(bundle(Language::En).chat.welcome, bundle(Language::Te).chat.welcome);
        assert_ne!(bundle(Language::Te).chat.welcome, bundle(Language::Hi).chat.welcome);
    }
}
