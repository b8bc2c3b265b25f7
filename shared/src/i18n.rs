//! Translation bundles, key lookup and the language-loading policy.
//!
//! The front end owns fetching; this module decides what needs fetching and
//! answers lookups against whatever bundles have been installed.

use log::warn;
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

use crate::error::SharedError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    En,
    De,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::De => "de",
        }
    }

    /// Like `from_str`, but unsupported codes log a warning and become English.
    pub fn parse_or_default(code: &str) -> Self {
        code.parse().unwrap_or_else(|err: SharedError| {
            warn!("[i18n] {}, defaulting to en", err);
            Language::En
        })
    }

    /// Maps a browser locale such as `de-AT` to a supported language.
    pub fn from_browser_locale(locale: Option<&str>) -> Self {
        match locale {
            Some(tag) if tag.to_lowercase().starts_with("de") => Language::De,
            _ => Language::En,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "de" => Ok(Language::De),
            other => Err(SharedError::UnsupportedLanguage(other.to_string())),
        }
    }
}

/// A loaded set of translations for one language.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Bundle(Value);

impl Bundle {
    pub fn empty() -> Self {
        Bundle(Value::Object(Map::new()))
    }

    pub fn from_value(value: Value) -> Self {
        Bundle(value)
    }

    pub fn is_empty(&self) -> bool {
        match &self.0 {
            Value::Object(map) => map.is_empty(),
            Value::Null => true,
            _ => false,
        }
    }

    /// Resolves a dot path such as `lobby.title`. Object nodes are not
    /// translations; numbers and booleans are returned as their JSON text.
    pub fn lookup(&self, key: &str) -> Option<String> {
        if key.is_empty() {
            return None;
        }
        let node = key
            .split('.')
            .try_fold(&self.0, |node, part| node.get(part))?;
        match node {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

/// Replaces every `{name}` with its value, literally.
pub fn interpolate(template: &str, params: &[(&str, &str)]) -> String {
    params
        .iter()
        .fold(template.to_string(), |acc, (name, value)| {
            acc.replace(&format!("{{{}}}", name), value)
        })
}

/// What a `set_language` call has to fetch before it can install bundles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadPlan {
    pub language: Language,
    pub fetch_fallback: bool,
    /// `None` when the current bundle is the English fallback itself.
    pub fetch_current: Option<Language>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Translator {
    language: Language,
    translations: Bundle,
    fallback: Bundle,
    ready: bool,
}

impl Translator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Returns `None` when `language` is already current and loaded.
    pub fn plan(&self, language: Language) -> Option<LoadPlan> {
        if language == self.language && self.ready {
            return None;
        }
        Some(LoadPlan {
            language,
            fetch_fallback: self.fallback.is_empty(),
            fetch_current: (language != Language::En).then_some(language),
        })
    }

    /// Installs fetched bundles for `plan`. A missing `fallback` keeps the
    /// one already held; a missing `current` for a non-English plan means
    /// the fetch failed and an empty bundle is used.
    pub fn install(&mut self, plan: LoadPlan, fallback: Option<Bundle>, current: Option<Bundle>) {
        if let Some(fallback) = fallback {
            self.fallback = fallback;
        }
        self.language = plan.language;
        self.translations = match plan.fetch_current {
            None => self.fallback.clone(),
            Some(_) => current.unwrap_or_else(Bundle::empty),
        };
        self.ready = true;
    }

    /// Current bundle first, then English, then the key itself.
    pub fn t(&self, key: &str, params: &[(&str, &str)]) -> String {
        match self.resolve(key) {
            Some(value) => interpolate(&value, params),
            None => {
                warn!("[i18n] Missing translation key: \"{}\"", key);
                key.to_string()
            }
        }
    }

    /// Lookup that substitutes `default` instead of echoing the key.
    pub fn t_or(&self, key: &str, default: &str) -> String {
        self.resolve(key).unwrap_or_else(|| default.to_string())
    }

    /// Message for a server error code, e.g. `GAME_NOT_FOUND`.
    pub fn error_message(&self, code: &str) -> String {
        let key = format!("errors.{}", code);
        match self.resolve(&key) {
            Some(message) => message,
            None => self.t("errors.UNKNOWN", &[]),
        }
    }

    fn resolve(&self, key: &str) -> Option<String> {
        if let Some(value) = self.translations.lookup(key) {
            return Some(value);
        }
        if self.language == Language::En {
            return None;
        }
        let value = self.fallback.lookup(key)?;
        warn!(
            "[i18n] Missing translation for \"{}\" in {}, using English",
            key, self.language
        );
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn loaded(language: Language, en: Value, current: Value) -> Translator {
        let mut translator = Translator::new();
        let plan = translator.plan(language).unwrap();
        translator.install(plan, Some(Bundle::from_value(en)), Some(Bundle::from_value(current)));
        translator
    }

    #[test]
    fn test_interpolation() {
        let translator = loaded(Language::En, json!({"a": {"b": "val {x}"}}), json!({}));
        assert_eq!(translator.t("a.b", &[("x", "5")]), "val 5");
    }

    #[test]
    fn test_interpolation_replaces_every_occurrence() {
        assert_eq!(
            interpolate("{n} of {n} ({total})", &[("n", "2"), ("total", "9")]),
            "2 of 2 (9)"
        );
        assert_eq!(interpolate("no params {x}", &[]), "no params {x}");
    }

    #[test]
    fn test_german_falls_back_to_english() {
        let translator = loaded(
            Language::De,
            json!({"lobby": {"title": "Lobby", "start": "Start game"}}),
            json!({"lobby": {"title": "Warteraum"}}),
        );
        assert_eq!(translator.t("lobby.title", &[]), "Warteraum");
        assert_eq!(translator.t("lobby.start", &[]), "Start game");
        assert_eq!(translator.t("lobby.missing", &[]), "lobby.missing");
    }

    #[test]
    fn test_object_node_is_a_miss() {
        let translator = loaded(Language::En, json!({"lobby": {"title": "Lobby"}}), json!({}));
        assert_eq!(translator.t("lobby", &[]), "lobby");
        assert_eq!(translator.t("", &[]), "");
    }

    #[test]
    fn test_scalar_leaves() {
        let bundle = Bundle::from_value(json!({"limits": {"max": 10, "on": true}}));
        assert_eq!(bundle.lookup("limits.max"), Some("10".to_string()));
        assert_eq!(bundle.lookup("limits.on"), Some("true".to_string()));
    }

    #[test]
    fn test_error_message_falls_back_to_unknown() {
        let translator = loaded(
            Language::En,
            json!({"errors": {"NAME_TAKEN": "Name taken", "UNKNOWN": "Something went wrong"}}),
            json!({}),
        );
        assert_eq!(translator.error_message("NAME_TAKEN"), "Name taken");
        assert_eq!(translator.error_message("NOPE"), "Something went wrong");
    }

    #[test]
    fn test_t_or_default() {
        let translator = Translator::new();
        assert_eq!(translator.t_or("analytics.lastUpdated", "Updated"), "Updated");
    }

    #[test]
    fn test_language_parsing() {
        assert_eq!("de".parse::<Language>().unwrap(), Language::De);
        assert_eq!(
            "fr".parse::<Language>(),
            Err(SharedError::UnsupportedLanguage("fr".to_string()))
        );
        assert_eq!(Language::parse_or_default("fr"), Language::En);
        assert_eq!(Language::parse_or_default("de"), Language::De);
    }

    #[test]
    fn test_browser_locale_detection() {
        assert_eq!(Language::from_browser_locale(Some("de-AT")), Language::De);
        assert_eq!(Language::from_browser_locale(Some("DE")), Language::De);
        assert_eq!(Language::from_browser_locale(Some("en-US")), Language::En);
        assert_eq!(Language::from_browser_locale(Some("fr")), Language::En);
        assert_eq!(Language::from_browser_locale(None), Language::En);
    }

    #[test]
    fn test_plan_fetches_fallback_once() {
        let mut translator = Translator::new();
        assert!(!translator.is_ready());

        let plan = translator.plan(Language::De).unwrap();
        assert!(plan.fetch_fallback);
        assert_eq!(plan.fetch_current, Some(Language::De));
        translator.install(
            plan,
            Some(Bundle::from_value(json!({"k": "v"}))),
            Some(Bundle::from_value(json!({"k": "w"}))),
        );
        assert!(translator.is_ready());

        assert_eq!(translator.plan(Language::De), None);

        let plan = translator.plan(Language::En).unwrap();
        assert!(!plan.fetch_fallback);
        assert_eq!(plan.fetch_current, None);
        translator.install(plan, None, None);
        assert_eq!(translator.language(), Language::En);
        assert_eq!(translator.t("k", &[]), "v");
    }

    #[test]
    fn test_failed_fetch_installs_empty_bundle() {
        let mut translator = Translator::new();
        let plan = translator.plan(Language::De).unwrap();
        translator.install(plan, Some(Bundle::empty()), None);
        assert!(translator.is_ready());
        assert_eq!(translator.t("anything.here", &[]), "anything.here");
        // Empty fallback is fetched again on the next switch.
        assert!(translator.plan(Language::En).unwrap().fetch_fallback);
    }
}
