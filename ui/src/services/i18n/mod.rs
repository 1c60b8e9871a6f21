//! Localization lookup
//!
//! `translate` is total: an empty key yields an empty string and an unknown key
//! falls back to the key itself.

use std::collections::HashMap;
use std::sync::OnceLock;

const BASE_TRANSLATIONS: &str = include_str!("../../../assets/translations/en.json");

#[derive(Debug, Clone, Default)]
pub struct Translations {
    entries: HashMap<String, String>,
}

impl Translations {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        Ok(Self {
            entries: serde_json::from_str(json)?,
        })
    }

    pub fn translate(&self, key: &str) -> String {
        if key.is_empty() {
            return String::new();
        }
        self.entries
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    /// Translate and substitute `{name}` style placeholders
    pub fn translate_with(&self, key: &str, params: &[(&str, &str)]) -> String {
        params
            .iter()
            .fold(self.translate(key), |text, (name, value)| {
                text.replace(&format!("{{{}}}", name), value)
            })
    }
}

fn base_translations() -> &'static Translations {
    static TRANSLATIONS: OnceLock<Translations> = OnceLock::new();
    TRANSLATIONS.get_or_init(|| {
        Translations::from_json(BASE_TRANSLATIONS).unwrap_or_else(|e| {
            tracing::error!("Bundled translations are invalid: {}", e);
            Translations::default()
        })
    })
}

pub fn translate(key: &str) -> String {
    base_translations().translate(key)
}

pub fn translate_with(key: &str, params: &[(&str, &str)]) -> String {
    base_translations().translate_with(key, params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_translations_parse() {
        assert!(Translations::from_json(BASE_TRANSLATIONS).is_ok());
        assert_eq!(translate("plans.interval.weekly"), "Weekly");
    }

    #[test]
    fn test_translate_is_total() {
        assert_eq!(translate(""), "");
        assert_eq!(translate("missing.key"), "missing.key");
    }

    #[test]
    fn test_translate_with_params() {
        let translations =
            Translations::from_json(r#"{ "greeting": "Delete {name}?" }"#).unwrap();
        assert_eq!(
            translations.translate_with("greeting", &[("name", "French VAT")]),
            "Delete French VAT?"
        );
    }
}
