//! Internationalization (i18n) module
//!
//! The site is published in two languages. The current language is an
//! explicit value passed from the entry point to every page and component;
//! nothing in the library reads a global language setting.
//!
//! Interface chrome (key hints, CLI messages) is translated through the
//! `rust-i18n` locale files, always with an explicit `locale` argument.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "pt-PT")]
    Portuguese,
    #[serde(rename = "en-GB")]
    English,
}

const LANGUAGES: [Language; 2] = [Language::Portuguese, Language::English];

impl Language {
    /// BCP 47 tag, also the name of the locale file
    pub fn tag(self) -> &'static str {
        match self {
            Language::Portuguese => "pt-PT",
            Language::English => "en-GB",
        }
    }

    /// The other language of the pair
    pub fn toggled(self) -> Self {
        match self {
            Language::Portuguese => Language::English,
            Language::English => Language::Portuguese,
        }
    }

    /// All supported languages
    pub fn all() -> [Language; 2] {
        LANGUAGES
    }

    /// Map an arbitrary system locale string onto the closed set
    pub fn from_locale(locale: &str) -> Self {
        if locale.to_lowercase().starts_with("pt") {
            Language::Portuguese
        } else {
            Language::English
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LANGUAGES
            .into_iter()
            .find(|lang| lang.tag().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownLanguage(s.to_string()))
    }
}

/// Detect the language from the system locale
pub fn detect_language() -> Language {
    sys_locale::get_locale()
        .map(|locale| Language::from_locale(&locale))
        .unwrap_or_default()
}

/// Set the fallback interface locale for `rust-i18n`
///
/// Lookups in this crate pass `locale = ...` explicitly, so this only
/// affects strings translated without one.
pub fn init_locale(language: Language) {
    rust_i18n::set_locale(language.tag());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tags() {
        assert_eq!("pt-PT".parse::<Language>().unwrap(), Language::Portuguese);
        assert_eq!("en-gb".parse::<Language>().unwrap(), Language::English);
        assert!(matches!(
            "fr-FR".parse::<Language>(),
            Err(Error::UnknownLanguage(tag)) if tag == "fr-FR"
        ));
    }

    #[test]
    fn test_from_locale() {
        assert_eq!(Language::from_locale("pt_BR.UTF-8"), Language::Portuguese);
        assert_eq!(Language::from_locale("en-US"), Language::English);
        assert_eq!(Language::from_locale("da-DK"), Language::English);
    }

    #[test]
    fn test_toggle_round_trip() {
        for lang in Language::all() {
            assert_ne!(lang.toggled(), lang);
            assert_eq!(lang.toggled().toggled(), lang);
        }
    }

    #[test]
    fn test_detection_does_not_panic() {
        let _lang = detect_language();
    }
}
