//! Internationalization: locale resolution, translation lookup, and the
//! process-wide locale provider.
//!
//! Resolution runs once per session: persisted preference, then the
//! environment's language tag, then the default. Lookup never errors; a
//! missing translation degrades to the English table and finally to the raw
//! key, which is intentional, visible behavior.

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::interface::PortfolioError;
use crate::prefs::LocalePrefs;
use crate::translations;

/// A supported display language. Uzbek is the session default; English is the
/// fallback table for lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Uz,
    Ru,
    En,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::Uz, Locale::Ru, Locale::En];

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Uz => "uz",
            Locale::Ru => "ru",
            Locale::En => "en",
        }
    }

    /// Exact tag match against the supported set (used for persisted
    /// preferences and explicit user selection).
    pub fn from_tag(tag: &str) -> Option<Locale> {
        match tag {
            "uz" => Some(Locale::Uz),
            "ru" => Some(Locale::Ru),
            "en" => Some(Locale::En),
            _ => None,
        }
    }

    /// Map an environment language tag ("ru-RU", "en_US.UTF-8") by primary
    /// subtag. Only the two non-default locales are matched; anything else
    /// falls through to the default.
    pub fn from_environment_tag(tag: &str) -> Option<Locale> {
        let primary = tag
            .split(|c: char| c == '-' || c == '_' || c == '.')
            .next()
            .unwrap_or("");
        match primary {
            "ru" => Some(Locale::Ru),
            "en" => Some(Locale::En),
            _ => None,
        }
    }
}

static UZ: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| translations::UZ.iter().copied().collect());
static RU: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| translations::RU.iter().copied().collect());
static EN: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| translations::EN.iter().copied().collect());

fn table(locale: Locale) -> &'static HashMap<&'static str, &'static str> {
    match locale {
        Locale::Uz => &UZ,
        Locale::Ru => &RU,
        Locale::En => &EN,
    }
}

/// Look up `key` for `locale`, falling back to the English table, then to the
/// raw key itself as a last-resort visible marker.
pub fn translate(locale: Locale, key: &str) -> String {
    table(locale)
        .get(key)
        .or_else(|| EN.get(key))
        .map(|s| (*s).to_string())
        .unwrap_or_else(|| key.to_string())
}

/// Determine the locale for a fresh session.
pub fn resolve(prefs: &dyn LocalePrefs) -> Locale {
    if let Some(stored) = prefs.load() {
        if let Some(locale) = Locale::from_tag(&stored) {
            return locale;
        }
    }
    if let Some(tag) = prefs.system_language_tag() {
        if let Some(locale) = Locale::from_environment_tag(&tag) {
            return locale;
        }
    }
    Locale::default()
}

/// Process-wide locale holder: one instance per session, many readers, rare
/// user-triggered writes. The active slot sits behind a `RwLock` so
/// multi-threaded consumers stay safe.
pub struct I18n {
    active: RwLock<Locale>,
    prefs: Arc<dyn LocalePrefs>,
}

impl I18n {
    /// Resolve once and hold for the session lifetime.
    pub fn new(prefs: Arc<dyn LocalePrefs>) -> Self {
        let active = resolve(prefs.as_ref());
        Self {
            active: RwLock::new(active),
            prefs,
        }
    }

    pub fn locale(&self) -> Locale {
        *self.active.read()
    }

    pub fn translate(&self, key: &str) -> String {
        translate(self.locale(), key)
    }

    /// Switch the active locale, persisting the preference before returning.
    pub fn set_locale(&self, locale: Locale) {
        *self.active.write() = locale;
        self.prefs.store(locale.as_str());
    }

    /// String-tag variant: tags outside the supported set are rejected and
    /// the active locale stays unchanged.
    pub fn set_locale_tag(&self, tag: &str) -> Result<Locale, PortfolioError> {
        let locale = Locale::from_tag(tag)
            .ok_or_else(|| PortfolioError::UnsupportedLocale(tag.to_string()))?;
        self.set_locale(locale);
        Ok(locale)
    }
}
