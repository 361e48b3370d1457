//! Locale resolution and persistence through the public API, including the
//! file-backed preference store.

use std::sync::Arc;

use atelier::i18n::{resolve, I18n, Locale};
use atelier::prefs::{FilePrefs, LocalePrefs, MemoryPrefs};

#[test]
fn stored_preference_survives_sessions_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");

    // First session: no preference yet, user switches to Russian.
    let i18n = I18n::new(Arc::new(FilePrefs::at_path(&path)));
    assert_eq!(i18n.locale(), Locale::Uz);
    i18n.set_locale_tag("ru").unwrap();
    assert_eq!(i18n.translate("portfolio"), "Портфолио");

    // Second session resolves straight to the persisted choice.
    let i18n = I18n::new(Arc::new(FilePrefs::at_path(&path)));
    assert_eq!(i18n.locale(), Locale::Ru);
}

#[test]
fn resolution_precedence_is_stored_then_environment_then_default() {
    // Stored preference beats the environment signal.
    let prefs = MemoryPrefs::with_stored("uz").system_tag("en-US");
    assert_eq!(resolve(&prefs), Locale::Uz);

    // Without a stored value the environment's primary subtag decides,
    // but only for the two non-default locales.
    assert_eq!(resolve(&MemoryPrefs::new().system_tag("en-GB")), Locale::En);
    assert_eq!(resolve(&MemoryPrefs::new().system_tag("uz-UZ")), Locale::Uz);
    assert_eq!(resolve(&MemoryPrefs::new().system_tag("tr-TR")), Locale::Uz);

    // No signals at all: the default.
    assert_eq!(resolve(&MemoryPrefs::new()), Locale::Uz);
}

#[test]
fn rejected_tag_does_not_clobber_the_stored_preference() {
    let prefs = Arc::new(MemoryPrefs::with_stored("en"));
    let i18n = I18n::new(prefs.clone());
    assert_eq!(i18n.locale(), Locale::En);

    assert!(i18n.set_locale_tag("de").is_err());
    assert_eq!(i18n.locale(), Locale::En);
    assert_eq!(prefs.load().as_deref(), Some("en"));
}
