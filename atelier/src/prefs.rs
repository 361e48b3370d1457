//! Locale preference persistence.
//!
//! The ambient surface is one stored string plus a read-only system language
//! signal. `FilePrefs` keeps the stored value in a JSON settings file under
//! the user config directory; `MemoryPrefs` backs tests and embedded use.

use std::fs;
use std::path::PathBuf;

use parking_lot::Mutex;

const APP_DIR: &str = "atelier";
const SETTINGS_FILE: &str = "settings.json";
const LANGUAGE_FIELD: &str = "language";

/// Key-value persistence surface for the locale preference plus the
/// environment's preferred-language signal.
pub trait LocalePrefs: Send + Sync {
    /// The persisted locale tag, if any. Read once at session start.
    fn load(&self) -> Option<String>;
    /// Persist a new tag. Best-effort: failures are logged, not returned.
    fn store(&self, tag: &str);
    /// The environment's preferred language tag, if exposed.
    fn system_language_tag(&self) -> Option<String>;
}

/// In-memory preference surface for tests and embedded sessions.
#[derive(Default)]
pub struct MemoryPrefs {
    stored: Mutex<Option<String>>,
    system: Option<String>,
}

impl MemoryPrefs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stored(tag: impl Into<String>) -> Self {
        Self {
            stored: Mutex::new(Some(tag.into())),
            system: None,
        }
    }

    /// Builder: pretend the environment reports this language tag.
    pub fn system_tag(mut self, tag: impl Into<String>) -> Self {
        self.system = Some(tag.into());
        self
    }
}

impl LocalePrefs for MemoryPrefs {
    fn load(&self) -> Option<String> {
        self.stored.lock().clone()
    }

    fn store(&self, tag: &str) {
        *self.stored.lock() = Some(tag.to_string());
    }

    fn system_language_tag(&self) -> Option<String> {
        self.system.clone()
    }
}

/// File-backed preference surface: a JSON settings document in the user
/// config directory. Unrelated fields in the document are preserved on write.
pub struct FilePrefs {
    path: Option<PathBuf>,
}

impl FilePrefs {
    pub fn new() -> Self {
        Self {
            path: dirs::config_dir().map(|p| p.join(APP_DIR).join(SETTINGS_FILE)),
        }
    }

    /// Use an explicit settings path (tests, portable installs).
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    fn read_document(&self) -> Option<serde_json::Value> {
        let path = self.path.as_ref()?;
        let content = fs::read_to_string(path).ok()?;
        serde_json::from_str(&content).ok()
    }
}

impl Default for FilePrefs {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalePrefs for FilePrefs {
    fn load(&self) -> Option<String> {
        self.read_document()?
            .get(LANGUAGE_FIELD)
            .and_then(|v| v.as_str())
            .map(str::to_string)
    }

    fn store(&self, tag: &str) {
        let Some(path) = self.path.as_ref() else {
            tracing::warn!("no config directory available; locale preference not persisted");
            return;
        };
        let mut document = self
            .read_document()
            .filter(serde_json::Value::is_object)
            .unwrap_or_else(|| serde_json::json!({}));
        document[LANGUAGE_FIELD] = serde_json::Value::String(tag.to_string());

        let result = path
            .parent()
            .map(fs::create_dir_all)
            .unwrap_or(Ok(()))
            .and_then(|_| {
                let content =
                    serde_json::to_string_pretty(&document).map_err(std::io::Error::from)?;
                fs::write(path, content)
            });
        if let Err(e) = result {
            tracing::warn!(error = %e, path = %path.display(), "failed to persist locale preference");
        }
    }

    fn system_language_tag(&self) -> Option<String> {
        std::env::var("LC_ALL")
            .ok()
            .filter(|v| !v.is_empty())
            .or_else(|| std::env::var("LANG").ok().filter(|v| !v.is_empty()))
    }
}
