use std::{collections::HashMap, time::Duration};

use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use serde_json::Value;

pub(crate) const SETTINGS_SECTION_KEY: &str = "navLens";
pub(crate) const DEFAULT_LANGUAGE_ID: &str = "go";
const DEFAULT_REFRESH_DEBOUNCE_MS: u64 = 120;

/// Feature toggles and timing parameters, read from the client's
/// `initializationOptions` and `workspace/didChangeConfiguration` payloads.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerSettings {
    pub enable_overlay_actions: bool,
    pub enable_hover_overlay: bool,
    pub log_level: LogLevel,
    pub refresh_on_edit: bool,
    pub refresh_debounce_ms: u64,
    /// Language id (as sent in `didOpen`) the overlays are offered for.
    pub language_id: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            enable_overlay_actions: true,
            enable_hover_overlay: true,
            log_level: LogLevel::Info,
            refresh_on_edit: true,
            refresh_debounce_ms: DEFAULT_REFRESH_DEBOUNCE_MS,
            language_id: DEFAULT_LANGUAGE_ID.to_string(),
        }
    }
}

impl ServerSettings {
    pub fn from_lsp_payload(payload: Option<&Value>) -> Self {
        let mut settings = Self::default();
        if let Some(payload) = payload {
            settings = settings.merged_with_payload(payload);
        }
        settings
    }

    /// Apply the keys present in `payload` on top of `self`. The payload may
    /// hold the keys directly or under the `navLens` section.
    pub fn merged_with_payload(
        &self,
        payload: &Value,
    ) -> Self {
        let mut merged = self.clone();

        for candidate in payload_candidates(payload) {
            if let Ok(patch) = serde_json::from_value::<ServerSettingsPatch>(candidate.clone()) {
                merged.apply_patch(patch);
            }
        }

        merged.normalize();
        merged
    }

    pub fn refresh_debounce(&self) -> Duration {
        Duration::from_millis(self.refresh_debounce_ms)
    }

    fn apply_patch(
        &mut self,
        patch: ServerSettingsPatch,
    ) {
        if let Some(enabled) = patch.enable_overlay_actions {
            self.enable_overlay_actions = enabled;
        }
        if let Some(enabled) = patch.enable_hover_overlay {
            self.enable_hover_overlay = enabled;
        }
        if let Some(level) = patch.log_level {
            self.log_level = level;
        }
        if let Some(refresh_on_edit) = patch.refresh_on_edit {
            self.refresh_on_edit = refresh_on_edit;
        }
        if let Some(debounce_ms) = patch.refresh_debounce_ms {
            self.refresh_debounce_ms = debounce_ms;
        }
        if let Some(language_id) = patch.language_id {
            self.language_id = language_id;
        }
    }

    fn normalize(&mut self) {
        self.language_id = self.language_id.trim().to_string();
        if self.language_id.is_empty() {
            self.language_id = DEFAULT_LANGUAGE_ID.to_string();
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        }
    }

    pub fn allows_info(self) -> bool {
        self >= LogLevel::Info
    }
}

// Every key is read on its own, so one malformed value only drops that key.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct ServerSettingsPatch {
    #[serde(deserialize_with = "lenient")]
    enable_overlay_actions: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    enable_hover_overlay: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    log_level: Option<LogLevel>,
    #[serde(deserialize_with = "lenient")]
    refresh_on_edit: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    refresh_debounce_ms: Option<u64>,
    #[serde(deserialize_with = "lenient")]
    language_id: Option<String>,
    #[serde(flatten)]
    _extra: HashMap<String, Value>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

fn payload_candidates(payload: &Value) -> Vec<Value> {
    let mut candidates = Vec::new();
    candidates.push(payload.clone());

    if let Some(scoped) = payload.get(SETTINGS_SECTION_KEY) {
        candidates.push(scoped.clone());
    }

    candidates
}

#[cfg(test)]
#[path = "../../tests/src/server/settings_tests.rs"]
mod tests;
