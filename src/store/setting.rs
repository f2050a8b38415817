//! Workspace-scoped settings, keyed by setting type.
//!
//! Settings are singleton records per key. Reads return whatever is stored;
//! callers normalize partial or absent records into complete defaults before
//! display (all record types implement `Default` and deserialize with
//! per-field defaults). Writes replace the entire record; there is no
//! field-level patch at this layer, even when the UI edits one field at a
//! time.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use super::StoreError;

/// Namespace prefix for fully-qualified setting names.
pub const SETTING_NAME_PREFIX: &str = "settings/";

/// Well-known workspace setting keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkspaceSettingKey {
    /// General workspace options.
    General,
    /// Language-model integration.
    Llm,
}

impl WorkspaceSettingKey {
    /// String form used in setting names and the JSON API.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::General => "GENERAL",
            Self::Llm => "LLM",
        }
    }

    /// Parse the string form.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "GENERAL" => Some(Self::General),
            "LLM" => Some(Self::Llm),
            _ => None,
        }
    }

    /// Fully-qualified setting name, e.g. `settings/LLM`.
    #[must_use]
    pub fn setting_name(self) -> String {
        format!("{SETTING_NAME_PREFIX}{}", self.as_str())
    }

    /// Resolve a fully-qualified setting name back to its key.
    pub fn from_name(name: &str) -> Result<Self, StoreError> {
        name.strip_prefix(SETTING_NAME_PREFIX)
            .and_then(Self::parse)
            .ok_or_else(|| StoreError::InvalidName(name.to_string()))
    }
}

impl std::fmt::Display for WorkspaceSettingKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// General workspace options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkspaceGeneralSetting {
    /// Display name of this workspace.
    pub instance_name: String,
    /// Hide memos from unauthenticated visitors.
    pub disallow_public_memos: bool,
}

/// Language-model integration options.
///
/// `prompt` is a template; `{CONTENT}` is substituted with the memo body at
/// generation time. Absent fields deserialize to empty/false, so a partially
/// stored record always presents as a complete structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkspaceLlmSetting {
    /// Master switch for LLM features.
    pub enabled: bool,
    /// Full URL of the generate endpoint.
    pub endpoint: String,
    /// Model identifier, e.g. `llama3`.
    pub model: String,
    /// Prompt template with a `{CONTENT}` placeholder.
    pub prompt: String,
}

/// A workspace setting record tagged by its key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkspaceSetting {
    /// General workspace options.
    #[serde(rename = "generalSetting")]
    General(WorkspaceGeneralSetting),
    /// Language-model integration options.
    #[serde(rename = "llmSetting")]
    Llm(WorkspaceLlmSetting),
}

impl WorkspaceSetting {
    /// The key this record is stored under.
    #[must_use]
    pub fn key(&self) -> WorkspaceSettingKey {
        match self {
            Self::General(_) => WorkspaceSettingKey::General,
            Self::Llm(_) => WorkspaceSettingKey::Llm,
        }
    }
}

/// Read/write capability over workspace settings.
///
/// Injected into everything that touches settings so tests can substitute a
/// fake (e.g. one whose writes fail).
pub trait SettingStore: Send + Sync {
    /// Read the record stored under `key`, if any.
    fn get(&self, key: WorkspaceSettingKey) -> Option<WorkspaceSetting>;

    /// Replace the record stored under the fully-qualified `name`.
    ///
    /// The name's key must match the record's key. Returns the stored record.
    fn set(&self, name: &str, setting: WorkspaceSetting) -> Result<WorkspaceSetting, StoreError>;

    /// The LLM setting normalized into a complete record.
    fn llm_setting(&self) -> WorkspaceLlmSetting {
        match self.get(WorkspaceSettingKey::Llm) {
            Some(WorkspaceSetting::Llm(s)) => s,
            _ => WorkspaceLlmSetting::default(),
        }
    }
}

/// In-memory [`SettingStore`].
#[derive(Debug, Clone)]
pub struct InMemorySettingStore {
    inner: Arc<RwLock<HashMap<WorkspaceSettingKey, WorkspaceSetting>>>,
}

impl Default for InMemorySettingStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemorySettingStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl SettingStore for InMemorySettingStore {
    fn get(&self, key: WorkspaceSettingKey) -> Option<WorkspaceSetting> {
        let guard = self.inner.read().unwrap();
        guard.get(&key).cloned()
    }

    fn set(&self, name: &str, setting: WorkspaceSetting) -> Result<WorkspaceSetting, StoreError> {
        let key = WorkspaceSettingKey::from_name(name)?;
        if key != setting.key() {
            return Err(StoreError::KeyMismatch {
                name: name.to_string(),
                key: setting.key().to_string(),
            });
        }
        let mut guard = self.inner.write().unwrap();
        guard.insert(key, setting.clone());
        Ok(setting)
    }
}
