//! Edit-buffer model for the LLM settings form.
//!
//! The form keeps two slots: `draft` is what the user is editing, and
//! `committed` is the last value confirmed by the store. A save writes the
//! whole draft as one record; on success both slots take the echoed value,
//! on failure the draft is left exactly as the user had it.

use crate::store::StoreError;
use crate::store::setting::{
    SettingStore, WorkspaceLlmSetting, WorkspaceSetting, WorkspaceSettingKey,
};

/// Fields of the LLM settings form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmField {
    /// Master switch.
    Enabled,
    /// Generate endpoint URL.
    Endpoint,
    /// Model identifier.
    Model,
    /// Prompt template.
    Prompt,
}

impl LlmField {
    /// All form fields.
    pub const ALL: [Self; 4] = [Self::Enabled, Self::Endpoint, Self::Model, Self::Prompt];

    /// Form input name for this field.
    #[must_use]
    pub fn input_name(self) -> &'static str {
        match self {
            Self::Enabled => "enabled",
            Self::Endpoint => "endpoint",
            Self::Model => "model",
            Self::Prompt => "prompt",
        }
    }

    /// DOM id of this field's control.
    #[must_use]
    pub fn input_id(self) -> &'static str {
        match self {
            Self::Enabled => "llm-field-enabled",
            Self::Endpoint => "llm-field-endpoint",
            Self::Model => "llm-field-model",
            Self::Prompt => "llm-field-prompt",
        }
    }

    /// When a change to this field persists.
    #[must_use]
    pub fn save_policy(self) -> SavePolicy {
        match self {
            Self::Enabled => SavePolicy::Auto,
            Self::Endpoint | Self::Model | Self::Prompt => SavePolicy::Manual,
        }
    }
}

/// Whether a field persists on change or on explicit save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SavePolicy {
    /// Persists immediately when the control changes.
    Auto,
    /// Persists only on an explicit save action.
    Manual,
}

/// Two-slot edit buffer over the workspace LLM setting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LlmSettingsForm {
    draft: WorkspaceLlmSetting,
    committed: WorkspaceLlmSetting,
}

impl LlmSettingsForm {
    /// Seed both slots from the store's normalized record.
    #[must_use]
    pub fn load(store: &dyn SettingStore) -> Self {
        let setting = store.llm_setting();
        Self {
            draft: setting.clone(),
            committed: setting,
        }
    }

    /// Build a form whose draft differs from the committed record, as when a
    /// submitted form body arrives over the wire.
    #[must_use]
    pub fn with_draft(store: &dyn SettingStore, draft: WorkspaceLlmSetting) -> Self {
        Self {
            draft,
            committed: store.llm_setting(),
        }
    }

    /// The user's edit buffer.
    #[must_use]
    pub fn draft(&self) -> &WorkspaceLlmSetting {
        &self.draft
    }

    /// The last store-confirmed record.
    #[must_use]
    pub fn committed(&self) -> &WorkspaceLlmSetting {
        &self.committed
    }

    /// Whether the draft has unsaved edits.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.draft != self.committed
    }

    /// Edit the endpoint in the draft only.
    pub fn set_endpoint(&mut self, value: impl Into<String>) {
        self.draft.endpoint = value.into();
    }

    /// Edit the model in the draft only.
    pub fn set_model(&mut self, value: impl Into<String>) {
        self.draft.model = value.into();
    }

    /// Edit the prompt template in the draft only.
    pub fn set_prompt(&mut self, value: impl Into<String>) {
        self.draft.prompt = value.into();
    }

    /// Flip the enabled switch and persist immediately.
    ///
    /// The one auto-saving field: no separate save step.
    pub fn toggle_enabled(&mut self, store: &dyn SettingStore) -> Result<(), StoreError> {
        self.draft.enabled = !self.draft.enabled;
        self.save(store)
    }

    /// Persist the full draft as one record.
    ///
    /// On success both slots take the value echoed by the store. On failure
    /// the draft keeps the user's edits; nothing is rolled back.
    pub fn save(&mut self, store: &dyn SettingStore) -> Result<(), StoreError> {
        let written = store.set(
            &WorkspaceSettingKey::Llm.setting_name(),
            WorkspaceSetting::Llm(self.draft.clone()),
        )?;
        if let WorkspaceSetting::Llm(setting) = written {
            self.draft = setting.clone();
            self.committed = setting;
        }
        Ok(())
    }

    /// HTMX trigger spec for the form, derived from the save policies:
    /// explicit submits plus a `change` listener per auto-saving control.
    #[must_use]
    pub fn form_trigger() -> String {
        let mut trigger = String::from("submit");
        for field in LlmField::ALL {
            if field.save_policy() == SavePolicy::Auto {
                trigger.push_str(&format!(", change from:#{}", field.input_id()));
            }
        }
        trigger
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::setting::InMemorySettingStore;

    /// Store whose writes always fail.
    struct FailingStore;

    impl SettingStore for FailingStore {
        fn get(&self, _key: WorkspaceSettingKey) -> Option<WorkspaceSetting> {
            None
        }

        fn set(
            &self,
            name: &str,
            _setting: WorkspaceSetting,
        ) -> Result<WorkspaceSetting, StoreError> {
            Err(StoreError::NotFound(name.to_string()))
        }
    }

    #[test]
    fn test_load_normalizes_absent_record() {
        let store = InMemorySettingStore::new();
        let form = LlmSettingsForm::load(&store);
        assert_eq!(*form.draft(), WorkspaceLlmSetting::default());
        assert!(!form.is_dirty());
    }

    #[test]
    fn test_endpoint_roundtrip_preserves_other_fields() {
        let store = InMemorySettingStore::new();
        store
            .set(
                &WorkspaceSettingKey::Llm.setting_name(),
                WorkspaceSetting::Llm(WorkspaceLlmSetting {
                    enabled: true,
                    endpoint: String::new(),
                    model: "llama3".to_string(),
                    prompt: "tpl {CONTENT}".to_string(),
                }),
            )
            .unwrap();

        let mut form = LlmSettingsForm::load(&store);
        form.set_endpoint("http://x");
        assert!(form.is_dirty());
        form.save(&store).unwrap();
        assert!(!form.is_dirty());

        let stored = store.llm_setting();
        assert_eq!(stored.endpoint, "http://x");
        assert!(stored.enabled);
        assert_eq!(stored.model, "llama3");
        assert_eq!(stored.prompt, "tpl {CONTENT}");
    }

    #[test]
    fn test_toggle_persists_without_explicit_save() {
        let store = InMemorySettingStore::new();
        let mut form = LlmSettingsForm::load(&store);
        assert!(!form.draft().enabled);

        form.toggle_enabled(&store).unwrap();

        // The backend-held record reflects the flip with no save() call.
        let stored = store.llm_setting();
        assert!(stored.enabled);
        assert_eq!(stored.endpoint, "");
        assert_eq!(stored.model, "");
        assert_eq!(stored.prompt, "");
        assert!(form.draft().enabled);
        assert!(!form.is_dirty());
    }

    #[test]
    fn test_text_edits_do_not_touch_store() {
        let store = InMemorySettingStore::new();
        let mut form = LlmSettingsForm::load(&store);
        form.set_endpoint("http://x");
        form.set_model("llama3");
        form.set_prompt("p");

        assert!(store.get(WorkspaceSettingKey::Llm).is_none());
        assert!(form.is_dirty());
    }

    #[test]
    fn test_failed_save_leaves_draft_untouched() {
        let store = FailingStore;
        let mut form = LlmSettingsForm::load(&store);
        form.set_endpoint("http://kept");

        assert!(form.save(&store).is_err());
        assert_eq!(form.draft().endpoint, "http://kept");
        assert_eq!(form.committed().endpoint, "");
        assert!(form.is_dirty());
    }

    #[test]
    fn test_save_policy_table() {
        assert_eq!(LlmField::Enabled.save_policy(), SavePolicy::Auto);
        assert_eq!(LlmField::Endpoint.save_policy(), SavePolicy::Manual);
        assert_eq!(LlmField::Model.save_policy(), SavePolicy::Manual);
        assert_eq!(LlmField::Prompt.save_policy(), SavePolicy::Manual);
    }

    #[test]
    fn test_form_trigger_lists_auto_fields_only() {
        assert_eq!(
            LlmSettingsForm::form_trigger(),
            "submit, change from:#llm-field-enabled"
        );
    }
}
