//! Summary generation over the workspace LLM setting.
//!
//! A [`Summarizer`] is built per use from the current workspace setting, so
//! enabling, disabling, or re-pointing the integration takes effect without
//! a restart. Summaries are persisted through [`MemoStore::set_summary`] and
//! surface to readers only via subsequent store reads; there is no
//! optimistic update anywhere.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, info, warn};

use crate::llm::{GenerateDriver, LlmDriver, LlmSettings, validate_endpoint};
use crate::store::memo::MemoStore;
use crate::store::setting::SettingStore;

/// Prompt template used when the workspace setting leaves one blank.
pub const DEFAULT_PROMPT_TEMPLATE: &str = "Summarize the content below:\n{CONTENT}";

/// Placeholder substituted with the memo body.
pub const CONTENT_PLACEHOLDER: &str = "{CONTENT}";

/// Generates and persists memo summaries.
pub struct Summarizer {
    memos: MemoStore,
    driver: Arc<dyn LlmDriver>,
    prompt_tpl: String,
}

impl std::fmt::Debug for Summarizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Summarizer")
            .field("prompt_tpl", &self.prompt_tpl)
            .finish()
    }
}

impl Summarizer {
    /// Create a summarizer over an explicit driver.
    ///
    /// A blank template falls back to [`DEFAULT_PROMPT_TEMPLATE`].
    #[must_use]
    pub fn new(memos: MemoStore, driver: Arc<dyn LlmDriver>, prompt_tpl: impl Into<String>) -> Self {
        let prompt_tpl = prompt_tpl.into();
        let prompt_tpl = if prompt_tpl.trim().is_empty() {
            DEFAULT_PROMPT_TEMPLATE.to_string()
        } else {
            prompt_tpl
        };
        Self {
            memos,
            driver,
            prompt_tpl,
        }
    }

    /// Build a summarizer from the current workspace LLM setting.
    ///
    /// Returns `Ok(None)` when the integration is disabled or unconfigured.
    ///
    /// # Errors
    ///
    /// Fails when the feature is enabled but endpoint or model is blank, or
    /// the endpoint is not an http(s) URL.
    pub fn from_workspace(
        settings: &dyn SettingStore,
        memos: MemoStore,
    ) -> anyhow::Result<Option<Self>> {
        let setting = settings.llm_setting();
        if !setting.enabled {
            return Ok(None);
        }
        if setting.endpoint.is_empty() || setting.model.is_empty() {
            anyhow::bail!("LLM endpoint or model not set");
        }
        validate_endpoint(&setting.endpoint)?;

        let driver = GenerateDriver::new(LlmSettings {
            endpoint: setting.endpoint,
            model: setting.model,
        });
        Ok(Some(Self::new(memos, Arc::new(driver), setting.prompt)))
    }

    /// Render the prompt for a memo body.
    ///
    /// Only the first placeholder occurrence is substituted.
    #[must_use]
    pub fn render_prompt(&self, content: &str) -> String {
        self.prompt_tpl.replacen(CONTENT_PLACEHOLDER, content, 1)
    }

    /// Generate a summary for one memo and persist it.
    ///
    /// # Errors
    ///
    /// Fails when the memo does not exist or the driver call fails; in both
    /// cases the stored summary is left untouched.
    pub async fn create_summary(&self, name: &str) -> anyhow::Result<String> {
        let memo = self
            .memos
            .get(name)
            .ok_or_else(|| anyhow::anyhow!("memo not found: {name}"))?;

        let prompt = self.render_prompt(&memo.content);
        let summary = self.driver.generate(&prompt).await?;
        self.memos.set_summary(name, &summary)?;

        info!(
            name: "summary.created",
            memo = %name,
            chars = summary.len(),
            "Summary generated"
        );
        Ok(summary)
    }

    /// Sweep all memos, generating summaries for those without one.
    ///
    /// Memos that already carry a summary are skipped. The sweep stops on
    /// the first driver failure; the next tick retries from scratch.
    pub async fn summarize_all(&self) {
        for memo in self.memos.list() {
            if memo.has_summary() {
                continue;
            }
            if let Err(e) = self.create_summary(&memo.name).await {
                error!(memo = %memo.name, error = ?e, "Failed to create summary");
                return;
            }
        }
    }
}

/// Whether the workspace LLM integration is enabled and usable.
#[must_use]
pub fn is_llm_enabled(settings: &dyn SettingStore) -> bool {
    let setting = settings.llm_setting();
    setting.enabled && !setting.endpoint.is_empty() && !setting.model.is_empty()
}

/// Run the periodic background sweep.
///
/// The first sweep runs immediately, then once per `interval`. The workspace
/// setting is re-read on every tick.
pub async fn run_periodic(
    settings: Arc<dyn SettingStore>,
    memos: MemoStore,
    interval: Duration,
) {
    info!(
        name: "summarizer.started",
        interval_secs = interval.as_secs(),
        "Background summarizer started"
    );

    let mut ticker = tokio::time::interval(interval);
    loop {
        ticker.tick().await;
        match Summarizer::from_workspace(&*settings, memos.clone()) {
            Ok(Some(summarizer)) => summarizer.summarize_all().await,
            Ok(None) => debug!("Summarizer idle, LLM features disabled"),
            Err(e) => warn!(error = ?e, "Summary sweep skipped"),
        }
    }
}
