//! Memopad: a self-hosted memo service with LLM summaries
//!
//! An HTML-first memo application: memos live in a workspace-scoped store,
//! and an optional language-model integration generates per-memo summaries
//! on demand or in the background.
//!
//! # Architecture
//!
//! - **Server**: Axum-based HTTP server rendering Leptos SSR pages, with
//!   HTMX-driven fragment updates
//! - **Stores**: in-memory memo and workspace-setting stores behind typed
//!   handles
//! - **LLM**: a thin driver over an Ollama-style generate endpoint,
//!   configured through the workspace LLM setting
//! - **Summarizer**: request-scoped summary generation plus a periodic
//!   background sweep over unsummarized memos
//!
//! # Modules
//!
//! - [`store`]: memo and workspace-setting stores
//! - [`llm`]: generate-endpoint driver
//! - [`summarizer`]: summary generation service
//! - [`ui`]: Leptos SSR components and pages

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::default_trait_access)]
#![allow(clippy::unused_async)]

pub mod config;
pub mod llm;
pub mod server;
pub mod store;
pub mod summarizer;
pub mod ui;

use std::sync::Arc;

use crate::config::AppConfig;
use store::memo::MemoStore;
use store::setting::SettingStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Memo store.
    pub memos: MemoStore,
    /// Workspace settings store.
    pub settings: Arc<dyn SettingStore>,
    /// Global Configuration
    pub config: Arc<AppConfig>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("memos", &self.memos)
            .field("config", &self.config)
            .finish()
    }
}
