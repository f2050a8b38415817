//! Workspace settings UI.
//!
//! - [`form`]: edit-buffer model for the LLM settings form
//! - [`LlmSection`]: the rendered settings section

pub mod form;
mod llm_section;

pub use form::{LlmField, LlmSettingsForm, SavePolicy};
pub use llm_section::LlmSection;
