//! Workspace stores.
//!
//! Two stores back the application: [`memo::MemoStore`] holds the memos
//! themselves, and [`setting::SettingStore`] holds keyed, workspace-scoped
//! configuration records. Both are in-memory and shared across handlers via
//! cheap clones.

pub mod memo;
pub mod setting;

pub use memo::{Memo, MemoStore};
pub use setting::{
    InMemorySettingStore, SettingStore, WorkspaceGeneralSetting, WorkspaceLlmSetting,
    WorkspaceSetting, WorkspaceSettingKey, SETTING_NAME_PREFIX,
};

/// Errors produced by store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No record exists under the given name.
    #[error("not found: {0}")]
    NotFound(String),
    /// The resource name is malformed.
    #[error("invalid name: {0}")]
    InvalidName(String),
    /// A setting write whose name does not match the record's key.
    #[error("setting name {name} does not match record key {key}")]
    KeyMismatch { name: String, key: String },
}
