//! Memo records and their in-memory store.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::StoreError;

/// Resource-name prefix for memos.
pub const MEMO_NAME_PREFIX: &str = "memos/";

/// A single memo record.
///
/// `summary` is the LLM-generated digest of `content`; the empty string
/// means "no summary yet". Summaries are only ever written through
/// [`MemoStore::set_summary`]; the UI never computes them locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Memo {
    /// Resource name, `memos/{id}`.
    pub name: String,
    /// Memo body as entered by the user.
    pub content: String,
    /// Generated summary, empty until first generation.
    #[serde(default)]
    pub summary: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last modification time (content or summary).
    pub updated_at: DateTime<Utc>,
}

impl Memo {
    /// The id portion of the resource name.
    #[must_use]
    pub fn id(&self) -> &str {
        self.name.strip_prefix(MEMO_NAME_PREFIX).unwrap_or(&self.name)
    }

    /// Whether a summary has been generated for this memo.
    #[must_use]
    pub fn has_summary(&self) -> bool {
        !self.summary.is_empty()
    }
}

/// Build a full memo resource name from an id.
#[must_use]
pub fn memo_name(id: &str) -> String {
    format!("{MEMO_NAME_PREFIX}{id}")
}

fn validate_name(name: &str) -> Result<(), StoreError> {
    match name.strip_prefix(MEMO_NAME_PREFIX) {
        Some(id) if !id.is_empty() && !id.contains('/') => Ok(()),
        _ => Err(StoreError::InvalidName(name.to_string())),
    }
}

/// Thread-safe in-memory store for memos.
#[derive(Debug, Clone)]
pub struct MemoStore {
    inner: Arc<MemoStoreInner>,
}

#[derive(Debug)]
struct MemoStoreInner {
    memos: RwLock<HashMap<String, Memo>>,
}

impl Default for MemoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(MemoStoreInner {
                memos: RwLock::new(HashMap::new()),
            }),
        }
    }

    /// Create a new memo with the given content and return it.
    #[must_use]
    pub fn create(&self, content: impl Into<String>) -> Memo {
        let now = Utc::now();
        let memo = Memo {
            name: memo_name(&Uuid::new_v4().simple().to_string()),
            content: content.into(),
            summary: String::new(),
            created_at: now,
            updated_at: now,
        };
        let mut guard = self.inner.memos.write().unwrap();
        guard.insert(memo.name.clone(), memo.clone());
        memo
    }

    /// Get a memo by resource name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Memo> {
        let guard = self.inner.memos.read().unwrap();
        guard.get(name).cloned()
    }

    /// List all memos, newest first.
    #[must_use]
    pub fn list(&self) -> Vec<Memo> {
        let guard = self.inner.memos.read().unwrap();
        let mut memos: Vec<Memo> = guard.values().cloned().collect();
        memos.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        memos
    }

    /// Replace a memo's content, bumping its update time.
    pub fn update_content(
        &self,
        name: &str,
        content: impl Into<String>,
    ) -> Result<Memo, StoreError> {
        validate_name(name)?;
        let mut guard = self.inner.memos.write().unwrap();
        let memo = guard
            .get_mut(name)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))?;
        memo.content = content.into();
        memo.updated_at = Utc::now();
        Ok(memo.clone())
    }

    /// Set a memo's summary, bumping its update time.
    ///
    /// This is the only write path for summaries.
    pub fn set_summary(
        &self,
        name: &str,
        summary: impl Into<String>,
    ) -> Result<Memo, StoreError> {
        validate_name(name)?;
        let mut guard = self.inner.memos.write().unwrap();
        let memo = guard
            .get_mut(name)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))?;
        memo.summary = summary.into();
        memo.updated_at = Utc::now();
        Ok(memo.clone())
    }

    /// Remove a memo by resource name.
    pub fn remove(&self, name: &str) -> Option<Memo> {
        let mut guard = self.inner.memos.write().unwrap();
        guard.remove(name)
    }

    /// Number of memos in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.memos.read().unwrap().len()
    }

    /// Whether the store holds no memos.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memo_lifecycle() {
        let store = MemoStore::new();
        assert!(store.is_empty());

        let memo = store.create("groceries: milk, eggs");
        assert!(memo.name.starts_with(MEMO_NAME_PREFIX));
        assert_eq!(memo.summary, "");
        assert!(!memo.has_summary());
        assert_eq!(store.len(), 1);

        let fetched = store.get(&memo.name).unwrap();
        assert_eq!(fetched.content, "groceries: milk, eggs");

        store.remove(&memo.name);
        assert!(store.is_empty());
    }

    #[test]
    fn test_set_summary() {
        let store = MemoStore::new();
        let memo = store.create("a long meeting transcript");

        let updated = store.set_summary(&memo.name, "Short meeting recap").unwrap();
        assert_eq!(updated.summary, "Short meeting recap");
        assert!(updated.has_summary());
        assert!(updated.updated_at >= memo.updated_at);

        // Subsequent reads reflect the new value.
        assert_eq!(store.get(&memo.name).unwrap().summary, "Short meeting recap");
    }

    #[test]
    fn test_update_content_keeps_summary() {
        let store = MemoStore::new();
        let memo = store.create("draft");
        store.set_summary(&memo.name, "digest").unwrap();

        let updated = store.update_content(&memo.name, "draft, revised").unwrap();
        assert_eq!(updated.content, "draft, revised");
        assert_eq!(updated.summary, "digest");
    }

    #[test]
    fn test_set_summary_unknown_memo() {
        let store = MemoStore::new();
        let err = store.set_summary("memos/missing", "x").unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[test]
    fn test_invalid_names_rejected() {
        let store = MemoStore::new();
        assert!(matches!(
            store.set_summary("notes/abc", "x"),
            Err(StoreError::InvalidName(_))
        ));
        assert!(matches!(
            store.set_summary("memos/", "x"),
            Err(StoreError::InvalidName(_))
        ));
    }

    #[test]
    fn test_list_newest_first() {
        let store = MemoStore::new();
        let first = store.create("first");
        let second = store.create("second");

        let listed = store.list();
        assert_eq!(listed.len(), 2);
        // created_at resolution can tie; accept either order then, but the
        // later insert must not sort before an earlier one.
        if listed[0].created_at != listed[1].created_at {
            assert_eq!(listed[0].name, second.name);
            assert_eq!(listed[1].name, first.name);
        }
    }
}
