use std::sync::Arc;

use axum_test::TestServer;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use memopad::AppState;
use memopad::config::AppConfig;
use memopad::server::build_router;
use memopad::store::memo::MemoStore;
use memopad::store::setting::{
    InMemorySettingStore, SettingStore, WorkspaceLlmSetting, WorkspaceSetting, WorkspaceSettingKey,
};

/// Build a test server plus direct handles to its stores.
fn test_app() -> (TestServer, MemoStore, InMemorySettingStore) {
    let config = AppConfig::load_from_args(["memopad"]).expect("defaults should load");
    let memos = MemoStore::new();
    let settings = InMemorySettingStore::new();

    let state = AppState {
        memos: memos.clone(),
        settings: Arc::new(settings.clone()),
        config: Arc::new(config),
    };

    let server = TestServer::new(build_router(state)).expect("router should build");
    (server, memos, settings)
}

/// Point the workspace LLM setting at a stub generate endpoint.
fn enable_llm(settings: &InMemorySettingStore, endpoint: &str) {
    settings
        .set(
            &WorkspaceSettingKey::Llm.setting_name(),
            WorkspaceSetting::Llm(WorkspaceLlmSetting {
                enabled: true,
                endpoint: endpoint.to_string(),
                model: "llama3".to_string(),
                prompt: String::new(),
            }),
        )
        .expect("setting write should succeed");
}

// ─────────────────────────────────────────────────────────────────────────────
// Pages
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_home_page_renders_composer_and_memos() {
    let (server, memos, _) = test_app();
    memos.create("remember the milk");

    let res = server.get("/").await;
    res.assert_status_ok();

    let html = res.text();
    assert!(html.contains("Memopad"));
    assert!(html.contains("Any thoughts..."));
    assert!(html.contains("remember the milk"));
}

#[tokio::test]
async fn test_memo_page_empty_summary_shows_generate_now() {
    let (server, memos, _) = test_app();
    let memo = memos.create("a memo without a summary");

    let res = server.get(&format!("/memos/{}", memo.id())).await;
    res.assert_status_ok();

    let html = res.text();
    assert!(html.contains("Generate Now"));
    assert!(!html.contains("Regenerate"));
}

#[tokio::test]
async fn test_memo_page_existing_summary_shows_regenerate() {
    let (server, memos, _) = test_app();
    let memo = memos.create("a memo");
    memos.set_summary(&memo.name, "Already summarized.").unwrap();

    let res = server.get(&format!("/memos/{}", memo.id())).await;
    res.assert_status_ok();

    let html = res.text();
    assert!(html.contains("Summary:"));
    assert!(html.contains("Already summarized."));
    assert!(html.contains("Regenerate"));
}

#[tokio::test]
async fn test_unknown_memo_page_is_404() {
    let (server, _, _) = test_app();
    let res = server.get("/memos/does-not-exist").await;
    res.assert_status_not_found();
}

// ─────────────────────────────────────────────────────────────────────────────
// Memo creation
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_memo_returns_card_fragment() {
    let (server, memos, _) = test_app();

    let res = server
        .post("/memos")
        .form(&[("content", "fresh thought")])
        .await;
    res.assert_status_ok();
    assert!(res.text().contains("fresh thought"));

    let listed = memos.list();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].content, "fresh thought");
    assert_eq!(listed[0].summary, "");
}

#[tokio::test]
async fn test_create_blank_memo_rejected() {
    let (server, memos, _) = test_app();

    let res = server.post("/memos").form(&[("content", "   ")]).await;
    res.assert_status_bad_request();
    assert!(memos.is_empty());
}

// ─────────────────────────────────────────────────────────────────────────────
// Settings
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_settings_page_defaults_hide_llm_fields() {
    let (server, _, _) = test_app();

    let res = server.get("/settings").await;
    res.assert_status_ok();

    let html = res.text();
    assert!(html.contains("Enable LLM Features"));
    assert!(!html.contains("LLM Endpoint URL"));
}

#[tokio::test]
async fn test_toggle_persists_immediately_and_reveals_fields() {
    let (server, _, settings) = test_app();

    // The auto-save toggle posts the full record with only `enabled` flipped.
    let res = server
        .post("/settings/llm")
        .form(&[
            ("enabled", "true"),
            ("endpoint", ""),
            ("model", ""),
            ("prompt", ""),
        ])
        .await;
    res.assert_status_ok();

    // Backend-held record reflects the flip with no explicit save.
    let stored = settings.llm_setting();
    assert!(stored.enabled);
    assert_eq!(stored.endpoint, "");
    assert_eq!(stored.model, "");
    assert_eq!(stored.prompt, "");

    // The re-rendered section now shows the previously hidden controls.
    let html = res.text();
    assert!(html.contains("LLM Endpoint URL"));
    assert!(html.contains("Model"));
    assert!(html.contains("Prompt"));
}

#[tokio::test]
async fn test_save_roundtrip_preserves_other_fields() {
    let (server, _, settings) = test_app();
    enable_llm(&settings, "http://old.example/api/generate");

    let res = server
        .post("/settings/llm")
        .form(&[
            ("enabled", "true"),
            ("endpoint", "http://x"),
            ("model", "llama3"),
            ("prompt", ""),
        ])
        .await;
    res.assert_status_ok();

    let stored = settings.llm_setting();
    assert_eq!(stored.endpoint, "http://x");
    assert!(stored.enabled);
    assert_eq!(stored.model, "llama3");
    assert_eq!(stored.prompt, "");

    // The JSON read endpoint echoes the normalized record.
    let api = server.get("/api/settings/LLM").await;
    api.assert_status_ok();
    let value: serde_json::Value = api.json();
    assert_eq!(value["name"], "settings/LLM");
    assert_eq!(value["llmSetting"]["endpoint"], "http://x");
}

#[tokio::test]
async fn test_disable_keeps_buffered_field_values() {
    let (server, _, settings) = test_app();
    enable_llm(&settings, "http://keep.example/api/generate");

    // Toggling off posts the full record, values included.
    let res = server
        .post("/settings/llm")
        .form(&[
            ("endpoint", "http://keep.example/api/generate"),
            ("model", "llama3"),
            ("prompt", ""),
        ])
        .await;
    res.assert_status_ok();

    let stored = settings.llm_setting();
    assert!(!stored.enabled);
    assert_eq!(stored.endpoint, "http://keep.example/api/generate");
    assert_eq!(stored.model, "llama3");

    // Hidden inputs keep the values in the DOM for the next toggle.
    assert!(res.text().contains("http://keep.example/api/generate"));
}

#[tokio::test]
async fn test_unknown_setting_key_is_404() {
    let (server, _, _) = test_app();
    let res = server.get("/api/settings/NOPE").await;
    res.assert_status_not_found();
}

// ─────────────────────────────────────────────────────────────────────────────
// Summary generation
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_generate_summary_success_updates_store() {
    let (server, memos, settings) = test_app();
    let mock = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .and(body_partial_json(serde_json::json!({
            "model": "llama3",
            "stream": false,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "response": "A crisp summary.",
        })))
        .expect(1)
        .mount(&mock)
        .await;

    enable_llm(&settings, &format!("{}/api/generate", mock.uri()));
    let memo = memos.create("a very long memo body");
    assert_eq!(memo.summary, "");

    let res = server
        .post(&format!("/memos/{}/summary", memo.id()))
        .await;
    res.assert_status_ok();

    // Fragment shows the populated branch.
    let html = res.text();
    assert!(html.contains("A crisp summary."));
    assert!(html.contains("Regenerate"));

    // Subsequent store reads reflect the new value.
    assert_eq!(memos.get(&memo.name).unwrap().summary, "A crisp summary.");
}

#[tokio::test]
async fn test_generate_summary_failure_is_silent_noop() {
    let (server, memos, settings) = test_app();
    let mock = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock)
        .await;

    enable_llm(&settings, &format!("{}/api/generate", mock.uri()));
    let memo = memos.create("a memo");

    let res = server
        .post(&format!("/memos/{}/summary", memo.id()))
        .await;

    // No error surfaces: the panel returns to its pre-request state.
    res.assert_status_ok();
    assert!(res.text().contains("Generate Now"));
    assert_eq!(memos.get(&memo.name).unwrap().summary, "");
}

#[tokio::test]
async fn test_generate_summary_while_disabled_is_silent_noop() {
    let (server, memos, _) = test_app();
    let memo = memos.create("a memo");

    let res = server
        .post(&format!("/memos/{}/summary", memo.id()))
        .await;

    res.assert_status_ok();
    assert!(res.text().contains("Generate Now"));
    assert_eq!(memos.get(&memo.name).unwrap().summary, "");
}

#[tokio::test]
async fn test_generate_summary_unknown_memo_is_404() {
    let (server, _, _) = test_app();
    let res = server.post("/memos/missing/summary").await;
    res.assert_status_not_found();
}
