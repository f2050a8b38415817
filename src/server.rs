use axum::{
    Form, Json, Router,
    extract::{DefaultBodyLimit, Path, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Html, IntoResponse},
    routing::{get, post},
};
use leptos::prelude::*;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use tracing::{info, warn};

use crate::AppState;
use crate::config::AppConfig;
use crate::store::memo::{Memo, memo_name};
use crate::store::setting::{
    InMemorySettingStore, SettingStore, WorkspaceLlmSetting, WorkspaceSetting, WorkspaceSettingKey,
};
use crate::summarizer::{self, Summarizer};
use crate::ui::app::{HomePage, Layout, MemoPage, NotFoundPage, SettingsPage};
use crate::ui::memo::{MemoCard, SummaryPanel};
use crate::ui::settings::{LlmSection, LlmSettingsForm};
use crate::ui::{render_fragment, render_page};

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    let memos = crate::store::memo::MemoStore::new();
    let settings: Arc<dyn SettingStore> = Arc::new(InMemorySettingStore::new());

    // Background summarizer: sweeps unsummarized memos, re-reading the
    // workspace setting on every tick.
    if config.summarizer.enabled {
        let settings_clone = Arc::clone(&settings);
        let memos_clone = memos.clone();
        let interval = Duration::from_secs(config.summarizer.interval_secs);
        tokio::spawn(async move {
            summarizer::run_periodic(settings_clone, memos_clone, interval).await;
        });
    }

    let state = AppState {
        memos,
        settings,
        config: config.clone(),
    };

    let app = build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %addr,
        "Server started"
    );

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

/// Build the application router with all middleware applied.
pub fn build_router(state: AppState) -> Router {
    // Router type changes per layer, so "disabled" is a huge duration rather
    // than a conditionally applied timeout layer.
    let timeout_duration = if state.config.resilience.timeout_disabled {
        Duration::from_secs(365 * 24 * 60 * 60)
    } else {
        Duration::from_secs(30)
    };

    Router::new()
        // HTML pages
        .route("/", get(home_page))
        .route("/memos/{id}", get(memo_page))
        .route("/settings", get(settings_page))
        // HTMX fragments
        .route("/memos", post(create_memo))
        .route("/memos/{id}/summary", post(generate_summary))
        .route("/settings/llm", post(save_llm_setting))
        // JSON API
        .route("/api/memos", get(api_list_memos))
        .route("/api/memos/{id}", get(api_get_memo))
        .route("/api/settings/{key}", get(api_get_setting))
        // Static assets
        .nest_service("/static", ServeDir::new("static"))
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(1024 * 1024)) // 1MB limit
        .layer(axum::middleware::from_fn(
            move |req: Request, next: Next| {
                let duration = timeout_duration;
                async move {
                    match tokio::time::timeout(duration, next.run(req)).await {
                        Ok(res) => res,
                        Err(_) => {
                            (StatusCode::REQUEST_TIMEOUT, "Request timed out").into_response()
                        }
                    }
                }
            },
        ))
        .with_state(state)
}

// ─────────────────────────────────────────────────────────────────────────────
// Page Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// GET / - Memo list page.
async fn home_page(State(state): State<AppState>) -> Html<String> {
    let memos = state.memos.list();
    render_page(view! {
        <Layout title="Memopad">
            <HomePage memos=memos />
        </Layout>
    })
}

/// GET /memos/:id - Single memo page.
async fn memo_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, (StatusCode, Html<String>)> {
    match state.memos.get(&memo_name(&id)) {
        Some(memo) => Ok(render_page(view! {
            <Layout title="Memopad">
                <MemoPage memo=memo />
            </Layout>
        })),
        None => Err((
            StatusCode::NOT_FOUND,
            render_page(view! {
                <Layout title="Memopad">
                    <NotFoundPage />
                </Layout>
            }),
        )),
    }
}

/// GET /settings - Workspace settings page.
async fn settings_page(State(state): State<AppState>) -> Html<String> {
    let form = LlmSettingsForm::load(&*state.settings);
    render_page(view! {
        <Layout title="Memopad - Settings">
            <SettingsPage form=form />
        </Layout>
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Fragment Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// Form body for memo creation.
#[derive(Debug, Deserialize)]
struct CreateMemoForm {
    /// Memo body.
    content: String,
}

/// POST /memos - Create a memo, returning its list card.
async fn create_memo(
    State(state): State<AppState>,
    Form(form): Form<CreateMemoForm>,
) -> Result<Html<String>, StatusCode> {
    if form.content.trim().is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }

    let memo = state.memos.create(form.content);
    info!(
        name: "memo.created",
        memo = %memo.name,
        "Memo created"
    );

    Ok(render_fragment(view! { <MemoCard memo=memo /> }))
}

/// POST /memos/:id/summary - Request summary (re)generation.
///
/// Always answers 200 with the re-rendered panel; a failed generation leaves
/// the stored summary untouched, so the panel silently returns to its
/// pre-request state. Only a missing memo is an error.
async fn generate_summary(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, StatusCode> {
    let name = memo_name(&id);
    let Some(memo) = state.memos.get(&name) else {
        return Err(StatusCode::NOT_FOUND);
    };

    match Summarizer::from_workspace(&*state.settings, state.memos.clone()) {
        Ok(Some(summarizer)) => {
            if let Err(e) = summarizer.create_summary(&name).await {
                warn!(memo = %name, error = ?e, "Summary generation failed");
            }
        }
        Ok(None) => {
            warn!(memo = %name, "Summary requested while LLM features are disabled");
        }
        Err(e) => {
            warn!(memo = %name, error = ?e, "Summarizer unavailable");
        }
    }

    let memo = state.memos.get(&name).unwrap_or(memo);
    Ok(render_fragment(view! { <SummaryPanel memo=memo /> }))
}

/// Form body for the LLM setting, one field per form control.
///
/// The toggle submits `enabled=true` when checked and nothing when not.
#[derive(Debug, Deserialize)]
struct LlmSettingFormBody {
    #[serde(default)]
    enabled: bool,
    #[serde(default)]
    endpoint: String,
    #[serde(default)]
    model: String,
    #[serde(default)]
    prompt: String,
}

/// POST /settings/llm - Replace the workspace LLM setting.
///
/// The submitted body is the user's draft; it is written as one full record
/// and the section re-renders from the confirmed value.
async fn save_llm_setting(
    State(state): State<AppState>,
    Form(body): Form<LlmSettingFormBody>,
) -> Result<Html<String>, (StatusCode, String)> {
    let draft = WorkspaceLlmSetting {
        enabled: body.enabled,
        endpoint: body.endpoint,
        model: body.model,
        prompt: body.prompt,
    };

    let mut form = LlmSettingsForm::with_draft(&*state.settings, draft);
    form.save(&*state.settings)
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    info!(
        name: "setting.updated",
        key = %WorkspaceSettingKey::Llm,
        enabled = form.committed().enabled,
        "Workspace setting updated"
    );

    Ok(render_fragment(view! { <LlmSection form=form /> }))
}

// ─────────────────────────────────────────────────────────────────────────────
// JSON API Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// GET /api/memos - List memos, newest first.
async fn api_list_memos(State(state): State<AppState>) -> Json<Vec<Memo>> {
    Json(state.memos.list())
}

/// GET /api/memos/:id - Get one memo.
async fn api_get_memo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Memo>, StatusCode> {
    match state.memos.get(&memo_name(&id)) {
        Some(memo) => Ok(Json(memo)),
        None => Err(StatusCode::NOT_FOUND),
    }
}

/// GET /api/settings/:key - Get a workspace setting, normalized to defaults.
async fn api_get_setting(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let key = WorkspaceSettingKey::parse(&key).ok_or(StatusCode::NOT_FOUND)?;

    let value = match key {
        WorkspaceSettingKey::General => {
            let setting = match state.settings.get(key) {
                Some(WorkspaceSetting::General(s)) => s,
                _ => Default::default(),
            };
            serde_json::json!({
                "name": key.setting_name(),
                "generalSetting": setting,
            })
        }
        WorkspaceSettingKey::Llm => {
            serde_json::json!({
                "name": key.setting_name(),
                "llmSetting": state.settings.llm_setting(),
            })
        }
    };

    Ok(Json(value))
}
