//! UI components and layouts.
//!
//! This module provides Leptos SSR components for rendering the application,
//! following ShadCN-UI design principles. Pages render to full documents;
//! interactive pieces re-render as HTMX fragments.
//!
//! # Structure
//!
//! - [`app`]: Page shell, layout, and routed pages
//! - [`components`]: Reusable ShadCN-style UI components
//! - [`memo`]: Memo cards, content rendering, and the summary panel
//! - [`settings`]: Workspace settings form and its edit-buffer model

pub mod app;
pub mod components;
pub mod memo;
pub mod settings;

use axum::response::Html;
use leptos::prelude::*;

/// Render a full page view to an HTML response.
pub fn render_page(view: impl IntoView) -> Html<String> {
    Html(format!("<!doctype html>{}", view.to_html()))
}

/// Render a partial view to an HTMX fragment response.
pub fn render_fragment(view: impl IntoView) -> Html<String> {
    Html(view.to_html())
}
