//! Read-only memo body rendering.

use leptos::prelude::*;

/// Memo text rendered read-only, preserving line breaks.
#[component]
pub fn MemoContent(
    /// Text to display.
    #[prop(into)]
    content: String,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let classes = format!("whitespace-pre-wrap break-words leading-relaxed {}", class);

    view! {
        <div class=classes>
            {content}
        </div>
    }
}
