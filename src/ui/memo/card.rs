//! Memo card for the list view.

use leptos::prelude::*;

use crate::store::memo::Memo;
use crate::ui::components::Card;
use crate::ui::memo::MemoContent;

/// Compact memo card linking to the memo page.
///
/// Shows the body and, when one exists, a dimmed summary preview.
#[component]
pub fn MemoCard(memo: Memo) -> impl IntoView {
    let href = format!("/memos/{}", memo.id());
    let time = memo.created_at.format("%Y-%m-%d %H:%M").to_string();
    let summary_preview = memo.has_summary().then(|| {
        view! {
            <p class="text-xs text-zinc-500 line-clamp-2">
                {memo.summary.clone()}
            </p>
        }
    });

    view! {
        <Card class="p-4 space-y-2">
            <div class="flex items-center justify-between">
                <time class="text-xs text-zinc-500">{time}</time>
                <a href=href class="text-xs text-indigo-400 hover:underline">
                    "Open"
                </a>
            </div>
            <MemoContent content=memo.content.clone() class="text-sm" />
            {summary_preview}
        </Card>
    }
}
