//! Skeleton loading placeholders.

use leptos::prelude::*;

/// A single pulsing placeholder block.
#[component]
pub fn Skeleton(
    /// Additional CSS classes (typically sizing).
    #[prop(default = "h-4 w-full")]
    class: &'static str,
) -> impl IntoView {
    let classes = format!("animate-pulse rounded-md bg-zinc-800 {}", class);

    view! {
        <div class=classes></div>
    }
}

/// A stack of text-shaped skeleton lines, the last one shortened.
#[component]
pub fn SkeletonText(
    /// Number of lines.
    #[prop(default = 3)]
    lines: usize,
) -> impl IntoView {
    let rows = (0..lines)
        .map(|i| {
            let class = if i + 1 == lines {
                "h-4 w-2/3"
            } else {
                "h-4 w-full"
            };
            view! { <Skeleton class=class /> }
        })
        .collect_view();

    view! {
        <div class="space-y-2">
            {rows}
        </div>
    }
}
