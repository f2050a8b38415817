//! Separator component for visual division.

use leptos::prelude::*;

/// Visual separator line component.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <div class="space-y-4">
///         <p>"Above"</p>
///         <Separator />
///         <p>"Below"</p>
///     </div>
/// }
/// ```
#[component]
pub fn Separator(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let classes = format!("shrink-0 bg-zinc-800 h-[1px] w-full {}", class);

    view! {
        <div role="separator" class=classes />
    }
}
