//! Toggle switch component.

use leptos::prelude::*;

/// Checkbox-backed toggle switch.
///
/// Submits `value="true"` when checked and nothing when unchecked, so form
/// handlers can default the field to `false`.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Switch id="llm-field-enabled" name="enabled" checked=setting.enabled />
/// }
/// ```
#[component]
pub fn Switch(
    /// Input name attribute.
    #[prop(default = "")]
    name: &'static str,
    /// Input ID attribute.
    #[prop(default = "")]
    id: &'static str,
    /// Whether the switch is on.
    #[prop(default = false)]
    checked: bool,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let classes = format!("relative inline-flex items-center cursor-pointer {}", class);

    view! {
        <label class=classes>
            <input
                type="checkbox"
                name=name
                id=id
                value="true"
                checked=checked
                class="peer sr-only"
            />
            <span class="h-6 w-11 rounded-full bg-zinc-700 transition-colors \
                         peer-checked:bg-indigo-500 \
                         after:content-[''] after:absolute after:left-0.5 after:top-0.5 \
                         after:h-5 after:w-5 after:rounded-full after:bg-white \
                         after:transition-transform peer-checked:after:translate-x-5">
            </span>
        </label>
    }
}
