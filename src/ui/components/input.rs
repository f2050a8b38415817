//! Input components for text fields.

use leptos::prelude::*;

/// Text input component.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Input
///         name="endpoint"
///         placeholder="http://localhost:11434/api/generate"
///         value=setting.endpoint.clone()
///     />
/// }
/// ```
#[component]
pub fn Input(
    /// Input type (text, email, password, etc.).
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text.
    #[prop(default = "")]
    placeholder: &'static str,
    /// Input name attribute.
    #[prop(default = "")]
    name: &'static str,
    /// Input ID attribute.
    #[prop(default = "")]
    id: &'static str,
    /// Whether the input is disabled.
    #[prop(default = false)]
    disabled: bool,
    /// Current value.
    #[prop(into, default = String::new())]
    value: String,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let base_classes = "flex h-10 w-full rounded-lg border border-zinc-700 bg-zinc-950 \
                        px-3 py-2 text-sm text-zinc-100 placeholder:text-zinc-500 \
                        focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-indigo-500 \
                        disabled:cursor-not-allowed disabled:opacity-50";

    let classes = format!("{} {}", base_classes, class);

    view! {
        <input
            type=input_type
            class=classes
            placeholder=placeholder
            name=name
            id=id
            disabled=disabled
            value=value
            autocomplete="off"
        />
    }
}

/// Textarea component for multi-line input.
///
/// The current value renders as the element's text content.
#[component]
pub fn Textarea(
    /// Placeholder text.
    #[prop(default = "")]
    placeholder: &'static str,
    /// Input name attribute.
    #[prop(default = "")]
    name: &'static str,
    /// Input ID attribute.
    #[prop(default = "")]
    id: &'static str,
    /// Number of rows.
    #[prop(default = 3)]
    rows: u32,
    /// Whether the input is disabled.
    #[prop(default = false)]
    disabled: bool,
    /// Current value.
    #[prop(into, default = String::new())]
    value: String,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let base_classes = "flex min-h-[80px] w-full rounded-lg border border-zinc-700 bg-zinc-950 \
                        px-3 py-2 text-sm text-zinc-100 placeholder:text-zinc-500 \
                        focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-indigo-500 \
                        disabled:cursor-not-allowed disabled:opacity-50 resize-none";

    let classes = format!("{} {}", base_classes, class);

    view! {
        <textarea
            class=classes
            placeholder=placeholder
            name=name
            id=id
            rows=rows
            disabled=disabled
        >
            {value}
        </textarea>
    }
}
