//! LLM settings section.

use leptos::prelude::*;

use crate::ui::components::{Button, ButtonSize, ButtonVariant, Input, Switch, Textarea};
use crate::ui::settings::form::{LlmField, LlmSettingsForm};

/// Workspace LLM settings form.
///
/// One HTMX form posts the complete record: explicit submits come from the
/// per-field Save buttons, and the enabled switch auto-submits on change
/// (see [`LlmSettingsForm::form_trigger`]). The endpoint/model/prompt
/// controls render only while the feature is enabled; while hidden their
/// values ride along as hidden inputs so a toggle never drops data.
#[component]
pub fn LlmSection(form: LlmSettingsForm) -> impl IntoView {
    let draft = form.draft().clone();
    let trigger = LlmSettingsForm::form_trigger();

    let fields = if draft.enabled {
        view! {
            <div class="space-y-2 border rounded-md py-2 px-3 border-zinc-700">
                <div class="w-full flex flex-row justify-between items-center">
                    <span class="text-sm">"LLM Endpoint URL"</span>
                    <Button
                        variant=ButtonVariant::Outline
                        size=ButtonSize::Sm
                        button_type="submit"
                    >
                        "Save"
                    </Button>
                </div>
                <Input
                    id=LlmField::Endpoint.input_id()
                    name=LlmField::Endpoint.input_name()
                    placeholder="Should be started with http:// or https://"
                    value=draft.endpoint.clone()
                    class="font-mono"
                />

                <div class="w-full flex flex-row justify-between items-center">
                    <span class="text-sm">"Model"</span>
                    <Button
                        variant=ButtonVariant::Outline
                        size=ButtonSize::Sm
                        button_type="submit"
                    >
                        "Save"
                    </Button>
                </div>
                <Input
                    id=LlmField::Model.input_id()
                    name=LlmField::Model.input_name()
                    placeholder="LLM models like 'llama3'"
                    value=draft.model.clone()
                    class="font-mono"
                />

                <div class="w-full flex flex-row justify-between items-center">
                    <span class="text-sm">"Prompt"</span>
                    <Button
                        variant=ButtonVariant::Outline
                        size=ButtonSize::Sm
                        button_type="submit"
                    >
                        "Save"
                    </Button>
                </div>
                <Textarea
                    id=LlmField::Prompt.input_id()
                    name=LlmField::Prompt.input_name()
                    rows=3
                    placeholder="Summarize the content below:\n{CONTENT}"
                    value=draft.prompt.clone()
                    class="font-mono"
                />
            </div>
        }
        .into_any()
    } else {
        // Hidden while disabled; the buffered values still submit so every
        // write replaces the full record.
        view! {
            <div>
                <input
                    type="hidden"
                    name=LlmField::Endpoint.input_name()
                    value=draft.endpoint.clone()
                />
                <input
                    type="hidden"
                    name=LlmField::Model.input_name()
                    value=draft.model.clone()
                />
                <input
                    type="hidden"
                    name=LlmField::Prompt.input_name()
                    value=draft.prompt.clone()
                />
            </div>
        }
        .into_any()
    };

    view! {
        <section id="llm-section" class="space-y-3">
            <p class="font-medium text-zinc-300">"LLM related settings"</p>
            <form
                class="space-y-3"
                hx-post="/settings/llm"
                hx-target="#llm-section"
                hx-swap="outerHTML"
                hx-trigger=trigger
            >
                <div class="w-full flex flex-row justify-between items-center">
                    <span>"Enable LLM Features"</span>
                    <Switch
                        id=LlmField::Enabled.input_id()
                        name=LlmField::Enabled.input_name()
                        checked=draft.enabled
                    />
                </div>
                {fields}
            </form>
        </section>
    }
}
