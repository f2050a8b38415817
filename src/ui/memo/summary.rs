//! Summary panel with generate/regenerate action.

use leptos::prelude::*;

use crate::store::memo::Memo;
use crate::ui::components::{
    Button, ButtonSize, ButtonVariant, LoaderIcon, Separator, SkeletonText, SparklesIcon,
};
use crate::ui::memo::MemoContent;

/// Summary display for one memo.
///
/// Renders one of two branches keyed solely on whether the memo's summary is
/// empty: an existing summary with a "Regenerate" action, or an empty state
/// with a "Generate Now" action.
///
/// `generating` renders the in-flight state: skeleton lines instead of the
/// summary text and a disabled action. At rest the same skeletons sit behind
/// the `htmx-indicator` class, so the browser shows them (and hides the
/// text) only while the generate request is actually running. Failures are
/// not surfaced: the server re-renders the panel in its pre-request state.
#[component]
pub fn SummaryPanel(
    memo: Memo,
    /// Whether a generation request is in flight.
    #[prop(default = false)]
    generating: bool,
) -> impl IntoView {
    let panel_id = format!("summary-panel-{}", memo.id());
    let target = format!("#{panel_id}");
    let post_url = format!("/memos/{}/summary", memo.id());

    let has_summary = memo.has_summary();
    let label = if has_summary { "Regenerate" } else { "Generate Now" };

    let heading = has_summary.then(|| {
        view! {
            <p class="text-sm font-semibold">"Summary:"</p>
        }
    });

    let body = (has_summary && !generating).then(|| {
        view! {
            <MemoContent
                content=memo.summary.clone()
                class="summary-body text-sm text-zinc-400"
            />
        }
    });

    // Hidden at rest, shown by HTMX while a request is in flight; rendered
    // plainly when the server already knows generation is running.
    let skeleton_class = if generating {
        "space-y-2"
    } else {
        "htmx-indicator space-y-2"
    };
    let loader_class = if generating { "mr-1" } else { "htmx-indicator mr-1" };

    view! {
        <section id=panel_id class="summary-panel space-y-2 pt-2">
            {heading}
            {body}
            <div class=skeleton_class>
                <SkeletonText lines=3 />
            </div>
            <form
                hx-post=post_url
                hx-target=target
                hx-swap="outerHTML"
                hx-disabled-elt="find button"
                hx-indicator="closest section"
            >
                <Button
                    variant=ButtonVariant::Plain
                    size=ButtonSize::Sm
                    button_type="submit"
                    disabled=generating
                >
                    <span class=loader_class>
                        <LoaderIcon />
                    </span>
                    <SparklesIcon class="mr-1" />
                    {label}
                </Button>
            </form>
            <Separator />
        </section>
    }
}
