//! Application shell and pages.

use leptos::prelude::*;

use crate::store::memo::Memo;
use crate::ui::components::{
    Button, ButtonVariant, Card, CardContent, CardHeader, NotebookIcon, PlusIcon, SettingsIcon,
};
use crate::ui::memo::{MemoCard, MemoContent, SummaryPanel};
use crate::ui::settings::{LlmSection, LlmSettingsForm};

/// Document shell wrapping every page.
#[component]
pub fn Layout(
    /// Document title.
    #[prop(default = "Memopad")]
    title: &'static str,
    /// Page content.
    children: Children,
) -> impl IntoView {
    view! {
        <html lang="en" class="dark">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="description" content="Self-hosted memos with LLM summaries"/>

                <title>{title}</title>

                <script src="https://unpkg.com/htmx.org@2.0.8/dist/htmx.min.js"></script>
                <script src="https://cdn.tailwindcss.com"></script>
                <link rel="stylesheet" href="/static/app.css"/>
            </head>

            <body class="min-h-screen bg-zinc-950 text-zinc-100 antialiased">
                <div id="app-shell" class="flex flex-col min-h-screen">
                    <Header/>
                    <main id="app" class="flex-1 container mx-auto px-4 py-6 max-w-3xl space-y-6">
                        {children()}
                    </main>
                    <Footer/>
                </div>
            </body>
        </html>
    }
}

/// Application header with navigation.
#[component]
fn Header() -> impl IntoView {
    view! {
        <header class="sticky top-0 z-50 w-full border-b border-zinc-800 bg-zinc-950/95 backdrop-blur">
            <div class="container mx-auto flex h-14 items-center justify-between px-4 max-w-3xl">
                <a href="/" class="flex items-center gap-2 font-semibold">
                    <NotebookIcon class="h-5 w-5 text-indigo-400" />
                    <span class="text-lg">"Memopad"</span>
                </a>

                <nav class="flex items-center gap-6" hx-boost="true">
                    <a href="/" class="text-sm text-zinc-400 hover:text-zinc-100 transition-colors">
                        "Memos"
                    </a>
                    <a href="/settings" class="flex items-center gap-1 text-sm text-zinc-400 hover:text-zinc-100 transition-colors">
                        <SettingsIcon />
                        "Settings"
                    </a>
                </nav>
            </div>
        </header>
    }
}

/// Footer component.
#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-zinc-800 py-4">
            <div class="container mx-auto px-4 max-w-3xl">
                <p class="text-xs text-zinc-500 text-center">
                    "Self-hosted memos with machine-written summaries"
                </p>
            </div>
        </footer>
    }
}

/// Memo composer form.
///
/// Posts the new memo and prepends the returned card to the list.
#[component]
fn MemoComposer() -> impl IntoView {
    view! {
        <Card class="p-4">
            <form
                class="flex gap-2"
                hx-post="/memos"
                hx-target="#memo-list"
                hx-swap="afterbegin"
                hx-on--after-request="this.reset()"
            >
                <textarea
                    name="content"
                    placeholder="Any thoughts..."
                    class="w-full min-h-[44px] px-3 py-2 rounded-lg border border-zinc-700 \
                           bg-zinc-950 text-zinc-100 placeholder:text-zinc-500 resize-none \
                           focus:outline-none focus:ring-2 focus:ring-indigo-500"
                    rows="2"
                    required
                />
                <Button variant=ButtonVariant::Primary button_type="submit" class="shrink-0 self-end">
                    <PlusIcon class="mr-1" />
                    "Save"
                </Button>
            </form>
        </Card>
    }
}

/// Memo list page.
#[component]
pub fn HomePage(memos: Vec<Memo>) -> impl IntoView {
    let cards = memos
        .into_iter()
        .map(|memo| view! { <MemoCard memo=memo /> })
        .collect_view();

    view! {
        <MemoComposer/>
        <div id="memo-list" class="space-y-4">
            {cards}
        </div>
    }
}

/// Single memo page with its summary panel.
#[component]
pub fn MemoPage(memo: Memo) -> impl IntoView {
    let time = memo.created_at.format("%Y-%m-%d %H:%M").to_string();

    view! {
        <Card>
            <CardHeader>
                <div class="flex items-center justify-between">
                    <time class="text-xs text-zinc-500">{time}</time>
                    <a href="/" class="text-xs text-indigo-400 hover:underline">
                        "Back"
                    </a>
                </div>
            </CardHeader>
            <CardContent class="space-y-4">
                <MemoContent content=memo.content.clone() />
                <SummaryPanel memo=memo />
            </CardContent>
        </Card>
    }
}

/// Workspace settings page.
#[component]
pub fn SettingsPage(form: LlmSettingsForm) -> impl IntoView {
    view! {
        <Card>
            <CardHeader>
                <h1 class="text-xl font-bold">"Workspace settings"</h1>
            </CardHeader>
            <CardContent>
                <LlmSection form=form />
            </CardContent>
        </Card>
    }
}

/// 404 Not Found page.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-20">
            <h1 class="text-4xl font-bold mb-4">"404"</h1>
            <p class="text-zinc-400 mb-6">"Page not found"</p>
            <a href="/">
                <Button variant=ButtonVariant::Primary>
                    "Go Home"
                </Button>
            </a>
        </div>
    }
}
