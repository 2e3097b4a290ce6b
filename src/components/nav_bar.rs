//! Navigation Bar Component
//!
//! Page links rendered as plain anchors; every page is its own document.

use leptos::prelude::*;
use visibility_core::Route;

use crate::components::Modal;

fn links() -> [(&'static str, Route); 2] {
    [("Dashboard", Route::Dashboard), ("Queries", Route::Queries)]
}

/// Top bar with the page links, a "New query" shortcut and the log viewer
#[component]
pub fn NavBar(current: Route) -> impl IntoView {
    let logs_open = RwSignal::new(false);
    let (log_lines, set_log_lines) = signal(Vec::<String>::new());

    let show_logs = move |_| {
        set_log_lines.set(console_logger::recent_lines());
        logs_open.set(true);
    };

    view! {
        <nav class="nav-bar">
            <span class="nav-title">"AI Visibility"</span>
            <div class="nav-links">
                {links().into_iter().map(|(label, route)| {
                    let class = if route == current { "nav-link active" } else { "nav-link" };
                    view! { <a class=class href=route.href()>{label}</a> }
                }).collect_view()}
            </div>
            <button class="btn" on:click=show_logs>"Logs"</button>
            <a class="btn primary" href=Route::NewQuery.href()>"+ New query"</a>
        </nav>
        <Modal title="Recent log" open=logs_open>
            <Show
                when=move || log_lines.with(|lines| !lines.is_empty())
                fallback=|| view! { <p class="empty-state">"Nothing logged yet."</p> }
            >
                <pre class="log-view">{move || log_lines.get().join("\n")}</pre>
            </Show>
        </Modal>
    }
}
