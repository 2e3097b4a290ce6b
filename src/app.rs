//! Visibility Dashboard App
//!
//! Resolves the API configuration, provides the shared context and renders
//! the page for the current location.

use leptos::prelude::*;
use tracing::{debug, info};
use visibility_core::Route;

use crate::commands::{self, HttpApi};
use crate::components::NavBar;
use crate::config;
use crate::context::AppContext;
use crate::pages::{DashboardPage, EditQueryPage, NotFoundPage, QueriesPage, QueryDetailPage};

#[component]
pub fn App() -> impl IntoView {
    let api_config = config::api_config();
    info!(base_url = %api_config.base_url, "api configured");

    let (reload_trigger, set_reload_trigger) = signal(0u32);

    // Provide context to all children
    provide_context(AppContext::new(HttpApi::new(api_config), (reload_trigger, set_reload_trigger)));

    let route = Route::parse(&commands::current_path());
    debug!(?route, "route resolved");

    let page = match route.clone() {
        Route::Dashboard => view! { <DashboardPage /> }.into_any(),
        Route::Queries => view! { <QueriesPage /> }.into_any(),
        Route::QueryDetail(id) => view! { <QueryDetailPage id=id /> }.into_any(),
        Route::EditQuery(id) => view! { <EditQueryPage id=Some(id) /> }.into_any(),
        Route::NewQuery => view! { <EditQueryPage id=None /> }.into_any(),
        Route::NotFound => view! { <NotFoundPage /> }.into_any(),
    };

    view! {
        <div class="app-layout">
            <NavBar current=route />
            <main class="main-content">{page}</main>
        </div>
    }
}
