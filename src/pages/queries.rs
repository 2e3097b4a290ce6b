//! Query List Page (`/queries`)

use leptos::prelude::*;
use visibility_core::model::QueryId;
use visibility_core::Route;

use super::{delete_and_refresh, provide_dashboard_store};
use crate::components::QueryCardView;
use crate::context::use_app_context;
use crate::store::DashboardStateStoreFields;

#[component]
pub fn QueriesPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = provide_dashboard_store();

    view! {
        <div class="page queries">
            <div class="page-header">
                <h1>"Queries"</h1>
                <div class="page-actions">
                    <button class="btn" on:click=move |_| ctx.reload()>"Refresh"</button>
                    <a class="btn primary" href=Route::NewQuery.href()>"+ New query"</a>
                </div>
            </div>

            {move || store.error().get().map(|message| view! { <div class="error-banner">{message}</div> })}

            <Show when=move || !store.loaded().get()>
                <p class="loading">"Loading..."</p>
            </Show>
            <Show when=move || store.loaded().get() && store.queries().read().is_empty()>
                <div class="empty-state">
                    <p>"No queries yet. Create one to start tracking."</p>
                    <a class="btn primary" href=Route::NewQuery.href()>"Create query"</a>
                </div>
            </Show>

            <div class="query-grid">
                <For
                    each=move || store.queries().get()
                    key=|summary| summary.query.id.clone()
                    children=move |summary| view! {
                        <QueryCardView
                            summary=summary
                            on_delete=move |id: QueryId| delete_and_refresh(ctx, store, id)
                        />
                    }
                />
            </div>
        </div>
    }
}
