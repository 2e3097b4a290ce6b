//! Pages
//!
//! One component per route. Each loads its own data on mount and again
//! whenever [`AppContext::reload`](crate::context::AppContext::reload) fires.

mod dashboard;
mod edit_query;
mod queries;
mod query_detail;

pub use dashboard::DashboardPage;
pub use edit_query::EditQueryPage;
pub use queries::QueriesPage;
pub use query_detail::QueryDetailPage;

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use tracing::{debug, error};
use visibility_core::actions::{self, LoadGeneration, DELETE_FAILED};
use visibility_core::model::QueryId;
use visibility_core::Route;

use crate::commands::alert;
use crate::context::{use_app_context, AppContext};
use crate::store::{store_set_dashboard, store_set_error, DashboardState, DashboardStore};

const DASHBOARD_LOAD_FAILED: &str = "Failed to load dashboard";

/// Create the dashboard store, provide it, and keep it loaded.
///
/// Responses to a superseded load are dropped.
fn provide_dashboard_store() -> DashboardStore {
    let ctx = use_app_context();
    let store = Store::new(DashboardState::default());
    provide_context(store);
    let generation = StoredValue::new(LoadGeneration::new());

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let ticket = generation.with_value(LoadGeneration::begin);
        spawn_local(async move {
            let loaded = actions::load_dashboard(&ctx.api()).await;
            if !generation.with_value(|g| g.is_current(ticket)) {
                debug!("stale dashboard load dropped");
                return;
            }
            match loaded {
                Ok(data) => store_set_dashboard(&store, data),
                Err(e) => {
                    error!(error = %e, "dashboard load failed");
                    store_set_error(&store, e.user_message(DASHBOARD_LOAD_FAILED));
                }
            }
        });
    });
    on_cleanup(move || generation.with_value(LoadGeneration::cancel));

    store
}

/// Delete a query and show the refreshed list and stats
fn delete_and_refresh(ctx: AppContext, store: DashboardStore, id: QueryId) {
    spawn_local(async move {
        match actions::delete_query(&ctx.api(), &id).await {
            Ok(data) => store_set_dashboard(&store, data),
            Err(e) => {
                error!(query = %id, error = %e, "delete failed");
                alert(&e.user_message(DELETE_FAILED));
            }
        }
    });
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="empty-state">
            <h2>"Page not found"</h2>
            <a class="btn" href=Route::Dashboard.href()>"Back to dashboard"</a>
        </div>
    }
}
