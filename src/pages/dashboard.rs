//! Dashboard Page (`/`)
//!
//! Counters, a keyword table per query, "Track all" and the supplementary widgets.

use leptos::prelude::*;
use tracing::error;
use visibility_core::actions::{self, TRACK_ALL_FAILED};
use visibility_core::api::Widget;
use visibility_core::dashboard::{keyword_rows, StatCards};
use visibility_core::model::QuerySummary;
use visibility_core::Route;

use super::{delete_and_refresh, provide_dashboard_store};
use crate::commands::{alert, navigate};
use crate::components::{DeleteConfirmButton, JsonWidget, Modal, StatCardsView, TrackButton};
use crate::context::{use_app_context, AppContext, ReloadScheduler};
use crate::store::{DashboardStateStoreFields, DashboardStore};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = provide_dashboard_store();
    let info_open = RwSignal::new(false);

    let track_all = move || async move {
        let scheduler = ReloadScheduler::new(ctx);
        match actions::track_all(&ctx.api(), &scheduler, ctx.refresh_delay()).await {
            Ok(message) => alert(&message),
            Err(e) => {
                error!(error = %e, "track-all failed");
                alert(&e.user_message(TRACK_ALL_FAILED));
            }
        }
    };

    let cards = Signal::derive(move || StatCards::from(&store.stats().get()));

    view! {
        <div class="page dashboard">
            <div class="page-header">
                <h1>"Dashboard"</h1>
                <div class="page-actions">
                    <button class="btn" on:click=move |_| info_open.set(true)>"ⓘ Metrics"</button>
                    <button class="btn" on:click=move |_| ctx.reload()>"Refresh"</button>
                    <TrackButton label="Track all" task=track_all />
                </div>
            </div>

            {move || store.error().get().map(|message| view! { <div class="error-banner">{message}</div> })}

            <StatCardsView cards=cards />

            <Show
                when=move || !store.loaded().get() || !store.queries().read().is_empty()
                fallback=|| view! {
                    <div class="empty-state">
                        <p>"No queries yet."</p>
                        <a class="btn primary" href=Route::NewQuery.href()>"Create your first query"</a>
                    </div>
                }
            >
                <For
                    each=move || store.queries().get()
                    key=|summary| summary.query.id.clone()
                    children=move |summary| view! { <QuerySection summary=summary ctx=ctx store=store /> }
                />
            </Show>

            <div class="widgets">
                {Widget::ALL.into_iter().map(|widget| view! { <JsonWidget widget=widget /> }).collect_view()}
            </div>

            <Modal title="About the metrics" open=info_open>
                <dl class="metrics-info">
                    <dt>"Position"</dt>
                    <dd>"Where the keyword first appears in the model's answer. Lower is better."</dd>
                    <dt>"Visibility"</dt>
                    <dd>"How prominently the keyword appears in the answer, from 0 to 100%."</dd>
                    <dt>"No data / Pending"</dt>
                    <dd>"The question has not been tracked for that keyword and model yet, or tracking failed."</dd>
                </dl>
            </Modal>
        </div>
    }
}

/// One query's keyword table with its actions
#[component]
fn QuerySection(summary: QuerySummary, ctx: AppContext, store: DashboardStore) -> impl IntoView {
    let id = StoredValue::new(summary.query.id.clone());
    let rows = keyword_rows(&summary);

    view! {
        <section class="query-section">
            <div class="query-section-header">
                <a class="query-name" href=Route::QueryDetail(id.get_value()).href()>{summary.query.name.clone()}</a>
                <div class="query-actions">
                    <button class="btn small" on:click=move |_| navigate(&Route::EditQuery(id.get_value()))>"Edit"</button>
                    <button class="btn small primary" on:click=move |_| navigate(&Route::QueryDetail(id.get_value()))>"Track"</button>
                    <DeleteConfirmButton
                        button_class="btn small danger"
                        on_confirm=move |_: ()| delete_and_refresh(ctx, store, id.get_value())
                    />
                </div>
            </div>
            <table class="keyword-table">
                <thead>
                    <tr>
                        <th>"Keyword"</th>
                        <th>"Avg. position"</th>
                        <th>"Avg. visibility"</th>
                    </tr>
                </thead>
                <tbody>
                    {rows.into_iter().map(|row| view! {
                        <tr>
                            <td>{row.keyword}</td>
                            <td>{row.avg_position}</td>
                            <td>{row.avg_visibility}</td>
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>
        </section>
    }
}
