//! Query Detail Page (`/query/{id}`)
//!
//! The reconciled grid: one card per question, one column per model, one row
//! per keyword, each showing the latest tracking result.

use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::{debug, error, info};
use visibility_core::actions::{
    self, DetailData, LoadGeneration, DELETE_FAILED, LOAD_FAILED, TRACK_CONFIRM, TRACK_FAILED,
};
use visibility_core::api::TrackingApi;
use visibility_core::dashboard::plural;
use visibility_core::model::QueryId;
use visibility_core::{build_grid, question_count, Route};

use crate::commands::{alert, navigate};
use crate::components::{DeleteConfirmButton, QuestionCard, TrackButton};
use crate::context::use_app_context;

#[component]
pub fn QueryDetailPage(id: QueryId) -> impl IntoView {
    let ctx = use_app_context();
    let id = StoredValue::new(id);
    let (detail, set_detail) = signal::<Option<DetailData>>(None);
    let (load_error, set_load_error) = signal::<Option<String>>(None);
    let generation = StoredValue::new(LoadGeneration::new());

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let ticket = generation.with_value(LoadGeneration::begin);
        spawn_local(async move {
            let id = id.get_value();
            let loaded = actions::load_detail(&ctx.api(), &id).await;
            if !generation.with_value(|g| g.is_current(ticket)) {
                debug!(query = %id, "stale detail load dropped");
                return;
            }
            match loaded {
                Ok(data) => {
                    set_load_error.set(None);
                    set_detail.set(Some(data));
                }
                Err(e) => {
                    error!(query = %id, error = %e, "detail load failed");
                    set_load_error.set(Some(e.user_message(LOAD_FAILED)));
                }
            }
        });
    });
    on_cleanup(move || generation.with_value(LoadGeneration::cancel));

    let track = move || async move {
        let id = id.get_value();
        // A reload started before the click must not overwrite the tracked data
        generation.with_value(LoadGeneration::cancel);
        match actions::track_query(&ctx.api(), &id).await {
            Ok(tracked) => {
                let message = tracked.summary();
                let refreshed = tracked.refreshed.is_some();
                set_detail.update(|detail| *detail = tracked.apply_to(detail.take()));
                if !refreshed {
                    ctx.reload();
                }
                alert(&message);
            }
            Err(e) => {
                error!(query = %id, error = %e, "tracking failed");
                // The cancelled load may have been the first one
                ctx.reload();
                alert(&e.user_message(TRACK_FAILED));
            }
        }
    };

    let delete = move |_: ()| {
        spawn_local(async move {
            let id = id.get_value();
            match ctx.api().delete_query(&id).await {
                Ok(()) => {
                    info!(query = %id, "query deleted");
                    navigate(&Route::Queries);
                }
                Err(e) => {
                    error!(query = %id, error = %e, "delete failed");
                    alert(&e.user_message(DELETE_FAILED));
                }
            }
        });
    };

    let title = move || detail.with(|d| d.as_ref().map(|d| d.query.name.clone()).unwrap_or_default());
    let subtitle = move || {
        detail.with(|d| {
            d.as_ref()
                .map(|d| {
                    format!(
                        "{} · {}",
                        plural(question_count(&d.query.prompts), "question"),
                        plural(d.query.models.len(), "model")
                    )
                })
                .unwrap_or_default()
        })
    };
    // Recomputed from the current query and results on every change
    let grid = move || {
        detail.with(|d| {
            d.as_ref()
                .map(|d| build_grid(&d.query, &d.results, &d.names))
                .unwrap_or_default()
        })
    };

    view! {
        <div class="page query-detail">
            <div class="page-header">
                <div>
                    <a class="back-link" href=Route::Queries.href()>"← Back"</a>
                    <h1>{title}</h1>
                    <p class="subtitle">{subtitle}</p>
                </div>
                <div class="page-actions">
                    <button class="btn" on:click=move |_| ctx.reload()>"Refresh"</button>
                    <button class="btn" on:click=move |_| navigate(&Route::EditQuery(id.get_value()))>"Edit"</button>
                    <DeleteConfirmButton button_class="btn danger" on_confirm=delete />
                    <TrackButton label="Track" task=track confirm_message=TRACK_CONFIRM />
                </div>
            </div>

            {move || load_error.get().map(|message| view! { <div class="error-banner">{message}</div> })}

            <Show
                when=move || detail.with(Option::is_some)
                fallback=move || view! {
                    <Show when=move || load_error.with(Option::is_none)>
                        <p class="loading">"Loading..."</p>
                    </Show>
                }
            >
                <Show
                    when=move || detail.with(|d| d.as_ref().is_some_and(DetailData::has_questions))
                    fallback=|| view! { <p class="empty-state">"This query has no questions yet."</p> }
                >
                    {move || grid().into_iter().map(|row| view! { <QuestionCard row=row /> }).collect_view()}
                </Show>
            </Show>
        </div>
    }
}
