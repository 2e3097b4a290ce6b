//! Query Card Component
//!
//! One query on the query list page: badges, created date and an actions menu.

use leptos::prelude::*;
use tracing::error;
use visibility_core::actions::{self, TrackControl, TRACK_CONFIRM, TRACK_FAILED};
use visibility_core::dashboard::{plural, QueryCard};
use visibility_core::model::{QueryId, QuerySummary};
use visibility_core::{ModelNames, Route};

use crate::commands::{alert, confirm, navigate};
use crate::components::TrackButton;
use crate::context::use_app_context;

#[component]
pub fn QueryCardView(
    summary: QuerySummary,
    #[prop(into)] on_delete: Callback<QueryId>,
) -> impl IntoView {
    let ctx = use_app_context();
    let card = QueryCard::from(&summary);
    let names = ModelNames::builtin();
    let (menu_open, set_menu_open) = signal(false);
    // Outlives the menu, which rebuilds its buttons on every open
    let track_control = RwSignal::new(TrackControl::default());

    let id = StoredValue::new(card.id.clone());
    let name = StoredValue::new(card.name.clone());
    let detail_href = Route::QueryDetail(card.id.clone()).href();

    let track = move || async move {
        let id = id.get_value();
        match actions::track_query(&ctx.api(), &id).await {
            Ok(tracked) => {
                alert(&tracked.summary());
                ctx.reload();
            }
            Err(e) => {
                error!(query = %id, error = %e, "tracking failed");
                alert(&e.user_message(TRACK_FAILED));
            }
        }
    };

    let delete = move |_| {
        set_menu_open.set(false);
        let message = name.with_value(|name| format!("Delete query \"{}\"?", name));
        if confirm(&message) {
            on_delete.run(id.get_value());
        }
    };

    view! {
        <div class="query-card">
            <div class="query-card-header">
                <a class="query-card-title" href=detail_href>{card.name.clone()}</a>
                <button
                    class="menu-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_menu_open.update(|open| *open = !*open);
                    }
                >
                    "⋮"
                </button>
                <Show when=move || menu_open.get()>
                    <div class="query-card-menu">
                        <button on:click=move |_| navigate(&Route::EditQuery(id.get_value()))>"Edit"</button>
                        <TrackButton
                            label="Track now"
                            class="menu-item"
                            task=track
                            control=track_control
                            confirm_message=TRACK_CONFIRM
                        />
                        <button class="danger" on:click=delete>"Delete"</button>
                    </div>
                </Show>
            </div>
            <div class="badge-row">
                {summary.query.keywords.iter().map(|keyword| view! {
                    <span class="badge keyword">{keyword.clone()}</span>
                }).collect_view()}
            </div>
            <div class="badge-row">
                {summary.query.models.iter().map(|model| view! {
                    <span class="badge model">{names.display_name(model).to_string()}</span>
                }).collect_view()}
            </div>
            <div class="query-card-footer">
                <span>{plural(card.keyword_count, "keyword")}" · "{plural(card.model_count, "model")}</span>
                {card.created_on.clone().map(|date| view! { <span class="created-on">"Created "{date}</span> })}
            </div>
        </div>
    }
}
