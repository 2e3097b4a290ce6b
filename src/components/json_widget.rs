//! Supplementary Dashboard Widget
//!
//! Fetches one of the untyped widget endpoints and shows it as a table.
//! A missing endpoint or an unexpected shape just shows "No data".

use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::warn;
use visibility_core::api::{TrackingApi, Widget};
use visibility_core::dashboard::{json_table, JsonTable};

use crate::context::use_app_context;

#[component]
pub fn JsonWidget(widget: Widget) -> impl IntoView {
    let ctx = use_app_context();
    let (table, set_table) = signal::<Option<JsonTable>>(None);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        spawn_local(async move {
            match ctx.api().widget(widget).await {
                Ok(value) => set_table.set(json_table(&value)),
                Err(e) => {
                    warn!(widget = widget.title(), error = %e, "widget unavailable");
                    set_table.set(None);
                }
            }
        });
    });

    view! {
        <section class="widget">
            <h3 class="widget-title">{widget.title()}</h3>
            {move || match table.get() {
                Some(table) => view! {
                    <table class="widget-table">
                        <thead>
                            <tr>{table.headers.into_iter().map(|h| view! { <th>{h}</th> }).collect_view()}</tr>
                        </thead>
                        <tbody>
                            {table.rows.into_iter().map(|row| view! {
                                <tr>{row.into_iter().map(|cell| view! { <td>{cell}</td> }).collect_view()}</tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                }.into_any(),
                None => view! { <p class="empty-state">"No data"</p> }.into_any(),
            }}
        </section>
    }
}
