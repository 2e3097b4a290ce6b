//! Track Button Component
//!
//! Disabled with a progress label while its task runs, restored afterwards
//! whatever the outcome. A second click during a run is ignored.
//!
//! Pass `control` when the button can be unmounted mid-run (e.g. inside a
//! menu), so a remounted button still sees the run in flight.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;
use visibility_core::actions::TrackControl;

use crate::commands::confirm;

#[component]
pub fn TrackButton<F, Fut>(
    #[prop(into)] label: String,
    #[prop(into, default = "btn primary".to_string())] class: String,
    task: F,
    /// Asked before starting; cancelling leaves the button idle
    #[prop(optional, into)]
    confirm_message: Option<String>,
    #[prop(optional)] control: Option<RwSignal<TrackControl>>,
) -> impl IntoView
where
    F: Fn() -> Fut + Clone + 'static,
    Fut: Future<Output = ()> + 'static,
{
    let control = control.unwrap_or_else(|| RwSignal::new(TrackControl::default()));
    let idle_label = StoredValue::new(label);
    let confirm_message = StoredValue::new(confirm_message);

    let on_click = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        if control.with_untracked(TrackControl::is_running) {
            return;
        }
        let declined = confirm_message.with_value(|message| message.as_deref().is_some_and(|m| !confirm(m)));
        if declined {
            return;
        }
        let started = control
            .try_update(|c| idle_label.with_value(|label| c.begin(label)))
            .unwrap_or(false);
        if !started {
            return;
        }
        let task = task.clone();
        spawn_local(async move {
            task().await;
            control.update(|c| {
                c.finish();
            });
        });
    };

    view! {
        <button
            class=class
            disabled=move || control.with(TrackControl::is_running)
            on:click=on_click
        >
            {move || idle_label.with_value(|label| control.with(|c| c.label(label).to_string()))}
        </button>
    }
}
