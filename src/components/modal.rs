//! Modal Dialog Component

use leptos::prelude::*;

/// Overlay dialog shown while `open` is true. Clicking the backdrop or × closes it.
#[component]
pub fn Modal(
    #[prop(into)] title: String,
    open: RwSignal<bool>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=move |_| open.set(false)>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h3 class="modal-title">{title.clone()}</h3>
                        <button class="modal-close" on:click=move |_| open.set(false)>"×"</button>
                    </div>
                    <div class="modal-body">{children()}</div>
                </div>
            </div>
        </Show>
    }
}
