//! Model Picker Component
//!
//! Toggle buttons for the models a query is tracked against.

use leptos::prelude::*;
use visibility_core::model::ModelInfo;

#[component]
pub fn ModelPicker(
    #[prop(into)] models: Signal<Vec<ModelInfo>>,
    #[prop(into)] selected: Signal<Vec<String>>,
    #[prop(into)] on_toggle: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="model-picker">
            <For
                each=move || models.get()
                key=|model| model.id.clone()
                children=move |model| {
                    let id = model.id.clone();
                    let toggle_id = model.id.clone();
                    let is_selected = move || selected.with(|ids| ids.contains(&id));
                    view! {
                        <button
                            type="button"
                            class=move || if is_selected() { "model-btn active" } else { "model-btn" }
                            on:click=move |_| on_toggle.run(toggle_id.clone())
                        >
                            <span class="model-name">{model.name}</span>
                            {model.provider.map(|provider| view! { <span class="model-provider">{provider}</span> })}
                        </button>
                    }
                }
            />
        </div>
    }
}
