//! Edit Query Page (`/query/{id}/edit`, `/query/new/edit`)
//!
//! All form state lives in one [`QueryDraft`]; inputs call its mutation
//! methods and Save validates it before anything is sent.

use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::{error, warn};
use visibility_core::actions::{self, SaveError, LOAD_FAILED};
use visibility_core::api::TrackingApi;
use visibility_core::model::{ModelInfo, QueryId};
use visibility_core::{ModelNames, QueryDraft, Route};

use crate::commands::{alert, confirm, navigate};
use crate::components::{ModelPicker, TagInput};
use crate::context::use_app_context;

const SAVED: &str = "Query saved";
const DISCARD_CHANGES: &str = "Discard unsaved changes?";

/// `id` is `None` when creating a new query
#[component]
pub fn EditQueryPage(id: Option<QueryId>) -> impl IntoView {
    let ctx = use_app_context();
    let is_new = id.is_none();
    let existing = StoredValue::new(id);
    let draft = RwSignal::new(QueryDraft::default());
    // Last loaded or saved state, to tell whether leaving loses anything
    let baseline = RwSignal::new(QueryDraft::default());
    let (models, set_models) = signal(Vec::<ModelInfo>::new());
    let (saving, set_saving) = signal(false);

    // Model catalog for the picker
    Effect::new(move |_| {
        spawn_local(async move {
            match actions::load_models(&ctx.api()).await {
                Ok(loaded) if !loaded.is_empty() => set_models.set(loaded),
                Ok(_) => set_models.set(ModelNames::builtin_models()),
                Err(e) => {
                    warn!(error = %e, "model catalog unavailable, using built-in list");
                    set_models.set(ModelNames::builtin_models());
                }
            }
        });
    });

    // Existing query
    Effect::new(move |_| {
        let Some(id) = existing.get_value() else {
            return;
        };
        spawn_local(async move {
            match ctx.api().get_query(&id).await {
                Ok(query) => {
                    let loaded = QueryDraft::from_query(&query);
                    baseline.set(loaded.clone());
                    draft.set(loaded);
                }
                Err(e) => {
                    error!(query = %id, error = %e, "query load failed");
                    alert(&e.user_message(LOAD_FAILED));
                }
            }
        });
    });

    // Models the query already uses stay visible even if the catalog dropped them
    let picker_models = Signal::derive(move || {
        let mut list = models.get();
        draft.with(|d| {
            for id in &d.selected_models {
                if !list.iter().any(|m| &m.id == id) {
                    list.push(ModelInfo::new(id.clone(), id.clone()));
                }
            }
        });
        list
    });

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let current = draft.get_untracked();
        set_saving.set(true);
        spawn_local(async move {
            let id = existing.get_value();
            match actions::save_draft(&ctx.api(), &current, id.as_ref()).await {
                Ok(saved) => {
                    baseline.set(current);
                    alert(SAVED);
                    let route = saved.map(Route::QueryDetail).unwrap_or(Route::Queries);
                    navigate(&route);
                }
                Err(e) => {
                    if let SaveError::Api(api_error) = &e {
                        error!(error = %api_error, "save failed");
                    }
                    set_saving.set(false);
                    alert(&e.user_message());
                }
            }
        });
    };

    let back = move |_| {
        let dirty = draft.with_untracked(|d| baseline.with_untracked(|b| d != b));
        if dirty && !confirm(DISCARD_CHANGES) {
            return;
        }
        let route = existing
            .get_value()
            .map(Route::QueryDetail)
            .unwrap_or(Route::Queries);
        navigate(&route);
    };

    view! {
        <div class="page edit-query">
            <div class="page-header">
                <div>
                    <button class="back-link" on:click=back>"← Back"</button>
                    <h1>{if is_new { "New query" } else { "Edit query" }}</h1>
                </div>
            </div>

            <form class="query-form" on:submit=save>
                <label class="form-field">
                    <span class="form-label">"Name"</span>
                    <input
                        type="text"
                        placeholder="e.g. CRM software"
                        prop:value=move || draft.with(|d| d.name.clone())
                        on:input=move |ev| draft.update(|d| d.set_name(event_target_value(&ev)))
                    />
                </label>

                <div class="form-field">
                    <span class="form-label">"Keywords"</span>
                    <TagInput
                        tags=Signal::derive(move || draft.with(|d| d.keywords.clone()))
                        placeholder="Type a keyword and press Enter"
                        on_add=move |keyword: String| draft.try_update(|d| d.add_keyword(&keyword)).unwrap_or(false)
                        on_remove=move |keyword: String| draft.update(|d| d.remove_keyword(&keyword))
                    />
                </div>

                <div class="form-field">
                    <span class="form-label">"Competitors"</span>
                    <TagInput
                        tags=Signal::derive(move || draft.with(|d| d.competitors.clone()))
                        placeholder="Type a competitor and press Enter"
                        on_add=move |competitor: String| draft.try_update(|d| d.add_competitor(&competitor)).unwrap_or(false)
                        on_remove=move |competitor: String| draft.update(|d| d.remove_competitor(&competitor))
                    />
                </div>

                <div class="form-field">
                    <span class="form-label">"Prompt"</span>
                    <input
                        type="text"
                        class="prompt-language"
                        prop:value=move || draft.with(|d| d.prompt_language.clone())
                        on:input=move |ev| draft.update(|d| d.prompt_language = event_target_value(&ev))
                    />
                    <textarea
                        class="prompt-text"
                        rows="8"
                        placeholder="One question per line. Use {keyword} where the keyword goes."
                        prop:value=move || draft.with(|d| d.prompt_text.clone())
                        on:input=move |ev| draft.update(|d| d.set_prompt_text(event_target_value(&ev)))
                    ></textarea>
                </div>

                <div class="form-field">
                    <span class="form-label">"Models"</span>
                    <ModelPicker
                        models=picker_models
                        selected=Signal::derive(move || draft.with(|d| d.selected_models.clone()))
                        on_toggle=move |model_id: String| draft.update(|d| d.toggle_model(&model_id))
                    />
                </div>

                <div class="form-actions">
                    <button type="submit" class="btn primary" disabled=move || saving.get()>
                        {move || if saving.get() { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
