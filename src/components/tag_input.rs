//! Tag Input Component
//!
//! Chip list with a text input: Enter adds, × removes. Pasting
//! semicolon-separated text adds each entry.

use leptos::prelude::*;

/// Entries of a batch input like "acme; globex"
pub fn split_batch(input: &str) -> Vec<String> {
    input
        .split(';')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

/// Props:
/// - tags: current entries, in order
/// - on_add: called once per entry; returns whether it was added
/// - on_remove: called with the entry whose × was clicked
#[component]
pub fn TagInput(
    #[prop(into)] tags: Signal<Vec<String>>,
    #[prop(into)] placeholder: String,
    #[prop(into)] on_add: Callback<String, bool>,
    #[prop(into)] on_remove: Callback<String>,
) -> impl IntoView {
    let (input_value, set_input_value) = signal(String::new());

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() != "Enter" {
            return;
        }
        ev.prevent_default();
        let entries = split_batch(&input_value.get_untracked());
        if entries.is_empty() {
            return;
        }
        for entry in entries {
            on_add.run(entry);
        }
        set_input_value.set(String::new());
    };

    view! {
        <div class="tag-input">
            <div class="tag-list">
                <For
                    each=move || tags.get()
                    key=|tag| tag.clone()
                    children=move |tag| {
                        let value = tag.clone();
                        view! {
                            <span class="tag-chip">
                                {tag}
                                <button
                                    type="button"
                                    class="tag-remove-btn"
                                    on:click=move |_| on_remove.run(value.clone())
                                >
                                    "×"
                                </button>
                            </span>
                        }
                    }
                />
            </div>
            <input
                type="text"
                class="tag-input-field"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| set_input_value.set(event_target_value(&ev))
                on:keydown=on_keydown
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_batch() {
        assert_eq!(split_batch("acme"), vec!["acme"]);
        assert_eq!(split_batch(" acme ; globex;; "), vec!["acme", "globex"]);
        assert!(split_batch(" ; ").is_empty());
    }
}
