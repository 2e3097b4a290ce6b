//! Dashboard Counter Cards

use leptos::prelude::*;
use visibility_core::dashboard::StatCards;

#[component]
fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(optional, into)] hint: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-label">{label}</div>
            <div class="stat-value">{move || value.get()}</div>
            {move || hint.get().map(|hint| view! { <div class="stat-hint">{hint}</div> })}
        </div>
    }
}

/// The four dashboard counters
#[component]
pub fn StatCardsView(#[prop(into)] cards: Signal<StatCards>) -> impl IntoView {
    view! {
        <div class="stats-grid">
            <StatCard label="Active queries" value=Signal::derive(move || cards.get().active_queries) />
            <StatCard
                label="Tracking results"
                value=Signal::derive(move || cards.get().total_results)
                hint=Signal::derive(move || cards.get().results_hint)
            />
            <StatCard label="Average visibility" value=Signal::derive(move || cards.get().avg_visibility) />
            <StatCard label="Models" value=Signal::derive(move || cards.get().total_models) />
        </div>
    }
}
