//! Result Cell Component
//!
//! One keyword row inside a model column: the latest metrics plus Sources and
//! Ranking dialogs for the evidence behind them.

use leptos::prelude::*;
use visibility_core::reconcile::{Evidence, KeywordCell, MetricDisplay};
use visibility_core::timestamp;

use crate::components::Modal;
use crate::markdown::{is_safe_url, render_response};

fn metric_class(metric: &MetricDisplay) -> &'static str {
    if metric.is_missing() {
        "metric missing"
    } else {
        "metric"
    }
}

#[component]
pub fn ResultCell(cell: KeywordCell) -> impl IntoView {
    let KeywordCell {
        keyword,
        prompt,
        metrics,
        evidence,
    } = cell;
    let sources_open = RwSignal::new(false);
    let ranking_open = RwSignal::new(false);

    let has_evidence = evidence.is_some();
    let source_count = evidence.as_ref().map_or(0, |e| e.sources.len());
    let position = metrics.position.to_string();
    let visibility = metrics.visibility.to_string();
    let sources_title = format!("Sources · {}", keyword);
    let ranking_title = format!("Ranking · {}", keyword);
    let evidence = StoredValue::new(evidence.unwrap_or_else(|| Evidence {
        sources: Vec::new(),
        response_text: String::new(),
        tracked_at: None,
    }));
    let summary = StoredValue::new((position.clone(), visibility.clone()));

    view! {
        <tr class="result-row">
            <td class="keyword" title=prompt>{keyword}</td>
            <td class=metric_class(&metrics.position)>{position}</td>
            <td class=metric_class(&metrics.visibility)>{visibility}</td>
            <td class="cell-actions">
                <button class="link-btn" disabled=!has_evidence on:click=move |_| sources_open.set(true)>
                    {format!("Sources ({})", source_count)}
                </button>
                <button class="link-btn" disabled=!has_evidence on:click=move |_| ranking_open.set(true)>
                    "Ranking"
                </button>
                <Modal title=sources_title open=sources_open>
                    {move || evidence.with_value(|e| {
                        if e.sources.is_empty() {
                            view! { <p class="empty-state">"No sources"</p> }.into_any()
                        } else {
                            view! {
                                <ul class="source-list">
                                    {e.sources.iter().map(|url| {
                                        if is_safe_url(url) {
                                            view! {
                                                <li><a href=url.clone() target="_blank" rel="noopener noreferrer">{url.clone()}</a></li>
                                            }.into_any()
                                        } else {
                                            view! { <li>{url.clone()}</li> }.into_any()
                                        }
                                    }).collect_view()}
                                </ul>
                            }.into_any()
                        }
                    })}
                </Modal>
                <Modal title=ranking_title open=ranking_open>
                    {move || {
                        let (position, visibility) = summary.get_value();
                        let tracked = evidence.with_value(|e| {
                            e.tracked_at.as_deref().and_then(timestamp::format_date)
                        });
                        let html = evidence.with_value(|e| render_response(&e.response_text));
                        view! {
                            <div class="ranking-summary">
                                <span>"Position: "{position}</span>
                                <span>"Visibility: "{visibility}</span>
                                {tracked.map(|date| view! { <span>"Tracked "{date}</span> })}
                            </div>
                            <div class="response-text" inner_html=html></div>
                        }
                    }}
                </Modal>
            </td>
        </tr>
    }
}
