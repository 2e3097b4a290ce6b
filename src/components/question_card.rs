//! Question Card Component
//!
//! One decomposed question with a table per selected model.

use leptos::prelude::*;
use visibility_core::reconcile::QuestionRow;

use crate::components::ResultCell;

#[component]
pub fn QuestionCard(row: QuestionRow) -> impl IntoView {
    let QuestionRow {
        index,
        question,
        columns,
    } = row;

    view! {
        <div class="question-card">
            <div class="question-header">
                <span class="question-index">{format!("Q{}", index + 1)}</span>
                <span class="question-text">{question.text}</span>
                <span class="badge language">{question.language}</span>
            </div>
            <div class="model-columns">
                {columns.into_iter().map(|column| view! {
                    <div class="model-column">
                        <h4 class="model-column-title" title=column.model_id>{column.model_name}</h4>
                        <table class="result-table">
                            <thead>
                                <tr>
                                    <th>"Keyword"</th>
                                    <th>"Position"</th>
                                    <th>"Visibility"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {column.cells.into_iter().map(|cell| view! { <ResultCell cell=cell /> }).collect_view()}
                            </tbody>
                        </table>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}
