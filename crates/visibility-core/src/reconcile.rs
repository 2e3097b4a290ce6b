//! Result Reconciliation
//!
//! Picks the result to show for each (question, keyword, model) cell of the
//! detail page and formats its metrics.

use std::fmt;

use crate::catalog::ModelNames;
use crate::model::{Query, TrackingResult};
use crate::questions::{decompose, Question};

/// Position sentinel: no result, or a result without a position
pub const NO_DATA: &str = "No data";
/// Visibility sentinel: no result, or a result without a visibility score
pub const PENDING: &str = "Pending";

/// Identity of a cell. Matching is exact, case-sensitive string equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellKey<'a> {
    pub question_text: &'a str,
    pub keyword: &'a str,
    pub model_id: &'a str,
}

impl CellKey<'_> {
    pub fn matches(&self, result: &TrackingResult) -> bool {
        result.question_text == self.question_text
            && result.keyword == self.keyword
            && result.model_id == self.model_id
    }
}

/// Most recent result for `key`, or `None` when nothing matches.
///
/// Unparseable timestamps rank below every parseable one. On equal timestamps
/// the later entry in `results` wins.
pub fn latest_result<'r>(results: &'r [TrackingResult], key: &CellKey<'_>) -> Option<&'r TrackingResult> {
    results
        .iter()
        .filter(|result| key.matches(result))
        .max_by_key(|result| result.tracked_at())
}

/// A formatted metric or one of the two "nothing to show" sentinels
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetricDisplay {
    Value(String),
    NoData,
    Pending,
}

impl MetricDisplay {
    pub fn is_missing(&self) -> bool {
        !matches!(self, MetricDisplay::Value(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            MetricDisplay::Value(text) => text,
            MetricDisplay::NoData => NO_DATA,
            MetricDisplay::Pending => PENDING,
        }
    }
}

impl fmt::Display for MetricDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn format_position(position: Option<f64>) -> MetricDisplay {
    match position {
        Some(value) => MetricDisplay::Value(format!("{:.2}", value)),
        None => MetricDisplay::NoData,
    }
}

/// Visibility is stored as 0-100 already, so it is printed as-is with a `%`
pub fn format_visibility(visibility: Option<f64>) -> MetricDisplay {
    match visibility {
        Some(value) => MetricDisplay::Value(format!("{:.2}%", value)),
        None => MetricDisplay::Pending,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellMetrics {
    pub position: MetricDisplay,
    pub visibility: MetricDisplay,
}

impl CellMetrics {
    pub fn from_result(result: Option<&TrackingResult>) -> Self {
        Self {
            position: format_position(result.and_then(|r| r.position)),
            visibility: format_visibility(result.and_then(|r| r.visibility)),
        }
    }
}

/// What backs a cell that has a result: the links and full answer behind the modals
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evidence {
    pub sources: Vec<String>,
    pub response_text: String,
    pub tracked_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordCell {
    pub keyword: String,
    /// The question with this keyword substituted
    pub prompt: String,
    pub metrics: CellMetrics,
    pub evidence: Option<Evidence>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelColumn {
    pub model_id: String,
    pub model_name: String,
    pub cells: Vec<KeywordCell>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRow {
    /// Position in the decomposed question list; stable key for rendering
    pub index: usize,
    pub question: Question,
    pub columns: Vec<ModelColumn>,
}

/// Full detail-page projection: questions x selected models x keywords.
///
/// Recomputed on every render; cost is O(questions * models * keywords * results).
pub fn build_grid(query: &Query, results: &[TrackingResult], names: &ModelNames) -> Vec<QuestionRow> {
    decompose(&query.prompts)
        .into_iter()
        .enumerate()
        .map(|(index, question)| {
            let columns = query
                .models
                .iter()
                .map(|model_id| ModelColumn {
                    model_id: model_id.clone(),
                    model_name: names.display_name(model_id).to_string(),
                    cells: query
                        .keywords
                        .iter()
                        .map(|keyword| build_cell(&question, keyword, model_id, results))
                        .collect(),
                })
                .collect();
            QuestionRow {
                index,
                question,
                columns,
            }
        })
        .collect()
}

fn build_cell(question: &Question, keyword: &str, model_id: &str, results: &[TrackingResult]) -> KeywordCell {
    let key = CellKey {
        question_text: &question.text,
        keyword,
        model_id,
    };
    let result = latest_result(results, &key);
    KeywordCell {
        keyword: keyword.to_string(),
        prompt: question.prompt_for(keyword),
        metrics: CellMetrics::from_result(result),
        evidence: result.map(|r| Evidence {
            sources: r.sources.clone(),
            response_text: r.response_text.clone(),
            tracked_at: r.tracked_at.clone(),
        }),
    }
}
