//! Tracking Results
//!
//! Outcomes of asking a model one question for one keyword.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{null_as_default, QueryId};
use crate::timestamp;

/// One stored tracking result (`GET /api/queries/{id}/results`)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TrackingResult {
    #[serde(default)]
    pub query_id: Option<QueryId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub question_text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub keyword: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub model_id: String,
    /// Question with `{keyword}` substituted, as actually sent to the model
    #[serde(default)]
    pub prompt_text: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub tracked_at: Option<String>,
    #[serde(default)]
    pub position: Option<f64>,
    #[serde(default)]
    pub visibility: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sources: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub response_text: String,
}

impl TrackingResult {
    /// Parsed `tracked_at`; `None` when absent or in no format we recognise
    pub fn tracked_at(&self) -> Option<DateTime<Utc>> {
        self.tracked_at.as_deref().and_then(timestamp::parse)
    }
}

/// Per-cell outcome reported by `POST /api/queries/{id}/track`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TrackOutcome {
    #[serde(default)]
    pub keyword: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub position: Option<f64>,
    #[serde(default)]
    pub visibility: Option<f64>,
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TrackReport {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<TrackOutcome>,
}

impl TrackReport {
    pub fn failures(&self) -> usize {
        self.results.iter().filter(|r| !r.success).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_with_null_metrics() {
        let json = r#"{
            "question_text": "Best CRM for {keyword}?",
            "keyword": "acme",
            "model_id": "deepseek-chat",
            "tracked_at": "Tue, 02 Jan 2024 10:00:00 GMT",
            "position": null,
            "visibility": null,
            "sources": null,
            "response_text": "No mention."
        }"#;
        let result: TrackingResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.position, None);
        assert_eq!(result.visibility, None);
        assert!(result.sources.is_empty());
        assert!(result.tracked_at().is_some());
    }

    #[test]
    fn test_track_report_counts_failures() {
        let json = r#"{"message": "Tracking completado", "results": [
            {"keyword": "a", "model": "m", "question": "q", "success": true, "position": 1, "visibility": 20},
            {"keyword": "a", "model": "n", "question": "q", "success": false, "error": "timeout"}
        ]}"#;
        let report: TrackReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.results.len(), 2);
        assert_eq!(report.failures(), 1);
    }
}
