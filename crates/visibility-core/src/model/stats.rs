//! Dashboard Counters and Catalog Entries

use serde::{Deserialize, Serialize};

/// Aggregate counters from `GET /api/stats`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(default)]
    pub active_queries: u64,
    #[serde(default, alias = "total_mentions")]
    pub total_results: u64,
    #[serde(default)]
    pub avg_visibility: f64,
    #[serde(default)]
    pub total_models: u64,
}

/// Model catalog entry from `GET /api/models`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub provider: Option<String>,
}

impl ModelInfo {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            provider: None,
        }
    }
}

/// Generic `{message}` / `{error}` envelope used by mutating endpoints
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    /// Set by create: id of the new query
    #[serde(default)]
    pub id: Option<String>,
}
