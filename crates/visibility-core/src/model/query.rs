//! Query Entities
//!
//! A query is a named tracking configuration: keywords, prompt templates and models.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{null_as_default, PromptSet};

/// Backend document identifier of a query
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryId(String);

impl QueryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Ids the pages use to mean "no query yet" (create form)
    pub fn is_placeholder(&self) -> bool {
        matches!(self.0.as_str(), "" | "0" | "new")
    }
}

impl fmt::Display for QueryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Full query record as returned by `GET /api/queries/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    pub id: QueryId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub keywords: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub competitors: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub prompts: PromptSet,
    #[serde(default, deserialize_with = "null_as_default")]
    pub models: Vec<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Query {
    pub fn new(id: QueryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            keywords: Vec::new(),
            competitors: Vec::new(),
            prompts: PromptSet::new(),
            models: Vec::new(),
            created_at: None,
            updated_at: None,
        }
    }
}

/// A number, or the backend's `"-"` placeholder for "nothing to average"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Number(n) => write!(f, "{}", n),
            MetricValue::Text(s) => f.write_str(s),
        }
    }
}

impl Default for MetricValue {
    fn default() -> Self {
        MetricValue::Text("-".to_string())
    }
}

/// Recent averages for one keyword across a query's latest results
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct KeywordMetrics {
    #[serde(default)]
    pub avg_visibility: f64,
    #[serde(default)]
    pub avg_position: MetricValue,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QueryStats {
    #[serde(default)]
    pub total_keywords: u64,
    #[serde(default)]
    pub total_models: u64,
}

/// Query as returned by the list endpoint, with per-keyword aggregates attached
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuerySummary {
    #[serde(flatten)]
    pub query: Query,
    #[serde(default, deserialize_with = "null_as_default")]
    pub keyword_metrics: BTreeMap<String, KeywordMetrics>,
    #[serde(default)]
    pub stats: Option<QueryStats>,
}

impl From<Query> for QuerySummary {
    fn from(query: Query) -> Self {
        Self {
            query,
            keyword_metrics: BTreeMap::new(),
            stats: None,
        }
    }
}

/// Body of `POST /api/queries` and `PUT /api/queries/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryPayload {
    pub name: String,
    pub keywords: Vec<String>,
    pub competitors: Vec<String>,
    pub prompts: PromptSet,
    pub models: Vec<String>,
}
