//! Dashboard View Model
//!
//! Text the dashboard and query list pages show, derived from API payloads.

use serde_json::Value;

use crate::model::{DashboardStats, QueryId, QuerySummary};
use crate::timestamp;

/// Shown where a metric or trend has no value
pub const PLACEHOLDER: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCards {
    pub active_queries: String,
    pub total_results: String,
    pub avg_visibility: String,
    pub total_models: String,
    /// Secondary line under the results counter
    pub results_hint: Option<String>,
}

impl From<&DashboardStats> for StatCards {
    fn from(stats: &DashboardStats) -> Self {
        Self {
            active_queries: stats.active_queries.to_string(),
            total_results: stats.total_results.to_string(),
            avg_visibility: format!("{}%", stats.avg_visibility),
            total_models: stats.total_models.to_string(),
            results_hint: (stats.total_results > 0).then(|| format!("+{} tracking", stats.total_results)),
        }
    }
}

/// One line of a query's keyword table on the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordRow {
    pub keyword: String,
    pub avg_position: String,
    pub avg_visibility: String,
}

pub fn keyword_rows(summary: &QuerySummary) -> Vec<KeywordRow> {
    summary
        .query
        .keywords
        .iter()
        .map(|keyword| match summary.keyword_metrics.get(keyword) {
            Some(metrics) => KeywordRow {
                keyword: keyword.clone(),
                avg_position: metrics.avg_position.to_string(),
                avg_visibility: format!("{}%", metrics.avg_visibility),
            },
            None => KeywordRow {
                keyword: keyword.clone(),
                avg_position: PLACEHOLDER.to_string(),
                avg_visibility: PLACEHOLDER.to_string(),
            },
        })
        .collect()
}

/// "1 keyword", "3 keywords"
pub fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

/// Facts shown on a query card of the query list page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryCard {
    pub id: QueryId,
    pub name: String,
    pub keyword_count: usize,
    pub model_count: usize,
    pub created_on: Option<String>,
}

impl From<&QuerySummary> for QueryCard {
    fn from(summary: &QuerySummary) -> Self {
        let query = &summary.query;
        Self {
            id: query.id.clone(),
            name: query.name.clone(),
            keyword_count: query.keywords.len(),
            model_count: query.models.len(),
            created_on: query.created_at.as_deref().and_then(timestamp::format_date),
        }
    }
}

/// Header + rows rendering of an untyped widget payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => PLACEHOLDER.to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Tabulate an array of flat objects; headers follow first appearance.
///
/// A `{"data": [...]}` wrapper is unwrapped. Anything else has no table form.
pub fn json_table(value: &Value) -> Option<JsonTable> {
    let rows = match value {
        Value::Array(rows) => rows,
        Value::Object(map) => match map.get("data") {
            Some(Value::Array(rows)) => rows,
            _ => return None,
        },
        _ => return None,
    };
    if rows.is_empty() {
        return None;
    }

    let mut headers: Vec<String> = Vec::new();
    for row in rows {
        let object = row.as_object()?;
        for key in object.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    let rows = rows
        .iter()
        .filter_map(Value::as_object)
        .map(|object| {
            headers
                .iter()
                .map(|header| object.get(header).map(cell_text).unwrap_or_else(|| PLACEHOLDER.to_string()))
                .collect()
        })
        .collect();
    Some(JsonTable { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{KeywordMetrics, MetricValue, Query};
    use serde_json::json;

    #[test]
    fn test_stat_cards() {
        let cards = StatCards::from(&DashboardStats {
            active_queries: 2,
            total_results: 40,
            avg_visibility: 37.5,
            total_models: 3,
        });
        assert_eq!(cards.avg_visibility, "37.5%");
        assert_eq!(cards.results_hint.as_deref(), Some("+40 tracking"));

        let empty = StatCards::from(&DashboardStats::default());
        assert_eq!(empty.avg_visibility, "0%");
        assert_eq!(empty.results_hint, None);
    }

    #[test]
    fn test_keyword_rows_with_and_without_metrics() {
        let mut query = Query::new(QueryId::new("q"), "Q");
        query.keywords = vec!["acme".to_string(), "globex".to_string()];
        let mut summary = QuerySummary::from(query);
        summary.keyword_metrics.insert(
            "acme".to_string(),
            KeywordMetrics {
                avg_visibility: 12.5,
                avg_position: MetricValue::Number(2.0),
            },
        );

        let rows = keyword_rows(&summary);
        assert_eq!(rows[0].avg_position, "2");
        assert_eq!(rows[0].avg_visibility, "12.5%");
        assert_eq!(rows[1].avg_position, PLACEHOLDER);
        assert_eq!(rows[1].avg_visibility, PLACEHOLDER);
    }

    #[test]
    fn test_query_card_counts_and_date() {
        let mut query = Query::new(QueryId::new("q"), "Q");
        query.models = vec!["a".to_string(), "b".to_string()];
        query.created_at = Some("Mon, 15 Jan 2024 09:00:00 GMT".to_string());
        let card = QueryCard::from(&QuerySummary::from(query));
        assert_eq!(card.model_count, 2);
        assert_eq!(card.keyword_count, 0);
        assert_eq!(card.created_on.as_deref(), Some("Jan 15, 2024"));
    }

    #[test]
    fn test_plural() {
        assert_eq!(plural(1, "keyword"), "1 keyword");
        assert_eq!(plural(0, "model"), "0 models");
    }

    #[test]
    fn test_json_table_from_array_and_wrapper() {
        let value = json!([
            {"brand": "acme", "mentions": 4},
            {"brand": "globex", "share": null}
        ]);
        let table = json_table(&value).unwrap();
        assert_eq!(table.headers, vec!["brand", "mentions", "share"]);
        assert_eq!(table.rows[0], vec!["acme", "4", "-"]);
        assert_eq!(table.rows[1], vec!["globex", "-", "-"]);

        let wrapped = json!({"data": [{"x": 1}]});
        assert_eq!(json_table(&wrapped).unwrap().rows, vec![vec!["1".to_string()]]);
    }

    #[test]
    fn test_json_table_rejects_other_shapes() {
        assert_eq!(json_table(&json!({"labels": [], "values": []})), None);
        assert_eq!(json_table(&json!([])), None);
        assert_eq!(json_table(&json!([1, 2])), None);
    }
}
