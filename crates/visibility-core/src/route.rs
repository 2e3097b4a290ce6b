//! Page Routes
//!
//! Every page is its own document; navigating means loading a new URL.

use crate::api::{decode_segment, encode_segment};
use crate::model::QueryId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Queries,
    QueryDetail(QueryId),
    EditQuery(QueryId),
    NewQuery,
    NotFound,
}

impl Route {
    /// Route for a location pathname. Query string, fragment and empty segments are ignored.
    pub fn parse(path: &str) -> Route {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Dashboard,
            ["queries"] => Route::Queries,
            ["query", id] => {
                let id = QueryId::new(decode_segment(id));
                if id.is_placeholder() {
                    Route::NotFound
                } else {
                    Route::QueryDetail(id)
                }
            }
            ["query", id, "edit"] => {
                let id = QueryId::new(decode_segment(id));
                if id.is_placeholder() {
                    Route::NewQuery
                } else {
                    Route::EditQuery(id)
                }
            }
            _ => Route::NotFound,
        }
    }

    pub fn href(&self) -> String {
        match self {
            Route::Dashboard | Route::NotFound => "/".to_string(),
            Route::Queries => "/queries".to_string(),
            Route::QueryDetail(id) => format!("/query/{}", encode_segment(id.as_str())),
            Route::EditQuery(id) => format!("/query/{}/edit", encode_segment(id.as_str())),
            Route::NewQuery => "/query/new/edit".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_routes() {
        assert_eq!(Route::parse("/"), Route::Dashboard);
        assert_eq!(Route::parse(""), Route::Dashboard);
        assert_eq!(Route::parse("/queries/"), Route::Queries);
        assert_eq!(Route::parse("/query/abc"), Route::QueryDetail(QueryId::new("abc")));
        assert_eq!(Route::parse("/query/abc/edit"), Route::EditQuery(QueryId::new("abc")));
        assert_eq!(Route::parse("/query/new/edit"), Route::NewQuery);
        assert_eq!(Route::parse("/query/0/edit"), Route::NewQuery);
        assert_eq!(Route::parse("/query/new"), Route::NotFound);
        assert_eq!(Route::parse("/settings"), Route::NotFound);
    }

    #[test]
    fn test_parse_ignores_query_string() {
        assert_eq!(Route::parse("/queries?t=1700000000"), Route::Queries);
        assert_eq!(Route::parse("/query/abc#top"), Route::QueryDetail(QueryId::new("abc")));
    }

    #[test]
    fn test_href_round_trips_escaped_ids() {
        let route = Route::EditQuery(QueryId::new("a b"));
        assert_eq!(route.href(), "/query/a%20b/edit");
        assert_eq!(Route::parse(&route.href()), route);
    }
}
