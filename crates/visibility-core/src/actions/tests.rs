//! Action flow tests against the in-memory backend

use std::cell::RefCell;
use std::time::Duration;

use super::mock::MockApi;
use super::*;
use crate::model::PromptSet;
use crate::reconcile::{build_grid, MetricDisplay};

#[derive(Default)]
struct CountingScheduler {
    scheduled: RefCell<Vec<Duration>>,
}

impl RefreshScheduler for CountingScheduler {
    fn schedule_refresh(&self, delay: Duration) {
        self.scheduled.borrow_mut().push(delay);
    }
}

fn sample_query(id: &str) -> Query {
    let mut query = Query::new(QueryId::new(id), format!("Query {}", id));
    query.keywords = vec!["acme".to_string()];
    query.models = vec!["modelA".to_string()];
    query.prompts = [("en", "What is the best tool?")].into_iter().collect::<PromptSet>();
    query
}

fn sample_result(query_id: &str, tracked_at: &str, position: f64, visibility: f64) -> TrackingResult {
    TrackingResult {
        query_id: Some(QueryId::new(query_id)),
        question_text: "What is the best tool?".to_string(),
        keyword: "acme".to_string(),
        model_id: "modelA".to_string(),
        tracked_at: Some(tracked_at.to_string()),
        position: Some(position),
        visibility: Some(visibility),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_delete_removes_query_and_refreshes_stats() {
    let api = MockApi::with_queries(vec![sample_query("q1"), sample_query("q2")]);

    let data = delete_query(&api, &QueryId::new("q1")).await.expect("delete failed");

    assert!(data.queries.iter().all(|s| s.query.id.as_str() != "q1"));
    assert_eq!(data.queries.len(), 1);
    assert_eq!(data.stats.active_queries, 1);
    assert_eq!(
        api.calls(),
        vec!["DELETE /api/queries/q1", "GET /api/stats", "GET /api/queries"]
    );
}

#[tokio::test]
async fn test_failed_delete_does_not_refetch() {
    let api = MockApi::with_queries(vec![sample_query("q1")]);
    api.fail("delete_query", ApiError::Status { status: 500, message: None });

    let err = delete_query(&api, &QueryId::new("q1")).await.unwrap_err();

    assert_eq!(err.user_message(DELETE_FAILED), DELETE_FAILED);
    assert_eq!(api.calls(), vec!["DELETE /api/queries/q1"]);
    assert_eq!(api.state.borrow().queries.len(), 1);
}

#[tokio::test]
async fn test_track_all_posts_once_and_schedules_one_refresh() {
    let api = MockApi::default();
    let scheduler = CountingScheduler::default();
    let delay = Duration::from_secs(5);

    let message = track_all(&api, &scheduler, delay).await.expect("track-all failed");

    assert_eq!(message, "Tracking iniciado");
    assert_eq!(api.calls(), vec!["POST /api/track-all"]);
    assert_eq!(*scheduler.scheduled.borrow(), vec![delay]);
}

#[tokio::test]
async fn test_failed_track_all_schedules_nothing() {
    let api = MockApi::default();
    api.fail("track_all", ApiError::Network("connection refused".to_string()));
    let scheduler = CountingScheduler::default();

    let err = track_all(&api, &scheduler, Duration::from_secs(5)).await.unwrap_err();

    assert_eq!(err.user_message(TRACK_ALL_FAILED), TRACK_ALL_FAILED);
    assert_eq!(api.calls().len(), 1);
    assert!(scheduler.scheduled.borrow().is_empty());
}

#[tokio::test]
async fn test_track_query_refetches_query_and_results() {
    let api = MockApi::with_queries(vec![sample_query("q1")]);
    api.state.borrow_mut().on_track = vec![sample_result("q1", "2024-01-02", 1.0, 20.0)];

    let tracked = track_query(&api, &QueryId::new("q1")).await.expect("track failed");

    assert_eq!(tracked.report.results.len(), 1);
    let (query, results) = tracked.refreshed.clone().expect("re-fetch missing");
    assert_eq!(results.len(), 1);
    assert_eq!(query.id.as_str(), "q1");
    assert_eq!(tracked.summary(), "Tracking completado");
    assert_eq!(
        api.calls(),
        vec![
            "POST /api/queries/q1/track",
            "GET /api/queries/q1",
            "GET /api/queries/q1/results"
        ]
    );
}

#[tokio::test]
async fn test_track_query_failure_surfaces_server_message() {
    let api = MockApi::with_queries(vec![sample_query("q1")]);
    api.fail(
        "track_query",
        ApiError::Status {
            status: 404,
            message: Some("Query no encontrada".to_string()),
        },
    );

    let mut control = TrackControl::default();
    assert!(control.begin("Track"));
    let err = track_query(&api, &QueryId::new("q1")).await.unwrap_err();
    let restored = control.finish();

    assert_eq!(err.user_message(TRACK_FAILED), "Query no encontrada");
    assert_eq!(restored.as_deref(), Some("Track"));
    assert_eq!(api.calls(), vec!["POST /api/queries/q1/track"]);
}

#[tokio::test]
async fn test_track_query_keeps_report_when_refetch_fails() {
    let api = MockApi::with_queries(vec![sample_query("q1")]);
    api.state.borrow_mut().on_track = vec![sample_result("q1", "2024-01-02", 1.0, 20.0)];
    api.fail("results", ApiError::Network("reset".to_string()));

    let tracked = track_query(&api, &QueryId::new("q1")).await.expect("track request failed");

    assert_eq!(tracked.report.results.len(), 1);
    assert_eq!(tracked.refreshed, None);
    assert_eq!(
        tracked.summary(),
        format!("Tracking completado. {}", TRACK_RELOAD_FAILED)
    );

    let detail = load_detail(&api, &QueryId::new("q1")).await.unwrap();
    assert_eq!(tracked.apply_to(Some(detail.clone())), Some(detail));
}

#[tokio::test]
async fn test_tracked_data_fills_detail_before_first_load() {
    let api = MockApi::with_queries(vec![sample_query("q1")]);
    api.state.borrow_mut().on_track = vec![sample_result("q1", "2024-01-02", 3.5, 42.0)];

    let tracked = track_query(&api, &QueryId::new("q1")).await.unwrap();
    let detail = tracked.apply_to(None).expect("tracked data dropped");

    assert_eq!(detail.query.id.as_str(), "q1");
    assert_eq!(detail.results.len(), 1);
    assert_eq!(detail.names, ModelNames::builtin());
    assert!(detail.has_questions());
}

#[tokio::test]
async fn test_tracked_data_keeps_loaded_catalog() {
    let api = MockApi::with_queries(vec![sample_query("q1")]);
    api.state.borrow_mut().models = vec![ModelInfo::new("modelA", "Model A")];
    let loaded = load_detail(&api, &QueryId::new("q1")).await.unwrap();
    assert!(loaded.results.is_empty());

    api.state.borrow_mut().on_track = vec![sample_result("q1", "2024-01-02", 3.5, 42.0)];
    let tracked = track_query(&api, &QueryId::new("q1")).await.unwrap();
    let detail = tracked.apply_to(Some(loaded.clone())).unwrap();

    assert_eq!(detail.names, loaded.names);
    assert_eq!(detail.results.len(), 1);
}

#[tokio::test]
async fn test_blank_prompts_have_no_questions() {
    let mut query = sample_query("q1");
    query.prompts = [("en", "  \n\n   ")].into_iter().collect::<PromptSet>();
    let api = MockApi::with_queries(vec![query]);

    let detail = load_detail(&api, &QueryId::new("q1")).await.unwrap();

    assert!(!detail.query.prompts.is_empty());
    assert!(!detail.has_questions());
}

#[tokio::test]
async fn test_invalid_draft_never_hits_the_network() {
    let api = MockApi::default();
    let draft = QueryDraft::default();

    let err = save_draft(&api, &draft, None).await.unwrap_err();

    assert_eq!(err, SaveError::Invalid(DraftError::MissingName));
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn test_save_draft_creates_then_updates() {
    let api = MockApi::default();
    let mut draft = QueryDraft::default();
    draft.set_name("Brand");
    draft.add_keyword("acme");
    draft.set_prompt_text("Best tool?");
    draft.toggle_model("modelA");

    let id = save_draft(&api, &draft, None).await.unwrap().expect("create returns an id");
    draft.set_name("Brand renamed");
    save_draft(&api, &draft, Some(&id)).await.unwrap();

    let state = api.state.borrow();
    assert_eq!(state.queries.len(), 1);
    assert_eq!(state.queries[0].name, "Brand renamed");
    assert_eq!(state.calls, vec!["POST /api/queries".to_string(), format!("PUT /api/queries/{}", id)]);
}

#[tokio::test]
async fn test_save_error_message_prefers_backend_text() {
    let api = MockApi::default();
    api.fail("create_query", ApiError::from_response(400, r#"{"error": "Nombre duplicado"}"#));
    let mut draft = QueryDraft::default();
    draft.set_name("Brand");
    draft.add_keyword("acme");
    draft.set_prompt_text("Best tool?");
    draft.toggle_model("modelA");

    let err = save_draft(&api, &draft, None).await.unwrap_err();
    assert_eq!(err.user_message(), "Nombre duplicado");
}

#[tokio::test]
async fn test_load_detail_degrades_without_results_or_catalog() {
    let api = MockApi::with_queries(vec![sample_query("q1")]);
    api.fail("results", ApiError::Network("reset".to_string()));
    api.fail("models", ApiError::Status { status: 500, message: None });

    let detail = load_detail(&api, &QueryId::new("q1")).await.expect("query itself loads");

    assert!(detail.results.is_empty());
    assert_eq!(detail.names, ModelNames::builtin());
}

#[tokio::test]
async fn test_load_detail_requires_the_query() {
    let api = MockApi::default();
    let err = load_detail(&api, &QueryId::new("missing")).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.user_message(LOAD_FAILED), "Query no encontrada");
}

#[tokio::test]
async fn test_detail_page_end_to_end() {
    let api = MockApi::with_queries(vec![sample_query("q1")]);
    {
        let mut state = api.state.borrow_mut();
        state.results = vec![
            sample_result("q1", "2024-01-01", 9.0, 1.0),
            sample_result("q1", "2024-01-02", 3.5, 42.0),
            sample_result("other", "2024-01-03", 1.0, 99.0),
        ];
        state.models = vec![ModelInfo::new("modelA", "Model A")];
    }

    let detail = load_detail(&api, &QueryId::new("q1")).await.unwrap();
    let mut query = detail.query.clone();
    query.keywords.push("globex".to_string());
    let grid = build_grid(&query, &detail.results, &detail.names);

    let column = &grid[0].columns[0];
    assert_eq!(column.model_name, "Model A");
    assert_eq!(column.cells[0].metrics.position.as_str(), "3.50");
    assert_eq!(column.cells[0].metrics.visibility.as_str(), "42.00%");
    assert_eq!(column.cells[1].metrics.position, MetricDisplay::NoData);
    assert_eq!(column.cells[1].metrics.visibility, MetricDisplay::Pending);
}

#[test]
fn test_track_summary_mentions_failed_cells() {
    let mut report = TrackReport::default();
    assert_eq!(track_summary(&report), TRACK_DONE);

    report.message = Some("Tracking completado".to_string());
    report.results = vec![
        crate::model::TrackOutcome { success: true, ..Default::default() },
        crate::model::TrackOutcome { success: false, error: Some("timeout".to_string()), ..Default::default() },
    ];
    assert_eq!(track_summary(&report), "Tracking completado (1 of 2 failed)");
}
