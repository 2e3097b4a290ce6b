//! In-memory backend for action tests

use std::cell::RefCell;
use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;

use crate::api::{ApiError, ApiResult, Endpoint, TrackingApi, Widget};
use crate::model::{
    ApiMessage, DashboardStats, ModelInfo, Query, QueryId, QueryPayload, QuerySummary, TrackOutcome,
    TrackReport, TrackingResult,
};

#[derive(Default)]
pub struct MockState {
    pub queries: Vec<Query>,
    pub results: Vec<TrackingResult>,
    pub models: Vec<ModelInfo>,
    /// Appended to `results` by the next track request
    pub on_track: Vec<TrackingResult>,
    /// Every request as "METHOD /path", in issue order
    pub calls: Vec<String>,
    /// Operation name -> error to return instead of succeeding
    pub failures: HashMap<&'static str, ApiError>,
    next_id: u32,
}

#[derive(Default)]
pub struct MockApi {
    pub state: RefCell<MockState>,
}

impl MockApi {
    pub fn with_queries(queries: Vec<Query>) -> Self {
        let api = Self::default();
        api.state.borrow_mut().queries = queries;
        api
    }

    pub fn fail(&self, operation: &'static str, error: ApiError) {
        self.state.borrow_mut().failures.insert(operation, error);
    }

    pub fn calls(&self) -> Vec<String> {
        self.state.borrow().calls.clone()
    }

    fn record(&self, operation: &'static str, method: &str, endpoint: Endpoint<'_>) -> ApiResult<()> {
        let mut state = self.state.borrow_mut();
        state.calls.push(format!("{} {}", method, endpoint.path()));
        match state.failures.get(operation) {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    fn not_found() -> ApiError {
        ApiError::Status {
            status: 404,
            message: Some("Query no encontrada".to_string()),
        }
    }
}

#[async_trait(?Send)]
impl TrackingApi for MockApi {
    async fn stats(&self) -> ApiResult<DashboardStats> {
        self.record("stats", "GET", Endpoint::Stats)?;
        let state = self.state.borrow();
        Ok(DashboardStats {
            active_queries: state.queries.len() as u64,
            total_results: state.results.len() as u64,
            avg_visibility: 0.0,
            total_models: state.models.len() as u64,
        })
    }

    async fn list_queries(&self) -> ApiResult<Vec<QuerySummary>> {
        self.record("list_queries", "GET", Endpoint::Queries)?;
        Ok(self.state.borrow().queries.iter().cloned().map(QuerySummary::from).collect())
    }

    async fn get_query(&self, id: &QueryId) -> ApiResult<Query> {
        self.record("get_query", "GET", Endpoint::Query(id))?;
        self.state
            .borrow()
            .queries
            .iter()
            .find(|q| &q.id == id)
            .cloned()
            .ok_or_else(Self::not_found)
    }

    async fn create_query(&self, payload: &QueryPayload) -> ApiResult<ApiMessage> {
        self.record("create_query", "POST", Endpoint::Queries)?;
        let mut state = self.state.borrow_mut();
        state.next_id += 1;
        let id = QueryId::new(format!("new-{}", state.next_id));
        let mut query = Query::new(id.clone(), payload.name.clone());
        query.keywords = payload.keywords.clone();
        query.competitors = payload.competitors.clone();
        query.prompts = payload.prompts.clone();
        query.models = payload.models.clone();
        state.queries.push(query);
        Ok(ApiMessage {
            message: Some("Query creada correctamente".to_string()),
            error: None,
            id: Some(id.as_str().to_string()),
        })
    }

    async fn update_query(&self, id: &QueryId, payload: &QueryPayload) -> ApiResult<ApiMessage> {
        self.record("update_query", "PUT", Endpoint::Query(id))?;
        let mut state = self.state.borrow_mut();
        let query = state
            .queries
            .iter_mut()
            .find(|q| &q.id == id)
            .ok_or_else(Self::not_found)?;
        query.name = payload.name.clone();
        query.keywords = payload.keywords.clone();
        query.competitors = payload.competitors.clone();
        query.prompts = payload.prompts.clone();
        query.models = payload.models.clone();
        Ok(ApiMessage::default())
    }

    async fn delete_query(&self, id: &QueryId) -> ApiResult<()> {
        self.record("delete_query", "DELETE", Endpoint::Query(id))?;
        self.state.borrow_mut().queries.retain(|q| &q.id != id);
        Ok(())
    }

    async fn track_query(&self, id: &QueryId) -> ApiResult<TrackReport> {
        self.record("track_query", "POST", Endpoint::TrackQuery(id))?;
        let mut state = self.state.borrow_mut();
        let tracked: Vec<TrackingResult> = state.on_track.drain(..).collect();
        let outcomes = tracked
            .iter()
            .map(|r| TrackOutcome {
                keyword: r.keyword.clone(),
                model: r.model_id.clone(),
                question: r.question_text.clone(),
                position: r.position,
                visibility: r.visibility,
                success: true,
                error: None,
            })
            .collect();
        state.results.extend(tracked);
        Ok(TrackReport {
            message: Some("Tracking completado".to_string()),
            results: outcomes,
        })
    }

    async fn track_all(&self) -> ApiResult<ApiMessage> {
        self.record("track_all", "POST", Endpoint::TrackAll)?;
        Ok(ApiMessage {
            message: Some("Tracking iniciado".to_string()),
            ..Default::default()
        })
    }

    async fn results(&self, id: &QueryId) -> ApiResult<Vec<TrackingResult>> {
        self.record("results", "GET", Endpoint::Results(id))?;
        Ok(self
            .state
            .borrow()
            .results
            .iter()
            .filter(|r| r.query_id.as_ref() == Some(id))
            .cloned()
            .collect())
    }

    async fn models(&self) -> ApiResult<Vec<ModelInfo>> {
        self.record("models", "GET", Endpoint::Models)?;
        Ok(self.state.borrow().models.clone())
    }

    async fn widget(&self, widget: Widget) -> ApiResult<Value> {
        self.record("widget", "GET", Endpoint::Widget(widget))?;
        Ok(Value::Array(Vec::new()))
    }
}
