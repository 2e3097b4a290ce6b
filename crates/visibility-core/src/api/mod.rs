//! Tracking API
//!
//! The REST contract the dashboard depends on. The browser build implements
//! [`TrackingApi`] over HTTP; tests implement it in memory.

mod endpoint;
mod error;

pub use endpoint::{decode_segment, encode_segment, Endpoint, Widget};
pub use error::{ApiError, ApiResult};

use async_trait::async_trait;
use serde_json::Value;

use crate::model::{
    ApiMessage, DashboardStats, ModelInfo, Query, QueryId, QueryPayload, QuerySummary, TrackReport,
    TrackingResult,
};

/// One async method per backend endpoint.
///
/// Futures are `?Send`: in the browser they run on the single UI thread.
#[async_trait(?Send)]
pub trait TrackingApi {
    /// `GET /api/stats`
    async fn stats(&self) -> ApiResult<DashboardStats>;

    /// `GET /api/queries`
    async fn list_queries(&self) -> ApiResult<Vec<QuerySummary>>;

    /// `GET /api/queries/{id}`
    async fn get_query(&self, id: &QueryId) -> ApiResult<Query>;

    /// `POST /api/queries`
    async fn create_query(&self, payload: &QueryPayload) -> ApiResult<ApiMessage>;

    /// `PUT /api/queries/{id}`
    async fn update_query(&self, id: &QueryId, payload: &QueryPayload) -> ApiResult<ApiMessage>;

    /// `DELETE /api/queries/{id}`
    async fn delete_query(&self, id: &QueryId) -> ApiResult<()>;

    /// `POST /api/queries/{id}/track`
    async fn track_query(&self, id: &QueryId) -> ApiResult<TrackReport>;

    /// `POST /api/track-all`; the backend only reports that tracking started
    async fn track_all(&self) -> ApiResult<ApiMessage>;

    /// `GET /api/queries/{id}/results`
    async fn results(&self, id: &QueryId) -> ApiResult<Vec<TrackingResult>>;

    /// `GET /api/models`
    async fn models(&self) -> ApiResult<Vec<ModelInfo>>;

    /// Supplementary dashboard widgets, passed through untyped
    async fn widget(&self, widget: Widget) -> ApiResult<Value>;
}
