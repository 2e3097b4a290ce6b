//! Backend Bindings
//!
//! [`HttpApi`] speaks the tracking REST contract through reqwest's `fetch`
//! backend. Browser helpers (dialogs, location) live alongside it.

mod dialog;
mod window;

pub use dialog::*;
pub use window::*;

use async_trait::async_trait;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use visibility_core::api::{ApiError, ApiResult, Endpoint, TrackingApi, Widget};
use visibility_core::model::{
    ApiMessage, DashboardStats, ModelInfo, Query, QueryId, QueryPayload, QuerySummary, TrackReport,
    TrackingResult,
};
use visibility_core::ApiConfig;

#[derive(Clone)]
pub struct HttpApi {
    client: Client,
    config: ApiConfig,
}

impl HttpApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Issue one request and return the body of a 2xx response
    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        endpoint: Endpoint<'_>,
        body: Option<&B>,
    ) -> ApiResult<String> {
        let path = endpoint.path();
        debug!(%method, %path, "request");

        let mut request = self.client.request(method.clone(), self.config.url(&endpoint));
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await.map_err(|e| {
            warn!(%method, %path, error = %e, "request did not complete");
            ApiError::Network(e.to_string())
        })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if status.is_success() {
            debug!(%method, %path, status = status.as_u16(), "response");
            Ok(text)
        } else {
            let error = ApiError::from_response(status.as_u16(), &text);
            warn!(%method, %path, %error, "request failed");
            Err(error)
        }
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: Endpoint<'_>) -> ApiResult<T> {
        let body = self.send::<()>(Method::GET, endpoint, None).await?;
        decode(&body)
    }

    async fn message<B: Serialize + ?Sized>(
        &self,
        method: Method,
        endpoint: Endpoint<'_>,
        body: Option<&B>,
    ) -> ApiResult<ApiMessage> {
        let body = self.send(method, endpoint, body).await?;
        if body.trim().is_empty() {
            return Ok(ApiMessage::default());
        }
        decode(&body)
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> ApiResult<T> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl TrackingApi for HttpApi {
    async fn stats(&self) -> ApiResult<DashboardStats> {
        self.get(Endpoint::Stats).await
    }

    async fn list_queries(&self) -> ApiResult<Vec<QuerySummary>> {
        self.get(Endpoint::Queries).await
    }

    async fn get_query(&self, id: &QueryId) -> ApiResult<Query> {
        self.get(Endpoint::Query(id)).await
    }

    async fn create_query(&self, payload: &QueryPayload) -> ApiResult<ApiMessage> {
        self.message(Method::POST, Endpoint::Queries, Some(payload)).await
    }

    async fn update_query(&self, id: &QueryId, payload: &QueryPayload) -> ApiResult<ApiMessage> {
        self.message(Method::PUT, Endpoint::Query(id), Some(payload)).await
    }

    async fn delete_query(&self, id: &QueryId) -> ApiResult<()> {
        self.send::<()>(Method::DELETE, Endpoint::Query(id), None).await?;
        Ok(())
    }

    async fn track_query(&self, id: &QueryId) -> ApiResult<TrackReport> {
        let body = self.send::<()>(Method::POST, Endpoint::TrackQuery(id), None).await?;
        decode(&body)
    }

    async fn track_all(&self) -> ApiResult<ApiMessage> {
        self.message::<()>(Method::POST, Endpoint::TrackAll, None).await
    }

    async fn results(&self, id: &QueryId) -> ApiResult<Vec<TrackingResult>> {
        self.get(Endpoint::Results(id)).await
    }

    async fn models(&self) -> ApiResult<Vec<ModelInfo>> {
        self.get(Endpoint::Models).await
    }

    async fn widget(&self, widget: Widget) -> ApiResult<Value> {
        self.get(Endpoint::Widget(widget)).await
    }
}
