//! User Actions
//!
//! The request sequences behind each button, written once against
//! [`TrackingApi`] so the browser and the tests run the same flow.
//! None of them retry; a failed step returns its error and the caller keeps
//! showing what it had.

mod control;

#[cfg(test)]
mod mock;
#[cfg(test)]
mod tests;

pub use control::{LoadGeneration, LoadTicket, TrackControl, RUNNING_LABEL};

use std::fmt;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::api::{ApiError, ApiResult, TrackingApi};
use crate::catalog::ModelNames;
use crate::draft::{DraftError, QueryDraft};
use crate::model::{DashboardStats, ModelInfo, Query, QueryId, QuerySummary, TrackReport, TrackingResult};
use crate::questions::question_count;

/// Fallback texts when the backend gives no message of its own
pub const TRACK_DONE: &str = "Tracking completed";
pub const TRACK_FAILED: &str = "Tracking failed";
pub const TRACK_RELOAD_FAILED: &str = "Results were saved but could not be reloaded";
pub const TRACK_CONFIRM: &str = "Start tracking this query now? This can take a few minutes.";
pub const TRACK_ALL_STARTED: &str = "Tracking started";
pub const TRACK_ALL_FAILED: &str = "Failed to start tracking";
pub const DELETE_FAILED: &str = "Failed to delete query";
pub const SAVE_FAILED: &str = "Failed to save query";
pub const LOAD_FAILED: &str = "Failed to load query";

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub stats: DashboardStats,
    pub queries: Vec<QuerySummary>,
}

pub async fn load_dashboard<A: TrackingApi + ?Sized>(api: &A) -> ApiResult<DashboardData> {
    let stats = api.stats().await?;
    let queries = api.list_queries().await?;
    debug!(queries = queries.len(), "dashboard loaded");
    Ok(DashboardData { stats, queries })
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailData {
    pub query: Query,
    pub results: Vec<TrackingResult>,
    pub names: ModelNames,
}

impl DetailData {
    /// False when every prompt is blank, so the grid would be empty
    pub fn has_questions(&self) -> bool {
        question_count(&self.query.prompts) > 0
    }
}

/// First load of the detail page.
///
/// Only the query itself is required. Without results every cell shows its
/// sentinels; without the catalog, built-in model names are used.
pub async fn load_detail<A: TrackingApi + ?Sized>(api: &A, id: &QueryId) -> ApiResult<DetailData> {
    let query = api.get_query(id).await?;
    let results = api.results(id).await.unwrap_or_else(|e| {
        warn!(query = %id, error = %e, "tracking results unavailable");
        Vec::new()
    });
    let names = match api.models().await {
        Ok(models) => ModelNames::from_catalog(&models),
        Err(e) => {
            warn!(error = %e, "model catalog unavailable, using built-in names");
            ModelNames::builtin()
        }
    };
    Ok(DetailData { query, results, names })
}

/// Query and results, both required. Used after the user asked for new data.
pub async fn refresh_detail<A: TrackingApi + ?Sized>(
    api: &A,
    id: &QueryId,
) -> ApiResult<(Query, Vec<TrackingResult>)> {
    let query = api.get_query(id).await?;
    let results = api.results(id).await?;
    Ok((query, results))
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrackedQuery {
    pub report: TrackReport,
    /// `None` when the backend tracked but the re-fetch afterwards failed
    pub refreshed: Option<(Query, Vec<TrackingResult>)>,
}

impl TrackedQuery {
    /// Alert text: the report summary, plus a note when the re-fetch failed
    pub fn summary(&self) -> String {
        let summary = track_summary(&self.report);
        match self.refreshed {
            Some(_) => summary,
            None => format!("{}. {}", summary, TRACK_RELOAD_FAILED),
        }
    }

    /// Fold the re-fetched query and results into the detail page data.
    ///
    /// If the page had not finished its first load there is no catalog yet,
    /// so built-in model names stand in.
    pub fn apply_to(self, detail: Option<DetailData>) -> Option<DetailData> {
        match (self.refreshed, detail) {
            (Some((query, results)), Some(detail)) => Some(DetailData { query, results, ..detail }),
            (Some((query, results)), None) => Some(DetailData {
                query,
                results,
                names: ModelNames::builtin(),
            }),
            (None, detail) => detail,
        }
    }
}

/// Track one query, then re-fetch it and its results.
///
/// Only a failed track request is an error. A failed re-fetch is logged and
/// leaves `refreshed` empty, since the backend already stored the results.
pub async fn track_query<A: TrackingApi + ?Sized>(api: &A, id: &QueryId) -> ApiResult<TrackedQuery> {
    info!(query = %id, "tracking started");
    let report = api.track_query(id).await?;
    if report.failures() > 0 {
        warn!(query = %id, failed = report.failures(), total = report.results.len(), "some cells failed to track");
    }
    let refreshed = match refresh_detail(api, id).await {
        Ok((query, results)) => {
            info!(query = %id, results = results.len(), "tracking finished");
            Some((query, results))
        }
        Err(e) => {
            warn!(query = %id, error = %e, "tracked, but re-fetch failed");
            None
        }
    };
    Ok(TrackedQuery { report, refreshed })
}

/// Alert text after a single-query track: the backend message plus any failed cells
pub fn track_summary(report: &TrackReport) -> String {
    let message = report.message.as_deref().unwrap_or(TRACK_DONE);
    match report.failures() {
        0 => message.to_string(),
        failed => format!("{} ({} of {} failed)", message, failed, report.results.len()),
    }
}

/// Something that can run one dashboard refresh later
pub trait RefreshScheduler {
    fn schedule_refresh(&self, delay: Duration);
}

/// Start tracking every query.
///
/// The backend only confirms the start, so exactly one refresh is scheduled
/// after `delay`. There is no polling loop.
pub async fn track_all<A, S>(api: &A, scheduler: &S, delay: Duration) -> ApiResult<String>
where
    A: TrackingApi + ?Sized,
    S: RefreshScheduler + ?Sized,
{
    let message = api.track_all().await?;
    scheduler.schedule_refresh(delay);
    info!(delay_ms = delay.as_millis() as u64, "track-all started, refresh scheduled");
    Ok(message.message.unwrap_or_else(|| TRACK_ALL_STARTED.to_string()))
}

/// Delete a query and return the refreshed dashboard
pub async fn delete_query<A: TrackingApi + ?Sized>(api: &A, id: &QueryId) -> ApiResult<DashboardData> {
    api.delete_query(id).await?;
    info!(query = %id, "query deleted");
    load_dashboard(api).await
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveError {
    Invalid(DraftError),
    Api(ApiError),
}

impl SaveError {
    pub fn user_message(&self) -> String {
        match self {
            SaveError::Invalid(e) => e.to_string(),
            SaveError::Api(e) => e.user_message(SAVE_FAILED),
        }
    }
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveError::Invalid(e) => write!(f, "Invalid query: {}", e),
            SaveError::Api(e) => write!(f, "Save failed: {}", e),
        }
    }
}

impl std::error::Error for SaveError {}

impl From<DraftError> for SaveError {
    fn from(e: DraftError) -> Self {
        SaveError::Invalid(e)
    }
}

impl From<ApiError> for SaveError {
    fn from(e: ApiError) -> Self {
        SaveError::Api(e)
    }
}

/// Validate the draft, then create (`existing = None`) or replace the query.
///
/// Returns the id of the saved query when the backend reports one.
pub async fn save_draft<A: TrackingApi + ?Sized>(
    api: &A,
    draft: &QueryDraft,
    existing: Option<&QueryId>,
) -> Result<Option<QueryId>, SaveError> {
    let payload = draft.validate()?;
    match existing {
        Some(id) => {
            api.update_query(id, &payload).await?;
            info!(query = %id, "query updated");
            Ok(Some(id.clone()))
        }
        None => {
            let created = api.create_query(&payload).await?;
            info!(id = ?created.id, "query created");
            Ok(created.id.map(QueryId::new))
        }
    }
}

/// Model catalog for the edit form's picker
pub async fn load_models<A: TrackingApi + ?Sized>(api: &A) -> ApiResult<Vec<ModelInfo>> {
    api.models().await
}
