//! Data Model
//!
//! Data structures matching the tracking backend's JSON payloads.

mod prompt_set;
mod query;
mod result;
mod stats;

pub use prompt_set::PromptSet;
pub use query::{KeywordMetrics, MetricValue, Query, QueryId, QueryPayload, QueryStats, QuerySummary};
pub use result::{TrackOutcome, TrackReport, TrackingResult};
pub use stats::{ApiMessage, DashboardStats, ModelInfo};

use serde::{Deserialize, Deserializer};

/// Treat an explicit JSON `null` the same as a missing field.
///
/// The backend fills absent collections with defaults on most routes but not
/// all, so every collection field goes through this.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
