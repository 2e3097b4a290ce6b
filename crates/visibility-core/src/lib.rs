//! Visibility Core
//!
//! Platform-independent logic behind the AI visibility dashboard:
//! - model: wire types shared with the tracking backend
//! - questions / reconcile: prompt decomposition and latest-result selection
//! - draft: the editable query form state and its validation
//! - api / actions: the REST contract and the user-triggered flows over it
//!
//! Nothing in here touches the DOM, so all of it runs under `cargo test`.

pub mod actions;
pub mod api;
pub mod catalog;
pub mod config;
pub mod dashboard;
pub mod draft;
pub mod model;
pub mod questions;
pub mod reconcile;
pub mod route;
pub mod timestamp;

pub use catalog::ModelNames;
pub use config::ApiConfig;
pub use draft::{DraftError, QueryDraft};
pub use model::{
    ApiMessage, DashboardStats, KeywordMetrics, ModelInfo, PromptSet, Query, QueryId,
    QueryPayload, QuerySummary, TrackReport, TrackingResult,
};
pub use questions::{decompose, question_count, Question};
pub use reconcile::{build_grid, latest_result, CellKey, MetricDisplay, QuestionRow};
pub use route::Route;
