//! Dashboard State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The dashboard and
//! the query list page both render from it.

use leptos::prelude::*;
use reactive_stores::Store;
use visibility_core::actions::DashboardData;
use visibility_core::model::{DashboardStats, QuerySummary};

/// Stats and query list with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct DashboardState {
    pub stats: DashboardStats,
    pub queries: Vec<QuerySummary>,
    /// At least one load has completed
    pub loaded: bool,
    /// User-facing message of the last failed load
    pub error: Option<String>,
}

pub type DashboardStore = Store<DashboardState>;

pub fn use_dashboard_store() -> DashboardStore {
    expect_context::<DashboardStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace stats and list with a fresh load
pub fn store_set_dashboard(store: &DashboardStore, data: DashboardData) {
    *store.stats().write() = data.stats;
    *store.queries().write() = data.queries;
    *store.loaded().write() = true;
    *store.error().write() = None;
}

/// Keep showing what we had, plus the error
pub fn store_set_error(store: &DashboardStore, message: String) {
    *store.loaded().write() = true;
    *store.error().write() = Some(message);
}
