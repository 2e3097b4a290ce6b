//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use std::time::Duration;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::debug;
use visibility_core::actions::RefreshScheduler;

use crate::commands::HttpApi;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    api: StoredValue<HttpApi, LocalStorage>,
    /// Bumped to make the current page reload its data - read
    pub reload_trigger: ReadSignal<u32>,
    /// Bumped to make the current page reload its data - write
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(api: HttpApi, reload_trigger: (ReadSignal<u32>, WriteSignal<u32>)) -> Self {
        Self {
            api: StoredValue::new_local(api),
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    pub fn api(&self) -> HttpApi {
        self.api.get_value()
    }

    pub fn refresh_delay(&self) -> Duration {
        self.api.with_value(|api| api.config().track_all_refresh_delay)
    }

    /// Trigger a reload of the current page's data
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

/// Reloads the current page once, after the delay
pub struct ReloadScheduler {
    ctx: AppContext,
}

impl ReloadScheduler {
    pub fn new(ctx: AppContext) -> Self {
        Self { ctx }
    }
}

impl RefreshScheduler for ReloadScheduler {
    fn schedule_refresh(&self, delay: Duration) {
        let ctx = self.ctx;
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        spawn_local(async move {
            TimeoutFuture::new(millis).await;
            debug!("scheduled refresh");
            ctx.reload();
        });
    }
}
