//! Location Commands
//!
//! Every page is a separate document, so navigation is a plain `location.href` change.

use tracing::{debug, warn};
use visibility_core::Route;

fn location() -> Option<web_sys::Location> {
    web_sys::window().map(|window| window.location())
}

pub fn current_path() -> String {
    location()
        .and_then(|location| location.pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

pub fn origin() -> String {
    location()
        .and_then(|location| location.origin().ok())
        .unwrap_or_default()
}

pub fn navigate(route: &Route) {
    let href = route.href();
    debug!(%href, "navigate");
    if let Some(location) = location() {
        if let Err(e) = location.set_href(&href) {
            warn!(%href, error = ?e, "navigation failed");
        }
    }
}
