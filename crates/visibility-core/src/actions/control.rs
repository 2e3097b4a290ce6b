//! Button and Load State
//!
//! Small state machines the views keep in signals.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Label shown on a track button while its request is in flight
pub const RUNNING_LABEL: &str = "Tracking...";

/// State of a "track" control: disabled with a progress label while running,
/// restored to its previous label afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TrackControl {
    #[default]
    Idle,
    Running { previous_label: String },
}

impl TrackControl {
    /// Enter the running state. Returns `false` if a request is already in flight.
    pub fn begin(&mut self, current_label: &str) -> bool {
        if self.is_running() {
            return false;
        }
        *self = TrackControl::Running {
            previous_label: current_label.to_string(),
        };
        true
    }

    /// Leave the running state, handing back the label to restore
    pub fn finish(&mut self) -> Option<String> {
        match std::mem::take(self) {
            TrackControl::Running { previous_label } => Some(previous_label),
            TrackControl::Idle => None,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, TrackControl::Running { .. })
    }

    pub fn label<'a>(&self, idle_label: &'a str) -> &'a str {
        if self.is_running() {
            RUNNING_LABEL
        } else {
            idle_label
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Monotonic counter that lets a view drop responses to superseded loads.
///
/// Cloning shares the counter.
#[derive(Debug, Clone, Default)]
pub struct LoadGeneration(Arc<AtomicU64>);

impl LoadGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a load; any earlier ticket stops being current
    pub fn begin(&self) -> LoadTicket {
        LoadTicket(self.0.fetch_add(1, Ordering::Relaxed) + 1)
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        self.0.load(Ordering::Relaxed) == ticket.0
    }

    /// Invalidate every outstanding ticket (view teardown)
    pub fn cancel(&self) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }
}
