//! Console Logger
//!
//! A `tracing` layer that turns each event into one text line, keeps the
//! most recent lines in a circular buffer and writes them to the browser
//! console. Off wasm the lines go to stderr so native tests see them too.
//! [`recent_lines`] backs the app's log viewer.

use std::collections::VecDeque;
use std::fmt::{self, Write as _};
use std::str::FromStr;
use std::sync::{Arc, Mutex, OnceLock};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;

/// Lines kept for [`recent_lines`]
pub const DEFAULT_CAPACITY: usize = 500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoggerError {
    InvalidLevel(String),
    AlreadyInitialized,
}

impl fmt::Display for LoggerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoggerError::InvalidLevel(level) => write!(f, "Invalid log level: {}", level),
            LoggerError::AlreadyInitialized => write!(f, "Logger already initialized"),
        }
    }
}

impl std::error::Error for LoggerError {}

/// One formatted event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub timestamp: String,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {:>5} {}: {}", self.timestamp, self.level, self.target, self.message)
    }
}

/// Fixed-size history; the oldest line is dropped once full
#[derive(Debug)]
pub struct LogBuffer {
    lines: Mutex<VecDeque<LogLine>>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&self, line: LogLine) {
        let Ok(mut lines) = self.lines.lock() else {
            return;
        };
        if lines.len() == self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }

    pub fn snapshot(&self) -> Vec<LogLine> {
        self.lines
            .lock()
            .map(|lines| lines.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().map(|lines| lines.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Collects `message` plus every other field as `key=value`
#[derive(Default)]
struct LineVisitor {
    message: String,
    fields: String,
}

impl LineVisitor {
    fn finish(self) -> String {
        match (self.message.is_empty(), self.fields.is_empty()) {
            (_, true) => self.message,
            (true, false) => self.fields,
            (false, false) => format!("{} {}", self.message, self.fields),
        }
    }

    fn push_field(&mut self, name: &str, value: fmt::Arguments<'_>) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        let _ = write!(self.fields, "{}={}", name, value);
    }
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.push_field(field.name(), format_args!("{}", value));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            self.push_field(field.name(), format_args!("{:?}", value));
        }
    }
}

pub struct ConsoleLayer {
    buffer: Arc<LogBuffer>,
    echo: bool,
}

impl ConsoleLayer {
    pub fn new(buffer: Arc<LogBuffer>) -> Self {
        Self { buffer, echo: true }
    }

    /// Buffer only, nothing written to the console
    pub fn silent(buffer: Arc<LogBuffer>) -> Self {
        Self { buffer, echo: false }
    }
}

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = LineVisitor::default();
        event.record(&mut visitor);

        let metadata = event.metadata();
        let line = LogLine {
            timestamp: chrono::Local::now().format("%H:%M:%S%.3f").to_string(),
            level: *metadata.level(),
            target: metadata.target().to_string(),
            message: visitor.finish(),
        };
        if self.echo {
            emit(&line);
        }
        self.buffer.push(line);
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(line: &LogLine) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let text = JsValue::from_str(&line.to_string());
    match line.level {
        Level::ERROR => console::error_1(&text),
        Level::WARN => console::warn_1(&text),
        Level::INFO => console::info_1(&text),
        _ => console::debug_1(&text),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(line: &LogLine) {
    eprintln!("{}", line);
}

static BUFFER: OnceLock<Arc<LogBuffer>> = OnceLock::new();

/// Install the global subscriber.
///
/// `level` is one of `error`, `warn`, `info`, `debug`, `trace` or `off`.
pub fn init_logger(app_name: &str, level: &str) -> Result<(), LoggerError> {
    let filter = LevelFilter::from_str(level.trim()).map_err(|_| LoggerError::InvalidLevel(level.to_string()))?;
    let buffer = BUFFER
        .get_or_init(|| Arc::new(LogBuffer::new(DEFAULT_CAPACITY)))
        .clone();

    tracing_subscriber::registry()
        .with(filter)
        .with(ConsoleLayer::new(buffer))
        .try_init()
        .map_err(|_| LoggerError::AlreadyInitialized)?;

    tracing::info!(app = app_name, level = %filter, "logger initialized");
    Ok(())
}

/// Most recent lines, oldest first. Empty before [`init_logger`].
pub fn recent_lines() -> Vec<String> {
    BUFFER
        .get()
        .map(|buffer| buffer.snapshot().iter().map(ToString::to_string).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(message: &str) -> LogLine {
        LogLine {
            timestamp: "10:00:00.000".to_string(),
            level: Level::INFO,
            target: "test".to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_buffer_drops_oldest_when_full() {
        let buffer = LogBuffer::new(2);
        buffer.push(line("one"));
        buffer.push(line("two"));
        buffer.push(line("three"));

        let messages: Vec<String> = buffer.snapshot().into_iter().map(|l| l.message).collect();
        assert_eq!(messages, vec!["two", "three"]);
    }

    #[test]
    fn test_zero_capacity_still_keeps_last_line() {
        let buffer = LogBuffer::new(0);
        buffer.push(line("one"));
        buffer.push(line("two"));
        assert_eq!(buffer.len(), 1);
        assert_eq!(buffer.snapshot()[0].message, "two");
    }

    #[test]
    fn test_layer_formats_message_and_fields() {
        let buffer = Arc::new(LogBuffer::new(10));
        let subscriber = tracing_subscriber::registry().with(ConsoleLayer::silent(buffer.clone()));

        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!(query = "q1", failed = 2, "some cells failed");
            tracing::info!("plain");
        });

        let lines = buffer.snapshot();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].level, Level::WARN);
        assert_eq!(lines[0].message, "some cells failed query=q1 failed=2");
        assert_eq!(lines[1].message, "plain");
    }

    #[test]
    fn test_level_filter_applies() {
        let buffer = Arc::new(LogBuffer::new(10));
        let subscriber = tracing_subscriber::registry()
            .with(LevelFilter::WARN)
            .with(ConsoleLayer::silent(buffer.clone()));

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("hidden");
            tracing::error!("shown");
        });

        assert_eq!(buffer.len(), 1);
        assert!(buffer.snapshot()[0].to_string().contains("ERROR"));
    }

    #[test]
    fn test_recent_lines_after_init() {
        init_logger("test", "debug").unwrap();
        tracing::debug!(query = "q1", "detail loaded");

        let lines = recent_lines();
        assert!(lines.iter().any(|l| l.contains("logger initialized") && l.contains("app=test")));
        assert!(lines
            .iter()
            .any(|l| l.contains("DEBUG") && l.ends_with("detail loaded query=q1")));

        assert_eq!(init_logger("test", "info"), Err(LoggerError::AlreadyInitialized));
    }

    #[test]
    fn test_invalid_level_is_rejected() {
        assert_eq!(
            init_logger("test", "loud"),
            Err(LoggerError::InvalidLevel("loud".to_string()))
        );
    }
}
