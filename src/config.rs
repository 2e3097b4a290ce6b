//! Build-time Configuration
//!
//! `VISIBILITY_API_BASE` points the client at a backend on another origin;
//! `VISIBILITY_LOG` sets the log level. Both are read when the crate is built.

use visibility_core::ApiConfig;

use crate::commands;

const API_BASE: Option<&str> = option_env!("VISIBILITY_API_BASE");
const LOG_LEVEL: Option<&str> = option_env!("VISIBILITY_LOG");

pub fn api_config() -> ApiConfig {
    ApiConfig::resolve(API_BASE, &commands::origin())
}

pub fn log_level() -> &'static str {
    LOG_LEVEL.unwrap_or("info")
}
