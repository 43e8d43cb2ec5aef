//! Event System
//!
//! Activity log entries shown in the dashboard, and the messages background
//! tasks send back to the UI loop.

use crate::api::error::ApiError;
use crate::logging::{LogLevel, should_log_with_env};
use crate::models::TokenResponse;
use crate::views::{FetchResult, Tab};
use chrono::Local;
use std::fmt::Display;

/// Where an activity log entry came from.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Source {
    Session,
    Assets,
    Forecasts,
    Models,
    Metrics,
}

impl From<Tab> for Source {
    fn from(tab: Tab) -> Self {
        match tab {
            Tab::Assets => Source::Assets,
            Tab::Forecasts => Source::Forecasts,
            Tab::Models => Source::Models,
            Tab::Metrics => Source::Metrics,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
    /// A response that arrived after its view was replaced.
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub source: Source,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    pub fn new(source: Source, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            source,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn session_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Source::Session, msg, event_type, log_level)
    }

    pub fn fetch_with_level(
        tab: Tab,
        msg: String,
        event_type: EventType,
        log_level: LogLevel,
    ) -> Self {
        Self::new(tab.into(), msg, event_type, log_level)
    }

    pub fn should_display(&self) -> bool {
        // Successes and anything at Info or above always show.
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {}: {}",
            self.event_type, self.timestamp, self.source, self.msg
        )
    }
}

/// Messages from background tasks to the UI loop.
#[derive(Debug)]
pub enum AppEvent {
    LoginFinished(Result<TokenResponse, ApiError>),
    Fetched(FetchResult),
}
