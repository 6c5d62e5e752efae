//! Logging trait for filter diagnostics.
//!
//! This module provides the [`FilterLogger`] trait through which the
//! [`WebSearchFilter`](crate::WebSearchFilter) reports what it did, so the
//! host decides where diagnostics go and how they are formatted.

use std::fmt;

/// Severity of a diagnostic line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogLevel {
    /// Detail useful only while debugging a pipeline.
    Debug,
    /// Normal operational messages.
    Info,
    /// Something the operator should look at.
    Warn,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
        }
    }
}

/// A trait for receiving the filter's diagnostic lines.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Mutex;
/// use websearch_filter::{FilterLogger, LogLevel};
///
/// struct FileLogger {
///     file: Mutex<std::fs::File>,
/// }
///
/// impl FilterLogger for FileLogger {
///     fn log(&self, level: LogLevel, message: &str) {
///         let mut file = self.file.lock().unwrap();
///         writeln!(file, "[{level}] {message}").unwrap();
///     }
/// }
/// ```
pub trait FilterLogger: Send + Sync {
    /// Record one diagnostic line.
    fn log(&self, level: LogLevel, message: &str);
}

/// Forwards diagnostics to `tracing` under the `websearch_filter` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl FilterLogger for TracingLogger {
    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Debug => tracing::debug!(target: "websearch_filter", "{message}"),
            LogLevel::Info => tracing::info!(target: "websearch_filter", "{message}"),
            LogLevel::Warn => tracing::warn!(target: "websearch_filter", "{message}"),
        }
    }
}

/// Discards every diagnostic.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLogger;

impl FilterLogger for NullLogger {
    fn log(&self, _: LogLevel, _: &str) {}
}
