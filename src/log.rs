//! Logging hooks for query observation.
//!
//! The core never requires a logger. Hosts inject one through [`QueryLog`]
//! and the pass-through methods on
//! [`QueryBuilder`](crate::builder::QueryBuilder) forward rendered text to
//! it. Implementations observe text only; they cannot reach builder state.

use serde::{Deserialize, Serialize};

/// Severity channel for emitted query text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

/// A logging capability supplied by the host application.
pub trait QueryLog {
    /// Whether the given severity channel is enabled.
    fn enabled(&self, level: Level) -> bool;

    /// Emit rendered query text to the given channel.
    fn emit(&self, level: Level, text: &str);
}

/// [`QueryLog`] adapter forwarding to the `tracing` subscriber installed by
/// the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl QueryLog for TracingLog {
    fn enabled(&self, level: Level) -> bool {
        match level {
            Level::Debug => tracing::enabled!(tracing::Level::DEBUG),
            Level::Info => tracing::enabled!(tracing::Level::INFO),
            Level::Warn => tracing::enabled!(tracing::Level::WARN),
            Level::Error => tracing::enabled!(tracing::Level::ERROR),
        }
    }

    fn emit(&self, level: Level, text: &str) {
        match level {
            Level::Debug => tracing::debug!("{}", text),
            Level::Info => tracing::info!("{}", text),
            Level::Warn => tracing::warn!("{}", text),
            Level::Error => tracing::error!("{}", text),
        }
    }
}
