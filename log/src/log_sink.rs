// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A [`LogSink`] is the named log channel that a [`crate::PrefixedLogger`] forwards
//! every formatted message to. The logger owns the formatting, the sink owns the
//! delivery.
//!
//! - [`TracingSink`] turns each message into a [tracing] event, so whatever subscriber
//!   is installed (see [`crate::try_initialize_logging_global`]) decides where it goes.
//! - [`MemorySink`] keeps every message in memory, so the exact forwarded text can be
//!   inspected.

use std::sync::{Arc, Mutex};

use tracing::Level;

/// Target that every event emitted by [`TracingSink`] is tagged with.
pub const LOG_SINK_TARGET: &str = "ender_log";

/// The hand-off point between a logger and whatever delivers the message. Implementations
/// must be safe to share across threads; the logger never synchronizes calls to it.
pub trait LogSink: Send + Sync {
    fn emit(&self, level: Level, channel: &str, message: &str);
}

impl<T: LogSink + ?Sized> LogSink for Arc<T> {
    fn emit(&self, level: Level, channel: &str, message: &str) {
        self.as_ref().emit(level, channel, message);
    }
}

/// Forwards to the [tracing] macros. The level can't be passed to the macros at runtime,
/// hence the match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn emit(&self, level: Level, channel: &str, message: &str) {
        match level {
            Level::ERROR => {
                tracing::error!(target: LOG_SINK_TARGET, channel, message);
            }
            Level::WARN => {
                tracing::warn!(target: LOG_SINK_TARGET, channel, message);
            }
            Level::INFO => {
                tracing::info!(target: LOG_SINK_TARGET, channel, message);
            }
            Level::DEBUG => {
                tracing::debug!(target: LOG_SINK_TARGET, channel, message);
            }
            Level::TRACE => {
                tracing::trace!(target: LOG_SINK_TARGET, channel, message);
            }
        }
    }
}

/// One message as it was handed to a [`MemorySink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub level: Level,
    pub channel: String,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<LogRecord>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Convenience for the common case of sharing one sink between a logger and the code
    /// that inspects it.
    #[must_use]
    pub fn new_shared() -> Arc<Self> { Arc::new(Self::default()) }

    /// A copy of every record received so far, oldest first.
    #[must_use]
    pub fn records(&self) -> Vec<LogRecord> {
        match self.records.lock() {
            Ok(records) => records.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize { self.records().len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Removes and returns every record received so far.
    pub fn drain(&self) -> Vec<LogRecord> {
        match self.records.lock() {
            Ok(mut records) => std::mem::take(&mut *records),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl LogSink for MemorySink {
    fn emit(&self, level: Level, channel: &str, message: &str) {
        let record = LogRecord {
            level,
            channel: channel.to_owned(),
            message: message.to_owned(),
        };
        match self.records.lock() {
            Ok(mut records) => records.push(record),
            Err(poisoned) => poisoned.into_inner().push(record),
        }
    }
}
