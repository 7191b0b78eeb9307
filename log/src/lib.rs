// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # ender_log
//!
//! A prefixed, colorized logger for server plugins. Every line that a
//! [`PrefixedLogger`] sends to its [`LogSink`] starts with a colored label (and an
//! optional gray `" »"`), so the lines of one plugin stand out in a shared console.
//!
//! ```text
//! PrefixConfig ──► LoggerPrefix ──► PrefixedLogger ──► LogSink
//!  (serde)          (validated)      info, warning,     TracingSink ──► tracing
//!                                    error, debug, log  MemorySink
//! ```
//!
//! - [`LoggerPrefix`] validates its color when it is created. A logger configured with
//!   a bad color fails at (re)configuration time, never at log call time.
//! - Message fragments are concatenated with no separator.
//! - [`EnderCore`] ties a logger to a [`PrefixHost`], the capability a plugin host
//!   implements to supply its configuration.
//! - [`try_initialize_logging_global`] installs a `tracing` subscriber that prints
//!   events from [`TracingSink`] with [`ChannelEventFormatter`].
//!
//! ```rust
//! use ender_log::{FragmentLog, LoggerPrefix, PrefixedLogger, TracingSink,
//!                 try_initialize_logging_thread_local};
//!
//! let _guard = try_initialize_logging_thread_local(tracing::Level::INFO).unwrap();
//!
//! let prefix = LoggerPrefix::try_new("MyPlugin", "#6400D4", true).unwrap();
//! let logger = PrefixedLogger::new(prefix, TracingSink);
//! logger.info(["Loaded ", "3", " worlds"]);
//! ```

// Enforce strict error handling in production library code only. Tests and examples are
// allowed to use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
mod log_sink;
pub mod log_support;
mod plugin;
mod prefixed_logger;

// Re-export.
pub use log_sink::*;
pub use log_support::*;
pub use plugin::*;
pub use prefixed_logger::*;
