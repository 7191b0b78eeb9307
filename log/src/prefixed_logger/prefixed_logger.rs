// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use ender_ansi_color::ColorResult;
use tracing::Level;

use crate::{LogSink, LoggerPrefix, MESSAGE_LEAD, PrefixConfig};

/// Log operations that take an ordered sequence of text fragments. The fragments are
/// concatenated as is, no separator is inserted between them.
///
/// `debug` and `info` share [`Level::INFO`]. There is no separate debug severity on the
/// channel side.
pub trait FragmentLog {
    fn log(&self, level: Level, fragments: impl IntoIterator<Item = impl AsRef<str>>);

    fn info(&self, fragments: impl IntoIterator<Item = impl AsRef<str>>) {
        self.log(Level::INFO, fragments);
    }

    fn debug(&self, fragments: impl IntoIterator<Item = impl AsRef<str>>) {
        self.log(Level::INFO, fragments);
    }

    fn warning(&self, fragments: impl IntoIterator<Item = impl AsRef<str>>) {
        self.log(Level::WARN, fragments);
    }

    fn error(&self, fragments: impl IntoIterator<Item = impl AsRef<str>>) {
        self.log(Level::ERROR, fragments);
    }
}

/// A [`LoggerPrefix`] bound to a [`LogSink`]. Each call is formatted and forwarded on its
/// own; nothing is buffered between calls.
///
/// The channel name handed to the sink embeds the rendered prefix (see
/// [`LoggerPrefix::channel_name`]), and every message starts with [`MESSAGE_LEAD`].
///
/// # Example usage:
///
/// ```rust
/// use ender_log::{FragmentLog, LoggerPrefix, MemorySink, PrefixedLogger};
///
/// let sink = MemorySink::new_shared();
/// let prefix = LoggerPrefix::try_new("Test", "#6400D4", true).unwrap();
/// let logger = PrefixedLogger::new(prefix, sink.clone());
///
/// logger.info(["Hello", ", ", "world"]);
///
/// let records = sink.records();
/// assert_eq!(records[0].message, "\x1b[2D \x1b[0mHello, world");
/// ```
#[derive(Debug, Clone)]
pub struct PrefixedLogger<S: LogSink> {
    prefix: LoggerPrefix,
    channel: String,
    sink: S,
}

impl<S: LogSink> PrefixedLogger<S> {
    pub fn new(prefix: LoggerPrefix, sink: S) -> Self {
        let channel = prefix.channel_name();
        Self {
            prefix,
            channel,
            sink,
        }
    }

    /// Label in [`LoggerPrefix::DEFAULT_COLOR`], with the arrow.
    pub fn with_label(arg_label: impl Into<String>, sink: S) -> Self {
        Self::new(LoggerPrefix::with_label(arg_label), sink)
    }

    /// # Errors
    ///
    /// Any [`ender_ansi_color::ColorError`] from validating `config.color`.
    pub fn try_from_config(config: &PrefixConfig, sink: S) -> ColorResult<Self> {
        Ok(Self::new(LoggerPrefix::try_from_config(config)?, sink))
    }

    /// Rebinds this logger to a prefix computed from `config`. If the configured color is
    /// invalid, the error is returned and the current prefix stays bound.
    ///
    /// # Errors
    ///
    /// Any [`ender_ansi_color::ColorError`] from validating `config.color`.
    pub fn reconfigure(&mut self, config: &PrefixConfig) -> ColorResult<()> {
        let prefix = LoggerPrefix::try_from_config(config)?;
        self.channel = prefix.channel_name();
        self.prefix = prefix;
        Ok(())
    }

    pub fn prefix(&self) -> &LoggerPrefix { &self.prefix }

    pub fn channel_name(&self) -> &str { &self.channel }

    pub fn sink(&self) -> &S { &self.sink }
}

impl<S: LogSink> FragmentLog for PrefixedLogger<S> {
    fn log(&self, level: Level, fragments: impl IntoIterator<Item = impl AsRef<str>>) {
        let message = format_message(fragments);
        self.sink.emit(level, &self.channel, &message);
    }
}

/// [`MESSAGE_LEAD`] followed by every fragment, with nothing in between.
pub fn format_message(fragments: impl IntoIterator<Item = impl AsRef<str>>) -> String {
    fragments
        .into_iter()
        .fold(String::from(MESSAGE_LEAD), |mut acc, fragment| {
            acc.push_str(fragment.as_ref());
            acc
        })
}
