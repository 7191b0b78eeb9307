// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Console style line format for events from [`crate::TracingSink`]:
//!
//! ```text
//! [HH:MM:SS LEVEL]: [<channel>] <message>
//! ```
//!
//! The decoration around `<channel>` is what [`crate::CHANNEL_NAME_LEAD`] and
//! [`crate::MESSAGE_LEAD`] move the cursor back over. So, on a terminal, a prefixed
//! logger's line reads `[12:00:00 INFO]: MyPlugin » message`.
//!
//! Events without a `channel` field (eg: plain [`tracing::info!`] calls) are printed
//! without the bracketed channel. Fields other than `channel` and `message` are appended
//! as `name=value`.

use std::fmt::{self, Write as _};

use chrono::Local;
use custom_event_formatter_constants::*;
use tracing::{Event, Subscriber,
              field::{Field, Visit}};
use tracing_subscriber::{fmt::{FmtContext, FormatEvent, FormatFields, format::Writer},
                         registry::LookupSpan};

#[derive(Debug, Default, Clone, Copy)]
pub struct ChannelEventFormatter;

pub mod custom_event_formatter_constants {
    pub const TIMESTAMP_FORMAT: &str = "%H:%M:%S";
    pub const LEVEL_SUFFIX: &str = "]:";
    pub const CHANNEL_FIELD_NAME: &str = "channel";
    pub const MESSAGE_FIELD_NAME: &str = "message";
}

impl<S, N> FormatEvent<S, N> for ChannelEventFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut f: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT);
        let level = event.metadata().level();
        write!(f, "[{timestamp} {level}{LEVEL_SUFFIX} ")?;

        let mut fields = VisitEventAndCollectChannelFields::default();
        event.record(&mut fields);

        if let Some(channel) = fields.channel {
            write!(f, "[{channel}] ")?;
        }
        write!(f, "{}", fields.message)?;
        for (name, value) in &fields.rest {
            write!(f, " {name}={value}")?;
        }
        writeln!(f)
    }
}

/// Pulls the `channel` and `message` fields out of an event. Everything else lands in
/// `rest`, in the order the event recorded it.
#[derive(Debug, Default)]
pub struct VisitEventAndCollectChannelFields {
    pub channel: Option<String>,
    pub message: String,
    pub rest: Vec<(&'static str, String)>,
}

impl Visit for VisitEventAndCollectChannelFields {
    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            CHANNEL_FIELD_NAME => self.channel = Some(value.to_owned()),
            MESSAGE_FIELD_NAME => self.message.push_str(value),
            name => self.rest.push((name, value.to_owned())),
        }
    }

    /// `format_args!` messages (eg: `info!("{x}")`) arrive here, not in `record_str`.
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        match field.name() {
            CHANNEL_FIELD_NAME => self.channel = Some(format!("{value:?}")),
            MESSAGE_FIELD_NAME => {
                let _ = write!(self.message, "{value:?}");
            }
            name => self.rest.push((name, format!("{value:?}"))),
        }
    }
}

#[cfg(test)]
mod tests_channel_event_formatter {
    use std::{io,
              sync::{Arc, Mutex}};

    use pretty_assertions::assert_eq;
    use tracing::{info, subscriber::set_default, warn};
    use tracing_subscriber::fmt::SubscriberBuilder;

    use super::*;
    use crate::{FragmentLog, LoggerPrefix, MESSAGE_LEAD, PrefixedLogger, TracingSink};

    /// Cloneable in-memory writer, so the test can read what the subscriber wrote.
    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> { Ok(()) }
    }

    fn with_formatter(f: impl FnOnce()) -> String {
        let buffer = SharedBuffer::default();
        let subscriber = SubscriberBuilder::default()
            .event_format(ChannelEventFormatter)
            .with_writer(Mutex::new(buffer.clone()))
            .finish();

        // Note that tests, or libraries for that matter, should NOT call
        // `subscriber::set_global_default()`.
        let _drop_guard = set_default(subscriber);
        f();
        buffer.contents()
    }

    /// Drops the `[HH:MM:SS ` part, which depends on the clock.
    fn without_timestamp(line: &str) -> &str {
        let (_, rest) = line.split_at("[00:00:00 ".len());
        rest
    }

    #[test]
    fn test_channel_and_message() {
        let output = with_formatter(|| {
            info!(channel = "chan", message = "hello");
        });

        assert!(output.starts_with('['));
        assert!(output.ends_with('\n'));
        assert_eq!(without_timestamp(&output), "INFO]: [chan] hello\n");
    }

    #[test]
    fn test_plain_event_without_channel() {
        let output = with_formatter(|| {
            let count = 2;
            warn!(count, "{} things", count);
        });

        assert_eq!(without_timestamp(&output), "WARN]: 2 things count=2\n");
    }

    #[test]
    fn test_timestamp_shape() {
        let output = with_formatter(|| info!("x"));
        let stamp = &output[1..9];
        assert_eq!(stamp.len(), 8);
        assert_eq!(stamp.matches(':').count(), 2);
    }

    #[test]
    fn test_prefixed_logger_through_tracing() {
        let prefix = LoggerPrefix::try_new("Test", "#6400D4", true).unwrap();
        let logger = PrefixedLogger::new(prefix, TracingSink);

        let output = with_formatter(|| logger.error(["a", "b"]));

        assert_eq!(
            without_timestamp(&output),
            format!("ERROR]: [{}] {MESSAGE_LEAD}ab\n", logger.channel_name())
        );
    }
}
