// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use ender_log::{DisplayPreference, FragmentLog, LoggerPrefix, PrefixedLogger, TracingConfig,
                TracingSink};
use tracing_core::LevelFilter;

/// This is the binary under test, which is tested by the `test_prefixed_log_demo_stdio`
/// test module.
///
/// It takes 1 argument: "stdout" or "stderr". Depending on the argument, it will display
/// the logs to stdout or stderr.
///
/// See:
/// 1. Test module: `test_prefixed_log_demo_stdio` in `tracing_init.rs`
/// 2. Binary under test: `prefixed_log_demo.rs` <- you are here
/// 3. `assert_cmd` : <https://docs.rs/assert_cmd/latest/assert_cmd/index.html>
fn main() -> miette::Result<()> {
    // Get the argument passed to the binary.
    let arg = std::env::args().nth(1).unwrap_or_default();
    let display_preference = match arg.as_str() {
        "stderr" => DisplayPreference::Stderr,
        _ => DisplayPreference::Stdout,
    };

    let default_guard = TracingConfig {
        level_filter: LevelFilter::DEBUG,
        display_preference,
    }
    .install_thread_local()?;

    let prefix = LoggerPrefix::try_new("Demo", "#6400D4", true)?;
    let logger = PrefixedLogger::new(prefix, TracingSink);

    // Log some messages.
    logger.error(["error"]);
    logger.warning(["warn", "ing"]);
    logger.info(["info"]);
    logger.debug(["debug"]);

    drop(default_guard);
    Ok(())
}
