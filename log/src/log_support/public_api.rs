// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing::dispatcher;

use crate::TracingConfig;

/// Global default subscriber, which once set, can't be unset or changed.
/// - This is great for apps.
/// - Docs for [Global default tracing
///   subscriber](https://docs.rs/tracing/latest/tracing/subscriber/fn.set_global_default.html)
/// - Configure this using [mod@crate::tracing_config_options].
///
/// Logging is **DISABLED** when the level filter is [`tracing_core::LevelFilter::OFF`].
/// In that case nothing is installed, and every [`crate::TracingSink`] event is dropped.
///
/// # Errors
///
/// If a global subscriber has already been set.
pub fn try_initialize_logging_global(options: impl Into<TracingConfig>) -> miette::Result<()> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(it.get_level_filter(), tracing_core::LevelFilter::OFF) {
        return Ok(());
    }

    it.install_global()
}

/// Thread local subscriber, which is thread local, and you can assign different ones
/// to different threads.
/// - This is great for tests.
/// - Docs for [Thread local tracing
///   subscriber](https://docs.rs/tracing/latest/tracing/subscriber/fn.set_default.html)
///
/// Returns `None` when the level filter is [`tracing_core::LevelFilter::OFF`]. Otherwise
/// the subscriber stays installed until the returned guard is dropped.
///
/// # Errors
///
/// If the layers can't be created.
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> miette::Result<Option<dispatcher::DefaultGuard>> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(it.get_level_filter(), tracing_core::LevelFilter::OFF) {
        return Ok(None);
    }

    it.install_thread_local().map(Some)
}
