// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing_core::LevelFilter;

/// Configure where the tracing output is displayed, and which levels are let through.
/// Use [`crate::try_initialize_logging_global`] or
/// [`crate::try_initialize_logging_thread_local`] to install it.
///
/// Fields:
/// - `level_filter`: [`LevelFilter::OFF`] disables logging altogether.
/// - `display_preference`: [`DisplayPreference`] to choose stdout or stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TracingConfig {
    pub level_filter: LevelFilter,
    pub display_preference: DisplayPreference,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayPreference {
    #[default]
    Stdout,
    Stderr,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::DEBUG,
            display_preference: DisplayPreference::default(),
        }
    }
}

impl TracingConfig {
    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }

    #[must_use]
    pub fn get_display_preference(&self) -> DisplayPreference { self.display_preference }
}

/// Instead of having lots of arguments to [`crate::try_initialize_logging_global`] and
/// [`crate::try_initialize_logging_thread_local`], they both receive a type that
/// implements [`Into<TracingConfig>`]. Here are some examples of what is possible:
///
/// ```no_run
/// use ender_log::{DisplayPreference, TracingConfig, try_initialize_logging_thread_local};
///
/// let config_1: TracingConfig = tracing::Level::DEBUG.into();
/// let config_2: TracingConfig = tracing_core::LevelFilter::OFF.into();
/// let config_3: TracingConfig = DisplayPreference::Stderr.into();
///
/// let _guard = try_initialize_logging_thread_local(config_3);
/// ```
pub mod tracing_config_options {
    use super::{DisplayPreference, LevelFilter, TracingConfig};

    impl From<tracing::Level> for TracingConfig {
        fn from(level: tracing::Level) -> Self {
            Self {
                level_filter: level.into(),
                ..Default::default()
            }
        }
    }

    impl From<LevelFilter> for TracingConfig {
        fn from(level_filter: LevelFilter) -> Self {
            Self {
                level_filter,
                ..Default::default()
            }
        }
    }

    impl From<DisplayPreference> for TracingConfig {
        fn from(display_preference: DisplayPreference) -> Self {
            Self {
                display_preference,
                ..Default::default()
            }
        }
    }

}
