// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::IntoDiagnostic;
use tracing::dispatcher;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, layer::SubscriberExt, registry::LookupSpan,
                         util::SubscriberInitExt};

use crate::{DisplayPreference, TracingConfig};

/// Avoid gnarly type annotations by using a macro to create the `fmt` layer.
#[macro_export]
macro_rules! create_fmt {
    () => {
        tracing_subscriber::fmt::layer().event_format($crate::ChannelEventFormatter)
    };
}

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

impl TracingConfig {
    /// Global default subscriber, which once set, can't be unset or changed.
    ///
    /// # Errors
    ///
    /// If a global subscriber has already been set.
    pub fn install_global(self) -> miette::Result<()> {
        let layers = try_create_layers(self)?;
        tracing_subscriber::registry()
            .with(layers)
            .try_init()
            .into_diagnostic()
    }

    /// Thread local subscriber, which is reset when the returned guard is dropped.
    ///
    /// # Errors
    ///
    /// If the layers can't be created.
    pub fn install_thread_local(self) -> miette::Result<dispatcher::DefaultGuard> {
        let layers = try_create_layers(self)?;
        Ok(tracing_subscriber::registry().with(layers).set_default())
    }
}

/// Returns the layers. This does not initialize the tracing system.
///
/// # Errors
///
/// If the display layer can't be created.
pub fn try_create_layers(
    tracing_config: TracingConfig,
) -> miette::Result<Vec<Box<DynLayer<tracing_subscriber::Registry>>>> {
    let mut return_it: Vec<Box<DynLayer<tracing_subscriber::Registry>>> = vec![];

    // Set the level filter from the tracing configuration. This is needed if you add
    // more layers which don't have a level filter.
    return_it.push(Box::new(tracing_config.get_level_filter()));

    return_it.push(try_create_display_layer(
        tracing_config.get_level_filter(),
        tracing_config.get_display_preference(),
    )?);

    Ok(return_it)
}

/// This erases the concrete type of the writer, and returns a boxed layer.
///
/// # Errors
///
/// Never, for the stdout and stderr writers.
pub fn try_create_display_layer<S>(
    level_filter: LevelFilter,
    display_preference: DisplayPreference,
) -> miette::Result<Box<DynLayer<S>>>
where
    S: tracing_core::Subscriber + 'static,
    for<'a> S: LookupSpan<'a>,
{
    let fmt_layer = create_fmt!();

    let layer: Box<DynLayer<S>> = match display_preference {
        DisplayPreference::Stdout => Box::new(
            fmt_layer
                .with_writer(std::io::stdout)
                .with_filter(level_filter),
        ),
        DisplayPreference::Stderr => Box::new(
            fmt_layer
                .with_writer(std::io::stderr)
                .with_filter(level_filter),
        ),
    };

    Ok(layer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_create_display_layer() {
        let layer: Box<DynLayer<tracing_subscriber::Registry>> =
            try_create_display_layer(LevelFilter::DEBUG, DisplayPreference::Stderr).unwrap();
        drop(layer);
    }

    #[test]
    fn test_try_create_layers() {
        let layers = try_create_layers(TracingConfig::default()).unwrap();
        assert_eq!(layers.len(), 2);
    }
}
