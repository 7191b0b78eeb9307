// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use ender_ansi_color::{StyledLine, StyledText};

use crate::{FragmentLog, LogSink, PluginConfig, PrefixedLogger, check_config_version};

/// What a plugin host has to provide so that [`EnderCore`] can build and rebuild its
/// logger. Nothing in here refers to a particular server runtime.
pub trait PrefixHost {
    fn plugin_name(&self) -> &str;

    /// Read every time the logger is (re)configured.
    ///
    /// # Errors
    ///
    /// If the host can't produce its configuration.
    fn plugin_config(&self) -> miette::Result<PluginConfig>;

    fn required_config_version(&self) -> u32;
}

/// Owns the logger of one plugin.
///
/// Before the first [`EnderCore::load`] the logger is labeled with the plugin name in
/// the default color. After that, the prefix follows the host's configuration.
///
/// # Example usage:
///
/// ```rust
/// use ender_ansi_color::plain;
/// use ender_log::{EnderCore, FragmentLog, MemorySink, PluginConfig, PrefixHost};
///
/// struct Host;
///
/// impl PrefixHost for Host {
///     fn plugin_name(&self) -> &str { "MyPlugin" }
///     fn plugin_config(&self) -> miette::Result<PluginConfig> {
///         PluginConfig::try_from_json_str(
///             r##"{ "version": 1, "prefix": { "name": "Mine", "color": "#0F0" } }"##,
///         )
///     }
///     fn required_config_version(&self) -> u32 { 1 }
/// }
///
/// let sink = MemorySink::new_shared();
/// let core = EnderCore::try_from_host(&Host, sink.clone()).unwrap();
/// core.logger().info(["ready"]);
///
/// let line = core.gen_message([plain("Hello")]);
/// assert_eq!(line.to_plain_text(), "Mine » Hello");
/// ```
#[derive(Debug)]
pub struct EnderCore<S: LogSink> {
    logger: PrefixedLogger<S>,
}

impl<S: LogSink> EnderCore<S> {
    pub fn new(arg_name: impl Into<String>, sink: S) -> Self {
        Self {
            logger: PrefixedLogger::with_label(arg_name, sink),
        }
    }

    /// [`EnderCore::new`] with the host's plugin name, then [`EnderCore::load`].
    ///
    /// # Errors
    ///
    /// Same as [`EnderCore::load`].
    pub fn try_from_host(host: &impl PrefixHost, sink: S) -> miette::Result<Self> {
        let mut it = Self::new(host.plugin_name(), sink);
        it.load(host)?;
        Ok(it)
    }

    /// Checks the configuration version, then reconfigures the logger. A version
    /// mismatch only logs a warning.
    ///
    /// # Errors
    ///
    /// If the host can't produce its configuration, or the configured color is invalid.
    /// In both cases the current prefix stays bound.
    pub fn load(&mut self, host: &impl PrefixHost) -> miette::Result<()> {
        let config = host.plugin_config()?;
        check_config_version(host.required_config_version(), config.version, &self.logger);
        self.apply(&config)
    }

    /// Must be called whenever the host's configuration changes.
    ///
    /// # Errors
    ///
    /// Same as [`EnderCore::load`].
    pub fn reload(&mut self, host: &impl PrefixHost) -> miette::Result<()> {
        let config = host.plugin_config()?;
        self.apply(&config)
    }

    fn apply(&mut self, config: &PluginConfig) -> miette::Result<()> {
        self.logger.reconfigure(&config.prefix)?;
        Ok(())
    }

    /// The prefix as rich text followed by `fragments`, ready for a chat or console
    /// message.
    pub fn gen_message(&self, fragments: impl IntoIterator<Item = StyledText>) -> StyledLine {
        let mut line = self.logger.prefix().to_styled_line();
        line.append(fragments.into_iter().collect());
        line
    }

    pub fn logger(&self) -> &PrefixedLogger<S> { &self.logger }
}

impl<S: LogSink> FragmentLog for EnderCore<S> {
    fn log(&self, level: tracing::Level, fragments: impl IntoIterator<Item = impl AsRef<str>>) {
        self.logger.log(level, fragments);
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, sync::Arc};

    use ender_ansi_color::{ColorError, RgbColor, fg_color, plain};
    use pretty_assertions::assert_eq;
    use tracing::Level;

    use super::*;
    use crate::{LoggerPrefix, MemorySink, PrefixConfig};

    struct FakeHost {
        config: RefCell<miette::Result<PluginConfig>>,
        required_version: u32,
    }

    impl FakeHost {
        fn new(version: u32, prefix: PrefixConfig, required_version: u32) -> Self {
            Self {
                config: RefCell::new(Ok(PluginConfig { version, prefix })),
                required_version,
            }
        }

        fn set_prefix(&self, prefix: PrefixConfig) {
            let version = self.required_version;
            *self.config.borrow_mut() = Ok(PluginConfig { version, prefix });
        }

        fn set_broken(&self) {
            *self.config.borrow_mut() = Err(miette::miette!("config file is gone"));
        }
    }

    impl PrefixHost for FakeHost {
        fn plugin_name(&self) -> &str { "FakePlugin" }

        fn plugin_config(&self) -> miette::Result<PluginConfig> {
            match &*self.config.borrow() {
                Ok(config) => Ok(config.clone()),
                Err(report) => Err(miette::miette!("{report}")),
            }
        }

        fn required_config_version(&self) -> u32 { self.required_version }
    }

    fn prefix_config(name: &str, color: &str, use_arrow: bool) -> PrefixConfig {
        PrefixConfig {
            name: name.into(),
            color: color.into(),
            use_arrow,
        }
    }

    #[test]
    fn test_default_prefix_before_load() {
        let core = EnderCore::new("FakePlugin", MemorySink::new());
        assert_eq!(core.logger().prefix(), &LoggerPrefix::with_label("FakePlugin"));
    }

    #[test]
    fn test_load_applies_config() {
        let host = FakeHost::new(1, prefix_config("Mine", "#00ff00", false), 1);
        let sink = MemorySink::new_shared();
        let core = EnderCore::try_from_host(&host, Arc::clone(&sink)).unwrap();

        assert_eq!(core.logger().prefix().label(), "Mine");
        assert_eq!(core.logger().prefix().color().hex(), "#00FF00");
        assert!(sink.is_empty());
    }

    #[test]
    fn test_version_mismatch_only_warns() {
        let host = FakeHost::new(1, prefix_config("Mine", "#00ff00", true), 2);
        let sink = MemorySink::new_shared();
        let core = EnderCore::try_from_host(&host, Arc::clone(&sink)).unwrap();

        let records = sink.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].level, Level::WARN);
        assert!(records[0].message.contains("Config version must be 2"));
        // The warning goes out under the prefix that was active before the load.
        assert_eq!(
            records[0].channel,
            LoggerPrefix::with_label("FakePlugin").channel_name()
        );
        assert_eq!(core.logger().prefix().label(), "Mine");
    }

    #[test]
    fn test_reload_follows_config_changes() {
        let host = FakeHost::new(1, prefix_config("Mine", "#00ff00", true), 1);
        let mut core = EnderCore::try_from_host(&host, MemorySink::new()).unwrap();

        host.set_prefix(prefix_config("Renamed", "#f00", false));
        core.reload(&host).unwrap();

        assert_eq!(core.logger().prefix().label(), "Renamed");
        assert_eq!(core.logger().prefix().color().hex(), "#FF0000");
        assert!(!core.logger().prefix().use_arrow());
    }

    #[test]
    fn test_failed_reload_keeps_prefix() {
        let host = FakeHost::new(1, prefix_config("Mine", "#00ff00", true), 1);
        let mut core = EnderCore::try_from_host(&host, MemorySink::new()).unwrap();
        let before = core.logger().prefix().clone();

        host.set_prefix(prefix_config("Renamed", "#12", true));
        let report = core.reload(&host).unwrap_err();
        assert_eq!(
            report.downcast_ref::<ColorError>(),
            Some(&ColorError::invalid_format("#12"))
        );
        assert_eq!(core.logger().prefix(), &before);

        host.set_broken();
        assert!(core.reload(&host).is_err());
        assert_eq!(core.logger().prefix(), &before);
    }

    #[test]
    fn test_gen_message() {
        let host = FakeHost::new(1, prefix_config("Mine", "#6400D4", true), 1);
        let core = EnderCore::try_from_host(&host, MemorySink::new()).unwrap();

        let line = core.gen_message([plain("Hello "), fg_color((255, 0, 0), "world")]);

        assert_eq!(line.to_plain_text(), "Mine » Hello world");
        assert_eq!(line.len(), 5);
        assert_eq!(line.items[0].color_fg, Some(RgbColor::from_u8(100, 0, 212)));
        assert_eq!(line.items[1].color_fg, Some(LoggerPrefix::ARROW_RGB));
        assert_eq!(line.items[4].color_fg, Some(RgbColor::from_u8(255, 0, 0)));
    }

    #[test]
    fn test_core_logs_through_its_logger() {
        let sink = MemorySink::new_shared();
        let core = EnderCore::new("FakePlugin", Arc::clone(&sink));
        core.error(["boom"]);

        let records = sink.records();
        assert_eq!(records[0].level, Level::ERROR);
        assert_eq!(records[0].channel, core.logger().channel_name());
    }
}
