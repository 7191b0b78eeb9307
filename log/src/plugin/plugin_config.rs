// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The configuration a plugin host reads its logger prefix from.
//!
//! ```json
//! {
//!   "version": 2,
//!   "prefix": { "name": "MyPlugin", "color": "#6400D4", "useArrow": true }
//! }
//! ```
//!
//! The color string is kept as is here; it is validated when a logger is configured from
//! it (see [`crate::PrefixedLogger::reconfigure`]).

use miette::{Context, IntoDiagnostic};
use serde::{Deserialize, Serialize};

use crate::{FragmentLog, LoggerPrefix};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginConfig {
    #[serde(default)]
    pub version: u32,
    pub prefix: PrefixConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrefixConfig {
    pub name: String,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default = "default_use_arrow")]
    pub use_arrow: bool,
}

fn default_color() -> String { LoggerPrefix::DEFAULT_COLOR.to_owned() }

fn default_use_arrow() -> bool { true }

impl PrefixConfig {
    /// Default color, with the arrow.
    #[must_use]
    pub fn with_name(arg_name: impl Into<String>) -> Self {
        Self {
            name: arg_name.into(),
            color: default_color(),
            use_arrow: default_use_arrow(),
        }
    }
}

impl PluginConfig {
    /// # Errors
    ///
    /// If the input is not valid JSON, or is missing `prefix.name`.
    pub fn try_from_json_str(input: &str) -> miette::Result<Self> {
        serde_json::from_str(input)
            .into_diagnostic()
            .wrap_err(PluginConfigErrorCouldNot::ParseJson)
    }

    /// # Errors
    ///
    /// If serialization fails.
    pub fn try_to_json_string(&self) -> miette::Result<String> {
        serde_json::to_string_pretty(self)
            .into_diagnostic()
            .wrap_err(PluginConfigErrorCouldNot::SerializeJson)
    }
}

#[derive(thiserror::Error, Debug, miette::Diagnostic, Clone, Copy, PartialEq, Eq)]
pub enum PluginConfigErrorCouldNot {
    #[error("Could not parse the plugin configuration")]
    #[diagnostic(
        code(ender_log::plugin_config::parse_json),
        help("Expected a JSON object with at least a `prefix.name` string")
    )]
    ParseJson,

    #[error("Could not serialize the plugin configuration")]
    #[diagnostic(code(ender_log::plugin_config::serialize_json))]
    SerializeJson,
}

/// Compares the configuration version against the one the plugin needs. A mismatch is
/// reported as a warning through `logger` and is never fatal.
pub fn check_config_version(required: u32, found: u32, logger: &impl FragmentLog) -> bool {
    if required == found {
        return true;
    }
    logger.warning([format!("Config version must be {required}, found {found}")]);
    false
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tracing::Level;

    use super::*;
    use crate::{MemorySink, PrefixedLogger};

    #[test]
    fn test_parse_full_config() {
        let config = PluginConfig::try_from_json_str(
            r##"{
                "version": 3,
                "prefix": { "name": "MyPlugin", "color": "#fab", "useArrow": false }
            }"##,
        )
        .unwrap();

        assert_eq!(
            config,
            PluginConfig {
                version: 3,
                prefix: PrefixConfig {
                    name: "MyPlugin".into(),
                    color: "#fab".into(),
                    use_arrow: false,
                },
            }
        );
    }

    #[test]
    fn test_parse_applies_defaults() {
        let config =
            PluginConfig::try_from_json_str(r#"{ "prefix": { "name": "MyPlugin" } }"#)
                .unwrap();

        assert_eq!(config.version, 0);
        assert_eq!(config.prefix, PrefixConfig::with_name("MyPlugin"));
        assert_eq!(config.prefix.color, "#6400D4");
        assert!(config.prefix.use_arrow);
    }

    #[test]
    fn test_parse_does_not_validate_color() {
        let config = PluginConfig::try_from_json_str(
            r#"{ "prefix": { "name": "MyPlugin", "color": "not a color" } }"#,
        )
        .unwrap();
        assert_eq!(config.prefix.color, "not a color");
    }

    #[test]
    fn test_parse_errors() {
        assert!(PluginConfig::try_from_json_str("{").is_err());
        assert!(PluginConfig::try_from_json_str(r#"{ "prefix": {} }"#).is_err());
    }

    #[test]
    fn test_parse_error_is_wrapped() {
        let report = PluginConfig::try_from_json_str(r#"{ "prefix": {} }"#).unwrap_err();

        assert_eq!(
            report.downcast_ref::<PluginConfigErrorCouldNot>(),
            Some(&PluginConfigErrorCouldNot::ParseJson)
        );
        assert_eq!(
            report.to_string(),
            "Could not parse the plugin configuration"
        );
        // The serde_json error is kept as the cause.
        let cause = report.chain().nth(1).map(ToString::to_string).unwrap();
        assert!(cause.contains("missing field `name`"), "{cause}");
    }

    #[test]
    fn test_json_field_names() {
        let json = PluginConfig {
            version: 1,
            prefix: PrefixConfig::with_name("MyPlugin"),
        }
        .try_to_json_string()
        .unwrap();

        assert!(json.contains("\"useArrow\": true"));
        assert!(!json.contains("use_arrow"));
    }

    #[test]
    fn test_check_config_version() {
        let sink = MemorySink::new_shared();
        let logger = PrefixedLogger::with_label("MyPlugin", sink.clone());

        assert!(check_config_version(2, 2, &logger));
        assert!(sink.is_empty());

        assert!(!check_config_version(2, 1, &logger));
        let records = sink.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].level, Level::WARN);
        assert!(records[0].message.ends_with("Config version must be 2, found 1"));
    }
}
