// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use const_format::formatcp;
use ender_ansi_color::{ColorResult, EnderColor, RESET, RgbColor, StyledLine, fg_color,
                       plain, sgr_code_impl::{CSI, CUB}};

use crate::PrefixConfig;

/// Moves the cursor 1 column left. Leads the channel name, so that the channel's own
/// decoration (eg: the `[` before it) is overwritten.
pub const CHANNEL_NAME_LEAD: &str = formatcp!("{csi}1{cub}", csi = CSI, cub = CUB);

/// Moves the cursor 2 columns left, then a space and a reset. Leads every message, so the
/// `] ` that closes the channel decoration is overwritten.
pub const MESSAGE_LEAD: &str = formatcp!("{csi}2{cub} {reset}", csi = CSI, cub = CUB, reset = RESET);

/// The colored label that every line from a [`crate::PrefixedLogger`] starts with.
///
/// The color is validated when the prefix is created, so a prefix that exists can always
/// be rendered. Rendering:
///
/// ```text
/// ESC[38;2;R;G;Bm label [ESC[38;2;119;119;119m " »"] ESC[0m
/// ```
///
/// # Example usage:
///
/// ```rust
/// use ender_log::LoggerPrefix;
///
/// let prefix = LoggerPrefix::try_new("Test", "#6400d4", true).unwrap();
/// assert_eq!(prefix.color().hex(), "#6400D4");
/// assert_eq!(
///     prefix.rendered(),
///     "\x1b[38;2;100;0;212mTest\x1b[38;2;119;119;119m »\x1b[0m"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerPrefix {
    label: String,
    color: EnderColor,
    use_arrow: bool,
    rendered: String,
}

impl LoggerPrefix {
    pub const DEFAULT_COLOR: &'static str = "#6400D4";
    pub const DEFAULT_RGB: RgbColor = RgbColor::from_u8(100, 0, 212);
    pub const ARROW_GLYPH: &'static str = " »";
    pub const ARROW_COLOR: &'static str = "#777777";
    pub const ARROW_RGB: RgbColor = RgbColor::from_u8(119, 119, 119);

    /// # Errors
    ///
    /// Any [`ender_ansi_color::ColorError`] from validating `arg_color`.
    pub fn try_new<'a>(
        arg_label: impl Into<String>,
        arg_color: impl Into<Option<&'a str>>,
        use_arrow: bool,
    ) -> ColorResult<Self> {
        let color = EnderColor::try_from_hex(arg_color)?;
        Ok(Self::new(arg_label, color, use_arrow))
    }

    /// Label in [`Self::DEFAULT_COLOR`], with the arrow.
    #[must_use]
    pub fn with_label(arg_label: impl Into<String>) -> Self {
        Self::new(arg_label, EnderColor::from(Self::DEFAULT_RGB), true)
    }

    /// # Errors
    ///
    /// Any [`ender_ansi_color::ColorError`] from validating `config.color`.
    pub fn try_from_config(config: &PrefixConfig) -> ColorResult<Self> {
        Self::try_new(config.name.as_str(), config.color.as_str(), config.use_arrow)
    }

    #[must_use]
    pub fn new(arg_label: impl Into<String>, color: EnderColor, use_arrow: bool) -> Self {
        let label = arg_label.into();
        let rendered = render(&label, &color, use_arrow);
        Self {
            label,
            color,
            use_arrow,
            rendered,
        }
    }

    #[must_use]
    pub fn label(&self) -> &str { &self.label }

    #[must_use]
    pub fn color(&self) -> &EnderColor { &self.color }

    #[must_use]
    pub fn use_arrow(&self) -> bool { self.use_arrow }

    #[must_use]
    pub fn rendered(&self) -> &str { &self.rendered }

    /// The name of the log channel this prefix is bound to.
    #[must_use]
    pub fn channel_name(&self) -> String {
        format!("{CHANNEL_NAME_LEAD}{}{RESET}", self.rendered)
    }

    /// Same content as [`Self::rendered`], as rich text: the label in the prefix color,
    /// the arrow in [`Self::ARROW_COLOR`], then a single plain space.
    #[must_use]
    pub fn to_styled_line(&self) -> StyledLine {
        let mut line = StyledLine::new().with(fg_color(self.color.rgb(), &self.label));
        if self.use_arrow {
            line.push(fg_color(Self::ARROW_RGB, Self::ARROW_GLYPH));
        }
        line.with(plain(" "))
    }
}

fn render(label: &str, color: &EnderColor, use_arrow: bool) -> String {
    let mut acc = format!("{}{label}", color.as_fg_sgr());
    if use_arrow {
        acc.push_str(&format!(
            "{}{}",
            LoggerPrefix::ARROW_RGB.as_fg_sgr(),
            LoggerPrefix::ARROW_GLYPH
        ));
    }
    acc.push_str(RESET);
    acc
}

impl Display for LoggerPrefix {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "{}", self.rendered) }
}
