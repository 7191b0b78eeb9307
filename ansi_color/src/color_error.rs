// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Errors raised when a caller supplied color can't be validated. See [`ColorError`].

use smallvec::SmallVec;
use strum_macros::Display;

/// Convenience alias used by every validating function in this crate.
pub type ColorResult<T> = Result<T, ColorError>;

/// Channels are held inline, since a well formed RGB color only ever has 3 of them.
pub type InlineVecChannels = SmallVec<[i32; 3]>;

/// Which representation of a color was expected when the input turned out to be absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ColorNotation {
    #[strum(to_string = "HEX")]
    Hex,
    #[strum(to_string = "RGB")]
    Rgb,
}

/// Failure modes for color validation. There are no partial results: any of these
/// means that no color was produced.
///
/// | Variant                 | Cause                                                      |
/// | :---------------------- | :--------------------------------------------------------- |
/// | [`MissingColor`]        | `None` (or an empty channel list) where a color is needed  |
/// | [`InvalidColorFormat`]  | A string that is not `#RGB` or `#RRGGBB`                   |
/// | [`InvalidColorChannel`] | A channel outside `0..=255`, or not exactly 3 channels     |
///
/// [`MissingColor`]: Self::MissingColor
/// [`InvalidColorFormat`]: Self::InvalidColorFormat
/// [`InvalidColorChannel`]: Self::InvalidColorChannel
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum ColorError {
    #[error("{notation}-Color cannot be missing")]
    #[diagnostic(
        code(ender_ansi_color::missing_color),
        help("Supply a color, eg: \"#6400D4\" or (100, 0, 212)")
    )]
    MissingColor { notation: ColorNotation },

    #[error("Invalid HEX-Color format: {input:?}")]
    #[diagnostic(
        code(ender_ansi_color::invalid_color_format),
        help("Use '#' followed by exactly 3 or 6 hex digits, eg: \"#FAB\" or \"#FFAABB\"")
    )]
    InvalidColorFormat { input: String },

    #[error("Invalid RGB-Color: {channels:?}")]
    #[diagnostic(
        code(ender_ansi_color::invalid_color_channel),
        help("Use exactly 3 channels, each in the range 0..=255")
    )]
    InvalidColorChannel { channels: InlineVecChannels },
}

impl ColorError {
    #[must_use]
    pub fn missing(notation: ColorNotation) -> Self { Self::MissingColor { notation } }

    #[must_use]
    pub fn invalid_format(input: impl Into<String>) -> Self {
        Self::InvalidColorFormat {
            input: input.into(),
        }
    }

    #[must_use]
    pub fn invalid_channels(channels: &[i32]) -> Self {
        Self::InvalidColorChannel {
            channels: channels.iter().copied().collect(),
        }
    }
}
