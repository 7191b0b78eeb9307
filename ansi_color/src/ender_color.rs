// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [`EnderColor`] is the validated color value, and [`ColorInput`] is the set of input
//! shapes that can be turned into one via [`to_color_value`].

use std::{fmt::{Display, Formatter},
          str::FromStr};

use crate::{ColorError, ColorResult, HexString, RgbColor, SgrCode, check_rgb,
            check_rgb_channels, hex_to_rgb};

/// An RGB color that is always stored in its canonical form: `#RRGGBB` with upper case
/// hex digits. Shorthand input (`#FAB`) is expanded when the value is created.
///
/// Both views are built from one parsed [`RgbColor`] (see `From<RgbColor>`), and every
/// constructor and [`Self::set`] goes through it. So [`Self::hex`] and [`Self::rgb`]
/// always describe the same color.
///
/// # Example usage:
///
/// ```rust
/// use ender_ansi_color::{EnderColor, RgbColor};
///
/// let mut color = EnderColor::try_from_hex("#fab").unwrap();
/// assert_eq!(color.hex(), "#FFAABB");
/// assert_eq!(color.rgb(), RgbColor::from_u8(255, 170, 187));
///
/// color.set("#6400D4").unwrap();
/// assert_eq!(color.rgb(), RgbColor::from_u8(100, 0, 212));
///
/// assert!(EnderColor::try_from_rgb(256, 0, 0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EnderColor {
    hex: HexString,
    rgb: RgbColor,
}

impl EnderColor {
    /// # Errors
    ///
    /// - [`ColorError::MissingColor`] if the input is `None`.
    /// - [`ColorError::InvalidColorFormat`] if the input isn't `#RGB` or `#RRGGBB`.
    pub fn try_from_hex<'a>(arg_hex: impl Into<Option<&'a str>>) -> ColorResult<Self> {
        hex_to_rgb(arg_hex).map(Self::from)
    }

    /// # Errors
    ///
    /// [`ColorError::InvalidColorChannel`] if any channel is outside `0..=255`.
    pub fn try_from_rgb(red: i32, green: i32, blue: i32) -> ColorResult<Self> {
        check_rgb(red, green, blue).map(Self::from)
    }

    /// # Errors
    ///
    /// - [`ColorError::MissingColor`] if the sequence is `None` or empty.
    /// - [`ColorError::InvalidColorChannel`] if it doesn't have exactly 3 elements, or
    ///   if any element is outside `0..=255`.
    pub fn try_from_channels<'a>(
        arg_channels: impl Into<Option<&'a [i32]>>,
    ) -> ColorResult<Self> {
        check_rgb_channels(arg_channels).map(Self::from)
    }

    #[must_use]
    pub fn hex(&self) -> &str { self.hex.as_str() }

    #[must_use]
    pub fn rgb(&self) -> RgbColor { self.rgb }

    /// Replaces the stored color. On error the current color is left as is.
    ///
    /// # Errors
    ///
    /// Same as [`Self::try_from_hex`].
    pub fn set<'a>(&mut self, arg_hex: impl Into<Option<&'a str>>) -> ColorResult<()> {
        *self = Self::try_from_hex(arg_hex)?;
        Ok(())
    }

    #[must_use]
    pub fn as_fg_sgr(&self) -> SgrCode { self.rgb().as_fg_sgr() }

    #[must_use]
    pub fn as_bg_sgr(&self) -> SgrCode { self.rgb().as_bg_sgr() }
}

/// [`RgbColor::to_hex`] is the canonical form: `#RRGGBB`, upper case, zero padded.
impl From<RgbColor> for EnderColor {
    fn from(color: RgbColor) -> Self {
        Self {
            hex: color.to_hex(),
            rgb: color,
        }
    }
}

impl From<&EnderColor> for RgbColor {
    fn from(color: &EnderColor) -> Self { color.rgb() }
}

impl FromStr for EnderColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> { Self::try_from_hex(s) }
}

impl TryFrom<&str> for EnderColor {
    type Error = ColorError;

    fn try_from(value: &str) -> Result<Self, Self::Error> { Self::try_from_hex(value) }
}

impl TryFrom<(i32, i32, i32)> for EnderColor {
    type Error = ColorError;

    fn try_from((red, green, blue): (i32, i32, i32)) -> Result<Self, Self::Error> {
        Self::try_from_rgb(red, green, blue)
    }
}

impl TryFrom<&[i32]> for EnderColor {
    type Error = ColorError;

    fn try_from(value: &[i32]) -> Result<Self, Self::Error> {
        Self::try_from_channels(value)
    }
}

impl Display for EnderColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "EnderColor{{HEX: {}, RGB: {}}}", self.hex, self.rgb())
    }
}

/// Every input shape that a color can be given in. Instead of one overload per shape,
/// callers pass anything that converts into this, and [`to_color_value`] does the
/// validation in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorInput<'a> {
    Missing,
    Hex(&'a str),
    Rgb(i32, i32, i32),
    Channels(&'a [i32]),
    Color(&'a EnderColor),
    Value(RgbColor),
}

mod color_input_impl {
    use super::{ColorInput, EnderColor, RgbColor};

    impl<'a> From<&'a str> for ColorInput<'a> {
        fn from(hex: &'a str) -> Self { Self::Hex(hex) }
    }

    impl<'a> From<&'a String> for ColorInput<'a> {
        fn from(hex: &'a String) -> Self { Self::Hex(hex.as_str()) }
    }

    impl<'a> From<Option<&'a str>> for ColorInput<'a> {
        fn from(maybe_hex: Option<&'a str>) -> Self {
            maybe_hex.map_or(Self::Missing, Self::Hex)
        }
    }

    impl From<(i32, i32, i32)> for ColorInput<'_> {
        fn from((red, green, blue): (i32, i32, i32)) -> Self { Self::Rgb(red, green, blue) }
    }

    impl<'a> From<&'a [i32]> for ColorInput<'a> {
        fn from(channels: &'a [i32]) -> Self { Self::Channels(channels) }
    }

    impl<'a> From<&'a [i32; 3]> for ColorInput<'a> {
        fn from(channels: &'a [i32; 3]) -> Self { Self::Channels(channels.as_slice()) }
    }

    impl<'a> From<Option<&'a [i32]>> for ColorInput<'a> {
        fn from(maybe_channels: Option<&'a [i32]>) -> Self {
            maybe_channels.map_or(Self::Channels(&[]), Self::Channels)
        }
    }

    impl<'a> From<&'a EnderColor> for ColorInput<'a> {
        fn from(color: &'a EnderColor) -> Self { Self::Color(color) }
    }

    impl From<RgbColor> for ColorInput<'_> {
        fn from(color: RgbColor) -> Self { Self::Value(color) }
    }
}

/// The single validating conversion that every input shape funnels through.
///
/// # Errors
///
/// - [`ColorError::MissingColor`] for absent input (a `None` hex string, or a `None`
///   or empty channel list).
/// - [`ColorError::InvalidColorFormat`] for malformed hex strings.
/// - [`ColorError::InvalidColorChannel`] for out of range channels, or a channel list
///   without exactly 3 elements.
pub fn to_color_value<'a>(arg_color: impl Into<ColorInput<'a>>) -> ColorResult<EnderColor> {
    match arg_color.into() {
        ColorInput::Missing => EnderColor::try_from_hex(None),
        ColorInput::Hex(hex) => EnderColor::try_from_hex(hex),
        ColorInput::Rgb(red, green, blue) => EnderColor::try_from_rgb(red, green, blue),
        ColorInput::Channels(channels) => EnderColor::try_from_channels(channels),
        ColorInput::Color(color) => Ok(color.clone()),
        ColorInput::Value(color) => Ok(EnderColor::from(color)),
    }
}
