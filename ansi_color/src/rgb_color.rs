// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! RGB (24-bit truecolor) color representation.

use std::fmt::{Display, Formatter, Result};

use smallstr::SmallString;

use crate::{ColorError, SgrCode};

/// `#RRGGBB` is 7 bytes, so it always fits inline.
pub type HexString = SmallString<[u8; sizing::HEX_STRING_STORAGE_SIZE]>;

pub mod sizing {
    pub const HEX_STRING_STORAGE_SIZE: usize = 8;
}

/// Represents a color in RGB (24-bit truecolor) format. Every value of this type is a
/// valid color, since each channel is a [u8]. Raw (unchecked) integer input goes
/// through [`crate::check_rgb`] first.
#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug, Default)]
pub struct RgbColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl From<(u8, u8, u8)> for RgbColor {
    fn from((red, green, blue): (u8, u8, u8)) -> Self { Self::from_u8(red, green, blue) }
}

impl From<RgbColor> for (u8, u8, u8) {
    fn from(it: RgbColor) -> Self { (it.red, it.green, it.blue) }
}

impl TryFrom<(i32, i32, i32)> for RgbColor {
    type Error = ColorError;

    fn try_from((red, green, blue): (i32, i32, i32)) -> std::result::Result<Self, Self::Error> {
        crate::check_rgb(red, green, blue)
    }
}

impl RgbColor {
    #[must_use]
    pub const fn from_u8(red: u8, green: u8, blue: u8) -> Self { Self { red, green, blue } }

    /// Canonical `#RRGGBB` form, upper case and zero padded.
    #[must_use]
    pub fn to_hex(&self) -> HexString {
        format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue).into()
    }

    #[must_use]
    pub fn as_fg_sgr(&self) -> SgrCode {
        SgrCode::ForegroundRGB(self.red, self.green, self.blue)
    }

    #[must_use]
    pub fn as_bg_sgr(&self) -> SgrCode {
        SgrCode::BackgroundRGB(self.red, self.green, self.blue)
    }
}

impl Display for RgbColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{{r: {}, g: {}, b: {}}}", self.red, self.green, self.blue)
    }
}
