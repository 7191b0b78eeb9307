// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Stateless functions that turn a color (in any [`ColorInput`] shape) into truecolor
//! escape sequences, plus the fixed style sequences.
//!
//! ```rust
//! use ender_ansi_color::{RESET, background_color, text_color};
//!
//! assert_eq!(text_color("#FF0000").unwrap(), "\x1b[38;2;255;0;0m");
//! assert_eq!(background_color((0, 0, 255)).unwrap(), "\x1b[48;2;0;0;255m");
//! assert!(text_color("#FF00").is_err());
//!
//! println!("{}red{RESET}", text_color("#F00").unwrap());
//! ```

use crate::{ColorInput, ColorResult, SgrCode, to_color_value};

// Skip rustfmt for the constant table.
#[rustfmt::skip]
mod style_constants {
    pub const RESET: &str       = "\x1b[0m";
    pub const BOLD: &str        = "\x1b[1m";
    pub const DIM: &str         = "\x1b[2m";
    pub const ITALIC: &str      = "\x1b[3m";
    pub const UNDERLINE: &str   = "\x1b[4m";
    pub const BLINK: &str       = "\x1b[5m";
    pub const RAPID_BLINK: &str = "\x1b[6m";
    pub const REVERSE: &str     = "\x1b[7m";
    pub const HIDDEN: &str      = "\x1b[8m";
}
pub use style_constants::*;

/// Foreground color: `ESC[38;2;R;G;Bm`.
///
/// # Errors
///
/// See [`to_color_value`].
pub fn text_color<'a>(arg_color: impl Into<ColorInput<'a>>) -> ColorResult<String> {
    let color = to_color_value(arg_color)?;
    Ok(color.as_fg_sgr().to_string())
}

/// Background color: `ESC[48;2;R;G;Bm`.
///
/// # Errors
///
/// See [`to_color_value`].
pub fn background_color<'a>(arg_color: impl Into<ColorInput<'a>>) -> ColorResult<String> {
    let color = to_color_value(arg_color)?;
    Ok(color.as_bg_sgr().to_string())
}

/// The style constants paired with the [`SgrCode`] they are rendered from.
pub const STYLE_CODES: [(&str, SgrCode); 9] = [
    (RESET, SgrCode::Reset),
    (BOLD, SgrCode::Bold),
    (DIM, SgrCode::Dim),
    (ITALIC, SgrCode::Italic),
    (UNDERLINE, SgrCode::Underline),
    (BLINK, SgrCode::SlowBlink),
    (RAPID_BLINK, SgrCode::RapidBlink),
    (REVERSE, SgrCode::Invert),
    (HIDDEN, SgrCode::Hidden),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ColorError, ColorNotation, EnderColor, RgbColor};
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn test_style_constants_match_sgr_codes() {
        for (constant, sgr_code) in STYLE_CODES {
            assert_eq!(constant, sgr_code.to_string());
        }
    }

    #[test]
    fn test_text_color_from_hex() {
        assert_eq!(text_color("#FF0000").unwrap(), "\x1b[38;2;255;0;0m");
        assert_eq!(text_color("#F00").unwrap(), "\x1b[38;2;255;0;0m");
        assert_eq!(text_color("#6400d4").unwrap(), "\x1b[38;2;100;0;212m");
    }

    #[test]
    fn test_every_shape_renders_the_same() {
        let color = EnderColor::try_from_hex("#777777").unwrap();
        let expected = "\x1b[38;2;119;119;119m";

        assert_eq!(text_color("#777").unwrap(), expected);
        assert_eq!(text_color((119, 119, 119)).unwrap(), expected);
        assert_eq!(text_color(&[119, 119, 119]).unwrap(), expected);
        assert_eq!(text_color(&[119, 119, 119][..]).unwrap(), expected);
        assert_eq!(text_color(&color).unwrap(), expected);
        assert_eq!(text_color(RgbColor::from_u8(119, 119, 119)).unwrap(), expected);
    }

    #[test]
    fn test_background_color() {
        assert_eq!(background_color("#FF0000").unwrap(), "\x1b[48;2;255;0;0m");
        assert_eq!(background_color((0, 128, 255)).unwrap(), "\x1b[48;2;0;128;255m");
    }

    #[test_case("#FF00")]
    #[test_case("red")]
    #[test_case("")]
    fn test_invalid_hex_fails(input: &str) {
        assert_eq!(text_color(input), Err(ColorError::invalid_format(input)));
        assert_eq!(
            background_color(input),
            Err(ColorError::invalid_format(input))
        );
    }

    #[test]
    fn test_invalid_channels_fail() {
        assert_eq!(
            text_color((256, 0, 0)),
            Err(ColorError::invalid_channels(&[256, 0, 0]))
        );
        assert_eq!(
            background_color(&[1, 2][..]),
            Err(ColorError::invalid_channels(&[1, 2]))
        );
        assert_eq!(
            text_color(None::<&str>),
            Err(ColorError::missing(ColorNotation::Hex))
        );
    }
}
