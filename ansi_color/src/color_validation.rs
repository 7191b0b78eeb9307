// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Validation and conversion between hex strings and RGB channels.
//!
//! Every function comes in two flavors:
//! - `is_*` returns a [bool] and never fails.
//! - `check_*` returns a [`ColorResult`] with a [`ColorError`] describing why the input
//!   was rejected. The normalizing and converting functions are built on these.
//!
//! "Absent" input is modeled with [Option]. All entry points accept
//! `impl Into<Option<..>>`, so plain values and `None` can both be passed in.

use crate::{ColorError, ColorNotation, ColorResult, HexString, RgbColor,
            hex_color_parser::parse_hex_color};

/// Chars at or below U+0020 (space and the ASCII controls) are trimmed. Other Unicode
/// whitespace, eg: U+00A0, is not.
fn is_trimmable(ch: char) -> bool { ch <= ' ' }

/// Trims the input and checks it against the hex grammar (`#RGB` or `#RRGGBB`). Returns
/// the trimmed input and the parsed color.
fn trim_and_parse_hex(maybe_hex: Option<&str>) -> ColorResult<(&str, RgbColor)> {
    let Some(hex) = maybe_hex else {
        return Err(ColorError::missing(ColorNotation::Hex));
    };
    let trimmed = hex.trim_matches(is_trimmable);
    match parse_hex_color(trimmed) {
        Ok((_, color)) => Ok((trimmed, color)),
        Err(_) => Err(ColorError::invalid_format(hex)),
    }
}

/// Returns `true` if the input (after trimming) is `#` followed by exactly 3 or 6 hex
/// digits. `None` is never valid.
#[must_use]
pub fn is_hex<'a>(arg_hex: impl Into<Option<&'a str>>) -> bool {
    trim_and_parse_hex(arg_hex.into()).is_ok()
}

/// Same check as [`is_hex`], but reports why the input was rejected. On success the
/// trimmed input is returned.
///
/// # Errors
///
/// - [`ColorError::MissingColor`] if the input is `None`.
/// - [`ColorError::InvalidColorFormat`] if the input doesn't match the grammar.
pub fn check_hex<'a>(arg_hex: impl Into<Option<&'a str>>) -> ColorResult<&'a str> {
    trim_and_parse_hex(arg_hex.into()).map(|(trimmed, _)| trimmed)
}

/// Expands shorthand (`#FAB` -> `#FFAABB`) and returns 6 digit input unchanged. The
/// case of the digits is preserved; [`crate::EnderColor`] is what upper-cases.
///
/// # Errors
///
/// Same as [`check_hex`].
pub fn normalize_hex<'a>(arg_hex: impl Into<Option<&'a str>>) -> ColorResult<HexString> {
    let hex = check_hex(arg_hex)?;
    let digits = hex.strip_prefix('#').unwrap_or(hex);

    if digits.len() == 3 {
        let mut acc = HexString::new();
        acc.push('#');
        for ch in digits.chars() {
            acc.push(ch);
            acc.push(ch);
        }
        Ok(acc)
    } else {
        Ok(hex.into())
    }
}

/// Returns `true` if every channel is in `0..=255`.
#[must_use]
pub fn is_rgb(red: i32, green: i32, blue: i32) -> bool { check_rgb(red, green, blue).is_ok() }

/// Same check as [`is_rgb`], but reports why the input was rejected.
///
/// # Errors
///
/// [`ColorError::InvalidColorChannel`] if any channel is outside `0..=255`.
pub fn check_rgb(red: i32, green: i32, blue: i32) -> ColorResult<RgbColor> {
    match (u8::try_from(red), u8::try_from(green), u8::try_from(blue)) {
        (Ok(red), Ok(green), Ok(blue)) => Ok(RgbColor::from_u8(red, green, blue)),
        _ => Err(ColorError::invalid_channels(&[red, green, blue])),
    }
}

/// Returns `true` if the sequence is present, has exactly 3 elements, and every element
/// is in `0..=255`.
#[must_use]
pub fn is_rgb_channels<'a>(arg_channels: impl Into<Option<&'a [i32]>>) -> bool {
    check_rgb_channels(arg_channels).is_ok()
}

/// Same check as [`is_rgb_channels`], but reports why the input was rejected.
///
/// # Errors
///
/// - [`ColorError::MissingColor`] if the sequence is `None` or empty.
/// - [`ColorError::InvalidColorChannel`] if it doesn't have exactly 3 elements, or if
///   any element is outside `0..=255`.
pub fn check_rgb_channels<'a>(
    arg_channels: impl Into<Option<&'a [i32]>>,
) -> ColorResult<RgbColor> {
    match arg_channels.into() {
        None | Some([]) => Err(ColorError::missing(ColorNotation::Rgb)),
        Some(&[red, green, blue]) => check_rgb(red, green, blue),
        Some(other) => Err(ColorError::invalid_channels(other)),
    }
}

/// Validates, expands shorthand, then parses each 2 digit group as base 16.
///
/// # Errors
///
/// Same as [`check_hex`].
pub fn hex_to_rgb<'a>(arg_hex: impl Into<Option<&'a str>>) -> ColorResult<RgbColor> {
    trim_and_parse_hex(arg_hex.into()).map(|(_, color)| color)
}

/// Validates the channels, then formats them as `#RRGGBB` (upper case, zero padded).
///
/// # Errors
///
/// Same as [`check_rgb`].
pub fn rgb_to_hex(red: i32, green: i32, blue: i32) -> ColorResult<HexString> {
    check_rgb(red, green, blue).map(|color| color.to_hex())
}
