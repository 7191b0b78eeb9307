// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! This module contains a parser that parses a hex color string into a [`RgbColor`]
//! struct. The hex color string can be in one of the following formats:
//! - `#RRGGBB`, eg: `#FF0000` for red.
//! - `#RGB`, eg: `#F00` for red, where each digit is doubled (`F` -> `FF`).
//!
//! Digits are case-insensitive. The whole input must be consumed, so `#FF00001` and
//! `#FF00` are rejected. Callers are expected to trim surrounding whitespace first.

use std::num::ParseIntError;

use nom::{IResult,
          Parser,
          branch::alt,
          bytes::complete::{tag, take_while_m_n},
          combinator::{all_consuming, map_res}};

use crate::RgbColor;

/// Parse function that generates an [`RgbColor`] struct from a valid hex color string.
///
/// # Errors
///
/// Returns a [`nom::Err`] if the input is not exactly `#` followed by 3 or 6 hex
/// digits.
pub fn parse_hex_color(input: &str) -> IResult<&str, RgbColor> {
    let (input, _) = tag("#").parse(input)?;
    alt((
        intermediate_parsers::parse_long_form,
        intermediate_parsers::parse_short_form,
    ))
    .parse(input)
}

/// Returns `true` if the (already trimmed) input matches the hex color grammar.
#[must_use]
pub fn matches_hex_grammar(input: &str) -> bool { parse_hex_color(input).is_ok() }

/// Helper functions to match and parse hex digits. These are not [Parser]
/// implementations.
mod helper_fns {
    use super::ParseIntError;

    /// This function is used by [`super::take_while_m_n`] and as long as it returns
    /// `true` items will be taken from the input.
    pub fn match_is_hex_digit(c: char) -> bool { c.is_ascii_hexdigit() }

    /// This function is used by [`super::map_res`] and it returns a [Result], not
    /// [`super::IResult`].
    pub fn parse_str_to_hex_num(input: &str) -> Result<u8, ParseIntError> {
        u8::from_str_radix(input, 16)
    }

    /// Shorthand digits are doubled, so `F` is `0xFF` and `A` is `0xAA`.
    pub fn parse_short_str_to_hex_num(input: &str) -> Result<u8, ParseIntError> {
        u8::from_str_radix(input, 16).map(|it| it * 0x11)
    }
}

/// These are the [Parser] implementations that are used by [`parse_hex_color`].
mod intermediate_parsers {
    use super::{IResult, Parser, RgbColor, all_consuming, helper_fns, map_res,
                take_while_m_n};

    fn parse_long_seg(input: &str) -> IResult<&str, u8> {
        map_res(
            take_while_m_n(2, 2, helper_fns::match_is_hex_digit),
            helper_fns::parse_str_to_hex_num,
        )
        .parse(input)
    }

    fn parse_short_seg(input: &str) -> IResult<&str, u8> {
        map_res(
            take_while_m_n(1, 1, helper_fns::match_is_hex_digit),
            helper_fns::parse_short_str_to_hex_num,
        )
        .parse(input)
    }

    /// `RRGGBB`.
    pub fn parse_long_form(input: &str) -> IResult<&str, RgbColor> {
        let (input, (red, green, blue)) =
            all_consuming((parse_long_seg, parse_long_seg, parse_long_seg))
                .parse(input)?;
        Ok((input, RgbColor::from_u8(red, green, blue)))
    }

    /// `RGB`.
    pub fn parse_short_form(input: &str) -> IResult<&str, RgbColor> {
        let (input, (red, green, blue)) =
            all_consuming((parse_short_seg, parse_short_seg, parse_short_seg))
                .parse(input)?;
        Ok((input, RgbColor::from_u8(red, green, blue)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn parse_valid_long_color() {
        let result = parse_hex_color("#2F14DF");
        let Ok((remainder, color)) = result else {
            panic!();
        };
        assert_eq!(remainder, "");
        assert_eq!(color, RgbColor::from_u8(47, 20, 223));
    }

    #[test]
    fn parse_valid_short_color() {
        let Ok((_, color)) = parse_hex_color("#FAB") else {
            panic!();
        };
        assert_eq!(color, RgbColor::from_u8(255, 170, 187));
    }

    #[test]
    fn parse_is_case_insensitive() {
        let (_, lower) = parse_hex_color("#ffaabb").unwrap();
        let (_, upper) = parse_hex_color("#FFAABB").unwrap();
        let (_, mixed) = parse_hex_color("#fFaAbB").unwrap();
        assert_eq!(lower, upper);
        assert_eq!(mixed, upper);
    }

    #[test_case("#"; "only hash")]
    #[test_case("#F"; "one digit")]
    #[test_case("#FF"; "two digits")]
    #[test_case("#FFFF"; "four digits")]
    #[test_case("#FFFFF"; "five digits")]
    #[test_case("#FFFFFFF"; "seven digits")]
    #[test_case("FFAABB"; "missing hash")]
    #[test_case("#gg0000"; "non hex digits")]
    #[test_case("🔅#2F14DF"; "leading garbage")]
    #[test_case("#2F14DF🔅"; "trailing garbage")]
    #[test_case(" #FAB"; "untrimmed")]
    #[test_case(""; "empty")]
    fn parse_invalid_color(input: &str) {
        assert!(parse_hex_color(input).is_err());
        assert!(!matches_hex_grammar(input));
    }
}
