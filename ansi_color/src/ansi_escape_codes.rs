// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! More info:
//! - <https://doc.rust-lang.org/reference/tokens.html#ascii-escapes>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#24-bit>

use std::fmt::{Display, Formatter, Result};

use strum_macros::EnumCount;

/// SGR (Select Graphic Rendition) codes. Only truecolor (24-bit) colors are
/// generated, there is no 256 color or grayscale fallback.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumCount)]
pub enum SgrCode {
    Reset,
    Bold,
    Dim,
    Italic,
    Underline,
    SlowBlink,
    RapidBlink,
    Invert,
    Hidden,
    ForegroundRGB(u8, u8, u8),
    BackgroundRGB(u8, u8, u8),
}

pub mod sgr_code_impl {
    use super::{Display, Formatter, Result, SgrCode};

    pub const CSI: &str = "\x1b[";
    pub const SGR: &str = "m";
    /// CUB: cursor backward, eg: `ESC[2D` moves the cursor 2 columns left.
    pub const CUB: &str = "D";

    impl Display for SgrCode {
        /// SGR: set graphics mode command.
        /// More info:
        /// - <https://notes.burke.libbey.me/ansi-escape-codes/>
        /// - <https://en.wikipedia.org/wiki/ANSI_escape_code>
        #[rustfmt::skip]
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            match *self {
                SgrCode::Reset                  => write!(f, "{CSI}0{SGR}"),
                SgrCode::Bold                   => write!(f, "{CSI}1{SGR}"),
                SgrCode::Dim                    => write!(f, "{CSI}2{SGR}"),
                SgrCode::Italic                 => write!(f, "{CSI}3{SGR}"),
                SgrCode::Underline              => write!(f, "{CSI}4{SGR}"),
                SgrCode::SlowBlink              => write!(f, "{CSI}5{SGR}"),
                SgrCode::RapidBlink             => write!(f, "{CSI}6{SGR}"),
                SgrCode::Invert                 => write!(f, "{CSI}7{SGR}"),
                SgrCode::Hidden                 => write!(f, "{CSI}8{SGR}"),
                SgrCode::ForegroundRGB(r, g, b) => write!(f, "{CSI}38;2;{r};{g};{b}{SGR}"),
                SgrCode::BackgroundRGB(r, g, b) => write!(f, "{CSI}48;2;{r};{g};{b}{SGR}"),
            }
        }
    }
}
