// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # ender_ansi_color
//!
//! Validated colors for server plugin consoles, and the truecolor (24-bit) ANSI escape
//! sequences that render them.
//!
//! ```text
//! "#fab" / (255, 170, 187) / [255, 170, 187]
//!      │
//!      ▼
//! ┌──────────────────────┐  is_hex, check_hex, normalize_hex,
//! │  color_validation    │  is_rgb, check_rgb, check_rgb_channels,
//! └──────────┬───────────┘  hex_to_rgb, rgb_to_hex
//!            ▼
//! ┌──────────────────────┐
//! │  EnderColor          │  canonical "#FFAABB"
//! └──────────┬───────────┘
//!            ▼
//! ┌──────────────────────┐  text_color, background_color,
//! │  ansi_text_formatter │  RESET, BOLD, DIM, ...
//! └──────────────────────┘
//! ```
//!
//! Every malformed input fails with a [`ColorError`]; no default color is ever
//! substituted. Nothing here detects terminal capabilities, and there is no fallback to
//! 256 color palettes.
//!
//! ```rust
//! use ender_ansi_color::{EnderColor, RESET, text_color};
//!
//! let color = EnderColor::try_from_hex("#6400d4").unwrap();
//! assert_eq!(color.hex(), "#6400D4");
//!
//! let fg = text_color(&color).unwrap();
//! assert_eq!(fg, "\x1b[38;2;100;0;212m");
//! println!("{fg}EnderCore{RESET}");
//! ```

// Enforce strict error handling in production library code only. Tests and examples are
// allowed to use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
mod ansi_escape_codes;
mod ansi_styled_text;
mod ansi_text_formatter;
mod color_error;
mod color_validation;
mod ender_color;
pub mod hex_color_parser;
mod rgb_color;

// Re-export.
pub use ansi_escape_codes::*;
pub use ansi_styled_text::*;
pub use ansi_text_formatter::*;
pub use color_error::*;
pub use color_validation::*;
pub use ender_color::*;
pub use rgb_color::*;
