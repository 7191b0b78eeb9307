// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use smallstr::SmallString;
use smallvec::{SmallVec, smallvec};

use crate::{RgbColor, SgrCode};

/// A run of text with an optional foreground color and a list of attributes. This is
/// the rich-text counterpart of a raw escape sequence string: it can be inspected
/// structurally (which text, which color), and rendered with [Display].
///
/// - `text` - the text to print.
/// - `color_fg` - foreground color, if any.
/// - `attribs` - attributes like [`SgrCode::Bold`]. This is owned in a stack allocated
///   buffer (which can spill to the heap if it gets larger than
///   [`sizing::MAX_STYLED_TEXT_ATTRIB_SIZE`]).
///
/// Rendering emits the attributes, then the foreground color, then the text, then a
/// reset. Text with no color and no attributes is emitted as is.
///
/// # Example usage:
///
/// ```rust
/// use ender_ansi_color::{RgbColor, StyledLine, fg_color, plain};
///
/// let line = StyledLine::from_iter([
///     fg_color(RgbColor::from_u8(100, 0, 212), "Test").bold(),
///     plain(" says hi"),
/// ]);
/// assert_eq!(line.to_plain_text(), "Test says hi");
/// println!("{line}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledText {
    pub text: sizing::InlineString,
    pub color_fg: Option<RgbColor>,
    pub attribs: sizing::InlineVecAttribs,
}

pub mod sizing {
    use super::{SgrCode, SmallString, SmallVec, StyledText};

    /// Attributes are: bold, dim, italic, underline, etc. which are in [`SgrCode`].
    pub const MAX_STYLED_TEXT_ATTRIB_SIZE: usize = 4;
    pub type InlineVecAttribs = SmallVec<[SgrCode; MAX_STYLED_TEXT_ATTRIB_SIZE]>;

    pub const DEFAULT_STRING_STORAGE_SIZE: usize = 16;
    pub type InlineString = SmallString<[u8; DEFAULT_STRING_STORAGE_SIZE]>;

    /// A prefix plus a few message fragments.
    pub const MAX_STYLED_LINE_SIZE: usize = 8;
    pub type InlineVecStyledText = SmallVec<[StyledText; MAX_STYLED_LINE_SIZE]>;
}

pub fn fg_color(arg_color: impl Into<RgbColor>, text: impl AsRef<str>) -> StyledText {
    StyledText {
        text: text.as_ref().into(),
        color_fg: Some(arg_color.into()),
        attribs: smallvec![],
    }
}

pub fn plain(text: impl AsRef<str>) -> StyledText {
    StyledText {
        text: text.as_ref().into(),
        color_fg: None,
        attribs: smallvec![],
    }
}

mod styled_text_impl {
    use super::{RgbColor, SgrCode, StyledText};

    impl StyledText {
        #[must_use]
        pub fn fg(mut self, arg_color: impl Into<RgbColor>) -> Self {
            self.color_fg = Some(arg_color.into());
            self
        }

        #[must_use]
        pub fn bold(self) -> Self { self.attrib(SgrCode::Bold) }

        #[must_use]
        pub fn italic(self) -> Self { self.attrib(SgrCode::Italic) }

        #[must_use]
        pub fn underline(self) -> Self { self.attrib(SgrCode::Underline) }

        #[must_use]
        pub fn dim(self) -> Self { self.attrib(SgrCode::Dim) }

        #[must_use]
        pub fn attrib(mut self, sgr_code: SgrCode) -> Self {
            self.attribs.push(sgr_code);
            self
        }

        #[must_use]
        pub fn to_plain_text(&self) -> &str { self.text.as_str() }

        pub fn println(&self) {
            println!("{self}");
        }
    }
}

/// An ordered sequence of [`StyledText`] that renders as one line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyledLine {
    pub items: sizing::InlineVecStyledText,
}

mod styled_line_impl {
    use super::{StyledLine, StyledText};

    impl StyledLine {
        #[must_use]
        pub fn new() -> Self { Self::default() }

        pub fn push(&mut self, item: StyledText) { self.items.push(item); }

        #[must_use]
        pub fn with(mut self, item: StyledText) -> Self {
            self.items.push(item);
            self
        }

        pub fn append(&mut self, other: StyledLine) { self.items.extend(other.items); }

        #[must_use]
        pub fn len(&self) -> usize { self.items.len() }

        #[must_use]
        pub fn is_empty(&self) -> bool { self.items.is_empty() }

        pub fn iter(&self) -> std::slice::Iter<'_, StyledText> { self.items.iter() }

        /// The text of every item, concatenated, without any escape sequences.
        #[must_use]
        pub fn to_plain_text(&self) -> String {
            self.items.iter().map(StyledText::to_plain_text).collect()
        }

        pub fn println(&self) {
            println!("{self}");
        }
    }

    impl FromIterator<StyledText> for StyledLine {
        fn from_iter<I: IntoIterator<Item = StyledText>>(iter: I) -> Self {
            Self {
                items: iter.into_iter().collect(),
            }
        }
    }

    impl<'a> IntoIterator for &'a StyledLine {
        type Item = &'a StyledText;
        type IntoIter = std::slice::Iter<'a, StyledText>;

        fn into_iter(self) -> Self::IntoIter { self.items.iter() }
    }
}

mod display_trait_impl {
    use super::{Display, Formatter, Result, SgrCode, StyledLine, StyledText};

    impl Display for StyledText {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            for sgr_code in &self.attribs {
                write!(f, "{sgr_code}")?;
            }
            if let Some(color) = self.color_fg {
                write!(f, "{}", color.as_fg_sgr())?;
            }
            write!(f, "{}", self.text)?;
            if self.color_fg.is_some() || !self.attribs.is_empty() {
                write!(f, "{}", SgrCode::Reset)?;
            }
            Ok(())
        }
    }

    impl Display for StyledLine {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            for item in &self.items {
                write!(f, "{item}")?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_plain_text_has_no_escapes() {
        let it = plain("Hello");
        assert_eq!(it.to_string(), "Hello");
        assert_eq!(it.to_plain_text(), "Hello");
    }

    #[test]
    fn test_fg_color_then_reset() {
        let it = fg_color((255, 0, 0), "Hello");
        assert_eq!(it.to_string(), "\x1b[38;2;255;0;0mHello\x1b[0m");
    }

    #[test]
    fn test_attribs_before_color() {
        let it = plain("Hello").bold().fg((0, 0, 0));
        assert_eq!(it.to_string(), "\x1b[1m\x1b[38;2;0;0;0mHello\x1b[0m");
        assert_eq!(it.attribs.as_slice(), &[SgrCode::Bold]);
    }

    #[test]
    fn test_line_renders_in_order() {
        let line = StyledLine::new()
            .with(fg_color((100, 0, 212), "Test"))
            .with(fg_color((119, 119, 119), " »"))
            .with(plain(" hi"));

        assert_eq!(line.len(), 3);
        assert_eq!(line.to_plain_text(), "Test » hi");
        assert_eq!(
            line.to_string(),
            "\x1b[38;2;100;0;212mTest\x1b[0m\x1b[38;2;119;119;119m »\x1b[0m hi"
        );
    }

    #[test]
    fn test_append_and_collect() {
        let mut line: StyledLine = [plain("a"), plain("b")].into_iter().collect();
        line.append(StyledLine::from_iter([plain("c")]));
        line.push(plain("d").italic());

        let texts: Vec<&str> = line.iter().map(StyledText::to_plain_text).collect();
        assert_eq!(texts, vec!["a", "b", "c", "d"]);
        assert!(!line.is_empty());
        assert!(StyledLine::default().is_empty());
    }
}
