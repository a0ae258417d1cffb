// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::str::FromStr;
use std::sync::Arc;

/// Identifies a text attribute.
///
/// The renderer treats keys as opaque; what a key means is up to whoever draws the text.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum AttributeKey {
    /// Text color.
    Foreground,
    /// Color behind the text.
    Background,
    /// Font family name.
    FontFamily,
    /// Font size in points.
    FontSize,
    /// Numeric font weight, `400` being regular.
    FontWeight,
    /// Italic or oblique face.
    Italic,
    /// Underline decoration.
    Underline,
    /// Strikethrough decoration.
    Strikethrough,
    /// Kerning adjustment in points.
    Kerning,
    /// Extra spacing between letters.
    LetterSpacing,
    /// Extra spacing between lines.
    LineSpacing,
    /// Link target.
    Link,
    /// Application-defined attribute.
    Custom(Arc<str>),
}

impl AttributeKey {
    /// Creates an application-defined key.
    pub fn custom(name: impl Into<Arc<str>>) -> Self {
        Self::Custom(name.into())
    }
}

/// The value stored for an [`AttributeKey`].
#[derive(Clone, Debug, PartialEq)]
pub enum AttributeValue {
    /// A color.
    Color(Color),
    /// A flag.
    Bool(bool),
    /// A number.
    Number(f32),
    /// A string.
    Text(Arc<str>),
}

impl From<Color> for AttributeValue {
    fn from(value: Color) -> Self {
        Self::Color(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f32> for AttributeValue {
    fn from(value: f32) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Text(value.into())
    }
}

/// An 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel, `255` being opaque.
    pub a: u8,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::from_rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::from_rgb(255, 255, 255);

    /// Creates an opaque color.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Creates a color with explicit alpha.
    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Parses `#rrggbb` or `#rrggbbaa`; the leading `#` is optional.
impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if !hex.is_ascii() || !matches!(hex.len(), 6 | 8) {
            return Err(ParseColorError::new(s));
        }
        let channel = |ix: usize| {
            u8::from_str_radix(&hex[ix..ix + 2], 16).map_err(|_| ParseColorError::new(s))
        };
        let alpha = if hex.len() == 8 { channel(6)? } else { 255 };
        Ok(Self::from_rgba(channel(0)?, channel(2)?, channel(4)?, alpha))
    }
}

/// Error returned when a string is not a hex color.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseColorError {
    input: String,
}

impl ParseColorError {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_owned(),
        }
    }

    /// The rejected input.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected #rrggbb or #rrggbbaa, found {:?}", self.input)
    }
}

impl core::error::Error for ParseColorError {}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn parses_hex_colors() {
        assert_eq!("#cc3333".parse::<Color>(), Ok(Color::from_rgb(0xcc, 0x33, 0x33)));
        assert_eq!("00000080".parse::<Color>(), Ok(Color::from_rgba(0, 0, 0, 0x80)));
    }

    #[test]
    fn rejects_malformed_colors() {
        for input in ["", "#fff", "#gggggg", "#cc33331", "#éééé"] {
            let err = input.parse::<Color>().unwrap_err();
            assert_eq!(err.input(), input);
        }
    }
}
