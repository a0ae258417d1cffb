// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::borrow::Cow;
use std::sync::Arc;

use crate::{AttributeKey, AttributeMap, AttributeValue, Color, Styler};

/// An immutable set of text attributes.
///
/// Styles are built by chaining setters. Setting the same key twice keeps the last value.
///
/// ## Example
///
/// ```
/// use tag_styles::{AttributeKey, AttributeValue, Style};
///
/// let style = Style::new().font_size(15.0).underline(true).font_size(20.0);
/// assert_eq!(style.attributes().len(), 2);
/// assert_eq!(
///     style.get(&AttributeKey::FontSize),
///     Some(&AttributeValue::Number(20.0))
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Style {
    attributes: AttributeMap,
}

impl Style {
    /// Creates a style with no attributes.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a style from an existing attribute map.
    #[inline]
    pub fn from_attributes(attributes: AttributeMap) -> Self {
        Self { attributes }
    }

    /// Returns the attributes of this style, in the order they were first set.
    #[inline]
    pub fn attributes(&self) -> &AttributeMap {
        &self.attributes
    }

    /// Returns the value set for `key`.
    #[inline]
    pub fn get(&self, key: &AttributeKey) -> Option<&AttributeValue> {
        self.attributes.get(key)
    }

    /// Sets an arbitrary attribute.
    #[inline]
    pub fn set(mut self, key: AttributeKey, value: impl Into<AttributeValue>) -> Self {
        self.attributes.insert(key, value.into());
        self
    }

    /// Removes an attribute.
    #[inline]
    pub fn unset(mut self, key: &AttributeKey) -> Self {
        self.attributes.remove(key);
        self
    }

    /// Sets the text color.
    pub fn foreground(self, color: Color) -> Self {
        self.set(AttributeKey::Foreground, color)
    }

    /// Sets the background color.
    pub fn background(self, color: Color) -> Self {
        self.set(AttributeKey::Background, color)
    }

    /// Sets the font family name.
    pub fn font_family(self, family: impl Into<Arc<str>>) -> Self {
        self.set(AttributeKey::FontFamily, AttributeValue::Text(family.into()))
    }

    /// Sets the font size in points.
    pub fn font_size(self, size: f32) -> Self {
        self.set(AttributeKey::FontSize, size)
    }

    /// Sets the numeric font weight.
    pub fn font_weight(self, weight: u16) -> Self {
        self.set(AttributeKey::FontWeight, f32::from(weight))
    }

    /// Selects an italic face.
    pub fn italic(self, italic: bool) -> Self {
        self.set(AttributeKey::Italic, italic)
    }

    /// Sets underline decoration.
    pub fn underline(self, underline: bool) -> Self {
        self.set(AttributeKey::Underline, underline)
    }

    /// Sets strikethrough decoration.
    pub fn strikethrough(self, strikethrough: bool) -> Self {
        self.set(AttributeKey::Strikethrough, strikethrough)
    }

    /// Sets the kerning adjustment.
    pub fn kerning(self, kerning: f32) -> Self {
        self.set(AttributeKey::Kerning, kerning)
    }

    /// Sets extra spacing between letters.
    pub fn letter_spacing(self, spacing: f32) -> Self {
        self.set(AttributeKey::LetterSpacing, spacing)
    }

    /// Sets extra spacing between lines.
    pub fn line_spacing(self, spacing: f32) -> Self {
        self.set(AttributeKey::LineSpacing, spacing)
    }

    /// Sets a link target.
    pub fn link(self, target: impl Into<Arc<str>>) -> Self {
        self.set(AttributeKey::Link, AttributeValue::Text(target.into()))
    }

    /// Derives a new style with the attributes of `other` layered over `self`.
    #[must_use]
    pub fn by_adding(&self, other: &Self) -> Self {
        Self::from_attributes(self.attributes.merged(&other.attributes))
    }
}

impl Styler for Style {
    fn attributes(&self) -> Cow<'_, AttributeMap> {
        Cow::Borrowed(&self.attributes)
    }
}

/// Merges the attributes of `styles` in order into a single style.
///
/// Later styles override earlier ones on conflicting keys; disjoint keys are unioned.
pub fn merge_styles<'a, S, I>(styles: I) -> Style
where
    S: Styler + ?Sized + 'a,
    I: IntoIterator<Item = &'a S>,
{
    let mut attributes = AttributeMap::new();
    for style in styles {
        attributes.extend_from(&style.attributes());
    }
    Style::from_attributes(attributes)
}

#[cfg(test)]
mod tests {
    use super::{Style, merge_styles};
    use crate::{AttributeKey, AttributeValue, Color, Styler};
    use pretty_assertions::assert_eq;

    const RED: Color = Color::from_rgb(255, 0, 0);
    const BLUE: Color = Color::from_rgb(0, 0, 255);

    #[test]
    fn merge_prefers_later_styles() {
        let s1 = Style::new().foreground(RED);
        let s2 = Style::new().foreground(BLUE).font_weight(700);
        let merged = merge_styles([&s1, &s2]);
        assert_eq!(
            merged,
            Style::new().foreground(BLUE).font_weight(700),
            "later style wins on conflicts"
        );
        assert_eq!(
            merge_styles([&s2, &s1]).get(&AttributeKey::Foreground),
            Some(&AttributeValue::Color(RED))
        );
    }

    #[test]
    fn merge_of_trait_objects() {
        let styles: Vec<Box<dyn Styler>> = vec![
            Box::new(Style::new().italic(true)),
            Box::new(Style::new().underline(true)),
        ];
        let merged = merge_styles(styles.iter().map(|s| s.as_ref()));
        assert_eq!(merged.attributes().len(), 2);
    }

    #[test]
    fn by_adding_leaves_receiver_alone() {
        let normal = Style::new().font_size(15.0);
        let red = normal.by_adding(&Style::new().foreground(RED));
        assert_eq!(normal.attributes().len(), 1);
        assert_eq!(
            red.get(&AttributeKey::FontSize),
            Some(&AttributeValue::Number(15.0))
        );
        assert_eq!(
            red.get(&AttributeKey::Foreground),
            Some(&AttributeValue::Color(RED))
        );
    }

    #[test]
    fn unset_removes_a_key() {
        let style = Style::new().underline(true).link("https://example.invalid");
        let style = style.unset(&AttributeKey::Underline);
        let keys: Vec<_> = style.attributes().keys().collect();
        assert_eq!(keys, [&AttributeKey::Link]);
    }
}
