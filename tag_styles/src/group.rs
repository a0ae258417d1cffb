// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;
use std::borrow::Cow;

use indexmap::IndexMap;

use crate::markup::{self, RenderMode};
use crate::{AttributeMap, Error, Style, StyledString, Styler, merge_styles};

/// Named styles used to render tag markup, plus an optional base style.
///
/// Tag names are case-sensitive. Rendering looks styles up by name only; the insertion order
/// of the styles matters only for [`Styler::attributes`], which merges them in order.
///
/// Every mutation bumps [`generation`](Self::generation), so caches of rendered text can tell
/// when they are stale.
///
/// ## Example
///
/// ```
/// use tag_styles::{Style, StyleGroup, Styler};
///
/// let mut group = StyleGroup::new(Some(Style::new().font_size(15.0)));
/// group.insert("b", Style::new().font_weight(700));
///
/// let text = group.render("plain <b>bold</b> <i>plain</i>", None).unwrap();
/// assert_eq!(text.as_str(), "plain bold plain");
/// ```
#[derive(Clone, Debug, Default)]
pub struct StyleGroup {
    styles: IndexMap<String, Style>,
    base_style: Option<Style>,
    generation: u64,
}

impl StyleGroup {
    /// Creates an empty group.
    pub fn new(base_style: Option<Style>) -> Self {
        Self {
            base_style,
            ..Self::default()
        }
    }

    /// Creates a group from `(name, style)` pairs, preserving their order.
    ///
    /// A repeated name keeps its first position and its last style.
    pub fn from_styles<N, I>(base_style: Option<Style>, styles: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, Style)>,
    {
        Self {
            styles: styles
                .into_iter()
                .map(|(name, style)| (name.into(), style))
                .collect(),
            base_style,
            generation: 0,
        }
    }

    /// Adds or replaces the style for tag `name`, returning the previous one.
    pub fn insert(&mut self, name: impl Into<String>, style: Style) -> Option<Style> {
        self.generation += 1;
        self.styles.insert(name.into(), style)
    }

    /// Removes the style for tag `name`.
    pub fn remove(&mut self, name: &str) -> Option<Style> {
        let removed = self.styles.shift_remove(name);
        if removed.is_some() {
            self.generation += 1;
        }
        removed
    }

    /// Returns the style registered for tag `name`.
    #[inline]
    pub fn lookup(&self, name: &str) -> Option<&Style> {
        self.styles.get(name)
    }

    /// Iterates over the tag names in insertion order.
    pub fn names(&self) -> impl ExactSizeIterator<Item = &str> {
        self.styles.keys().map(String::as_str)
    }

    /// Iterates over the `(name, style)` pairs in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &Style)> {
        self.styles.iter().map(|(name, style)| (name.as_str(), style))
    }

    /// The number of named styles.
    #[inline]
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Returns `true` if no named styles are registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// The style applied to the whole text before tags are processed.
    #[inline]
    pub fn base_style(&self) -> Option<&Style> {
        self.base_style.as_ref()
    }

    /// Replaces the base style.
    pub fn set_base_style(&mut self, base_style: Option<Style>) {
        self.generation += 1;
        self.base_style = base_style;
    }

    /// A counter bumped by every mutation of the group.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Rendering through a group interprets tag markup.
///
/// - [`render`](Styler::render) starts from plain `source` and uses replace semantics.
/// - [`add_to`](Styler::add_to) layers the base style and tag styles over `target`.
/// - [`set_to`](Styler::set_to) replaces the attributes of `target` with them.
impl Styler for StyleGroup {
    /// The ordered merge of every named style.
    fn attributes(&self) -> Cow<'_, AttributeMap> {
        let merged = merge_styles(self.styles.values());
        Cow::Owned(merged.attributes().clone())
    }

    fn render(&self, source: &str, range: Option<Range<usize>>) -> Result<StyledString, Error> {
        markup::render(self, source, range)
    }

    fn add_to(&self, target: &mut StyledString, range: Option<Range<usize>>) -> Result<(), Error> {
        markup::apply(self, target, range, RenderMode::Add)
    }

    fn set_to(&self, target: &mut StyledString, range: Option<Range<usize>>) -> Result<(), Error> {
        markup::apply(self, target, range, RenderMode::Set)
    }
}
