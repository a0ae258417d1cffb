// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;
use std::borrow::Cow;

use regex::{Regex, RegexBuilder};

use crate::markup::RenderMode;
use crate::{AttributeMap, Error, Style, StyledString, Styler, TextRange};

/// Options for the pattern of a [`RegexStyle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegexOptions {
    /// Match letters regardless of case. On by default.
    pub case_insensitive: bool,
    /// `^` and `$` match at line boundaries.
    pub multi_line: bool,
    /// `.` also matches `\n`.
    pub dot_matches_new_line: bool,
}

impl Default for RegexOptions {
    fn default() -> Self {
        Self {
            case_insensitive: true,
            multi_line: false,
            dot_matches_new_line: false,
        }
    }
}

/// Applies a style to every match of a regular expression.
///
/// ## Example
///
/// ```
/// use tag_styles::{AttributeKey, RegexStyle, Style, Styler};
///
/// let mentions = RegexStyle::new(r"@\w+", Style::new().underline(true)).unwrap();
/// let text = mentions.render("ping @Ada and @bob", None).unwrap();
/// assert!(text.attribute_at(&AttributeKey::Underline, 5).is_some());
/// assert!(text.attribute_at(&AttributeKey::Underline, 10).is_none());
/// ```
#[derive(Clone, Debug)]
pub struct RegexStyle {
    regex: Regex,
    base_style: Option<Style>,
    style: Style,
}

impl RegexStyle {
    /// Compiles `pattern` with the default (case-insensitive) options.
    pub fn new(pattern: &str, style: Style) -> Result<Self, regex::Error> {
        Self::with_options(pattern, RegexOptions::default(), style)
    }

    /// Compiles `pattern` with explicit options.
    pub fn with_options(
        pattern: &str,
        options: RegexOptions,
        style: Style,
    ) -> Result<Self, regex::Error> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(options.case_insensitive)
            .multi_line(options.multi_line)
            .dot_matches_new_line(options.dot_matches_new_line)
            .build()?;
        Ok(Self {
            regex,
            base_style: None,
            style,
        })
    }

    /// Sets a style applied to the operating range before any match.
    #[must_use]
    pub fn with_base_style(mut self, base_style: Style) -> Self {
        self.base_style = Some(base_style);
        self
    }

    /// The compiled pattern.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// The style applied before matching, if any.
    pub fn base_style(&self) -> Option<&Style> {
        self.base_style.as_ref()
    }

    fn apply(
        &self,
        target: &mut StyledString,
        range: Option<Range<usize>>,
        mode: RenderMode,
    ) -> Result<(), Error> {
        let range = TextRange::new_or_full(target.text(), range)?;
        if let Some(base) = &self.base_style {
            apply_attributes(target, range.as_range(), base, mode)?;
        }
        self.apply_matches(target, range, mode)
    }

    fn apply_matches(
        &self,
        target: &mut StyledString,
        range: TextRange,
        mode: RenderMode,
    ) -> Result<(), Error> {
        let offset = range.start();
        let matches: Vec<Range<usize>> = self
            .regex
            .find_iter(&target.as_str()[range.as_range()])
            .map(|found| found.start() + offset..found.end() + offset)
            .collect();
        log::trace!("{} matches for {:?}", matches.len(), self.regex.as_str());
        for found in matches {
            apply_attributes(target, found, &self.style, mode)?;
        }
        Ok(())
    }
}

fn apply_attributes(
    target: &mut StyledString,
    range: Range<usize>,
    style: &Style,
    mode: RenderMode,
) -> Result<(), Error> {
    match mode {
        RenderMode::Set => target.set_attributes(range, style.attributes()),
        RenderMode::Add => target.add_attributes(range, style.attributes()),
    }
}

impl Styler for RegexStyle {
    fn attributes(&self) -> Cow<'_, AttributeMap> {
        Cow::Borrowed(self.style.attributes())
    }

    /// The base style covers all of `source`; only matches inside `range` are styled.
    fn render(&self, source: &str, range: Option<Range<usize>>) -> Result<StyledString, Error> {
        let mut text = StyledString::new(source.to_owned());
        let range = TextRange::new_or_full(text.text(), range)?;
        if let Some(base) = &self.base_style {
            let whole = 0..text.len();
            apply_attributes(&mut text, whole, base, RenderMode::Set)?;
        }
        self.apply_matches(&mut text, range, RenderMode::Set)?;
        Ok(text)
    }

    fn add_to(&self, target: &mut StyledString, range: Option<Range<usize>>) -> Result<(), Error> {
        self.apply(target, range, RenderMode::Add)
    }

    fn set_to(&self, target: &mut StyledString, range: Option<Range<usize>>) -> Result<(), Error> {
        self.apply(target, range, RenderMode::Set)
    }
}
