// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt::Debug;
use core::ops::Range;
use std::borrow::Cow;

use crate::{AttributeMap, Error, StyledString, TextRange};

/// Something that can style text: a single [`Style`](crate::Style), a
/// [`StyleGroup`](crate::StyleGroup), a [`RegexStyle`](crate::RegexStyle), ...
///
/// `range` is a byte range into the text; `None` means the whole text. Ranges are validated
/// before anything is modified, so an `Err` leaves the target untouched.
///
/// The provided methods apply [`attributes`](Self::attributes) uniformly to the range.
/// Implementors that interpret the text (tags, patterns) override them.
pub trait Styler: Debug + Send + Sync {
    /// The attributes this styler applies.
    fn attributes(&self) -> Cow<'_, AttributeMap>;

    /// Creates a new styled string from `source`, replacing attributes in `range`.
    fn render(&self, source: &str, range: Option<Range<usize>>) -> Result<StyledString, Error> {
        let mut text = StyledString::new(source.to_owned());
        self.set_to(&mut text, range)?;
        Ok(text)
    }

    /// Layers this styler's attributes over the existing ones in `range`.
    fn add_to(&self, target: &mut StyledString, range: Option<Range<usize>>) -> Result<(), Error> {
        let range = TextRange::new_or_full(target.text(), range)?;
        target.add_attributes(range.as_range(), &self.attributes())
    }

    /// Replaces the existing attributes in `range` with this styler's attributes.
    fn set_to(&self, target: &mut StyledString, range: Option<Range<usize>>) -> Result<(), Error> {
        let range = TextRange::new_or_full(target.text(), range)?;
        target.set_attributes(range.as_range(), &self.attributes())
    }

    /// Removes every key this styler sets from `range`.
    fn remove_from(
        &self,
        target: &mut StyledString,
        range: Option<Range<usize>>,
    ) -> Result<(), Error> {
        let range = TextRange::new_or_full(target.text(), range)?;
        let attributes = self.attributes();
        target.remove_attributes(range.as_range(), attributes.keys())
    }
}
