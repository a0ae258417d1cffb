// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use crate::{Endpoint, Error, TextStorage};

/// A validated byte range into a UTF-8 text buffer.
///
/// Holding a `TextRange` means:
///
/// - `start <= end`
/// - `start` and `end` are within the text bounds
/// - `start` and `end` lie on UTF-8 codepoint boundaries
///
/// A `TextRange` does not remember which buffer it was validated against, and edits to that
/// buffer can invalidate it. Revalidate after mutating the text.
///
/// ## Example
///
/// ```
/// use attributed_text::TextRange;
///
/// let range = TextRange::new(&"Hello!", 0..5).unwrap();
/// assert_eq!(range.len(), 5);
/// assert!(TextRange::new(&"Hello!", 0..7).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextRange {
    start: usize,
    end: usize,
}

impl TextRange {
    /// Returns a validated `TextRange` for the provided text.
    #[inline]
    pub fn new<T: TextStorage + ?Sized>(text: &T, range: Range<usize>) -> Result<Self, Error> {
        validate_range(text, &range)?;
        Ok(Self {
            start: range.start,
            end: range.end,
        })
    }

    /// The range covering all of `text`.
    #[inline]
    pub fn full<T: TextStorage + ?Sized>(text: &T) -> Self {
        Self {
            start: 0,
            end: text.len(),
        }
    }

    /// Validates `range` when present, otherwise covers all of `text`.
    #[inline]
    pub fn new_or_full<T: TextStorage + ?Sized>(
        text: &T,
        range: Option<Range<usize>>,
    ) -> Result<Self, Error> {
        match range {
            Some(range) => Self::new(text, range),
            None => Ok(Self::full(text)),
        }
    }

    /// The start byte offset.
    #[must_use]
    #[inline]
    pub const fn start(self) -> usize {
        self.start
    }

    /// The end byte offset (exclusive).
    #[must_use]
    #[inline]
    pub const fn end(self) -> usize {
        self.end
    }

    /// The number of bytes covered.
    #[must_use]
    #[inline]
    pub const fn len(self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if the range covers no bytes.
    #[must_use]
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// Returns this range as a `Range<usize>`.
    #[must_use]
    #[inline]
    pub fn as_range(self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<TextRange> for Range<usize> {
    #[inline]
    fn from(value: TextRange) -> Self {
        value.as_range()
    }
}

pub(crate) fn validate_range<T: TextStorage + ?Sized>(
    text: &T,
    range: &Range<usize>,
) -> Result<(), Error> {
    let len = text.len();
    if range.start > range.end {
        return Err(Error::invalid_range(range, len));
    }
    if range.end > len {
        return Err(Error::invalid_bounds(range, len));
    }
    if !text.is_char_boundary(range.start) {
        return Err(Error::not_on_char_boundary(text, range, Endpoint::Start));
    }
    if !text.is_char_boundary(range.end) {
        return Err(Error::not_on_char_boundary(text, range, Endpoint::End));
    }
    Ok(())
}
