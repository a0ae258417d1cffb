// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::ops::Range;

use crate::TextStorage;

/// Error returned when a caller-supplied range cannot be used on a text buffer.
///
/// Carries a non-exhaustive [`ErrorKind`], the offending range, the text length at the time of
/// the call and, for boundary failures, the UTF-8 character that was split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    range: Range<usize>,
    len: usize,
    boundary: Option<BoundaryInfo>,
}

#[expect(
    clippy::len_without_is_empty,
    reason = "`Error::len` reports the text length at failure; `is_empty` would be meaningless."
)]
impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The range provided by the caller.
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// The start byte index of the range provided by the caller.
    pub fn start(&self) -> usize {
        self.range.start
    }

    /// The end byte index of the range provided by the caller.
    pub fn end(&self) -> usize {
        self.range.end
    }

    /// The length in bytes of the text when the error occurred.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Details for [`ErrorKind::NotOnCharBoundary`] errors.
    pub fn boundary(&self) -> Option<BoundaryInfo> {
        self.boundary
    }

    fn new(kind: ErrorKind, range: &Range<usize>, len: usize) -> Self {
        Self {
            kind,
            range: range.clone(),
            len,
            boundary: None,
        }
    }

    pub(crate) fn invalid_bounds(range: &Range<usize>, len: usize) -> Self {
        Self::new(ErrorKind::InvalidBounds, range, len)
    }

    pub(crate) fn invalid_range(range: &Range<usize>, len: usize) -> Self {
        Self::new(ErrorKind::InvalidRange, range, len)
    }

    pub(crate) fn not_on_char_boundary<T: TextStorage + ?Sized>(
        text: &T,
        range: &Range<usize>,
        which: Endpoint,
    ) -> Self {
        let index = match which {
            Endpoint::Start => range.start,
            Endpoint::End => range.end,
        };
        let (char_start, char_end) = enclosing_char_span(text, index);
        Self {
            boundary: Some(BoundaryInfo {
                which,
                index,
                char_start,
                char_end,
            }),
            ..Self::new(ErrorKind::NotOnCharBoundary, range, text.len())
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Range { start, end } = self.range;
        match (self.kind, self.boundary) {
            (ErrorKind::InvalidBounds, _) => {
                write!(f, "range {start}..{end} out of bounds for len {}", self.len)
            }
            (ErrorKind::InvalidRange, _) => {
                write!(f, "invalid range {start}..{end}: start > end")
            }
            (ErrorKind::NotOnCharBoundary, Some(b)) => {
                let which = match b.which {
                    Endpoint::Start => "start",
                    Endpoint::End => "end",
                };
                write!(
                    f,
                    "range {start}..{end}: {which} index {} not on UTF-8 boundary (char {}..{})",
                    b.index, b.char_start, b.char_end
                )
            }
            (ErrorKind::NotOnCharBoundary, None) => {
                write!(f, "range {start}..{end} not on UTF-8 boundary")
            }
        }
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an [`Error`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The range reaches past the end of the text.
    InvalidBounds,

    /// The range had `start > end`.
    InvalidRange,

    /// Either `start` or `end` splits a UTF-8 character.
    NotOnCharBoundary,
}

/// Identifies which endpoint of a range failed boundary validation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    /// The `start` endpoint of the range.
    Start,

    /// The `end` endpoint of the range.
    End,
}

/// Details about an index that was not on a UTF-8 character boundary.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BoundaryInfo {
    /// Which endpoint was invalid.
    pub which: Endpoint,

    /// The offending byte index.
    pub index: usize,

    /// The start byte index of the enclosing UTF-8 codepoint.
    pub char_start: usize,

    /// The end byte index (exclusive) of the enclosing UTF-8 codepoint.
    pub char_end: usize,
}

/// Finds the codepoint that contains `index`.
///
/// A UTF-8 codepoint spans at most four bytes, so both searches stop after three steps.
fn enclosing_char_span<T: TextStorage + ?Sized>(text: &T, index: usize) -> (usize, usize) {
    if index > text.len() || text.is_char_boundary(index) {
        return (index, index);
    }
    let start = (index.saturating_sub(3)..index)
        .rev()
        .find(|&i| text.is_char_boundary(i))
        .unwrap_or(0);
    let end = (index + 1..=(index + 3).min(text.len()))
        .find(|&i| text.is_char_boundary(i))
        .unwrap_or(text.len());
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::{Endpoint, Error, ErrorKind, enclosing_char_span};
    use alloc::format;

    #[test]
    fn display_mentions_range_and_len() {
        let err = Error::invalid_bounds(&(2..9), 4);
        assert_eq!(err.kind(), ErrorKind::InvalidBounds);
        assert_eq!(format!("{err}"), "range 2..9 out of bounds for len 4");
    }

    #[test]
    fn boundary_error_reports_enclosing_char() {
        // "€" is three bytes long.
        let text = "a€b";
        let err = Error::not_on_char_boundary(&text, &(0..2), Endpoint::End);
        let b = err.boundary().expect("boundary info");
        assert_eq!((b.index, b.char_start, b.char_end), (2, 1, 4));
        assert_eq!(err.len(), 5);
        let msg = format!("{err}");
        assert!(msg.contains("end index 2"), "{msg}");
        assert!(msg.contains("char 1..4"), "{msg}");
    }

    #[test]
    fn char_span_on_boundary_is_empty() {
        assert_eq!(enclosing_char_span(&"abc", 1), (1, 1));
        assert_eq!(enclosing_char_span(&"abc", 7), (7, 7));
    }
}
