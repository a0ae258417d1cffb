// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;
use std::sync::OnceLock;

use regex::Regex;

/// The tag grammar: an optional `/`, a letter, then anything but angle brackets.
pub const TAG_PATTERN: &str = r"</?[a-zA-Z][^<>]*>";

fn tag_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(TAG_PATTERN).unwrap_or_else(|e| panic!("invalid tag pattern: {e}"))
    })
}

/// One opening or closing tag found in a text buffer.
///
/// The range is live: while tags are being stripped it is kept in sync with the buffer, so it
/// only equals the scanned position until the first removal before it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagOccurrence {
    raw: String,
    pub(super) range: Range<usize>,
    is_opening: bool,
    name: String,
    params: Option<String>,
    pub(super) closer: Option<usize>,
}

impl TagOccurrence {
    /// Classifies the raw tag text found at `range`.
    pub fn new(raw: &str, range: Range<usize>) -> Self {
        let is_opening = !raw.starts_with("</");
        let prefix = if is_opening { "<" } else { "</" };
        let inner = raw.strip_prefix(prefix).unwrap_or(raw);
        let inner = inner.strip_suffix('>').unwrap_or(inner).trim();
        let name = inner.split_whitespace().next().unwrap_or_default();
        let params = if is_opening {
            Some(inner[name.len()..].trim()).filter(|params| !params.is_empty())
        } else {
            None
        };
        Self {
            raw: raw.to_owned(),
            range,
            is_opening,
            name: name.to_owned(),
            params: params.map(str::to_owned),
            closer: None,
        }
    }

    /// The exact tag text, including the angle brackets.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The current byte range of the tag in the buffer.
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// Returns `true` unless the tag starts with `</`.
    pub fn is_opening(&self) -> bool {
        self.is_opening
    }

    /// The first whitespace-delimited token of the tag.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whatever follows the name in an opening tag, if anything.
    ///
    /// Style lookup ignores this.
    pub fn params(&self) -> Option<&str> {
        self.params.as_deref()
    }

    /// Index of the closing tag paired with this opening tag.
    pub fn closer(&self) -> Option<usize> {
        self.closer
    }
}

/// Finds every tag in `text[range]`, in order of position.
///
/// Ranges of the returned occurrences are relative to the whole of `text`. `range` must be a
/// valid char-boundary range of `text`.
pub fn scan_tags(text: &str, range: Range<usize>) -> Vec<TagOccurrence> {
    let offset = range.start;
    tag_regex()
        .find_iter(&text[range])
        .map(|found| {
            let range = found.start() + offset..found.end() + offset;
            log::trace!("found tag {:?} at {range:?}", found.as_str());
            TagOccurrence::new(found.as_str(), range)
        })
        .collect()
}
