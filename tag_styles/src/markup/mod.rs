// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tag markup rendering.
//!
//! Rendering runs in three passes over the buffer:
//!
//! 1. [`scan_tags`] finds every tag in the operating range.
//! 2. [`match_tags`] links closing tags to their openers.
//! 3. The rewriter strips the tags left to right and applies the style registered for each
//!    complete pair.
//!
//! Most callers go through [`Styler`](crate::Styler) on a [`StyleGroup`] instead of calling
//! [`apply`] directly.

use core::ops::Range;

use crate::{Error, StyleGroup, StyledString, TextRange};

mod matcher;
mod rewriter;
mod scanner;

pub use matcher::match_tags;
pub use scanner::{TAG_PATTERN, TagOccurrence, scan_tags};

/// How styles are combined with attributes already present on the text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderMode {
    /// Replace existing attributes.
    Set,
    /// Layer over existing attributes; new values win on conflicting keys.
    Add,
}

/// Renders `group` onto `target` in place.
///
/// The base style of the group, if any, is applied to the whole text first. Tags are then
/// looked for inside `range` (the whole text when `None`) and stripped, styling each matched
/// pair whose name is registered. `mode` governs both the base style and the tag styles.
///
/// Fails only when `range` is not a valid range of `target`, in which case `target` is left
/// untouched.
pub fn apply(
    group: &StyleGroup,
    target: &mut StyledString,
    range: Option<Range<usize>>,
    mode: RenderMode,
) -> Result<(), Error> {
    let range = TextRange::new_or_full(target.text(), range)?;

    if let Some(base) = group.base_style() {
        let whole = 0..target.len();
        match mode {
            RenderMode::Set => target.set_attributes(whole, base.attributes())?,
            RenderMode::Add => target.add_attributes(whole, base.attributes())?,
        }
    }

    let mut tags = scan_tags(target.as_str(), range.as_range());
    if tags.is_empty() {
        return Ok(());
    }
    match_tags(&mut tags);
    log::trace!("rewriting {} tags in {:?}", tags.len(), range.as_range());
    rewriter::rewrite(target, &mut tags, group, mode)
}

/// Renders `source` into a new styled string using replace semantics.
pub fn render(
    group: &StyleGroup,
    source: &str,
    range: Option<Range<usize>>,
) -> Result<StyledString, Error> {
    let mut text = StyledString::new(source.to_owned());
    apply(group, &mut text, range, RenderMode::Set)?;
    Ok(text)
}
