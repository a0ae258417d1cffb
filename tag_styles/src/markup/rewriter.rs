// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use super::{RenderMode, TagOccurrence};
use crate::{Error, StyleGroup, StyledString};

/// Strips every tag from `target` and styles the text between matched, registered pairs.
///
/// Tags are processed in scan order. Whenever a tag is removed, every later occurrence moves
/// back by the removed length, so `tags` must be the full scan of `target` with pairs already
/// linked by [`match_tags`](super::match_tags).
pub(super) fn rewrite(
    target: &mut StyledString,
    tags: &mut [TagOccurrence],
    group: &StyleGroup,
    mode: RenderMode,
) -> Result<(), Error> {
    let mut removed = vec![false; tags.len()];
    for ix in 0..tags.len() {
        if removed[ix] {
            continue;
        }
        remove_tag(target, tags, ix)?;
        removed[ix] = true;

        let tag = &tags[ix];
        if !tag.is_opening() {
            continue;
        }
        let Some(style) = group.lookup(tag.name()) else {
            log::debug!("no style named {:?}; stripping {:?}", tag.name(), tag.raw());
            continue;
        };
        let Some(close_ix) = tag.closer else {
            log::debug!("opening tag {:?} is never closed", tag.raw());
            continue;
        };

        remove_tag(target, tags, close_ix)?;
        removed[close_ix] = true;

        let span = tags[ix].range.start..tags[close_ix].range.start;
        log::trace!("applying <{}> to {span:?}", tags[ix].name());
        match mode {
            RenderMode::Set => target.set_attributes(span, style.attributes())?,
            RenderMode::Add => target.add_attributes(span, style.attributes())?,
        }
    }
    Ok(())
}

fn remove_tag(
    target: &mut StyledString,
    tags: &mut [TagOccurrence],
    ix: usize,
) -> Result<(), Error> {
    let range = tags[ix].range.clone();
    let len = range.len();
    target.replace_range(range, "")?;
    for later in &mut tags[ix + 1..] {
        later.range.start -= len;
        later.range.end -= len;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::remove_tag;
    use crate::StyledString;
    use crate::markup::scan_tags;

    #[test]
    fn removal_shifts_only_later_tags() {
        let source = "<a>xy</a><b>z</b>";
        let mut target = StyledString::new(source.to_owned());
        let mut tags = scan_tags(source, 0..source.len());

        remove_tag(&mut target, &mut tags, 1).unwrap();
        assert_eq!(target.as_str(), "<a>xy<b>z</b>");
        assert_eq!(tags[0].range(), 0..3);
        assert_eq!(tags[1].range(), 5..9);
        assert_eq!(tags[2].range(), 5..8);
        assert_eq!(tags[3].range(), 9..13);

        remove_tag(&mut target, &mut tags, 0).unwrap();
        assert_eq!(target.as_str(), "xy<b>z</b>");
        assert_eq!(&target.as_str()[tags[3].range()], "</b>");
    }
}
