// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use super::TagOccurrence;

/// Pairs each closing tag with the nearest preceding unmatched opening tag of the same name.
///
/// Crossing tags of the same name therefore pair last-in first-out. Closing tags with no
/// candidate opener stay unpaired, as do openers that are never closed.
pub fn match_tags(tags: &mut [TagOccurrence]) {
    for ix in 0..tags.len() {
        if tags[ix].is_opening() {
            continue;
        }
        let opener = (0..ix).rev().find(|&candidate| {
            let open = &tags[candidate];
            open.is_opening() && open.closer.is_none() && open.name() == tags[ix].name()
        });
        match opener {
            Some(open_ix) => {
                log::trace!("paired <{}> #{open_ix} with closer #{ix}", tags[ix].name());
                tags[open_ix].closer = Some(ix);
            }
            None => log::debug!("closing tag {:?} has no opener", tags[ix].raw()),
        }
    }
}
