// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use tag_styles::{AttributeKey, Color, Style, StyleGroup, StyledString};

pub(crate) const RED: Color = Color::from_rgb(0xcc, 0x33, 0x33);

/// The styles used by the demo application: a light base font, large bold text and red text
/// derived from the base.
pub(crate) fn shared_group() -> StyleGroup {
    let normal = Style::new().font_family("Helvetica-Light").font_size(15.0);
    let bold = Style::new().font_family("Helvetica-Bold").font_size(20.0);
    let red = normal.by_adding(&Style::new().foreground(RED).font_weight(700));
    StyleGroup::from_styles(Some(normal), [("bold", bold), ("red", red)])
}

/// Byte ranges of the runs carrying `key`.
pub(crate) fn ranges_with(text: &StyledString, key: &AttributeKey) -> Vec<Range<usize>> {
    text.runs()
        .filter(|(_, attrs)| attrs.contains_key(key))
        .map(|(range, _)| range)
        .collect()
}

/// The visible text of each run carrying `key`.
pub(crate) fn spans_with<'a>(text: &'a StyledString, key: &AttributeKey) -> Vec<&'a str> {
    ranges_with(text, key)
        .into_iter()
        .map(|range| &text.as_str()[range])
        .collect()
}
