// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render strings containing simple HTML-like inline tags into [`attributed_text`] buffers.
//!
//! - [`Style`] is an immutable set of attributes built with chained setters.
//! - [`StyleGroup`] maps tag names to styles, plus an optional base style. Rendering through a
//!   group strips every tag from the text and applies the named style to the text between each
//!   matched opening and closing tag.
//! - [`RegexStyle`] applies a style to every match of a regular expression.
//! - [`StyleRegistry`] resolves style names to stylers, and [`StyleBindings`] remembers which
//!   named style a UI widget displays its text with.
//!
//! All of them implement [`Styler`], which provides the `render` / `add_to` / `set_to` /
//! `remove_from` entry points.
//!
//! ## Example
//!
//! ```
//! use tag_styles::{AttributeKey, AttributeValue, Color, Style, StyleGroup, Styler};
//!
//! let red = Color::from_rgb(0xcc, 0x33, 0x33);
//! let group = StyleGroup::from_styles(None, [("red", Style::new().foreground(red))]);
//!
//! let text = group.render("Hello, <red>World</red>!", None).unwrap();
//! assert_eq!(text.as_str(), "Hello, World!");
//! assert_eq!(
//!     text.attribute_at(&AttributeKey::Foreground, 7),
//!     Some(&AttributeValue::Color(red))
//! );
//! assert_eq!(text.attribute_at(&AttributeKey::Foreground, 12), None);
//! ```
//!
//! ## Markup
//!
//! Tags match `</?[a-zA-Z][^<>]*>`. The first whitespace-delimited token is the tag name; a
//! closing tag pairs with the nearest preceding unmatched opening tag of the same name. Tags
//! that are unmatched or whose name is not registered are stripped without styling. Malformed
//! markup never produces an error; only an out-of-range operating range does.
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod markup;

mod attribute;
mod binding;
mod group;
mod regex_style;
mod registry;
mod style;
mod styler;


pub use attribute::{AttributeKey, AttributeValue, Color, ParseColorError};
pub use binding::StyleBindings;
pub use group::StyleGroup;
pub use markup::RenderMode;
pub use regex_style::{RegexOptions, RegexStyle};
pub use registry::{DeferredStyle, StyleRegistry};
pub use style::{Style, merge_styles};
pub use styler::Styler;

pub use attributed_text::{Error, ErrorKind, TextRange};

/// Attribute map used by styles and styled strings.
pub type AttributeMap = attributed_text::Attributes<AttributeKey, AttributeValue>;

/// The attributed text produced and edited by rendering.
pub type StyledString = attributed_text::AttributedText<String, AttributeKey, AttributeValue>;
