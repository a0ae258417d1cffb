// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attributed Text is a mutable text buffer whose bytes are covered by attribute runs.
//!
//! Every byte of the text belongs to exactly one run, and each run carries an insertion-ordered
//! [`Attributes`] map. Attributes can be replaced ([`AttributedText::set_attributes`]), layered
//! ([`AttributedText::add_attributes`]) or removed key by key, and the text itself can be edited
//! with [`AttributedText::replace_range`], which keeps the runs aligned with the edited text.
//!
//! ## Indices
//!
//! All ranges are **byte indices** into UTF-8 text and must lie on character boundaries.
//! Operations validate their ranges before touching the buffer, so a failed call leaves the
//! text and its attributes unchanged.
//!
//! ## Example
//!
//! ```
//! use attributed_text::{AttributedText, Attributes};
//!
//! let mut text = AttributedText::new(String::from("Hello, <b>World</b>!"));
//! text.replace_range(15..19, "").unwrap();
//! text.replace_range(7..10, "").unwrap();
//! text.set_attributes(7..12, &Attributes::new().with("weight", 700)).unwrap();
//!
//! assert_eq!(text.as_str(), "Hello, World!");
//! assert_eq!(text.attribute_at(&"weight", 7), Some(&700));
//! assert_eq!(text.attribute_at(&"weight", 12), None);
//! ```
//!
//! ## Features
//!
//! - `std` (enabled by default): Enables `std` support in the map implementation.
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
#![no_std]

extern crate alloc;

mod attributed_text;
mod attributes;
mod error;
mod text_range;
mod text_storage;

pub use crate::attributed_text::{AttributedText, Runs};
pub use crate::attributes::Attributes;
pub use crate::error::{BoundaryInfo, Endpoint, Error, ErrorKind};
pub use crate::text_range::TextRange;
pub use crate::text_storage::{TextStorage, TextStorageMut};
