// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate contains the integration test suite for `tag_styles`.
//!
//! - We do not use the default Rust test harness, but instead use this `mod.rs` file as the
//!   entry point to run all other tests, so that helpers in `util` can be shared.
//! - Put tests about tag rendering into `markup.rs` and tests about resolving named styles
//!   (registries, widget bindings, sharing between threads) into `registry.rs`.
//! - Start test names with their topic, e.g. `markup_nested_tags`.

#![allow(missing_docs, reason = "we don't need docs for testing")]

mod util;
