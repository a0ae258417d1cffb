// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::hash::Hash;

use hashbrown::HashMap;

use crate::{Error, StyleRegistry, StyledString};

/// Remembers which named style each widget renders its text with.
///
/// `W` is whatever identifies a widget in the UI layer. The table only stores names; styles are
/// resolved through a [`StyleRegistry`] at render time, so re-registering a name restyles every
/// widget bound to it on the next render.
///
/// ## Example
///
/// ```
/// use tag_styles::{Style, StyleBindings, StyleGroup, StyleRegistry};
///
/// let registry = StyleRegistry::new();
/// registry.register("title", StyleGroup::from_styles(None, [("em", Style::new().italic(true))]));
///
/// let mut bindings = StyleBindings::new();
/// bindings.bind(7_u32, "title");
///
/// let text = bindings.render_for(&7, "<em>Hi</em>", &registry).unwrap();
/// assert_eq!(text.unwrap().as_str(), "Hi");
/// assert!(bindings.render_for(&8, "plain", &registry).unwrap().is_none());
/// ```
#[derive(Clone, Debug)]
pub struct StyleBindings<W> {
    names: HashMap<W, String>,
}

impl<W> Default for StyleBindings<W> {
    fn default() -> Self {
        Self {
            names: HashMap::default(),
        }
    }
}

impl<W: Hash + Eq> StyleBindings<W> {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `widget` to the style `name`, returning the previous name.
    pub fn bind(&mut self, widget: W, name: impl Into<String>) -> Option<String> {
        self.names.insert(widget, name.into())
    }

    /// Forgets the binding of `widget`.
    pub fn unbind(&mut self, widget: &W) -> Option<String> {
        self.names.remove(widget)
    }

    /// The style name bound to `widget`.
    pub fn style_name(&self, widget: &W) -> Option<&str> {
        self.names.get(widget).map(String::as_str)
    }

    /// The number of bound widgets.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if no widget is bound.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Renders `text` with the style bound to `widget`.
    ///
    /// Returns `Ok(None)` when the widget is unbound or its style name does not resolve, in
    /// which case the widget should show `text` as is.
    pub fn render_for(
        &self,
        widget: &W,
        text: &str,
        registry: &StyleRegistry,
    ) -> Result<Option<StyledString>, Error> {
        let Some(name) = self.style_name(widget) else {
            return Ok(None);
        };
        let Some(style) = registry.get(name) else {
            log::debug!("widget bound to unregistered style {name:?}");
            return Ok(None);
        };
        style.render(text, None).map(Some)
    }
}
