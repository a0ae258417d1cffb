// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::ops::Range;
use std::sync::Arc;

use hashbrown::HashMap;
use parking_lot::RwLock;

use crate::markup::RenderMode;
use crate::{Error, StyledString, Styler, merge_styles};

/// A style produced on demand by a [`StyleRegistry`] provider.
#[derive(Clone, Debug)]
pub struct DeferredStyle {
    /// The produced style.
    pub style: Arc<dyn Styler>,
    /// Keep the style registered under the requested name.
    pub cache: bool,
}

type Provider = Box<dyn Fn(&str) -> Option<DeferredStyle> + Send + Sync>;

/// Named stylers shared by the parts of an application that display text.
///
/// The registry is an ordinary value: create one during setup and hand references to whatever
/// needs to resolve style names. Lookups take a shared lock and registration an exclusive one,
/// so a registry can be shared between threads.
///
/// ## Example
///
/// ```
/// use tag_styles::{Style, StyleGroup, StyleRegistry};
///
/// let registry = StyleRegistry::new();
/// registry.register("body", StyleGroup::from_styles(None, [("b", Style::new().font_weight(700))]));
///
/// let style = registry.get("body").unwrap();
/// let text = style.render("<b>Hi</b>", None).unwrap();
/// assert_eq!(text.as_str(), "Hi");
/// assert!(registry.get("missing").is_none());
/// ```
#[derive(Default)]
pub struct StyleRegistry {
    styles: RwLock<HashMap<String, Arc<dyn Styler>>>,
    provider: Option<Provider>,
}

impl StyleRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry that asks `provider` for styles it does not know yet.
    ///
    /// A provided style is registered when its [`DeferredStyle::cache`] flag is set, so the
    /// provider is only consulted once for that name.
    pub fn with_provider<F>(provider: F) -> Self
    where
        F: Fn(&str) -> Option<DeferredStyle> + Send + Sync + 'static,
    {
        Self {
            styles: RwLock::default(),
            provider: Some(Box::new(provider)),
        }
    }

    /// Registers `style` under `name`, returning the styler it replaces.
    pub fn register(
        &self,
        name: impl Into<String>,
        style: impl Styler + 'static,
    ) -> Option<Arc<dyn Styler>> {
        self.register_shared(name, Arc::new(style))
    }

    /// Registers an already shared styler under `name`.
    pub fn register_shared(
        &self,
        name: impl Into<String>,
        style: Arc<dyn Styler>,
    ) -> Option<Arc<dyn Styler>> {
        self.styles.write().insert(name.into(), style)
    }

    /// Removes the styler registered under `name`.
    pub fn unregister(&self, name: &str) -> Option<Arc<dyn Styler>> {
        self.styles.write().remove(name)
    }

    /// Returns `true` if a styler is registered under `name`.
    ///
    /// The provider is not consulted.
    pub fn contains(&self, name: &str) -> bool {
        self.styles.read().contains_key(name)
    }

    /// The number of registered stylers.
    pub fn len(&self) -> usize {
        self.styles.read().len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.styles.read().is_empty()
    }

    /// Resolves `name`, falling back to the provider.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Styler>> {
        if let Some(style) = self.styles.read().get(name) {
            return Some(Arc::clone(style));
        }
        let deferred = (self.provider.as_ref()?)(name)?;
        log::debug!("provider supplied style {name:?} (cache: {})", deferred.cache);
        if !deferred.cache {
            return Some(deferred.style);
        }
        // A registration made while the provider ran takes precedence.
        let mut styles = self.styles.write();
        let stored = styles
            .entry(name.to_owned())
            .or_insert_with(|| deferred.style);
        Some(Arc::clone(stored))
    }

    /// Resolves each of `names`, skipping the ones that cannot be found.
    pub fn get_many<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> Vec<Arc<dyn Styler>> {
        names.into_iter().filter_map(|name| self.get(name)).collect()
    }

    /// Applies the styler named `name` to `target`.
    ///
    /// Returns `Ok(false)` and leaves `target` unaltered when the name cannot be resolved.
    pub fn apply_named(
        &self,
        target: &mut StyledString,
        name: &str,
        range: Option<Range<usize>>,
        mode: RenderMode,
    ) -> Result<bool, Error> {
        let Some(style) = self.get(name) else {
            log::debug!("no style registered as {name:?}");
            return Ok(false);
        };
        match mode {
            RenderMode::Set => style.set_to(target, range)?,
            RenderMode::Add => style.add_to(target, range)?,
        }
        Ok(true)
    }

    /// Merges the attributes of the stylers named in `names`, in order, and applies the result.
    ///
    /// Unknown names are skipped. Returns `Ok(false)` without touching `target` when none of
    /// them resolve.
    pub fn apply_merged<'a>(
        &self,
        target: &mut StyledString,
        names: impl IntoIterator<Item = &'a str>,
        range: Option<Range<usize>>,
        mode: RenderMode,
    ) -> Result<bool, Error> {
        let styles = self.get_many(names);
        if styles.is_empty() {
            return Ok(false);
        }
        let merged = merge_styles(styles.iter().map(|style| style.as_ref()));
        match mode {
            RenderMode::Set => merged.set_to(target, range)?,
            RenderMode::Add => merged.add_to(target, range)?,
        }
        Ok(true)
    }
}

impl fmt::Debug for StyleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styles = self.styles.read();
        f.debug_struct("StyleRegistry")
            .field("styles", &*styles)
            .field("provider", &self.provider.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{DeferredStyle, StyleRegistry};
    use crate::{AttributeKey, RenderMode, Style, StyledString};
    use parking_lot::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, mpsc};
    use std::thread;

    #[test]
    fn register_and_unregister() {
        let registry = StyleRegistry::new();
        assert!(registry.register("a", Style::new()).is_none());
        assert!(registry.register("a", Style::new().italic(true)).is_some());
        assert_eq!(registry.len(), 1);
        assert!(registry.unregister("a").is_some());
        assert!(registry.is_empty());
    }

    #[test]
    fn provider_results_are_cached_on_request() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let registry = StyleRegistry::with_provider(move |name| {
            counter.fetch_add(1, Ordering::SeqCst);
            (name != "unknown").then(|| DeferredStyle {
                style: Arc::new(Style::new().underline(true)),
                cache: name == "cached",
            })
        });

        assert!(registry.get("cached").is_some());
        assert!(registry.get("cached").is_some());
        assert!(registry.contains("cached"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        assert!(registry.get("transient").is_some());
        assert!(registry.get("transient").is_some());
        assert!(!registry.contains("transient"));
        assert_eq!(calls.load(Ordering::SeqCst), 3);

        assert!(registry.get("unknown").is_none());
    }

    #[test]
    fn registration_during_provider_call_is_kept() {
        let (started_tx, started_rx) = mpsc::channel::<()>();
        let (release_tx, release_rx) = mpsc::channel::<()>();
        let release_rx = Mutex::new(release_rx);
        let registry = StyleRegistry::with_provider(move |_| {
            started_tx.send(()).ok()?;
            release_rx.lock().recv().ok()?;
            Some(DeferredStyle {
                style: Arc::new(Style::new().italic(true)),
                cache: true,
            })
        });

        thread::scope(|scope| {
            let lookup = scope.spawn(|| registry.get("x"));
            started_rx.recv().unwrap();
            registry.register("x", Style::new().underline(true));
            release_tx.send(()).unwrap();

            let resolved = lookup.join().unwrap().unwrap();
            assert!(resolved.attributes().contains_key(&AttributeKey::Underline));
            assert!(!resolved.attributes().contains_key(&AttributeKey::Italic));
        });

        let stored = registry.get("x").unwrap();
        assert!(stored.attributes().contains_key(&AttributeKey::Underline));
        assert!(!stored.attributes().contains_key(&AttributeKey::Italic));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn unknown_names_leave_text_unaltered() {
        let registry = StyleRegistry::new();
        registry.register("u", Style::new().underline(true));
        let mut text = StyledString::new("abc".to_owned());

        assert!(!registry
            .apply_named(&mut text, "nope", None, RenderMode::Set)
            .unwrap());
        assert!(!registry
            .apply_merged(&mut text, ["x", "y"], None, RenderMode::Add)
            .unwrap());
        assert_eq!(text.runs().next().unwrap().1.len(), 0);

        assert!(registry
            .apply_merged(&mut text, ["x", "u"], Some(1..2), RenderMode::Add)
            .unwrap());
        assert!(text.attribute_at(&AttributeKey::Underline, 1).is_some());
        assert!(text.attribute_at(&AttributeKey::Underline, 0).is_none());
    }
}
