// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec;
use alloc::vec::Vec;
use core::hash::Hash;
use core::ops::Range;

use crate::text_range::validate_range;
use crate::{Attributes, Error, TextRange, TextStorage, TextStorageMut};

#[derive(Clone, Debug)]
struct Run<K: Hash + Eq, V> {
    len: usize,
    attributes: Attributes<K, V>,
}

/// A block of text whose bytes are partitioned into attribute runs.
///
/// The runs always cover the whole text without gaps or overlaps, and no two adjacent runs
/// carry equal attributes. Empty text has no runs.
#[derive(Clone, Debug)]
pub struct AttributedText<T: TextStorage, K: Hash + Eq, V> {
    text: T,
    runs: Vec<Run<K, V>>,
}

impl<T: TextStorage, K: Hash + Eq, V> AttributedText<T, K, V> {
    /// Create an `AttributedText` with no attributes applied.
    pub fn new(text: T) -> Self {
        Self::with_attributes(text, Attributes::new())
    }

    /// Create an `AttributedText` whose whole text carries `attributes`.
    pub fn with_attributes(text: T, attributes: Attributes<K, V>) -> Self {
        let runs = if text.is_empty() {
            Vec::new()
        } else {
            vec![Run {
                len: text.len(),
                attributes,
            }]
        };
        Self { text, runs }
    }

    /// Borrow the underlying text storage.
    pub fn text(&self) -> &T {
        &self.text
    }

    /// Consume `self`, returning the underlying text.
    pub fn into_text(self) -> T {
        self.text
    }

    /// Returns the length of the underlying text, in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if the underlying text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Borrow the underlying text as `&str` when the storage is contiguous.
    pub fn as_str(&self) -> &str
    where
        T: AsRef<str>,
    {
        self.text.as_ref()
    }

    /// Validates a byte `range` against this text and returns a [`TextRange`].
    pub fn range(&self, range: Range<usize>) -> Result<TextRange, Error> {
        TextRange::new(&self.text, range)
    }

    /// Iterate over the attribute runs in text order.
    pub fn runs(&self) -> Runs<'_, K, V> {
        Runs {
            runs: self.runs.iter(),
            offset: 0,
        }
    }

    /// Returns the number of attribute runs.
    pub fn runs_len(&self) -> usize {
        self.runs.len()
    }

    /// Returns the attributes in effect at byte `index`.
    pub fn attributes_at(&self, index: usize) -> Option<&Attributes<K, V>> {
        self.run_at(index).map(|(_, attributes)| attributes)
    }

    /// Returns the run containing byte `index`, with its range.
    pub fn run_at(&self, index: usize) -> Option<(Range<usize>, &Attributes<K, V>)> {
        self.runs().find(|(range, _)| range.contains(&index))
    }

    /// Returns the value of `key` at byte `index`.
    pub fn attribute_at(&self, key: &K, index: usize) -> Option<&V> {
        self.attributes_at(index)?.get(key)
    }

    fn run_index_at(&self, offset: usize) -> Option<usize> {
        let mut start = 0;
        for (ix, run) in self.runs.iter().enumerate() {
            if offset < start + run.len {
                return Some(ix);
            }
            start += run.len;
        }
        self.runs.len().checked_sub(1)
    }
}

impl<T, K, V> AttributedText<T, K, V>
where
    T: TextStorage,
    K: Hash + Eq + Clone,
    V: Clone + PartialEq,
{
    /// Replace every attribute in `range` with `attributes`.
    pub fn set_attributes(
        &mut self,
        range: Range<usize>,
        attributes: &Attributes<K, V>,
    ) -> Result<(), Error> {
        validate_range(&self.text, &range)?;
        self.update_range(range, |existing| existing.clone_from(attributes));
        Ok(())
    }

    /// Layer `attributes` over the existing attributes in `range`.
    ///
    /// Keys present in `attributes` overwrite existing values; other keys are kept.
    pub fn add_attributes(
        &mut self,
        range: Range<usize>,
        attributes: &Attributes<K, V>,
    ) -> Result<(), Error> {
        validate_range(&self.text, &range)?;
        self.update_range(range, |existing| existing.extend_from(attributes));
        Ok(())
    }

    /// Remove `key` from every run in `range`.
    pub fn remove_attribute(&mut self, range: Range<usize>, key: &K) -> Result<(), Error> {
        validate_range(&self.text, &range)?;
        self.update_range(range, |existing| {
            existing.remove(key);
        });
        Ok(())
    }

    /// Remove each of `keys` from every run in `range`.
    pub fn remove_attributes<'a, I>(&mut self, range: Range<usize>, keys: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = &'a K>,
        K: 'a,
    {
        validate_range(&self.text, &range)?;
        let keys: Vec<&K> = keys.into_iter().collect();
        self.update_range(range, |existing| {
            for key in &keys {
                existing.remove(key);
            }
        });
        Ok(())
    }

    /// Drop all attributes, keeping the text.
    pub fn clear_attributes(&mut self) {
        let len = self.text.len();
        self.runs.clear();
        if len > 0 {
            self.runs.push(Run {
                len,
                attributes: Attributes::new(),
            });
        }
    }

    /// Replace the text and drop all attributes.
    pub fn set_text(&mut self, text: T) {
        self.text = text;
        self.clear_attributes();
    }

    fn update_range(&mut self, range: Range<usize>, mut f: impl FnMut(&mut Attributes<K, V>)) {
        if range.is_empty() {
            return;
        }
        let first = self.split_at(range.start);
        let last = self.split_at(range.end);
        for run in &mut self.runs[first..last] {
            f(&mut run.attributes);
        }
        self.coalesce();
    }

    /// Ensures a run starts at `offset` and returns its index (`runs.len()` at the end).
    fn split_at(&mut self, offset: usize) -> usize {
        let mut start = 0;
        for ix in 0..self.runs.len() {
            let len = self.runs[ix].len;
            if offset == start {
                return ix;
            }
            if offset < start + len {
                let head = offset - start;
                let tail = Run {
                    len: len - head,
                    attributes: self.runs[ix].attributes.clone(),
                };
                self.runs[ix].len = head;
                self.runs.insert(ix + 1, tail);
                return ix + 1;
            }
            start += len;
        }
        self.runs.len()
    }

    fn coalesce(&mut self) {
        self.runs.retain(|run| run.len > 0);
        self.runs.dedup_by(|next, prev| {
            if next.attributes == prev.attributes {
                prev.len += next.len;
                true
            } else {
                false
            }
        });
    }
}

impl<T, K, V> AttributedText<T, K, V>
where
    T: TextStorageMut,
    K: Hash + Eq + Clone,
    V: Clone + PartialEq,
{
    /// Replace the bytes in `range` with `with`, keeping the runs aligned with the new text.
    ///
    /// Runs after `range` move by the change in length and runs overlapping it shrink. Inserted
    /// text takes the attributes of the run at `range.start`, or of the last run when inserting
    /// at the end of the text.
    pub fn replace_range(&mut self, range: Range<usize>, with: &str) -> Result<(), Error> {
        validate_range(&self.text, &range)?;
        let owner = if with.is_empty() {
            None
        } else {
            self.run_index_at(range.start)
        };

        let mut start = 0;
        for run in &mut self.runs {
            let end = start + run.len;
            let overlap = end.min(range.end).saturating_sub(start.max(range.start));
            run.len -= overlap;
            start = end;
        }
        if !with.is_empty() {
            match owner {
                Some(ix) => self.runs[ix].len += with.len(),
                None => self.runs.push(Run {
                    len: with.len(),
                    attributes: Attributes::new(),
                }),
            }
        }

        self.text.replace_range(range, with);
        self.coalesce();
        debug_assert_eq!(
            self.runs.iter().map(|run| run.len).sum::<usize>(),
            self.text.len(),
            "runs must cover the text exactly"
        );
        Ok(())
    }

    /// Append `other`, keeping its attribute runs.
    pub fn append<U>(&mut self, other: &AttributedText<U, K, V>)
    where
        U: TextStorage + AsRef<str>,
    {
        let end = self.text.len();
        self.text.replace_range(end..end, other.as_str());
        self.runs.extend(other.runs.iter().cloned());
        self.coalesce();
    }
}

/// Iterator over the runs of an [`AttributedText`], yielding each run's byte range.
#[derive(Clone, Debug)]
pub struct Runs<'a, K: Hash + Eq, V> {
    runs: core::slice::Iter<'a, Run<K, V>>,
    offset: usize,
}

impl<'a, K: Hash + Eq, V> Iterator for Runs<'a, K, V> {
    type Item = (Range<usize>, &'a Attributes<K, V>);

    fn next(&mut self) -> Option<Self::Item> {
        let run = self.runs.next()?;
        let start = self.offset;
        self.offset += run.len;
        Some((start..self.offset, &run.attributes))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.runs.size_hint()
    }
}

impl<K: Hash + Eq, V> ExactSizeIterator for Runs<'_, K, V> {}

#[cfg(test)]
mod tests {
    use crate::{AttributedText, Attributes, ErrorKind};
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::ops::Range;

    type Text = AttributedText<String, &'static str, u32>;

    fn text(s: &str) -> Text {
        AttributedText::new(String::from(s))
    }

    type RunSummary = (Range<usize>, Vec<(&'static str, u32)>);

    fn run(range: Range<usize>, attrs: &[(&'static str, u32)]) -> RunSummary {
        (range, attrs.to_vec())
    }

    fn runs(text: &Text) -> Vec<RunSummary> {
        text.runs()
            .map(|(range, attrs)| (range, attrs.iter().map(|(k, v)| (*k, *v)).collect()))
            .collect()
    }

    #[test]
    fn new_text_has_one_bare_run() {
        let t = text("Hello!");
        assert_eq!(runs(&t), vec![run(0..6, &[])]);
        let empty = text("");
        assert_eq!(empty.runs_len(), 0);
        assert!(empty.attributes_at(0).is_none());
    }

    #[test]
    fn set_replaces_and_add_layers() {
        let mut t = AttributedText::with_attributes(
            String::from("Hello!"),
            Attributes::new().with("base", 1),
        );
        t.add_attributes(0..5, &Attributes::new().with("color", 2))
            .unwrap();
        t.set_attributes(1..3, &Attributes::new().with("weight", 3))
            .unwrap();
        assert_eq!(
            runs(&t),
            vec![
                run(0..1, &[("base", 1), ("color", 2)]),
                run(1..3, &[("weight", 3)]),
                run(3..5, &[("base", 1), ("color", 2)]),
                run(5..6, &[("base", 1)]),
            ]
        );
    }

    #[test]
    fn equal_neighbours_coalesce() {
        let mut t = text("abcdef");
        let red = Attributes::new().with("color", 1);
        t.set_attributes(0..2, &red).unwrap();
        t.set_attributes(4..6, &red).unwrap();
        assert_eq!(t.runs_len(), 3);
        t.set_attributes(2..4, &red).unwrap();
        assert_eq!(runs(&t), vec![run(0..6, &[("color", 1)])]);
        t.remove_attribute(0..6, &"color").unwrap();
        assert_eq!(runs(&t), vec![run(0..6, &[])]);
    }

    #[test]
    fn empty_range_is_a_no_op() {
        let mut t = text("abc");
        t.set_attributes(1..1, &Attributes::new().with("x", 1))
            .unwrap();
        assert_eq!(t.runs_len(), 1);
    }

    #[test]
    fn removing_text_shifts_following_runs() {
        let mut t = text("Hello, <red>World</red>!");
        t.set_attributes(19..23, &Attributes::new().with("tag", 1))
            .unwrap();
        t.set_attributes(23..24, &Attributes::new().with("bang", 2))
            .unwrap();
        t.replace_range(17..23, "").unwrap();
        t.replace_range(7..12, "").unwrap();
        assert_eq!(t.as_str(), "Hello, World!");
        assert_eq!(runs(&t), vec![run(0..12, &[]), run(12..13, &[("bang", 2)])]);
    }

    #[test]
    fn inserted_text_inherits_run_at_start() {
        let mut t = text("ab");
        t.set_attributes(1..2, &Attributes::new().with("x", 1))
            .unwrap();
        t.replace_range(1..1, "zz").unwrap();
        assert_eq!(t.as_str(), "azzb");
        assert_eq!(runs(&t), vec![run(0..1, &[]), run(1..4, &[("x", 1)])]);

        t.replace_range(4..4, "!").unwrap();
        assert_eq!(t.attribute_at(&"x", 4), Some(&1));

        let mut empty = text("");
        empty.replace_range(0..0, "new").unwrap();
        assert_eq!(runs(&empty), vec![run(0..3, &[])]);
    }

    #[test]
    fn failed_edit_leaves_text_untouched() {
        let mut t = text("é!");
        let err = t.replace_range(1..3, "").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotOnCharBoundary);
        let err = t
            .set_attributes(0..9, &Attributes::new().with("x", 1))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidBounds);
        assert_eq!(t.as_str(), "é!");
        assert_eq!(runs(&t), vec![run(0..3, &[])]);
    }

    #[test]
    fn append_keeps_both_sides() {
        let mut left = text("ab");
        let mut right = text("cd");
        right
            .set_attributes(0..2, &Attributes::new().with("x", 1))
            .unwrap();
        left.append(&right);
        assert_eq!(left.as_str(), "abcd");
        assert_eq!(runs(&left), vec![run(0..2, &[]), run(2..4, &[("x", 1)])]);
    }

    #[test]
    fn run_at_reports_range() {
        let mut t = text("abcdef");
        t.set_attributes(2..4, &Attributes::new().with("x", 1))
            .unwrap();
        let (range, attrs) = t.run_at(3).unwrap();
        assert_eq!(range, 2..4);
        assert_eq!(attrs.get(&"x"), Some(&1));
        assert!(t.run_at(6).is_none());
    }
}
