use std::collections::BTreeSet;
use std::ops::Bound::{Excluded, Unbounded};

use crate::error::{Error, Result};
use crate::iterator::SourceIterator;

/// Cursor over a borrowed `Vec`, with list-iterator removal.
///
/// `remove` deletes the element most recently returned by `next` and
/// shifts the cursor back so the following element is not skipped.
pub struct VecSource<'a, T> {
    items: &'a mut Vec<T>,
    /// Index of the next element to return.
    pos: usize,
    /// Whether `items[pos - 1]` was returned and not yet removed.
    can_remove: bool,
}

impl<'a, T> VecSource<'a, T> {
    pub fn new(items: &'a mut Vec<T>) -> Self {
        VecSource {
            items,
            pos: 0,
            can_remove: false,
        }
    }
}

impl<T: Clone> SourceIterator for VecSource<'_, T> {
    type Item = T;

    fn has_next(&self) -> bool {
        self.pos < self.items.len()
    }

    fn next(&mut self) -> Option<T> {
        let item = self.items.get(self.pos)?.clone();
        self.pos += 1;
        self.can_remove = true;
        Some(item)
    }

    fn remove(&mut self) -> Result<()> {
        if !self.can_remove {
            return Err(Error::IllegalState("no element to remove"));
        }
        self.pos -= 1;
        self.items.remove(self.pos);
        self.can_remove = false;
        Ok(())
    }
}

/// Cursor over a borrowed `BTreeSet`.
///
/// The set is sorted and duplicate-free by construction, so this source
/// never trips the composite's validation. Each `next` resumes strictly
/// after the last returned element, which keeps the cursor valid across
/// removals.
pub struct SetSource<'a, T> {
    set: &'a mut BTreeSet<T>,
    last: Option<T>,
    can_remove: bool,
}

impl<'a, T> SetSource<'a, T> {
    pub fn new(set: &'a mut BTreeSet<T>) -> Self {
        SetSource {
            set,
            last: None,
            can_remove: false,
        }
    }
}

impl<T: Ord + Clone> SourceIterator for SetSource<'_, T> {
    type Item = T;

    fn has_next(&self) -> bool {
        match &self.last {
            Some(last) => self.set.range((Excluded(last), Unbounded)).next().is_some(),
            None => !self.set.is_empty(),
        }
    }

    fn next(&mut self) -> Option<T> {
        let item = match &self.last {
            Some(last) => self.set.range((Excluded(last), Unbounded)).next(),
            None => self.set.iter().next(),
        }?
        .clone();
        self.last = Some(item.clone());
        self.can_remove = true;
        Some(item)
    }

    fn remove(&mut self) -> Result<()> {
        match &self.last {
            Some(last) if self.can_remove => {
                self.set.remove(last);
                self.can_remove = false;
                Ok(())
            }
            _ => Err(Error::IllegalState("no element to remove")),
        }
    }
}

/// Read-only source over any Rust iterator.
///
/// Keeps one element pulled ahead so `has_next` can answer through `&self`.
pub struct IterSource<I: Iterator> {
    iter: I,
    peeked: Option<I::Item>,
}

impl<I: Iterator> IterSource<I> {
    pub fn new<C: IntoIterator<IntoIter = I>>(items: C) -> Self {
        let mut iter = items.into_iter();
        let peeked = iter.next();
        IterSource { iter, peeked }
    }
}

impl<I: Iterator> SourceIterator for IterSource<I> {
    type Item = I::Item;

    fn has_next(&self) -> bool {
        self.peeked.is_some()
    }

    fn next(&mut self) -> Option<I::Item> {
        let item = self.peeked.take()?;
        self.peeked = self.iter.next();
        Some(item)
    }

    fn remove(&mut self) -> Result<()> {
        Err(Error::Unsupported("remove on a read-only source"))
    }
}
