pub mod composite;
mod frontier;
pub mod source;

use crate::error::Result;

/// The capability set the composite iterator needs from each source.
///
/// A source is expected to yield its elements in strictly ascending order.
/// Nothing enforces that here; the composite validates it lazily as it pulls.
pub trait SourceIterator {
    type Item;

    /// Whether `next` would produce an element. Must not consume anything.
    fn has_next(&self) -> bool;

    /// Produce the next element, or `None` if the source has no more.
    fn next(&mut self) -> Option<Self::Item>;

    /// Remove the element most recently produced by `next` from the
    /// backing collection.
    ///
    /// The composite calls this only while the removed element is still the
    /// last one this source produced. Sources with no backing collection return
    /// [`Error::Unsupported`](crate::Error::Unsupported).
    fn remove(&mut self) -> Result<()>;
}

impl<S: SourceIterator + ?Sized> SourceIterator for &mut S {
    type Item = S::Item;

    fn has_next(&self) -> bool {
        (**self).has_next()
    }

    fn next(&mut self) -> Option<Self::Item> {
        (**self).next()
    }

    fn remove(&mut self) -> Result<()> {
        (**self).remove()
    }
}

impl<S: SourceIterator + ?Sized> SourceIterator for Box<S> {
    type Item = S::Item;

    fn has_next(&self) -> bool {
        (**self).has_next()
    }

    fn next(&mut self) -> Option<Self::Item> {
        (**self).next()
    }

    fn remove(&mut self) -> Result<()> {
        (**self).remove()
    }
}
