use std::iter::FusedIterator;

use tracing::{debug, trace, warn};

use crate::error::{Error, Result};
use crate::iterator::SourceIterator;
use crate::iterator::frontier::Frontier;
use crate::iterator::source::IterSource;
use crate::options::MergeOptions;

/// Merges several sorted, duplicate-free sources into one sorted,
/// duplicate-free stream.
///
/// Each source sits in a slot. Every unexhausted slot keeps one buffered
/// head in the frontier, except the slot that produced the last element:
/// that one is refilled at the start of the next step. Until then the
/// source's most recent element is still the one the caller saw, which is
/// what makes [`remove`](Self::remove) hit the right element.
///
/// Validation is lazy. A source that goes backwards, repeats itself, or
/// shares an element with another source is reported by the step that
/// reaches the violation, as [`Error::InvalidInput`]. After that the merge
/// is poisoned and keeps failing.
///
/// ```text
/// slots:     [ A: 1 4 6 ]  [ B: 2 3 ]  [ C: ]
/// frontier:    A→1          B→2         (exhausted)
/// next()  →  1 (A pending refill)
/// next()  →  refill A→4, emit 2 (B pending)
/// ```
pub struct CompositeIterator<S: SourceIterator> {
    slots: Vec<S>,
    frontier: Frontier<S::Item>,
    /// Slot that produced `last` and has not pulled its next head yet.
    pending: Option<usize>,
    /// Slot that produced `last`; target of `remove`.
    last_slot: Option<usize>,
    last: Option<S::Item>,
    removable: bool,
    poisoned: bool,
}

impl<S> CompositeIterator<S>
where
    S: SourceIterator,
    S::Item: Ord + Clone,
{
    /// Wrap `sources` with the default options.
    pub fn new(sources: Vec<S>) -> Self {
        Self::with_options(sources, MergeOptions::default())
    }

    /// Wrap `sources`, priming one head from each.
    ///
    /// Never fails: ordering and uniqueness are checked only as elements
    /// are reached.
    pub fn with_options(mut sources: Vec<S>, options: MergeOptions) -> Self {
        let use_heap = options.use_heap(sources.len());
        let mut frontier = if use_heap {
            Frontier::heap(sources.len())
        } else {
            Frontier::linear(sources.len())
        };

        for (slot, source) in sources.iter_mut().enumerate() {
            if let Some(head) = source.next() {
                frontier.push(slot, head);
            }
        }

        debug!(
            sources = sources.len(),
            primed = frontier.len(),
            heap = use_heap,
            "composite iterator created"
        );

        CompositeIterator {
            slots: sources,
            frontier,
            pending: None,
            last_slot: None,
            last: None,
            removable: false,
            poisoned: false,
        }
    }

    /// Wrap sources that may be absent.
    ///
    /// Fails with [`Error::InvalidArgument`] if the collection itself or any
    /// source in it is `None`. This is the only check made before iteration.
    pub fn try_new(sources: Option<Vec<Option<S>>>) -> Result<Self> {
        let sources =
            sources.ok_or_else(|| Error::InvalidArgument("source list is absent".into()))?;
        let sources = sources
            .into_iter()
            .enumerate()
            .map(|(slot, source)| {
                source.ok_or_else(|| Error::InvalidArgument(format!("source {slot} is absent")))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(sources))
    }

    /// Whether another element remains. Pure: runs no validation.
    pub fn has_next(&self) -> bool {
        !self.frontier.is_empty() || self.pending_has_next()
    }

    /// Produce the smallest remaining element.
    ///
    /// Fails with [`Error::Exhausted`] when nothing is left, and with
    /// [`Error::InvalidInput`] when the step reaches an ordering or
    /// uniqueness violation.
    pub fn try_next(&mut self) -> Result<S::Item> {
        if self.poisoned {
            return Err(Error::InvalidInput(
                "merge already failed on invalid input".into(),
            ));
        }

        // The previous winner pulls its next head only now, so that
        // `remove` could still reach the element it produced.
        if let Some(slot) = self.pending.take() {
            self.refill(slot)?;
        }

        let (slot, value) = match self.frontier.pop_min() {
            Ok(Some(entry)) => entry,
            Ok(None) => return Err(Error::Exhausted),
            Err(err) => return Err(self.poison(err)),
        };

        if let Some(last) = &self.last {
            if value <= *last {
                return Err(self.poison(Error::InvalidInput(format!(
                    "source {slot} yields an element already emitted"
                ))));
            }
        }

        trace!(slot, "element emitted");
        self.last = Some(value.clone());
        self.pending = Some(slot);
        self.last_slot = Some(slot);
        self.removable = true;
        Ok(value)
    }

    /// Remove the element just returned by [`try_next`](Self::try_next)
    /// from the source it came from. No other source is touched.
    ///
    /// Fails with [`Error::IllegalState`] if there was no `try_next` since
    /// construction or since the last `remove`.
    pub fn remove(&mut self) -> Result<()> {
        let slot = match self.last_slot {
            Some(slot) if self.removable => slot,
            _ => return Err(Error::IllegalState("no element to remove")),
        };
        self.slots[slot].remove()?;
        self.removable = false;
        self.last_slot = None;
        trace!(slot, "element removed from source");
        Ok(())
    }

    /// Feed every remaining element to `visit`, in merge order.
    ///
    /// Stops at the first validation failure and returns it.
    pub fn for_each_remaining<F>(&mut self, mut visit: F) -> Result<()>
    where
        F: FnMut(S::Item),
    {
        while self.has_next() {
            visit(self.try_next()?);
        }
        Ok(())
    }

    /// Number of wrapped sources, exhausted or not.
    pub fn num_sources(&self) -> usize {
        self.slots.len()
    }

    /// Number of sources with elements left.
    pub fn num_active_sources(&self) -> usize {
        self.frontier.len() + usize::from(self.pending_has_next())
    }

    /// Give the sources back, in the order they were supplied.
    pub fn into_sources(self) -> Vec<S> {
        self.slots
    }

    fn pending_has_next(&self) -> bool {
        self.pending.is_some_and(|slot| self.slots[slot].has_next())
    }

    /// Buffer the next head of `slot`, which last produced `self.last`.
    fn refill(&mut self, slot: usize) -> Result<()> {
        let Some(head) = self.slots[slot].next() else {
            trace!(slot, "source exhausted");
            return Ok(());
        };
        if let Some(last) = &self.last {
            if head <= *last {
                return Err(self.poison(Error::InvalidInput(format!(
                    "source {slot} is not strictly ascending"
                ))));
            }
        }
        self.frontier.push(slot, head);
        Ok(())
    }

    fn poison(&mut self, err: Error) -> Error {
        warn!(error = %err, "composite iterator poisoned");
        self.poisoned = true;
        self.removable = false;
        self.last_slot = None;
        err
    }
}

impl<I> CompositeIterator<IterSource<I>>
where
    I: Iterator,
    I::Item: Ord + Clone,
{
    /// Merge plain iterables. The result is read-only: `remove` fails
    /// with [`Error::Unsupported`].
    pub fn from_iters<C, It>(iters: It) -> Self
    where
        C: IntoIterator<IntoIter = I>,
        It: IntoIterator<Item = C>,
    {
        Self::new(iters.into_iter().map(IterSource::new).collect())
    }
}

/// Yields `Ok` elements until the sources run out, or a single `Err` on the
/// first validation failure, then `None`.
impl<S> Iterator for CompositeIterator<S>
where
    S: SourceIterator,
    S::Item: Ord + Clone,
{
    type Item = Result<S::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.poisoned || !self.has_next() {
            return None;
        }
        match self.try_next() {
            Err(Error::Exhausted) => None,
            other => Some(other),
        }
    }
}

impl<S> FusedIterator for CompositeIterator<S>
where
    S: SourceIterator,
    S::Item: Ord + Clone,
{
}
