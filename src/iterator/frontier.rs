use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::error::{Error, Result};

/// The buffered heads of all unexhausted slots, and the rule for picking
/// the smallest one.
///
/// A slot with no entry here is exhausted. Equal heads at the minimum are
/// never resolved by slot order: they mean the same element exists in two
/// sources, and `pop_min` fails.
pub(crate) enum Frontier<T> {
    /// One optional head per slot, scanned in full on every pop.
    Linear { heads: Vec<Option<T>>, live: usize },
    /// Min-heap on (head, slot). The slot index only fixes which pair of
    /// slots a duplicate is reported against.
    Heap(BinaryHeap<Reverse<(T, usize)>>),
}

impl<T: Ord> Frontier<T> {
    pub(crate) fn linear(num_slots: usize) -> Self {
        let mut heads = Vec::with_capacity(num_slots);
        heads.resize_with(num_slots, || None);
        Frontier::Linear { heads, live: 0 }
    }

    pub(crate) fn heap(num_slots: usize) -> Self {
        Frontier::Heap(BinaryHeap::with_capacity(num_slots))
    }

    /// Buffer `head` as the next element of `slot`.
    /// The slot must not already hold a head.
    pub(crate) fn push(&mut self, slot: usize, head: T) {
        match self {
            Frontier::Linear { heads, live } => {
                debug_assert!(heads[slot].is_none(), "slot {slot} already buffered");
                heads[slot] = Some(head);
                *live += 1;
            }
            Frontier::Heap(heap) => heap.push(Reverse((head, slot))),
        }
    }

    /// Number of slots that still hold a head.
    pub(crate) fn len(&self) -> usize {
        match self {
            Frontier::Linear { live, .. } => *live,
            Frontier::Heap(heap) => heap.len(),
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Take the smallest head out of its slot.
    ///
    /// Returns `Ok(None)` when every slot is exhausted, and `InvalidInput`
    /// (leaving all heads in place) when two slots share the minimum.
    pub(crate) fn pop_min(&mut self) -> Result<Option<(usize, T)>> {
        match self {
            Frontier::Linear { heads, live } => {
                let mut min: Option<usize> = None;
                let mut tie: Option<usize> = None;

                for (slot, head) in heads.iter().enumerate() {
                    let Some(head) = head else { continue };
                    let Some(current) = min else {
                        min = Some(slot);
                        continue;
                    };
                    // `current` always indexes a buffered slot
                    let Some(best) = heads[current].as_ref() else { continue };
                    match head.cmp(best) {
                        Ordering::Less => {
                            min = Some(slot);
                            tie = None;
                        }
                        Ordering::Equal if tie.is_none() => tie = Some(slot),
                        _ => {}
                    }
                }

                let Some(slot) = min else { return Ok(None) };
                if let Some(other) = tie {
                    return Err(duplicate(slot, other));
                }
                let head = heads[slot].take();
                *live -= 1;
                Ok(head.map(|head| (slot, head)))
            }
            Frontier::Heap(heap) => {
                let Some(Reverse((head, slot))) = heap.pop() else {
                    return Ok(None);
                };
                if let Some(Reverse((next, other))) = heap.peek() {
                    if *next == head {
                        let err = duplicate(slot, *other);
                        heap.push(Reverse((head, slot)));
                        return Err(err);
                    }
                }
                Ok(Some((slot, head)))
            }
        }
    }
}

fn duplicate(slot: usize, other: usize) -> Error {
    Error::InvalidInput(format!(
        "sources {slot} and {other} both yield the same element"
    ))
}
