//! # Composite iterator
//!
//! A k-way merge over sorted, duplicate-free sources.
//!
//! ## Core idea
//! Each source keeps one element buffered ahead of need. Every step picks
//! the smallest buffered head, emits it, and refills only the slot it came
//! from. Ordering and uniqueness are never checked up front; a bad source
//! is reported at the step where its violation becomes visible.
//!
//! `remove` on the merged view is forwarded to the source that produced the
//! last element, so it edits exactly one backing collection.
//!
//! ```
//! use composite_iter::{CompositeIterator, VecSource};
//!
//! let mut a = vec![1, 4, 6];
//! let mut b = vec![2, 3, 5];
//! let mut merged = CompositeIterator::new(vec![VecSource::new(&mut a), VecSource::new(&mut b)]);
//!
//! assert_eq!(merged.try_next(), Ok(1));
//! assert_eq!(merged.try_next(), Ok(2));
//! merged.remove().unwrap();
//!
//! let rest: Vec<i32> = merged.map(Result::unwrap).collect();
//! assert_eq!(rest, vec![3, 4, 5, 6]);
//! assert_eq!(b, vec![3, 5]);
//! ```

pub mod error;
pub mod iterator;
pub mod options;

// Public re-exports for the top-level API
pub use error::{Error, Result};
pub use iterator::SourceIterator;
pub use iterator::composite::CompositeIterator;
pub use iterator::source::{IterSource, SetSource, VecSource};
pub use options::{MergeOptions, Selection};
