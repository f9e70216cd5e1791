// Composite iterator removal tests
// `remove` on the merged view edits exactly the collection the last element
// came from. Every other collection must be left untouched.

use std::collections::BTreeSet;

use composite_iter::{CompositeIterator, Error, SetSource, VecSource};

/// Advance `count + 1` elements.
fn skip<S>(it: &mut CompositeIterator<S>, count: usize)
where
    S: composite_iter::SourceIterator,
    S::Item: Ord + Clone,
{
    for _ in 0..=count {
        it.try_next().unwrap();
    }
}

// =============================================================================
// Test 1: Remove the only element
// =============================================================================
#[test]
fn remove_one_element_from_single_collection() {
    let mut collection = vec![1];
    let mut it = CompositeIterator::new(vec![VecSource::new(&mut collection)]);

    it.try_next().unwrap();
    it.remove().unwrap();

    assert!(!it.has_next());
    drop(it);
    assert!(collection.is_empty());
}

// =============================================================================
// Test 2: Remove several elements from one collection
// =============================================================================
#[test]
fn remove_many_elements_from_single_collection() {
    let mut collection = vec![1, 2, 3, 4, 5, 6];
    let mut it = CompositeIterator::new(vec![VecSource::new(&mut collection)]);

    skip(&mut it, 1); // 1, 2
    it.remove().unwrap();
    skip(&mut it, 2); // 3, 4, 5
    it.remove().unwrap();
    drop(it);

    assert_eq!(collection, vec![1, 3, 4, 6]);
}

// =============================================================================
// Test 3: Remove two consecutive elements
// =============================================================================
// The slot that produced 2 must not have moved past it before `remove`.
#[test]
fn remove_two_elements_in_a_row() {
    let mut collection = vec![1, 2, 3, 4];
    let mut it = CompositeIterator::new(vec![VecSource::new(&mut collection)]);

    skip(&mut it, 1); // 1, 2
    it.remove().unwrap();
    assert_eq!(it.try_next(), Ok(3));
    it.remove().unwrap();
    drop(it);

    assert_eq!(collection, vec![1, 4]);
}

// =============================================================================
// Test 4: Remove one element across several collections
// =============================================================================
#[test]
fn remove_one_element_from_multiple_collections() {
    let mut a = vec![1, 4, 6, 7];
    let mut b = vec![2, 8, 11];
    let mut c = vec![3, 5, 9];
    let mut d = vec![10];

    let mut it = CompositeIterator::new(vec![
        VecSource::new(&mut a),
        VecSource::new(&mut b),
        VecSource::new(&mut c),
        VecSource::new(&mut d),
    ]);

    skip(&mut it, 4); // 1, 2, 3, 4, 5
    it.remove().unwrap();

    let rest: Vec<i32> = it.by_ref().map(Result::unwrap).collect();
    assert_eq!(rest, vec![6, 7, 8, 9, 10, 11]);
    drop(it);

    // 5 came from C
    assert_eq!(c, vec![3, 9]);
    assert_eq!(a, vec![1, 4, 6, 7]);
    assert_eq!(b, vec![2, 8, 11]);
    assert_eq!(d, vec![10]);
}

// =============================================================================
// Test 5: Remove many elements across several collections
// =============================================================================
#[test]
fn remove_many_elements_from_multiple_collections() {
    let mut a = vec![1, 4, 6, 7];
    let mut b = vec![2, 8, 11];
    let mut c = vec![3, 5, 9];
    let mut d = vec![10];

    let mut it = CompositeIterator::new(vec![
        VecSource::new(&mut a),
        VecSource::new(&mut b),
        VecSource::new(&mut c),
        VecSource::new(&mut d),
    ]);

    skip(&mut it, 1); // 1, 2
    it.remove().unwrap();
    skip(&mut it, 1); // 3, 4
    it.remove().unwrap();
    skip(&mut it, 2); // 5, 6, 7
    it.remove().unwrap();
    skip(&mut it, 2); // 8, 9, 10
    it.remove().unwrap();
    drop(it);

    assert_eq!(a, vec![1, 6]);
    assert_eq!(b, vec![8, 11]);
    assert!(d.is_empty());
    assert_eq!(c, vec![3, 5, 9]);
}

// =============================================================================
// Test 6: Removal through a set-backed source
// =============================================================================
#[test]
fn remove_from_set_and_list_sources() {
    let mut list = vec![1, 3, 5];
    let mut set: BTreeSet<i32> = [2, 4, 6].into_iter().collect();

    let sources: Vec<Box<dyn composite_iter::SourceIterator<Item = i32> + '_>> = vec![
        Box::new(VecSource::new(&mut list)),
        Box::new(SetSource::new(&mut set)),
    ];
    let mut it = CompositeIterator::new(sources);

    let mut kept = Vec::new();
    while it.has_next() {
        let x = it.try_next().unwrap();
        if x % 3 == 0 {
            it.remove().unwrap();
        } else {
            kept.push(x);
        }
    }
    drop(it);

    assert_eq!(kept, vec![1, 2, 4, 5]);
    assert_eq!(list, vec![1, 5]);
    assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![2, 4]);
}

// =============================================================================
// Test 7: remove before any next
// =============================================================================
#[test]
fn remove_before_next_is_illegal_state() {
    let mut collection = vec![1, 2, 3];
    let mut it = CompositeIterator::new(vec![VecSource::new(&mut collection)]);

    assert!(matches!(it.remove(), Err(Error::IllegalState(_))));
    drop(it);
    assert_eq!(collection, vec![1, 2, 3]);
}

// =============================================================================
// Test 8: remove twice in a row
// =============================================================================
#[test]
fn remove_twice_is_illegal_state() {
    let mut collection = vec![1, 2, 3];
    let mut it = CompositeIterator::new(vec![VecSource::new(&mut collection)]);

    it.try_next().unwrap();
    it.remove().unwrap();
    assert!(matches!(it.remove(), Err(Error::IllegalState(_))));
    drop(it);
    assert_eq!(collection, vec![2, 3]);
}

// =============================================================================
// Test 9: remove on a read-only source
// =============================================================================
// The source's own error comes back and the element is still removable
// from the caller's point of view.
#[test]
fn remove_on_read_only_source_is_unsupported() {
    let mut it = CompositeIterator::from_iters(vec![vec![1, 2]]);

    it.try_next().unwrap();
    assert!(matches!(it.remove(), Err(Error::Unsupported(_))));
    assert!(matches!(it.remove(), Err(Error::Unsupported(_))));
    assert_eq!(it.try_next(), Ok(2));
}

// =============================================================================
// Test 10: remove after running past the end
// =============================================================================
// Hitting `Exhausted` does not consume the last element's removability.
#[test]
fn remove_after_exhausted_next_still_removes_last_element() {
    let mut collection = vec![1, 2];
    let mut it = CompositeIterator::new(vec![VecSource::new(&mut collection)]);

    assert_eq!(it.try_next(), Ok(1));
    assert_eq!(it.try_next(), Ok(2));
    assert_eq!(it.try_next(), Err(Error::Exhausted));
    it.remove().unwrap();
    assert!(matches!(it.remove(), Err(Error::IllegalState(_))));
    assert!(!it.has_next());
    drop(it);

    assert_eq!(collection, vec![1]);
}
