//! Equality-based operations over point sequences.
//!
//! Both operations are generic over the element type; only `PartialEq`
//! (filtering) or `Eq + Hash` (intersection) is required, so they work the
//! same for `Vector2` as for any other value type.

use std::hash::Hash;

use rustc_hash::FxHashSet;
use tracing::trace;

// =============================================================================
// Filter by equality
// =============================================================================

/// Lazily yields every element of `items` equal to `query`, in order.
/// Duplicates are kept.
pub fn filter_equal<'a, T>(items: &'a [T], query: &'a T) -> impl Iterator<Item = &'a T> + 'a
where
    T: PartialEq,
{
    items.iter().filter(move |item| *item == query)
}

// =============================================================================
// Set intersection
// =============================================================================

/// Values present in both `a` and `b`, each reported once.
///
/// The result follows first-occurrence order in `a`, but that order is not
/// part of the contract.
pub fn intersect<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut remaining: FxHashSet<&T> = b.iter().collect();
    let result: Vec<T> = a
        .iter()
        .filter(|item| remaining.remove(item))
        .cloned()
        .collect();

    trace!(a = a.len(), b = b.len(), common = result.len(), "intersected sequences");
    result
}

pub fn intersection_count<T>(a: &[T], b: &[T]) -> usize
where
    T: Eq + Hash + Clone,
{
    intersect(a, b).len()
}

// =============================================================================
// Tests
// =============================================================================
