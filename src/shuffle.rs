//! Fisher–Yates shuffling over an injected random source.

use alloc::vec::Vec;

use rand::Rng;

/// Shuffles `items` in place.
///
/// Walks the slice from the last index down, swapping each element with a
/// uniformly chosen element at or before it. Every permutation is equally
/// likely given an unbiased `rng`, and a seeded `rng` gives a reproducible
/// order.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// Returns a shuffled copy of `items`, leaving the original untouched.
#[must_use]
pub fn shuffled_copy<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut copy = items.to_vec();
    shuffle(&mut copy, rng);
    copy
}
