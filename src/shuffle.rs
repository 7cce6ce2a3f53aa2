//! Unbiased shuffling and bounded sampling.
//!
//! The backward Fisher-Yates (Durstenfeld/Knuth) shuffle walks from the last
//! position down to 1 and swaps each position with a uniformly chosen index at
//! or below it. Given a uniform random source, every one of the n! orderings
//! is equiprobable, in O(n) time and O(1) extra space for the in-place form.
//!
//! ## References
//!
//! - Durstenfeld (1964): the in-place O(n) form of Fisher-Yates.
//! - Knuth, TAOCP vol. 2, Algorithm P.
//!
//! Notes:
//! - This module provides `*_with_rng` entrypoints for deterministic testing/benchmarking.
//! - Functions that call `rand::rng()` internally are convenience wrappers and are not
//!   deterministic across processes by design.

use rand::prelude::*;

/// Shuffle a slice in place.
///
/// Empty and single-element slices are no-ops.
#[inline]
pub fn shuffle_in_place<T>(items: &mut [T]) {
    let mut rng = rand::rng();
    shuffle_in_place_with_rng(items, &mut rng);
}

/// Shuffle a slice in place, using a caller-supplied RNG.
pub fn shuffle_in_place_with_rng<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// Return a shuffled copy, leaving the caller's slice untouched.
#[inline]
pub fn shuffled<T: Clone>(items: &[T]) -> Vec<T> {
    let mut rng = rand::rng();
    shuffled_with_rng(items, &mut rng)
}

/// Shuffled copy with a caller-supplied RNG.
pub fn shuffled_with_rng<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut copy = items.to_vec();
    shuffle_in_place_with_rng(&mut copy, rng);
    copy
}

/// Shuffle a copy and keep at most `count` elements.
///
/// `None` (or any `count >= items.len()`) returns the full permutation. The
/// copy is shuffled in full before truncating, so the result is a uniformly
/// random subset in uniformly random order — no partially-shuffled tail bias.
/// A count of zero yields an empty vector.
#[inline]
pub fn sample<T: Clone>(items: &[T], count: Option<usize>) -> Vec<T> {
    let mut rng = rand::rng();
    sample_with_rng(items, count, &mut rng)
}

/// Bounded sample with a caller-supplied RNG.
pub fn sample_with_rng<T: Clone, R: Rng + ?Sized>(
    items: &[T],
    count: Option<usize>,
    rng: &mut R,
) -> Vec<T> {
    let mut out = shuffled_with_rng(items, rng);
    if let Some(count) = count {
        if count < out.len() {
            out.truncate(count);
        }
    }
    out
}

/// Filter, then bounded-sample the survivors.
///
/// `filter: None` bypasses filtering entirely (the “all” selection). A
/// predicate that matches nothing yields an empty vector, not an error.
#[inline]
pub fn filter_sample<T: Clone>(
    items: &[T],
    filter: Option<&dyn Fn(&T) -> bool>,
    count: Option<usize>,
) -> Vec<T> {
    let mut rng = rand::rng();
    filter_sample_with_rng(items, filter, count, &mut rng)
}

/// Filter-then-sample with a caller-supplied RNG.
pub fn filter_sample_with_rng<T: Clone, R: Rng + ?Sized>(
    items: &[T],
    filter: Option<&dyn Fn(&T) -> bool>,
    count: Option<usize>,
    rng: &mut R,
) -> Vec<T> {
    match filter {
        Some(pred) => {
            let kept: Vec<T> = items.iter().filter(|item| pred(item)).cloned().collect();
            sample_with_rng(&kept, count, rng)
        }
        None => sample_with_rng(items, count, rng),
    }
}
