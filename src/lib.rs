//! `mazeru`: shuffling and weighted-selection primitives.
//!
//! This crate is meant to be a low-level “deck dealing” toolbox that quiz-style
//! front ends can depend on without pulling in rendering or transport machinery.
//!
//! Exposed modules:
//! - `shuffle`: unbiased Fisher-Yates permutation + bounded/filtered sampling.
//! - `weighted`: weighted sampling without replacement.
//! - `cache`: per-key memoized permutations for session-stable display order.

#![forbid(unsafe_code)]

pub mod cache;
pub mod shuffle;
pub mod weighted;

pub use cache::ShuffleCache;
pub use shuffle::{
    filter_sample, filter_sample_with_rng, sample, sample_with_rng, shuffle_in_place,
    shuffle_in_place_with_rng, shuffled, shuffled_with_rng,
};
pub use weighted::{
    weighted_shuffle, weighted_shuffle_with_rng, WeightError, Weighted, DEFAULT_WEIGHT,
};
