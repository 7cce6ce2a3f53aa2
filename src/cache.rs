//! Per-key memoized permutations.
//!
//! A quiz session shows each question's answer options in the same order every
//! time the question is revisited; [`ShuffleCache`] pins the first shuffle per
//! key until the session ends.

use std::collections::HashMap;
use std::hash::Hash;

use log::debug;
use rand::prelude::*;

use crate::shuffle::shuffled_with_rng;

/// Memoizes one permutation per key.
///
/// An entry is created on the first request for its key and never changes
/// until [`ShuffleCache::clear`]. On a hit the sequence argument is ignored,
/// so callers must keep the input logically invariant per key — or accept the
/// stored ordering.
///
/// The cache is plain session state with no internal locking; multi-threaded
/// hosts serialize access themselves. Create one per session and clear it when
/// a new session starts.
#[derive(Debug, Clone)]
pub struct ShuffleCache<K, T> {
    entries: HashMap<K, Vec<T>>,
}

impl<K, T> Default for ShuffleCache<K, T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash, T: Clone> ShuffleCache<K, T> {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached permutation for `key`, shuffling and storing on first request.
    pub fn get_or_shuffle(&mut self, key: K, items: &[T]) -> &[T] {
        let mut rng = rand::rng();
        self.get_or_shuffle_with_rng(key, items, &mut rng)
    }

    /// `get_or_shuffle` with a caller-supplied RNG.
    pub fn get_or_shuffle_with_rng<R: Rng + ?Sized>(
        &mut self,
        key: K,
        items: &[T],
        rng: &mut R,
    ) -> &[T] {
        self.entries
            .entry(key)
            .or_insert_with(|| {
                debug!("shuffle cache miss, storing {} items", items.len());
                shuffled_with_rng(items, rng)
            })
            .as_slice()
    }

    /// Stored permutation for `key`, if one exists.
    pub fn get(&self, key: &K) -> Option<&[T]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    /// Drop every entry. Clearing an empty cache is a no-op.
    pub fn clear(&mut self) {
        debug!("clearing shuffle cache ({} entries)", self.entries.len());
        self.entries.clear();
    }

    /// Number of cached permutations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn repeated_key_returns_identical_ordering() {
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        let mut cache = ShuffleCache::new();
        let items: Vec<u32> = (0..10).collect();

        let first = cache.get_or_shuffle_with_rng("q1", &items, &mut rng).to_vec();
        let second = cache.get_or_shuffle_with_rng("q1", &items, &mut rng).to_vec();
        assert_eq!(first, second);

        let mut sorted = first;
        sorted.sort_unstable();
        assert_eq!(sorted, items);
    }

    #[test]
    fn hit_ignores_the_sequence_argument() {
        let mut rng = ChaCha8Rng::seed_from_u64(22);
        let mut cache = ShuffleCache::new();

        let first = cache
            .get_or_shuffle_with_rng("q1", &[1, 2, 3], &mut rng)
            .to_vec();
        let stale = cache
            .get_or_shuffle_with_rng("q1", &[7, 8, 9], &mut rng)
            .to_vec();
        assert_eq!(first, stale);
    }

    #[test]
    fn distinct_keys_get_their_own_entries() {
        let mut rng = ChaCha8Rng::seed_from_u64(23);
        let mut cache = ShuffleCache::new();
        let items: Vec<u32> = (0..8).collect();

        cache.get_or_shuffle_with_rng("q1", &items, &mut rng);
        cache.get_or_shuffle_with_rng("q2", &items, &mut rng);
        assert_eq!(cache.len(), 2);

        for key in ["q1", "q2"] {
            let mut stored = cache.get(&key).expect("entry present").to_vec();
            stored.sort_unstable();
            assert_eq!(stored, items);
        }
    }

    #[test]
    fn clear_resets_and_is_idempotent() {
        let mut rng = ChaCha8Rng::seed_from_u64(24);
        let mut cache = ShuffleCache::new();
        cache.get_or_shuffle_with_rng("q1", &[1, 2, 3], &mut rng);
        assert!(!cache.is_empty());

        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.get(&"q1"), None);

        // Clearing an empty cache is a no-op, not an error.
        cache.clear();
        assert!(cache.is_empty());
    }
}
