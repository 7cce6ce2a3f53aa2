//! Weighted sampling without replacement.
//!
//! Orders an entire collection by repeatedly drawing from the remaining pool,
//! where each remaining item's chance is its weight relative to the sum of
//! remaining weights (roulette-wheel selection, a.k.a. successive sampling).
//! The result is a permutation of the input with higher-weight items
//! statistically front-loaded — useful for surfacing missed quiz questions
//! earlier without making the order deterministic.
//!
//! Notes:
//! - `weighted_shuffle_with_rng` exists for deterministic testing/benchmarking.
//! - The draw walk is O(n) per draw, O(n²) total; fine for deck-sized inputs.

use log::debug;
use rand::prelude::*;

/// Weight assumed for items constructed without an explicit weight.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// An item paired with an optional selection weight.
///
/// A missing weight reads as [`DEFAULT_WEIGHT`] through [`Weighted::weight`];
/// that accessor is the only place the fallback lives.
#[derive(Debug, Clone, PartialEq)]
pub struct Weighted<T> {
    item: T,
    weight: Option<f64>,
}

impl<T> Weighted<T> {
    /// Pair an item with an explicit weight.
    pub fn new(item: T, weight: f64) -> Self {
        Self {
            item,
            weight: Some(weight),
        }
    }

    /// Pair an item with the default weight.
    pub fn unweighted(item: T) -> Self {
        Self { item, weight: None }
    }

    /// Effective weight, with missing weights normalized to [`DEFAULT_WEIGHT`].
    #[inline]
    pub fn weight(&self) -> f64 {
        self.weight.unwrap_or(DEFAULT_WEIGHT)
    }

    /// Borrow the wrapped item.
    pub fn item(&self) -> &T {
        &self.item
    }

    /// Unwrap the item, discarding the weight.
    pub fn into_item(self) -> T {
        self.item
    }
}

/// Errors for weighted sampling.
#[derive(Debug, Clone, PartialEq)]
pub enum WeightError {
    /// A weight is not finite (NaN/inf).
    NonFinite(f64),
    /// A weight is negative.
    Negative(f64),
    /// The input is non-empty but its weights sum to zero.
    ZeroTotal,
}

impl std::fmt::Display for WeightError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonFinite(w) => write!(f, "weight must be finite (got {w})"),
            Self::Negative(w) => write!(f, "weight must be >= 0 (got {w})"),
            Self::ZeroTotal => write!(f, "total weight must be > 0"),
        }
    }
}

impl std::error::Error for WeightError {}

/// Order all items, drawing without replacement proportionally to weight.
///
/// Returns every input item exactly once. Fails fast on non-finite or
/// negative weights, and on a non-empty input whose weights sum to zero.
#[inline]
pub fn weighted_shuffle<T>(items: Vec<Weighted<T>>) -> Result<Vec<Weighted<T>>, WeightError> {
    let mut rng = rand::rng();
    weighted_shuffle_with_rng(items, &mut rng)
}

/// Weighted shuffle with a caller-supplied RNG.
pub fn weighted_shuffle_with_rng<T, R: Rng + ?Sized>(
    mut items: Vec<Weighted<T>>,
    rng: &mut R,
) -> Result<Vec<Weighted<T>>, WeightError> {
    let mut total = 0.0;
    for entry in &items {
        let weight = entry.weight();
        if !weight.is_finite() {
            return Err(WeightError::NonFinite(weight));
        }
        if weight < 0.0 {
            return Err(WeightError::Negative(weight));
        }
        total += weight;
    }
    if !items.is_empty() && total <= 0.0 {
        return Err(WeightError::ZeroTotal);
    }

    let mut out = Vec::with_capacity(items.len());
    while !items.is_empty() {
        if total <= 0.0 {
            // Only zero-weight items remain; their relative order carries no
            // signal, so they drain in input order.
            debug!("{} zero-weight items drained in input order", items.len());
            out.append(&mut items);
            break;
        }

        let mut draw = rng.random_range(0.0..total);
        // The last-item fallback absorbs floating-point drift in the walk.
        let mut pick = items.len() - 1;
        for (i, entry) in items.iter().enumerate() {
            draw -= entry.weight();
            if draw < 0.0 {
                pick = i;
                break;
            }
        }

        let chosen = items.remove(pick);
        total -= chosen.weight();
        out.push(chosen);
    }

    Ok(out)
}
