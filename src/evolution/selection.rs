//! Fitness-proportionate parent selection.

use rand::Rng;

/// Selects an index with probability proportional to its weight.
///
/// Weights are raw fitness values: always positive, but possibly
/// vanishingly small for heavily penalized candidates. Sampling is with
/// replacement — callers draw twice to pick a parent pair, and the same
/// individual can be both parents.
///
/// # Panics
/// Panics if `weights` is empty.
pub fn select_weighted<R: Rng>(weights: &[f64], rng: &mut R) -> usize {
    assert!(!weights.is_empty(), "cannot select from empty population");

    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return rng.random_range(0..weights.len());
    }

    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if cumulative > threshold {
            return i;
        }
    }

    weights.len() - 1 // floating-point fallback
}
