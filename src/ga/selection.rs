//! Roulette-wheel parent selection.
//!
//! # Algorithm
//!
//! 1. Weight each candidate by `1 / cost` (zero cost gets [`ZERO_COST_WEIGHT`]).
//! 2. Subtract `min(weight) / 1.02` from every weight. The weakest candidate
//!    keeps a sliver of probability while the spread between strong and
//!    weak candidates grows.
//! 3. Spin once for the first parent, then spin again over the wheel with
//!    the first parent's slot removed, so the pair is always distinct.
//!
//! # Reference
//! Goldberg (1989), "Genetic Algorithms in Search, Optimization and
//! Machine Learning", Ch. 1 (fitness-proportionate selection)

use rand::Rng;

/// Weight of a zero-cost candidate. Any positive integer cost has weight ≤ 1.
pub const ZERO_COST_WEIGHT: f64 = 1.0e6;

/// Divisor applied to the minimum weight before it is subtracted.
pub const CONTRAST_FACTOR: f64 = 1.02;

/// Adjusted wheel weights for a list of costs (lower cost = larger weight).
///
/// Every weight is strictly positive for a non-empty input.
pub fn selection_weights(costs: &[u64]) -> Vec<f64> {
    let raw: Vec<f64> = costs
        .iter()
        .map(|&c| {
            if c == 0 {
                ZERO_COST_WEIGHT
            } else {
                1.0 / c as f64
            }
        })
        .collect();
    let min = raw.iter().copied().fold(f64::INFINITY, f64::min);
    let offset = min / CONTRAST_FACTOR;
    raw.into_iter().map(|w| w - offset).collect()
}

/// Spins the wheel once, skipping `excluded`.
fn spin<R: Rng>(weights: &[f64], excluded: Option<usize>, rng: &mut R) -> usize {
    let slots = || {
        weights
            .iter()
            .copied()
            .enumerate()
            .filter(move |(i, _)| Some(*i) != excluded)
    };
    let total: f64 = slots().map(|(_, w)| w).sum();
    let pick = rng.random_range(0.0..total);

    let mut cumulative = 0.0;
    let mut last = 0;
    for (i, w) in slots() {
        cumulative += w;
        last = i;
        if cumulative > pick {
            return i;
        }
    }
    // rounding left `pick` at the very top of the wheel
    last
}

/// Draws two distinct candidate indices, favouring low cost.
///
/// Returns `None` when fewer than two candidates exist.
///
/// # Example
/// ```
/// use u_roster::ga::roulette_select;
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
///
/// let mut rng = SmallRng::seed_from_u64(1);
/// let (a, b) = roulette_select(&[120, 40, 3000], &mut rng).unwrap();
/// assert_ne!(a, b);
/// ```
pub fn roulette_select<R: Rng>(costs: &[u64], rng: &mut R) -> Option<(usize, usize)> {
    if costs.len() < 2 {
        return None;
    }
    let weights = selection_weights(costs);
    let first = spin(&weights, None, rng);
    let second = spin(&weights, Some(first), rng);
    Some((first, second))
}
