//! Initial-row generators.
//!
//! Every generator that draws randomness takes the random source as an
//! argument. Nothing here touches process-global RNG state, so a run is
//! reproducible from `(seed, inputs)` alone.

use rand::Rng;
use weft_core::{Neighborhood, State};

/// A row of `width` cells drawn uniformly from the alphabet.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use weft_core::Neighborhood;
/// use weft_engine::random_row;
///
/// let hood = Neighborhood::new(1, 3).unwrap();
/// let row = random_row(hood, 50, &mut ChaCha8Rng::seed_from_u64(9));
/// assert_eq!(row.len(), 50);
/// assert!(row.iter().all(|&s| s < 3));
/// ```
pub fn random_row<R: Rng + ?Sized>(hood: Neighborhood, width: usize, rng: &mut R) -> Vec<State> {
    let states = hood.states();
    (0..width).map(|_| rng.random_range(0..states)).collect()
}

/// A binary row where each cell is 1 with probability `p_one`.
///
/// The classical initial condition for elementary-CA datasets, where the
/// seeding density is swept from sparse to near-solid. `p_one` is clamped
/// to `[0, 1]`.
pub fn bernoulli_row<R: Rng + ?Sized>(width: usize, p_one: f64, rng: &mut R) -> Vec<State> {
    let p_one = p_one.clamp(0.0, 1.0);
    (0..width)
        .map(|_| if rng.random::<f64>() < p_one { 1 } else { 0 })
        .collect()
}

/// A row whose cyclic windows contain every pattern of `hood` exactly
/// once: a de Bruijn sequence of order `2r+1` over the alphabet, of
/// length `k^(2r+1)`.
///
/// One evolution step from this row observes the whole rule table, which
/// makes complete identification possible from a two-row trajectory.
/// Practical for geometries whose pattern count fits in memory, the same
/// bound as the rule tables themselves.
pub fn covering_row(hood: Neighborhood) -> Vec<State> {
    de_bruijn(hood.states(), hood.span())
}

/// De Bruijn sequence `B(k, n)` by the recursive necklace construction:
/// concatenating the aperiodic prefixes of Lyndon words in lexicographic
/// order yields a cycle containing every length-`n` word once.
fn de_bruijn(k: u8, n: usize) -> Vec<State> {
    fn extend(t: usize, p: usize, k: u8, n: usize, word: &mut [State], out: &mut Vec<State>) {
        if t > n {
            if n % p == 0 {
                out.extend_from_slice(&word[1..=p]);
            }
            return;
        }
        word[t] = word[t - p];
        extend(t + 1, p, k, n, word, out);
        for state in (word[t - p] + 1)..k {
            word[t] = state;
            extend(t + 1, t, k, n, word, out);
        }
    }

    let mut out = Vec::new();
    let mut word = vec![0; n + 1];
    extend(1, 1, k, n, &mut word, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;
    use weft_core::PatternKey;

    // ── Random rows ─────────────────────────────────────────────

    #[test]
    fn random_row_is_reproducible_from_seed() {
        let hood = Neighborhood::new(2, 4).unwrap();
        let a = random_row(hood, 100, &mut ChaCha8Rng::seed_from_u64(3));
        let b = random_row(hood, 100, &mut ChaCha8Rng::seed_from_u64(3));
        assert_eq!(a, b);
    }

    #[test]
    fn bernoulli_row_extremes_are_constant() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        assert!(bernoulli_row(40, 0.0, &mut rng).iter().all(|&s| s == 0));
        assert!(bernoulli_row(40, 1.0, &mut rng).iter().all(|&s| s == 1));
    }

    #[test]
    fn bernoulli_row_is_binary() {
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        assert!(bernoulli_row(200, 0.5, &mut rng).iter().all(|&s| s <= 1));
    }

    // ── Covering rows ───────────────────────────────────────────

    #[test]
    fn covering_row_binary_fixture() {
        let row = covering_row(Neighborhood::elementary());
        assert_eq!(row, vec![0, 0, 0, 1, 0, 1, 1, 1]);
    }

    #[test]
    fn covering_row_visits_every_pattern_once() {
        for (radius, states) in [(1, 2), (1, 3), (2, 2), (1, 4)] {
            let hood = Neighborhood::new(radius, states).unwrap();
            let row = covering_row(hood);
            assert_eq!(row.len() as u64, hood.pattern_count());
            let keys: HashSet<PatternKey> =
                (0..row.len()).map(|i| hood.window_key(&row, i)).collect();
            assert_eq!(keys.len() as u64, hood.pattern_count());
        }
    }
}
