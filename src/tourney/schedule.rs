//! Pairing schedules.

use crate::core::GameRng;

/// Circle-method round robin for `n` players.
///
/// Returns `m - 1` rounds (`m` is `n` rounded up to even), each a list of
/// disjoint index pairs; over a full schedule every unordered pair meets
/// exactly once. With odd `n` one player sits out each round.
#[must_use]
pub fn round_robin(n: usize) -> Vec<Vec<(usize, usize)>> {
    if n < 2 {
        return Vec::new();
    }
    let m = n + n % 2;
    let mut rounds = Vec::with_capacity(m - 1);
    for r in 0..m - 1 {
        let mut pairs = Vec::with_capacity(m / 2);
        if r < n - 1 {
            pairs.push((r, n - 1));
        }
        for i in 0..m / 2 - 1 {
            let p = (r + i + 1) % (m - 1);
            let q = (m + r - i - 2) % (m - 1);
            if p < n - 1 && q < n - 1 {
                pairs.push((p, q));
            }
        }
        rounds.push(pairs);
    }
    rounds
}

/// One round of random pairings: shuffle the indices and pair adjacent
/// entries. With odd `n` the leftover player sits the round out.
#[must_use]
pub fn random_pairing(n: usize, rng: &mut GameRng) -> Vec<(usize, usize)> {
    let mut order: Vec<usize> = (0..n).collect();
    rng.shuffle(&mut order);
    order
        .chunks_exact(2)
        .map(|pair| (pair[0], pair[1]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn all_pairs(rounds: &[Vec<(usize, usize)>]) -> Vec<(usize, usize)> {
        rounds.iter().flatten().copied().collect()
    }

    #[test]
    fn test_four_players_three_rounds_of_two() {
        let rounds = round_robin(4);
        assert_eq!(rounds.len(), 3);
        for round in &rounds {
            assert_eq!(round.len(), 2);
            let mut seen = HashSet::new();
            for &(a, b) in round {
                assert!(seen.insert(a));
                assert!(seen.insert(b));
            }
        }
        assert_eq!(all_pairs(&rounds).len(), 6);
    }

    #[test]
    fn test_every_unordered_pair_meets_once() {
        for n in 2..=9 {
            let rounds = round_robin(n);
            let mut met = HashSet::new();
            for (a, b) in all_pairs(&rounds) {
                assert_ne!(a, b);
                assert!(a < n && b < n);
                let key = (a.min(b), a.max(b));
                assert!(met.insert(key), "pair {key:?} met twice for n={n}");
            }
            assert_eq!(met.len(), n * (n - 1) / 2);
        }
    }

    #[test]
    fn test_degenerate_pools() {
        assert!(round_robin(0).is_empty());
        assert!(round_robin(1).is_empty());
        assert_eq!(round_robin(2), vec![vec![(0, 1)]]);
    }

    #[test]
    fn test_random_pairing_is_disjoint() {
        let mut rng = GameRng::new(9);
        let pairs = random_pairing(6, &mut rng);
        assert_eq!(pairs.len(), 3);
        let mut seen = HashSet::new();
        for (a, b) in pairs {
            assert!(seen.insert(a));
            assert!(seen.insert(b));
        }
    }

    #[test]
    fn test_random_pairing_odd_pool_has_bye() {
        let mut rng = GameRng::new(9);
        let pairs = random_pairing(5, &mut rng);
        assert_eq!(pairs.len(), 2);
    }
}
