/// Deterministic shuffling.
///
/// A Fisher–Yates pass driven by a seeded generator: for each position
/// from the back, swap with an index drawn from the generator's next
/// value. Uniform over permutations and reproducible for a given seed,
/// unlike passing random comparators to a sort, which biases the result
/// toward the underlying sort algorithm's comparison pattern.
use crate::rng::Entropy;

/// Permute `items` in place using `entropy`.
///
/// With `Entropy::Seeded` the permutation is a pure function of the seed
/// and the slice length.
pub fn shuffle<T>(items: &mut [T], entropy: &mut Entropy) {
    for i in (1..items.len()).rev() {
        let j = (entropy.next_f64() * (i as f64 + 1.0)) as usize;
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shuffled(n: usize, seed: u32) -> Vec<usize> {
        let mut items: Vec<usize> = (0..n).collect();
        shuffle(&mut items, &mut Entropy::seeded(seed));
        items
    }

    #[test]
    fn test_known_permutations() {
        // Pinned outputs: these change only if the generator or the
        // Fisher-Yates indexing changes.
        assert_eq!(shuffled(10, 5), vec![0, 9, 4, 7, 3, 1, 6, 8, 2, 5]);
        assert_eq!(shuffled(10, 6), vec![4, 6, 1, 3, 8, 9, 5, 2, 7, 0]);
        assert_eq!(shuffled(2, 6), vec![1, 0]);
        assert_eq!(shuffled(4, 7), vec![1, 3, 0, 2]);
    }

    #[test]
    fn test_same_seed_reproduces() {
        assert_eq!(shuffled(10, 42), shuffled(10, 42));
    }

    #[test]
    fn test_different_seeds_differ() {
        assert_ne!(shuffled(10, 5), shuffled(10, 6));
    }

    #[test]
    fn test_output_is_permutation() {
        let mut out = shuffled(50, 123);
        out.sort_unstable();
        assert_eq!(out, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_degenerate_lengths() {
        let mut empty: Vec<u8> = vec![];
        shuffle(&mut empty, &mut Entropy::seeded(1));
        assert!(empty.is_empty());

        let mut single = vec![9];
        shuffle(&mut single, &mut Entropy::seeded(1));
        assert_eq!(single, vec![9]);
    }

    #[test]
    fn test_unseeded_is_still_permutation() {
        let mut items: Vec<usize> = (0..20).collect();
        shuffle(&mut items, &mut Entropy::Unseeded);
        items.sort_unstable();
        assert_eq!(items, (0..20).collect::<Vec<_>>());
    }
}
