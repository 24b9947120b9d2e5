//! Fisher–Yates shuffle

use rand::Rng;

/// Uniformly permute `items` in place
pub fn fisher_yates<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut items: Vec<u32> = (0..16).collect();
        fisher_yates(&mut items, &mut rng);

        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..16).collect::<Vec<_>>());
    }

    #[test]
    fn shuffle_is_deterministic_per_seed() {
        let mut a: Vec<u32> = (0..16).collect();
        let mut b = a.clone();
        fisher_yates(&mut a, &mut StdRng::seed_from_u64(42));
        fisher_yates(&mut b, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn shuffle_handles_tiny_slices() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut empty: Vec<u8> = Vec::new();
        fisher_yates(&mut empty, &mut rng);
        let mut one = vec![9];
        fisher_yates(&mut one, &mut rng);
        assert_eq!(one, vec![9]);
    }

    #[test]
    fn shuffle_moves_things_eventually() {
        let original: Vec<u32> = (0..16).collect();
        let mut rng = StdRng::seed_from_u64(3);
        let changed = (0..10).any(|_| {
            let mut items = original.clone();
            fisher_yates(&mut items, &mut rng);
            items != original
        });
        assert!(changed);
    }
}
