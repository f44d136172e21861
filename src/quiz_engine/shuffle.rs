use rand::Rng;

/// Return a shuffled copy of `items`, leaving the input untouched.
pub fn shuffled<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    shuffle_in_place(&mut out, rng);
    out
}

/// Fisher-Yates shuffle.
pub fn shuffle_in_place<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn shuffle_keeps_every_element() {
        let mut rng = StdRng::seed_from_u64(42);
        let input: Vec<u32> = (0..50).collect();
        let mut out = shuffled(&input, &mut rng);
        assert_eq!(input, (0..50).collect::<Vec<_>>(), "input must not change");
        out.sort_unstable();
        assert_eq!(out, input);
    }

    #[test]
    fn shuffle_is_deterministic_with_seed() {
        let run = |seed: u64| -> Vec<u32> {
            let mut rng = StdRng::seed_from_u64(seed);
            shuffled(&(0..20).collect::<Vec<_>>(), &mut rng)
        };
        assert_eq!(run(99), run(99));
        assert_ne!(run(99), run(100));
    }

    #[test]
    fn empty_and_single_slices_are_fine() {
        let mut rng = StdRng::seed_from_u64(1);
        let empty: Vec<u8> = Vec::new();
        assert!(shuffled(&empty, &mut rng).is_empty());
        assert_eq!(shuffled(&[7u8], &mut rng), vec![7]);
    }
}
