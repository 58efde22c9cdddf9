use rand::Rng;

/// Index picker that never repeats until the whole pool has been shown.
///
/// Picks uniformly among the indices not yet used this rotation; once every
/// index has been used, the history resets to just the fresh pick and a new
/// rotation begins. The engine resets it whenever a new round starts.
#[derive(Debug, Clone)]
pub struct RotationSampler {
    pool_len: usize,
    used: Vec<usize>,
}

impl RotationSampler {
    pub fn new(pool_len: usize) -> Self {
        Self {
            pool_len,
            used: Vec::new(),
        }
    }

    /// Forget the rotation history (each round starts its own sequence).
    pub fn reset(&mut self) {
        self.used.clear();
    }

    /// Next index. The pool must be non-empty, which the fixed message
    /// pools always are.
    pub fn pick(&mut self, rng: &mut impl Rng) -> usize {
        let available: Vec<usize> = (0..self.pool_len)
            .filter(|i| !self.used.contains(i))
            .collect();

        if available.is_empty() {
            let chosen = rng.gen_range(0..self.pool_len);
            self.used.clear();
            self.used.push(chosen);
            return chosen;
        }

        let chosen = available[rng.gen_range(0..available.len())];
        self.used.push(chosen);
        chosen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn covers_the_pool_exactly_once_before_any_repeat() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut sampler = RotationSampler::new(15);
        let mut seen: Vec<usize> = (0..15).map(|_| sampler.pick(&mut rng)).collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..15).collect::<Vec<_>>());
    }

    #[test]
    fn exhaustion_starts_a_fresh_rotation_seeded_with_the_new_pick() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut sampler = RotationSampler::new(4);
        for _ in 0..4 {
            sampler.pick(&mut rng);
        }

        let fresh = sampler.pick(&mut rng);
        // Only `fresh` counts as used now, so the next three picks must
        // avoid it and together finish the second rotation.
        let mut rest: Vec<usize> = (0..3).map(|_| sampler.pick(&mut rng)).collect();
        assert!(!rest.contains(&fresh));
        rest.push(fresh);
        rest.sort_unstable();
        assert_eq!(rest, vec![0, 1, 2, 3]);
    }

    #[test]
    fn reset_forgets_history() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut sampler = RotationSampler::new(2);
        sampler.pick(&mut rng);
        sampler.reset();
        // With the history gone, two picks must cover both indices again.
        let mut pair = vec![sampler.pick(&mut rng), sampler.pick(&mut rng)];
        pair.sort_unstable();
        assert_eq!(pair, vec![0, 1]);
    }

    #[test]
    fn single_item_pool_always_yields_that_item() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut sampler = RotationSampler::new(1);
        for _ in 0..5 {
            assert_eq!(sampler.pick(&mut rng), 0);
        }
    }
}
