use alloc::vec::Vec;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Seeded source of uniform sampling without replacement.
#[derive(Clone, Debug)]
pub struct Sampler {
    rng: SmallRng,
}

impl Sampler {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Picks `amount` distinct positions of `items`, never more than there are items.
    pub fn pick<T: Clone>(&mut self, items: &[T], amount: usize) -> Vec<T> {
        let amount = amount.min(items.len());
        if amount < items.len() {
            log::trace!("sampling {} out of {}", amount, items.len());
        }
        rand::seq::index::sample(&mut self.rng, items.len(), amount)
            .into_iter()
            .map(|i| items[i].clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeSet;

    #[test]
    fn picks_distinct_items_from_the_pool() {
        let pool: Vec<u32> = (0..100).collect();
        let mut sampler = Sampler::new(7);

        let picked = sampler.pick(&pool, 6);

        assert_eq!(picked.len(), 6);
        assert_eq!(picked.iter().collect::<BTreeSet<_>>().len(), 6);
        assert!(picked.iter().all(|item| pool.contains(item)));
    }

    #[test]
    fn never_picks_more_than_available() {
        let mut sampler = Sampler::new(7);

        let picked = sampler.pick(&[1, 2, 3], 5);

        assert_eq!(picked.into_iter().collect::<BTreeSet<_>>(), BTreeSet::from([1, 2, 3]));
        assert!(sampler.pick::<u8>(&[], 5).is_empty());
    }

    #[test]
    fn same_seed_same_picks() {
        let pool: Vec<u32> = (0..100).collect();

        assert_eq!(
            Sampler::new(42).pick(&pool, 6),
            Sampler::new(42).pick(&pool, 6)
        );
    }
}
