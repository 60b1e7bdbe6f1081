//! Seedable xorshift64 generator for spawn positions.
//! The same seed always produces the same sequence of enemies.

#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Rng {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Uniform integer in `[0, upper_bound)`. Always 0 for an empty range.
    pub fn next_int(&mut self, upper_bound: u32) -> u32 {
        if upper_bound == 0 {
            return 0;
        }
        (self.next_u64() % upper_bound as u64) as u32
    }

    /// Uniform integer in `[0, max]`, both ends included.
    pub fn next_inclusive(&mut self, max: u32) -> u32 {
        match max.checked_add(1) {
            Some(bound) => self.next_int(bound),
            None => self.next_u64() as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = Rng::new(42);
        let mut b = Rng::new(42);
        for _ in 0..10 {
            assert_eq!(a.next_int(1201), b.next_int(1201));
        }
    }

    #[test]
    fn zero_seed_and_empty_range() {
        let mut rng = Rng::new(0);
        assert_eq!(rng.next_int(0), 0);
        assert!(rng.next_int(100) < 100);
    }

    #[test]
    fn inclusive_range_reaches_both_ends() {
        let mut rng = Rng::new(7);
        let draws: Vec<u32> = (0..200).map(|_| rng.next_inclusive(1)).collect();
        assert!(draws.contains(&0));
        assert!(draws.contains(&1));
        assert!(draws.iter().all(|&d| d <= 1));
    }
}
