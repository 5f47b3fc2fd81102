use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Produces the benchmark input families. Owns its random generator so a
/// fixed seed reproduces the exact same base arrays.
pub struct ArrayGenerator {
    rng: StdRng,
}

impl ArrayGenerator {
    pub fn new(seed: u64) -> ArrayGenerator {
        ArrayGenerator {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> ArrayGenerator {
        ArrayGenerator {
            rng: StdRng::from_entropy(),
        }
    }

    /// `size` independent uniform draws from `[low, high]`.
    pub fn from_range(&mut self, size: usize, low: i32, high: i32) -> Vec<i32> {
        (0..size).map(|_| self.rng.gen_range(low..=high)).collect()
    }

    /// Uniform draws sorted into non-increasing order, the worst case for
    /// algorithms expecting ascending runs.
    pub fn reversed(&mut self, size: usize, low: i32, high: i32) -> Vec<i32> {
        let mut result = self.from_range(size, low, high);
        result.sort_unstable_by(|a, b| b.cmp(a));
        result
    }

    /// Ascending sequence perturbed by `swaps` random index-pair swaps.
    /// Indices are drawn uniformly, so self-swaps may leave it untouched.
    pub fn almost_sorted(&mut self, size: usize, low: i32, high: i32, swaps: usize) -> Vec<i32> {
        let mut result = self.from_range(size, low, high);
        result.sort_unstable();
        if result.is_empty() {
            return result;
        }
        for _ in 0..swaps {
            let a = self.rng.gen_range(0..size);
            let b = self.rng.gen_range(0..size);
            result.swap(a, b);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reversed_is_non_increasing() {
        let mut generator = ArrayGenerator::new(12345);
        let arr = generator.reversed(5, 0, 100);
        assert_eq!(arr.len(), 5);
        assert!(arr.windows(2).all(|w| w[0] >= w[1]));
        assert!(arr.iter().all(|&v| (0..=100).contains(&v)));
    }

    #[test]
    fn almost_sorted_without_swaps_is_ascending() {
        let mut generator = ArrayGenerator::new(12345);
        let arr = generator.almost_sorted(100, 0, 1000, 0);
        assert_eq!(arr.len(), 100);
        assert!(arr.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn empty_arrays_are_allowed() {
        let mut generator = ArrayGenerator::new(12345);
        assert!(generator.from_range(0, 0, 10).is_empty());
        assert!(generator.reversed(0, 0, 10).is_empty());
        assert!(generator.almost_sorted(0, 0, 10, 5).is_empty());
    }

    #[test]
    fn values_stay_in_range() {
        let mut generator = ArrayGenerator::new(12345);
        let arr = generator.from_range(1_000, -50, 50);
        assert!(arr.iter().all(|&v| (-50..=50).contains(&v)));
    }

    #[test]
    fn same_seed_reproduces_arrays() {
        let mut a = ArrayGenerator::new(42);
        let mut b = ArrayGenerator::new(42);
        assert_eq!(a.from_range(100, 0, 6000), b.from_range(100, 0, 6000));
    }
}
