//! Injected randomness for CPU decisions.

use crate::types::Mark;
use rand::Rng;

/// Source of randomness for the CPU opponent.
///
/// Passed into the [`SessionController`](crate::SessionController) as a
/// capability so tests can script choices deterministically instead of
/// patching global state. Any [`rand::Rng`] works out of the box through the
/// blanket impl; production code passes `rand::rng()`.
pub trait Randomness {
    /// Uniform choice between the two marks.
    fn mark(&mut self) -> Mark;

    /// Uniform index into `len` candidates. `len` is nonzero.
    fn index(&mut self, len: usize) -> usize;
}

impl<R: Rng> Randomness for R {
    fn mark(&mut self) -> Mark {
        if self.random_bool(0.5) { Mark::X } else { Mark::O }
    }

    fn index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_rng_index_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            assert!(rng.index(9) < 9);
        }
    }

    #[test]
    fn test_rng_mark_produces_both_marks() {
        let mut rng = StdRng::seed_from_u64(7);
        let marks: Vec<Mark> = (0..100).map(|_| rng.mark()).collect();
        assert!(marks.contains(&Mark::X));
        assert!(marks.contains(&Mark::O));
    }
}
