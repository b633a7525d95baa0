//! Deterministic scenario RNG.
//!
//! Synthetic incident sets (demo runs, property-style tests) are drawn from a
//! single seeded `SmallRng`.  The same seed always produces the same scenario,
//! so a failing run can be replayed from its seed alone.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Scenario-level RNG.  Used only from the single control flow driving a run.
pub struct ScenarioRng(SmallRng);

impl ScenarioRng {
    pub fn new(seed: u64) -> Self {
        ScenarioRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Choose a random element from a slice.  `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
