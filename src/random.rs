//! Injectable randomness for the tarot draw.

use rand::Rng;

/// Source of uniformly distributed indices.
#[cfg_attr(test, mockall::automock)]
pub trait IndexSource {
    /// Returns an index in `0..upper`. `upper` of zero yields zero.
    fn pick(&mut self, upper: usize) -> usize;
}

/// Process-wide thread RNG. No seeding contract.
#[derive(Debug, Default)]
pub struct ThreadRngSource;

impl IndexSource for ThreadRngSource {
    fn pick(&mut self, upper: usize) -> usize {
        if upper == 0 {
            return 0;
        }
        rand::thread_rng().gen_range(0..upper)
    }
}
