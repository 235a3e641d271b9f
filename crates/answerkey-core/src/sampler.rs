//! Bell-curve error count sampling.
//!
//! Error counts are drawn from a normal distribution centred on half the
//! ceiling with a quarter-ceiling standard deviation, rounded and truncated
//! to `[0, max_errors]` by rejection.

use rand::Rng;
use rand_distr::StandardNormal;

/// Draws per-student error targets in `[0, max_errors]`.
#[derive(Debug, Clone)]
pub struct ErrorSampler {
    max_errors: u32,
    mean: f64,
    std_dev: f64,
}

impl ErrorSampler {
    pub fn new(max_errors: u32) -> Self {
        let max = f64::from(max_errors);
        Self {
            max_errors,
            mean: max / 2.0,
            std_dev: max / 4.0,
        }
    }

    pub fn max_errors(&self) -> u32 {
        self.max_errors
    }

    /// Draw one error target.
    ///
    /// A zero ceiling returns 0 without drawing, since a zero-spread normal
    /// is degenerate. Otherwise retries are unbounded; about 95% of draws
    /// land inside the range.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        if self.max_errors == 0 {
            return 0;
        }
        let max = f64::from(self.max_errors);
        loop {
            let z: f64 = rng.sample(StandardNormal);
            let draw = (self.mean + self.std_dev * z).round();
            if (0.0..=max).contains(&draw) {
                return draw as u32;
            }
        }
    }
}
