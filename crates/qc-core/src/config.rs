//! Configuration for a quiz session.

use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;

/// How long the celebration stays up after a correct answer.
pub const DEFAULT_CELEBRATION: Duration = Duration::from_secs(3);

/// Configuration for a quiz session.
#[derive(Debug, Clone)]
pub struct QuizConfig {
    /// RNG seed for reproducible question order. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Duration of the celebration effect.
    pub celebration: Duration,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            seed: None,
            celebration: DEFAULT_CELEBRATION,
        }
    }
}

impl QuizConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the celebration duration.
    pub fn with_celebration(mut self, duration: Duration) -> Self {
        self.celebration = duration;
        self
    }

    /// Build the random source described by this config.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
