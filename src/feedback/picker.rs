use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Chooses one phrase out of a non-empty candidate list.
pub trait PhrasePicker {
    fn pick(&mut self, phrases: &[&'static str]) -> &'static str;
}

/// Uniform choice with replacement.
#[derive(Debug, Clone)]
pub struct RandomPicker {
    rng: StdRng,
}

impl RandomPicker {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sequence of picks.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPicker {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl PhrasePicker for RandomPicker {
    fn pick(&mut self, phrases: &[&'static str]) -> &'static str {
        phrases.choose(&mut self.rng).copied().unwrap_or_default()
    }
}

/// Always the first candidate.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstPicker;

impl PhrasePicker for FirstPicker {
    fn pick(&mut self, phrases: &[&'static str]) -> &'static str {
        phrases.first().copied().unwrap_or_default()
    }
}
