use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const MIN_BPM: u8 = 60;
pub const MAX_BPM: u8 = 100;

/// Anything that can hand out integers in an inclusive range.
pub trait RandomSource {
    fn next_in_range(&mut self, low: u8, high: u8) -> u8;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_in_range(&mut self, low: u8, high: u8) -> u8 {
        (**self).next_in_range(low, high)
    }
}

/// Default source, seeded from the OS.
pub struct EntropySource {
    rng: StdRng,
}

impl EntropySource {
    pub fn new() -> Self {
        EntropySource {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        EntropySource {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for EntropySource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for EntropySource {
    fn next_in_range(&mut self, low: u8, high: u8) -> u8 {
        self.rng.gen_range(low..=high)
    }
}

pub fn measure_heartbeat<R: RandomSource + ?Sized>(source: &mut R) -> u8 {
    source.next_in_range(MIN_BPM, MAX_BPM)
}
