//! RNG oracle for deterministic random number generation.
//!
//! The battle core never reaches for process-wide randomness. A single
//! [`RngOracle`] handle is owned by the session and threaded through attack
//! rolls, skill dispatch and boss targeting, so a seeded session is a pure
//! function of `(seed, input sequence)`.
//!
//! # Determinism
//!
//! Given the same seed, implementations must produce the same sequence of
//! draws. Seeded replay of a whole battle depends on it.

/// Sequential random source consumed by the battle core.
///
/// These three primitives (plus reseeding) are the entire randomness surface
/// the core depends on.
pub trait RngOracle {
    /// Re-initialize the generator; subsequent draws depend only on `seed`.
    fn set_seed(&mut self, seed: u64);

    /// Next raw 32-bit draw.
    fn next_u32(&mut self) -> u32;

    /// Uniform value in `[min, max]` inclusive. Returns `min` if `min >= max`.
    fn range_inclusive(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        let span = (max as i64 - min as i64 + 1) as u64;
        let offset = (self.next_u32() as u64) % span;
        (min as i64 + offset as i64) as i32
    }

    /// Uniform index into a collection of `len` elements.
    fn choose_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.next_u32() as usize % len)
    }

    /// Uniform pick from a slice.
    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        self.choose_index(items.len()).map(|index| &items[index])
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR: 32-bit output from 64-bit state. Same seed, same sequence.
/// For seed `42` the first three outputs are `1971522493`, `242089394`,
/// `3457789919`.
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Creates a generator positioned at `seed`.
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Creates a generator seeded from OS entropy.
    ///
    /// Falls back to a fixed seed if the platform source is unavailable; an
    /// unseeded session only needs to be unpredictable, not secret.
    pub fn from_entropy() -> Self {
        let mut bytes = [0u8; 8];
        match getrandom::getrandom(&mut bytes) {
            Ok(()) => Self::new(u64::from_le_bytes(bytes)),
            Err(err) => {
                tracing::warn!("OS entropy unavailable ({err}), using fallback seed");
                Self::new(0x853c_49e6_748f_ea9b)
            }
        }
    }

    /// Advance the PCG state by one step.
    ///
    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// PCG output function using XSH-RR (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl Default for PcgRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RngOracle for PcgRng {
    fn set_seed(&mut self, seed: u64) {
        tracing::trace!(seed, "rng reseeded");
        self.state = seed;
    }

    fn next_u32(&mut self) -> u32 {
        self.state = Self::pcg_step(self.state);
        Self::pcg_output(self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_sequence_for_seed_42() {
        let mut rng = PcgRng::new(42);
        assert_eq!(rng.next_u32(), 1_971_522_493);
        assert_eq!(rng.next_u32(), 242_089_394);
        assert_eq!(rng.next_u32(), 3_457_789_919);
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = PcgRng::new(7);
        let mut b = PcgRng::new(1);
        b.set_seed(7);
        for _ in 0..100 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn range_inclusive_respects_bounds() {
        let mut rng = PcgRng::new(99);
        let mut seen_min = false;
        let mut seen_max = false;
        for _ in 0..2_000 {
            let value = rng.range_inclusive(20, 30);
            assert!((20..=30).contains(&value));
            seen_min |= value == 20;
            seen_max |= value == 30;
        }
        assert!(seen_min && seen_max);
    }

    #[test]
    fn degenerate_range_returns_min() {
        let mut rng = PcgRng::new(3);
        assert_eq!(rng.range_inclusive(5, 5), 5);
        assert_eq!(rng.range_inclusive(9, 2), 9);
    }

    #[test]
    fn choose_from_empty_is_none() {
        let mut rng = PcgRng::new(3);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
        assert_eq!(rng.choose(&[7]), Some(&7));
    }
}
