//! Xorshift1024* random number generator
//!
//! Vigna's xorshift1024* (<http://arxiv.org/abs/1402.6246>): a 1024-bit
//! xorshift state scrambled by a 64-bit multiplication.
//!
//! # Algorithm
//!
//! - Period 2^1024 - 1
//! - 64-bit outputs, 16-dimensionally equidistributed
//! - Passes TestU01's BigCrush
//!
//! Callers always receive the most-significant bits of the scrambled word;
//! the low bits of the product are the weakest.
//!
//! # Determinism
//!
//! Same seed → same state vector → same sequence of random numbers.

use tracing::trace;

use super::bits::{AdapterCache, BitsStreamGenerator64, WORD_BITS};
use super::seed::Seed;
use crate::checkpoint::{CheckpointError, GeneratorSnapshot};
use crate::core::time::{SeedClock, TimeSeeder};

/// State bit count of this generator
const STATE_BITS: usize = 1024;

/// Word count of state bits
const STATE_WORDS: usize = STATE_BITS / WORD_BITS as usize;

/// Output scrambling multiplier (odd)
const MULTIPLIER: u64 = 1181783497276652981;

/// Placeholder state occupied before the first seeding
const INIT_STATE: [u64; STATE_WORDS] = [
    0x3abb6677_af34ac57, 0xc0ca5828_fd94f9d8, 0x86c26ce5_9a8ce60e, 0xcf677807_9423dccf,
    0xf1d6f19c_b655805d, 0x56098e6d_38a1a710, 0xdee59523_eed7511e, 0x5a9e4b8c_cb3a4686,
    0x63e22ec2_fbeebabf, 0x005e58fb_fb0eee60, 0x7c4aa417_045a68a0, 0xcc63767b_048e3559,
    0x268d35e7_2f367d3b, 0x2dbd5dbd_df12fc43, 0x97762ba1_49260b37, 0x95a03917_13bddcd7,
];

/// Xorshift1024* generator
///
/// # Example
/// ```
/// use xorshift_generator::{BitsStreamGenerator64, XorShift1024Star};
///
/// let mut rng = XorShift1024Star::new(1i64);
/// assert_eq!(rng.next_long(), -6731447495507462773);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct XorShift1024Star {
    /// State words
    state: [u64; STATE_WORDS],
    /// Index of the word consumed by the next step
    index: usize,
    /// Pending half-values of paired draws
    cache: AdapterCache,
}

impl XorShift1024Star {
    /// Create a generator seeded with any accepted seed form
    ///
    /// # Example
    /// ```
    /// use xorshift_generator::{BitsStreamGenerator64, XorShift1024Star};
    ///
    /// let from_int = XorShift1024Star::new(7i32);
    /// let from_long = XorShift1024Star::new(7i64);
    /// assert_eq!(from_int.state(), from_long.state());
    /// ```
    pub fn new<S: Into<Seed>>(seed: S) -> Self {
        let mut rng = Self::unseeded();
        rng.set_seed(seed);
        rng
    }

    /// Create a generator seeded from the time source
    pub fn from_time<C: SeedClock>(seeder: &TimeSeeder<C>) -> Self {
        let mut rng = Self::unseeded();
        rng.set_time_seed(seeder);
        rng
    }

    /// Create a generator whose state is exactly `words`
    ///
    /// Shorter vectors leave the trailing placeholder words in place.
    pub fn from_state(words: &[u64]) -> Self {
        let mut rng = Self::unseeded();
        rng.set_state(words);
        rng
    }

    /// Generator holding the placeholder state; callers must seed it
    pub(crate) fn unseeded() -> Self {
        Self {
            state: INIT_STATE,
            index: 0,
            cache: AdapterCache::new(),
        }
    }

    /// Advance the state one step and return the scrambled 64-bit word
    ///
    /// This is the only state mutator apart from seeding and state injection.
    pub fn advance(&mut self) -> u64 {
        let mut s0 = self.state[self.index];
        self.index = (self.index + 1) % STATE_WORDS;
        let mut s1 = self.state[self.index];
        s1 ^= s1 << 31;
        s1 ^= s1 >> 11;
        s0 ^= s0 >> 30;
        self.state[self.index] = s0 ^ s1;
        self.state[self.index].wrapping_mul(MULTIPLIER)
    }

    /// Index of the next state word to be consumed
    pub fn state_index(&self) -> usize {
        self.index
    }

    /// Capture the complete generator state, including cached half-values
    pub fn snapshot(&self) -> GeneratorSnapshot {
        GeneratorSnapshot::new(
            self.state.to_vec(),
            self.index,
            self.cache.spare_int(),
            self.cache.spare_gaussian(),
        )
    }

    /// Reinstate a snapshot taken with [`snapshot`](Self::snapshot)
    ///
    /// The snapshot is validated first; on error the generator is unchanged.
    pub fn restore(&mut self, snapshot: &GeneratorSnapshot) -> Result<(), CheckpointError> {
        snapshot.validate(STATE_WORDS)?;
        self.state.copy_from_slice(&snapshot.state);
        self.index = snapshot.index;
        self.cache = AdapterCache::with_spares(snapshot.spare_int, snapshot.spare_gaussian);
        trace!(index = self.index, "restored generator snapshot");
        Ok(())
    }
}

impl BitsStreamGenerator64 for XorShift1024Star {
    const STATE_WORDS: usize = STATE_WORDS;

    fn next_bits(&mut self, bits: u32) -> u64 {
        self.advance() >> (WORD_BITS - bits)
    }

    fn adapter_cache(&mut self) -> &mut AdapterCache {
        &mut self.cache
    }

    /// Copy `words` over the state, left to right
    ///
    /// Words past the 16th are ignored. A shorter vector only overwrites the
    /// matching prefix and the remaining words keep their previous values,
    /// so use [`set_seed`](BitsStreamGenerator64::set_seed) for seeding. An
    /// all-zero vector yields the degenerate all-zero state.
    fn set_state(&mut self, words: &[u64]) {
        let len = words.len().min(STATE_WORDS);
        self.state[..len].copy_from_slice(&words[..len]);
        self.index = 0;
        self.cache.clear();
        trace!(words = len, "state injected");
    }

    fn state(&self) -> Vec<u64> {
        self.state.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_wraps_after_full_cycle() {
        let mut rng = XorShift1024Star::new(12345i64);
        let start = rng.state_index();

        let mut seen = Vec::new();
        for _ in 0..STATE_WORDS {
            rng.advance();
            seen.push(rng.state_index());
        }

        assert_eq!(rng.state_index(), start);
        seen.sort_unstable();
        assert_eq!(seen, (0..STATE_WORDS).collect::<Vec<_>>());
    }

    #[test]
    fn test_next_bits_takes_top_bits() {
        let mut a = XorShift1024Star::new(99i64);
        let mut b = a.clone();

        let word = a.advance();
        assert_eq!(b.next_bits(13), word >> 51);
    }

    #[test]
    fn test_short_state_keeps_suffix() {
        let mut rng = XorShift1024Star::new(5i64);
        let before = rng.state();

        rng.set_state(&[1, 2, 3]);
        let after = rng.state();

        assert_eq!(&after[..3], &[1, 2, 3]);
        assert_eq!(&after[3..], &before[3..]);
        assert_eq!(rng.state_index(), 0);
    }

    #[test]
    fn test_long_state_truncated() {
        let words: Vec<u64> = (1..=20).collect();
        let rng = XorShift1024Star::from_state(&words);
        assert_eq!(rng.state(), (1..=16).collect::<Vec<u64>>());
    }

    #[test]
    fn test_zero_state_is_fixed_point() {
        let mut rng = XorShift1024Star::from_state(&[0; STATE_WORDS]);
        for _ in 0..32 {
            assert_eq!(rng.next_long(), 0);
        }
    }

    #[test]
    fn test_state_is_a_copy() {
        let mut rng = XorShift1024Star::new(3i64);
        let mut snapshot = rng.state();
        snapshot[0] ^= u64::MAX;

        assert_ne!(rng.state()[0], snapshot[0]);
        rng.next_long();
        assert_ne!(rng.state(), snapshot);
    }

    #[test]
    fn test_seeding_replaces_placeholder() {
        let rng = XorShift1024Star::new(0i64);
        assert_ne!(rng.state(), INIT_STATE.to_vec());
    }

    #[test]
    fn test_state_ones_near_half() {
        let rng = XorShift1024Star::new(42i64);
        let ones = rng.state_ones();
        assert!(ones > 0.35 && ones < 0.65, "unexpected bit density {}", ones);
    }
}
