//! Bit adapter layer for 64-bit generators
//!
//! A generator only has to say how to produce the top `bits` bits of its next
//! raw 64-bit word. Everything else (ints, longs, bounded draws, floats,
//! doubles, Gaussians, bytes and every seeding path) is derived here.
//!
//! # Primitive budget
//!
//! - `next_long`, `next_double`, `next_float`: one raw word each
//! - `next_int`: one raw word per *two* calls (high half first, low half cached)
//! - `next_gaussian`: two doubles per *two* calls (second sample cached)
//! - `next_bounded_long`: one raw word per draw, expected ≤ 2 draws

use sha2::Sha512;
use tracing::{debug, trace};

use super::seed::{hash_seed, sine_seed, Seed};
use super::RandomError;
use crate::core::time::{SeedClock, TimeSeeder};

/// Bit size of generator words
pub const WORD_BITS: u32 = 64;

/// 2^-53, scales 53 raw bits into [0, 1)
const DOUBLE_UNIT: f64 = 1.0 / (1u64 << 53) as f64;

/// 2^-24, scales 24 raw bits into [0, 1)
const FLOAT_UNIT: f32 = 1.0 / (1u32 << 24) as f32;

/// Half-values left over from paired draws
///
/// Each slot is either empty or holds exactly one pending value. Both slots
/// are emptied whenever the generator is reseeded or its state is injected.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AdapterCache {
    /// Low 32 bits of the last word split by `next_int`
    spare_int: Option<i32>,
    /// Second sample of the last Box–Muller pair
    spare_gaussian: Option<f64>,
}

impl AdapterCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a cache from previously captured half-values
    pub fn with_spares(spare_int: Option<i32>, spare_gaussian: Option<f64>) -> Self {
        Self {
            spare_int,
            spare_gaussian,
        }
    }

    /// Drop both pending half-values
    pub fn clear(&mut self) {
        self.spare_int = None;
        self.spare_gaussian = None;
    }

    pub fn spare_int(&self) -> Option<i32> {
        self.spare_int
    }

    pub fn spare_gaussian(&self) -> Option<f64> {
        self.spare_gaussian
    }

    pub fn is_empty(&self) -> bool {
        self.spare_int.is_none() && self.spare_gaussian.is_none()
    }
}

/// 64-bit bit-stream generator
///
/// Implementors provide [`next_bits`](Self::next_bits), access to their
/// [`AdapterCache`] and raw state exchange. All typed outputs and all seeding
/// entry points are provided methods.
///
/// # Example
/// ```
/// use xorshift_generator::{BitsStreamGenerator64, XorShift1024Star};
///
/// let mut rng = XorShift1024Star::new(12345i64);
/// let roll = rng.next_bounded_long(6).unwrap() + 1;
/// assert!((1..=6).contains(&roll));
/// ```
pub trait BitsStreamGenerator64 {
    /// Number of 64-bit words in the generator state
    const STATE_WORDS: usize;

    /// Produce the most-significant `bits` (1..=64) bits of the next raw word
    fn next_bits(&mut self, bits: u32) -> u64;

    /// Mutable access to the paired-value cache
    fn adapter_cache(&mut self) -> &mut AdapterCache;

    /// Overwrite state words from `words`, reset the state index and clear
    /// the adapter cache
    fn set_state(&mut self, words: &[u64]);

    /// Copy of the current state words
    fn state(&self) -> Vec<u64>;

    /// Reset the int-half and Gaussian caches
    fn clear(&mut self) {
        self.adapter_cache().clear();
    }

    /// Uniform 64-bit value, one raw word verbatim
    fn next_long(&mut self) -> i64 {
        self.next_bits(WORD_BITS) as i64
    }

    /// Uniform 32-bit value
    ///
    /// Splits one raw word into two ints: the high half is returned at once,
    /// the low half is returned by the following call.
    fn next_int(&mut self) -> i32 {
        if let Some(low) = self.adapter_cache().spare_int.take() {
            return low;
        }
        let word = self.next_long();
        self.adapter_cache().spare_int = Some(word as i32);
        (word >> 32) as i32
    }

    /// Top `bits` (1..=32) bits of the next 32-bit value
    fn next_bits32(&mut self, bits: u32) -> u32 {
        (self.next_int() as u32) >> (32 - bits)
    }

    /// Uniform boolean
    fn next_boolean(&mut self) -> bool {
        self.next_bits32(1) != 0
    }

    /// Uniform value in `[0, n)`
    ///
    /// Powers of two scale 31 random bits directly; other bounds use
    /// rejection sampling so no residue is favoured.
    ///
    /// # Errors
    /// [`RandomError::NotPositiveInput`] if `n <= 0`.
    fn next_bounded_int(&mut self, n: i32) -> Result<i32, RandomError> {
        if n <= 0 {
            return Err(RandomError::NotPositiveInput(i64::from(n)));
        }
        if (n as u32).is_power_of_two() {
            let bits = i64::from(self.next_bits32(31));
            return Ok(((i64::from(n) * bits) >> 31) as i32);
        }
        loop {
            let bits = self.next_bits32(31) as i32;
            let val = bits % n;
            // Negative means the draw fell in the incomplete last block
            if (bits - val).wrapping_add(n - 1) >= 0 {
                return Ok(val);
            }
        }
    }

    /// Uniform value in `[0, n)` using one raw word per draw
    ///
    /// # Errors
    /// [`RandomError::NotPositiveInput`] if `n <= 0`.
    fn next_bounded_long(&mut self, n: i64) -> Result<i64, RandomError> {
        if n <= 0 {
            return Err(RandomError::NotPositiveInput(n));
        }
        loop {
            let bits = self.next_bits(63) as i64;
            let val = bits % n;
            if (bits - val).wrapping_add(n - 1) >= 0 {
                return Ok(val);
            }
        }
    }

    /// Uniform float in `[0, 1)`
    fn next_float(&mut self) -> f32 {
        self.next_bits(24) as f32 * FLOAT_UNIT
    }

    /// Uniform double in `[0, 1)`
    fn next_double(&mut self) -> f64 {
        self.next_bits(53) as f64 * DOUBLE_UNIT
    }

    /// Standard normal sample (Box–Muller)
    ///
    /// Each transform yields two samples; the second is cached and returned
    /// by the next call.
    fn next_gaussian(&mut self) -> f64 {
        if let Some(spare) = self.adapter_cache().spare_gaussian.take() {
            return spare;
        }
        let x = self.next_double();
        let y = self.next_double();
        let alpha = 2.0 * std::f64::consts::PI * x;
        let r = (-2.0 * y.ln()).sqrt();
        self.adapter_cache().spare_gaussian = Some(r * alpha.sin());
        r * alpha.cos()
    }

    /// Fill `bytes` with random data
    ///
    /// Each 32-bit draw supplies four bytes, least-significant first. A
    /// trailing partial group consumes one further draw.
    fn next_bytes(&mut self, bytes: &mut [u8]) {
        let mut chunks = bytes.chunks_exact_mut(4);
        for chunk in &mut chunks {
            chunk.copy_from_slice(&self.next_bits32(32).to_le_bytes());
        }
        let tail = chunks.into_remainder();
        if !tail.is_empty() {
            let random = self.next_bits32(32).to_le_bytes();
            let len = tail.len();
            tail.copy_from_slice(&random[..len]);
        }
    }

    /// Fraction of set bits in the current state
    fn state_ones(&self) -> f64 {
        let ones: u32 = self.state().iter().map(|w| w.count_ones()).sum();
        f64::from(ones) / (WORD_BITS as usize * Self::STATE_WORDS) as f64
    }

    /// Reseed from any supported seed form
    ///
    /// The seed is widened to 64-bit words, expanded through chained SHA-512
    /// digests and installed as the complete state.
    fn set_seed<S: Into<Seed>>(&mut self, seed: S) {
        let seed: Seed = seed.into();
        let words = seed.into_words();
        let state = hash_seed::<Sha512>(&words, Self::STATE_WORDS);
        trace!(seed_words = words.len(), "installing hashed seed");
        self.clear();
        self.set_state(&state);
    }

    /// Reseed from the time source
    fn set_time_seed<C: SeedClock>(&mut self, seeder: &TimeSeeder<C>) {
        let seed = seeder.next_seed();
        debug!(seed, "derived time seed");
        self.set_seed(seed);
    }

    /// Reseed from `seed`, or from the time source when no seed is given
    fn set_seed_or_time<C: SeedClock>(&mut self, seed: Option<Seed>, seeder: &TimeSeeder<C>) {
        match seed {
            Some(seed) => self.set_seed(seed),
            None => self.set_time_seed(seeder),
        }
    }

    /// Reseed through trigonometric mixing instead of hashing
    ///
    /// Consecutive pairs of mixed 32-bit words become one state word, the
    /// first of each pair in the high half.
    ///
    /// # Errors
    /// [`RandomError::InvalidSeed`] if `seed <= 0`; the state is untouched.
    fn set_trigonometric_seed(&mut self, seed: i64) -> Result<(), RandomError> {
        let mixed = sine_seed(seed, Self::STATE_WORDS)?;
        let state: Vec<u64> = mixed
            .chunks_exact(2)
            .take(Self::STATE_WORDS)
            .map(|pair| (u64::from(pair[0] as u32) << 32) | u64::from(pair[1] as u32))
            .collect();
        trace!(seed, "installing trigonometric seed");
        self.clear();
        self.set_state(&state);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Replays scripted raw words and counts primitive calls
    struct ScriptedSource {
        words: VecDeque<u64>,
        calls: usize,
        cache: AdapterCache,
    }

    impl ScriptedSource {
        fn new(words: &[u64]) -> Self {
            Self {
                words: words.iter().copied().collect(),
                calls: 0,
                cache: AdapterCache::new(),
            }
        }
    }

    impl BitsStreamGenerator64 for ScriptedSource {
        const STATE_WORDS: usize = 2;

        fn next_bits(&mut self, bits: u32) -> u64 {
            self.calls += 1;
            let word = self.words.pop_front().expect("script exhausted");
            word >> (WORD_BITS - bits)
        }

        fn adapter_cache(&mut self) -> &mut AdapterCache {
            &mut self.cache
        }

        fn set_state(&mut self, words: &[u64]) {
            self.words = words.iter().copied().collect();
            self.cache.clear();
        }

        fn state(&self) -> Vec<u64> {
            self.words.iter().copied().collect()
        }
    }

    #[test]
    fn test_next_int_splits_one_word() {
        let mut src = ScriptedSource::new(&[0x11223344_55667788, 0xdeadbeef_00000001]);

        assert_eq!(src.next_int(), 0x11223344);
        assert_eq!(src.next_int(), 0x55667788);
        assert_eq!(src.calls, 1);

        assert_eq!(src.next_int(), 0xdeadbeef_u32 as i32);
        assert_eq!(src.next_int(), 1);
        assert_eq!(src.calls, 2);
    }

    #[test]
    fn test_set_state_drops_pending_int_half() {
        let mut src = ScriptedSource::new(&[0x11223344_55667788]);
        src.next_int();
        assert_eq!(src.cache.spare_int(), Some(0x55667788));

        src.set_state(&[0xaaaaaaaa_bbbbbbbb]);
        assert_eq!(src.next_int(), 0xaaaaaaaa_u32 as i32);
    }

    #[test]
    fn test_gaussian_pair_uses_two_doubles() {
        let x_word = 0x4000_0000_0000_0000_u64;
        let y_word = 0x2000_0000_0000_0000_u64;
        let mut src = ScriptedSource::new(&[x_word, y_word]);

        let first = src.next_gaussian();
        let second = src.next_gaussian();
        assert_eq!(src.calls, 2);

        let x = (x_word >> 11) as f64 * DOUBLE_UNIT;
        let y = (y_word >> 11) as f64 * DOUBLE_UNIT;
        let r = (-2.0 * y.ln()).sqrt();
        let alpha = 2.0 * std::f64::consts::PI * x;
        assert_eq!(first, r * alpha.cos());
        assert_eq!(second, r * alpha.sin());
    }

    #[test]
    fn test_clear_discards_cached_gaussian() {
        let mut src = ScriptedSource::new(&[1 << 62, 1 << 61, 1 << 60, 1 << 59]);
        src.next_gaussian();
        assert!(src.cache.spare_gaussian().is_some());

        src.clear();
        assert!(src.cache.is_empty());

        // A fresh pair must be computed
        src.next_gaussian();
        assert_eq!(src.calls, 4);
    }

    #[test]
    fn test_bounded_long_redraws_biased_tail() {
        let n = (1_i64 << 62) + 1;
        // First draw lands at n (biased tail), second at 5
        let mut src = ScriptedSource::new(&[(n as u64) << 1, 5 << 1]);

        assert_eq!(src.next_bounded_long(n), Ok(5));
        assert_eq!(src.calls, 2);
    }

    #[test]
    fn test_bounded_rejects_non_positive() {
        let mut src = ScriptedSource::new(&[]);

        assert_eq!(src.next_bounded_long(0), Err(RandomError::NotPositiveInput(0)));
        assert_eq!(src.next_bounded_long(-7), Err(RandomError::NotPositiveInput(-7)));
        assert_eq!(src.next_bounded_int(0), Err(RandomError::NotPositiveInput(0)));
        assert_eq!(src.calls, 0);
    }

    #[test]
    fn test_bounded_int_power_of_two_scales_top_bits() {
        // Top 31 bits of the high half are 0b11 << 29 → 0.75 of the range
        let mut src = ScriptedSource::new(&[0xC0000000_00000000]);
        assert_eq!(src.next_bounded_int(16), Ok(12));
    }

    #[test]
    fn test_next_bytes_little_endian_groups() {
        let mut src = ScriptedSource::new(&[0x11223344_55667788]);
        let mut buf = [0u8; 6];

        src.next_bytes(&mut buf);

        assert_eq!(buf, [0x44, 0x33, 0x22, 0x11, 0x88, 0x77]);
        assert_eq!(src.calls, 1);
    }

    #[test]
    fn test_unit_interval_edges() {
        let mut src = ScriptedSource::new(&[u64::MAX, u64::MAX, 0, 0]);

        assert!(src.next_double() < 1.0);
        assert!(src.next_float() < 1.0);
        assert_eq!(src.next_double(), 0.0);
        assert_eq!(src.next_float(), 0.0);
    }

    #[test]
    fn test_state_ones_fraction() {
        let src = ScriptedSource::new(&[u64::MAX, 0]);
        assert_eq!(src.state_ones(), 0.5);
    }
}
