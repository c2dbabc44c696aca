//! Seed forms and seed expansion
//!
//! Every seed form normalizes to an ordered list of signed 64-bit words,
//! which [`hash_seed`] expands into a full state vector through chained
//! digests. [`sine_seed`] is a non-cryptographic alternative for strictly
//! positive single-word seeds.
//!
//! # Chaining
//!
//! Digest `k` is computed over `digest[k-1] || be64(seed[k])`, or over
//! `digest[k-1]` alone once the seed is exhausted. Repeated seed elements
//! therefore still produce unrelated state words.

use sha2::Digest;

use super::bits::WORD_BITS;
use super::RandomError;
use crate::util::conversion::{bytes_to_long_array, long_to_bytes};

/// Low 32 bits of a 64-bit word
const LSB32_MASK: i64 = 0xffff_ffff;

/// A seed in any of the accepted forms
///
/// Ints widen to longs by value, so `Seed::Int(-3)` and `Seed::Long(-3)`
/// seed identically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Seed {
    Int(i32),
    Ints(Vec<i32>),
    Long(i64),
    Longs(Vec<i64>),
}

impl Seed {
    /// Normalize to 64-bit seed words
    pub fn into_words(self) -> Vec<i64> {
        match self {
            Seed::Int(v) => vec![i64::from(v)],
            Seed::Ints(v) => v.into_iter().map(i64::from).collect(),
            Seed::Long(v) => vec![v],
            Seed::Longs(v) => v,
        }
    }
}

impl From<i32> for Seed {
    fn from(v: i32) -> Self {
        Seed::Int(v)
    }
}

impl From<i64> for Seed {
    fn from(v: i64) -> Self {
        Seed::Long(v)
    }
}

impl From<Vec<i32>> for Seed {
    fn from(v: Vec<i32>) -> Self {
        Seed::Ints(v)
    }
}

impl From<Vec<i64>> for Seed {
    fn from(v: Vec<i64>) -> Self {
        Seed::Longs(v)
    }
}

impl From<&[i32]> for Seed {
    fn from(v: &[i32]) -> Self {
        Seed::Ints(v.to_vec())
    }
}

impl From<&[i64]> for Seed {
    fn from(v: &[i64]) -> Self {
        Seed::Longs(v.to_vec())
    }
}

/// Expand `seed` into `state_words` words using chained digests of `D`
///
/// The number of digests is `(state_bits - 1) / digest_len + 1` where
/// `digest_len` is the digest size in bytes; each digest contributes its
/// leading `digest_len / 8` bytes to the output buffer. Seed words beyond the
/// digest count do not influence the result.
///
/// # Example
/// ```
/// use sha2::Sha512;
/// use xorshift_generator::hash_seed;
///
/// let a = hash_seed::<Sha512>(&[1, 1], 16);
/// let b = hash_seed::<Sha512>(&[1, 1], 16);
/// assert_eq!(a, b);
/// assert_ne!(a[0], a[1]);
/// ```
pub fn hash_seed<D: Digest>(seed: &[i64], state_words: usize) -> Vec<u64> {
    if state_words == 0 {
        return Vec::new();
    }

    let state_bits = state_words * WORD_BITS as usize;
    let digest_len = <D as Digest>::output_size();
    let digest_count = (state_bits - 1) / digest_len + 1;
    let digest_bytes = (digest_len / 8).max(1);

    let mut hashed = vec![0u8; state_words * 8];
    let mut hasher = D::new();
    for s in 0..digest_count {
        if let Some(&word) = seed.get(s) {
            hasher.update(long_to_bytes(word));
        }
        let digest = std::mem::replace(&mut hasher, D::new()).finalize();

        let start = s * digest_bytes;
        if start < hashed.len() {
            let end = (start + digest_bytes).min(hashed.len());
            hashed[start..end].copy_from_slice(&digest[..end - start]);
        }
        hasher.update(&digest);
    }

    // Buffer length is a multiple of 8 by construction
    bytes_to_long_array(&hashed)
        .unwrap_or_default()
        .into_iter()
        .map(|w| w as u64)
        .collect()
}

/// Mix a strictly positive seed through `sin`/`cos` into `2 * state_words + 1`
/// 32-bit words
///
/// The seed's high and low halves select starting indices; word `i` is the
/// low 32 bits of `bits(sin(sin_idx + i + 1)) ^ bits(cos(cos_idx + i + 1))`.
/// Each word is then XORed with its successor.
///
/// # Errors
/// [`RandomError::InvalidSeed`] if `seed <= 0`.
pub fn sine_seed(seed: i64, state_words: usize) -> Result<Vec<i32>, RandomError> {
    if seed < 1 {
        return Err(RandomError::InvalidSeed(seed));
    }

    let dim = state_words * 2 + 1;
    let mut cos_idx = (1 + (seed >> 32) * dim as i64) as f64;
    let mut sin_idx = (1 + ((seed & LSB32_MASK) - 1) * dim as i64) as f64;

    let mut mixed = Vec::with_capacity(dim);
    for _ in 0..dim {
        sin_idx += 1.0;
        cos_idx += 1.0;
        let a = sin_idx.sin().to_bits() as i32;
        let b = cos_idx.cos().to_bits() as i32;
        mixed.push(a ^ b);
    }
    for i in 0..dim - 1 {
        mixed[i] ^= mixed[i + 1];
    }
    Ok(mixed)
}
