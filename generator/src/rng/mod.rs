//! Pseudo-random number generation
//!
//! Every typed output is derived from a single primitive, "the top `bits`
//! bits of the next raw 64-bit word". [`bits::BitsStreamGenerator64`] holds
//! the derivations, [`xorshift::XorShift1024Star`] supplies the primitive and
//! [`seed`] expands arbitrary seeds into full generator states.

pub mod bits;
mod rand_compat;
pub mod seed;
pub mod xorshift;

use thiserror::Error;

/// Errors raised by generator operations
///
/// Both are precondition violations detected before any state is touched.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RandomError {
    #[error("Bound must be strictly positive, got {0}")]
    NotPositiveInput(i64),

    #[error("Seed must be strictly positive, got {0}")]
    InvalidSeed(i64),
}
