//! Xorshift1024* Generator - Rust Engine
//!
//! 64-bit pseudo-random bit-stream generator with hashed, reproducible seeding.
//!
//! # Architecture
//!
//! - **util**: Big-endian primitive conversion used by seed hashing
//! - **rng**: Bit adapter layer, seed expansion and the Xorshift1024* core
//! - **core**: Time source and process-wide seed uniquifier
//! - **checkpoint**: Save/restore of complete generator state
//! - **config**: Declarative generator construction
//!
//! # Critical Invariants
//!
//! 1. Same seed → same state vector → same output sequence
//! 2. Every reseed or state injection clears cached half-values
//! 3. Outputs always come from the most-significant bits of a raw word

// Module declarations
pub mod checkpoint;
pub mod config;
pub mod core;
pub mod rng;
pub mod util;

// Re-exports for convenience
pub use checkpoint::{CheckpointError, GeneratorSnapshot};
pub use config::{ConfigError, GeneratorConfig, SeedStrategy};
pub use crate::core::time::{MonotonicClock, SeedClock, TimeSeeder};
pub use rng::{
    bits::{AdapterCache, BitsStreamGenerator64, WORD_BITS},
    seed::{hash_seed, sine_seed, Seed},
    xorshift::XorShift1024Star,
    RandomError,
};
pub use util::conversion::ConversionError;
