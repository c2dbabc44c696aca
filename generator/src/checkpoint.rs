//! Checkpoint - Save/Restore Generator State
//!
//! Enables serialization and deserialization of the complete generator state
//! for pause/resume of a random sequence.
//!
//! # Critical Invariants
//!
//! - **Exact continuation**: a restored generator produces the same values
//!   the original would have produced, including cached int and Gaussian
//!   halves
//! - **Integrity**: state words and index are covered by a SHA-256 checksum
//! - **Atomicity**: a snapshot that fails validation leaves the target
//!   generator untouched

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

// ============================================================================
// Errors
// ============================================================================

/// Errors raised while saving or restoring a snapshot
#[derive(Debug, Error, PartialEq)]
pub enum CheckpointError {
    #[error("Snapshot serialization failed: {0}")]
    Serialization(String),

    #[error("Snapshot holds {actual} state words, generator expects {expected}")]
    WrongStateLength { expected: usize, actual: usize },

    #[error("State index {index} out of range for {words} state words")]
    IndexOutOfRange { index: usize, words: usize },

    #[error("Checksum mismatch: expected {expected}, computed {actual}")]
    ChecksumMismatch { expected: String, actual: String },
}

// ============================================================================
// Snapshot Structure
// ============================================================================

/// Complete generator state snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorSnapshot {
    /// State words, index 0 first
    pub state: Vec<u64>,

    /// Index of the next state word to be consumed
    pub index: usize,

    /// Pending low half of a split word
    pub spare_int: Option<i32>,

    /// Pending second sample of a Box–Muller pair
    pub spare_gaussian: Option<f64>,

    /// SHA-256 of state words and index (hex)
    pub checksum: String,
}

impl GeneratorSnapshot {
    /// Build a snapshot and stamp its checksum
    pub fn new(
        state: Vec<u64>,
        index: usize,
        spare_int: Option<i32>,
        spare_gaussian: Option<f64>,
    ) -> Self {
        let checksum = compute_checksum(&state, index);
        Self {
            state,
            index,
            spare_int,
            spare_gaussian,
            checksum,
        }
    }

    /// Check shape and checksum against a generator with `state_words` words
    pub fn validate(&self, state_words: usize) -> Result<(), CheckpointError> {
        if self.state.len() != state_words {
            return Err(CheckpointError::WrongStateLength {
                expected: state_words,
                actual: self.state.len(),
            });
        }

        if self.index >= state_words {
            return Err(CheckpointError::IndexOutOfRange {
                index: self.index,
                words: state_words,
            });
        }

        let actual = compute_checksum(&self.state, self.index);
        if actual != self.checksum {
            return Err(CheckpointError::ChecksumMismatch {
                expected: self.checksum.clone(),
                actual,
            });
        }

        Ok(())
    }

    /// Serialize to a JSON string
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self).map_err(|e| CheckpointError::Serialization(e.to_string()))
    }

    /// Deserialize from a JSON string
    ///
    /// Only the JSON shape is checked here; restoring runs full validation.
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        serde_json::from_str(json).map_err(|e| CheckpointError::Serialization(e.to_string()))
    }
}

// ============================================================================
// Checksum
// ============================================================================

/// SHA-256 over big-endian state words followed by the big-endian index
fn compute_checksum(state: &[u64], index: usize) -> String {
    let mut hasher = Sha256::new();
    for word in state {
        hasher.update(word.to_be_bytes());
    }
    hasher.update((index as u64).to_be_bytes());
    format!("{:x}", hasher.finalize())
}
