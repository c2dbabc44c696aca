//! Generator configuration
//!
//! Declarative description of how a generator is seeded, loadable from JSON.
//!
//! # Example
//! ```
//! use xorshift_generator::{BitsStreamGenerator64, GeneratorConfig, TimeSeeder};
//!
//! let config = GeneratorConfig::from_json(r#"{ "seed": [1] }"#).unwrap();
//! let mut rng = config.build(&TimeSeeder::new()).unwrap();
//! assert_eq!(rng.next_long(), -6731447495507462773);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::time::{SeedClock, TimeSeeder};
use crate::rng::bits::BitsStreamGenerator64;
use crate::rng::seed::Seed;
use crate::rng::xorshift::XorShift1024Star;
use crate::rng::RandomError;

/// Configuration errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Config parse failed: {0}")]
    Parse(String),

    #[error(transparent)]
    Random(#[from] RandomError),
}

/// How seed words become generator state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedStrategy {
    /// Chained SHA-512 expansion
    #[default]
    Hashed,

    /// Sine/cosine mixing of a single positive seed word
    Trigonometric,
}

/// Generator construction parameters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Seed words (None = seed from the time source)
    #[serde(default)]
    pub seed: Option<Vec<i64>>,

    /// Seeding strategy
    #[serde(default)]
    pub strategy: SeedStrategy,
}

impl GeneratorConfig {
    /// Hashed seeding from explicit seed words
    pub fn with_seed(seed: Vec<i64>) -> Self {
        Self {
            seed: Some(seed),
            strategy: SeedStrategy::Hashed,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Check the configuration without building a generator
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.strategy == SeedStrategy::Trigonometric {
            match self.seed.as_deref() {
                Some([seed]) if *seed > 0 => {}
                Some([seed]) => return Err(RandomError::InvalidSeed(*seed).into()),
                Some(_) => {
                    return Err(ConfigError::InvalidConfig(
                        "trigonometric seeding takes exactly one seed word".to_string(),
                    ))
                }
                None => {
                    return Err(ConfigError::InvalidConfig(
                        "trigonometric seeding requires an explicit seed".to_string(),
                    ))
                }
            }
        }
        Ok(())
    }

    /// Build a seeded generator
    ///
    /// `seeder` is consulted only when no seed is configured.
    pub fn build<C: SeedClock>(
        &self,
        seeder: &TimeSeeder<C>,
    ) -> Result<XorShift1024Star, ConfigError> {
        self.validate()?;

        let mut rng = XorShift1024Star::unseeded();
        match (self.strategy, self.seed.as_deref()) {
            (SeedStrategy::Trigonometric, Some(&[seed])) => rng.set_trigonometric_seed(seed)?,
            (_, seed) => rng.set_seed_or_time(seed.map(Seed::from), seeder),
        }
        Ok(rng)
    }
}
