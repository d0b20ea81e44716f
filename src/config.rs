//! Configuration of a persistence computation.
//!
//! Every option is an explicit value passed to `compute_persistence`;
//! nothing is read from process-wide state.

use serde::{Deserialize, Serialize};

use crate::error::{PersistenceError, Result};
use crate::field::FieldSelector;
use crate::reduction::ReductionStrategy;

/// Highest homological dimension with a boundary matrix
pub const MAX_DIMENSION: usize = 1;

/// Options for `compute_persistence`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistenceConfig {
    /// Coefficient modulus: 0 for Z2, otherwise a prime p for Zp
    pub modulus: u32,
    /// Highest homological dimension to compute (0 or 1)
    pub max_dimension: usize,
    /// Attach generator sets to finite intervals
    pub track_generators: bool,
    /// How colliding columns are located during reduction
    pub strategy: ReductionStrategy,
    /// Report intervals whose birth equals their death
    pub keep_zero_persistence: bool,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            modulus: 0,
            max_dimension: MAX_DIMENSION,
            track_generators: false,
            strategy: ReductionStrategy::Scan,
            keep_zero_persistence: false,
        }
    }
}

impl PersistenceConfig {
    pub fn with_modulus(mut self, modulus: u32) -> Self {
        self.modulus = modulus;
        self
    }

    pub fn with_max_dimension(mut self, max_dimension: usize) -> Self {
        self.max_dimension = max_dimension;
        self
    }

    pub fn with_generators(mut self, track_generators: bool) -> Self {
        self.track_generators = track_generators;
        self
    }

    pub fn with_strategy(mut self, strategy: ReductionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_zero_persistence(mut self, keep: bool) -> Self {
        self.keep_zero_persistence = keep;
        self
    }

    /// Check the configuration and resolve the coefficient field
    pub fn validate(&self) -> Result<FieldSelector> {
        if self.max_dimension > MAX_DIMENSION {
            return Err(PersistenceError::UnsupportedDimension {
                dimension: self.max_dimension,
                max: MAX_DIMENSION,
            });
        }
        FieldSelector::from_modulus(self.modulus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PersistenceConfig::default();
        assert_eq!(config.validate(), Ok(FieldSelector::Binary));
        assert_eq!(config.max_dimension, 1);
    }

    #[test]
    fn test_invalid_settings() {
        let config = PersistenceConfig::default().with_modulus(4);
        assert_eq!(
            config.validate(),
            Err(PersistenceError::InvalidModulus { modulus: 4 })
        );

        let config = PersistenceConfig::default().with_max_dimension(2);
        assert!(config.validate().unwrap_err().is_configuration());
    }

    #[test]
    fn test_builder() {
        let config = PersistenceConfig::default()
            .with_modulus(3)
            .with_generators(true)
            .with_strategy(ReductionStrategy::PivotLookup)
            .with_zero_persistence(true);
        assert_eq!(config.validate(), Ok(FieldSelector::Prime(3)));
        assert!(config.track_generators);
        assert!(config.keep_zero_persistence);
    }

    #[test]
    fn test_large_prime_modulus() {
        let config = PersistenceConfig::default().with_modulus(2_147_483_647);
        assert_eq!(config.validate(), Ok(FieldSelector::Prime(2_147_483_647)));
    }
}
