//! Field selection from the single configuration value.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::is_prime;
use crate::error::{PersistenceError, Result};

/// Which coefficient field a computation runs over
///
/// A modulus of 0 selects Z2; a prime p selects Zp (including p = 2,
/// which runs the general engine over 𝔽₂).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldSelector {
    #[default]
    Binary,
    Prime(u32),
}

impl FieldSelector {
    /// Interpret a configured modulus
    pub fn from_modulus(modulus: u32) -> Result<Self> {
        match modulus {
            0 => Ok(Self::Binary),
            p if is_prime(p) => Ok(Self::Prime(p)),
            p => Err(PersistenceError::InvalidModulus { modulus: p }),
        }
    }

    /// Configured modulus (0 for Z2)
    pub fn modulus(&self) -> u32 {
        match self {
            Self::Binary => 0,
            Self::Prime(p) => *p,
        }
    }

    /// Field characteristic
    pub fn characteristic(&self) -> u32 {
        match self {
            Self::Binary => 2,
            Self::Prime(p) => *p,
        }
    }
}

impl fmt::Display for FieldSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Binary => write!(f, "Z2"),
            Self::Prime(p) => write!(f, "Z{p}"),
        }
    }
}
