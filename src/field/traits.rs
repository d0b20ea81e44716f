//! Field operations consumed by the reduction engine.

use std::fmt;

/// Arithmetic of a finite prime field on canonical `u32` representatives
///
/// Every method takes and returns canonical values in `[0, characteristic)`.
pub trait Field: Clone + fmt::Debug {
    /// The prime p of 𝔽p
    fn characteristic(&self) -> u32;

    /// a + b
    fn add(&self, a: u32, b: u32) -> u32;

    /// -a
    fn negate(&self, a: u32) -> u32;

    /// a · b
    fn multiply(&self, a: u32, b: u32) -> u32;

    /// a⁻¹; `a` must be nonzero
    fn inverse(&self, a: u32) -> u32;

    /// Map a signed integer to its canonical representative
    fn reduce(&self, value: i64) -> u32 {
        value.rem_euclid(i64::from(self.characteristic())) as u32
    }

    /// Multiplicative identity
    fn one(&self) -> u32 {
        1
    }

    /// Factor that cancels `target` against `source` at a shared pivot:
    /// `-source⁻¹ · target`, so that `target + factor · source = 0`.
    fn cancellation_factor(&self, target: u32, source: u32) -> u32 {
        self.multiply(self.negate(self.inverse(source)), target)
    }
}
