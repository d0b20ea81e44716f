//! Field Module: Coefficient Arithmetic for Boundary Reduction
//!
//! Persistent homology is computed with coefficients in a field 𝔽.
//! The reduction engine only ever needs four operations on coefficients:
//!
//! - addition a + b
//! - negation -a
//! - multiplication a · b
//! - multiplicative inverse a⁻¹ (a ≠ 0)
//!
//! ## Supported Fields
//!
//! - **Z2** = {0, 1}: the only nonzero coefficient is 1, so column addition
//!   degenerates to symmetric difference of supports.
//! - **Zp** for a prime p: inverses are tabulated once at construction.
//!
//! Coefficients are stored canonically as `u32` values in [0, p).

mod binary;
mod prime;
mod selector;
mod traits;

pub use binary::Z2;
pub use prime::{is_prime, Zp, INVERSE_TABLE_LIMIT};
pub use selector::FieldSelector;
pub use traits::Field;
