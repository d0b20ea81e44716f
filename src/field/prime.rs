//! Prime fields Zp.
//!
//! For p up to `INVERSE_TABLE_LIMIT` inverses are tabulated once at
//! construction (in O(p) by the recurrence r⁻¹ = -⌊p/r⌋ · (p mod r)⁻¹) and
//! then looked up in O(1). Larger primes compute each inverse with the
//! extended Euclidean algorithm instead of allocating a table.

use super::Field;
use crate::error::{PersistenceError, Result};

/// Largest prime whose inverses are tabulated
pub const INVERSE_TABLE_LIMIT: u32 = 1 << 16;

/// Trial-division primality test
pub fn is_prime(n: u32) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    let n = u64::from(n);
    let mut d = 3u64;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

/// a⁻¹ mod p by the extended Euclidean algorithm; `a` must be nonzero
fn euclid_inverse(a: u32, p: u32) -> u32 {
    let (mut r0, mut r1) = (i64::from(p), i64::from(a));
    let (mut t0, mut t1) = (0i64, 1i64);
    while r1 != 0 {
        let q = r0 / r1;
        (r0, r1) = (r1, r0 - q * r1);
        (t0, t1) = (t1, t0 - q * t1);
    }
    t0.rem_euclid(i64::from(p)) as u32
}

/// Coefficients modulo a prime p
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zp {
    prime: u32,
    /// `inverses[r]` is r⁻¹ mod p for r in [1, p); index 0 is unused.
    /// Empty above `INVERSE_TABLE_LIMIT`.
    inverses: Vec<u32>,
}

impl Zp {
    /// Build the field 𝔽p, rejecting non-prime moduli
    pub fn new(prime: u32) -> Result<Self> {
        if !is_prime(prime) {
            return Err(PersistenceError::InvalidModulus { modulus: prime });
        }

        let mut inverses = Vec::new();
        if prime <= INVERSE_TABLE_LIMIT {
            let p = u64::from(prime);
            inverses = vec![0u32; prime as usize];
            inverses[1] = 1;
            for r in 2..p {
                let previous = u64::from(inverses[(p % r) as usize]);
                inverses[r as usize] = ((p - (p / r) * previous % p) % p) as u32;
            }
        }

        Ok(Self { prime, inverses })
    }

    /// The modulus p
    pub fn prime(&self) -> u32 {
        self.prime
    }
}

impl Field for Zp {
    fn characteristic(&self) -> u32 {
        self.prime
    }

    fn add(&self, a: u32, b: u32) -> u32 {
        ((u64::from(a) + u64::from(b)) % u64::from(self.prime)) as u32
    }

    fn negate(&self, a: u32) -> u32 {
        if a == 0 {
            0
        } else {
            self.prime - a
        }
    }

    fn multiply(&self, a: u32, b: u32) -> u32 {
        ((u64::from(a) * u64::from(b)) % u64::from(self.prime)) as u32
    }

    fn inverse(&self, a: u32) -> u32 {
        debug_assert!(a != 0 && a < self.prime, "{a} has no inverse mod {}", self.prime);
        match self.inverses.get(a as usize) {
            Some(&inverse) => inverse,
            None => euclid_inverse(a, self.prime),
        }
    }
}
