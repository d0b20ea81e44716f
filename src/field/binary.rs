//! The two-element field Z2 = {0, 1}.

use super::Field;

/// Z2 coefficients: addition is XOR, every nonzero value is its own inverse
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Z2;

impl Field for Z2 {
    fn characteristic(&self) -> u32 {
        2
    }

    fn add(&self, a: u32, b: u32) -> u32 {
        a ^ b
    }

    fn negate(&self, a: u32) -> u32 {
        a
    }

    fn multiply(&self, a: u32, b: u32) -> u32 {
        a & b
    }

    fn inverse(&self, a: u32) -> u32 {
        debug_assert_eq!(a, 1, "only 1 is invertible in Z2");
        1
    }

    fn reduce(&self, value: i64) -> u32 {
        (value & 1) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_arithmetic() {
        let f = Z2;
        assert_eq!(f.add(1, 1), 0);
        assert_eq!(f.add(1, 0), 1);
        assert_eq!(f.negate(1), 1);
        assert_eq!(f.multiply(1, 1), 1);
        assert_eq!(f.inverse(1), 1);
        assert_eq!(f.reduce(-1), 1);
        assert_eq!(f.reduce(4), 0);
    }

    #[test]
    fn test_cancellation_is_one() {
        // Over Z2 merging two columns is plain symmetric difference
        assert_eq!(Z2.cancellation_factor(1, 1), 1);
    }
}
