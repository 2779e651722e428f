use num_bigint::BigUint;
use num_traits::Zero;

use crate::errors::CurveError;

pub trait ScalarBits {
    fn as_biguint(&self) -> &BigUint;
}

/// Non-adjacent form of `scalar`, least-significant digit first.
///
/// Every digit is in `{-1, 0, 1}` and no two consecutive digits are non-zero.
pub fn naf_digits(scalar: &BigUint) -> Vec<i8> {
    let mut k = scalar.clone();
    let mut digits = Vec::with_capacity(k.bits() as usize + 1);

    while !k.is_zero() {
        let digit = if k.bit(0) {
            // 2 - (k mod 4)
            if k.bit(1) {
                k += 1u32;
                -1
            } else {
                k -= 1u32;
                1
            }
        } else {
            0
        };
        digits.push(digit);
        k >>= 1usize;
    }

    digits
}

pub trait Group: Sized + Clone + PartialEq {
    type Scalar: ScalarBits;

    fn identity() -> Self;
    fn is_identity(&self) -> bool;
    fn generator() -> Self;
    fn add_point(&self, other: &Self) -> Result<Self, CurveError>;
    fn double(&self) -> Result<Self, CurveError>;
    fn negate(&self) -> Self;

    #[inline]
    fn scalar_mul(&self, scalar: &Self::Scalar) -> Result<Self, CurveError> {
        self.mul_biguint(scalar.as_biguint())
    }

    /// NAF scalar multiplication, most-significant digit first.
    fn mul_biguint(&self, k: &BigUint) -> Result<Self, CurveError> {
        if k.is_zero() || self.is_identity() {
            return Ok(Self::identity());
        }

        let digits = naf_digits(k);
        let negated = self.negate();
        let mut result = Self::identity();

        for &digit in digits.iter().rev() {
            result = result.double()?;
            match digit {
                1 => result = result.add_point(self)?,
                -1 => result = result.add_point(&negated)?,
                _ => {}
            }
        }

        Ok(result)
    }

    /// Plain right-to-left double-and-add; reference for [`Group::scalar_mul`].
    fn scalar_mul_double_and_add(&self, scalar: &Self::Scalar) -> Result<Self, CurveError> {
        let k = scalar.as_biguint();
        let mut result = Self::identity();
        let mut temp = self.clone();

        for i in 0..k.bits() {
            if k.bit(i) {
                result = result.add_point(&temp)?;
            }
            temp = temp.double()?;
        }

        Ok(result)
    }

    fn mul_u64(&self, n: u64) -> Result<Self, CurveError> {
        if n == 0 {
            return Ok(Self::identity());
        }
        if n == 1 {
            return Ok(self.clone());
        }
        self.mul_biguint(&BigUint::from(n))
    }

    #[inline]
    fn mul_generator(scalar: &Self::Scalar) -> Result<Self, CurveError> {
        Self::generator().scalar_mul(scalar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naf_value(digits: &[i8]) -> i128 {
        digits
            .iter()
            .rev()
            .fold(0i128, |acc, &d| acc * 2 + i128::from(d))
    }

    #[test]
    fn test_naf_zero_is_empty() {
        assert!(naf_digits(&BigUint::zero()).is_empty());
    }

    #[test]
    fn test_naf_known_values() {
        // 7 = 8 - 1
        assert_eq!(naf_digits(&BigUint::from(7u32)), vec![-1, 0, 0, 1]);
        assert_eq!(naf_digits(&BigUint::from(1u32)), vec![1]);
        assert_eq!(naf_digits(&BigUint::from(2u32)), vec![0, 1]);
    }

    #[test]
    fn test_naf_reconstructs_and_is_non_adjacent() {
        for k in 0u64..2048 {
            let digits = naf_digits(&BigUint::from(k));
            assert_eq!(naf_value(&digits), i128::from(k));
            assert!(digits.windows(2).all(|w| w[0] == 0 || w[1] == 0));
            assert!(digits.last().map_or(true, |&d| d == 1));
        }
    }
}
