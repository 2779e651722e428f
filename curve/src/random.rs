use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::Rng;

use crate::basefield::{modulus, FieldElement};
use crate::scalarfield::{order, Scalar};

/// Helper trait for sampling random field elements.
pub trait RandomField: Sized {
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self;
}

impl RandomField for FieldElement {
    #[inline]
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        FieldElement::new(random_below(rng, modulus()))
    }
}

/// Scalars are drawn from `[1, n - 1]`, the valid range for keys and nonces.
impl RandomField for Scalar {
    #[inline]
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let bound = order() - BigUint::one();
        Scalar::new(random_below(rng, &bound) + BigUint::one())
    }
}

/// Uniform integer in `[0, bound)` by rejection sampling.
///
/// Returns zero for a zero bound.
pub fn random_below<R: Rng + ?Sized>(rng: &mut R, bound: &BigUint) -> BigUint {
    if bound.is_zero() {
        return BigUint::zero();
    }

    let bits = bound.bits();
    let len = (bits as usize).div_ceil(8);
    let excess = (len as u64) * 8 - bits;
    let mut buf = vec![0u8; len];

    loop {
        rng.fill_bytes(&mut buf);
        buf[0] &= 0xff >> excess;
        let candidate = BigUint::from_bytes_be(&buf);
        if &candidate < bound {
            return candidate;
        }
    }
}
