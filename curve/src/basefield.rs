//! Base field GF(p) of the curve.
//! p = 0x8542d69e4c044f18e8b92435bf6ff7de457283915c45517d722edb8b08f1dfc3
//!
//! Elements are canonical `BigUint` residues in `[0, p - 1]`. Inversion runs an
//! iterative extended Euclid and memoizes results in a small per-thread table.

use core::ops::{Add, Mul, Neg, Sub};
use std::cell::RefCell;
use std::collections::HashMap;
use std::mem;
use std::sync::OnceLock;

use num_bigint::BigUint;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::errors::CurveError;
use crate::params::P;

static MODULUS: OnceLock<BigUint> = OnceLock::new();
static FIELD_BYTES: OnceLock<usize> = OnceLock::new();

// Entries kept per thread before the table is flushed.
const INVERSE_CACHE_CAPACITY: usize = 1024;

thread_local! {
    static INVERSE_CACHE: RefCell<HashMap<BigUint, BigUint>> = RefCell::new(HashMap::new());
}

/// The field prime `p`.
pub fn modulus() -> &'static BigUint {
    MODULUS.get_or_init(|| BigUint::from_bytes_be(&P))
}

/// Width in bytes of an encoded field element: `ceil(ceil(log2 p) / 8)`.
pub fn field_bytes() -> usize {
    *FIELD_BYTES.get_or_init(|| (modulus().bits() as usize).div_ceil(8))
}

/// Element of the base field.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BigUint", into = "BigUint")]
pub struct FieldElement(BigUint);

impl FieldElement {
    /// Additive identity.
    pub fn zero() -> Self {
        FieldElement(BigUint::zero())
    }

    /// Multiplicative identity.
    pub fn one() -> Self {
        FieldElement(BigUint::one())
    }

    /// Reduce an arbitrary integer into the field.
    pub fn new(value: BigUint) -> Self {
        FieldElement(value % modulus())
    }

    #[inline]
    pub fn from_u64(value: u64) -> Self {
        Self::new(BigUint::from(value))
    }

    /// Decode a fixed-width big-endian element, rejecting non-canonical values.
    pub fn from_be_bytes(bytes: &[u8]) -> Result<Self, CurveError> {
        let expected = field_bytes();
        if bytes.len() != expected {
            return Err(CurveError::InvalidLength {
                expected,
                actual: bytes.len(),
            });
        }
        Self::try_from(BigUint::from_bytes_be(bytes))
    }

    /// Big-endian encoding left-padded to [`field_bytes`].
    pub fn to_be_bytes(&self) -> Vec<u8> {
        let width = field_bytes();
        let raw = self.0.to_bytes_be();
        let mut out = vec![0u8; width - raw.len()];
        out.extend_from_slice(&raw);
        out
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    #[inline]
    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    pub fn square(&self) -> Self {
        self * self
    }

    pub fn double(&self) -> Self {
        self + self
    }

    /// Multiplicative inverse.
    ///
    /// Fails with [`CurveError::NotInvertible`] for zero.
    pub fn invert(&self) -> Result<Self, CurveError> {
        let cached = INVERSE_CACHE.with(|cache| cache.borrow().get(&self.0).cloned());
        if let Some(inverse) = cached {
            return Ok(FieldElement(inverse));
        }

        let inverse = mod_inverse(&self.0, modulus())?;
        INVERSE_CACHE.with(|cache| {
            let mut cache = cache.borrow_mut();
            if cache.len() >= INVERSE_CACHE_CAPACITY {
                cache.clear();
            }
            cache.insert(self.0.clone(), inverse.clone());
        });
        Ok(FieldElement(inverse))
    }
}

/// Inverse of `value` modulo `modulus` by the iterative extended Euclidean
/// algorithm.
///
/// Only the Bezout coefficient of `value` is tracked, reduced modulo
/// `modulus` so that everything stays unsigned.
pub fn mod_inverse(value: &BigUint, modulus: &BigUint) -> Result<BigUint, CurveError> {
    if modulus.is_zero() {
        return Err(CurveError::NotInvertible);
    }

    // Invariant: old_s * value == old_r and s * value == r (mod modulus).
    let mut old_r = value % modulus;
    let mut r = modulus.clone();
    let mut old_s = BigUint::one();
    let mut s = BigUint::zero();

    while !r.is_zero() {
        let q = &old_r / &r;
        let next_r = &old_r - &q * &r;
        old_r = mem::replace(&mut r, next_r);
        let next_s = (&old_s + modulus - (&q * &s) % modulus) % modulus;
        old_s = mem::replace(&mut s, next_s);
    }

    if !old_r.is_one() {
        return Err(CurveError::NotInvertible);
    }
    Ok(old_s % modulus)
}

impl TryFrom<BigUint> for FieldElement {
    type Error = CurveError;

    fn try_from(value: BigUint) -> Result<Self, Self::Error> {
        if &value >= modulus() {
            return Err(CurveError::OutOfRange);
        }
        Ok(FieldElement(value))
    }
}

impl From<FieldElement> for BigUint {
    fn from(element: FieldElement) -> Self {
        element.0
    }
}

impl Add<&FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn add(self, other: &FieldElement) -> FieldElement {
        let sum = &self.0 + &other.0;
        if &sum >= modulus() {
            FieldElement(sum - modulus())
        } else {
            FieldElement(sum)
        }
    }
}

impl Sub<&FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn sub(self, other: &FieldElement) -> FieldElement {
        if self.0 >= other.0 {
            FieldElement(&self.0 - &other.0)
        } else {
            FieldElement(modulus() - &other.0 + &self.0)
        }
    }
}

impl Mul<&FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn mul(self, other: &FieldElement) -> FieldElement {
        FieldElement((&self.0 * &other.0) % modulus())
    }
}

impl Neg for &FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        if self.is_zero() {
            FieldElement::zero()
        } else {
            FieldElement(modulus() - &self.0)
        }
    }
}

impl Add for FieldElement {
    type Output = FieldElement;

    fn add(self, other: FieldElement) -> FieldElement {
        &self + &other
    }
}

impl Sub for FieldElement {
    type Output = FieldElement;

    fn sub(self, other: FieldElement) -> FieldElement {
        &self - &other
    }
}

impl Mul for FieldElement {
    type Output = FieldElement;

    fn mul(self, other: FieldElement) -> FieldElement {
        &self * &other
    }
}

impl Neg for FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        -&self
    }
}
