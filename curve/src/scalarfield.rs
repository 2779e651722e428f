//! Scalar field of the curve. n = 0x8542d69e4c044f18e8b92435bf6ff7dd297720630485628d5ae74ee7c32e79b7
//!
//! Scalars are canonical residues modulo the prime group order `n`.

use core::fmt::{self, Display, Formatter};
use core::ops::{Add, Mul, Neg, Sub};
use std::sync::OnceLock;

use num_bigint::BigUint;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::errors::CurveError;
use crate::group::ScalarBits;
use crate::params::N;

static ORDER: OnceLock<BigUint> = OnceLock::new();
static SCALAR_BYTES: OnceLock<usize> = OnceLock::new();

/// The prime order `n` of the generator.
pub fn order() -> &'static BigUint {
    ORDER.get_or_init(|| BigUint::from_bytes_be(&N))
}

/// Width in bytes of an encoded scalar.
pub fn scalar_bytes() -> usize {
    *SCALAR_BYTES.get_or_init(|| (order().bits() as usize).div_ceil(8))
}

/// Scalar field element for the curve
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "BigUint", into = "BigUint")]
pub struct Scalar(BigUint);

impl Scalar {
    pub fn zero() -> Self {
        Scalar(BigUint::zero())
    }

    pub fn one() -> Self {
        Scalar(BigUint::one())
    }

    /// Reduce an arbitrary integer modulo `n`.
    pub fn new(value: BigUint) -> Self {
        Scalar(value % order())
    }

    #[inline]
    pub fn from_u64(value: u64) -> Self {
        Self::new(BigUint::from(value))
    }

    /// Decode a fixed-width big-endian scalar, rejecting values `>= n`.
    pub fn from_be_bytes(bytes: &[u8]) -> Result<Self, CurveError> {
        let expected = scalar_bytes();
        if bytes.len() != expected {
            return Err(CurveError::InvalidLength {
                expected,
                actual: bytes.len(),
            });
        }
        Self::try_from(BigUint::from_bytes_be(bytes))
    }

    /// Big-endian encoding left-padded to [`scalar_bytes`].
    pub fn to_be_bytes(&self) -> Vec<u8> {
        let width = scalar_bytes();
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
}

impl ScalarBits for Scalar {
    #[inline]
    fn as_biguint(&self) -> &BigUint {
        &self.0
    }
}

impl TryFrom<BigUint> for Scalar {
    type Error = CurveError;

    fn try_from(value: BigUint) -> Result<Self, Self::Error> {
        if &value >= order() {
            return Err(CurveError::OutOfRange);
        }
        Ok(Scalar(value))
    }
}

impl From<Scalar> for BigUint {
    fn from(scalar: Scalar) -> Self {
        scalar.0
    }
}

impl Display for Scalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:#066x}", self.0)
    }
}

impl Add<&Scalar> for &Scalar {
    type Output = Scalar;

    fn add(self, other: &Scalar) -> Scalar {
        Scalar::new(&self.0 + &other.0)
    }
}

impl Sub<&Scalar> for &Scalar {
    type Output = Scalar;

    fn sub(self, other: &Scalar) -> Scalar {
        &(-other) + self
    }
}

impl Mul<&Scalar> for &Scalar {
    type Output = Scalar;

    fn mul(self, other: &Scalar) -> Scalar {
        Scalar::new(&self.0 * &other.0)
    }
}

impl Neg for &Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        if self.is_zero() {
            Scalar::zero()
        } else {
            Scalar(order() - &self.0)
        }
    }
}
