//! Private and public keys for SM2 encryption.

use core::fmt::{self, Debug, Formatter};

use curve::{Affine, CurveError, RandomField, Scalar};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, Sm2Error};

/// A secret decryption key.
///
/// The key is a scalar `d` in `[1, n - 1]`. The matching public point `d*G`
/// is computed once when the key is created.
///
/// # Example
///
/// ```
/// use sm2::PrivateKey;
///
/// let private_key = PrivateKey::random(&mut rand::rng()).expect("keygen");
/// let public_key = private_key.public_key();
/// assert!(public_key.as_affine().is_on_curve());
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Scalar", into = "Scalar")]
pub struct PrivateKey {
    scalar: Scalar,
    public_key: PublicKey,
}

/// A public encryption key.
///
/// The key is a finite point on the curve, checked when the key is built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Affine", into = "Affine")]
pub struct PublicKey {
    point: Affine,
}

impl PrivateKey {
    /// Generates a random private key using the provided random number generator.
    ///
    /// # Arguments
    ///
    /// * `rng` - A cryptographically secure random number generator
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Result<Self> {
        Self::from_scalar(Scalar::random(rng))
    }

    /// Builds a key from a scalar, rejecting zero.
    pub fn from_scalar(scalar: Scalar) -> Result<Self> {
        if scalar.is_zero() {
            return Err(Sm2Error::InvalidKey(CurveError::OutOfRange));
        }
        let point = Affine::mul_generator(&scalar)?;
        let public_key = PublicKey::from_affine(point)?;
        Ok(Self { scalar, public_key })
    }

    /// Decodes a big-endian scalar of [`crate::constants::private_key_size`] bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let scalar = Scalar::from_be_bytes(bytes).map_err(Sm2Error::InvalidKey)?;
        Self::from_scalar(scalar)
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.scalar.to_be_bytes()
    }

    /// The public key `d*G`.
    #[inline]
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    #[inline]
    pub(crate) fn scalar(&self) -> &Scalar {
        &self.scalar
    }
}

impl Debug for PrivateKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("public_key", &self.public_key)
            .finish_non_exhaustive()
    }
}

impl TryFrom<Scalar> for PrivateKey {
    type Error = Sm2Error;

    fn try_from(scalar: Scalar) -> Result<Self> {
        Self::from_scalar(scalar)
    }
}

impl From<PrivateKey> for Scalar {
    fn from(key: PrivateKey) -> Self {
        key.scalar
    }
}

impl PublicKey {
    /// Wraps a curve point, rejecting the point at infinity and off-curve points.
    pub fn from_affine(point: Affine) -> Result<Self> {
        if point.is_infinity() {
            return Err(Sm2Error::InvalidKey(CurveError::Infinity));
        }
        if !point.is_on_curve() {
            return Err(Sm2Error::InvalidKey(CurveError::NotOnCurve));
        }
        Ok(Self { point })
    }

    /// Decodes a SEC1 uncompressed point `0x04 || x || y`.
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self> {
        let point = Affine::from_bytes(bytes).map_err(Sm2Error::InvalidKey)?;
        Self::from_affine(point)
    }

    pub fn to_sec1_bytes(&self) -> Vec<u8> {
        self.point.to_bytes()
    }

    #[inline]
    pub fn as_affine(&self) -> &Affine {
        &self.point
    }
}

impl TryFrom<Affine> for PublicKey {
    type Error = Sm2Error;

    fn try_from(point: Affine) -> Result<Self> {
        Self::from_affine(point)
    }
}

impl From<PublicKey> for Affine {
    fn from(key: PublicKey) -> Self {
        key.point
    }
}

impl From<&PrivateKey> for PublicKey {
    /// Converts a reference to a private key into its public key.
    fn from(sk: &PrivateKey) -> Self {
        sk.public_key().clone()
    }
}
