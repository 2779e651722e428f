//! Error types for SM2 encryption and decryption.

use std::string::FromUtf8Error;

use curve::CurveError;

/// Errors that can occur during key handling, encryption and decryption.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Sm2Error {
    /// The ciphertext does not start with the uncompressed point tag `0x04`.
    #[error("unsupported point format tag {0:#04x}")]
    Format(u8),
    /// The ciphertext point C1 is not a valid point on the curve.
    #[error("invalid curve point: {0}")]
    Curve(CurveError),
    /// An input or requested output has an unusable length.
    #[error(transparent)]
    Length(#[from] LengthError),
    /// The derived keystream is all zero.
    ///
    /// Decryption aborts instead of retrying since the input came from
    /// outside; encryption only reports it once every nonce attempt failed.
    #[error("derived keystream is all zero")]
    ZeroStream,
    /// The recomputed C3 differs from the one in the ciphertext.
    ///
    /// Either the ciphertext was modified or the wrong private key was used.
    #[error("integrity check failed")]
    Integrity,
    /// A modular inverse did not exist.
    #[error("arithmetic failure: {0}")]
    Arithmetic(CurveError),
    /// Key material is out of range or not a valid public point.
    #[error("invalid key: {0}")]
    InvalidKey(CurveError),
    /// The transport string is not valid hex.
    #[error("invalid hex encoding: {0}")]
    Hex(#[from] hex::FromHexError),
    /// The recovered plaintext is not valid UTF-8.
    #[error("plaintext is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}

/// Length failures, see [`Sm2Error::Length`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LengthError {
    /// Ciphertext is too short to hold C1 and C3.
    #[error("ciphertext is {actual} bytes, shorter than the minimum of {minimum}")]
    Ciphertext { actual: usize, minimum: usize },
    /// The KDF counter would overflow 32 bits.
    #[error("requested {requested} keystream bytes, the KDF limit is {limit}")]
    Keystream { requested: u64, limit: u64 },
}

impl From<CurveError> for Sm2Error {
    fn from(err: CurveError) -> Self {
        match err {
            CurveError::NotInvertible => Sm2Error::Arithmetic(err),
            CurveError::InvalidTag(tag) => Sm2Error::Format(tag),
            _ => Sm2Error::Curve(err),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Sm2Error>;
