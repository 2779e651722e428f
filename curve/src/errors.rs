//! Error types for field and curve operations.

/// Errors produced by field arithmetic, point decoding and the group law.
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CurveError {
    /// A modular inverse was requested for an element sharing a factor with
    /// the modulus.
    ///
    /// Over a prime field this only happens for zero, which the group law
    /// never inverts for valid points.
    #[error("element has no inverse modulo the field prime")]
    NotInvertible,
    /// The coordinates do not satisfy `y^2 = x^3 + a*x + b`.
    #[error("point is not on the curve")]
    NotOnCurve,
    /// The point at infinity was supplied where a finite point is required.
    #[error("point at infinity where a finite point was expected")]
    Infinity,
    /// Unknown leading octet in a point encoding.
    #[error("unsupported point encoding tag {0:#04x}")]
    InvalidTag(u8),
    /// Encoded input has the wrong number of bytes.
    #[error("invalid encoding length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    /// Decoded integer is not below the field prime or group order.
    #[error("value is not a canonical residue")]
    OutOfRange,
}
