//! Sizes and limits of the SM2 encryption wire format.
//!
//! Widths are derived from the curve prime and the SM3 digest rather than
//! fixed per call.

use curve::{field_bytes, scalar_bytes};
use sm3::{Digest, Sm3};

/// Leading octet of C1, the uncompressed point tag.
pub const POINT_TAG: u8 = curve::TAG_UNCOMPRESSED;

/// Nonces tried by encryption before an all-zero keystream is reported.
///
/// Each retry happens with probability about 2^-256, so the cap is never
/// reached in practice.
pub const MAX_ENCRYPT_ATTEMPTS: usize = 8;

/// Size of the encoded point C1: tag plus both coordinates.
pub fn point_size() -> usize {
    1 + 2 * field_bytes()
}

/// Size of the integrity tag C3.
pub fn hash_size() -> usize {
    <Sm3 as Digest>::output_size()
}

/// Smallest well-formed ciphertext, carrying an empty C2.
pub fn min_ciphertext_size() -> usize {
    point_size() + hash_size()
}

/// Size of a serialized private key.
pub fn private_key_size() -> usize {
    scalar_bytes()
}
