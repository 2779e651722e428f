//! Counter-mode key derivation over a fixed-output hash.

use sm3::Digest;

use crate::errors::{LengthError, Result};

/// Derive `klen` bytes from the seed `z`.
///
/// The output is `H(z || 1) || H(z || 2) || ...` truncated to `klen`, with a
/// 32-bit big-endian counter. Requests needing more than `2^32 - 1` blocks
/// fail with [`LengthError::Keystream`].
pub fn kdf<D: Digest>(z: &[u8], klen: usize) -> Result<Vec<u8>> {
    let digest_size = <D as Digest>::output_size();
    let limit = u64::from(u32::MAX) * digest_size as u64;
    let requested = klen as u64;
    if requested > limit {
        return Err(LengthError::Keystream { requested, limit }.into());
    }

    let mut out = Vec::with_capacity(klen + digest_size);
    let mut ct: u32 = 1;
    while out.len() < klen {
        let mut hasher = D::new();
        hasher.update(z);
        hasher.update(ct.to_be_bytes());
        out.extend_from_slice(&hasher.finalize());
        ct = ct.wrapping_add(1);
    }
    out.truncate(klen);

    Ok(out)
}
