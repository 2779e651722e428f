//! Wire encoding of SM2 ciphertexts.

use curve::Affine;

use crate::constants::{POINT_TAG, hash_size, min_ciphertext_size, point_size};
use crate::errors::{LengthError, Result, Sm2Error};

/// Order of the components after C1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// `C1 || C2 || C3`, the GB/T 32918 order
    #[default]
    C1C2C3,
    /// `C1 || C3 || C2`, the GM/T 0009 order
    C1C3C2,
}

/// Decoded ciphertext: ephemeral point C1, masked message C2 and tag C3.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ciphertext {
    c1: Affine,
    c2: Vec<u8>,
    c3: Vec<u8>,
}

impl Ciphertext {
    pub(crate) fn new(c1: Affine, c2: Vec<u8>, c3: Vec<u8>) -> Self {
        Self { c1, c2, c3 }
    }

    /// Decode from bytes laid out according to `mode`.
    ///
    /// Checks run in order: point tag, minimum length, then curve
    /// membership of C1.
    pub fn from_bytes(bytes: &[u8], mode: Mode) -> Result<Self> {
        let minimum = min_ciphertext_size();
        let &tag = bytes.first().ok_or(LengthError::Ciphertext {
            actual: 0,
            minimum,
        })?;
        if tag != POINT_TAG {
            return Err(Sm2Error::Format(tag));
        }
        if bytes.len() < minimum {
            return Err(LengthError::Ciphertext {
                actual: bytes.len(),
                minimum,
            }
            .into());
        }

        let (c1, rest) = bytes.split_at(point_size());
        let c1 = Affine::from_coordinate_bytes(&c1[1..]).map_err(Sm2Error::Curve)?;

        let c2_len = bytes.len() - minimum;
        let (c2, c3) = match mode {
            Mode::C1C2C3 => rest.split_at(c2_len),
            Mode::C1C3C2 => {
                let (c3, c2) = rest.split_at(hash_size());
                (c2, c3)
            }
        };

        Ok(Self::new(c1, c2.to_vec(), c3.to_vec()))
    }

    /// Encode with the components ordered according to `mode`.
    pub fn to_bytes(&self, mode: Mode) -> Vec<u8> {
        let point = self.c1.to_bytes();
        let mut out = Vec::with_capacity(point.len() + self.c2.len() + self.c3.len());
        out.extend_from_slice(&point);
        match mode {
            Mode::C1C2C3 => {
                out.extend_from_slice(&self.c2);
                out.extend_from_slice(&self.c3);
            }
            Mode::C1C3C2 => {
                out.extend_from_slice(&self.c3);
                out.extend_from_slice(&self.c2);
            }
        }
        out
    }

    /// Decode from a hex transport string.
    pub fn from_hex(encoded: &str, mode: Mode) -> Result<Self> {
        let bytes = hex::decode(encoded.trim())?;
        Self::from_bytes(&bytes, mode)
    }

    /// Encode as a lowercase hex transport string.
    pub fn to_hex(&self, mode: Mode) -> String {
        hex::encode(self.to_bytes(mode))
    }

    /// Get C1
    pub fn c1(&self) -> &Affine {
        &self.c1
    }

    /// Get C2
    pub fn c2(&self) -> &[u8] {
        &self.c2
    }

    /// Get C3
    pub fn c3(&self) -> &[u8] {
        &self.c3
    }
}
