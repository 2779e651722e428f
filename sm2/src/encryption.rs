//! SM2 public-key encryption (GB/T 32918.4).

use curve::{Affine, CurveError, Group, RandomField, Scalar};
use rand::Rng;
use sm3::{Digest, Sm3};

use crate::ciphertext::{Ciphertext, Mode};
use crate::constants::MAX_ENCRYPT_ATTEMPTS;
use crate::errors::{Result, Sm2Error};
use crate::kdf::kdf;
use crate::keys::{PrivateKey, PublicKey};

/// Encryption engine holding the wire layout used for ciphertexts.
///
/// The engine carries no mutable state and can be shared across threads.
///
/// # Example
///
/// ```
/// use sm2::{Mode, Sm2};
///
/// let mut rng = rand::rng();
/// let sm2 = Sm2::new_with_mode(Mode::C1C3C2);
/// let (private_key, public_key) = sm2.generate_keypair(&mut rng).expect("keygen");
///
/// let ciphertext = sm2.encrypt(&mut rng, "hello", &public_key).expect("encrypt");
/// assert_eq!(sm2.decrypt(&ciphertext, &private_key).expect("decrypt"), "hello");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sm2 {
    mode: Mode,
}

impl Sm2 {
    /// Engine using the `C1 || C2 || C3` layout.
    pub fn new() -> Self {
        Self::new_with_mode(Mode::C1C2C3)
    }

    pub fn new_with_mode(mode: Mode) -> Self {
        Self { mode }
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Samples `d` from `[1, n - 1]` and returns `(d, d*G)`.
    pub fn generate_keypair<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<(PrivateKey, PublicKey)> {
        let private_key = PrivateKey::random(rng)?;
        let public_key = private_key.public_key().clone();
        Ok((private_key, public_key))
    }

    /// Encrypts `msg` for `public_key`.
    ///
    /// 1. Sample a nonce `k` from `[1, n - 1]`
    /// 2. Compute `C1 = k*G` and `(x2, y2) = k*P`
    /// 3. Derive `t = KDF(x2 || y2, len(msg))`, resampling `k` if `t` is all zero
    /// 4. Compute `C2 = msg ^ t` and `C3 = SM3(x2 || msg || y2)`
    pub fn encrypt_bytes<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        msg: &[u8],
        public_key: &PublicKey,
    ) -> Result<Ciphertext> {
        self.encrypt_with(rng, msg, public_key, kdf::<Sm3>)
    }

    fn encrypt_with<R, K>(
        &self,
        rng: &mut R,
        msg: &[u8],
        public_key: &PublicKey,
        keystream: K,
    ) -> Result<Ciphertext>
    where
        R: Rng + ?Sized,
        K: Fn(&[u8], usize) -> Result<Vec<u8>>,
    {
        for attempt in 1..=MAX_ENCRYPT_ATTEMPTS {
            let k = Scalar::random(rng);
            let c1 = Affine::mul_generator(&k)?;
            let (x2, y2) = shared_coordinates(&public_key.as_affine().scalar_mul(&k)?)?;

            let z = [x2.as_slice(), y2.as_slice()].concat();
            let t = keystream(z.as_slice(), msg.len())?;
            if is_zero_stream(&t) {
                log::trace!("all-zero keystream on attempt {attempt}, resampling nonce");
                continue;
            }

            let c2 = xor(msg, &t);
            let c3 = integrity_tag(&x2, msg, &y2);
            return Ok(Ciphertext::new(c1, c2, c3));
        }

        log::debug!("no usable nonce after {MAX_ENCRYPT_ATTEMPTS} attempts");
        Err(Sm2Error::ZeroStream)
    }

    /// Decrypts a parsed ciphertext with `private_key`.
    ///
    /// An all-zero keystream is rejected with [`Sm2Error::ZeroStream`] and a
    /// tag mismatch with [`Sm2Error::Integrity`].
    pub fn decrypt_bytes(
        &self,
        ciphertext: &Ciphertext,
        private_key: &PrivateKey,
    ) -> Result<Vec<u8>> {
        self.decrypt_with(ciphertext, private_key, kdf::<Sm3>)
    }

    fn decrypt_with<K>(
        &self,
        ciphertext: &Ciphertext,
        private_key: &PrivateKey,
        keystream: K,
    ) -> Result<Vec<u8>>
    where
        K: Fn(&[u8], usize) -> Result<Vec<u8>>,
    {
        // Parsed ciphertexts are already validated; `Ciphertext::new` is not.
        if !ciphertext.c1().is_on_curve() {
            return Err(Sm2Error::Curve(CurveError::NotOnCurve));
        }

        let (x2, y2) = shared_coordinates(&ciphertext.c1().scalar_mul(private_key.scalar())?)?;

        let c2 = ciphertext.c2();
        let z = [x2.as_slice(), y2.as_slice()].concat();
        let t = keystream(z.as_slice(), c2.len())?;
        if is_zero_stream(&t) {
            log::debug!("rejecting ciphertext: derived keystream is all zero");
            return Err(Sm2Error::ZeroStream);
        }

        let msg = xor(c2, &t);
        if integrity_tag(&x2, &msg, &y2) != ciphertext.c3() {
            log::debug!("rejecting ciphertext: C3 mismatch");
            return Err(Sm2Error::Integrity);
        }

        Ok(msg)
    }

    /// Encrypts a UTF-8 message and returns the hex-encoded ciphertext.
    pub fn encrypt<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        message: &str,
        public_key: &PublicKey,
    ) -> Result<String> {
        let ciphertext = self.encrypt_bytes(rng, message.as_bytes(), public_key)?;
        Ok(ciphertext.to_hex(self.mode))
    }

    /// Decrypts a hex-encoded ciphertext back into a UTF-8 message.
    pub fn decrypt(&self, ciphertext: &str, private_key: &PrivateKey) -> Result<String> {
        let ciphertext = Ciphertext::from_hex(ciphertext, self.mode)?;
        let msg = self.decrypt_bytes(&ciphertext, private_key)?;
        Ok(String::from_utf8(msg)?)
    }
}

/// Generates a key pair with the thread-local CSPRNG.
pub fn generate_keypair() -> Result<(PrivateKey, PublicKey)> {
    Sm2::new().generate_keypair(&mut rand::rng())
}

/// Encrypts `message` for `public_key` in the `C1 || C2 || C3` layout, hex encoded.
pub fn encrypt(message: &str, public_key: &PublicKey) -> Result<String> {
    Sm2::new().encrypt(&mut rand::rng(), message, public_key)
}

/// Decrypts a hex ciphertext produced by [`encrypt`].
pub fn decrypt(ciphertext: &str, private_key: &PrivateKey) -> Result<String> {
    Sm2::new().decrypt(ciphertext, private_key)
}

/// Fixed-width encodings of the shared point's coordinates.
fn shared_coordinates(point: &Affine) -> Result<(Vec<u8>, Vec<u8>)> {
    match point {
        Affine::Infinity => Err(Sm2Error::Curve(CurveError::Infinity)),
        Affine::Point { x, y } => Ok((x.to_be_bytes(), y.to_be_bytes())),
    }
}

/// C3 = SM3(x2 || msg || y2)
fn integrity_tag(x2: &[u8], msg: &[u8], y2: &[u8]) -> Vec<u8> {
    let mut hasher = Sm3::new();
    hasher.update(x2);
    hasher.update(msg);
    hasher.update(y2);
    hasher.finalize().to_vec()
}

// An empty keystream masks nothing and is not treated as all zero.
fn is_zero_stream(t: &[u8]) -> bool {
    !t.is_empty() && t.iter().all(|b| *b == 0)
}

fn xor(data: &[u8], keystream: &[u8]) -> Vec<u8> {
    data.iter().zip(keystream).map(|(d, k)| d ^ k).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;
    use curve::FieldElement;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn zero_stream(_: &[u8], klen: usize) -> Result<Vec<u8>> {
        Ok(vec![0u8; klen])
    }

    #[test]
    fn test_encrypt_gives_up_after_max_attempts() {
        let mut rng = StdRng::seed_from_u64(20);
        let sk = PrivateKey::random(&mut rng).expect("keygen");
        let calls = Cell::new(0usize);

        let result = Sm2::new().encrypt_with(&mut rng, b"zero", sk.public_key(), |z, klen| {
            calls.set(calls.get() + 1);
            zero_stream(z, klen)
        });

        assert_eq!(result, Err(Sm2Error::ZeroStream));
        assert_eq!(calls.get(), MAX_ENCRYPT_ATTEMPTS);
    }

    #[test]
    fn test_encrypt_resamples_nonce_on_zero_stream() {
        let mut rng = StdRng::seed_from_u64(21);
        let sm2 = Sm2::new();
        let sk = PrivateKey::random(&mut rng).expect("keygen");
        let calls = Cell::new(0usize);

        let ciphertext = sm2
            .encrypt_with(&mut rng, b"retry", sk.public_key(), |z, klen| {
                calls.set(calls.get() + 1);
                if calls.get() == 1 {
                    zero_stream(z, klen)
                } else {
                    kdf::<Sm3>(z, klen)
                }
            })
            .expect("second nonce");

        assert_eq!(calls.get(), 2);
        assert_eq!(sm2.decrypt_bytes(&ciphertext, &sk).expect("decrypt"), b"retry");
    }

    #[test]
    fn test_decrypt_aborts_on_zero_stream() {
        let mut rng = StdRng::seed_from_u64(22);
        let sm2 = Sm2::new();
        let sk = PrivateKey::random(&mut rng).expect("keygen");
        let ciphertext = sm2
            .encrypt_bytes(&mut rng, b"abort", sk.public_key())
            .expect("encrypt");
        let calls = Cell::new(0usize);

        let result = sm2.decrypt_with(&ciphertext, &sk, |z, klen| {
            calls.set(calls.get() + 1);
            zero_stream(z, klen)
        });

        assert_eq!(result, Err(Sm2Error::ZeroStream));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_decrypt_rejects_unvalidated_c1() {
        let mut rng = StdRng::seed_from_u64(23);
        let sk = PrivateKey::random(&mut rng).expect("keygen");
        let g = Affine::generator();
        let off_curve = Affine::Point {
            x: g.x().expect("finite").clone(),
            y: g.y().expect("finite") + &FieldElement::one(),
        };
        let ciphertext = Ciphertext::new(off_curve, vec![1, 2, 3], vec![0u8; 32]);

        assert_eq!(
            Sm2::new().decrypt_bytes(&ciphertext, &sk),
            Err(Sm2Error::Curve(CurveError::NotOnCurve))
        );
    }

    #[test]
    fn test_zero_stream_detection() {
        assert!(is_zero_stream(&[0, 0, 0]));
        assert!(!is_zero_stream(&[0, 1, 0]));
        assert!(!is_zero_stream(&[]));
    }

    #[test]
    fn test_xor_is_involution() {
        let data = b"keystream";
        let t = [0x5au8; 9];
        assert_eq!(xor(&xor(data, &t), &t), data.to_vec());
    }

    #[test]
    fn test_shared_coordinates_rejects_infinity() {
        assert_eq!(
            shared_coordinates(&Affine::Infinity),
            Err(Sm2Error::Curve(CurveError::Infinity))
        );
        let (x, y) = shared_coordinates(&Affine::generator()).expect("finite");
        assert_eq!((x.len(), y.len()), (32, 32));
    }
}
