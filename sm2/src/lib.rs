//! SM2 public-key encryption over the 256-bit example prime curve.
//!
//! This library implements the SM2 hybrid encryption scheme using:
//! - The curve and NAF scalar multiplication from the `curve` crate
//! - SM3 for the key derivation function and the integrity tag
//! - Hex strings as the transport encoding of ciphertexts
//!
//! # Overview
//!
//! A ciphertext is `0x04 || C1.x || C1.y || C2 || C3` where:
//! - `C1 = k*G` is the ephemeral point for a fresh nonce `k`
//! - `C2` is the message masked with a keystream derived from `k*P`
//! - `C3 = SM3(x2 || M || y2)` binds the plaintext to the shared point
//!
//! # Example
//!
//! ```
//! let (private_key, public_key) = sm2::generate_keypair().expect("keygen");
//!
//! let ciphertext = sm2::encrypt("Hello, SM2", &public_key).expect("encrypt");
//! let plaintext = sm2::decrypt(&ciphertext, &private_key).expect("decrypt");
//! assert_eq!(plaintext, "Hello, SM2");
//! ```
//!
//! # Security Considerations
//!
//! - Arithmetic is not constant time
//! - Always use a cryptographically secure random number generator (CSRNG)
//! - Every encryption draws a fresh nonce

mod ciphertext;
pub mod constants;
mod encryption;
mod errors;
mod kdf;
mod keys;


pub use ciphertext::{Ciphertext, Mode};
pub use encryption::{Sm2, decrypt, encrypt, generate_keypair};
pub use errors::{LengthError, Result, Sm2Error};
pub use kdf::kdf;
pub use keys::{PrivateKey, PublicKey};
