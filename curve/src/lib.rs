//! Elliptic curve group over the 256-bit SM2 example prime field.
//!
//! This crate provides the base field, the scalar field, affine curve points
//! with an explicit point at infinity, NAF scalar multiplication and helpers
//! for random sampling. The curve parameters and generator are fixed to the
//! values in the `params` module.

mod affine;
mod basefield;
mod errors;
mod group;
mod params;
mod random;
mod scalarfield;

pub use affine::{Affine, TAG_IDENTITY, TAG_UNCOMPRESSED};
pub use basefield::{field_bytes, mod_inverse, modulus, FieldElement};
pub use errors::CurveError;
pub use group::{naf_digits, Group, ScalarBits};
pub use params::{params, CurveParams};
pub use random::{random_below, RandomField};
pub use scalarfield::{order, scalar_bytes, Scalar};
