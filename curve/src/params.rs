// E(GF(p)) : y^2 = x^3 + a*x + b, the 256-bit prime curve from the GB/T 32918 examples
// p  = 0x8542d69e4c044f18e8b92435bf6ff7de457283915c45517d722edb8b08f1dfc3
// a  = 0x787968b4fa32c3fd2417842e73bbfeff2f3c848b6831d7e0ec65228b3937e498
// b  = 0x63e4c6d3b23b0c849cf84241484bfe48f61d59a5b16ba06e6e12d1da27c5249a
// n  = 0x8542d69e4c044f18e8b92435bf6ff7dd297720630485628d5ae74ee7c32e79b7
// Gx = 0x421debd61b62eab6746434ebc3cc315e32220b3badd50bdc4c4e6c147fedd43d
// Gy = 0x0680512bcbb42c07d47349d2153b70c4e5d7fdfcbfa36ea1a85841b9e46e09a2

use std::sync::OnceLock;

use hex_literal::hex;
use num_bigint::BigUint;

use crate::affine::Affine;
use crate::basefield::{modulus, FieldElement};
use crate::scalarfield::order;

pub(crate) const P: [u8; 32] =
    hex!("8542D69E4C044F18E8B92435BF6FF7DE457283915C45517D722EDB8B08F1DFC3");
pub(crate) const A: [u8; 32] =
    hex!("787968B4FA32C3FD2417842E73BBFEFF2F3C848B6831D7E0EC65228B3937E498");
pub(crate) const B: [u8; 32] =
    hex!("63E4C6D3B23B0C849CF84241484BFE48F61D59A5B16BA06E6E12D1DA27C5249A");
pub(crate) const N: [u8; 32] =
    hex!("8542D69E4C044F18E8B92435BF6FF7DD297720630485628D5AE74EE7C32E79B7");
pub(crate) const GX: [u8; 32] =
    hex!("421DEBD61B62EAB6746434EBC3CC315E32220B3BADD50BDC4C4E6C147FEDD43D");
pub(crate) const GY: [u8; 32] =
    hex!("0680512BCBB42C07D47349D2153B70C4E5D7FDFCBFA36EA1A85841B9E46E09A2");

static PARAMS: OnceLock<CurveParams> = OnceLock::new();

/// Coefficients and generator of the fixed curve.
#[derive(Clone, Debug)]
pub struct CurveParams {
    /// The 'a' coefficient
    pub a: FieldElement,
    /// The 'b' coefficient
    pub b: FieldElement,
    /// Base point of prime order n
    pub generator: Affine,
}

impl CurveParams {
    #[inline]
    pub fn p(&self) -> &'static BigUint {
        modulus()
    }

    #[inline]
    pub fn n(&self) -> &'static BigUint {
        order()
    }
}

/// Process-wide curve parameters, built on first use.
pub fn params() -> &'static CurveParams {
    PARAMS.get_or_init(|| CurveParams {
        a: FieldElement::new(BigUint::from_bytes_be(&A)),
        b: FieldElement::new(BigUint::from_bytes_be(&B)),
        // Checked by the generator tests; validating here would re-enter this cell.
        generator: Affine::new_unchecked(
            FieldElement::new(BigUint::from_bytes_be(&GX)),
            FieldElement::new(BigUint::from_bytes_be(&GY)),
        ),
    })
}
