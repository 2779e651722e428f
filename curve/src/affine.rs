use serde::{Deserialize, Serialize};

use crate::basefield::{field_bytes, FieldElement};
use crate::errors::CurveError;
use crate::group::Group;
use crate::params::params;
use crate::scalarfield::Scalar;

/// SEC1 tag of the uncompressed encoding `0x04 || x || y`.
pub const TAG_UNCOMPRESSED: u8 = 0x04;

/// SEC1 encoding of the point at infinity, a single zero octet.
pub const TAG_IDENTITY: u8 = 0x00;

/// Affine point on the elliptic curve.
/// Either a coordinate pair (x, y) or the point at infinity (identity element).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub enum Affine {
    /// The point at infinity
    Infinity,
    /// A finite point
    Point { x: FieldElement, y: FieldElement },
}

impl Affine {
    /// Create a finite point, checking the curve equation.
    pub fn new(x: FieldElement, y: FieldElement) -> Result<Self, CurveError> {
        let point = Self::new_unchecked(x, y);
        if !point.is_on_curve() {
            return Err(CurveError::NotOnCurve);
        }
        Ok(point)
    }

    #[inline]
    pub(crate) fn new_unchecked(x: FieldElement, y: FieldElement) -> Self {
        Affine::Point { x, y }
    }

    /// The fixed base point G.
    pub fn generator() -> Self {
        params().generator.clone()
    }

    /// Check if this point is the point at infinity.
    #[inline]
    pub fn is_infinity(&self) -> bool {
        matches!(self, Affine::Infinity)
    }

    #[inline]
    pub fn x(&self) -> Option<&FieldElement> {
        match self {
            Affine::Infinity => None,
            Affine::Point { x, .. } => Some(x),
        }
    }

    #[inline]
    pub fn y(&self) -> Option<&FieldElement> {
        match self {
            Affine::Infinity => None,
            Affine::Point { y, .. } => Some(y),
        }
    }

    /// Check if a point is on the curve: y^2 = x^3 + a*x + b.
    pub fn is_on_curve(&self) -> bool {
        let (x, y) = match self {
            Affine::Infinity => return true,
            Affine::Point { x, y } => (x, y),
        };

        let curve = params();
        let y2 = y.square();
        let x3 = &x.square() * x;
        let ax = &curve.a * x;
        let rhs = &(&x3 + &ax) + &curve.b;

        y2 == rhs
    }

    /// Point doubling: 2*P.
    pub fn double(&self) -> Result<Self, CurveError> {
        let (x, y) = match self {
            Affine::Infinity => return Ok(Affine::Infinity),
            Affine::Point { x, y } => (x, y),
        };

        // Vertical tangent
        if y.is_zero() {
            return Ok(Affine::Infinity);
        }

        // λ = (3x^2 + a) / (2y)
        let x2 = x.square();
        let numerator = &(&x2.double() + &x2) + &params().a;
        let lambda = &numerator * &y.double().invert()?;

        Ok(Self::chord(&lambda, x, y, x))
    }

    /// Point addition P + Q.
    pub fn add_point(&self, other: &Self) -> Result<Self, CurveError> {
        let (x1, y1, x2, y2) = match (self, other) {
            (Affine::Infinity, _) => return Ok(other.clone()),
            (_, Affine::Infinity) => return Ok(self.clone()),
            (Affine::Point { x: x1, y: y1 }, Affine::Point { x: x2, y: y2 }) => {
                (x1, y1, x2, y2)
            }
        };

        if x1 == x2 {
            if (y1 + y2).is_zero() {
                return Ok(Affine::Infinity);
            }
            return self.double();
        }

        // λ = (y2 - y1) / (x2 - x1)
        let lambda = &(y2 - y1) * &(x2 - x1).invert()?;

        Ok(Self::chord(&lambda, x1, y1, x2))
    }

    // x3 = λ^2 - x1 - x2, y3 = λ(x1 - x3) - y1
    fn chord(
        lambda: &FieldElement,
        x1: &FieldElement,
        y1: &FieldElement,
        x2: &FieldElement,
    ) -> Self {
        let x3 = &(&lambda.square() - x1) - x2;
        let y3 = &(lambda * &(x1 - &x3)) - y1;
        Affine::new_unchecked(x3, y3)
    }

    /// Negate a point.
    pub fn negate(&self) -> Self {
        match self {
            Affine::Infinity => Affine::Infinity,
            Affine::Point { x, y } => Affine::new_unchecked(x.clone(), -y),
        }
    }

    /// P - Q
    pub fn sub_point(&self, other: &Self) -> Result<Self, CurveError> {
        self.add_point(&other.negate())
    }

    /// SEC1 encoding: `0x04 || x || y`, or `0x00` for the point at infinity.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            Affine::Infinity => vec![TAG_IDENTITY],
            Affine::Point { x, y } => {
                let mut out = Vec::with_capacity(1 + 2 * field_bytes());
                out.push(TAG_UNCOMPRESSED);
                out.extend_from_slice(&x.to_be_bytes());
                out.extend_from_slice(&y.to_be_bytes());
                out
            }
        }
    }

    /// Decode a SEC1 point, validating range and curve membership.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CurveError> {
        let (&tag, body) = bytes.split_first().ok_or(CurveError::InvalidLength {
            expected: 1,
            actual: 0,
        })?;

        match tag {
            TAG_IDENTITY if body.is_empty() => Ok(Affine::Infinity),
            TAG_IDENTITY => Err(CurveError::InvalidLength {
                expected: 1,
                actual: bytes.len(),
            }),
            TAG_UNCOMPRESSED => Self::from_coordinate_bytes(body),
            other => Err(CurveError::InvalidTag(other)),
        }
    }

    /// Decode the untagged `x || y` body of an uncompressed point.
    pub fn from_coordinate_bytes(body: &[u8]) -> Result<Self, CurveError> {
        let width = field_bytes();
        if body.len() != 2 * width {
            return Err(CurveError::InvalidLength {
                expected: 1 + 2 * width,
                actual: 1 + body.len(),
            });
        }

        let (x, y) = body.split_at(width);
        Self::new(FieldElement::from_be_bytes(x)?, FieldElement::from_be_bytes(y)?)
    }

    /// k*G
    pub fn mul_generator(scalar: &Scalar) -> Result<Self, CurveError> {
        <Self as Group>::mul_generator(scalar)
    }
}

impl Group for Affine {
    type Scalar = Scalar;

    #[inline]
    fn identity() -> Self {
        Affine::Infinity
    }

    #[inline]
    fn is_identity(&self) -> bool {
        self.is_infinity()
    }

    #[inline]
    fn generator() -> Self {
        Affine::generator()
    }

    #[inline]
    fn add_point(&self, other: &Self) -> Result<Self, CurveError> {
        Self::add_point(self, other)
    }

    #[inline]
    fn double(&self) -> Result<Self, CurveError> {
        Self::double(self)
    }

    #[inline]
    fn negate(&self) -> Self {
        Self::negate(self)
    }
}

impl TryFrom<Vec<u8>> for Affine {
    type Error = CurveError;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        Self::from_bytes(&bytes)
    }
}

impl From<Affine> for Vec<u8> {
    fn from(point: Affine) -> Self {
        point.to_bytes()
    }
}
