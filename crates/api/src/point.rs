//! Point and scalar value types shared by every backend

use num_bigint::BigInt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Scalar multiplier for group operations.
///
/// An arbitrary-precision signed integer; backends interpret it modulo
/// their group order and, where a ladder is involved, as a bit sequence
/// via `bit`/`set_bit`.
pub type Scalar = BigInt;

/// A curve point in affine coordinates.
///
/// For X-only Montgomery groups only `x` is meaningful and `y` stays
/// zero. Weierstrass groups encode the infinity point as `(0, 0)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AffinePoint {
    /// x-coordinate
    pub x: BigInt,
    /// y-coordinate (zero for X-only representations)
    pub y: BigInt,
}

impl AffinePoint {
    /// Create an affine point from both coordinates.
    pub fn new(x: BigInt, y: BigInt) -> Self {
        AffinePoint { x, y }
    }

    /// Create an X-only point, as used by Montgomery groups.
    pub fn x_only(x: BigInt) -> Self {
        AffinePoint {
            x,
            y: BigInt::from(0u32),
        }
    }

    /// The canonical `(0, 0)` infinity encoding.
    pub fn infinity() -> Self {
        AffinePoint {
            x: BigInt::from(0u32),
            y: BigInt::from(0u32),
        }
    }
}

/// A curve point in one of the supported coordinate systems.
///
/// Currently only the affine representation exists; the sum type leaves
/// room for projective or Jacobian variants without breaking the
/// [`EcGroup`](crate::EcGroup) contract or its call sites.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub enum EcPoint {
    /// Affine `(x, y)` coordinates
    Affine(AffinePoint),
}

impl EcPoint {
    /// Borrow the affine representation of this point.
    pub fn affine(&self) -> &AffinePoint {
        match self {
            EcPoint::Affine(p) => p,
        }
    }

    /// Consume the point and return its affine representation.
    pub fn into_affine(self) -> AffinePoint {
        match self {
            EcPoint::Affine(p) => p,
        }
    }
}

impl From<AffinePoint> for EcPoint {
    fn from(p: AffinePoint) -> Self {
        EcPoint::Affine(p)
    }
}

/// Format of a serialized curve point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PointFormat {
    /// The backend's own canonical encoding of the raw affine data
    Autonomous,
    /// X9.62 uncompressed: 0x04 || x || y
    Uncompressed,
    /// X9.62 compressed: 0x02/0x03 || x
    Compressed,
}
