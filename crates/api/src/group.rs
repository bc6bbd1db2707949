//! Trait definition for elliptic-curve group backends

use core::fmt;

use num_bigint::BigInt;

use crate::error::Result;
use crate::meta::HashToCurveStrategy;
use crate::point::{EcPoint, PointFormat, Scalar};

/// A prime-order elliptic-curve group over a finite field.
///
/// Implementations hold only immutable curve parameters, so a resolved
/// group can be shared read-only across threads; every operation is
/// synchronous, CPU-bound and deterministic. Points and scalars are
/// plain values with no ownership relationship to the group.
///
/// Operations a point representation cannot express (e.g. general
/// addition on an X-only group) fail with
/// [`Error::UnsupportedOperation`](crate::Error::UnsupportedOperation)
/// instead of returning a coerced value.
///
/// The [`fmt::Display`] supertrait renders the curve equation, e.g.
/// `secp256k1 ==> y^2 = x^3 + 0x + 7 (mod ...)`.
pub trait EcGroup: Send + Sync + fmt::Display {
    /// Name of the backend library providing this implementation.
    fn library_name(&self) -> &'static str;

    /// Display name of the curve this group was resolved for.
    fn curve_name(&self) -> &str;

    /// The field prime p.
    fn field(&self) -> &BigInt;

    /// The order n of the subgroup generated by the generator.
    fn order(&self) -> &BigInt;

    /// The cofactor h.
    fn cofactor(&self) -> &BigInt;

    /// The subgroup generator G.
    fn generator(&self) -> EcPoint;

    /// Point addition: p1 + p2.
    fn add(&self, p1: &EcPoint, p2: &EcPoint) -> Result<EcPoint>;

    /// Point subtraction: p1 - p2.
    fn sub(&self, p1: &EcPoint, p2: &EcPoint) -> Result<EcPoint> {
        let negated = self.negate(p2)?;
        self.add(p1, &negated)
    }

    /// Point doubling: 2·p.
    fn double(&self, p: &EcPoint) -> Result<EcPoint> {
        self.mul(&Scalar::from(2u32), p)
    }

    /// Additive inverse of a point.
    fn negate(&self, p: &EcPoint) -> Result<EcPoint>;

    /// Scalar multiplication: scalar·p.
    fn mul(&self, scalar: &Scalar, p: &EcPoint) -> Result<EcPoint>;

    /// Scalar multiplication of the generator: scalar·G.
    fn mul_base(&self, scalar: &Scalar) -> Result<EcPoint>;

    /// Combined multiplication: s1·p1 + s2·G.
    fn mul_double_base(&self, s1: &Scalar, p1: &EcPoint, s2: &Scalar) -> Result<EcPoint> {
        let lhs = self.mul(s1, p1)?;
        let rhs = self.mul_base(s2)?;
        self.add(&lhs, &rhs)
    }

    /// Multiply p by the inverse of scalar modulo the group order.
    ///
    /// Fails with [`Error::DivideByZero`](crate::Error::DivideByZero) if
    /// the scalar is zero (or has no inverse modulo the order).
    fn div(&self, p: &EcPoint, scalar: &Scalar) -> Result<EcPoint>;

    /// Serialize a point in the requested encoding.
    ///
    /// Backends support a fixed set of encodings; any other format fails
    /// with [`Error::InvalidFormat`](crate::Error::InvalidFormat) rather
    /// than silently falling back.
    fn serialize_point(&self, p: &EcPoint, format: PointFormat) -> Result<Vec<u8>>;

    /// Deserialize a point from the requested encoding.
    ///
    /// Round-trips with [`serialize_point`](EcGroup::serialize_point):
    /// the reconstructed point compares equal to the original.
    fn deserialize_point(&self, buf: &[u8], format: PointFormat) -> Result<EcPoint>;

    /// Map arbitrary bytes to a curve point under the given strategy.
    ///
    /// Backends without a mapping for the strategy (or for their curve
    /// family at all) fail loudly instead of approximating.
    fn hash_to_curve(&self, strategy: HashToCurveStrategy, msg: &[u8]) -> Result<EcPoint>;

    /// Structural equality of two points in this group's representation.
    fn point_equal(&self, p1: &EcPoint, p2: &EcPoint) -> bool;

    /// Whether the point satisfies this group's membership policy.
    fn is_in_curve_group(&self, p: &EcPoint) -> bool;

    /// Whether the point is the group identity.
    fn is_infinity(&self, p: &EcPoint) -> bool;
}

impl fmt::Debug for dyn EcGroup + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
