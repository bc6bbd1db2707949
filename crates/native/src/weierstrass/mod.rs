//! Affine short-Weierstrass group: y² = x³ + a·x + b (mod p)

use core::fmt;

use ecgroup_api::error::validate;
use ecgroup_api::{
    AffinePoint, CurveMeta, EcGroup, EcPoint, Error, HashToCurveStrategy, PointFormat, Result,
    Scalar,
};
use ecgroup_params::WeierstrassCurveParam;
use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::{Signed, Zero};

/// Chord-and-tangent implementation over affine coordinates.
///
/// The infinity point is encoded as the canonical `(0, 0)` pair, which
/// lies on neither supported curve. The group holds only its immutable
/// parameters and is freely shared across threads.
pub struct WeierstrassGroup {
    meta: CurveMeta,
    param: &'static WeierstrassCurveParam,
}

impl WeierstrassGroup {
    /// Bind a curve identity to its parameter record.
    pub fn new(meta: CurveMeta, param: &'static WeierstrassCurveParam) -> Self {
        WeierstrassGroup { meta, param }
    }

    fn field_byte_len(&self) -> usize {
        ((self.param.p.bits() + 7) / 8) as usize
    }

    fn is_affine_infinity(p: &AffinePoint) -> bool {
        p.x.is_zero() && p.y.is_zero()
    }

    /// Modular inverse mod the field prime. Callers guarantee a nonzero
    /// operand, for which the inverse always exists.
    fn invert_mod_p(&self, v: &BigInt) -> BigInt {
        v.modinv(&self.param.p)
            .expect("nonzero element of a prime field is invertible")
    }

    fn add_affine(&self, p1: &AffinePoint, p2: &AffinePoint) -> AffinePoint {
        if Self::is_affine_infinity(p1) {
            return p2.clone();
        }
        if Self::is_affine_infinity(p2) {
            return p1.clone();
        }
        // P + (-P) = O
        if p1.x == p2.x && p1.y != p2.y {
            return AffinePoint::infinity();
        }

        let p = &self.param.p;
        let lambda = if p1.x == p2.x {
            // p1 == p2: tangent slope. A 2-torsion point (y = 0) has a
            // vertical tangent, so doubling it lands on infinity.
            if p1.y.is_zero() {
                return AffinePoint::infinity();
            }
            let num = &p1.x * &p1.x * 3u32 + &self.param.a;
            let den = &p1.y * 2u32;
            (num * self.invert_mod_p(&den)).mod_floor(p)
        } else {
            let num = &p2.y - &p1.y;
            let den = (&p2.x - &p1.x).mod_floor(p);
            (num * self.invert_mod_p(&den)).mod_floor(p)
        };

        let x3 = (&lambda * &lambda - &p1.x - &p2.x).mod_floor(p);
        let y3 = (lambda * (&p1.x - &x3) - &p1.y).mod_floor(p);
        AffinePoint::new(x3, y3)
    }

    fn negate_affine(&self, point: &AffinePoint) -> AffinePoint {
        if Self::is_affine_infinity(point) {
            return point.clone();
        }
        AffinePoint::new(
            point.x.clone(),
            (&self.param.p - &point.y).mod_floor(&self.param.p),
        )
    }

    /// Binary double-and-add over the group operation, with infinity as
    /// the identity.
    fn mul_affine(&self, scalar: &Scalar, point: &AffinePoint) -> AffinePoint {
        if Self::is_affine_infinity(point) {
            return AffinePoint::infinity();
        }
        if scalar.mod_floor(&self.param.n).is_zero() {
            return AffinePoint::infinity();
        }

        let exp = scalar.abs();
        let mut result = AffinePoint::infinity();
        let mut base = point.clone();
        for t in 0..exp.bits() {
            if exp.bit(t) {
                result = self.add_affine(&result, &base);
            }
            base = self.add_affine(&base, &base);
        }

        if scalar.is_negative() {
            self.negate_affine(&result)
        } else {
            result
        }
    }
}

impl EcGroup for WeierstrassGroup {
    fn library_name(&self) -> &'static str {
        crate::LIBRARY_NAME
    }

    fn curve_name(&self) -> &str {
        &self.meta.name
    }

    fn field(&self) -> &BigInt {
        &self.param.p
    }

    fn order(&self) -> &BigInt {
        &self.param.n
    }

    fn cofactor(&self) -> &BigInt {
        &self.param.h
    }

    fn generator(&self) -> EcPoint {
        AffinePoint::new(self.param.gx.clone(), self.param.gy.clone()).into()
    }

    fn add(&self, p1: &EcPoint, p2: &EcPoint) -> Result<EcPoint> {
        Ok(self.add_affine(p1.affine(), p2.affine()).into())
    }

    fn negate(&self, p: &EcPoint) -> Result<EcPoint> {
        Ok(self.negate_affine(p.affine()).into())
    }

    fn mul(&self, scalar: &Scalar, p: &EcPoint) -> Result<EcPoint> {
        Ok(self.mul_affine(scalar, p.affine()).into())
    }

    fn mul_base(&self, scalar: &Scalar) -> Result<EcPoint> {
        self.mul(scalar, &self.generator())
    }

    fn div(&self, p: &EcPoint, scalar: &Scalar) -> Result<EcPoint> {
        let inverse = scalar.abs().modinv(&self.param.n).ok_or_else(|| {
            Error::DivideByZero {
                curve: self.meta.name.clone(),
            }
        })?;
        let res = self.mul_affine(&inverse, p.affine());
        if scalar.is_negative() {
            Ok(self.negate_affine(&res).into())
        } else {
            Ok(res.into())
        }
    }

    fn serialize_point(&self, p: &EcPoint, format: PointFormat) -> Result<Vec<u8>> {
        validate::format("serialize Weierstrass point", format, PointFormat::Autonomous)?;
        let point = p.affine();
        let len = self.field_byte_len();
        let (_, x) = point.x.to_bytes_be();
        let (_, y) = point.y.to_bytes_be();
        if x.len() > len || y.len() > len {
            return Err(Error::format(
                "serialize Weierstrass point",
                "coordinate exceeds the field width",
            ));
        }
        let mut out = vec![0u8; 2 * len];
        out[len - x.len()..len].copy_from_slice(&x);
        out[2 * len - y.len()..].copy_from_slice(&y);
        Ok(out)
    }

    fn deserialize_point(&self, buf: &[u8], format: PointFormat) -> Result<EcPoint> {
        validate::format(
            "deserialize Weierstrass point",
            format,
            PointFormat::Autonomous,
        )?;
        let len = self.field_byte_len();
        validate::length("deserialize Weierstrass point", buf.len(), 2 * len)?;
        let x = BigInt::from_bytes_be(Sign::Plus, &buf[..len]);
        let y = BigInt::from_bytes_be(Sign::Plus, &buf[len..]);
        Ok(AffinePoint::new(x, y).into())
    }

    fn hash_to_curve(&self, _strategy: HashToCurveStrategy, _msg: &[u8]) -> Result<EcPoint> {
        Err(Error::unsupported(
            self.meta.name.clone(),
            "hash_to_curve",
        ))
    }

    fn point_equal(&self, p1: &EcPoint, p2: &EcPoint) -> bool {
        p1.affine() == p2.affine()
    }

    fn is_in_curve_group(&self, p: &EcPoint) -> bool {
        let point = p.affine();
        if Self::is_affine_infinity(point) {
            return true;
        }
        let residual = &point.y * &point.y
            - &point.x * &point.x * &point.x
            - &self.param.a * &point.x
            - &self.param.b;
        residual.mod_floor(&self.param.p).is_zero()
    }

    fn is_infinity(&self, p: &EcPoint) -> bool {
        Self::is_affine_infinity(p.affine())
    }
}

impl fmt::Display for WeierstrassGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ==> y^2 = x^3 + {}x + {} (mod {})",
            self.meta.name, self.param.a, self.param.b, self.param.p
        )
    }
}
