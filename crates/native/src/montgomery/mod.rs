//! X-only Montgomery group: y² = x³ + a·x² + x (mod p)
//!
//! Points carry only their x-coordinate, which is all a Diffie-Hellman
//! style exchange needs. General point addition cannot be expressed on
//! this representation (there is no y-coordinate sign to combine two
//! arbitrary points) and fails with an unsupported-operation error;
//! scalar multiplication runs through a branchless, fixed-iteration
//! differential ladder.

use core::fmt;

use ecgroup_api::error::validate;
use ecgroup_api::{
    AffinePoint, CurveMeta, EcGroup, EcPoint, Error, HashToCurveStrategy, PointFormat, Result,
    Scalar,
};
use ecgroup_params::MontgomeryCurveParam;
use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::hash;

/// Clamp a scalar to the canonical cofactor-aligned window (the X25519
/// convention): clear bits 0..=2 and 255, set bit 254.
fn mask_scalar(scalar: &mut Scalar) {
    scalar.set_bit(0, false);
    scalar.set_bit(1, false);
    scalar.set_bit(2, false);
    scalar.set_bit(255, false);
    scalar.set_bit(254, true);
}

/// Canonicalize a 256-bit x-coordinate encoding of a 255-bit field
/// element.
fn mask_point(x: &mut BigInt) {
    x.set_bit(255, false);
}

/// Branchless conditional swap; `swap` must be 0 or 1.
///
/// The arithmetic-masking form keeps the ladder's operation sequence
/// independent of the swap value.
fn cswap(swap: u8, a: &mut BigInt, b: &mut BigInt) {
    let dummy = BigInt::from(swap) * (&*a - &*b);
    *a -= &dummy;
    *b += dummy;
}

/// X-coordinate-only implementation backed by the Montgomery ladder.
pub struct MontgomeryGroup {
    meta: CurveMeta,
    param: &'static MontgomeryCurveParam,
}

impl MontgomeryGroup {
    /// Bind a curve identity to its parameter record.
    pub fn new(meta: CurveMeta, param: &'static MontgomeryCurveParam) -> Self {
        MontgomeryGroup { meta, param }
    }

    fn field_byte_len(&self) -> usize {
        ((self.param.p.bits() + 7) / 8) as usize
    }

    fn mul_mod(&self, a: &BigInt, b: &BigInt) -> BigInt {
        (a * b).mod_floor(&self.param.p)
    }

    /// Differential addition/doubling ladder over the masked scalar.
    ///
    /// Scans exactly `p.bits()` scalar bits from most to least
    /// significant; every iteration performs the same sequence of field
    /// operations, with the working pairs exchanged by [`cswap`]. Only
    /// the data values depend on the scalar, never the operation count
    /// or order.
    fn ladder(&self, x_coord: &BigInt, k: &Scalar) -> BigInt {
        let p = &self.param.p;

        let mut scalar = k.clone();
        mask_scalar(&mut scalar);
        let mut x1 = x_coord.clone();
        mask_point(&mut x1);

        let mut x2 = BigInt::one();
        let mut z2 = BigInt::zero();
        let mut x3 = x1.clone();
        let mut z3 = BigInt::one();
        let mut swap = 0u8;

        for t in (0..p.bits()).rev() {
            let k_t = u8::from(scalar.bit(t));
            swap ^= k_t;
            cswap(swap, &mut x2, &mut x3);
            cswap(swap, &mut z2, &mut z3);
            swap = k_t;

            let a = &x2 + &z2;
            let aa = self.mul_mod(&a, &a);
            let b = &x2 - &z2;
            let bb = self.mul_mod(&b, &b);
            let e = &aa - &bb;
            let c = &x3 + &z3;
            let d = &x3 - &z3;
            let da = self.mul_mod(&d, &a);
            let cb = self.mul_mod(&c, &b);

            let t0 = &da + &cb;
            x3 = self.mul_mod(&t0, &t0);
            let t1 = da - cb;
            z3 = self.mul_mod(&x1, &(&t1 * &t1));
            x2 = self.mul_mod(&aa, &bb);
            z2 = self.mul_mod(&e, &(&aa + &self.param.a24 * &e));
        }

        cswap(swap, &mut x2, &mut x3);
        cswap(swap, &mut z2, &mut z3);

        // Fermat inversion: a fixed-exponent modpow instead of a
        // variable-time extended-Euclid inverse.
        let inv = z2.modpow(&(p - 2u32), p);
        self.mul_mod(&x2, &inv)
    }
}

impl EcGroup for MontgomeryGroup {
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
        AffinePoint::x_only(self.param.gx.clone()).into()
    }

    fn add(&self, _p1: &EcPoint, _p2: &EcPoint) -> Result<EcPoint> {
        Err(Error::unsupported(self.meta.name.clone(), "add"))
    }

    /// X-only negation: -P = (n - 1)·P.
    fn negate(&self, p: &EcPoint) -> Result<EcPoint> {
        self.mul(&(&self.param.n - 1u32), p)
    }

    fn mul(&self, scalar: &Scalar, p: &EcPoint) -> Result<EcPoint> {
        let x = self.ladder(&p.affine().x, scalar);
        Ok(AffinePoint::x_only(x).into())
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
        let res = self.mul(&inverse, p)?;
        if scalar.is_negative() {
            self.negate(&res)
        } else {
            Ok(res)
        }
    }

    fn serialize_point(&self, p: &EcPoint, format: PointFormat) -> Result<Vec<u8>> {
        validate::format("serialize Montgomery point", format, PointFormat::Autonomous)?;
        let len = self.field_byte_len();
        let (_, x) = p.affine().x.to_bytes_le();
        if x.len() > len {
            return Err(Error::format(
                "serialize Montgomery point",
                "coordinate exceeds the field width",
            ));
        }
        let mut out = vec![0u8; len];
        out[..x.len()].copy_from_slice(&x);
        Ok(out)
    }

    fn deserialize_point(&self, buf: &[u8], format: PointFormat) -> Result<EcPoint> {
        validate::format(
            "deserialize Montgomery point",
            format,
            PointFormat::Autonomous,
        )?;
        validate::length("deserialize Montgomery point", buf.len(), self.field_byte_len())?;
        let x = BigInt::from_bytes_le(Sign::Plus, buf);
        Ok(AffinePoint::x_only(x).into())
    }

    fn hash_to_curve(&self, strategy: HashToCurveStrategy, msg: &[u8]) -> Result<EcPoint> {
        let digest =
            hash::hash_as_point_x(&self.meta.name, strategy, self.param.p.bits(), msg)?;
        // The digest bytes become the x-coordinate directly, without
        // reduction or cofactor clearing.
        let x = BigInt::from_bytes_be(Sign::Plus, &digest);
        Ok(AffinePoint::x_only(x).into())
    }

    fn point_equal(&self, p1: &EcPoint, p2: &EcPoint) -> bool {
        p1.affine().x == p2.affine().x
    }

    /// Accepts every x with 0 ≤ x < p.
    ///
    /// Points on the curve's quadratic twist pass deliberately: in the
    /// Diffie-Hellman setting this group targets, callers do not
    /// distinguish the twist, and downstream protocols may depend on
    /// the looser check.
    fn is_in_curve_group(&self, p: &EcPoint) -> bool {
        let x = &p.affine().x;
        !x.is_negative() && x < &self.param.p
    }

    fn is_infinity(&self, p: &EcPoint) -> bool {
        p.affine().x.is_zero()
    }
}

impl fmt::Display for MontgomeryGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ==> y^2 = x^3 + {}x^2 + x (mod {})",
            self.meta.name, self.param.a, self.param.p
        )
    }
}
