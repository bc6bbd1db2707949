//! Montgomery curve parameters: y² = x³ + a·x² + x (mod p)

use num_bigint::BigInt;
use once_cell::sync::Lazy;

use crate::hex;

/// Fixed constants of one Montgomery curve, used X-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MontgomeryCurveParam {
    /// Coefficient a
    pub a: BigInt,
    /// Field prime p
    pub p: BigInt,
    /// Generator x-coordinate (no y-coordinate is carried)
    pub gx: BigInt,
    /// Order n of the generator
    pub n: BigInt,
    /// Cofactor h
    pub h: BigInt,
    /// Ladder constant (a − 2) / 4, derived once at construction
    pub a24: BigInt,
}

impl MontgomeryCurveParam {
    /// Build a record, deriving `a24` from `a`.
    pub fn new(a: BigInt, p: BigInt, gx: BigInt, n: BigInt, h: BigInt) -> Self {
        let a24 = (&a - 2) / 4;
        MontgomeryCurveParam { a, p, gx, n, h, a24 }
    }
}

/// RFC 7748 curve25519: p = 2²⁵⁵ − 19, a = 486662, gx = 9, h = 8.
pub static CURVE25519: Lazy<MontgomeryCurveParam> = Lazy::new(|| {
    MontgomeryCurveParam::new(
        BigInt::from(486662u32),
        hex("7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffed"),
        BigInt::from(9u32),
        // 2²⁵² + 27742317777372353535851937790883648493
        hex("1000000000000000000000000000000014def9dea2f79cd65812631a5cf5d3ed"),
        BigInt::from(8u32),
    )
});

/// Look up a predefined Montgomery curve by normalized (lower-case) name.
pub fn montgomery_param(lower_name: &str) -> Option<&'static MontgomeryCurveParam> {
    match lower_name {
        "curve25519" => Some(&CURVE25519),
        _ => None,
    }
}
