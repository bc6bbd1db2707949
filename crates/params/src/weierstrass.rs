//! Short-Weierstrass curve parameters: y² = x³ + a·x + b (mod p)

use num_bigint::BigInt;
use once_cell::sync::Lazy;

use crate::hex;

/// Fixed constants of one short-Weierstrass curve.
///
/// Invariants: `p` is prime, `(gx, gy)` satisfies the curve equation
/// mod `p`, and the generator has order `n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeierstrassCurveParam {
    /// Coefficient a
    pub a: BigInt,
    /// Coefficient b
    pub b: BigInt,
    /// Generator x-coordinate
    pub gx: BigInt,
    /// Generator y-coordinate
    pub gy: BigInt,
    /// Field prime p
    pub p: BigInt,
    /// Order n of the generator
    pub n: BigInt,
    /// Cofactor h
    pub h: BigInt,
}

/// SEC2 secp256k1: p = 2²⁵⁶ − 2³² − 977, a = 0, b = 7, h = 1.
pub static SECP256K1: Lazy<WeierstrassCurveParam> = Lazy::new(|| WeierstrassCurveParam {
    a: hex("0"),
    b: hex("7"),
    gx: hex("79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"),
    gy: hex("483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8"),
    p: hex("fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f"),
    n: hex("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141"),
    h: hex("1"),
});

/// OSCCA GB/T 32918 sm2 recommended curve, h = 1.
pub static SM2: Lazy<WeierstrassCurveParam> = Lazy::new(|| WeierstrassCurveParam {
    a: hex("fffffffeffffffffffffffffffffffffffffffff00000000fffffffffffffffc"),
    b: hex("28e9fa9e9d9f5e344d5a9e4bcf6509a7f39789f515ab8f92ddbcbd414d940e93"),
    gx: hex("32c4ae2c1f1981195f9904466a39c9948fe30bbff2660be1715a4589334c74c7"),
    gy: hex("bc3736a2f4f6779c59bdcee36b692153d0a9877cc62a474002df32e52139f0a0"),
    p: hex("fffffffeffffffffffffffffffffffffffffffff00000000ffffffffffffffff"),
    n: hex("fffffffeffffffffffffffffffffffff7203df6b21c6052b53bbf40939d54123"),
    h: hex("1"),
});

/// Look up a predefined Weierstrass curve by normalized (lower-case) name.
pub fn weierstrass_param(lower_name: &str) -> Option<&'static WeierstrassCurveParam> {
    match lower_name {
        "secp256k1" => Some(&SECP256K1),
        "sm2" => Some(&SM2),
        _ => None,
    }
}
