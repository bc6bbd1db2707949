//! Curve parameter records for the ecgroup library
//!
//! Immutable records of each supported curve family's fixed constants,
//! plus the predefined parameter tables the native backend serves. Every
//! record is built exactly once, on first access, from the standard hex
//! constants, and stays `'static` thereafter; group implementations only
//! ever borrow them.

mod montgomery;
mod weierstrass;

pub use montgomery::{montgomery_param, MontgomeryCurveParam, CURVE25519};
pub use weierstrass::{weierstrass_param, WeierstrassCurveParam, SECP256K1, SM2};

use num_bigint::BigInt;

/// Parse a hex curve constant.
///
/// Only called on the compiled-in tables below, so a malformed literal
/// is unrecoverable.
fn hex(s: &str) -> BigInt {
    BigInt::parse_bytes(s.as_bytes(), 16).expect("predefined curve constant must be valid hex")
}
