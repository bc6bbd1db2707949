//! Digest dispatch for the hash-as-point-x strategies

use ecgroup_api::{Error, HashToCurveStrategy, Result};
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512};
use sm3::Sm3;

/// One-shot digest of `msg` under the given strategy.
///
/// The SHA-2 family picks its width from the field bit-length so the
/// digest fills the x-coordinate; SM3 is fixed at 256 bits. The SHA-3
/// strategy is not implemented and fails loudly.
pub(crate) fn hash_as_point_x(
    curve: &str,
    strategy: HashToCurveStrategy,
    field_bits: u64,
    msg: &[u8],
) -> Result<Vec<u8>> {
    match strategy {
        HashToCurveStrategy::HashAsPointXSha2 => {
            let digest = if field_bits <= 224 {
                Sha224::digest(msg).to_vec()
            } else if field_bits <= 256 {
                Sha256::digest(msg).to_vec()
            } else if field_bits <= 384 {
                Sha384::digest(msg).to_vec()
            } else {
                Sha512::digest(msg).to_vec()
            };
            Ok(digest)
        }
        HashToCurveStrategy::HashAsPointXSm => Ok(Sm3::digest(msg).to_vec()),
        HashToCurveStrategy::HashAsPointXSha3 => Err(Error::unsupported(
            curve,
            "hash_to_curve with the HashAsPointXSha3 strategy",
        )),
    }
}
