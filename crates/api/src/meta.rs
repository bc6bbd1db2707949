//! Curve identity and operation selectors

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identity of a curve as requested by a caller.
///
/// Carries the display name; backends match on the normalized
/// [`lower_name`](CurveMeta::lower_name) so lookups are
/// case-insensitive ("SM2" and "sm2" resolve the same curve).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CurveMeta {
    /// Display name of the curve, as supplied by the caller
    pub name: String,
}

impl CurveMeta {
    /// Create a curve identity from a display name.
    pub fn new(name: impl Into<String>) -> Self {
        CurveMeta { name: name.into() }
    }

    /// Normalized lower-case lookup key for this curve.
    pub fn lower_name(&self) -> String {
        self.name.to_ascii_lowercase()
    }
}

/// Strategy for mapping arbitrary bytes to a curve point.
///
/// All strategies here are plain hash-as-x approximations: the digest
/// bytes become an x-coordinate directly, with no cofactor clearing and
/// no indifferentiability guarantee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HashToCurveStrategy {
    /// SHA-2 family, digest width chosen from the field bit-length
    HashAsPointXSha2,
    /// SHA-3 family (not implemented by the native backend)
    HashAsPointXSha3,
    /// SM3, fixed 256-bit digest
    HashAsPointXSm,
}
