//! Reference curve backend for the ecgroup library
//!
//! A self-contained, pure-Rust backend over arbitrary-precision
//! integers, covering two curve families:
//!
//! - [`WeierstrassGroup`]: affine chord-and-tangent arithmetic for
//!   secp256k1 and sm2
//! - [`MontgomeryGroup`]: an X-coordinate-only, constant-time ladder
//!   for curve25519
//!
//! The backend registers itself under [`LIBRARY_NAME`] with a low
//! [`LIBRARY_PRIORITY`] so that optimized backends claiming the same
//! curves win resolution when present.

mod hash;
mod montgomery;
mod weierstrass;

pub use montgomery::MontgomeryGroup;
pub use weierstrass::WeierstrassGroup;

use ecgroup_api::{CurveMeta, EcGroup, Error, Registry, Result};

/// Name under which this backend registers itself.
pub const LIBRARY_NAME: &str = "native";

/// Registration priority of this backend.
pub const LIBRARY_PRIORITY: u32 = 10;

/// Whether this backend has parameters for the requested curve.
pub fn is_supported(meta: &CurveMeta) -> bool {
    let name = meta.lower_name();
    ecgroup_params::weierstrass_param(&name).is_some()
        || ecgroup_params::montgomery_param(&name).is_some()
}

/// Build a group for a supported curve.
pub fn create(meta: &CurveMeta) -> Result<Box<dyn EcGroup>> {
    let name = meta.lower_name();
    if let Some(param) = ecgroup_params::weierstrass_param(&name) {
        return Ok(Box::new(WeierstrassGroup::new(meta.clone(), param)));
    }
    if let Some(param) = ecgroup_params::montgomery_param(&name) {
        return Ok(Box::new(MontgomeryGroup::new(meta.clone(), param)));
    }
    Err(Error::UnsupportedCurve {
        name: meta.name.clone(),
    })
}

/// Register this backend against a registry.
pub fn register(registry: &mut Registry) -> Result<()> {
    registry.register(LIBRARY_NAME, LIBRARY_PRIORITY, is_supported, create)
}
