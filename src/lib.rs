//! # ecgroup
//!
//! A pluggable elliptic-curve-group abstraction for secure-computation
//! protocols that need curve-agnostic point arithmetic.
//!
//! ## Usage
//!
//! ```
//! use ecgroup::prelude::*;
//!
//! let group = create_group("secp256k1").unwrap();
//! let point = group.mul_base(&Scalar::from(42u32)).unwrap();
//! assert!(group.is_in_curve_group(&point));
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several
//! sub-crates:
//!
//! - [`ecgroup-api`](ecgroup_api): the [`EcGroup`] trait, value types,
//!   errors, and the backend [`Registry`]
//! - [`ecgroup-params`](ecgroup_params): immutable curve-parameter
//!   records
//! - [`ecgroup-native`](ecgroup_native): the self-contained reference
//!   backend
//!
//! The facade owns the process-wide registry: every built-in backend is
//! registered exactly once, on first use, and [`create_group`] resolves
//! curve names against it. Embedders wanting a custom backend mix build
//! their own [`Registry`] value instead.

pub use ecgroup_api as api;
pub use ecgroup_native as native;
pub use ecgroup_params as params;

pub use ecgroup_api::{
    AffinePoint, CurveMeta, EcGroup, EcPoint, Error, HashToCurveStrategy, PointFormat, Registry,
    Result, Scalar,
};

use once_cell::sync::Lazy;

// Populated once, before any resolution; read-only afterwards.
static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let mut registry = Registry::new();
    ecgroup_native::register(&mut registry)
        .expect("native backend registers once during initialization");
    registry
});

/// The process-wide backend registry.
pub fn registry() -> &'static Registry {
    &REGISTRY
}

/// Resolve a curve by name and return the winning backend's group.
///
/// Curve names are case-insensitive. Fails with
/// [`Error::UnsupportedCurve`] when no registered backend supports the
/// name.
pub fn create_group(curve_name: &str) -> Result<Box<dyn EcGroup>> {
    REGISTRY.resolve(&CurveMeta::new(curve_name))
}

/// Common imports for ecgroup users
pub mod prelude {
    pub use crate::{
        create_group, AffinePoint, CurveMeta, EcGroup, EcPoint, Error, HashToCurveStrategy,
        PointFormat, Result, Scalar,
    };
}
