//! Validation utilities for curve-group operations

use super::{Error, Result};
use crate::point::PointFormat;

/// Validate that a serialized-point buffer has the expected length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::format(
            context,
            format!("expected {expected} bytes, got {actual}"),
        ));
    }
    Ok(())
}

/// Validate that a requested point encoding is the one a backend supports
#[inline(always)]
pub fn format(context: &'static str, requested: PointFormat, supported: PointFormat) -> Result<()> {
    if requested != supported {
        return Err(Error::format(
            context,
            format!("{requested:?} is not supported, only {supported:?}"),
        ));
    }
    Ok(())
}
