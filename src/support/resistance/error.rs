use thiserror::Error;
use uom::si::f64::Length;

use crate::support::constraint::ConstraintError;

/// Errors from the resistance formulas.
///
/// Each variant is either an invalid-geometry or an invalid-material fault;
/// see [`is_invalid_geometry`](Self::is_invalid_geometry) and
/// [`is_invalid_material`](Self::is_invalid_material).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResistanceError {
    /// A radius, length, thickness, or area is not a finite positive value.
    #[error("invalid geometry: {name} must be finite and strictly positive")]
    NonPositiveDimension {
        name: &'static str,
        #[source]
        source: ConstraintError,
    },

    /// The outer radius of a shell does not exceed its inner radius.
    #[error("invalid geometry: outer radius {outer:?} must exceed inner radius {inner:?}")]
    RadiiNotIncreasing { inner: Length, outer: Length },

    /// A conductivity or film coefficient is not a finite positive value.
    #[error("invalid material: {name} must be finite and strictly positive")]
    NonPositiveMaterial {
        name: &'static str,
        #[source]
        source: ConstraintError,
    },
}

impl ResistanceError {
    /// Returns `true` if the fault lies in the dimensions of the layer.
    #[must_use]
    pub fn is_invalid_geometry(&self) -> bool {
        matches!(
            self,
            Self::NonPositiveDimension { .. } | Self::RadiiNotIncreasing { .. }
        )
    }

    /// Returns `true` if the fault lies in the material constants of the layer.
    #[must_use]
    pub fn is_invalid_material(&self) -> bool {
        matches!(self, Self::NonPositiveMaterial { .. })
    }
}
