use thiserror::Error;
use uom::si::f64::Length;

use super::GeometryKey;

/// Errors from building or perturbing a target [`Geometry`](super::Geometry).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// An override named a dimension that does not exist.
    #[error("unknown geometry key `{0}`")]
    UnknownKey(String),

    /// A dimension is zero, negative, or `NaN`.
    #[error("invalid geometry: {key} must be strictly positive, got {value:?}")]
    NonPositive { key: GeometryKey, value: Length },

    /// A dimension is infinite.
    #[error("invalid geometry: {key} must be finite, got {value:?}")]
    NotFinite { key: GeometryKey, value: Length },

    /// A radius does not exceed the radius of the layer inside it.
    #[error("invalid geometry: {outer} ({outer_value:?}) must exceed {inner} ({inner_value:?})")]
    NotIncreasing {
        inner: GeometryKey,
        inner_value: Length,
        outer: GeometryKey,
        outer_value: Length,
    },
}
