use thiserror::Error;
use uom::si::f64::{Length, TemperatureInterval, ThermodynamicTemperature};

use crate::support::{constraint::ConstraintError, resistance::ResistanceError};

use super::PipeLayer;

/// Errors from the insulated pipe model.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PipeError {
    #[error("invalid pipe: {name} must be finite and strictly positive")]
    NonPositive {
        name: &'static str,
        #[source]
        source: ConstraintError,
    },

    #[error("invalid pipe: outer radius {outer:?} must exceed inner radius {inner:?}")]
    RadiiNotIncreasing { inner: Length, outer: Length },

    #[error("{layer} resistance failed")]
    Layer {
        layer: PipeLayer,
        #[source]
        source: ResistanceError,
    },

    /// The outside is not warmer than the inside.
    #[error("no heat leak: outside {outside:?} is not above inside {inside:?}")]
    NoHeatLeak {
        inside: ThermodynamicTemperature,
        outside: ThermodynamicTemperature,
    },

    #[error("invalid liquid {property}")]
    InvalidLiquid {
        property: &'static str,
        #[source]
        source: ConstraintError,
    },

    #[error("invalid temperature rise {rise:?}")]
    InvalidRise {
        rise: TemperatureInterval,
        #[source]
        source: ConstraintError,
    },
}
