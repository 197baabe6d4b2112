use thiserror::Error;

use crate::support::resistance::ResistanceError;

use super::Layer;

/// A layer of the resistance network could not be evaluated.
///
/// Carries the failing [`Layer`] so a bad material constant or dimension can
/// be traced to the part of the target that uses it.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{layer} resistance failed")]
pub struct NetworkError {
    pub layer: Layer,
    #[source]
    pub source: ResistanceError,
}

impl NetworkError {
    pub(super) fn at(layer: impl Into<Layer>) -> impl FnOnce(ResistanceError) -> Self {
        let layer = layer.into();
        move |source| Self { layer, source }
    }

    /// Returns `true` if the layer's dimensions are invalid.
    #[must_use]
    pub fn is_invalid_geometry(&self) -> bool {
        self.source.is_invalid_geometry()
    }

    /// Returns `true` if the layer's material constants are invalid.
    #[must_use]
    pub fn is_invalid_material(&self) -> bool {
        self.source.is_invalid_material()
    }
}
