//! Thermal resistance network and boil-off time of the ARTIE-II target.
//!
//! A [`Target`] pairs a validated [`Geometry`] with a [`Materials`] set and
//! the ambient [`Environment`]. Everything else is derived on demand:
//!
//! - [`Target::network`] evaluates the resistance of each layer,
//! - [`Target::tau_alpha`] turns the total resistance into a boil-off time,
//! - [`Target::tau_alpha_with_vacuum_offset`] and the sweeps evaluate
//!   perturbed copies of the geometry without touching the target.

mod boil_off;
mod geometry;
mod network;
mod sweep;

#[cfg(test)]
mod test_support;

pub use boil_off::{BoilOff, BoilOffError};
pub use geometry::{Geometry, GeometryConfig, GeometryError, GeometryKey, Inches};
pub use network::{
    Contribution, FaceLayer, Layer, Network, NetworkError, NetworkTotals, SurfaceLayer,
};
pub use sweep::SweepPoint;

use crate::models::thermal::materials::{Environment, Materials};

/// A cryogenic target: geometry, materials, and surroundings.
///
/// Immutable once built. Operations that vary a parameter return results for
/// a modified copy and leave `self` as it was, so a `Target` can be shared
/// freely between threads and sweeps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target {
    geometry: Geometry,
    materials: Materials,
    environment: Environment,
}

impl Target {
    #[must_use]
    pub fn new(geometry: Geometry, materials: Materials, environment: Environment) -> Self {
        Self {
            geometry,
            materials,
            environment,
        }
    }

    /// The ARTIE-II target with the ARTIE materials at 300 K ambient.
    ///
    /// # Errors
    ///
    /// Propagates [`Geometry::artie`], which does not fail for the defaults.
    pub fn artie() -> Result<Self, GeometryError> {
        Ok(Self::new(
            Geometry::artie()?,
            Materials::artie(),
            Environment::default(),
        ))
    }

    #[must_use]
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    #[must_use]
    pub fn materials(&self) -> &Materials {
        &self.materials
    }

    #[must_use]
    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Returns a copy of this target with a different geometry.
    #[must_use]
    pub fn with_geometry(&self, geometry: Geometry) -> Self {
        Self { geometry, ..*self }
    }

    /// The resistance network of this target.
    #[must_use]
    pub fn network(&self) -> Network<'_> {
        Network::new(&self.geometry, &self.materials)
    }
}
