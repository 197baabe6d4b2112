//! The ARTIE-II cryogenic target.
//!
//! Heat leaks from ambient air into the liquid argon through a chain of
//! concentric layers (films, steel walls, a vacuum gap, and foam) and through
//! the aluminum end windows. This module evaluates that resistance network and
//! the boil-off time it implies.
//!
//! Start from a [`GeometryConfig`] (dimensions in inches, with per-key
//! overrides or serde input), validate it into a [`Geometry`], and wrap it in
//! a [`Target`]:
//!
//! ```
//! use artie_models::models::thermal::{
//!     materials::{Environment, Materials},
//!     target::{Geometry, GeometryConfig, Inches, Target},
//! };
//! use uom::si::time::hour;
//!
//! let config = GeometryConfig::default().with_override("foam_outer_radius", Inches(3.0))?;
//! let target = Target::new(
//!     Geometry::new(&config)?,
//!     Materials::artie(),
//!     Environment::default(),
//! );
//!
//! let tau = target.tau_alpha()?;
//! assert!(tau.get::<hour>() > 10.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! [`BoilOffModel`] and [`VacuumOffsetModel`] expose the same calculations
//! through [`twine_core::Model`].

mod core;

pub use self::core::{
    BoilOff, BoilOffError, Contribution, FaceLayer, Geometry, GeometryConfig, GeometryError,
    GeometryKey, Inches, Layer, Network, NetworkError, NetworkTotals, SurfaceLayer, SweepPoint,
    Target,
};

use twine_core::Model;
use uom::si::f64::{Length, Time};

use crate::models::thermal::materials::{Environment, Materials};

/// Evaluates the boil-off of any geometry under fixed materials and ambient.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoilOffModel {
    pub materials: Materials,
    pub environment: Environment,
}

impl BoilOffModel {
    #[must_use]
    pub fn new(materials: Materials, environment: Environment) -> Self {
        Self {
            materials,
            environment,
        }
    }
}

impl Model for BoilOffModel {
    type Input = Geometry;
    type Output = BoilOff;
    type Error = BoilOffError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Target::new(*input, self.materials, self.environment).boil_off()
    }
}

/// Maps a vacuum gap offset to τα for a borrowed target.
#[derive(Debug, Clone, Copy)]
pub struct VacuumOffsetModel<'a> {
    target: &'a Target,
}

impl<'a> VacuumOffsetModel<'a> {
    #[must_use]
    pub fn new(target: &'a Target) -> Self {
        Self { target }
    }
}

impl Model for VacuumOffsetModel<'_> {
    type Input = Length;
    type Output = Time;
    type Error = BoilOffError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.target.tau_alpha_with_vacuum_offset(*input)
    }
}
