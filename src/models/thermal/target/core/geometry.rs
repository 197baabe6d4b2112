//! Validated target geometry.
//!
//! The target is a set of concentric cylinders around a liquid-argon bore:
//!
//! ```text
//!  bore | steel wall | vacuum gap | steel | LAr annulus | steel | foam | air
//!       r_bore       r_steel      r_vac   r_ann_i       r_ann_oi r_ann_oo r_foam
//! ```
//!
//! A [`Geometry`] can only be built with every dimension finite and strictly
//! positive and every radius strictly larger than the one inside it, so the resistance
//! network never sees an inverted shell.

mod config;
mod error;

pub use config::{GeometryConfig, GeometryKey, Inches};
pub use error::GeometryError;

use std::f64::consts::PI;

use uom::si::f64::{Area, Length, Volume};

use crate::support::{
    constraint::{ConstraintError, PositiveFinite},
    resistance::{ResistanceError, annulus_area},
};

/// Target dimensions, validated and converted from a [`GeometryConfig`].
///
/// Lengths are held as [`Length`] quantities (read them in centimeters with
/// `.get::<centimeter>()`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub(super) bore_radius: Length,
    pub(super) steel_outer_radius: Length,
    pub(super) vacuum_outer_radius: Length,
    pub(super) annulus_inner_radius: Length,
    pub(super) annulus_outer_inner_radius: Length,
    pub(super) annulus_outer_outer_radius: Length,
    pub(super) foam_outer_radius: Length,
    pub(super) lar_length: Length,
    pub(super) annulus_length: Length,
    pub(super) aluminum_thickness: Length,
}

impl Geometry {
    /// Converts `config` from inches and validates it.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] if any dimension is not finite and strictly
    /// positive or the radii are not strictly increasing from the bore outward.
    pub fn new(config: &GeometryConfig) -> Result<Self, GeometryError> {
        let length = |key| config.get(key).to_length();

        Self {
            bore_radius: length(GeometryKey::BoreRadius),
            steel_outer_radius: length(GeometryKey::SteelOuterRadius),
            vacuum_outer_radius: length(GeometryKey::VacuumOuterRadius),
            annulus_inner_radius: length(GeometryKey::AnnulusInnerRadius),
            annulus_outer_inner_radius: length(GeometryKey::AnnulusOuterInnerRadius),
            annulus_outer_outer_radius: length(GeometryKey::AnnulusOuterOuterRadius),
            foam_outer_radius: length(GeometryKey::FoamOuterRadius),
            lar_length: length(GeometryKey::LarLength),
            annulus_length: length(GeometryKey::AnnulusLength),
            aluminum_thickness: length(GeometryKey::AluminumThickness),
        }
        .validated()
    }

    /// The ARTIE-II target.
    ///
    /// # Errors
    ///
    /// Never fails for the built-in defaults; the `Result` keeps the
    /// validation path in one place.
    pub fn artie() -> Result<Self, GeometryError> {
        Self::new(&GeometryConfig::default())
    }

    /// Returns the dimension named by `key`.
    #[must_use]
    pub fn get(&self, key: GeometryKey) -> Length {
        match key {
            GeometryKey::BoreRadius => self.bore_radius,
            GeometryKey::SteelOuterRadius => self.steel_outer_radius,
            GeometryKey::VacuumOuterRadius => self.vacuum_outer_radius,
            GeometryKey::AnnulusInnerRadius => self.annulus_inner_radius,
            GeometryKey::AnnulusOuterInnerRadius => self.annulus_outer_inner_radius,
            GeometryKey::AnnulusOuterOuterRadius => self.annulus_outer_outer_radius,
            GeometryKey::FoamOuterRadius => self.foam_outer_radius,
            GeometryKey::LarLength => self.lar_length,
            GeometryKey::AnnulusLength => self.annulus_length,
            GeometryKey::AluminumThickness => self.aluminum_thickness,
        }
    }

    #[must_use]
    pub fn bore_radius(&self) -> Length {
        self.bore_radius
    }

    #[must_use]
    pub fn steel_outer_radius(&self) -> Length {
        self.steel_outer_radius
    }

    #[must_use]
    pub fn vacuum_outer_radius(&self) -> Length {
        self.vacuum_outer_radius
    }

    #[must_use]
    pub fn annulus_inner_radius(&self) -> Length {
        self.annulus_inner_radius
    }

    #[must_use]
    pub fn annulus_outer_inner_radius(&self) -> Length {
        self.annulus_outer_inner_radius
    }

    #[must_use]
    pub fn annulus_outer_outer_radius(&self) -> Length {
        self.annulus_outer_outer_radius
    }

    #[must_use]
    pub fn foam_outer_radius(&self) -> Length {
        self.foam_outer_radius
    }

    /// Length of the liquid-argon column (and of the bore, wall, and vacuum gap).
    #[must_use]
    pub fn lar_length(&self) -> Length {
        self.lar_length
    }

    /// Length of the annulus, its walls, and the foam.
    #[must_use]
    pub fn annulus_length(&self) -> Length {
        self.annulus_length
    }

    #[must_use]
    pub fn aluminum_thickness(&self) -> Length {
        self.aluminum_thickness
    }

    /// Radial thickness of each layer, from the steel wall outward.
    ///
    /// The six gaps between the seven radii in [`GeometryKey::RADII`].
    #[must_use]
    pub fn gaps(&self) -> [Length; 6] {
        let radii = GeometryKey::RADII.map(|key| self.get(key));
        std::array::from_fn(|i| radii[i + 1] - radii[i])
    }

    /// Radial thickness of the foam, also used as the end-cap foam thickness.
    #[must_use]
    pub fn foam_thickness(&self) -> Length {
        self.foam_outer_radius - self.annulus_outer_outer_radius
    }

    /// Cross-sectional area of the bore.
    #[must_use]
    pub fn bore_area(&self) -> Area {
        self.bore_radius * self.bore_radius * PI
    }

    /// End-cap area of the vacuum gap.
    ///
    /// # Errors
    ///
    /// Never fails for a validated geometry; the error is that of
    /// [`annulus_area`].
    pub fn vacuum_face_area(&self) -> Result<Area, ResistanceError> {
        annulus_area(self.steel_outer_radius, self.vacuum_outer_radius)
    }

    /// End-cap area of the foam.
    ///
    /// # Errors
    ///
    /// Never fails for a validated geometry; the error is that of
    /// [`annulus_area`].
    pub fn foam_face_area(&self) -> Result<Area, ResistanceError> {
        annulus_area(self.annulus_outer_outer_radius, self.foam_outer_radius)
    }

    /// Volume of liquid argon in the bore.
    #[must_use]
    pub fn liquid_volume(&self) -> Volume {
        self.bore_area() * self.lar_length
    }

    /// Returns a geometry with the vacuum gap widened by `delta`.
    ///
    /// Every radius from the vacuum gap outward shifts by `delta`, so the
    /// radial thickness of every other layer is unchanged. A negative
    /// `delta` narrows the gap.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] if the shifted geometry is invalid, for
    /// example when `delta` closes the gap entirely.
    pub fn with_vacuum_offset(&self, delta: Length) -> Result<Self, GeometryError> {
        Self {
            vacuum_outer_radius: self.vacuum_outer_radius + delta,
            annulus_inner_radius: self.annulus_inner_radius + delta,
            annulus_outer_inner_radius: self.annulus_outer_inner_radius + delta,
            annulus_outer_outer_radius: self.annulus_outer_outer_radius + delta,
            foam_outer_radius: self.foam_outer_radius + delta,
            ..*self
        }
        .validated()
    }

    /// Returns a geometry with the foam outer radius replaced.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] if `radius` does not exceed the annulus
    /// outer wall.
    pub fn with_foam_outer_radius(&self, radius: Length) -> Result<Self, GeometryError> {
        Self {
            foam_outer_radius: radius,
            ..*self
        }
        .validated()
    }

    /// Returns a geometry with every dimension multiplied by `factor`.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] if `factor` is not finite and strictly
    /// positive.
    pub fn scaled(&self, factor: f64) -> Result<Self, GeometryError> {
        Self {
            bore_radius: self.bore_radius * factor,
            steel_outer_radius: self.steel_outer_radius * factor,
            vacuum_outer_radius: self.vacuum_outer_radius * factor,
            annulus_inner_radius: self.annulus_inner_radius * factor,
            annulus_outer_inner_radius: self.annulus_outer_inner_radius * factor,
            annulus_outer_outer_radius: self.annulus_outer_outer_radius * factor,
            foam_outer_radius: self.foam_outer_radius * factor,
            lar_length: self.lar_length * factor,
            annulus_length: self.annulus_length * factor,
            aluminum_thickness: self.aluminum_thickness * factor,
        }
        .validated()
    }

    fn validated(self) -> Result<Self, GeometryError> {
        for key in GeometryKey::ALL {
            let value = self.get(key);
            match PositiveFinite::new(value) {
                Ok(_) => {}
                Err(ConstraintError::NotFinite) => {
                    return Err(GeometryError::NotFinite { key, value });
                }
                Err(_) => return Err(GeometryError::NonPositive { key, value }),
            }
        }

        for pair in GeometryKey::RADII.windows(2) {
            let (inner, outer) = (pair[0], pair[1]);
            let (inner_value, outer_value) = (self.get(inner), self.get(outer));
            if outer_value <= inner_value {
                return Err(GeometryError::NotIncreasing {
                    inner,
                    inner_value,
                    outer,
                    outer_value,
                });
            }
        }

        log::trace!("validated target geometry: {self:?}");
        Ok(self)
    }
}
