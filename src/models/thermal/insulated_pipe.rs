//! The single-walled ARTIE-I target.
//!
//! Liquid argon fills a steel pipe wrapped in foam. Heat crosses three
//! resistors in series ([`PipeLayer`]); end-caps are not modeled.

mod error;

pub use error::PipeError;

use std::fmt;

use twine_core::Model;
use uom::{
    ConstZero,
    si::{
        f64::{Length, Power, TemperatureInterval, ThermodynamicTemperature, Time, Volume},
        length::centimeter,
    },
};

use crate::{
    models::thermal::materials::{Environment, Materials},
    support::{
        constraint::{Finite, NonNegative, PositiveFinite, StrictlyPositive},
        resistance::{cylindrical_film, cylindrical_shell},
        units::{TemperatureDifference, ThermalResistance, VolumetricPower},
    },
};

/// The resistors of an insulated pipe, inside out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipeLayer {
    /// Conduction through the steel pipe wall.
    Pipe,
    /// Conduction through the foam wrap.
    Foam,
    /// Convection from the foam surface to ambient air.
    AirFilm,
}

impl PipeLayer {
    pub const ALL: [Self; 3] = [Self::Pipe, Self::Foam, Self::AirFilm];
}

impl fmt::Display for PipeLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pipe => "pipe wall",
            Self::Foam => "foam",
            Self::AirFilm => "air film",
        })
    }
}

/// A foam-insulated steel pipe full of liquid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InsulatedPipe {
    inner_radius: Length,
    outer_radius: Length,
    foam_thickness: Length,
    length: Length,
}

impl InsulatedPipe {
    /// Builds a pipe, checking that every dimension is finite and strictly
    /// positive and that the outer radius exceeds the inner.
    ///
    /// # Errors
    ///
    /// Returns a [`PipeError`] naming the first invalid dimension.
    pub fn new(
        inner_radius: Length,
        outer_radius: Length,
        foam_thickness: Length,
        length: Length,
    ) -> Result<Self, PipeError> {
        for (name, value) in [
            ("inner radius", inner_radius),
            ("outer radius", outer_radius),
            ("foam thickness", foam_thickness),
            ("length", length),
        ] {
            PositiveFinite::new(value).map_err(|source| PipeError::NonPositive { name, source })?;
        }
        if outer_radius <= inner_radius {
            return Err(PipeError::RadiiNotIncreasing {
                inner: inner_radius,
                outer: outer_radius,
            });
        }

        Ok(Self {
            inner_radius,
            outer_radius,
            foam_thickness,
            length,
        })
    }

    /// The 200 cm ARTIE-I pipe with the given foam wrap.
    ///
    /// # Errors
    ///
    /// Returns a [`PipeError`] if `foam_thickness` is not finite and strictly
    /// positive.
    pub fn artie(foam_thickness: Length) -> Result<Self, PipeError> {
        Self::new(
            Length::new::<centimeter>(1.25),
            Length::new::<centimeter>(11.25),
            foam_thickness,
            Length::new::<centimeter>(200.0),
        )
    }

    #[must_use]
    pub fn inner_radius(&self) -> Length {
        self.inner_radius
    }

    #[must_use]
    pub fn outer_radius(&self) -> Length {
        self.outer_radius
    }

    #[must_use]
    pub fn foam_thickness(&self) -> Length {
        self.foam_thickness
    }

    #[must_use]
    pub fn length(&self) -> Length {
        self.length
    }

    #[must_use]
    pub fn foam_outer_radius(&self) -> Length {
        self.outer_radius + self.foam_thickness
    }

    /// Volume of liquid inside the pipe.
    #[must_use]
    pub fn liquid_volume(&self) -> Volume {
        self.inner_radius * self.inner_radius * self.length * std::f64::consts::PI
    }

    /// Resistance of one layer.
    ///
    /// # Errors
    ///
    /// Returns [`PipeError::Layer`] if a material constant is invalid.
    pub fn resistance(
        &self,
        layer: PipeLayer,
        materials: &Materials,
    ) -> Result<ThermalResistance, PipeError> {
        match layer {
            PipeLayer::Pipe => cylindrical_shell(
                materials.steel,
                self.length,
                self.inner_radius,
                self.outer_radius,
            ),
            PipeLayer::Foam => cylindrical_shell(
                materials.foam,
                self.length,
                self.outer_radius,
                self.foam_outer_radius(),
            ),
            PipeLayer::AirFilm => {
                cylindrical_film(materials.air_film, self.length, self.foam_outer_radius())
            }
        }
        .map_err(|source| PipeError::Layer { layer, source })
    }

    /// Sum of the three layers.
    ///
    /// # Errors
    ///
    /// Returns the first layer failure.
    pub fn total_resistance(&self, materials: &Materials) -> Result<ThermalResistance, PipeError> {
        let total = PipeLayer::ALL
            .into_iter()
            .try_fold(ThermalResistance::ZERO, |sum, layer| {
                Ok::<_, PipeError>(sum + self.resistance(layer, materials)?)
            })?;
        log::debug!("insulated pipe: {:.6} K/W", total.value);
        Ok(total)
    }

    /// Heat flowing inward when the liquid sits at `inside` and the air at
    /// `outside`. Negative when the liquid is the warmer side.
    ///
    /// # Errors
    ///
    /// Fails like [`InsulatedPipe::total_resistance`].
    pub fn heat_rate(
        &self,
        materials: &Materials,
        inside: ThermodynamicTemperature,
        outside: ThermodynamicTemperature,
    ) -> Result<Power, PipeError> {
        Ok(outside.minus(inside) / self.total_resistance(materials)?)
    }

    /// [`heat_rate`](Self::heat_rate) per unit of liquid volume.
    ///
    /// # Errors
    ///
    /// Fails like [`InsulatedPipe::total_resistance`].
    pub fn power_density(
        &self,
        materials: &Materials,
        inside: ThermodynamicTemperature,
        outside: ThermodynamicTemperature,
    ) -> Result<VolumetricPower, PipeError> {
        Ok(self.heat_rate(materials, inside, outside)? / self.liquid_volume())
    }

    /// Time to boil off the liquid, `ρ γ / (P/V)`, with the liquid at its
    /// boiling point and the air at ambient.
    ///
    /// # Errors
    ///
    /// Returns [`PipeError::NoHeatLeak`] unless ambient is above the boiling
    /// point, or [`PipeError::InvalidLiquid`] for a non-positive density or
    /// latent heat.
    pub fn tau_alpha(
        &self,
        materials: &Materials,
        environment: &Environment,
    ) -> Result<Time, PipeError> {
        let liquid = materials.liquid;
        let density = positive(liquid.density, "density")?;
        let latent_heat = positive(liquid.latent_heat, "latent heat")?;

        let tau: Time = density * latent_heat / self.inward_density(materials, environment)?;
        log::debug!("insulated pipe tau_alpha: {:.1} s", tau.value);
        Ok(tau)
    }

    /// Time to warm the liquid by `rise`, `ρ β rise / (P/V)`.
    ///
    /// # Errors
    ///
    /// Fails like [`InsulatedPipe::tau_alpha`], or with
    /// [`PipeError::InvalidRise`] if `rise` is negative or `NaN`.
    pub fn tau_beta(
        &self,
        materials: &Materials,
        environment: &Environment,
        rise: TemperatureInterval,
    ) -> Result<Time, PipeError> {
        let rise = NonNegative::new(rise)
            .map_err(|source| PipeError::InvalidRise { rise, source })?
            .into_inner();
        let liquid = materials.liquid;
        let density = positive(liquid.density, "density")?;
        let specific_heat = positive(liquid.specific_heat, "specific heat")?;

        let tau: Time =
            density * specific_heat * rise / self.inward_density(materials, environment)?;
        log::debug!("insulated pipe tau_beta: {:.1} s", tau.value);
        Ok(tau)
    }

    fn inward_density(
        &self,
        materials: &Materials,
        environment: &Environment,
    ) -> Result<VolumetricPower, PipeError> {
        let inside = materials.liquid.boiling_point;
        let outside = environment.ambient;
        if StrictlyPositive::new(outside.minus(inside)).is_err() {
            return Err(PipeError::NoHeatLeak { inside, outside });
        }
        self.power_density(materials, inside, outside)
    }
}

fn positive<T>(value: T, property: &'static str) -> Result<T, PipeError>
where
    T: PartialOrd + num_traits::Zero + Finite,
{
    PositiveFinite::new(value)
        .map(|value| value.into_inner())
        .map_err(|source| PipeError::InvalidLiquid { property, source })
}

/// Heat leak and time constants of an insulated pipe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeBoilOff {
    pub total_resistance: ThermalResistance,
    pub heat_rate: Power,
    pub power_density: VolumetricPower,
    pub tau_alpha: Time,

    /// Time to warm from the freezing point to the boiling point.
    pub tau_beta: Time,
}

/// Evaluates any [`InsulatedPipe`] under fixed materials and ambient.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InsulatedPipeModel {
    pub materials: Materials,
    pub environment: Environment,
}

impl Model for InsulatedPipeModel {
    type Input = InsulatedPipe;
    type Output = PipeBoilOff;
    type Error = PipeError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let (materials, environment) = (&self.materials, &self.environment);
        let liquid = materials.liquid;
        let (inside, outside) = (liquid.boiling_point, environment.ambient);

        Ok(PipeBoilOff {
            total_resistance: input.total_resistance(materials)?,
            heat_rate: input.heat_rate(materials, inside, outside)?,
            power_density: input.power_density(materials, inside, outside)?,
            tau_alpha: input.tau_alpha(materials, environment)?,
            tau_beta: input.tau_beta(
                materials,
                environment,
                liquid.boiling_point.minus(liquid.freezing_point),
            )?,
        })
    }
}
