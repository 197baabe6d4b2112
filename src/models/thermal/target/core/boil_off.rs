use thiserror::Error;
use uom::si::f64::{MassRate, Power, TemperatureInterval, ThermodynamicTemperature, Time};

use crate::support::{
    constraint::{ConstraintError, Finite, NonNegative, PositiveFinite, StrictlyPositive},
    units::{TemperatureDifference, ThermalResistance},
};

use super::{GeometryError, NetworkError, NetworkTotals, Target};

/// Steady-state heat leak and boil-off of a target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoilOff {
    /// Surface and face resistance totals.
    pub totals: NetworkTotals,

    /// Heat flowing into the liquid, `ΔT / R_total`.
    pub heat_leak: Power,

    /// Mass of liquid evaporated per unit time.
    pub boil_off_rate: MassRate,

    /// Time to evaporate the bore's liquid at [`heat_leak`](Self::heat_leak).
    pub tau_alpha: Time,
}

impl BoilOff {
    /// Total network resistance.
    #[must_use]
    pub fn total_resistance(&self) -> ThermalResistance {
        self.totals.total()
    }
}

/// Errors from evaluating the heat leak or boil-off time of a target.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BoilOffError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Network(#[from] NetworkError),

    /// Ambient is not warmer than the liquid, so there is nothing to boil it.
    #[error("no heat leak: ambient {ambient:?} is not above boiling point {boiling_point:?}")]
    NoHeatLeak {
        ambient: ThermodynamicTemperature,
        boiling_point: ThermodynamicTemperature,
    },

    /// A liquid property needed for the calculation is not strictly positive.
    #[error("invalid liquid {property}")]
    InvalidLiquid {
        property: &'static str,
        #[source]
        source: ConstraintError,
    },

    /// A warming interval was negative or `NaN`.
    #[error("invalid temperature rise {rise:?}")]
    InvalidRise {
        rise: TemperatureInterval,
        #[source]
        source: ConstraintError,
    },
}

impl Target {
    /// Driving temperature difference, ambient minus boiling point.
    ///
    /// # Errors
    ///
    /// Returns [`BoilOffError::NoHeatLeak`] unless ambient is strictly
    /// warmer than the liquid's boiling point.
    pub fn delta_t(&self) -> Result<TemperatureInterval, BoilOffError> {
        let ambient = self.environment().ambient;
        let boiling_point = self.materials().liquid.boiling_point;
        let delta_t = ambient.minus(boiling_point);

        match StrictlyPositive::new(delta_t) {
            Ok(delta_t) => Ok(delta_t.into_inner()),
            Err(_) => Err(BoilOffError::NoHeatLeak {
                ambient,
                boiling_point,
            }),
        }
    }

    /// Steady-state heat flowing into the liquid.
    ///
    /// # Errors
    ///
    /// Fails if the network cannot be evaluated or there is no driving
    /// temperature difference.
    pub fn heat_leak(&self) -> Result<Power, BoilOffError> {
        let r_total = self.network().total()?;
        self.heat_leak_through(r_total)
    }

    /// Rate at which the heat leak evaporates liquid.
    ///
    /// # Errors
    ///
    /// Fails like [`Target::heat_leak`], or if the latent heat is not
    /// strictly positive.
    pub fn boil_off_rate(&self) -> Result<MassRate, BoilOffError> {
        let heat_leak = self.heat_leak()?;
        self.boil_off_rate_at(heat_leak)
    }

    /// Time for the heat leak to evaporate all liquid in the bore.
    ///
    /// ```text
    /// τα = γ · ρ · V / ΔT · R_total
    /// ```
    ///
    /// # Errors
    ///
    /// Fails if the network cannot be evaluated, there is no driving
    /// temperature difference, or the liquid density or latent heat is not
    /// strictly positive.
    pub fn tau_alpha(&self) -> Result<Time, BoilOffError> {
        let r_total = self.network().total()?;
        self.tau_alpha_through(r_total)
    }

    /// Time for the heat leak to warm the bore's liquid by `rise`.
    ///
    /// Useful for how long a sealed target stays liquid: warming from the
    /// freezing point to the boiling point with no evaporation.
    ///
    /// # Errors
    ///
    /// Fails like [`Target::heat_leak`], if `rise` is negative or `NaN`, or
    /// if the liquid density or specific heat is not strictly positive.
    pub fn tau_beta(&self, rise: TemperatureInterval) -> Result<Time, BoilOffError> {
        let rise = NonNegative::new(rise)
            .map_err(|source| BoilOffError::InvalidRise { rise, source })?
            .into_inner();
        let liquid = self.materials().liquid;
        let density = positive(liquid.density, "density")?;
        let specific_heat = positive(liquid.specific_heat, "specific heat")?;

        let heat_leak = self.heat_leak()?;
        let volume = self.geometry().liquid_volume();
        let tau: Time = specific_heat * density * volume * rise / heat_leak;

        log::debug!("tau_beta over {:.3} K: {:.3} s", rise.value, tau.value);
        Ok(tau)
    }

    /// Heat leak, boil-off rate, and τα from a single network evaluation.
    ///
    /// # Errors
    ///
    /// Fails like [`Target::tau_alpha`].
    pub fn boil_off(&self) -> Result<BoilOff, BoilOffError> {
        let totals = self.network().totals()?;
        let heat_leak = self.heat_leak_through(totals.total())?;

        Ok(BoilOff {
            totals,
            heat_leak,
            boil_off_rate: self.boil_off_rate_at(heat_leak)?,
            tau_alpha: self.tau_alpha_through(totals.total())?,
        })
    }

    fn heat_leak_through(&self, r_total: ThermalResistance) -> Result<Power, BoilOffError> {
        let heat_leak: Power = self.delta_t()? / r_total;
        log::debug!(
            "heat leak through {:.6} K/W: {:.6} W",
            r_total.value,
            heat_leak.value
        );
        Ok(heat_leak)
    }

    fn boil_off_rate_at(&self, heat_leak: Power) -> Result<MassRate, BoilOffError> {
        let latent_heat = positive(self.materials().liquid.latent_heat, "latent heat")?;
        Ok(heat_leak / latent_heat)
    }

    fn tau_alpha_through(&self, r_total: ThermalResistance) -> Result<Time, BoilOffError> {
        let liquid = self.materials().liquid;
        let latent_heat = positive(liquid.latent_heat, "latent heat")?;
        let density = positive(liquid.density, "density")?;

        let volume = self.geometry().liquid_volume();
        let tau: Time = latent_heat * density * volume / self.delta_t()? * r_total;

        log::debug!("tau_alpha: {:.1} s ({:.2} h)", tau.value, tau.value / 3600.0);
        Ok(tau)
    }
}

fn positive<T>(value: T, property: &'static str) -> Result<T, BoilOffError>
where
    T: PartialOrd + num_traits::Zero + Finite,
{
    PositiveFinite::new(value)
        .map(|value| value.into_inner())
        .map_err(|source| BoilOffError::InvalidLiquid { property, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        available_energy::joule_per_kilogram,
        f64::{AvailableEnergy, ThermalConductivity},
        mass_rate::kilogram_per_second,
        power::watt,
        temperature_interval::kelvin as delta_kelvin,
        thermal_conductivity::watt_per_meter_kelvin,
        thermodynamic_temperature::kelvin,
        time::hour,
    };

    use crate::models::thermal::{
        materials::Environment,
        target::core::test_support::artie_target,
    };

    #[test]
    fn artie_heat_leak_and_tau_alpha() {
        let target = artie_target();

        let heat_leak = target.heat_leak().unwrap();
        assert_relative_eq!(heat_leak.get::<watt>(), 0.7675, max_relative = 1e-3);

        let tau = target.tau_alpha().unwrap().get::<hour>();
        assert!((10.0..100.0).contains(&tau), "tau_alpha = {tau} h");
        assert_relative_eq!(tau, 53.20, max_relative = 1e-3);
    }

    #[test]
    fn tau_alpha_equals_inventory_over_heat_leak() {
        let target = artie_target();
        let liquid = target.materials().liquid;

        let inventory = liquid.latent_heat * liquid.density * target.geometry().liquid_volume();
        let expected: Time = inventory / target.heat_leak().unwrap();

        assert_relative_eq!(
            target.tau_alpha().unwrap().value,
            expected.value,
            max_relative = 1e-12
        );
    }

    #[test]
    fn boil_off_is_consistent_with_individual_operations() {
        let target = artie_target();
        let boil_off = target.boil_off().unwrap();

        assert_eq!(boil_off.totals, target.network().totals().unwrap());
        assert_eq!(boil_off.heat_leak, target.heat_leak().unwrap());
        assert_eq!(boil_off.boil_off_rate, target.boil_off_rate().unwrap());
        assert_eq!(boil_off.tau_alpha, target.tau_alpha().unwrap());
        assert_eq!(boil_off.total_resistance(), target.network().total().unwrap());

        let rate = boil_off.boil_off_rate.get::<kilogram_per_second>();
        assert_relative_eq!(rate, 0.7675 / 161_000.0, max_relative = 1e-3);
    }

    #[test]
    fn tau_beta_scales_with_rise() {
        let target = artie_target();
        let rise = |k| TemperatureInterval::new::<delta_kelvin>(k);

        let freeze_to_boil = target.tau_beta(rise(3.5)).unwrap();
        assert_relative_eq!(freeze_to_boil.value, 4663.0, max_relative = 1e-3);

        let double = target.tau_beta(rise(7.0)).unwrap();
        assert_relative_eq!(double.value, 2.0 * freeze_to_boil.value, max_relative = 1e-12);

        assert_eq!(target.tau_beta(rise(0.0)).unwrap().value, 0.0);
        assert!(matches!(
            target.tau_beta(rise(-1.0)),
            Err(BoilOffError::InvalidRise { .. })
        ));
    }

    #[test]
    fn cold_ambient_has_no_heat_leak() {
        let base = artie_target();
        for ambient in [87.3, 80.0] {
            let target = Target::new(
                *base.geometry(),
                *base.materials(),
                Environment {
                    ambient: ThermodynamicTemperature::new::<kelvin>(ambient),
                },
            );
            assert!(matches!(
                target.tau_alpha(),
                Err(BoilOffError::NoHeatLeak { .. })
            ));
        }
    }

    #[test]
    fn zero_latent_heat_is_rejected() {
        let base = artie_target();
        let mut materials = *base.materials();
        materials.liquid.latent_heat = AvailableEnergy::new::<joule_per_kilogram>(0.0);
        let target = Target::new(*base.geometry(), materials, *base.environment());

        let error = target.tau_alpha().unwrap_err();
        assert_eq!(
            error,
            BoilOffError::InvalidLiquid {
                property: "latent heat",
                source: ConstraintError::Zero,
            }
        );
        assert!(target.boil_off_rate().is_err());
        assert!(target.heat_leak().is_ok());
    }

    #[test]
    fn network_failures_propagate() {
        let base = artie_target();
        let mut materials = *base.materials();
        materials.foam = ThermalConductivity::new::<watt_per_meter_kelvin>(0.0);
        let target = Target::new(*base.geometry(), materials, *base.environment());

        match target.tau_alpha() {
            Err(BoilOffError::Network(error)) => assert!(error.is_invalid_material()),
            other => panic!("expected a network error, got {other:?}"),
        }
    }
}
