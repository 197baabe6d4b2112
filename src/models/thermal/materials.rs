//! Material constants and ambient conditions.
//!
//! Constants are plain data passed into every model, never globals, so a
//! study can swap in an alternate material set (a different foam, a
//! pessimistic vacuum) without touching anything else.
//!
//! The published ARTIE values were tabulated in cm, g, s, W, K. They are
//! stored here as [`uom`] quantities, which removes the unit bookkeeping:
//! 0.143 W/cm·K is `14.3 W/m·K`, 0.1 W/cm²·K is `1000 W/m²·K`, 161 J/g is
//! `161 kJ/kg`, and 1.42 g/cm³ is `1420 kg/m³`.

use uom::si::{
    available_energy::joule_per_kilogram,
    f64::{
        AvailableEnergy, HeatTransfer, MassDensity, SpecificHeatCapacity, ThermalConductivity,
        ThermodynamicTemperature,
    },
    heat_transfer::watt_per_square_meter_kelvin,
    mass_density::kilogram_per_cubic_meter,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::kelvin,
};

/// Conductivities, film coefficients, and the cryogenic liquid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Materials {
    /// Stainless steel conductivity.
    pub steel: ThermalConductivity,

    /// Polyurethane foam conductivity.
    pub foam: ThermalConductivity,

    /// Aluminum conductivity (end windows).
    ///
    /// Assumed design value, not a published constant.
    pub aluminum: ThermalConductivity,

    /// Effective conductivity across the evacuated gap.
    ///
    /// Lumps residual-gas conduction and radiation into one number. Assumed
    /// design value, not a published constant.
    pub vacuum: ThermalConductivity,

    /// Film coefficient between liquid argon and a wetted wall.
    ///
    /// Assumed design value, not a published constant.
    pub lar_film: HeatTransfer,

    /// Film coefficient between ambient air and an outer surface.
    pub air_film: HeatTransfer,

    /// The cryogenic liquid held by the target.
    pub liquid: Liquid,
}

impl Materials {
    /// The material set used in the ARTIE design studies.
    ///
    /// Steel, foam, air film and the argon properties are the published
    /// values; `aluminum`, `vacuum` and `lar_film` are assumed.
    #[must_use]
    pub fn artie() -> Self {
        Self {
            steel: ThermalConductivity::new::<watt_per_meter_kelvin>(14.3),
            foam: ThermalConductivity::new::<watt_per_meter_kelvin>(0.03),
            aluminum: ThermalConductivity::new::<watt_per_meter_kelvin>(237.0),
            vacuum: ThermalConductivity::new::<watt_per_meter_kelvin>(1e-3),
            lar_film: HeatTransfer::new::<watt_per_square_meter_kelvin>(1000.0),
            air_film: HeatTransfer::new::<watt_per_square_meter_kelvin>(100.0),
            liquid: Liquid::argon(),
        }
    }
}

impl Default for Materials {
    fn default() -> Self {
        Self::artie()
    }
}

/// Physical constants of a cryogenic liquid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Liquid {
    pub density: MassDensity,

    /// Latent heat of vaporization.
    pub latent_heat: AvailableEnergy,

    pub specific_heat: SpecificHeatCapacity,

    /// Normal boiling point; the operating temperature of the target.
    pub boiling_point: ThermodynamicTemperature,

    pub freezing_point: ThermodynamicTemperature,
}

impl Liquid {
    /// Liquid argon at one atmosphere.
    #[must_use]
    pub fn argon() -> Self {
        Self {
            density: MassDensity::new::<kilogram_per_cubic_meter>(1420.0),
            latent_heat: AvailableEnergy::new::<joule_per_kilogram>(161_000.0),
            specific_heat: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(1120.0),
            boiling_point: ThermodynamicTemperature::new::<kelvin>(87.3),
            freezing_point: ThermodynamicTemperature::new::<kelvin>(83.8),
        }
    }
}

/// Conditions outside the target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Environment {
    /// Temperature of the air around the target.
    pub ambient: ThermodynamicTemperature,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            ambient: ThermodynamicTemperature::new::<kelvin>(300.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::units::TemperatureDifference;

    #[test]
    fn artie_constants_in_published_units() {
        let m = Materials::artie();
        let close = |a: f64, b: f64| approx::relative_eq!(a, b, max_relative = 1e-12);

        // W/cm·K
        assert!(close(m.steel.get::<watt_per_meter_kelvin>() / 100.0, 0.143));
        assert!(close(m.foam.get::<watt_per_meter_kelvin>() / 100.0, 0.0003));

        // W/cm²·K
        assert!(close(m.lar_film.get::<watt_per_square_meter_kelvin>() / 1e4, 0.1));

        // g/cm³ and J/g
        let liquid = m.liquid;
        assert!(close(liquid.density.get::<kilogram_per_cubic_meter>() / 1e3, 1.42));
        assert!(close(liquid.latent_heat.get::<joule_per_kilogram>() / 1e3, 161.0));
    }

    #[test]
    fn assumed_design_values() {
        let m = Materials::artie();
        assert_relative_eq!(m.aluminum.get::<watt_per_meter_kelvin>(), 237.0);
        assert_relative_eq!(m.vacuum.get::<watt_per_meter_kelvin>(), 1e-3);
        assert_relative_eq!(m.lar_film.get::<watt_per_square_meter_kelvin>(), 1000.0);
    }

    #[test]
    fn default_environment_drives_heat_inward() {
        let env = Environment::default();
        let liquid = Liquid::argon();
        let delta_t = env.ambient.minus(liquid.boiling_point);
        assert_relative_eq!(delta_t.value, 212.7, epsilon = 1e-9);
        assert!(liquid.freezing_point.get::<kelvin>() < liquid.boiling_point.get::<kelvin>());
    }
}
