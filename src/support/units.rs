//! Extensions to [`uom`].
//!
//! [`uom`] carries every physical value in this crate. It has no quantity for
//! thermal resistance or power per volume, and no direct way to subtract two
//! absolute temperatures; those live here.
//!
//! ```
//! use artie_models::support::units::TemperatureDifference;
//! use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};
//!
//! let ambient = ThermodynamicTemperature::new::<kelvin>(300.0);
//! let boiling = ThermodynamicTemperature::new::<kelvin>(87.3);
//! let delta_t = ambient.minus(boiling);
//! assert!((delta_t.value - 212.7).abs() < 1e-9);
//! ```

mod quantities;
mod temperature_difference;

pub use quantities::{AreaThermalResistance, ThermalResistance, VolumetricPower};
pub use temperature_difference::TemperatureDifference;
