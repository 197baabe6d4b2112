//! Closed-form steady-state thermal resistances.
//!
//! Heat leaking into a cryogenic vessel crosses a chain of layers, each of
//! which is modeled as a resistor. Resistors in series add, so the total
//! resistance of an insulation stack is the sum of its layers.
//!
//! | layer | resistance |
//! |---|---|
//! | hollow cylinder, conduction | `ln(r_o / r_i) / (2π σ L)` |
//! | cylindrical surface, film | `1 / (2π L k r)` |
//! | planar slab with films | `(z / σ + Σ 1/k) / A` |
//!
//! Every function checks its inputs and returns a [`ResistanceError`] rather
//! than a negative, infinite, or `NaN` resistance.
//!
//! # Example
//!
//! ```
//! use artie_models::support::resistance::cylindrical_shell;
//! use uom::si::{
//!     f64::{Length, ThermalConductivity},
//!     length::centimeter,
//!     thermal_conductivity::watt_per_meter_kelvin,
//! };
//!
//! let steel = ThermalConductivity::new::<watt_per_meter_kelvin>(14.3);
//! let r = cylindrical_shell(
//!     steel,
//!     Length::new::<centimeter>(100.0),
//!     Length::new::<centimeter>(1.1049),
//!     Length::new::<centimeter>(1.27),
//! )
//! .unwrap();
//! assert!(r.value > 0.0);
//! ```

mod error;

use std::f64::consts::{PI, TAU};

use uom::si::f64::{Area, HeatTransfer, Length, ThermalConductivity};

use crate::support::{
    constraint::{Finite, NonNegative, PositiveFinite},
    units::{AreaThermalResistance, ThermalResistance},
};

pub use error::ResistanceError;

/// Radial conduction resistance of a hollow cylinder.
///
/// # Errors
///
/// Returns an invalid-geometry error unless `outer > inner > 0` and
/// `length > 0`, and an invalid-material error unless `conductivity > 0`.
/// Infinite inputs are rejected the same way.
pub fn cylindrical_shell(
    conductivity: ThermalConductivity,
    length: Length,
    inner: Length,
    outer: Length,
) -> Result<ThermalResistance, ResistanceError> {
    let conductivity = material(conductivity, "conductivity")?;
    let length = dimension(length, "length")?;
    let inner = dimension(inner, "inner radius")?;
    let outer = dimension(outer, "outer radius")?;
    if outer <= inner {
        return Err(ResistanceError::RadiiNotIncreasing { inner, outer });
    }

    let ln_ratio = (outer / inner).value.ln();
    Ok((conductivity * length * TAU).recip() * ln_ratio)
}

/// Film (convective or contact) resistance on a cylindrical surface.
///
/// # Errors
///
/// Returns an invalid-geometry error unless `length` and `radius` are
/// strictly positive, and an invalid-material error unless `coefficient` is.
pub fn cylindrical_film(
    coefficient: HeatTransfer,
    length: Length,
    radius: Length,
) -> Result<ThermalResistance, ResistanceError> {
    let coefficient = material(coefficient, "film coefficient")?;
    let length = dimension(length, "length")?;
    let radius = dimension(radius, "radius")?;

    Ok((coefficient * length * radius * TAU).recip())
}

/// Resistance of a planar slab of area `area` and thickness `thickness`,
/// with a film on each face listed in `films`.
///
/// Pass an empty `films` slice for bare conduction.
///
/// # Errors
///
/// Returns an invalid-geometry error unless `area` and `thickness` are
/// strictly positive, and an invalid-material error unless `conductivity`
/// and every film coefficient are.
pub fn planar(
    area: Area,
    thickness: Length,
    conductivity: ThermalConductivity,
    films: &[HeatTransfer],
) -> Result<ThermalResistance, ResistanceError> {
    let area = dimension(area, "area")?;
    let thickness = dimension(thickness, "thickness")?;
    let conductivity = material(conductivity, "conductivity")?;

    let mut r_value: AreaThermalResistance = thickness / conductivity;
    for &k in films {
        r_value += material(k, "film coefficient")?.recip();
    }

    Ok(r_value / area)
}

/// Area of the annulus between `inner` and `outer`.
///
/// An `inner` radius of zero gives the full disk.
///
/// # Errors
///
/// Returns an invalid-geometry error unless `outer > inner >= 0` and
/// `outer` is finite.
pub fn annulus_area(inner: Length, outer: Length) -> Result<Area, ResistanceError> {
    let inner = NonNegative::new(inner)
        .map_err(|source| ResistanceError::NonPositiveDimension {
            name: "inner radius",
            source,
        })?
        .into_inner();
    let outer = dimension(outer, "outer radius")?;
    if outer <= inner {
        return Err(ResistanceError::RadiiNotIncreasing { inner, outer });
    }

    Ok((outer * outer - inner * inner) * PI)
}

fn dimension<T>(value: T, name: &'static str) -> Result<T, ResistanceError>
where
    T: PartialOrd + num_traits::Zero + Finite,
{
    PositiveFinite::new(value)
        .map(|v| v.into_inner())
        .map_err(|source| ResistanceError::NonPositiveDimension { name, source })
}

fn material<T>(value: T, name: &'static str) -> Result<T, ResistanceError>
where
    T: PartialOrd + num_traits::Zero + Finite,
{
    PositiveFinite::new(value)
        .map(|v| v.into_inner())
        .map_err(|source| ResistanceError::NonPositiveMaterial { name, source })
}
