use num_traits::Zero;
use uom::si::{Dimension, Quantity, Units};

use super::{Constrained, Constraint, ConstraintError, StrictlyPositive};

/// Values that can report whether they are finite.
pub trait Finite {
    fn is_finite(&self) -> bool;
}

impl Finite for f64 {
    fn is_finite(&self) -> bool {
        f64::is_finite(*self)
    }
}

impl<D, U> Finite for Quantity<D, U, f64>
where
    D: Dimension + ?Sized,
    U: Units<f64> + ?Sized,
{
    fn is_finite(&self) -> bool {
        self.value.is_finite()
    }
}

/// Marker for values strictly greater than zero and less than infinity.
///
/// Every physical dimension and material constant fed into a resistance
/// formula is `PositiveFinite`. An infinite length slips past
/// [`StrictlyPositive`] and turns an area ratio into `∞ / ∞`.
///
/// ```
/// use artie_models::support::constraint::PositiveFinite;
///
/// assert!(PositiveFinite::new(2.54).is_ok());
/// assert!(PositiveFinite::new(0.0).is_err());
/// assert!(PositiveFinite::new(f64::INFINITY).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PositiveFinite;

impl PositiveFinite {
    /// Constructs a [`Constrained<T, PositiveFinite>`] if the value is
    /// strictly positive and finite.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, infinite, or `NaN`.
    pub fn new<T: PartialOrd + Zero + Finite>(
        value: T,
    ) -> Result<Constrained<T, PositiveFinite>, ConstraintError> {
        Constrained::<T, PositiveFinite>::new(value)
    }
}

impl<T: PartialOrd + Zero + Finite> Constraint<T> for PositiveFinite {
    fn check(value: &T) -> Result<(), ConstraintError> {
        <StrictlyPositive as Constraint<T>>::check(value)?;
        if value.is_finite() {
            Ok(())
        } else {
            Err(ConstraintError::NotFinite)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        f64::{Length, ThermalConductivity},
        length::inch,
        thermal_conductivity::watt_per_meter_kelvin,
    };

    #[test]
    fn floats() {
        assert!(PositiveFinite::new(0.435).is_ok());
        assert!(PositiveFinite::new(f64::MAX).is_ok());
        assert_eq!(PositiveFinite::new(0.0), Err(ConstraintError::Zero));
        assert_eq!(PositiveFinite::new(f64::INFINITY), Err(ConstraintError::NotFinite));
        assert_eq!(
            PositiveFinite::new(f64::NEG_INFINITY),
            Err(ConstraintError::Negative)
        );
        assert_eq!(PositiveFinite::new(f64::NAN), Err(ConstraintError::NotANumber));
    }

    #[test]
    fn quantities() {
        assert!(PositiveFinite::new(Length::new::<inch>(66.0)).is_ok());
        assert_eq!(
            PositiveFinite::new(Length::new::<inch>(f64::INFINITY)),
            Err(ConstraintError::NotFinite)
        );

        let vacuum = ThermalConductivity::new::<watt_per_meter_kelvin>(f64::INFINITY);
        assert_eq!(PositiveFinite::new(vacuum), Err(ConstraintError::NotFinite));
    }
}
