use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
};

/// Subtraction of absolute temperatures.
///
/// `uom` does not define `ThermodynamicTemperature - ThermodynamicTemperature`,
/// so the driving temperature difference of a heat leak
/// (ambient minus liquid) is computed with [`minus`](Self::minus).
/// See [uom#380](https://github.com/iliekturtles/uom/issues/380).
pub trait TemperatureDifference {
    /// Returns the temperature difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        // Both values are stored in kelvin.
        TemperatureInterval::new::<delta_kelvin>(self.value - other.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::thermodynamic_temperature::{degree_celsius, kelvin as abs_kelvin};

    #[test]
    fn ambient_minus_boiling_argon() {
        let ambient = ThermodynamicTemperature::new::<abs_kelvin>(300.0);
        let boiling = ThermodynamicTemperature::new::<abs_kelvin>(87.3);

        assert_relative_eq!(ambient.minus(boiling).get::<delta_kelvin>(), 212.7);
        assert_relative_eq!(boiling.minus(ambient).get::<delta_kelvin>(), -212.7);
    }

    #[test]
    fn mixed_scales() {
        let room = ThermodynamicTemperature::new::<degree_celsius>(26.85);
        let ambient = ThermodynamicTemperature::new::<abs_kelvin>(300.0);
        assert_relative_eq!(
            room.minus(ambient).get::<delta_kelvin>(),
            0.0,
            epsilon = 1e-9
        );
    }
}
