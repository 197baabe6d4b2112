use uom::si::f64::{Length, Time};

use super::{BoilOffError, Target};

/// τα evaluated at one value of a swept parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepPoint {
    pub parameter: Length,
    pub tau_alpha: Time,
}

impl Target {
    /// τα with the vacuum gap widened by `delta`.
    ///
    /// Evaluates a shifted copy of the geometry (see
    /// [`Geometry::with_vacuum_offset`](super::Geometry::with_vacuum_offset));
    /// `self` is never modified, so repeated and interleaved calls are
    /// independent of each other.
    ///
    /// # Errors
    ///
    /// Returns [`BoilOffError::Geometry`] if the shifted geometry is invalid,
    /// otherwise fails like [`Target::tau_alpha`].
    pub fn tau_alpha_with_vacuum_offset(&self, delta: Length) -> Result<Time, BoilOffError> {
        let geometry = self.geometry().with_vacuum_offset(delta)?;
        let tau = self.with_geometry(geometry).tau_alpha()?;
        log::debug!(
            "vacuum offset {:.4} m: tau_alpha {:.1} s",
            delta.value,
            tau.value
        );
        Ok(tau)
    }

    /// τα at each vacuum offset, in order.
    ///
    /// # Errors
    ///
    /// Stops at the first offset that fails.
    pub fn sweep_vacuum_offsets<I>(&self, deltas: I) -> Result<Vec<SweepPoint>, BoilOffError>
    where
        I: IntoIterator<Item = Length>,
    {
        deltas
            .into_iter()
            .map(|delta| {
                Ok::<_, BoilOffError>(SweepPoint {
                    parameter: delta,
                    tau_alpha: self.tau_alpha_with_vacuum_offset(delta)?,
                })
            })
            .collect()
    }

    /// τα at each foam outer radius, in order.
    ///
    /// # Errors
    ///
    /// Stops at the first radius that fails, including any radius that does
    /// not exceed the annulus outer wall.
    pub fn sweep_foam_outer_radius<I>(&self, radii: I) -> Result<Vec<SweepPoint>, BoilOffError>
    where
        I: IntoIterator<Item = Length>,
    {
        radii
            .into_iter()
            .map(|radius| {
                let geometry = self.geometry().with_foam_outer_radius(radius)?;
                let tau = self.with_geometry(geometry).tau_alpha()?;
                log::debug!(
                    "foam outer radius {:.4} m: tau_alpha {:.1} s",
                    radius.value,
                    tau.value
                );
                Ok::<_, BoilOffError>(SweepPoint {
                    parameter: radius,
                    tau_alpha: tau,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{length::inch, time::hour};

    use crate::models::thermal::target::{
        GeometryError, GeometryKey,
        core::test_support::artie_target,
    };

    fn inches(value: f64) -> Length {
        Length::new::<inch>(value)
    }

    #[test]
    fn zero_offset_matches_baseline() {
        let target = artie_target();
        assert_eq!(
            target.tau_alpha_with_vacuum_offset(inches(0.0)).unwrap(),
            target.tau_alpha().unwrap()
        );
    }

    #[test]
    fn offsets_leave_target_unchanged() {
        let target = artie_target();
        let before = target;
        let baseline = target.tau_alpha().unwrap();

        let first = target.tau_alpha_with_vacuum_offset(inches(0.5)).unwrap();
        let _ = target.tau_alpha_with_vacuum_offset(inches(-0.1)).unwrap();
        let _ = target.tau_alpha_with_vacuum_offset(inches(1.0)).unwrap();
        let again = target.tau_alpha_with_vacuum_offset(inches(0.5)).unwrap();

        assert_eq!(first, again);
        assert_eq!(target, before);
        assert_eq!(target.tau_alpha().unwrap(), baseline);
    }

    #[test]
    fn vacuum_sweep_is_not_monotonic() {
        let target = artie_target();
        let points = target
            .sweep_vacuum_offsets([-0.1, 0.0, 0.1, 0.5, 1.0].map(inches))
            .unwrap();

        let hours: Vec<f64> = points.iter().map(|p| p.tau_alpha.get::<hour>()).collect();
        assert_relative_eq!(hours[0], 56.56, max_relative = 1e-3);
        assert_relative_eq!(hours[2], 52.45, max_relative = 1e-3);
        assert_relative_eq!(hours[4], 55.80, max_relative = 1e-3);
        assert!(hours[0] > hours[1] && hours[1] > hours[2] && hours[2] < hours[3]);

        for (point, delta) in points.iter().zip([-0.1, 0.0, 0.1, 0.5, 1.0]) {
            assert_eq!(point.parameter, inches(delta));
        }
    }

    #[test]
    fn offset_that_closes_the_gap_fails() {
        let target = artie_target();
        let gap = target.geometry().vacuum_outer_radius() - target.geometry().steel_outer_radius();

        let error = target.tau_alpha_with_vacuum_offset(-gap * 1.01).unwrap_err();
        assert!(matches!(
            error,
            BoilOffError::Geometry(GeometryError::NotIncreasing {
                inner: GeometryKey::SteelOuterRadius,
                outer: GeometryKey::VacuumOuterRadius,
                ..
            })
        ));

        let sweep = target.sweep_vacuum_offsets([inches(0.0), -gap * 1.01, inches(0.1)]);
        assert!(sweep.is_err());
    }

    #[test]
    fn wider_foam_shortens_tau_alpha() {
        // The end-cap foam face grows with the square of the radius, which
        // outweighs the added radial insulation.
        let target = artie_target();
        let points = target
            .sweep_foam_outer_radius([2.0, 3.0, 4.5, 6.0].map(inches))
            .unwrap();

        for pair in points.windows(2) {
            assert!(pair[1].tau_alpha < pair[0].tau_alpha);
        }
        assert_eq!(points[2].tau_alpha, target.tau_alpha().unwrap());
        assert_relative_eq!(points[0].tau_alpha.get::<hour>(), 74.87, max_relative = 1e-3);
    }

    #[test]
    fn foam_inside_annulus_wall_fails() {
        let target = artie_target();
        let result = target.sweep_foam_outer_radius([inches(1.0)]);
        assert!(matches!(
            result,
            Err(BoilOffError::Geometry(GeometryError::NotIncreasing { .. }))
        ));
    }
}
