//! The series resistance network of the target.
//!
//! Heat reaches the bore two ways: radially through the concentric
//! [`SurfaceLayer`]s, and axially through the [`FaceLayer`]s of the two
//! end-caps. Every layer is a series resistor; the network total is
//!
//! ```text
//! R_total = Σ R_surface(layer) + 2 · Σ R_face(layer)
//! ```
//!
//! with each layer counted exactly once per path.

mod error;
mod layer;

pub use error::NetworkError;
pub use layer::{FaceLayer, Layer, SurfaceLayer};

use uom::ConstZero;

use crate::{
    models::thermal::materials::Materials,
    support::{
        resistance::{cylindrical_film, cylindrical_shell, planar},
        units::ThermalResistance,
    },
};

use super::Geometry;

/// Resistance network over a borrowed geometry and material set.
///
/// Holds no state of its own; every method evaluates on demand.
#[derive(Debug, Clone, Copy)]
pub struct Network<'a> {
    geometry: &'a Geometry,
    materials: &'a Materials,
}

/// Surface, face, and total resistance of a network.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NetworkTotals {
    /// Sum of all surface layers.
    pub surface: ThermalResistance,

    /// Sum of all face layers over both end-caps.
    pub face: ThermalResistance,
}

impl NetworkTotals {
    #[must_use]
    pub fn total(&self) -> ThermalResistance {
        self.surface + self.face
    }
}

/// One layer's share of the network total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contribution {
    pub layer: Layer,

    /// Resistance of a single instance of the layer.
    pub resistance: ThermalResistance,

    /// Number of instances in the network (two for end-cap faces).
    pub count: u32,
}

impl Contribution {
    /// Resistance of all instances of the layer.
    #[must_use]
    pub fn total(&self) -> ThermalResistance {
        self.resistance * f64::from(self.count)
    }
}

impl<'a> Network<'a> {
    #[must_use]
    pub fn new(geometry: &'a Geometry, materials: &'a Materials) -> Self {
        Self {
            geometry,
            materials,
        }
    }

    /// Resistance of one surface layer.
    ///
    /// # Errors
    ///
    /// Returns a [`NetworkError`] naming `layer` if its dimensions or
    /// material constants are invalid.
    pub fn surface(&self, layer: SurfaceLayer) -> Result<ThermalResistance, NetworkError> {
        let g = self.geometry;
        let m = self.materials;
        let (l_lar, l_ann) = (g.lar_length(), g.annulus_length());

        match layer {
            SurfaceLayer::BoreFilm => cylindrical_film(m.lar_film, l_lar, g.bore_radius()),
            SurfaceLayer::BoreWall => {
                cylindrical_shell(m.steel, l_lar, g.bore_radius(), g.steel_outer_radius())
            }
            SurfaceLayer::VacuumGap => cylindrical_shell(
                m.vacuum,
                l_lar,
                g.steel_outer_radius(),
                g.vacuum_outer_radius(),
            ),
            SurfaceLayer::AnnulusInnerWall => cylindrical_shell(
                m.steel,
                l_ann,
                g.vacuum_outer_radius(),
                g.annulus_inner_radius(),
            ),
            SurfaceLayer::AnnulusFilm => {
                cylindrical_film(m.lar_film, l_ann, g.annulus_inner_radius())
            }
            SurfaceLayer::AnnulusOuterWall => cylindrical_shell(
                m.steel,
                l_ann,
                g.annulus_outer_inner_radius(),
                g.annulus_outer_outer_radius(),
            ),
            SurfaceLayer::Foam => cylindrical_shell(
                m.foam,
                l_ann,
                g.annulus_outer_outer_radius(),
                g.foam_outer_radius(),
            ),
            SurfaceLayer::AirFilm => cylindrical_film(m.air_film, l_ann, g.foam_outer_radius()),
        }
        .map_err(NetworkError::at(layer))
    }

    /// Resistance of one face layer at a single end-cap.
    ///
    /// # Errors
    ///
    /// Returns a [`NetworkError`] naming `layer` if its dimensions or
    /// material constants are invalid.
    pub fn face(&self, layer: FaceLayer) -> Result<ThermalResistance, NetworkError> {
        let g = self.geometry;
        let m = self.materials;

        match layer {
            FaceLayer::Bore => planar(
                g.bore_area(),
                g.aluminum_thickness(),
                m.aluminum,
                &[m.lar_film, m.air_film],
            ),
            FaceLayer::VacuumGap => g.vacuum_face_area().and_then(|area| {
                planar(area, g.aluminum_thickness(), m.aluminum, &[m.air_film])
            }),
            FaceLayer::Foam => g
                .foam_face_area()
                .and_then(|area| planar(area, g.foam_thickness(), m.foam, &[m.air_film])),
        }
        .map_err(NetworkError::at(layer))
    }

    /// Sum of every surface layer.
    ///
    /// # Errors
    ///
    /// Returns the first layer failure, bore outward.
    pub fn surface_total(&self) -> Result<ThermalResistance, NetworkError> {
        SurfaceLayer::ALL
            .into_iter()
            .try_fold(ThermalResistance::ZERO, |sum, layer| {
                Ok::<_, NetworkError>(sum + self.surface(layer)?)
            })
    }

    /// Sum of every face layer over both end-caps.
    ///
    /// # Errors
    ///
    /// Returns the first layer failure, bore outward.
    pub fn face_total(&self) -> Result<ThermalResistance, NetworkError> {
        let one_end = FaceLayer::ALL
            .into_iter()
            .try_fold(ThermalResistance::ZERO, |sum, layer| {
                Ok::<_, NetworkError>(sum + self.face(layer)?)
            })?;
        Ok(one_end * f64::from(FaceLayer::END_CAPS))
    }

    /// Surface and face totals.
    ///
    /// # Errors
    ///
    /// Returns the first layer failure.
    pub fn totals(&self) -> Result<NetworkTotals, NetworkError> {
        let totals = NetworkTotals {
            surface: self.surface_total()?,
            face: self.face_total()?,
        };
        log::debug!(
            "network: surface {:.6} K/W, face {:.6} K/W",
            totals.surface.value,
            totals.face.value
        );
        Ok(totals)
    }

    /// Total resistance, surface plus face.
    ///
    /// # Errors
    ///
    /// Returns the first layer failure.
    pub fn total(&self) -> Result<ThermalResistance, NetworkError> {
        Ok(self.totals()?.total())
    }

    /// Every layer's contribution, surface layers bore outward then faces.
    ///
    /// The contributions' [`total`](Contribution::total)s sum to
    /// [`Network::total`].
    ///
    /// # Errors
    ///
    /// Returns the first layer failure.
    pub fn breakdown(&self) -> Result<Vec<Contribution>, NetworkError> {
        Layer::all()
            .map(|layer| {
                let (resistance, count) = match layer {
                    Layer::Surface(surface) => (self.surface(surface)?, 1),
                    Layer::Face(face) => (self.face(face)?, FaceLayer::END_CAPS),
                };
                log::debug!("{layer}: {:.6} K/W x{count}", resistance.value);
                Ok::<_, NetworkError>(Contribution {
                    layer,
                    resistance,
                    count,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f64::consts::TAU;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{HeatTransfer, Length, ThermalConductivity},
        heat_transfer::watt_per_square_meter_kelvin,
        length::centimeter,
        thermal_conductivity::watt_per_meter_kelvin,
    };

    use crate::{
        models::thermal::target::core::test_support::{artie_geometry, cm},
        support::resistance::{ResistanceError, annulus_area},
    };

    #[test]
    fn every_surface_layer_is_positive_and_finite() {
        let geometry = artie_geometry();
        let materials = Materials::artie();
        let network = Network::new(&geometry, &materials);

        for layer in SurfaceLayer::ALL {
            let r = network.surface(layer).unwrap();
            assert!(r.value.is_finite() && r.value > 0.0, "{layer:?}: {r:?}");
        }
        for layer in FaceLayer::ALL {
            let r = network.face(layer).unwrap();
            assert!(r.value.is_finite() && r.value > 0.0, "{layer:?}: {r:?}");
        }
    }

    #[test]
    fn bore_film_matches_closed_form() {
        let geometry = artie_geometry();
        let materials = Materials::artie();
        let network = Network::new(&geometry, &materials);

        // cm, W/cm²·K
        let l = 66.0 * 2.54;
        let r = 0.435 * 2.54;
        let k = 0.1;
        let expected = 1.0 / (TAU * l * k * r);

        let actual = network.surface(SurfaceLayer::BoreFilm).unwrap();
        assert_relative_eq!(actual.value, expected, max_relative = 1e-12);
    }

    #[test]
    fn bore_film_decreases_with_bore_radius() {
        let materials = Materials::artie();
        let base = artie_geometry();

        let mut previous = f64::INFINITY;
        for r in [0.5, 0.8, 1.0, 1.1049, 1.2] {
            let geometry = Geometry {
                bore_radius: cm(r),
                ..base
            };
            let film = Network::new(&geometry, &materials)
                .surface(SurfaceLayer::BoreFilm)
                .unwrap();
            assert!(film.value < previous);
            previous = film.value;
        }
    }

    #[test]
    fn total_is_surface_plus_twice_one_end() {
        let geometry = artie_geometry();
        let materials = Materials::artie();
        let network = Network::new(&geometry, &materials);

        let surface: f64 = SurfaceLayer::ALL
            .iter()
            .map(|&l| network.surface(l).unwrap().value)
            .sum();
        let face: f64 = FaceLayer::ALL
            .iter()
            .map(|&l| network.face(l).unwrap().value)
            .sum();

        let totals = network.totals().unwrap();
        assert_relative_eq!(totals.surface.value, surface, max_relative = 1e-12);
        assert_relative_eq!(totals.face.value, 2.0 * face, max_relative = 1e-12);
        assert_relative_eq!(
            network.total().unwrap().value,
            surface + 2.0 * face,
            max_relative = 1e-12
        );
    }

    #[test]
    fn summation_order_does_not_matter() {
        let geometry = artie_geometry();
        let materials = Materials::artie();
        let network = Network::new(&geometry, &materials);

        let breakdown = network.breakdown().unwrap();
        let forward: f64 = breakdown.iter().map(|c| c.total().value).sum();
        let backward: f64 = breakdown.iter().rev().map(|c| c.total().value).sum();
        let interleaved: f64 = breakdown
            .iter()
            .step_by(2)
            .chain(breakdown.iter().skip(1).step_by(2))
            .map(|c| c.total().value)
            .sum();

        let total = network.total().unwrap().value;
        assert_relative_eq!(forward, total, max_relative = 1e-12);
        assert_relative_eq!(backward, total, max_relative = 1e-12);
        assert_relative_eq!(interleaved, total, max_relative = 1e-12);
    }

    #[test]
    fn breakdown_lists_every_layer_once() {
        let geometry = artie_geometry();
        let materials = Materials::artie();
        let breakdown = Network::new(&geometry, &materials).breakdown().unwrap();

        let layers: Vec<_> = breakdown.iter().map(|c| c.layer).collect();
        assert_eq!(layers, Layer::all().collect::<Vec<_>>());
        assert!(
            breakdown
                .iter()
                .all(|c| c.count == if matches!(c.layer, Layer::Face(_)) { 2 } else { 1 })
        );
    }

    #[test]
    fn scaling_divides_conduction_shells() {
        let materials = Materials::artie();
        let base = artie_geometry();
        let scaled = base.scaled(3.0).unwrap();

        let before = Network::new(&base, &materials);
        let after = Network::new(&scaled, &materials);

        for layer in [
            SurfaceLayer::BoreWall,
            SurfaceLayer::VacuumGap,
            SurfaceLayer::AnnulusInnerWall,
            SurfaceLayer::AnnulusOuterWall,
            SurfaceLayer::Foam,
        ] {
            assert_relative_eq!(
                after.surface(layer).unwrap().value,
                before.surface(layer).unwrap().value / 3.0,
                max_relative = 1e-9
            );
        }
    }

    #[test]
    fn zero_conductivity_names_the_layer() {
        let geometry = artie_geometry();
        let materials = Materials {
            vacuum: ThermalConductivity::new::<watt_per_meter_kelvin>(0.0),
            ..Materials::artie()
        };
        let err = Network::new(&geometry, &materials).total().unwrap_err();

        assert_eq!(err.layer, Layer::Surface(SurfaceLayer::VacuumGap));
        assert!(err.is_invalid_material());
        assert!(!err.is_invalid_geometry());
    }

    #[test]
    fn zero_air_film_fails_first_at_the_air_film() {
        let geometry = artie_geometry();
        let materials = Materials {
            air_film: HeatTransfer::new::<watt_per_square_meter_kelvin>(0.0),
            ..Materials::artie()
        };
        let network = Network::new(&geometry, &materials);

        let err = network.surface_total().unwrap_err();
        assert_eq!(err.layer, Layer::Surface(SurfaceLayer::AirFilm));

        let err = network.face_total().unwrap_err();
        assert_eq!(err.layer, Layer::Face(FaceLayer::Bore));
    }

    #[test]
    fn inverted_shell_is_invalid_geometry() {
        let materials = Materials::artie();
        let geometry = Geometry {
            foam_outer_radius: Length::new::<centimeter>(2.0),
            ..artie_geometry()
        };
        let err = Network::new(&geometry, &materials)
            .surface(SurfaceLayer::Foam)
            .unwrap_err();

        assert_eq!(err.layer, Layer::Surface(SurfaceLayer::Foam));
        assert!(err.is_invalid_geometry());

        let err = Network::new(&geometry, &materials)
            .face(FaceLayer::Foam)
            .unwrap_err();
        assert_eq!(err.layer, Layer::Face(FaceLayer::Foam));
        assert!(matches!(
            err.source,
            ResistanceError::RadiiNotIncreasing { .. }
        ));
    }

    #[test]
    fn end_cap_faces_use_annulus_areas() {
        let geometry = artie_geometry();
        let materials = Materials::artie();
        let network = Network::new(&geometry, &materials);

        let area = annulus_area(geometry.steel_outer_radius(), geometry.vacuum_outer_radius())
            .unwrap();
        let expected = planar(
            area,
            geometry.aluminum_thickness(),
            materials.aluminum,
            &[materials.air_film],
        )
        .unwrap();
        assert_eq!(network.face(FaceLayer::VacuumGap).unwrap(), expected);
    }
}
