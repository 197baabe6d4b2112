use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, N2, N3, P1, P3, Z0},
};

/// Area-specific thermal resistance (an "R-value"), m²·K/W in SI.
///
/// The resistance of a unit area of a slab (`z / σ`) or of a film (`1 / k`).
pub type AreaThermalResistance = Quantity<ISQ<Z0, N1, P3, Z0, P1, Z0, Z0>, SI<f64>, f64>;

/// Thermal resistance, K/W in SI.
///
/// The reciprocal of [`ThermalConductance`](uom::si::f64::ThermalConductance).
/// Build one from a conductance with `.recip()` or from a temperature interval
/// divided by a power; read it back with `.value` (K/W).
pub type ThermalResistance = Quantity<ISQ<N2, N1, P3, Z0, P1, Z0, Z0>, SI<f64>, f64>;

/// Power per unit volume, W/m³ in SI.
pub type VolumetricPower = Quantity<ISQ<N1, P1, N3, Z0, Z0, Z0, Z0>, SI<f64>, f64>;
