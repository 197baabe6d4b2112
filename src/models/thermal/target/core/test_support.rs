use uom::si::{f64::Length, length::centimeter};

use super::{Geometry, Target};

pub(super) fn cm(value: f64) -> Length {
    Length::new::<centimeter>(value)
}

pub(super) fn artie_geometry() -> Geometry {
    Geometry::artie().expect("default geometry should be valid")
}

pub(super) fn artie_target() -> Target {
    Target::artie().expect("default target should be valid")
}
