use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use uom::si::{f64::Length, length::inch};

use super::GeometryError;

/// A length in inches, as drawings and stock sizes are specified.
///
/// Converted to a [`Length`] exactly once, when a [`Geometry`](super::Geometry)
/// is built.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

impl Inches {
    /// Half of a diameter, for stock specified by its outer diameter.
    #[must_use]
    pub fn radius_of(diameter: f64) -> Self {
        Self(diameter / 2.0)
    }

    /// Converts to a [`Length`] (1 in = 2.54 cm).
    #[must_use]
    pub fn to_length(self) -> Length {
        Length::new::<inch>(self.0)
    }
}

/// Raw target dimensions, in inches.
///
/// Defaults to the ARTIE-II target. Missing fields fall back to the defaults
/// when deserializing, and unknown fields are rejected:
///
/// ```
/// use artie_models::models::thermal::target::{GeometryConfig, Inches};
///
/// let config: GeometryConfig = serde_json::from_str(r#"{ "foam_outer_radius": 6.0 }"#).unwrap();
/// assert_eq!(config.foam_outer_radius, Inches(6.0));
/// assert_eq!(config.bore_radius, GeometryConfig::default().bore_radius);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeometryConfig {
    pub bore_radius: Inches,
    pub steel_outer_radius: Inches,
    pub vacuum_outer_radius: Inches,
    pub annulus_inner_radius: Inches,
    pub annulus_outer_inner_radius: Inches,
    pub annulus_outer_outer_radius: Inches,
    pub foam_outer_radius: Inches,
    pub lar_length: Inches,
    pub annulus_length: Inches,
    pub aluminum_thickness: Inches,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            bore_radius: Inches::radius_of(0.87),
            steel_outer_radius: Inches::radius_of(1.0),
            vacuum_outer_radius: Inches::radius_of(1.5),
            annulus_inner_radius: Inches::radius_of(1.625),
            annulus_outer_inner_radius: Inches::radius_of(2.375),
            annulus_outer_outer_radius: Inches::radius_of(2.5),
            foam_outer_radius: Inches(4.5),
            lar_length: Inches(66.0),
            annulus_length: Inches(70.0),
            aluminum_thickness: Inches(0.03),
        }
    }
}

impl GeometryConfig {
    /// Returns a copy with the dimension named `key` replaced.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::UnknownKey`] if `key` is not a [`GeometryKey`].
    pub fn with_override(mut self, key: &str, value: Inches) -> Result<Self, GeometryError> {
        let key: GeometryKey = key.parse()?;
        *self.field_mut(key) = value;
        Ok(self)
    }

    /// Applies a mapping of named overrides on top of the ARTIE-II defaults.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::UnknownKey`] for the first unrecognized key.
    pub fn from_overrides<K, I>(overrides: I) -> Result<Self, GeometryError>
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, f64)>,
    {
        overrides
            .into_iter()
            .try_fold(Self::default(), |config, (key, value)| {
                config.with_override(key.as_ref(), Inches(value))
            })
    }

    /// Returns the dimension named by `key`.
    #[must_use]
    pub fn get(&self, key: GeometryKey) -> Inches {
        match key {
            GeometryKey::BoreRadius => self.bore_radius,
            GeometryKey::SteelOuterRadius => self.steel_outer_radius,
            GeometryKey::VacuumOuterRadius => self.vacuum_outer_radius,
            GeometryKey::AnnulusInnerRadius => self.annulus_inner_radius,
            GeometryKey::AnnulusOuterInnerRadius => self.annulus_outer_inner_radius,
            GeometryKey::AnnulusOuterOuterRadius => self.annulus_outer_outer_radius,
            GeometryKey::FoamOuterRadius => self.foam_outer_radius,
            GeometryKey::LarLength => self.lar_length,
            GeometryKey::AnnulusLength => self.annulus_length,
            GeometryKey::AluminumThickness => self.aluminum_thickness,
        }
    }

    fn field_mut(&mut self, key: GeometryKey) -> &mut Inches {
        match key {
            GeometryKey::BoreRadius => &mut self.bore_radius,
            GeometryKey::SteelOuterRadius => &mut self.steel_outer_radius,
            GeometryKey::VacuumOuterRadius => &mut self.vacuum_outer_radius,
            GeometryKey::AnnulusInnerRadius => &mut self.annulus_inner_radius,
            GeometryKey::AnnulusOuterInnerRadius => &mut self.annulus_outer_inner_radius,
            GeometryKey::AnnulusOuterOuterRadius => &mut self.annulus_outer_outer_radius,
            GeometryKey::FoamOuterRadius => &mut self.foam_outer_radius,
            GeometryKey::LarLength => &mut self.lar_length,
            GeometryKey::AnnulusLength => &mut self.annulus_length,
            GeometryKey::AluminumThickness => &mut self.aluminum_thickness,
        }
    }
}

/// Names of the dimensions in a [`GeometryConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryKey {
    BoreRadius,
    SteelOuterRadius,
    VacuumOuterRadius,
    AnnulusInnerRadius,
    AnnulusOuterInnerRadius,
    AnnulusOuterOuterRadius,
    FoamOuterRadius,
    LarLength,
    AnnulusLength,
    AluminumThickness,
}

impl GeometryKey {
    /// Every key, radii first from the bore outward.
    pub const ALL: [Self; 10] = [
        Self::BoreRadius,
        Self::SteelOuterRadius,
        Self::VacuumOuterRadius,
        Self::AnnulusInnerRadius,
        Self::AnnulusOuterInnerRadius,
        Self::AnnulusOuterOuterRadius,
        Self::FoamOuterRadius,
        Self::LarLength,
        Self::AnnulusLength,
        Self::AluminumThickness,
    ];

    /// The radii, innermost first. Each must exceed the one before it.
    pub const RADII: [Self; 7] = [
        Self::BoreRadius,
        Self::SteelOuterRadius,
        Self::VacuumOuterRadius,
        Self::AnnulusInnerRadius,
        Self::AnnulusOuterInnerRadius,
        Self::AnnulusOuterOuterRadius,
        Self::FoamOuterRadius,
    ];

    /// The serialized name of this key.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BoreRadius => "bore_radius",
            Self::SteelOuterRadius => "steel_outer_radius",
            Self::VacuumOuterRadius => "vacuum_outer_radius",
            Self::AnnulusInnerRadius => "annulus_inner_radius",
            Self::AnnulusOuterInnerRadius => "annulus_outer_inner_radius",
            Self::AnnulusOuterOuterRadius => "annulus_outer_outer_radius",
            Self::FoamOuterRadius => "foam_outer_radius",
            Self::LarLength => "lar_length",
            Self::AnnulusLength => "annulus_length",
            Self::AluminumThickness => "aluminum_thickness",
        }
    }
}

impl fmt::Display for GeometryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GeometryKey {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| GeometryError::UnknownKey(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::length::centimeter;

    #[test]
    fn defaults_convert_to_published_centimeters() {
        let config = GeometryConfig::default();
        assert_relative_eq!(
            config.bore_radius.to_length().get::<centimeter>(),
            1.1049,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            config.steel_outer_radius.to_length().get::<centimeter>(),
            1.27,
            max_relative = 1e-12
        );
    }

    #[test]
    fn keys_round_trip_through_names() {
        for key in GeometryKey::ALL {
            assert_eq!(key.as_str().parse::<GeometryKey>().unwrap(), key);
        }
    }

    #[test]
    fn overrides_replace_only_named_keys() {
        let config =
            GeometryConfig::from_overrides([("foam_outer_radius", 6.0), ("lar_length", 80.0)])
                .unwrap();

        assert_eq!(config.foam_outer_radius, Inches(6.0));
        assert_eq!(config.get(GeometryKey::LarLength), Inches(80.0));
        assert_eq!(config.bore_radius, GeometryConfig::default().bore_radius);
    }

    #[test]
    fn unknown_override_key_is_rejected() {
        let err = GeometryConfig::default()
            .with_override("wall_radius", Inches(1.0))
            .unwrap_err();
        assert_eq!(err, GeometryError::UnknownKey("wall_radius".to_owned()));
    }

    #[test]
    fn deserializes_partial_mapping() {
        let json = r#"{ "vacuum_outer_radius": 0.8, "aluminum_thickness": 0.02 }"#;
        let config: GeometryConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.vacuum_outer_radius, Inches(0.8));
        assert_eq!(config.aluminum_thickness, Inches(0.02));
        assert_eq!(config.foam_outer_radius, Inches(4.5));
    }

    #[test]
    fn deserialization_rejects_unknown_fields() {
        let json = r#"{ "bore_diameter": 0.87 }"#;
        assert!(serde_json::from_str::<GeometryConfig>(json).is_err());
    }

    #[test]
    fn serializes_with_key_names() {
        let value = serde_json::to_value(GeometryConfig::default()).unwrap();
        for key in GeometryKey::ALL {
            assert!(value.get(key.as_str()).is_some(), "missing {key}");
        }
    }
}
