use std::fmt;

/// A concentric shell or film crossed by radial heat flow.
///
/// Variants are declared in radial order, bore outward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceLayer {
    /// Liquid-argon film on the bore wall.
    BoreFilm,
    /// Steel wall of the bore.
    BoreWall,
    /// Evacuated gap outside the bore wall.
    VacuumGap,
    /// Inner steel wall of the argon annulus.
    AnnulusInnerWall,
    /// Liquid-argon film on the annulus inner wall.
    AnnulusFilm,
    /// Outer steel wall of the argon annulus.
    AnnulusOuterWall,
    /// Foam insulation.
    Foam,
    /// Ambient air film on the foam.
    AirFilm,
}

impl SurfaceLayer {
    /// Every surface layer, bore outward.
    pub const ALL: [Self; 8] = [
        Self::BoreFilm,
        Self::BoreWall,
        Self::VacuumGap,
        Self::AnnulusInnerWall,
        Self::AnnulusFilm,
        Self::AnnulusOuterWall,
        Self::Foam,
        Self::AirFilm,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::BoreFilm => "bore film",
            Self::BoreWall => "bore wall",
            Self::VacuumGap => "vacuum gap",
            Self::AnnulusInnerWall => "annulus inner wall",
            Self::AnnulusFilm => "annulus film",
            Self::AnnulusOuterWall => "annulus outer wall",
            Self::Foam => "foam",
            Self::AirFilm => "air film",
        }
    }
}

/// A planar end-cap path. Each appears once at either end of the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaceLayer {
    /// Aluminum window over the bore, wetted by argon inside.
    Bore,
    /// Aluminum cap over the vacuum gap.
    VacuumGap,
    /// Foam end-cap over the jacket.
    Foam,
}

impl FaceLayer {
    /// Every face layer, bore outward.
    pub const ALL: [Self; 3] = [Self::Bore, Self::VacuumGap, Self::Foam];

    /// Number of end-caps carrying each face layer.
    pub const END_CAPS: u32 = 2;

    fn as_str(self) -> &'static str {
        match self {
            Self::Bore => "bore face",
            Self::VacuumGap => "vacuum gap face",
            Self::Foam => "foam face",
        }
    }
}

/// Any layer of the resistance network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    Surface(SurfaceLayer),
    Face(FaceLayer),
}

impl Layer {
    /// Every layer: surface layers bore outward, then face layers.
    #[must_use]
    pub fn all() -> impl Iterator<Item = Self> {
        SurfaceLayer::ALL
            .into_iter()
            .map(Self::Surface)
            .chain(FaceLayer::ALL.into_iter().map(Self::Face))
    }
}

impl From<SurfaceLayer> for Layer {
    fn from(layer: SurfaceLayer) -> Self {
        Self::Surface(layer)
    }
}

impl From<FaceLayer> for Layer {
    fn from(layer: FaceLayer) -> Self {
        Self::Face(layer)
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Surface(layer) => f.write_str(layer.as_str()),
            Self::Face(layer) => f.write_str(layer.as_str()),
        }
    }
}
